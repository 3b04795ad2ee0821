//! Interactive session: main list, detail view, and action dispatch.
//!
//! The loop owns the inventory and the current display mapping and passes
//! them down explicitly; both are replaced wholesale after any mutating
//! action. Reader and writer are generic so tests can script an entire
//! session.

use launchdeck_core::{
    control, descriptor, platform, present, ControlPlane, Entry, Inventory, Locations,
};
use std::io::{self, BufRead, Write};
use tracing::debug;

enum MainSelection {
    Quit,
    Entry(usize),
}

enum ViewOutcome {
    BackToList,
    QuitProgram,
}

/// Run the session to completion. Returns when the operator quits (from
/// either the main list or the detail view) or input reaches EOF.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    locations: &Locations,
    control_plane: &dyn ControlPlane,
) -> io::Result<()> {
    let mut inventory = Inventory::rebuild(locations, control_plane);

    loop {
        let (report, mapping) = present::render(&inventory, control_plane);
        write!(output, "{report}")?;

        let selection = loop {
            write!(output, "Select an item by number, or 'q' to quit: ")?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                break MainSelection::Quit;
            };
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") {
                break MainSelection::Quit;
            }
            match trimmed
                .parse::<usize>()
                .ok()
                .and_then(|n| mapping.entry_index(n))
            {
                Some(index) => break MainSelection::Entry(index),
                None => writeln!(output, "Invalid selection.")?,
            }
        };

        match selection {
            MainSelection::Quit => return Ok(()),
            MainSelection::Entry(index) => {
                // The mapping came from the render just above, so the index
                // is valid for this inventory.
                let entry = inventory.entries()[index].clone();
                let outcome = view_entry(
                    input,
                    output,
                    &entry,
                    locations,
                    control_plane,
                    &mut inventory,
                )?;
                match outcome {
                    ViewOutcome::BackToList => {}
                    ViewOutcome::QuitProgram => return Ok(()),
                }
            }
        }
    }
}

/// Detail view for one entry. Loads keep the operator here; Delete always
/// exits back to the list after rebuilding, whatever the outcome.
fn view_entry<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    entry: &Entry,
    locations: &Locations,
    control_plane: &dyn ControlPlane,
    inventory: &mut Inventory,
) -> io::Result<ViewOutcome> {
    loop {
        // Re-resolved on every display so the view reflects the present,
        // not the snapshot the list was built from.
        let status = control::resolve_status(control_plane, &entry.label);
        writeln!(output)?;
        writeln!(output, "Scope:  {}", entry.scope.describe())?;
        writeln!(output, "Label:  {}", entry.label)?;
        writeln!(output, "Status: {}", status.as_str())?;
        writeln!(output, "Path:   {}", entry.path.display())?;
        writeln!(output)?;
        writeln!(output, "  1) Reveal")?;
        writeln!(output, "  2) Load once")?;
        writeln!(output, "  3) Load persistent")?;
        writeln!(output, "  4) Delete")?;
        writeln!(output, "  5) Return")?;
        writeln!(output, "  6) Quit")?;

        loop {
            write!(output, "Choose an option: ")?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(ViewOutcome::QuitProgram);
            };
            match line.trim() {
                "1" => {
                    if let Err(e) = platform::reveal_in_file_browser(&entry.path) {
                        writeln!(output, "Reveal failed: {e}")?;
                    }
                }
                choice @ ("2" | "3") => {
                    let persist = choice == "3";
                    let elevated = entry.scope.requires_elevation();
                    match control_plane.load(&entry.path, elevated, persist) {
                        Ok(()) => writeln!(output, "Loaded {}.", entry.label)?,
                        Err(e) => writeln!(output, "Load failed: {e}")?,
                    }
                    *inventory = Inventory::rebuild(locations, control_plane);
                    break;
                }
                "4" => {
                    write!(output, "Are you sure? (y/N): ")?;
                    output.flush()?;
                    let answer = read_line(input)?.unwrap_or_default();
                    if !answer.trim().eq_ignore_ascii_case("y") {
                        writeln!(output, "Delete cancelled.")?;
                        continue;
                    }
                    // Advisory cleanup; its failure never blocks removal.
                    let elevated = entry.scope.requires_elevation();
                    if let Err(e) = control_plane.unload(&entry.path, elevated) {
                        debug!("Advisory unload failed for {}: {}", entry.label, e);
                    }
                    if let Err(e) = descriptor::delete(&entry.path) {
                        writeln!(output, "Delete failed: {e}")?;
                    }
                    *inventory = Inventory::rebuild(locations, control_plane);
                    return Ok(ViewOutcome::BackToList);
                }
                "5" => return Ok(ViewOutcome::BackToList),
                "6" => return Ok(ViewOutcome::QuitProgram),
                _ => writeln!(output, "Invalid choice.")?,
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

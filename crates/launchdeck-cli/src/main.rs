//! launchdeck — interactive inventory and control of launchd agents and
//! daemons.
//!
//! There are no flags or subcommands; the binary clears the screen and
//! drops straight into the interactive loop. Set `LAUNCHDECK_DEBUG=1` for
//! debug logging on stderr (stdout carries only the session itself, so it
//! stays scriptable).

mod session;

use anyhow::Result;
use console::Term;
use launchdeck_core::{Launchctl, Locations};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let log_level = if std::env::var_os("LAUNCHDECK_DEBUG").is_some() {
        Level::DEBUG
    } else {
        Level::WARN
    };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let locations = Locations::standard()?;
    debug!(
        "Scanning {:?}, {:?}, {:?}",
        locations.user_agents, locations.global_agents, locations.global_daemons
    );

    let _ = Term::stdout().clear_screen();

    let control = Launchctl;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&mut stdin.lock(), &mut stdout.lock(), &locations, &control)?;
    Ok(())
}

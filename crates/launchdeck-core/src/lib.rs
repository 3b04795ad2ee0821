//! launchdeck-core — headless library for launchd agent and daemon
//! inventory.
//!
//! This crate discovers launchd service descriptors across the standard
//! per-user and system directories, classifies each entry by scope and
//! runtime state, and renders the numbered report the interactive session
//! presents. The service manager itself sits behind the [`ControlPlane`]
//! trait; [`Launchctl`] is the real client and tests substitute canned
//! implementations.
//!
//! # Example
//!
//! ```rust,no_run
//! use launchdeck_core::{Inventory, Launchctl, Locations};
//!
//! fn main() -> launchdeck_core::Result<()> {
//!     let locations = Locations::standard()?;
//!     let control = Launchctl;
//!     let inventory = Inventory::rebuild(&locations, &control);
//!     let (report, _mapping) = launchdeck_core::render(&inventory, &control);
//!     print!("{report}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod control;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod inventory;
pub mod platform;
pub mod present;
pub mod scanner;

// Re-export commonly used types
pub use config::{DescriptorConfig, DisplayConfig, Locations};
pub use control::{is_enabled_at_boot, resolve_status, ControlPlane, Launchctl, Registration};
pub use domain::{EnablementDomain, Entry, LoadStatus, Scope};
pub use error::{LaunchdeckError, Result};
pub use inventory::Inventory;
pub use present::{render, DisplayMapping};

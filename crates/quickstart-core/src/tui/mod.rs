//! Interactive setup flow built on cliclack
//!
//! Only compiled with the `tui` feature (on by default).

#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use prompts::{run, CreateArgs};

//! Toolchain detection and subprocess execution
//!
//! This module provides:
//! - Node.js / package manager detection
//! - The `CommandRunner` seam used to drive external tools

pub mod check;
pub mod command;

pub use check::{check_node, check_package_manager, check_toolchain, RuntimeInfo};
pub use command::{CommandRunner, DryRunRunner, Invocation, SystemRunner};

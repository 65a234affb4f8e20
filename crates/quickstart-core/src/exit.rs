//! Process-wide exit handlers
//!
//! Installed once at startup and never torn down. SIGINT, SIGTERM and any
//! panic print a short notice and end the process with status 1.

use colored::Colorize;
use std::any::Any;

pub const EXIT_FAILURE: i32 = 1;

/// Register the signal handler and the panic hook
pub fn install_handlers() -> Result<(), ctrlc::Error> {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_cursor();
        if std::env::var_os("RUST_BACKTRACE").is_some() {
            default_panic(info);
        }
        eprintln!("{}", "\nSetup interrupted. Exiting...".red());
        eprintln!("{}", panic_message(info.payload()));
        eprintln!("{}", "You can re-run the command to start over.".yellow());
        std::process::exit(EXIT_FAILURE);
    }));

    // With the `termination` feature this also covers SIGTERM and SIGHUP
    ctrlc::set_handler(move || {
        restore_cursor();
        eprintln!("{}", "\nSetup interrupted. Exiting...".red());
        eprintln!("{}", "You can re-run the command to start over.".yellow());
        std::process::exit(EXIT_FAILURE);
    })
}

/// Make sure the terminal cursor is visible again
pub fn restore_cursor() {
    #[cfg(feature = "tui")]
    {
        let _ = console::Term::stderr().show_cursor();
    }
}

/// Extract the message from a panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}

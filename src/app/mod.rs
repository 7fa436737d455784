mod cli;
mod error;
mod logger;
mod orchestrator;
mod processing;

pub use cli::Cli;
pub use error::AppError;
pub use orchestrator::{run_app, run_app_with_writer};

// Macros for use by child modules of app (orchestrator, processing).
// They expand in a sibling module, where `super::logger` names `app::logger`.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

use verbose_eprintln;
use verbose_println;

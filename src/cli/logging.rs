// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

//! CLI diagnostics.
//!
//! Everything here writes to stderr: the success-path contract reserves
//! stdout for the single probability line.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbosity flag.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Macro for error messages.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), format!($($arg)*));
    }
}

/// Macro for verbose messages.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            eprintln!("{}", format!($($arg)*));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_toggle() {
        set_verbose(true);
        assert!(is_verbose());

        set_verbose(false);
        assert!(!is_verbose());
    }
}

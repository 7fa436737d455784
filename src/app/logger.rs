use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger to write to the specified file path.
/// The file is created if missing and truncated otherwise, so each run starts
/// with a fresh log.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;
    let writer = BufWriter::new(file);
    match LOGGER.lock() {
        Ok(mut logger_guard) => *logger_guard = Some(writer),
        Err(poisoned) => *poisoned.into_inner() = Some(writer),
    }
    Ok(())
}

/// Writes a verbose message to the global logger.
/// Messages are dropped while the logger is not initialized.
pub fn log_verbose_message_args(args: Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}", args).is_err() {
                // Fallback to stderr if log writing fails
                eprintln!("Fallback (log write failed): {}", args);
            }
        }
    } else {
        eprintln!("Fallback (logger mutex error): {}", args);
    }
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "ERROR: {}", args).is_err() {
                eprintln!("Fallback (log write failed) ERROR: {}", args);
            }
        }
    } else {
        eprintln!("Fallback (logger mutex error) ERROR: {}", args);
    }
}

/// Flushes buffered log output to the log file. A no-op while the logger is
/// not initialized.
pub fn flush_global_logger() -> Result<(), IoError> {
    match LOGGER.lock() {
        Ok(mut logger_guard) => match logger_guard.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        },
        Err(_) => Err(IoError::other("logger mutex poisoned")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // The only test touching the global logger, so there is no interleaving
    // with other tests writing to it.
    #[test]
    fn writes_messages_and_errors_to_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("wordpath.log");

        init_global_logger(&log_path).unwrap();
        log_verbose_message_args(format_args!("Graph has {} words", 4));
        log_verbose_error_args(format_args!("something {}", "failed"));
        flush_global_logger().unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        assert_eq!(content, "Graph has 4 words\nERROR: something failed\n");
    }
}

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use panelscan::TextractDocument;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter that overrides `-v`.
pub const LOG_ENV: &str = "PANELSCAN_LOG";

/// Install the stderr log subscriber.
///
/// Without `-v` only warnings are shown, so skipped rows and rejected
/// documents are still visible.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Open an OCR response file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or is not an OCR response.
pub fn open_document(file: &Path) -> Result<TextractDocument, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    TextractDocument::open_file(file).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

/// Serialize a JSON value and print it on stdout.
pub fn print_json(value: &serde_json::Value) -> Result<(), i32> {
    let json_str = serde_json::to_string(value).map_err(|e| {
        eprintln!("Error: failed to serialize output: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// A progress reporter that prints "Processing file N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    total: usize,
    is_tty: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter for `total` files.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for file `current` (1-indexed).
    pub fn report(&self, current: usize) {
        if self.is_tty && self.total > 1 {
            eprint!("\rProcessing file {}/{}...", current, self.total);
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty && self.total > 1 {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}

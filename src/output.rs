//! Terminal output for the vexil CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs. Status output
//! goes to stderr; stdout is reserved for SVG, JSON and completion scripts.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width of the right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Status printer for stderr.
///
/// Colour is enabled when stderr is a terminal. A quiet printer drops status
/// and info lines but still prints warnings and errors.
#[derive(Debug, Clone)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Green verb, e.g. "   Generated france (3x2, 3 elements)".
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Cyan verb for informational lines.
    pub fn info(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(CYAN, verb, message);
        }
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// Paths and other highlighted values.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// Diagnostic severity label: red for errors, yellow for warnings.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "flag", "flags")` → "1 flag".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Path relative to the working directory when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "flag", "flags"), "0 flags");
        assert_eq!(plural(1, "flag", "flags"), "1 flag");
        assert_eq!(plural(13, "element", "elements"), "13 elements");
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/public/flags/france.svg");
        assert_eq!(display_path(p), "/nonexistent/public/flags/france.svg");
    }

    #[test]
    fn test_display_path_inside_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd.join("flags.yaml")), "flags.yaml");
        assert_eq!(display_path(&cwd), ".");
    }

    #[test]
    fn test_plain_painting_without_terminal() {
        let printer = Printer {
            color: false,
            quiet: true,
        };
        assert_eq!(printer.bold("x"), "x");
        assert_eq!(printer.severity("error", true), "error");
    }
}

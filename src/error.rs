use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for vexil operations
#[derive(Error, Diagnostic, Debug)]
pub enum FlagError {
    #[error("Invalid argument: {message}")]
    #[diagnostic(code(vexil::invalid_argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported directive: {directive}")]
    #[diagnostic(code(vexil::unsupported))]
    UnsupportedDirective {
        directive: String,
        #[help]
        help: Option<String>,
    },

    #[error("Insufficient colours: {required} region(s) need colours but only {supplied} supplied")]
    #[diagnostic(
        code(vexil::colours),
        help("Pass one colour per region after -c, in directive order")
    )]
    InsufficientColours { required: usize, supplied: usize },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(vexil::write))]
    WriteError { path: PathBuf, message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(vexil::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(vexil::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(vexil::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl FlagError {
    /// Shorthand for an `InvalidArgument` without help text.
    pub fn invalid(message: impl Into<String>) -> Self {
        FlagError::InvalidArgument {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlagError>;

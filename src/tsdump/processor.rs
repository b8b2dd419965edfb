//! File processing API
//!
//! Reads a dump file, converts it and renders the tree in a registered format.
//! Every failure is reported as one of three [`ProcessingError`] outcomes, which
//! is what the command line distinguishes:
//!
//! - the source does not exist,
//! - the source holds no parseable tree,
//! - anything else.

use crate::tsdump::ast::Node;
use crate::tsdump::building::{BuildError, ConvertOptions, Converter};
use crate::tsdump::formats::{FormatError, FormatRegistry};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    SourceNotFound(String),
    EmptyTree(String),
    Unexpected(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::SourceNotFound(path) => write!(f, "could not find {}", path),
            ProcessingError::EmptyTree(path) => write!(f, "no parseable tree in {}", path),
            ProcessingError::Unexpected(msg) => write!(f, "an unexpected error occurred: {}", msg),
        }
    }
}

impl From<FormatError> for ProcessingError {
    fn from(err: FormatError) -> Self {
        ProcessingError::Unexpected(err.to_string())
    }
}

/// What to convert with and how to render the result
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingOptions {
    pub convert: ConvertOptions,
    pub format: String,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            convert: ConvertOptions::default(),
            format: "json".to_string(),
        }
    }
}

/// Read and convert a dump file.
pub fn load_tree<P: AsRef<Path>>(
    file_path: P,
    options: &ConvertOptions,
) -> Result<Node, ProcessingError> {
    let file_path = file_path.as_ref();
    let path_text = file_path.display().to_string();

    let content = fs::read_to_string(file_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ProcessingError::SourceNotFound(path_text.clone()),
        _ => ProcessingError::Unexpected(e.to_string()),
    })?;
    debug!(path = %path_text, bytes = content.len(), "read dump");

    Converter::new(*options)
        .convert(&content)
        .map_err(|e| match e {
            BuildError::EmptyTree => ProcessingError::EmptyTree(path_text.clone()),
            other => ProcessingError::Unexpected(other.to_string()),
        })
}

/// Process a dump file and render it in the requested format
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    let registry = FormatRegistry::with_defaults();
    if !registry.has(&options.format) {
        return Err(FormatError::FormatNotFound(options.format.clone()).into());
    }

    let tree = load_tree(file_path, &options.convert)?;
    Ok(registry.serialize(&tree, &options.format)?)
}

/// Write rendered output to a sink file, ending it with a newline.
pub fn write_output<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ProcessingError> {
    let mut contents = contents.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(path.as_ref(), contents).map_err(|e| ProcessingError::Unexpected(e.to_string()))
}

//! Named output formats
//!
//! A rendering of a [`Node`] tree is picked by name at the command line, so
//! every renderer sits behind [`Formatter`] and is stored in a
//! [`FormatRegistry`] keyed by that name. Names iterate in sorted order.

use crate::tsdump::ast::Node;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter is registered under this name
    FormatNotFound(String),
    /// The backing serializer failed
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders a whole tree to text.
pub trait Formatter: Send + Sync {
    /// Key used by `--format` and [`FormatRegistry::get`]
    fn name(&self) -> &str;

    fn serialize(&self, root: &Node) -> Result<String, FormatError>;

    /// One line shown by `--list-formats`
    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with nothing in it. See [`FormatRegistry::with_defaults`].
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// Later registrations under an existing name win.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, root: &Node, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(root)
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// Name and description of every formatter, in name order
    pub fn describe_formats(&self) -> Vec<(String, String)> {
        self.formatters
            .iter()
            .map(|(name, f)| (name.clone(), f.description().to_string()))
            .collect()
    }

    /// json, json-compact, yaml, treeviz and dump
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter::pretty());
        registry.register(super::JsonFormatter::compact());
        registry.register(super::YamlFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::DumpFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

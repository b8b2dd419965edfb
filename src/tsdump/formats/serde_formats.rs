//! Structured-data formats backed by serde
//!
//! All three render the same shape:
//! `{"type", "name"?, "row_start"?, "row_end"?, "col_start"?, "col_end"?, "children"}`.

use super::registry::{FormatError, Formatter};
use crate::tsdump::ast::Node;

/// JSON output, pretty (two-space indent) or on a single line
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        if self.pretty {
            "json"
        } else {
            "json-compact"
        }
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(root)
        } else {
            serde_json::to_string(root)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        if self.pretty {
            "Indented JSON tree"
        } else {
            "Single-line JSON tree"
        }
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        serde_yaml::to_string(root).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML tree"
    }
}

//! Output formats for recovered trees

pub mod dump;
pub mod registry;
pub mod serde_formats;
pub mod treeviz;

pub use dump::{to_dump_str, DumpFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};

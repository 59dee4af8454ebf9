// PyO3 Bindings Module
//
// Python bindings for the Command extractor. Report types are wrapped in
// read-only pyclasses; batch entry points release the GIL.

mod api;
mod report;

// Re-export for lib.rs
pub use api::{collect_command_types, extract_commands, extract_files_batch, hash_content};
pub use report::{PyCommandReport, PyFileReport};

// binder-lens - recover the Commands wired to UI binders in Java sources
//
// Rust library with an optional PyO3 extension module (feature `python`).
// Parsing is tree-sitter; the extraction heuristics live in `extractors::commands`.

pub mod error;
pub mod extractors;
pub mod language;
pub mod utils;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use error::{ExtractorError, Result};
pub use extractors::{
    CommandExtractor, CommandMatch, CommandReport, CommandTypeSet, ExtractionResult,
    ExtractorManager, FileReport, MatchKind, NotFoundReason, ScanConfig, ScanSummary, SiteKind,
    WorkspaceScan,
};
pub use language::{detect_language_from_extension, parse_java};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// binder_lens Python module
///
/// Command extraction for Java binder call sites.
#[cfg(feature = "python")]
#[pymodule]
fn binder_lens(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::extract_commands, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::extract_files_batch, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::collect_command_types, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::hash_content, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyCommandReport>()?;
    m.add_class::<bindings::PyFileReport>()?;

    Ok(())
}

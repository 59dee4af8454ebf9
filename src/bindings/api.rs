// API Functions - PyO3-exposed functions for Python

use super::PyFileReport;
use crate::extractors::{CommandTypeSet, ExtractorManager, ScanConfig};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Extract the Commands supplied at every binder site of one Java file
///
/// Args:
///     content (str): Java source
///     file_path (str): Path used for language detection and report ids
///     command_types (list[str]): Simple names of the known Command classes
///
/// Returns:
///     FileReport: One report per binder site (plus constructor-scope scans)
///
/// Raises:
///     ValueError: If the file is not Java or cannot be parsed
#[pyfunction]
#[pyo3(signature = (content, file_path, command_types))]
pub fn extract_commands(
    content: &str,
    file_path: &str,
    command_types: Vec<String>,
) -> PyResult<PyFileReport> {
    let manager = ExtractorManager::new();
    let types = CommandTypeSet::new(command_types);

    let report = manager
        .extract_file(file_path, content, &types)
        .map_err(|e| PyValueError::new_err(format!("Extraction failed: {}", e)))?;

    Ok(PyFileReport::from_file_report(report))
}

/// Extract many files in parallel
///
/// Releases the GIL while Rayon works through the batch. Files that fail come
/// back as empty reports, in the same position as their input.
///
/// Args:
///     files (list[tuple[str, str]]): (file_path, content) pairs
///     command_types (list[str]): Simple names of the known Command classes
///
/// Returns:
///     list[FileReport]: Reports in input order
#[pyfunction]
#[pyo3(signature = (files, command_types))]
pub fn extract_files_batch(
    py: Python<'_>,
    files: Vec<(String, String)>,
    command_types: Vec<String>,
) -> Vec<PyFileReport> {
    let reports = py.detach(move || {
        let manager = ExtractorManager::new();
        let types = CommandTypeSet::new(command_types);
        manager.extract_files_batch(&files, &types)
    });

    reports
        .into_iter()
        .map(PyFileReport::from_file_report)
        .collect()
}

/// Collect Command class names declared across a set of files
///
/// Args:
///     files (list[tuple[str, str]]): (file_path, content) pairs
///     markers (list[str] | None): Supertypes marking a Command; defaults to
///         ["Command", "CommandImpl", "AnonCmd"]
///
/// Returns:
///     list[str]: Sorted simple names, markers included
#[pyfunction]
#[pyo3(signature = (files, markers=None))]
pub fn collect_command_types(
    py: Python<'_>,
    files: Vec<(String, String)>,
    markers: Option<Vec<String>>,
) -> Vec<String> {
    py.detach(move || {
        let mut config = ScanConfig::default();
        if let Some(markers) = markers {
            config.command_markers = markers;
        }
        ExtractorManager::with_config(config)
            .collect_command_types(&files)
            .iter()
            .map(str::to_string)
            .collect()
    })
}

/// Compute blake3 hash of content string
///
/// Same digest as `FileReport.content_hash`.
///
/// Returns:
///     str: 64-character hex digest of blake3 hash
#[pyfunction]
pub fn hash_content(content: &str) -> String {
    let hash = blake3::hash(content.as_bytes());
    hash.to_hex().to_string()
}

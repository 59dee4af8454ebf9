// PyCommandReport / PyFileReport - PyO3 wrappers for extraction reports

use crate::extractors::base::{CommandReport, FileReport};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python-accessible CommandReport wrapper
///
/// One extraction attempt at a binder site or class. `command` fields are None
/// when nothing was recovered; `reason` then says why.
#[pyclass(name = "CommandReport")]
pub struct PyCommandReport {
    inner: CommandReport,
}

impl PyCommandReport {
    pub fn from_report(report: CommandReport) -> Self {
        PyCommandReport { inner: report }
    }
}

#[pymethods]
impl PyCommandReport {
    #[getter]
    fn id(&self) -> String {
        self.inner.id.clone()
    }

    #[getter]
    fn file_path(&self) -> String {
        self.inner.file_path.clone()
    }

    #[getter]
    fn site_kind(&self) -> String {
        self.inner.site_kind.to_string()
    }

    #[getter]
    fn site_name(&self) -> String {
        self.inner.site_name.clone()
    }

    #[getter]
    fn site_line(&self) -> u32 {
        self.inner.site_line
    }

    #[getter]
    fn found(&self) -> bool {
        self.inner.command.is_some()
    }

    /// "constructor_call", "method_reference" or "block"
    #[getter]
    fn match_kind(&self) -> Option<String> {
        self.inner.command.as_ref().map(|c| c.kind.to_string())
    }

    #[getter]
    fn text(&self) -> Option<String> {
        self.inner.command.as_ref().map(|c| c.text.clone())
    }

    #[getter]
    fn start_line(&self) -> Option<u32> {
        self.inner.command.as_ref().map(|c| c.start_line)
    }

    #[getter]
    fn end_line(&self) -> Option<u32> {
        self.inner.command.as_ref().map(|c| c.end_line)
    }

    #[getter]
    fn start_byte(&self) -> Option<u32> {
        self.inner.command.as_ref().map(|c| c.start_byte)
    }

    #[getter]
    fn end_byte(&self) -> Option<u32> {
        self.inner.command.as_ref().map(|c| c.end_byte)
    }

    #[getter]
    fn code_context(&self) -> Option<String> {
        self.inner
            .command
            .as_ref()
            .and_then(|c| c.code_context.clone())
    }

    #[getter]
    fn reason(&self) -> Option<String> {
        self.inner.reason.clone()
    }

    fn __repr__(&self) -> String {
        match &self.inner.command {
            Some(command) => format!(
                "CommandReport(site='{}', line={}, {}='{}')",
                self.inner.site_name, self.inner.site_line, command.kind, command.text
            ),
            None => format!(
                "CommandReport(site='{}', line={}, reason='{}')",
                self.inner.site_name,
                self.inner.site_line,
                self.inner.reason.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Python-accessible FileReport wrapper
#[pyclass(name = "FileReport")]
pub struct PyFileReport {
    inner: FileReport,
}

impl PyFileReport {
    pub fn from_file_report(report: FileReport) -> Self {
        PyFileReport { inner: report }
    }
}

#[pymethods]
impl PyFileReport {
    #[getter]
    fn file_path(&self) -> String {
        self.inner.file_path.clone()
    }

    #[getter]
    fn language(&self) -> String {
        self.inner.language.clone()
    }

    #[getter]
    fn content_hash(&self) -> String {
        self.inner.content_hash.clone()
    }

    #[getter]
    fn reports(&self) -> Vec<PyCommandReport> {
        self.inner
            .reports
            .iter()
            .map(|r| PyCommandReport::from_report(r.clone()))
            .collect()
    }

    /// Pretty-printed JSON of the whole report
    fn to_json(&self) -> PyResult<String> {
        self.inner
            .to_json()
            .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
    }

    fn __len__(&self) -> usize {
        self.inner.reports.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "FileReport(file_path='{}', reports={}, found={})",
            self.inner.file_path,
            self.inner.reports.len(),
            self.inner.found().count()
        )
    }
}

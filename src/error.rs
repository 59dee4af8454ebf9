//! Fatal errors
//!
//! Heuristic misses are never errors; they come back as
//! `ExtractionResult::NotFound`. `ExtractorError` only covers conditions where
//! there is no tree to analyse at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("No extractor available for file: {0}")]
    UnsupportedFile(String),

    #[error("Failed to set parser language: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Failed to parse file: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;

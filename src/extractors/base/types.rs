// Extraction result and report types
//
// `ExtractionResult` is what the heuristics return for a single call site.
// `CommandReport`/`FileReport` are the owned, serializable records the manager
// builds from those results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for code context extraction
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Number of lines to show before the match
    pub lines_before: usize,
    /// Number of lines to show after the match
    pub lines_after: usize,
    /// Maximum line length to display (longer lines get truncated)
    pub max_line_length: usize,
    /// Whether to show line numbers in context
    pub show_line_numbers: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            lines_before: 2,
            lines_after: 2,
            max_line_length: 120,
            show_line_numbers: true,
        }
    }
}

/// Why an extraction attempt produced no Command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    MalformedChain,
    NoSupplierArgument,
    UnrecognizedSupplierKind,
    NoCommandConstructor,
    NoEnclosingMethod,
    VariableNotResolved,
    MethodReferenceNotCommand,
    NoBlockInAnonymousBinder,
    NoConstructorLambda,
    AmbiguousConstructorLambda(usize),
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::MalformedChain => write!(f, "malformed chain"),
            NotFoundReason::NoSupplierArgument => write!(f, "no supplier argument"),
            NotFoundReason::UnrecognizedSupplierKind => write!(f, "unrecognized supplier kind"),
            NotFoundReason::NoCommandConstructor => write!(f, "no command constructor in lambda"),
            NotFoundReason::NoEnclosingMethod => write!(f, "no enclosing method"),
            NotFoundReason::VariableNotResolved => write!(f, "variable not resolved to lambda"),
            NotFoundReason::MethodReferenceNotCommand => {
                write!(f, "method reference not a command")
            }
            NotFoundReason::NoBlockInAnonymousBinder => write!(f, "no block in anonymous binder"),
            NotFoundReason::NoConstructorLambda => write!(f, "unable to identify command"),
            NotFoundReason::AmbiguousConstructorLambda(count) => {
                write!(f, "ambiguous command in constructors ({} candidates)", count)
            }
        }
    }
}

/// Outcome of one extraction call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionResult<N> {
    /// `new SomeCommand(...)` inside the supplier
    ConstructorCallMatch(N),
    /// `SomeCommand::new` or another method reference naming a Command type
    MethodReferenceMatch(N),
    /// Raw block handed to the anonymous binder
    BlockMatch(N),
    NotFound(NotFoundReason),
}

impl<N: Copy> ExtractionResult<N> {
    /// Matched node, if any
    pub fn node(&self) -> Option<N> {
        match self {
            ExtractionResult::ConstructorCallMatch(node)
            | ExtractionResult::MethodReferenceMatch(node)
            | ExtractionResult::BlockMatch(node) => Some(*node),
            ExtractionResult::NotFound(_) => None,
        }
    }

    pub fn match_kind(&self) -> Option<MatchKind> {
        match self {
            ExtractionResult::ConstructorCallMatch(_) => Some(MatchKind::ConstructorCall),
            ExtractionResult::MethodReferenceMatch(_) => Some(MatchKind::MethodReference),
            ExtractionResult::BlockMatch(_) => Some(MatchKind::Block),
            ExtractionResult::NotFound(_) => None,
        }
    }

    pub fn reason(&self) -> Option<NotFoundReason> {
        match self {
            ExtractionResult::NotFound(reason) => Some(*reason),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, ExtractionResult::NotFound(_))
    }

    pub fn map<M, F: FnOnce(N) -> M>(self, f: F) -> ExtractionResult<M> {
        match self {
            ExtractionResult::ConstructorCallMatch(node) => {
                ExtractionResult::ConstructorCallMatch(f(node))
            }
            ExtractionResult::MethodReferenceMatch(node) => {
                ExtractionResult::MethodReferenceMatch(f(node))
            }
            ExtractionResult::BlockMatch(node) => ExtractionResult::BlockMatch(f(node)),
            ExtractionResult::NotFound(reason) => ExtractionResult::NotFound(reason),
        }
    }
}

/// Shape of a reported Command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    ConstructorCall,
    MethodReference,
    Block,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::ConstructorCall => write!(f, "constructor_call"),
            MatchKind::MethodReference => write!(f, "method_reference"),
            MatchKind::Block => write!(f, "block"),
        }
    }
}

/// Where an extraction started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteKind {
    /// A binder invocation chain
    Binder,
    /// Class-level scan of constructor lambdas
    ConstructorScope,
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteKind::Binder => write!(f, "binder"),
            SiteKind::ConstructorScope => write!(f, "constructor_scope"),
        }
    }
}

/// A recovered Command, detached from the tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandMatch {
    pub kind: MatchKind,
    /// Source text of the matched node
    pub text: String,
    /// Start line number (1-based)
    pub start_line: u32,
    /// Start column number (0-based)
    pub start_column: u32,
    /// End line number (1-based)
    pub end_line: u32,
    /// End column number (0-based)
    pub end_column: u32,
    pub start_byte: u32,
    pub end_byte: u32,
    /// Lines around the match, formatted per `ContextConfig`
    pub code_context: Option<String>,
}

/// One extraction attempt, as recorded for a file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandReport {
    /// MD5 of file path, site name and position
    pub id: String,
    pub file_path: String,
    pub site_kind: SiteKind,
    /// Binder callee name, or class name for constructor-scope scans
    pub site_name: String,
    /// Line of the site (1-based)
    pub site_line: u32,
    pub command: Option<CommandMatch>,
    /// Set when `command` is None
    pub reason: Option<String>,
}

/// Everything extracted from one file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileReport {
    pub file_path: String,
    /// Language the file was analysed as; empty when it was not analysed
    pub language: String,
    /// blake3 hex digest of the analysed content
    pub content_hash: String,
    pub reports: Vec<CommandReport>,
}

impl FileReport {
    pub fn empty(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            ..Default::default()
        }
    }

    pub fn found(&self) -> impl Iterator<Item = &CommandReport> {
        self.reports.iter().filter(|r| r.command.is_some())
    }

    pub fn not_found(&self) -> impl Iterator<Item = &CommandReport> {
        self.reports.iter().filter(|r| r.command.is_none())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Aggregate counts over a batch of file reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub files: usize,
    pub sites: usize,
    pub commands: usize,
    pub unresolved: usize,
}

impl ScanSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |mut acc, file| {
            acc.files += 1;
            acc.sites += file.reports.len();
            acc.commands += file.found().count();
            acc.unresolved += file.not_found().count();
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_messages() {
        assert_eq!(NotFoundReason::MalformedChain.to_string(), "malformed chain");
        assert_eq!(
            NotFoundReason::UnrecognizedSupplierKind.to_string(),
            "unrecognized supplier kind"
        );
        assert_eq!(
            NotFoundReason::AmbiguousConstructorLambda(2).to_string(),
            "ambiguous command in constructors (2 candidates)"
        );
    }

    #[test]
    fn test_result_accessors() {
        let found: ExtractionResult<u8> = ExtractionResult::BlockMatch(7);
        assert_eq!(found.node(), Some(7));
        assert_eq!(found.match_kind(), Some(MatchKind::Block));
        assert!(found.is_found());

        let missing: ExtractionResult<u8> =
            ExtractionResult::NotFound(NotFoundReason::NoSupplierArgument);
        assert_eq!(missing.node(), None);
        assert_eq!(missing.reason(), Some(NotFoundReason::NoSupplierArgument));
        assert!(!missing.is_found());
    }

    #[test]
    fn test_summary_counts() {
        let report = |command: Option<CommandMatch>| CommandReport {
            id: "x".to_string(),
            file_path: "A.java".to_string(),
            site_kind: SiteKind::Binder,
            site_name: "buttonBinder".to_string(),
            site_line: 1,
            reason: command.is_none().then(|| "no supplier argument".to_string()),
            command,
        };
        let matched = CommandMatch {
            kind: MatchKind::ConstructorCall,
            text: "new Save()".to_string(),
            start_line: 1,
            start_column: 0,
            end_line: 1,
            end_column: 10,
            start_byte: 0,
            end_byte: 10,
            code_context: None,
        };
        let files = vec![
            FileReport {
                file_path: "A.java".to_string(),
                language: "java".to_string(),
                content_hash: String::new(),
                reports: vec![report(Some(matched)), report(None)],
            },
            FileReport::empty("B.java"),
        ];

        let summary = ScanSummary::from_reports(&files);
        assert_eq!(
            summary,
            ScanSummary {
                files: 2,
                sites: 2,
                commands: 1,
                unresolved: 1
            }
        );
    }
}

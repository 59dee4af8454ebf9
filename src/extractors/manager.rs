//! ExtractorManager - Public API for Command extraction
//!
//! Parses Java sources, enumerates binder sites, runs the Command extractor on
//! each and turns the outcomes into owned `FileReport`s. Batch and workspace
//! entry points fan out over rayon.

use crate::error::ExtractorError;
use crate::extractors::base::tree_methods::{
    both, collect_all, find_first, in_constructor_of, kind_is,
};
use crate::extractors::base::{
    BaseExtractor, CommandReport, ContextConfig, FileReport, NodeKind, ScanSummary, SiteKind,
    SourceNode,
};
use crate::extractors::commands::{CommandExtractor, CommandTypeSet};
use crate::extractors::java::binders::DEFAULT_BINDER_PATTERN;
use crate::extractors::java::{
    declared_types, find_binder_sites, resolve_command_types, BinderSite, JavaNode,
};
use crate::language::{detect_language, parse_java};
use crate::utils::file_utils::{discover_source_files, read_file_content};
use crate::utils::ignore::{is_ignored_by_pattern, load_ignore_patterns};
use crate::utils::paths::to_relative_unix_style;
use anyhow::Context;
use rayon::prelude::*;
use regex::Regex;
use std::path::Path;
use tracing::{debug, info, warn};

/// Supertype names that mark a class as a Command
pub const DEFAULT_COMMAND_MARKERS: &[&str] = &["Command", "CommandImpl", "AnonCmd"];

/// Scan behaviour shared by every file a manager processes
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Recognises binder callee names (innermost call of a chain)
    pub binder_pattern: Regex,
    /// Run the constructor-scope fallback on classes without binder sites
    pub scan_constructors: bool,
    /// Seeds of the Command type fixpoint
    pub command_markers: Vec<String>,
    /// Code context attached to each match
    pub context: ContextConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            binder_pattern: (*DEFAULT_BINDER_PATTERN).clone(),
            scan_constructors: true,
            command_markers: DEFAULT_COMMAND_MARKERS
                .iter()
                .map(|marker| marker.to_string())
                .collect(),
            context: ContextConfig::default(),
        }
    }
}

/// Result of scanning a workspace directory
#[derive(Debug, Clone)]
pub struct WorkspaceScan {
    pub command_types: CommandTypeSet,
    /// One report per discovered file, sorted by relative path
    pub reports: Vec<FileReport>,
    pub summary: ScanSummary,
}

/// Manager for Command extraction over Java sources
#[derive(Debug, Clone, Default)]
pub struct ExtractorManager {
    config: ScanConfig,
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec!["java"]
    }

    /// Command types declared across `files` (`(path, content)` pairs).
    ///
    /// Files that fail to parse contribute nothing.
    pub fn collect_command_types(&self, files: &[(String, String)]) -> CommandTypeSet {
        let declarations: Vec<_> = files
            .par_iter()
            .flat_map_iter(|(path, content)| match parse_java(content, path) {
                Ok(tree) => declared_types(JavaNode::root(&tree, content)),
                Err(e) => {
                    warn!("Skipping {} while collecting Command types: {}", path, e);
                    Vec::new()
                }
            })
            .collect();

        let types = resolve_command_types(&declarations, &self.config.command_markers);
        debug!(
            "Collected {} Command types from {} type declarations",
            types.len(),
            declarations.len()
        );
        types
    }

    /// Binder sites under `root`, using the configured binder pattern
    pub fn find_binder_sites<'tree>(&self, root: JavaNode<'tree>) -> Vec<BinderSite<'tree>> {
        find_binder_sites(root, &self.config.binder_pattern)
    }

    /// Extract one report per binder site (and per binder-free class with
    /// constructor lambdas) from a single file
    pub fn extract_file(
        &self,
        file_path: &str,
        content: &str,
        types: &CommandTypeSet,
    ) -> Result<FileReport, ExtractorError> {
        let language = detect_language(Path::new(file_path))
            .ok_or_else(|| ExtractorError::UnsupportedFile(file_path.to_string()))?;

        let tree = parse_java(content, file_path)?;
        let root = JavaNode::root(&tree, content);

        let mut base = BaseExtractor::new(
            language.to_string(),
            file_path.to_string(),
            content.to_string(),
        );
        base.set_context_config(self.config.context.clone());
        let extractor = CommandExtractor::new(types);

        let sites = self.find_binder_sites(root);
        let mut reports: Vec<CommandReport> = sites
            .iter()
            .map(|site| {
                let result = extractor.extract_from_invocation(site.invocation);
                base.create_report(
                    &site.invocation.ts_node(),
                    SiteKind::Binder,
                    site.binder_name(),
                    result.map(|node| node.ts_node()),
                )
            })
            .collect();

        if self.config.scan_constructors {
            for class in self.constructor_scan_targets(root, &sites) {
                let result = extractor.extract_from_class(class);
                reports.push(base.create_report(
                    &class.ts_node(),
                    SiteKind::ConstructorScope,
                    class.name().unwrap_or_default(),
                    result.map(|node| node.ts_node()),
                ));
            }
            reports.sort_by_key(|report| report.site_line);
        }

        debug!(
            "Extracted {} reports ({} binder sites) from {}",
            reports.len(),
            sites.len(),
            base.file_path
        );

        Ok(FileReport {
            file_path: base.file_path.clone(),
            language: base.language.clone(),
            content_hash: blake3::hash(content.as_bytes()).to_hex().to_string(),
            reports,
        })
    }

    /// Classes without any binder site that declare a lambda in one of their own constructors
    fn constructor_scan_targets<'tree>(
        &self,
        root: JavaNode<'tree>,
        sites: &[BinderSite<'tree>],
    ) -> Vec<JavaNode<'tree>> {
        collect_all(root, kind_is::<JavaNode>(NodeKind::ClassDeclaration))
            .into_iter()
            .filter(|class| !sites.iter().any(|site| class.contains(&site.invocation)))
            .filter(|class| {
                find_first(
                    *class,
                    both::<JavaNode, _, _>(
                        kind_is::<JavaNode>(NodeKind::Lambda),
                        in_constructor_of::<JavaNode>(*class),
                    ),
                )
                .is_some()
            })
            .collect()
    }

    /// Extract many files in parallel, preserving input order.
    ///
    /// A file that cannot be processed yields an empty report.
    pub fn extract_files_batch(
        &self,
        files: &[(String, String)],
        types: &CommandTypeSet,
    ) -> Vec<FileReport> {
        files
            .par_iter()
            .map(|(path, content)| {
                self.extract_file(path, content, types).unwrap_or_else(|e| {
                    warn!("Extraction failed for {}: {}", path, e);
                    FileReport::empty(path)
                })
            })
            .collect()
    }

    /// Discover, read and extract every Java file under `root`.
    ///
    /// Command types are collected over the whole workspace before any file
    /// is extracted, so binders may use Commands declared elsewhere.
    pub fn scan_workspace(&self, root: &Path) -> anyhow::Result<WorkspaceScan> {
        let patterns = load_ignore_patterns(root)?;
        let paths = discover_source_files(root)
            .with_context(|| format!("Failed to discover sources under {}", root.display()))?;

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let relative = to_relative_unix_style(&path, root)?;
            if is_ignored_by_pattern(Path::new(&relative), &patterns) {
                debug!("Ignoring {}", relative);
                continue;
            }
            match read_file_content(&path) {
                Ok(content) => files.push((relative, content)),
                Err(e) => warn!("Skipping unreadable file {}: {}", relative, e),
            }
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));

        let command_types = self.collect_command_types(&files);
        let reports = self.extract_files_batch(&files, &command_types);
        let summary = ScanSummary::from_reports(&reports);

        info!(
            "Scanned {} files: {} sites, {} commands, {} unresolved",
            summary.files, summary.sites, summary.commands, summary.unresolved
        );

        Ok(WorkspaceScan {
            command_types,
            reports,
            summary,
        })
    }
}

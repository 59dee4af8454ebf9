// BaseExtractor: per-file state shared by report builders
//
// Holds the file path and content a tree was parsed from, and turns matched
// tree-sitter nodes into owned CommandMatch/CommandReport records.

use tree_sitter::Node;

use super::types::{
    CommandMatch, CommandReport, ContextConfig, ExtractionResult, MatchKind, SiteKind,
};

/// Per-file helper for building reports from tree-sitter nodes
pub struct BaseExtractor {
    pub language: String,
    pub file_path: String,
    pub content: String,
    pub context_config: ContextConfig,
}

impl BaseExtractor {
    /// `file_path` is stored Unix-style; callers pass workspace-relative paths
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            language,
            file_path: file_path.replace('\\', "/"),
            content,
            context_config: ContextConfig::default(),
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Generate ID for a report (MD5 hash)
    pub fn generate_id(&self, name: &str, line: u32, column: u32) -> String {
        let input = format!("{}:{}:{}:{}", self.file_path, name, line, column);
        let digest = md5::compute(input.as_bytes());
        format!("{:x}", digest)
    }

    /// Extract code context around a match using configurable parameters
    pub(crate) fn extract_code_context(&self, start_row: usize, end_row: usize) -> Option<String> {
        let lines: Vec<&str> = self.content.lines().collect();

        if lines.is_empty() || start_row >= lines.len() {
            return None;
        }

        let context_start = start_row.saturating_sub(self.context_config.lines_before);
        let context_end = std::cmp::min(lines.len() - 1, end_row + self.context_config.lines_after);

        let mut context_lines = Vec::new();
        for (i, line) in lines
            .iter()
            .enumerate()
            .take(context_end + 1)
            .skip(context_start)
        {
            let mut line_content = line.to_string();

            // Truncate long lines, respecting UTF-8 boundaries
            if line_content.len() > self.context_config.max_line_length {
                let mut truncate_len = self.context_config.max_line_length.saturating_sub(3);
                while truncate_len > 0 && !line_content.is_char_boundary(truncate_len) {
                    truncate_len -= 1;
                }
                line_content.truncate(truncate_len);
                line_content.push_str("...");
            }

            let in_match = i >= start_row && i <= end_row;
            let marker = if in_match { "  ➤ " } else { "    " };
            let formatted_line = if self.context_config.show_line_numbers {
                format!("{}{:3}: {}", marker, i + 1, line_content)
            } else {
                format!("{}{}", marker, line_content)
            };

            context_lines.push(formatted_line);
        }

        Some(context_lines.join("\n"))
    }

    pub fn set_context_config(&mut self, config: ContextConfig) {
        self.context_config = config;
    }

    /// Detach a matched node into an owned CommandMatch
    pub fn create_match(&self, node: &Node, kind: MatchKind) -> CommandMatch {
        let start_pos = node.start_position();
        let end_pos = node.end_position();

        CommandMatch {
            kind,
            text: self.get_node_text(node),
            start_line: (start_pos.row + 1) as u32,
            start_column: start_pos.column as u32,
            end_line: (end_pos.row + 1) as u32,
            end_column: end_pos.column as u32,
            start_byte: node.start_byte() as u32,
            end_byte: node.end_byte() as u32,
            code_context: self.extract_code_context(start_pos.row, end_pos.row),
        }
    }

    /// Build the report for one site from its extraction result
    pub fn create_report<'a>(
        &self,
        site: &Node,
        site_kind: SiteKind,
        site_name: String,
        result: ExtractionResult<Node<'a>>,
    ) -> CommandReport {
        let pos = site.start_position();
        let line = (pos.row + 1) as u32;
        let id = self.generate_id(&site_name, line, pos.column as u32);

        let command = match (result.node(), result.match_kind()) {
            (Some(node), Some(kind)) => Some(self.create_match(&node, kind)),
            _ => None,
        };

        CommandReport {
            id,
            file_path: self.file_path.clone(),
            site_kind,
            site_name,
            site_line: line,
            command,
            reason: result.reason().map(|r| r.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(content: &str) -> BaseExtractor {
        BaseExtractor::new(
            "java".to_string(),
            "src\\ui\\Panel.java".to_string(),
            content.to_string(),
        )
    }

    #[test]
    fn test_path_is_unix_style() {
        assert_eq!(base("").file_path, "src/ui/Panel.java");
    }

    #[test]
    fn test_generate_id_is_stable() {
        let extractor = base("");
        let a = extractor.generate_id("buttonBinder", 3, 8);
        let b = extractor.generate_id("buttonBinder", 3, 8);
        let c = extractor.generate_id("buttonBinder", 4, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_code_context_marks_match_lines() {
        let extractor = base("a\nb\nc\nd\ne\nf");
        let context = extractor.extract_code_context(2, 2).unwrap();
        let lines: Vec<&str> = context.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "      1: a");
        assert_eq!(lines[2], "  ➤   3: c");
        assert_eq!(lines[4], "      5: e");
    }

    #[test]
    fn test_code_context_out_of_range() {
        let extractor = base("one line");
        assert!(extractor.extract_code_context(5, 5).is_none());
    }
}

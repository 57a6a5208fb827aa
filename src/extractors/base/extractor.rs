// BaseExtractor implementation
//
// Owns the text of one compilation unit and answers the questions every
// declaration extractor asks: what does this node say, and which comments
// belong to it.

use tracing::trace;
use tree_sitter::Node;

/// Per-unit source holder shared by the Go extractors
pub struct BaseExtractor {
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        trace!("BaseExtractor for '{}' ({} bytes)", file_path, content.len());
        Self { file_path, content }
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

    /// Lead comment block of a node, one raw comment token per entry
    ///
    /// The block must end on the line right above the node and may not be
    /// separated from it, or internally, by a blank line. A comment sharing a
    /// line with the preceding token is that token's line comment and stops
    /// the block.
    pub fn find_doc_comment(&self, node: &Node) -> Vec<String> {
        let mut comments = Vec::new();
        let node_row = node.start_position().row;
        let mut next_row = node_row;

        let mut current = node.prev_sibling();
        while let Some(sibling) = current {
            if !is_comment(&sibling) || is_line_comment(&sibling) {
                break;
            }

            let end_row = sibling.end_position().row;
            let adjacent = if next_row == node_row {
                end_row + 1 == node_row
            } else {
                end_row + 1 >= next_row
            };
            if !adjacent {
                break;
            }

            comments.push(self.get_node_text(&sibling));
            next_row = sibling.start_position().row;
            current = sibling.prev_sibling();
        }

        // Reverse to get original order (top to bottom)
        comments.reverse();
        comments
    }

    /// Comments that follow a node on the line where it ends
    pub fn find_line_comment(&self, node: &Node) -> Vec<String> {
        let row = node.end_position().row;
        let mut comments = Vec::new();

        let mut current = node.next_sibling();
        while let Some(sibling) = current {
            if !is_comment(&sibling) || sibling.start_position().row != row {
                break;
            }
            comments.push(self.get_node_text(&sibling));
            current = sibling.next_sibling();
        }

        comments
    }
}

fn is_comment(node: &Node) -> bool {
    node.kind() == "comment"
}

/// A comment that starts on the line where the previous token ends
fn is_line_comment(comment: &Node) -> bool {
    comment
        .prev_sibling()
        .filter(|prev| !is_comment(prev))
        .is_some_and(|prev| prev.end_position().row == comment.start_position().row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::new_parser;

    fn with_first<F>(source: &str, kind: &str, check: F)
    where
        F: FnOnce(&BaseExtractor, Node),
    {
        let mut parser = new_parser().unwrap();
        let tree = parser.parse(source, None).unwrap();
        let base = BaseExtractor::new("test.go".to_string(), source.to_string());
        let node = base
            .find_nodes_by_type(&tree.root_node(), kind)
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("no {} node in source", kind));
        check(&base, node);
    }

    #[test]
    fn test_doc_comment_block_in_order() {
        let source = "package p\n\n// first\n// second\ntype A int\n";
        with_first(source, "type_declaration", |base, node| {
            assert_eq!(base.find_doc_comment(&node), vec!["// first", "// second"]);
        });
    }

    #[test]
    fn test_doc_comment_stops_at_blank_line() {
        let source = "package p\n\n// detached\n\n// attached\ntype A int\n";
        with_first(source, "type_declaration", |base, node| {
            assert_eq!(base.find_doc_comment(&node), vec!["// attached"]);
        });
    }

    #[test]
    fn test_doc_comment_requires_adjacent_line() {
        let source = "package p\n\n// too far\n\ntype A int\n";
        with_first(source, "type_declaration", |base, node| {
            assert!(base.find_doc_comment(&node).is_empty());
        });
    }

    #[test]
    fn test_trailing_comment_is_not_next_doc() {
        let source = "package p\n\ntype A int // about A\ntype B int\n";
        let mut parser = new_parser().unwrap();
        let tree = parser.parse(source, None).unwrap();
        let base = BaseExtractor::new("test.go".to_string(), source.to_string());
        let decls = base.find_nodes_by_type(&tree.root_node(), "type_declaration");
        assert_eq!(decls.len(), 2);
        assert_eq!(base.find_line_comment(&decls[0]), vec!["// about A"]);
        assert!(base.find_doc_comment(&decls[1]).is_empty());
    }

    #[test]
    fn test_block_comment_kept_raw() {
        let source = "package p\n\n/* block\n   doc */\nfunc F() {}\n";
        with_first(source, "function_declaration", |base, node| {
            assert_eq!(base.find_doc_comment(&node), vec!["/* block\n   doc */"]);
        });
    }
}

//! Build constraint handling for directory scans
//!
//! Only one constraint is recognized: a unit carrying the exact comment
//! `// +build !appengine` is left out of directory parsing. Other build
//! tags are not evaluated.

use tree_sitter::Node;

/// The single comment text that excludes a unit from directory parsing
pub const EXCLUSION_MARKER: &str = "// +build !appengine";

/// Whether any comment in the tree below `root` is exactly the exclusion marker
pub fn carries_exclusion_marker(root: &Node, content: &str) -> bool {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.kind() == "comment" && is_exclusion_marker(&content[node.byte_range()]) {
            return true;
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return false;
            }
        }
    }
}

/// Compare a comment token against the marker, ignoring a trailing `\r`
fn is_exclusion_marker(comment: &str) -> bool {
    comment.trim_end_matches('\r') == EXCLUSION_MARKER
}

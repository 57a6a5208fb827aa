// Tree navigation methods for BaseExtractor
//
// Extracted from extractor.rs to keep node lookups apart from comment logic

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor {
    /// Find nodes by type anywhere below (and including) `node`, in pre-order
    pub fn find_nodes_by_type<'a>(&self, node: &Node<'a>, node_type: &str) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        let mut cursor = node.walk();
        loop {
            let current = cursor.node();
            if current.kind() == node_type {
                nodes.push(current);
            }
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() || cursor.node() == *node {
                    return nodes;
                }
            }
        }
    }

    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| child.kind() == child_type);
        found
    }

    /// Find children by type
    pub fn find_children_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Vec<Node<'a>> {
        let mut cursor = node.walk();
        let children = node
            .children(&mut cursor)
            .filter(|child| child.kind() == child_type)
            .collect();
        children
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }

    /// Texts of every child stored under a repeated field (`x, y int`)
    pub fn get_field_texts(&self, node: &Node, field_name: &str) -> Vec<String> {
        let mut cursor = node.walk();
        let texts = node
            .children_by_field_name(field_name, &mut cursor)
            .map(|child| self.get_node_text(&child))
            .collect();
        texts
    }

    /// First ERROR or MISSING node in pre-order, if the tree has any
    pub fn find_first_error<'a>(&self, node: &Node<'a>) -> Option<Node<'a>> {
        if !node.has_error() {
            return None;
        }
        if node.is_error() || node.is_missing() {
            return Some(*node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'a>> = node.children(&mut cursor).collect();
        children
            .iter()
            .find_map(|child| self.find_first_error(child))
            .or(Some(*node))
    }
}

use crate::extractors::base::Operation;
use tree_sitter::Node;

/// Function and method extraction for Go
impl super::GoExtractor {
    /// Free functions and methods; the receiver becomes `related_struct`
    pub(super) fn extract_operation(&self, node: Node) -> Option<Operation> {
        let name = self.base.get_field_text(&node, "name")?;

        // Only the receiver's type matters for linking, but the whole field is kept
        let related_struct = self
            .extract_field_list(node.child_by_field_name("receiver"))
            .into_iter()
            .next();

        Some(Operation {
            name,
            doc_lines: self.base.find_doc_comment(&node),
            related_struct,
            input_args: self.extract_field_list(node.child_by_field_name("parameters")),
            output_args: self.extract_field_list(node.child_by_field_name("result")),
            ..Default::default()
        })
    }
}

/// One node of the parse tree.
///
/// A node exclusively owns its children, so dropping the root releases the
/// whole tree. Labels are grammar non-terminal names, terminal text, or a
/// literal's lexeme; the node itself does not care which.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: &str) -> TreeNode {
        TreeNode {
            label: String::from(label),
            children: Vec::new(),
        }
    }

    /// Appends a child; children keep the order they were attached in.
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }
}

use super::node::TreeNode;

/// Renders the tree as an indented diagram, one node per line.
///
/// Every line is a run of continuation pieces (`│   ` under a branch that
/// is still open, four spaces under one that is closed) followed by a
/// connector (`├── ` for a child with siblings below it, `└── ` for the
/// last child) and the node's label. The root always renders as a last
/// child: nothing can sit above it.
pub fn render(root: &TreeNode) -> String {
    let mut out = String::new();
    render_node(root, "", true, &mut out);
    out
}

fn render_node(node: &TreeNode, prefix: &str, is_last: bool, out: &mut String) {
    out.push_str(prefix);
    out.push_str(if is_last { "└── " } else { "├── " });
    out.push_str(&node.label);
    out.push('\n');

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    for (index, child) in node.children.iter().enumerate() {
        render_node(child, &child_prefix, index == node.children.len() - 1, out);
    }
}

/// Writes the rendered tree to standard output.
pub fn print(root: &TreeNode) {
    print!("{}", render(root));
}

use crate::interfaces::{CollapsibleState, TreeDataProvider};

/// Fully expanded text rendering of a provider's tree, two spaces per level.
pub fn render_outline<P: TreeDataProvider>(provider: &P) -> String {
    let mut lines = Vec::new();
    for root in provider.children(None) {
        push_node(provider, &root, 0, &mut lines);
    }
    lines.join("\n")
}

fn push_node<P: TreeDataProvider>(
    provider: &P,
    node: &P::Node,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let item = provider.tree_item(node);
    lines.push(format!("{}{}", "  ".repeat(depth), item.label));
    if item.collapsible_state != CollapsibleState::None {
        for child in provider.children(Some(node)) {
            push_node(provider, &child, depth + 1, lines);
        }
    }
}

use art_explorer_core::interfaces::{CollapsibleState, TreeDataProvider, TreeItem};
use serde::Serialize;

/// A display item together with its expanded children.
#[derive(Debug, Serialize)]
pub struct NodeView {
    #[serde(flatten)]
    pub item: TreeItem,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeView>,
}

/// Fully expanded view of a provider's tree.
pub fn tree_view<P: TreeDataProvider>(provider: &P) -> Vec<NodeView> {
    provider
        .children(None)
        .iter()
        .map(|root| node_view(provider, root))
        .collect()
}

fn node_view<P: TreeDataProvider>(provider: &P, node: &P::Node) -> NodeView {
    let item = provider.tree_item(node);
    let children = if item.collapsible_state == CollapsibleState::None {
        Vec::new()
    } else {
        provider
            .children(Some(node))
            .iter()
            .map(|child| node_view(provider, child))
            .collect()
    };
    NodeView { item, children }
}

/// Human-readable tree with one icon per level.
pub fn format_tree(views: &[NodeView]) -> String {
    let mut lines = Vec::new();
    for (i, view) in views.iter().enumerate() {
        lines.push(format!("{}. 📦 {}", i + 1, view.item.label));
        for child in &view.children {
            let hint = child
                .item
                .command
                .as_ref()
                .map(|cmd| format!("  ({})", cmd.command_id))
                .unwrap_or_default();
            lines.push(format!("   ▶️  {}{}", child.item.label, hint));
        }
    }
    lines.join("\n")
}

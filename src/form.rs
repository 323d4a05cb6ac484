//! In-memory widget host.
//!
//! [`FormTree`] implements [`WidgetFactory`] by recording every control in a
//! shared arena. Hosts read the tree back through [`FormNode::snapshot`] to
//! render it, and feed user input back through [`FormNode::select`] and
//! [`FormNode::set_checked`].

use std::sync::{Arc, RwLock};

use crate::widget::{
    ChangeHandler, CheckboxSpec, DropdownSpec, GroupAxis, LabelSpec, Widget, WidgetFactory,
};

/// Identifier of a node inside a [`FormTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
enum NodeKind {
    Label(LabelSpec),
    Dropdown {
        spec: DropdownSpec,
        on_change: ChangeHandler<usize>,
    },
    Checkbox {
        spec: CheckboxSpec,
        on_change: ChangeHandler<bool>,
    },
    Group {
        axis: GroupAxis,
        children: Vec<NodeId>,
    },
}

#[derive(Debug)]
struct Node {
    visible: bool,
    kind: NodeKind,
}

/// Shared arena of form controls.
#[derive(Debug, Clone, Default)]
pub struct FormTree {
    nodes: Arc<RwLock<Vec<Node>>>,
}

impl FormTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.read().expect("form tree lock").len()
    }

    /// Check whether no node has been created.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handle for an existing node.
    pub fn node(&self, id: NodeId) -> Option<FormNode> {
        (id.0 < self.len()).then(|| FormNode {
            tree: self.clone(),
            id,
        })
    }

    fn push(&self, kind: NodeKind) -> FormNode {
        let mut nodes = self.nodes.write().expect("form tree lock");
        let id = NodeId(nodes.len());
        nodes.push(Node {
            visible: true,
            kind,
        });
        FormNode {
            tree: self.clone(),
            id,
        }
    }

    fn group(&self, axis: GroupAxis, children: Vec<FormNode>) -> FormNode {
        let children = children.into_iter().map(|child| child.id).collect();
        self.push(NodeKind::Group { axis, children })
    }

    fn with_node<R>(&self, id: NodeId, f: impl FnOnce(&Node) -> R) -> R {
        let nodes = self.nodes.read().expect("form tree lock");
        f(&nodes[id.0])
    }

    fn with_node_mut<R>(&self, id: NodeId, f: impl FnOnce(&mut Node) -> R) -> R {
        let mut nodes = self.nodes.write().expect("form tree lock");
        f(&mut nodes[id.0])
    }

    fn snapshot_node(nodes: &[Node], id: NodeId) -> ControlSnapshot {
        let node = &nodes[id.0];
        let kind = match &node.kind {
            NodeKind::Label(spec) => ControlKind::Label(spec.clone()),
            NodeKind::Dropdown { spec, .. } => ControlKind::Dropdown(spec.clone()),
            NodeKind::Checkbox { spec, .. } => ControlKind::Checkbox(spec.clone()),
            NodeKind::Group { axis, children } => ControlKind::Group {
                axis: *axis,
                children: children
                    .iter()
                    .map(|child| Self::snapshot_node(nodes, *child))
                    .collect(),
            },
        };
        ControlSnapshot {
            id,
            visible: node.visible,
            kind,
        }
    }
}

impl WidgetFactory for FormTree {
    type Widget = FormNode;

    fn label(&mut self, spec: LabelSpec) -> FormNode {
        self.push(NodeKind::Label(spec))
    }

    fn dropdown(&mut self, spec: DropdownSpec, on_change: ChangeHandler<usize>) -> FormNode {
        self.push(NodeKind::Dropdown { spec, on_change })
    }

    fn checkbox(&mut self, spec: CheckboxSpec, on_change: ChangeHandler<bool>) -> FormNode {
        self.push(NodeKind::Checkbox { spec, on_change })
    }

    fn vbox(&mut self, children: Vec<FormNode>) -> FormNode {
        self.group(GroupAxis::Vertical, children)
    }

    fn hbox(&mut self, children: Vec<FormNode>) -> FormNode {
        self.group(GroupAxis::Horizontal, children)
    }
}

/// Owned copy of a subtree, for rendering or inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSnapshot {
    /// Node identifier.
    pub id: NodeId,
    /// Visibility flag of this node.
    pub visible: bool,
    /// Control payload.
    pub kind: ControlKind,
}

/// Payload of a [`ControlSnapshot`].
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Static text.
    Label(LabelSpec),
    /// Dropdown with its current selection.
    Dropdown(DropdownSpec),
    /// Checkbox with its current state.
    Checkbox(CheckboxSpec),
    /// Grouping container.
    Group {
        /// Layout direction.
        axis: GroupAxis,
        /// Child snapshots in order.
        children: Vec<ControlSnapshot>,
    },
}

/// Handle to a node of a [`FormTree`].
#[derive(Debug, Clone)]
pub struct FormNode {
    tree: FormTree,
    id: NodeId,
}

impl FormNode {
    /// Node identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tree that owns this node.
    pub fn tree(&self) -> &FormTree {
        &self.tree
    }

    /// Copy this subtree.
    pub fn snapshot(&self) -> ControlSnapshot {
        let nodes = self.tree.nodes.read().expect("form tree lock");
        FormTree::snapshot_node(&nodes, self.id)
    }

    /// Visibility flag of this node alone (ancestors are not consulted).
    pub fn is_visible(&self) -> bool {
        self.tree.with_node(self.id, |node| node.visible)
    }

    /// Label text, for label nodes.
    pub fn text(&self) -> Option<String> {
        self.tree.with_node(self.id, |node| match &node.kind {
            NodeKind::Label(spec) => Some(spec.text.clone()),
            _ => None,
        })
    }

    /// Caption, for dropdown and checkbox nodes.
    pub fn description(&self) -> Option<String> {
        self.tree.with_node(self.id, |node| match &node.kind {
            NodeKind::Dropdown { spec, .. } => Some(spec.description.clone()),
            NodeKind::Checkbox { spec, .. } => Some(spec.description.clone()),
            _ => None,
        })
    }

    /// Option labels, for dropdown nodes.
    pub fn options(&self) -> Option<Vec<String>> {
        self.tree.with_node(self.id, |node| match &node.kind {
            NodeKind::Dropdown { spec, .. } => Some(spec.options.clone()),
            _ => None,
        })
    }

    /// Selected index, for dropdown nodes.
    pub fn selected(&self) -> Option<usize> {
        self.tree.with_node(self.id, |node| match &node.kind {
            NodeKind::Dropdown { spec, .. } => Some(spec.selected),
            _ => None,
        })
    }

    /// Label of the selected option, for dropdown nodes.
    pub fn selected_label(&self) -> Option<String> {
        self.tree.with_node(self.id, |node| match &node.kind {
            NodeKind::Dropdown { spec, .. } => spec.options.get(spec.selected).cloned(),
            _ => None,
        })
    }

    /// Current state, for checkbox nodes.
    pub fn is_checked(&self) -> Option<bool> {
        self.tree.with_node(self.id, |node| match &node.kind {
            NodeKind::Checkbox { spec, .. } => Some(spec.checked),
            _ => None,
        })
    }

    /// Child handles, for group nodes. Empty for every other kind.
    pub fn children(&self) -> Vec<FormNode> {
        self.tree.with_node(self.id, |node| match &node.kind {
            NodeKind::Group { children, .. } => children
                .iter()
                .map(|id| FormNode {
                    tree: self.tree.clone(),
                    id: *id,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Select an option as if the user picked it.
    ///
    /// Fires the bound handler only when the selection actually changes.
    /// Returns whether the handler ran. Out-of-range indices and non-dropdown
    /// nodes are ignored.
    pub fn select(&self, index: usize) -> bool {
        let handler = self.tree.with_node_mut(self.id, |node| match &mut node.kind {
            NodeKind::Dropdown { spec, on_change }
                if index < spec.options.len() && spec.selected != index =>
            {
                spec.selected = index;
                Some(on_change.clone())
            }
            _ => None,
        });
        // Handlers run without the tree lock so they can read the tree.
        match handler {
            Some(handler) => {
                handler.call(index);
                true
            }
            None => false,
        }
    }

    /// Select the option with the given label. Returns whether the handler ran.
    pub fn select_label(&self, label: &str) -> bool {
        let index = self
            .options()
            .and_then(|options| options.iter().position(|option| option == label));
        match index {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Set a checkbox as if the user clicked it.
    ///
    /// Fires the bound handler only when the state actually changes.
    pub fn set_checked(&self, checked: bool) -> bool {
        let handler = self.tree.with_node_mut(self.id, |node| match &mut node.kind {
            NodeKind::Checkbox { spec, on_change } if spec.checked != checked => {
                spec.checked = checked;
                Some(on_change.clone())
            }
            _ => None,
        });
        match handler {
            Some(handler) => {
                handler.call(checked);
                true
            }
            None => false,
        }
    }
}

impl Widget for FormNode {
    fn set_visible(&self, visible: bool) {
        self.tree.with_node_mut(self.id, |node| node.visible = visible);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn dropdown(tree: &mut FormTree, hits: Arc<AtomicUsize>) -> FormNode {
        tree.dropdown(
            DropdownSpec {
                description: "X".to_string(),
                options: vec!["-".to_string(), "a".to_string(), "b".to_string()],
                selected: 0,
            },
            ChangeHandler::new(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[test]
    fn select_fires_only_on_change() {
        let mut tree = FormTree::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let node = dropdown(&mut tree, Arc::clone(&hits));

        assert!(!node.select(0));
        assert!(node.select(2));
        assert!(!node.select(2));
        assert!(!node.select(3));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(node.selected(), Some(2));
        assert_eq!(node.selected_label().as_deref(), Some("b"));
        assert!(node.select_label("a"));
        assert!(!node.select_label("nope"));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn handler_can_read_tree_during_change() {
        let mut tree = FormTree::new();
        let seen = Arc::new(RwLock::new(None));
        let seen_in_handler = Arc::clone(&seen);
        let reader = tree.clone();
        let node = tree.checkbox(
            CheckboxSpec {
                description: "Log scale X".to_string(),
                checked: false,
            },
            ChangeHandler::new(move |_| {
                let state = reader.node(NodeId(0)).and_then(|node| node.is_checked());
                *seen_in_handler.write().unwrap() = state;
            }),
        );
        assert!(node.set_checked(true));
        assert_eq!(*seen.read().unwrap(), Some(true));
        assert!(!node.set_checked(true));
    }

    #[test]
    fn snapshot_reflects_groups_and_visibility() {
        let mut tree = FormTree::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let title = tree.label(LabelSpec::new("Encoding:"));
        let x = dropdown(&mut tree, hits);
        let row = tree.hbox(vec![x.clone()]);
        let root = tree.vbox(vec![title, row.clone()]);
        row.set_visible(false);

        let snapshot = root.snapshot();
        let ControlKind::Group { axis, children } = snapshot.kind else {
            panic!("root should be a group");
        };
        assert_eq!(axis, GroupAxis::Vertical);
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0].kind, ControlKind::Label(spec) if spec.text == "Encoding:"));
        assert!(!children[1].visible);
        assert_eq!(root.children().len(), 2);
        assert!(x.is_visible());
        assert_eq!(tree.len(), 4);
    }
}

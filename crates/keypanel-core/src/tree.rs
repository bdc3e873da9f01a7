use slotmap::{new_key_type, SlotMap};

use crate::Rect;

new_key_type! {
    /// Handle to a node in the host's render tree.
    pub struct NodeId;
}

/// Parent-child composition surface of the host view hierarchy.
///
/// The keyboard view only needs to create nodes, reparent them, and push
/// frame changes; what a node looks like on screen is the host's business.
pub trait RenderTree {
    fn create_node(&mut self) -> NodeId;

    /// Attach `child` under `parent`, reparenting if it is attached elsewhere.
    fn attach_child(&mut self, parent: NodeId, child: NodeId);

    /// Detach `child` from its parent, if any. The node itself stays alive.
    fn remove_child(&mut self, child: NodeId);

    fn set_frame(&mut self, node: NodeId, frame: Rect);
}

/// In-memory [`RenderTree`] that just records structure and frames.
///
/// Backs the test suite and hosts that do their own drawing from the
/// recorded state.
#[derive(Default)]
pub struct HeadlessTree {
    nodes: SlotMap<NodeId, NodeState>,
}

#[derive(Default)]
struct NodeState {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    frame: Rect,
}

impl HeadlessTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    pub fn children_of(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn frame_of(&self, node: NodeId) -> Option<Rect> {
        self.nodes.get(node).map(|n| n.frame)
    }

    fn unlink(&mut self, child: NodeId) {
        let Some(parent) = self.nodes.get(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.retain(|&c| c != child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = None;
        }
    }
}

impl RenderTree for HeadlessTree {
    fn create_node(&mut self) -> NodeId {
        self.nodes.insert(NodeState::default())
    }

    fn attach_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            log::warn!("attach_child: stale node id ({parent:?} <- {child:?})");
            return;
        }
        self.unlink(child);
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
    }

    fn remove_child(&mut self, child: NodeId) {
        self.unlink(child);
    }

    fn set_frame(&mut self, node: NodeId, frame: Rect) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.frame = frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_and_detach() {
        let mut tree = HeadlessTree::new();
        let root = tree.create_node();
        let a = tree.create_node();
        let b = tree.create_node();

        tree.attach_child(root, a);
        tree.attach_child(root, b);
        assert_eq!(tree.children_of(root), &[a, b]);
        assert_eq!(tree.parent_of(a), Some(root));

        tree.remove_child(a);
        assert_eq!(tree.children_of(root), &[b]);
        assert_eq!(tree.parent_of(a), None);
        assert!(tree.contains(a));
    }

    #[test]
    fn test_attach_reparents() {
        let mut tree = HeadlessTree::new();
        let first = tree.create_node();
        let second = tree.create_node();
        let child = tree.create_node();

        tree.attach_child(first, child);
        tree.attach_child(second, child);

        assert_eq!(tree.children_of(first), &[] as &[NodeId]);
        assert_eq!(tree.children_of(second), &[child]);
        assert_eq!(tree.parent_of(child), Some(second));
    }

    #[test]
    fn test_set_frame() {
        let mut tree = HeadlessTree::new();
        let node = tree.create_node();
        let frame = Rect {
            x: 1.0,
            y: 2.0,
            w: 3.0,
            h: 4.0,
        };

        tree.set_frame(node, frame);
        assert_eq!(tree.frame_of(node), Some(frame));
    }
}

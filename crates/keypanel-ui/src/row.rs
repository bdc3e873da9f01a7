use keypanel_core::{NodeId, Orientation, Rect};

use crate::KeyHandle;

/// Vertical padding around a row, in keyboard units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowInsets {
    pub top: f32,
    pub bottom: f32,
}

impl RowInsets {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn total(self) -> f32 {
        self.top + self.bottom
    }
}

/// Per-orientation row padding; layout picks one side based on the current
/// bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowPadding {
    pub portrait: RowInsets,
    pub landscape: RowInsets,
}

impl RowPadding {
    pub fn uniform(insets: RowInsets) -> Self {
        Self {
            portrait: insets,
            landscape: insets,
        }
    }

    pub fn for_orientation(self, orientation: Orientation) -> RowInsets {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Landscape => self.landscape,
        }
    }
}

/// One keyboard row: an ordered run of keys plus its padding.
///
/// Rows are owned by the [`KeyboardView`](crate::KeyboardView), which
/// assigns each a render node on construction and keeps its frame current.
pub struct KeyRow {
    keys: Vec<KeyHandle>,
    padding: RowPadding,
    frame: Rect,
    node: Option<NodeId>,
}

impl KeyRow {
    pub fn new(keys: Vec<KeyHandle>, padding: RowPadding) -> Self {
        Self {
            keys,
            padding,
            frame: Rect::default(),
            node: None,
        }
    }

    pub fn keys(&self) -> &[KeyHandle] {
        &self.keys
    }

    pub fn key(&self, index: usize) -> Option<&KeyHandle> {
        self.keys.get(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn padding(&self) -> RowPadding {
        self.padding
    }

    pub fn insets_for(&self, orientation: Orientation) -> RowInsets {
        self.padding.for_orientation(orientation)
    }

    /// Frame assigned by the last layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_node(&mut self, node: NodeId) {
        self.node = Some(node);
    }

    /// Insert at `index`, appending when the index is absent or past the end.
    pub(crate) fn insert(&mut self, key: KeyHandle, index: Option<usize>) {
        let at = index
            .filter(|&i| i <= self.keys.len())
            .unwrap_or(self.keys.len());
        self.keys.insert(at, key);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<KeyHandle> {
        if index < self.keys.len() {
            Some(self.keys.remove(index))
        } else {
            None
        }
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use keypanel_core::{Color, NodeId, Orientation, Rect, RenderTree, Touch, TouchPhase, Vec2};

use crate::{KeyHandle, KeyRow, KeyboardHandlers, TouchRouter};

/// Visual style for the keyboard surface. Immutable once set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyboardStyle {
    background: Color,
}

impl KeyboardStyle {
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

/// The keyboard view: owns the rows, lays them out inside its bounds, and
/// forwards touch batches to its [`TouchRouter`].
///
/// Row heights come from the current bounds: every row gets
/// `max(0, (height - total_padding) / row_count)`, where padding is each
/// row's orientation-selected top and bottom insets. Layout reruns on every
/// geometry change and pushes row frames into the host's render tree.
pub struct KeyboardView {
    style: KeyboardStyle,
    rows: Vec<KeyRow>,
    bounds: Rect,
    node: NodeId,
    tree: Rc<RefCell<dyn RenderTree>>,
    router: TouchRouter,
}

impl KeyboardView {
    /// Attaches a render node per row under `root`, and every key's node
    /// under its row.
    pub fn new(
        style: KeyboardStyle,
        mut rows: Vec<KeyRow>,
        tree: Rc<RefCell<dyn RenderTree>>,
        root: NodeId,
    ) -> Self {
        {
            let mut t = tree.borrow_mut();
            for row in &mut rows {
                let node = t.create_node();
                t.attach_child(root, node);
                row.set_node(node);
                for key in row.keys() {
                    t.attach_child(node, key.borrow().node());
                }
            }
        }
        Self {
            style,
            rows,
            bounds: Rect::default(),
            node: root,
            tree,
            router: TouchRouter::new(),
        }
    }

    pub fn style(&self) -> KeyboardStyle {
        self.style
    }

    pub fn rows(&self) -> &[KeyRow] {
        &self.rows
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.bounds.size())
    }

    pub fn router(&self) -> &TouchRouter {
        &self.router
    }

    /// Geometry change: store the new bounds and re-run row layout.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout();
    }

    fn layout(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let orientation = Orientation::of(self.bounds.size());
        let total_padding: f32 = self
            .rows
            .iter()
            .map(|row| row.insets_for(orientation).total())
            .sum();
        let row_height =
            ((self.bounds.h - total_padding) / self.rows.len() as f32).max(0.0);
        log::debug!(
            "layout: {} rows, height {row_height} ({orientation:?})",
            self.rows.len()
        );

        let mut cursor = self.bounds.y;
        let mut tree = self.tree.borrow_mut();
        for row in &mut self.rows {
            let insets = row.insets_for(orientation);
            cursor += insets.top;
            let frame = Rect {
                x: self.bounds.x,
                y: cursor,
                w: self.bounds.w,
                h: row_height,
            };
            row.set_frame(frame);
            if let Some(node) = row.node() {
                tree.set_frame(node, frame);
            }
            cursor += row_height + insets.bottom;
        }
    }

    pub fn key_at(&self, row: usize, index: usize) -> Option<KeyHandle> {
        self.rows.get(row).and_then(|r| r.key(index)).cloned()
    }

    /// Linear scan across all rows; first key whose identifier matches.
    pub fn key_with_identifier(&self, identifier: &str) -> Option<KeyHandle> {
        self.rows
            .iter()
            .flat_map(|row| row.keys())
            .find(|key| key.borrow().identifier() == identifier)
            .cloned()
    }

    /// Insert into the row at `row`, at `index` or appended when the index
    /// is absent or past the end. An invalid row index is a silent no-op.
    pub fn insert_key(&mut self, key: KeyHandle, row: usize, index: Option<usize>) {
        let row_count = self.rows.len();
        let Some(target) = self.rows.get_mut(row) else {
            log::warn!("insert_key: row {row} out of range ({row_count} rows)");
            return;
        };
        if let Some(node) = target.node() {
            self.tree.borrow_mut().attach_child(node, key.borrow().node());
        }
        target.insert(key, index);
    }

    /// Remove and detach the key at the given position. Returns whether
    /// anything was removed.
    pub fn remove_key(&mut self, row: usize, index: usize) -> bool {
        let Some(target) = self.rows.get_mut(row) else {
            return false;
        };
        match target.remove(index) {
            Some(key) => {
                self.tree.borrow_mut().remove_child(key.borrow().node());
                true
            }
            None => false,
        }
    }

    /// Key under `point`, using the keys' own frames. This is the resolver
    /// the touch entry points below feed the router; hosts with their own
    /// hit-testing can drive a [`TouchRouter`] directly instead.
    pub fn key_at_point(&self, point: Vec2) -> Option<KeyHandle> {
        key_under(&self.rows, point)
    }

    pub fn set_handlers(&mut self, handlers: &Rc<KeyboardHandlers>) {
        self.router.set_handlers(handlers);
    }

    pub fn set_typing_enabled(&mut self, enabled: bool) {
        self.router.set_typing_enabled(enabled);
    }

    pub fn typing_enabled(&self) -> bool {
        self.router.typing_enabled()
    }

    pub fn touches_began(&mut self, touches: &[Touch]) {
        let rows = &self.rows;
        self.router
            .touches_began(touches, &|point| key_under(rows, point));
    }

    pub fn touches_moved(&mut self, touches: &[Touch]) {
        let rows = &self.rows;
        self.router
            .touches_moved(touches, &|point| key_under(rows, point));
    }

    pub fn touches_ended(&mut self, touches: &[Touch]) {
        self.router.touches_ended(touches);
    }

    pub fn touches_cancelled(&mut self, touches: Option<&[Touch]>) {
        self.router.touches_cancelled(touches);
    }

    /// Single entry point for hosts that deliver tagged phase batches.
    pub fn dispatch(&mut self, phase: TouchPhase, touches: &[Touch]) {
        match phase {
            TouchPhase::Began => self.touches_began(touches),
            TouchPhase::Moved => self.touches_moved(touches),
            TouchPhase::Ended => self.touches_ended(touches),
            TouchPhase::Cancelled => self.touches_cancelled(Some(touches)),
        }
    }
}

fn key_under(rows: &[KeyRow], point: Vec2) -> Option<KeyHandle> {
    rows.iter()
        .flat_map(|row| row.keys())
        .find(|key| key.borrow().frame().contains(point))
        .cloned()
}

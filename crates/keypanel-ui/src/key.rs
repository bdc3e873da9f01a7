use std::cell::RefCell;
use std::rc::Rc;

use keypanel_core::{NodeId, Rect};

/// Contract for a key button component.
///
/// Rendering and styling stay with the host; the keyboard only needs a
/// string identity, the key's render node, its current frame in keyboard
/// coordinates, and control over the key-pop feedback visual.
pub trait Key {
    fn identifier(&self) -> &str;

    fn node(&self) -> NodeId;

    fn frame(&self) -> Rect;

    /// Show or hide the transient pressed-key visual. Called synchronously
    /// from the touch router as associations change.
    fn set_pop_visible(&mut self, visible: bool);
}

/// Shared handle to a key. Identity is pointer identity, see [`same_key`].
pub type KeyHandle = Rc<RefCell<dyn Key>>;

pub fn same_key(a: &KeyHandle, b: &KeyHandle) -> bool {
    Rc::ptr_eq(a, b)
}

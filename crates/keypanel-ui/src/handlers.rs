use std::rc::Rc;

use keypanel_core::Touch;

use crate::KeyHandle;

type TouchesFn = Rc<dyn Fn(&[Touch])>;
type KeyFn = Rc<dyn Fn(&KeyHandle)>;

/// Callback surface for keyboard consumers.
///
/// Every slot is independently optional; an unset slot simply observes
/// nothing. The raw touch notifications mirror the platform phases verbatim
/// and fire even when typing is disabled; the key-press and drag callbacks
/// come from the touch router's association tracking.
///
/// The keyboard holds only a [`Weak`](std::rc::Weak) reference to this set.
/// Once the owning `Rc` is dropped, callbacks stop without error.
#[derive(Default)]
pub struct KeyboardHandlers {
    pub on_touches_began: Option<TouchesFn>,
    pub on_touches_moved: Option<TouchesFn>,
    pub on_touches_ended: Option<TouchesFn>,
    /// Cancel may arrive without a touch set on some platforms.
    pub on_touches_cancelled: Option<Rc<dyn Fn(Option<&[Touch]>)>>,
    pub on_key_press_start: Option<KeyFn>,
    pub on_key_press_end: Option<KeyFn>,
    /// A tracked touch slid from the first key onto the second.
    pub on_key_drag: Option<Rc<dyn Fn(&KeyHandle, &KeyHandle)>>,
}

impl KeyboardHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_touches_began(mut self, f: impl Fn(&[Touch]) + 'static) -> Self {
        self.on_touches_began = Some(Rc::new(f));
        self
    }

    pub fn on_touches_moved(mut self, f: impl Fn(&[Touch]) + 'static) -> Self {
        self.on_touches_moved = Some(Rc::new(f));
        self
    }

    pub fn on_touches_ended(mut self, f: impl Fn(&[Touch]) + 'static) -> Self {
        self.on_touches_ended = Some(Rc::new(f));
        self
    }

    pub fn on_touches_cancelled(mut self, f: impl Fn(Option<&[Touch]>) + 'static) -> Self {
        self.on_touches_cancelled = Some(Rc::new(f));
        self
    }

    pub fn on_key_press_start(mut self, f: impl Fn(&KeyHandle) + 'static) -> Self {
        self.on_key_press_start = Some(Rc::new(f));
        self
    }

    pub fn on_key_press_end(mut self, f: impl Fn(&KeyHandle) + 'static) -> Self {
        self.on_key_press_end = Some(Rc::new(f));
        self
    }

    pub fn on_key_drag(mut self, f: impl Fn(&KeyHandle, &KeyHandle) + 'static) -> Self {
        self.on_key_drag = Some(Rc::new(f));
        self
    }
}

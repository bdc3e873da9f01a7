use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use keypanel_core::{Touch, TouchId, Vec2};

use crate::{same_key, KeyHandle, KeyboardHandlers};

/// Live pairing of one touch with the key it currently targets.
struct TouchAssociation {
    touch: TouchId,
    key: KeyHandle,
}

/// Routes platform touch batches to keys and drives press/drag callbacks.
///
/// Each tracked touch is either absent or associated with exactly one key;
/// there is never more than one association per touch id. Hit-testing is
/// supplied per call as a resolver, so hosts with their own hit paths can
/// feed the router directly.
///
/// Key-pop toggling happens synchronously inside each transition; handler
/// callbacks are synchronous and fire only while the consumer keeps its
/// [`KeyboardHandlers`] alive.
pub struct TouchRouter {
    active: SmallVec<[TouchAssociation; 4]>,
    typing_enabled: bool,
    handlers: Weak<KeyboardHandlers>,
}

impl Default for TouchRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchRouter {
    pub fn new() -> Self {
        Self {
            active: SmallVec::new(),
            typing_enabled: true,
            handlers: Weak::new(),
        }
    }

    /// Point callbacks at `handlers` without taking ownership of it.
    pub fn set_handlers(&mut self, handlers: &Rc<KeyboardHandlers>) {
        self.handlers = Rc::downgrade(handlers);
    }

    pub fn clear_handlers(&mut self) {
        self.handlers = Weak::new();
    }

    /// When typing is disabled the raw touch notifications still fire, but
    /// no associations are created and no press/drag callbacks are emitted.
    pub fn set_typing_enabled(&mut self, enabled: bool) {
        self.typing_enabled = enabled;
    }

    pub fn typing_enabled(&self) -> bool {
        self.typing_enabled
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn active_touches(&self) -> impl Iterator<Item = TouchId> + '_ {
        self.active.iter().map(|a| a.touch)
    }

    /// Key currently associated with `touch`, if any.
    pub fn key_for(&self, touch: TouchId) -> Option<KeyHandle> {
        self.index_of(touch).map(|i| self.active[i].key.clone())
    }

    pub fn touches_began(
        &mut self,
        touches: &[Touch],
        resolve: &dyn Fn(Vec2) -> Option<KeyHandle>,
    ) {
        self.emit(|h| {
            if let Some(cb) = &h.on_touches_began {
                cb(touches);
            }
        });
        if !self.typing_enabled {
            return;
        }

        let mut added = false;
        for touch in touches {
            if self.index_of(touch.id).is_some() {
                continue;
            }
            let Some(key) = resolve(touch.position) else {
                continue;
            };
            log::trace!(
                "touch {:?} began over key {:?}",
                touch.id,
                key.borrow().identifier()
            );
            key.borrow_mut().set_pop_visible(true);
            self.active.push(TouchAssociation {
                touch: touch.id,
                key,
            });
            added = true;
        }
        if !added {
            return;
        }

        // Only the latest touch is the pressed key. Everything older gets
        // closed out and dropped from tracking.
        let Some(latest) = self.active.pop() else {
            return;
        };
        let stale: SmallVec<[TouchAssociation; 4]> = std::mem::take(&mut self.active);
        self.emit(|h| {
            if let Some(cb) = &h.on_key_press_start {
                cb(&latest.key);
            }
        });
        for assoc in stale {
            assoc.key.borrow_mut().set_pop_visible(false);
            self.emit(|h| {
                if let Some(cb) = &h.on_key_press_end {
                    cb(&assoc.key);
                }
            });
        }
        self.active.push(latest);
    }

    pub fn touches_moved(
        &mut self,
        touches: &[Touch],
        resolve: &dyn Fn(Vec2) -> Option<KeyHandle>,
    ) {
        self.emit(|h| {
            if let Some(cb) = &h.on_touches_moved {
                cb(touches);
            }
        });
        if !self.typing_enabled {
            return;
        }

        for touch in touches {
            let Some(i) = self.index_of(touch.id) else {
                continue;
            };
            // A touch that slides off every key keeps its current association.
            let Some(next) = resolve(touch.position) else {
                continue;
            };
            let prev = self.active[i].key.clone();
            if same_key(&prev, &next) {
                continue;
            }
            log::trace!(
                "touch {:?} dragged {:?} -> {:?}",
                touch.id,
                prev.borrow().identifier(),
                next.borrow().identifier()
            );
            self.emit(|h| {
                if let Some(cb) = &h.on_key_drag {
                    cb(&prev, &next);
                }
            });
            prev.borrow_mut().set_pop_visible(false);
            self.active[i].key = next.clone();
            next.borrow_mut().set_pop_visible(true);
        }
    }

    /// Ending a touch that was never tracked (or already ended) is a no-op
    /// beyond the raw notification. Cleanup runs even with typing disabled
    /// so toggling the flag mid-gesture cannot leave a key popped.
    pub fn touches_ended(&mut self, touches: &[Touch]) {
        self.emit(|h| {
            if let Some(cb) = &h.on_touches_ended {
                cb(touches);
            }
        });

        for touch in touches {
            let Some(i) = self.index_of(touch.id) else {
                continue;
            };
            let assoc = self.active.remove(i);
            assoc.key.borrow_mut().set_pop_visible(false);
            self.emit(|h| {
                if let Some(cb) = &h.on_key_press_end {
                    cb(&assoc.key);
                }
            });
        }
    }

    /// Drop every association and un-pop its key, then report the cancel.
    /// `touches` is whatever touch set the platform supplied, possibly none.
    pub fn touches_cancelled(&mut self, touches: Option<&[Touch]>) {
        for assoc in std::mem::take(&mut self.active) {
            assoc.key.borrow_mut().set_pop_visible(false);
        }
        self.emit(|h| {
            if let Some(cb) = &h.on_touches_cancelled {
                cb(touches);
            }
        });
    }

    fn index_of(&self, touch: TouchId) -> Option<usize> {
        self.active.iter().position(|a| a.touch == touch)
    }

    fn emit(&self, f: impl FnOnce(&KeyboardHandlers)) {
        if let Some(handlers) = self.handlers.upgrade() {
            f(&handlers);
        }
    }
}

//! # Keypanel UI
//!
//! An on-screen keyboard view for touch hosts. [`KeyboardView`] owns an
//! ordered list of [`KeyRow`]s, lays them out whenever its bounds change,
//! and routes multi-touch batches to the key under each finger.
//!
//! Key buttons themselves are the host's components: anything implementing
//! [`Key`] can live in a row. Press and drag gestures are reported through
//! [`KeyboardHandlers`], a set of independently optional callbacks held by
//! the consumer; the keyboard keeps only a non-owning reference to it.
//!
//! ```rust,ignore
//! let tree = Rc::new(RefCell::new(HeadlessTree::new()));
//! let root = tree.borrow_mut().create_node();
//!
//! let style = KeyboardStyle::new(Color::from_hex("#1C1C1EFF")?);
//! let mut keyboard = KeyboardView::new(style, rows, tree, root);
//!
//! let handlers = Rc::new(KeyboardHandlers::new().on_key_press_end(|key| {
//!     println!("typed {}", key.borrow().identifier());
//! }));
//! keyboard.set_handlers(&handlers);
//!
//! keyboard.set_bounds(Rect { x: 0.0, y: 0.0, w: 320.0, h: 216.0 });
//! keyboard.dispatch(TouchPhase::Began, &touches);
//! ```

pub mod handlers;
pub mod key;
pub mod keyboard;
pub mod router;
pub mod row;

pub use handlers::*;
pub use key::*;
pub use keyboard::*;
pub use router::*;
pub use row::*;

//! # Keypanel core
//!
//! Shared vocabulary for the keypanel widgets: plain geometry types, the
//! touch input model, color values, and the abstract render-tree interface
//! the keyboard view composes into.
//!
//! Nothing in this crate knows how anything is drawn. Hosts implement
//! [`RenderTree`] to mirror attach/detach/frame changes into their own view
//! hierarchy; [`HeadlessTree`] is an in-memory implementation for tests and
//! headless hosts.
//!
//! ```rust
//! use keypanel_core::*;
//!
//! let mut tree = HeadlessTree::new();
//! let root = tree.create_node();
//! let child = tree.create_node();
//! tree.attach_child(root, child);
//! tree.set_frame(child, Rect { x: 0.0, y: 0.0, w: 320.0, h: 216.0 });
//! assert_eq!(tree.parent_of(child), Some(root));
//! ```

pub mod color;
pub mod geometry;
pub mod input;
pub mod tree;

pub use color::*;
pub use geometry::*;
pub use input::*;
pub use tree::*;

//! Shared leaf types for the Vesper shell.
//!
//! Everything here is consumed by both the drawing layer and the window
//! manager, so this crate has no internal dependencies. The two traits
//! ([`Canvas`] and [`InputPort`]) are the platform boundary: the host
//! implements them, the shell only ever talks to the traits.

pub mod draw;
pub mod input;

pub use draw::{Canvas, Color32};
pub use input::{InputPort, Key, KeyEvent, MouseButtons};

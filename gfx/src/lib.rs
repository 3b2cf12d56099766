//! Drawing primitives for the Vesper shell.
//!
//! Everything here is generic over [`vesper_abi::Canvas`], so the same
//! routines render into the in-memory [`Framebuffer`] used by tests and
//! into whatever surface the host provides.

pub mod buffer;
pub mod canvas_font;
pub mod canvas_ops;

pub use buffer::Framebuffer;
pub use canvas_font::{FONT_CHAR_HEIGHT, FONT_CHAR_WIDTH, draw_char, draw_str, str_width};
pub use canvas_ops::{draw_line, draw_rect, fill_gradient_v, fill_rect};

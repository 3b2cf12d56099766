//! The Vesper desktop: window manager, input dispatcher, compositor and
//! the windowed applications (terminal, file browser, line editor).
//!
//! The host owns the frame loop and the platform ports; each frame it
//! calls [`Desktop::tick`], which samples input, resolves at most one
//! discrete pointer action, routes keys into the focused window's
//! content handler, and repaints the whole scene when anything changed.

pub mod apps;
pub mod controls;
pub mod desktop;
pub mod taskbar;
pub mod theme;
pub mod window;

mod render;


pub use apps::{AppCtx, ContentEffect, WindowContent};
pub use controls::{AppKind, Button, ButtonAction, Control, Label};
pub use desktop::{ControlFlow, Desktop};
pub use window::Window;

//! Content handlers: the applications a window can host.
//!
//! Handlers receive clicks in window-local coordinates and key events
//! only while their window is focused. They never touch the window list
//! or their own window directly; anything that would requires a
//! [`ContentEffect`] that the dispatcher applies after the hook returns.

pub mod browser;
pub mod commands;
pub mod editor;
pub mod terminal;

pub use browser::FileBrowser;
pub use editor::Editor;
pub use terminal::Terminal;

use vesper_abi::{Canvas, KeyEvent};
use vesper_fs::FileSystem;
use vesper_lib::Clock;

use crate::window::Window;

/// Deferred request from a content hook to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEffect {
    None,
    /// Remove the window hosting this handler.
    CloseWindow,
    /// Spawn an editor window for the given file, frontmost.
    OpenEditor(String),
    /// Replace the hosting window's title.
    SetTitle(String),
    /// Power off the shell.
    Shutdown,
}

/// Platform ports threaded into content hooks. Built fresh inside
/// `tick()` each frame; handlers never store it.
pub struct AppCtx<'a> {
    pub fs: &'a mut dyn FileSystem,
    pub clock: &'a dyn Clock,
}

/// Tagged content variant bound to a window.
pub enum WindowContent {
    Terminal(Terminal),
    FileBrowser(FileBrowser),
    Editor(Editor),
}

impl WindowContent {
    /// Click hook; `(lx, ly)` are window-local coordinates.
    pub fn on_click(&mut self, lx: i32, ly: i32, ctx: &mut AppCtx<'_>) -> ContentEffect {
        match self {
            WindowContent::Terminal(t) => t.on_click(lx, ly),
            WindowContent::FileBrowser(b) => b.on_click(lx, ly, ctx),
            WindowContent::Editor(e) => e.on_click(lx, ly, ctx),
        }
    }

    pub fn on_key(&mut self, ev: KeyEvent, ctx: &mut AppCtx<'_>) -> ContentEffect {
        match self {
            WindowContent::Terminal(t) => t.on_key(ev, ctx),
            WindowContent::FileBrowser(b) => b.on_key(ev, ctx),
            WindowContent::Editor(e) => e.on_key(ev),
        }
    }

    /// Render the handler's client area inside `win`.
    pub fn draw(&self, canvas: &mut dyn Canvas, win: &Window) {
        match self {
            WindowContent::Terminal(t) => t.draw(canvas, win),
            WindowContent::FileBrowser(b) => b.draw(canvas, win),
            WindowContent::Editor(e) => e.draw(canvas, win),
        }
    }
}

//! The window manager and input dispatcher.
//!
//! One [`Desktop`] instance owns the live window list (index order =
//! back-to-front z-order), the modal start menu and all interaction
//! state. The host calls [`Desktop::tick`] once per frame with its
//! platform ports; nothing here is global.

use vesper_abi::{Canvas, InputPort, MouseButtons};
use vesper_fs::FileSystem;
use vesper_lib::Clock;

use crate::apps::{AppCtx, ContentEffect, Editor, FileBrowser, Terminal, WindowContent};
use crate::controls::{AppKind, ButtonAction, Control, Label};
use crate::render;
use crate::taskbar::{self, StartMenu};
use crate::theme::*;
use crate::window::Window;

/// Whether the host loop should keep running after this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

struct DragState {
    id: u32,
    dx: i32,
    dy: i32,
}

/// Frames-per-second counter with one-second granularity.
pub(crate) struct FpsCounter {
    frames: u32,
    last_second: u64,
    current: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            last_second: 0,
            current: 0,
        }
    }

    fn frame(&mut self, clock: &dyn Clock) {
        let second = clock.uptime_ms() / 1000;
        if second != self.last_second {
            self.current = self.frames;
            self.frames = 0;
            self.last_second = second;
        }
        self.frames += 1;
    }

    pub(crate) fn current(&self) -> u32 {
        self.current
    }
}

pub struct Desktop {
    pub(crate) windows: Vec<Window>,
    pub(crate) start_menu: StartMenu,
    pub(crate) menu_open: bool,
    pub(crate) pointer: (i32, i32),
    pub(crate) fps: FpsCounter,

    drag: Option<DragState>,
    focused: Option<u32>,
    click_latched: bool,
    dirty: bool,
    running: bool,
    next_id: u32,
}

impl Desktop {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            start_menu: taskbar::build_start_menu(),
            menu_open: false,
            pointer: (SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2),
            fps: FpsCounter::new(),
            drag: None,
            focused: None,
            click_latched: false,
            dirty: true,
            running: true,
            next_id: 1,
        }
    }

    /// One frame: sample input, dispatch, repaint if anything changed.
    pub fn tick(
        &mut self,
        canvas: &mut dyn Canvas,
        input: &mut dyn InputPort,
        fs: &mut dyn FileSystem,
        clock: &dyn Clock,
    ) -> ControlFlow {
        self.fps.frame(clock);

        let mut ctx = AppCtx { fs, clock };
        self.handle_pointer(input, &mut ctx);
        self.handle_keys(input, &mut ctx);

        if self.dirty {
            render::render(self, canvas);
            self.dirty = false;
        }

        if self.running {
            ControlFlow::Continue
        } else {
            ControlFlow::Exit
        }
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn focused(&self) -> Option<u32> {
        self.focused
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn window_mut(&mut self, id: u32) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ── pointer ─────────────────────────────────────────────────────

    fn handle_pointer(&mut self, input: &mut dyn InputPort, ctx: &mut AppCtx<'_>) {
        let (mx, my) = input.pointer_position();
        if (mx, my) != self.pointer {
            self.pointer = (mx, my);
            self.dirty = true;
        }

        let down = input.buttons().contains(MouseButtons::PRIMARY);

        if down && !self.click_latched {
            self.dispatch_click(mx, my, ctx);
        } else if !down {
            self.click_latched = false;
            if self.drag.take().is_some() {
                log::debug!("drag ended");
            }
        }

        if down {
            self.continue_drag(mx, my);
        }
    }

    /// Resolve the rising edge of the primary button: at most one
    /// discrete action, in strict priority order.
    fn dispatch_click(&mut self, mx: i32, my: i32, ctx: &mut AppCtx<'_>) {
        self.click_latched = true;

        if self.menu_open {
            if let Some(action) = self.start_menu.action_at(mx, my) {
                self.menu_open = false;
                self.dirty = true;
                self.apply_button_action(action, ctx);
                return;
            }
            if taskbar::start_region_contains(mx, my) {
                self.menu_open = false;
                self.dirty = true;
                return;
            }
            if !self.start_menu.contains(mx, my) {
                // click-away dismiss; deliberately falls through to the
                // window scan on the same edge
                self.menu_open = false;
                self.dirty = true;
            }
        }

        if !self.menu_open && taskbar::start_region_contains(mx, my) {
            self.menu_open = true;
            self.dirty = true;
            return;
        }

        // topmost-first scan; the hit window is promoted to the front
        let Some(idx) = self.windows.iter().rposition(|w| w.contains(mx, my)) else {
            return;
        };
        let win = self.windows.remove(idx);
        self.menu_open = false;
        self.dirty = true;

        if win.close_button_contains(mx, my) {
            log::info!("closed window '{}' (id {})", win.title, win.id);
            self.forget_window(win.id);
            return;
        }

        self.windows.push(win);
        let win = self.windows.last_mut().expect("window was just pushed");
        let id = win.id;

        if win.title_bar_contains(mx, my) {
            log::debug!("drag start on window {id}");
            self.drag = Some(DragState {
                id,
                dx: mx - win.x,
                dy: my - win.y,
            });
            self.focused = Some(id);
            return;
        }

        if let Some(content) = win.content.as_mut() {
            let (lx, ly) = (mx - win.x, my - win.y);
            let effect = content.on_click(lx, ly, ctx);
            self.focused = Some(id);
            self.apply_effect(id, effect, ctx);
            return;
        }

        let hit = {
            let win = self.windows.last().expect("window was just pushed");
            win.controls
                .iter()
                .find(|c| c.contains((win.x, win.y), mx, my))
                .map(|c| c.action().cloned())
        };
        match hit {
            Some(action) => {
                self.focused = Some(id);
                if let Some(action) = action {
                    self.apply_button_action(action, ctx);
                }
            }
            // the click is consumed even when nothing absorbed it
            None => {}
        }
    }

    /// Reposition the dragged window under the pointer, clamped to the
    /// screen above the taskbar.
    fn continue_drag(&mut self, mx: i32, my: i32) {
        let Some(drag) = &self.drag else {
            return;
        };
        let (id, dx, dy) = (drag.id, drag.dx, drag.dy);
        let Some(win) = self.window_mut(id) else {
            return;
        };

        let nx = (mx - dx).min(SCREEN_WIDTH - win.w).max(0);
        let ny = (my - dy).min(SCREEN_HEIGHT - TASKBAR_HEIGHT - win.h).max(0);
        if (nx, ny) != (win.x, win.y) {
            win.x = nx;
            win.y = ny;
            self.dirty = true;
        }
    }

    // ── keyboard ────────────────────────────────────────────────────

    /// Drain pending key events into the focused window's content
    /// handler. Windows without a handler receive nothing.
    fn handle_keys(&mut self, input: &mut dyn InputPort, ctx: &mut AppCtx<'_>) {
        while let Some(ev) = input.next_key() {
            let Some(focused) = self.focused else {
                continue;
            };
            let Some(win) = self
                .windows
                .iter_mut()
                .find(|w| w.id == focused && w.content.is_some())
            else {
                continue;
            };
            let id = win.id;
            let effect = win
                .content
                .as_mut()
                .expect("window was matched with content")
                .on_key(ev, ctx);
            self.dirty = true;
            self.apply_effect(id, effect, ctx);
        }
    }

    // ── actions and effects ─────────────────────────────────────────

    fn apply_button_action(&mut self, action: ButtonAction, ctx: &mut AppCtx<'_>) {
        match action {
            ButtonAction::Launch(AppKind::Terminal) => {
                self.spawn_terminal();
            }
            ButtonAction::Launch(AppKind::FileBrowser) => {
                self.spawn_browser(&*ctx.fs);
            }
            ButtonAction::Launch(AppKind::SystemMonitor) => {
                self.spawn_monitor(ctx.clock);
            }
            ButtonAction::Shutdown => {
                log::info!("shutdown requested");
                self.running = false;
            }
        }
    }

    fn apply_effect(&mut self, source: u32, effect: ContentEffect, ctx: &mut AppCtx<'_>) {
        match effect {
            ContentEffect::None => {}
            ContentEffect::CloseWindow => self.close_window(source),
            ContentEffect::OpenEditor(path) => {
                self.spawn_editor(&path, &*ctx.fs);
            }
            ContentEffect::SetTitle(title) => {
                if let Some(win) = self.window_mut(source) {
                    win.title = title;
                }
            }
            ContentEffect::Shutdown => {
                log::info!("shutdown requested");
                self.running = false;
            }
        }
    }

    fn close_window(&mut self, id: u32) {
        if let Some(idx) = self.windows.iter().position(|w| w.id == id) {
            let win = self.windows.remove(idx);
            log::info!("closed window '{}' (id {})", win.title, win.id);
            self.forget_window(id);
            self.dirty = true;
        }
    }

    /// Clear any weak references to a window leaving the list.
    fn forget_window(&mut self, id: u32) {
        if self.focused == Some(id) {
            self.focused = None;
        }
        if self.drag.as_ref().is_some_and(|d| d.id == id) {
            self.drag = None;
        }
    }

    // ── window construction ─────────────────────────────────────────

    fn push_window(&mut self, win: Window) -> u32 {
        let id = win.id;
        log::info!("opened window '{}' (id {})", win.title, id);
        self.windows.push(win);
        self.dirty = true;
        id
    }

    pub fn spawn_terminal(&mut self) -> u32 {
        let id = self.alloc_id();
        let mut win = Window::new(id, 150, 50, 500, 500, "Terminal", COLOR_TERMINAL_BG);
        win.content = Some(WindowContent::Terminal(Terminal::new()));
        self.push_window(win)
    }

    pub fn spawn_browser(&mut self, fs: &dyn FileSystem) -> u32 {
        let id = self.alloc_id();
        let mut win = Window::new(id, 200, 100, 500, 400, "Files", COLOR_WINDOW_GRAY);
        win.content = Some(WindowContent::FileBrowser(FileBrowser::new(win.w, fs)));
        self.push_window(win)
    }

    pub fn spawn_editor(&mut self, path: &str, fs: &dyn FileSystem) -> u32 {
        let id = self.alloc_id();
        let mut win = Window::new(id, 100, 100, 400, 300, "", COLOR_EDITOR_BG);
        let editor = Editor::open(path, win.w, win.h, fs);
        win.title = editor.window_title();
        win.content = Some(WindowContent::Editor(editor));
        self.push_window(win)
    }

    pub fn spawn_monitor(&mut self, clock: &dyn Clock) -> u32 {
        let id = self.alloc_id();
        let mut win = Window::new(id, 200, 200, 300, 240, "System Monitor", COLOR_WINDOW_GRAY);
        let uptime = clock.uptime_ms() / 1000;
        win.controls.push(Control::Label(Label::new(
            10,
            35,
            format!("Uptime: {uptime}s"),
            COLOR_TEXT_LIGHT,
        )));
        win.controls.push(Control::Label(Label::new(
            10,
            50,
            format!("Screen: {SCREEN_WIDTH}x{SCREEN_HEIGHT}"),
            COLOR_TEXT_LIGHT,
        )));
        win.controls.push(Control::Label(Label::new(
            10,
            65,
            format!("Windows open: {}", self.windows.len() + 1),
            COLOR_TEXT_LIGHT,
        )));
        self.push_window(win)
    }
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new()
    }
}

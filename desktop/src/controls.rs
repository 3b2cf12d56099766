//! Simple widgets owned by windows and the start menu.
//!
//! Controls carry positions relative to their owner; the owner's origin
//! is passed into `contains`/`draw` explicitly, so a control never holds
//! a back-reference. Button behavior is plain data: a [`ButtonAction`]
//! the dispatcher executes, never a closure over desktop state.

use vesper_abi::{Canvas, Color32};
use vesper_gfx::{FONT_CHAR_HEIGHT, draw_rect, draw_str, fill_rect, str_width};

/// Applications the start menu can launch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AppKind {
    Terminal,
    FileBrowser,
    SystemMonitor,
}

/// Commands a button can request from the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Launch(AppKind),
    Shutdown,
}

pub struct Label {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Color32,
}

impl Label {
    pub fn new(x: i32, y: i32, text: impl Into<String>, color: Color32) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color,
        }
    }
}

pub struct Button {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub text: String,
    pub bg: Color32,
    pub fg: Color32,
    /// `None` for buttons whose owner handles the click itself (the
    /// editor's Save, the browser's Up).
    pub action: Option<ButtonAction>,
}

impl Button {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        text: impl Into<String>,
        bg: Color32,
        fg: Color32,
        action: Option<ButtonAction>,
    ) -> Self {
        Self {
            x,
            y,
            w,
            h,
            text: text.into(),
            bg,
            fg,
            action,
        }
    }

    pub fn contains(&self, origin: (i32, i32), px: i32, py: i32) -> bool {
        let (ox, oy) = origin;
        px >= ox + self.x
            && px < ox + self.x + self.w
            && py >= oy + self.y
            && py < oy + self.y + self.h
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, origin: (i32, i32)) {
        let ax = origin.0 + self.x;
        let ay = origin.1 + self.y;

        fill_rect(canvas, ax, ay, self.w, self.h, self.bg);
        draw_rect(canvas, ax, ay, self.w, self.h, Color32::BLACK);

        let tx = ax + (self.w - str_width(&self.text)) / 2;
        let ty = ay + (self.h - FONT_CHAR_HEIGHT) / 2;
        draw_str(canvas, tx, ty, &self.text, self.fg, Color32::TRANSPARENT);
    }
}

pub enum Control {
    Label(Label),
    Button(Button),
}

impl Control {
    /// Absolute-coordinate containment against the owner-relative rect.
    pub fn contains(&self, origin: (i32, i32), px: i32, py: i32) -> bool {
        match self {
            Control::Label(label) => {
                let ax = origin.0 + label.x;
                let ay = origin.1 + label.y;
                px >= ax
                    && px < ax + str_width(&label.text)
                    && py >= ay
                    && py < ay + FONT_CHAR_HEIGHT
            }
            Control::Button(button) => button.contains(origin, px, py),
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, origin: (i32, i32)) {
        match self {
            Control::Label(label) => {
                draw_str(
                    canvas,
                    origin.0 + label.x,
                    origin.1 + label.y,
                    &label.text,
                    label.color,
                    Color32::TRANSPARENT,
                );
            }
            Control::Button(button) => button.draw(canvas, origin),
        }
    }

    pub fn action(&self) -> Option<&ButtonAction> {
        match self {
            Control::Label(_) => None,
            Control::Button(button) => button.action.as_ref(),
        }
    }
}

//! Taskbar geometry and the modal start menu.

use vesper_abi::Canvas;
use vesper_gfx::{draw_rect, fill_rect};

use crate::controls::{AppKind, Button, ButtonAction, Control};
use crate::theme::*;

#[inline]
pub fn taskbar_top() -> i32 {
    SCREEN_HEIGHT - TASKBAR_HEIGHT
}

/// The clickable Start region at the left end of the taskbar.
#[inline]
pub fn start_region_contains(px: i32, py: i32) -> bool {
    px >= 0 && px <= START_REGION_WIDTH && py >= taskbar_top() && py < SCREEN_HEIGHT
}

/// The modal start menu. A singleton owned by the desktop, never part
/// of the window list; it reuses [`Control`]s for its buttons.
pub struct StartMenu {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub controls: Vec<Control>,
}

impl StartMenu {
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Action of the first button containing the point, if any.
    pub fn action_at(&self, px: i32, py: i32) -> Option<ButtonAction> {
        self.controls
            .iter()
            .find(|c| c.contains((self.x, self.y), px, py))
            .and_then(|c| c.action().cloned())
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        fill_rect(canvas, self.x, self.y, self.w, self.h, COLOR_MENU_BG);
        draw_rect(canvas, self.x, self.y, self.w, self.h, COLOR_OUTLINE);
        for control in &self.controls {
            control.draw(canvas, (self.x, self.y));
        }
    }
}

pub fn build_start_menu() -> StartMenu {
    let menu_button = |y: i32, text: &str, action: ButtonAction| {
        Control::Button(Button::new(
            10,
            y,
            START_MENU_WIDTH - 20,
            30,
            text,
            COLOR_MENU_BUTTON,
            COLOR_TEXT_LIGHT,
            Some(action),
        ))
    };

    StartMenu {
        x: 0,
        y: taskbar_top() - START_MENU_HEIGHT,
        w: START_MENU_WIDTH,
        h: START_MENU_HEIGHT,
        controls: vec![
            menu_button(30, "Shut Down", ButtonAction::Shutdown),
            menu_button(70, "System Monitor", ButtonAction::Launch(AppKind::SystemMonitor)),
            menu_button(110, "Terminal", ButtonAction::Launch(AppKind::Terminal)),
            menu_button(150, "Files", ButtonAction::Launch(AppKind::FileBrowser)),
        ],
    }
}

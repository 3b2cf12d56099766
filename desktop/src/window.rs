use vesper_abi::{Canvas, Color32};
use vesper_gfx::{FONT_CHAR_HEIGHT, draw_line, draw_rect, draw_str, fill_rect};

use crate::apps::WindowContent;
use crate::controls::Control;
use crate::theme::{
    CLOSE_BUTTON_MARGIN, CLOSE_BUTTON_SIZE, COLOR_CLOSE_BUTTON, COLOR_OUTLINE, COLOR_TEXT_LIGHT,
    COLOR_TITLE_BAR, TITLE_BAR_HEIGHT,
};

/// A top-level window: a rectangle with a title bar, a close box, owned
/// controls and optionally a content handler. Windows live only in the
/// desktop's ordered list; `id` is the weak handle everything else uses
/// to refer to one.
pub struct Window {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub title: String,
    pub bg: Color32,
    pub controls: Vec<Control>,
    pub content: Option<WindowContent>,
}

impl Window {
    pub fn new(
        id: u32,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        title: impl Into<String>,
        bg: Color32,
    ) -> Self {
        Self {
            id,
            x,
            y,
            // a window can never be smaller than its own title bar
            w: w.max(TITLE_BAR_HEIGHT),
            h: h.max(TITLE_BAR_HEIGHT),
            title: title.into(),
            bg,
            controls: Vec::new(),
            content: None,
        }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn title_bar_contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + TITLE_BAR_HEIGHT
    }

    fn close_button_origin(&self) -> (i32, i32) {
        (
            self.x + self.w - CLOSE_BUTTON_SIZE - CLOSE_BUTTON_MARGIN,
            self.y + CLOSE_BUTTON_MARGIN,
        )
    }

    pub fn close_button_contains(&self, px: i32, py: i32) -> bool {
        let (cx, cy) = self.close_button_origin();
        px >= cx && px < cx + CLOSE_BUTTON_SIZE && py >= cy && py < cy + CLOSE_BUTTON_SIZE
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        // body below the title bar
        fill_rect(
            canvas,
            self.x,
            self.y + TITLE_BAR_HEIGHT,
            self.w,
            self.h - TITLE_BAR_HEIGHT,
            self.bg,
        );

        fill_rect(canvas, self.x, self.y, self.w, TITLE_BAR_HEIGHT, COLOR_TITLE_BAR);
        draw_rect(canvas, self.x, self.y, self.w, self.h, COLOR_OUTLINE);
        draw_str(
            canvas,
            self.x + 5,
            self.y + (TITLE_BAR_HEIGHT - FONT_CHAR_HEIGHT) / 2,
            &self.title,
            COLOR_TEXT_LIGHT,
            Color32::TRANSPARENT,
        );

        let (cx, cy) = self.close_button_origin();
        fill_rect(canvas, cx, cy, CLOSE_BUTTON_SIZE, CLOSE_BUTTON_SIZE, COLOR_CLOSE_BUTTON);
        draw_line(
            canvas,
            cx + 3,
            cy + 3,
            cx + CLOSE_BUTTON_SIZE - 4,
            cy + CLOSE_BUTTON_SIZE - 4,
            COLOR_TEXT_LIGHT,
        );
        draw_line(
            canvas,
            cx + CLOSE_BUTTON_SIZE - 4,
            cy + 3,
            cx + 3,
            cy + CLOSE_BUTTON_SIZE - 4,
            COLOR_TEXT_LIGHT,
        );

        // paint order is insertion order
        for control in &self.controls {
            control.draw(canvas, (self.x, self.y));
        }

        if let Some(content) = &self.content {
            content.draw(canvas, self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_tests_cover_chrome_regions() {
        let win = Window::new(1, 100, 50, 300, 200, "t", Color32::BLACK);
        assert!(win.contains(100, 50));
        assert!(win.contains(399, 249));
        assert!(!win.contains(400, 250));

        assert!(win.title_bar_contains(150, 60));
        assert!(!win.title_bar_contains(150, 80));

        // close box: 16x16 square, 2 px in from the top-right corner
        assert!(win.close_button_contains(399 - 16, 53));
        assert!(!win.close_button_contains(120, 53));
    }

    #[test]
    fn degenerate_sizes_are_clamped_to_title_bar() {
        let win = Window::new(1, 0, 0, 4, -10, "tiny", Color32::BLACK);
        assert!(win.w >= TITLE_BAR_HEIGHT);
        assert!(win.h >= TITLE_BAR_HEIGHT);
    }
}

use vesper_abi::{Canvas, Color32, Key, KeyEvent};
use vesper_fs::{DirEntry, FileSystem, shellpath};
use vesper_gfx::{draw_rect, draw_str, fill_rect};

use crate::controls::Button;
use crate::theme::*;
use crate::window::Window;

use super::{AppCtx, ContentEffect};

/// Local y where the entry list starts (below the navigation row).
const LIST_TOP: i32 = TITLE_BAR_HEIGHT + CONTENT_MARGIN + 30;

/// Directory browser bound to a window. The listing is cached and
/// refreshed on every navigation; clicking a directory descends,
/// clicking a `.txt` file asks the dispatcher to spawn an editor.
pub struct FileBrowser {
    cwd: String,
    entries: Vec<DirEntry>,
    selected: Option<usize>,
    error: Option<String>,
    up_button: Button,
}

impl FileBrowser {
    pub fn new(win_w: i32, fs: &dyn FileSystem) -> Self {
        let mut browser = Self {
            cwd: shellpath::ROOT.to_string(),
            entries: Vec::new(),
            selected: None,
            error: None,
            up_button: Button::new(
                win_w - 70,
                TITLE_BAR_HEIGHT + 5,
                65,
                25,
                "Up",
                COLOR_MENU_BUTTON,
                COLOR_TEXT_LIGHT,
                None,
            ),
        };
        browser.refresh(fs);
        browser
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    fn refresh(&mut self, fs: &dyn FileSystem) {
        self.selected = None;
        match fs.list_dir(&self.cwd) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(err) => {
                log::warn!("browser: listing {} failed: {err}", self.cwd);
                self.entries.clear();
                self.error = Some(format!("Error: {err}"));
            }
        }
    }

    fn go_up(&mut self, fs: &dyn FileSystem) {
        if shellpath::is_root(&self.cwd) {
            return;
        }
        self.cwd = shellpath::parent(&self.cwd);
        self.refresh(fs);
    }

    pub fn on_click(&mut self, lx: i32, ly: i32, ctx: &mut AppCtx<'_>) -> ContentEffect {
        if self.up_button.contains((0, 0), lx, ly) {
            self.go_up(&*ctx.fs);
            return ContentEffect::None;
        }

        if ly < LIST_TOP || lx < 0 {
            return ContentEffect::None;
        }
        let idx = ((ly - LIST_TOP) / ENTRY_HEIGHT) as usize;
        if idx >= self.entries.len() {
            return ContentEffect::None;
        }

        self.selected = Some(idx);
        let entry = self.entries[idx].clone();
        if entry.is_dir {
            self.cwd = shellpath::ensure_dir(&entry.full_path);
            self.refresh(&*ctx.fs);
            ContentEffect::None
        } else if entry.name.ends_with(".txt") {
            ContentEffect::OpenEditor(entry.full_path)
        } else {
            ContentEffect::None
        }
    }

    pub fn on_key(&mut self, ev: KeyEvent, ctx: &mut AppCtx<'_>) -> ContentEffect {
        if ev.key == Key::Backspace {
            self.go_up(&*ctx.fs);
        }
        ContentEffect::None
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, win: &Window) {
        fill_rect(
            canvas,
            win.x + CONTENT_MARGIN,
            win.y + TITLE_BAR_HEIGHT + CONTENT_MARGIN,
            win.w - 2 * CONTENT_MARGIN,
            win.h - TITLE_BAR_HEIGHT - 2 * CONTENT_MARGIN,
            COLOR_PANEL,
        );

        draw_str(
            canvas,
            win.x + CONTENT_MARGIN,
            win.y + TITLE_BAR_HEIGHT + CONTENT_MARGIN + 5,
            &self.cwd,
            COLOR_TEXT_DARK,
            Color32::TRANSPARENT,
        );
        self.up_button.draw(canvas, (win.x, win.y));

        if let Some(error) = &self.error {
            draw_str(
                canvas,
                win.x + CONTENT_MARGIN,
                win.y + LIST_TOP,
                error,
                COLOR_CLOSE_BUTTON,
                Color32::TRANSPARENT,
            );
            return;
        }

        let visible = (win.h - LIST_TOP - CONTENT_MARGIN) / ENTRY_HEIGHT;
        for (i, entry) in self.entries.iter().enumerate().take(visible.max(0) as usize) {
            let entry_y = win.y + LIST_TOP + i as i32 * ENTRY_HEIGHT;
            let selected = self.selected == Some(i);

            if selected {
                fill_rect(
                    canvas,
                    win.x + CONTENT_MARGIN,
                    entry_y,
                    win.w - 2 * CONTENT_MARGIN,
                    ENTRY_HEIGHT,
                    COLOR_SELECTION,
                );
            }

            let icon = if entry.is_dir { COLOR_DIR_ICON } else { COLOR_FILE_ICON };
            fill_rect(canvas, win.x + CONTENT_MARGIN + 2, entry_y + 1, ICON_SIZE, ICON_SIZE, icon);
            draw_rect(canvas, win.x + CONTENT_MARGIN + 2, entry_y + 1, ICON_SIZE, ICON_SIZE, COLOR_OUTLINE);

            let text = if selected { COLOR_TEXT_LIGHT } else { COLOR_TEXT_DARK };
            draw_str(
                canvas,
                win.x + CONTENT_MARGIN + ICON_SIZE + 5,
                entry_y + 2,
                &entry.name,
                text,
                Color32::TRANSPARENT,
            );
        }
    }
}

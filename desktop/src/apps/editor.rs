use vesper_abi::{Canvas, Color32, Key, KeyEvent};
use vesper_fs::{FileSystem, shellpath};
use vesper_gfx::{draw_str, fill_rect};

use crate::controls::Button;
use crate::theme::*;
use crate::window::Window;

use super::{AppCtx, ContentEffect};

/// Line bound of the editor buffer.
pub const EDITOR_MAX_LINES: usize = 17;

/// Local y where the text rows start.
const TEXT_TOP: i32 = TITLE_BAR_HEIGHT + CONTENT_MARGIN + 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Marker {
    Clean,
    Empty,
    Unsaved,
}

/// Line-oriented text editor bound to a window. The cursor selects a
/// whole line; edits append/delete at the end of the selected line.
pub struct Editor {
    lines: Vec<String>,
    selected: usize,
    path: String,
    name: String,
    marker: Marker,
    save_button: Button,
}

impl Editor {
    /// Load `path` into a fresh editor. Read failures become buffer
    /// lines; the editor still opens.
    pub fn open(path: &str, win_w: i32, win_h: i32, fs: &dyn FileSystem) -> Self {
        let name = shellpath::file_name(path).to_string();
        let mut marker = Marker::Clean;

        let lines = match fs.read_lines(path) {
            Ok(lines) if lines.is_empty() => {
                marker = Marker::Empty;
                vec![String::new()]
            }
            Ok(mut lines) => {
                lines.truncate(EDITOR_MAX_LINES);
                lines
            }
            Err(err) => {
                log::warn!("editor: reading {path} failed: {err}");
                vec![format!("Error reading file: {err}")]
            }
        };

        Self {
            lines,
            selected: 0,
            path: path.to_string(),
            name,
            marker,
            save_button: Button::new(
                5,
                win_h - 22,
                win_w - 10,
                15,
                "Save",
                COLOR_SAVE_BUTTON,
                COLOR_TEXT_DARK,
                None,
            ),
        }
    }

    pub fn window_title(&self) -> String {
        match self.marker {
            Marker::Clean => format!("Editor - {}", self.name),
            Marker::Empty => format!("Editor - {} | Empty", self.name),
            Marker::Unsaved => format!("Editor - {} | Unsaved", self.name),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_unsaved(&self) -> bool {
        self.marker == Marker::Unsaved
    }

    fn mark_unsaved(&mut self) -> ContentEffect {
        self.marker = Marker::Unsaved;
        ContentEffect::SetTitle(self.window_title())
    }

    fn save(&mut self, fs: &mut dyn FileSystem) -> ContentEffect {
        let mut text = self.lines.join("\n");
        text.push('\n');
        match fs.write_all(&self.path, &text) {
            Ok(()) => {
                self.marker = Marker::Clean;
                ContentEffect::SetTitle(self.window_title())
            }
            Err(err) => {
                log::warn!("editor: saving {} failed: {err}", self.path);
                self.lines.push(format!("Save failed: {err}"));
                ContentEffect::None
            }
        }
    }

    pub fn on_click(&mut self, lx: i32, ly: i32, ctx: &mut AppCtx<'_>) -> ContentEffect {
        if self.save_button.contains((0, 0), lx, ly) {
            return self.save(ctx.fs);
        }

        if ly >= TEXT_TOP {
            let idx = ((ly - TEXT_TOP) / LINE_HEIGHT) as usize;
            if idx < self.lines.len() {
                self.selected = idx;
            }
        }
        ContentEffect::None
    }

    pub fn on_key(&mut self, ev: KeyEvent) -> ContentEffect {
        match ev.key {
            Key::Enter => {
                if self.lines.len() < EDITOR_MAX_LINES {
                    self.lines.insert(self.selected + 1, String::new());
                    self.selected += 1;
                    self.mark_unsaved()
                } else {
                    ContentEffect::None
                }
            }
            Key::Backspace => {
                if !self.lines[self.selected].is_empty() {
                    self.lines[self.selected].pop();
                    self.mark_unsaved()
                } else if self.selected > 0 {
                    // an empty line merges into its predecessor
                    self.lines.remove(self.selected);
                    self.selected -= 1;
                    self.mark_unsaved()
                } else {
                    ContentEffect::None
                }
            }
            Key::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                ContentEffect::None
            }
            Key::Down => {
                if self.selected + 1 < self.lines.len() {
                    self.selected += 1;
                }
                ContentEffect::None
            }
            _ => {
                if let Some(c) = ev.printable() {
                    self.lines[self.selected].push(c);
                    self.mark_unsaved()
                } else {
                    ContentEffect::None
                }
            }
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, win: &Window) {
        fill_rect(
            canvas,
            win.x + CONTENT_MARGIN,
            win.y + TITLE_BAR_HEIGHT + CONTENT_MARGIN,
            win.w - 2 * CONTENT_MARGIN,
            win.h - TITLE_BAR_HEIGHT - 5 * CONTENT_MARGIN,
            COLOR_PANEL,
        );

        for (i, line) in self.lines.iter().enumerate() {
            let y = win.y + TEXT_TOP + i as i32 * LINE_HEIGHT;
            let selected = i == self.selected;
            if selected {
                fill_rect(
                    canvas,
                    win.x + CONTENT_MARGIN,
                    y - 2,
                    win.w - 2 * CONTENT_MARGIN,
                    LINE_HEIGHT,
                    COLOR_SELECTION,
                );
            }
            let color = if selected { COLOR_TEXT_LIGHT } else { COLOR_TEXT_DARK };
            draw_str(canvas, win.x + CONTENT_MARGIN + 5, y, line, color, Color32::TRANSPARENT);
        }

        self.save_button.draw(canvas, (win.x, win.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesper_fs::RamFs;
    use vesper_lib::ManualClock;

    const W: i32 = 400;
    const H: i32 = 300;

    fn fs_with(path: &str, contents: &str) -> RamFs {
        let mut fs = RamFs::new();
        fs.add_file(path, contents).unwrap();
        fs
    }

    #[test]
    fn open_splits_lines_and_titles_cleanly() {
        let fs = fs_with("0:\\n.txt", "one\ntwo\nthree\n");
        let editor = Editor::open("0:\\n.txt", W, H, &fs);
        assert_eq!(editor.lines(), ["one", "two", "three"]);
        assert_eq!(editor.window_title(), "Editor - n.txt");
    }

    #[test]
    fn empty_file_gets_the_empty_marker() {
        let fs = fs_with("0:\\e.txt", "");
        let editor = Editor::open("0:\\e.txt", W, H, &fs);
        assert_eq!(editor.window_title(), "Editor - e.txt | Empty");
        assert_eq!(editor.lines(), [""]);
    }

    #[test]
    fn backspace_on_empty_line_merges_into_predecessor() {
        let fs = fs_with("0:\\m.txt", "alpha\n\ngamma\n");
        let mut editor = Editor::open("0:\\m.txt", W, H, &fs);
        editor.on_key(KeyEvent::new(Key::Down));
        assert_eq!(editor.selected(), 1);

        let fx = editor.on_key(KeyEvent::new(Key::Backspace));
        assert_eq!(editor.lines(), ["alpha", "gamma"]);
        assert_eq!(editor.selected(), 0);
        assert!(editor.is_unsaved());
        assert_eq!(fx, ContentEffect::SetTitle("Editor - m.txt | Unsaved".into()));
    }

    #[test]
    fn backspace_on_text_deletes_the_last_character() {
        let fs = fs_with("0:\\t.txt", "abc\n");
        let mut editor = Editor::open("0:\\t.txt", W, H, &fs);
        editor.on_key(KeyEvent::new(Key::Backspace));
        assert_eq!(editor.lines(), ["ab"]);
        assert!(editor.is_unsaved());
    }

    #[test]
    fn enter_inserts_a_line_up_to_the_bound() {
        let fs = fs_with("0:\\t.txt", "a\n");
        let mut editor = Editor::open("0:\\t.txt", W, H, &fs);
        for _ in 0..EDITOR_MAX_LINES + 3 {
            editor.on_key(KeyEvent::new(Key::Enter));
        }
        assert_eq!(editor.lines().len(), EDITOR_MAX_LINES);
    }

    #[test]
    fn save_round_trips_and_clears_the_marker() {
        let mut fs = fs_with("0:\\r.txt", "one\ntwo\n");
        let mut editor = Editor::open("0:\\r.txt", W, H, &fs);
        editor.on_key(KeyEvent::ch('!'));
        assert!(editor.is_unsaved());

        let clock = ManualClock::new();
        let mut ctx = AppCtx {
            fs: &mut fs,
            clock: &clock,
        };
        // the Save control sits in a strip along the bottom edge
        let fx = editor.on_click(10, H - 20, &mut ctx);
        assert_eq!(fx, ContentEffect::SetTitle("Editor - r.txt".into()));
        assert!(!editor.is_unsaved());

        assert_eq!(fs.read_to_string("0:\\r.txt").unwrap(), "one!\ntwo\n");
        let reopened = Editor::open("0:\\r.txt", W, H, &fs);
        assert_eq!(reopened.lines(), editor.lines());
    }

    #[test]
    fn arrows_stay_within_the_buffer() {
        let fs = fs_with("0:\\t.txt", "a\nb\n");
        let mut editor = Editor::open("0:\\t.txt", W, H, &fs);
        editor.on_key(KeyEvent::new(Key::Up));
        assert_eq!(editor.selected(), 0);
        editor.on_key(KeyEvent::new(Key::Down));
        editor.on_key(KeyEvent::new(Key::Down));
        assert_eq!(editor.selected(), 1);
    }
}

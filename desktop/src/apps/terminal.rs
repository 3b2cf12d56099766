use vesper_abi::{Canvas, Color32, Key, KeyEvent};
use vesper_gfx::{draw_str, fill_rect};
use vesper_lib::BoundedRing;

use crate::theme::{COLOR_TERMINAL_BG, COLOR_TEXT_LIGHT, CONTENT_MARGIN, LINE_HEIGHT, TITLE_BAR_HEIGHT};
use crate::window::Window;

use super::commands;
use super::{AppCtx, ContentEffect};

/// Visible scrollback bound; appending beyond it evicts the oldest line.
pub const SCROLLBACK_LINES: usize = 29;
/// Command history bound.
pub const HISTORY_LINES: usize = 100;

const PROMPT: &str = ">";

/// Command-line terminal bound to a window. Keys build up an input
/// line; Enter hands it to the command interpreter and appends the echo
/// plus output to the scrollback.
pub struct Terminal {
    scrollback: BoundedRing<String>,
    history: BoundedRing<String>,
    input: String,
    cwd: String,
}

impl Terminal {
    pub fn new() -> Self {
        let mut term = Self {
            scrollback: BoundedRing::new(SCROLLBACK_LINES),
            history: BoundedRing::new(HISTORY_LINES),
            input: String::new(),
            cwd: vesper_fs::shellpath::ROOT.to_string(),
        };
        term.push_line("Vesper Terminal");
        term.push_line("Type 'help' for available commands");
        term.push_line("");
        term
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.scrollback.iter().map(String::as_str)
    }

    fn push_line(&mut self, line: impl Into<String>) {
        self.scrollback.push(line.into());
    }

    pub fn on_click(&mut self, _lx: i32, _ly: i32) -> ContentEffect {
        // clicks land in the client area but the terminal is keyboard-only
        ContentEffect::None
    }

    pub fn on_key(&mut self, ev: KeyEvent, ctx: &mut AppCtx<'_>) -> ContentEffect {
        match ev.key {
            Key::Enter => {
                let line = std::mem::take(&mut self.input);
                self.run(line, ctx)
            }
            Key::Backspace => {
                self.input.pop();
                ContentEffect::None
            }
            _ => {
                if let Some(c) = ev.printable() {
                    self.input.push(c);
                }
                ContentEffect::None
            }
        }
    }

    fn run(&mut self, line: String, ctx: &mut AppCtx<'_>) -> ContentEffect {
        self.push_line(format!("{}{PROMPT} {line}", self.cwd));
        if line.trim().is_empty() {
            return ContentEffect::None;
        }

        let outcome = commands::interpret(&line, &self.cwd, &self.history, ctx);

        if outcome.clear {
            self.scrollback.clear();
        }
        for out in outcome.lines {
            self.push_line(out);
        }
        if let Some(cwd) = outcome.new_cwd {
            self.cwd = cwd;
        }
        self.history.push(line);

        outcome.effect
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, win: &Window) {
        fill_rect(
            canvas,
            win.x + CONTENT_MARGIN,
            win.y + TITLE_BAR_HEIGHT + CONTENT_MARGIN,
            win.w - 2 * CONTENT_MARGIN,
            win.h - TITLE_BAR_HEIGHT - 2 * CONTENT_MARGIN,
            COLOR_TERMINAL_BG,
        );

        let text_x = win.x + CONTENT_MARGIN + 5;
        let mut y = win.y + TITLE_BAR_HEIGHT + CONTENT_MARGIN + 5;
        for line in self.scrollback.iter() {
            draw_str(canvas, text_x, y, line, COLOR_TEXT_LIGHT, Color32::TRANSPARENT);
            y += LINE_HEIGHT;
        }

        let prompt_line = format!("{}{PROMPT} {}", self.cwd, self.input);
        draw_str(canvas, text_x, y, &prompt_line, COLOR_TEXT_LIGHT, Color32::TRANSPARENT);

        let cursor_x = text_x + vesper_gfx::str_width(&prompt_line);
        canvas.vline(cursor_x, y, y + vesper_gfx::FONT_CHAR_HEIGHT, COLOR_TEXT_LIGHT);
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesper_fs::RamFs;
    use vesper_lib::ManualClock;

    fn type_line(term: &mut Terminal, fs: &mut RamFs, text: &str) -> ContentEffect {
        let clock = ManualClock::new();
        let mut ctx = AppCtx { fs, clock: &clock };
        for c in text.chars() {
            term.on_key(KeyEvent::ch(c), &mut ctx);
        }
        term.on_key(KeyEvent::new(Key::Enter), &mut ctx)
    }

    #[test]
    fn enter_commits_the_input_line() {
        let mut term = Terminal::new();
        let mut fs = RamFs::new();
        type_line(&mut term, &mut fs, "echo hello there");
        let lines: Vec<_> = term.lines().collect();
        assert!(lines.iter().any(|l| *l == "hello there"));
        assert!(lines.iter().any(|l| l.contains("> echo hello there")));
        assert!(term.input.is_empty());
    }

    #[test]
    fn backspace_edits_the_input_line() {
        let mut term = Terminal::new();
        let mut fs = RamFs::new();
        let clock = ManualClock::new();
        let mut ctx = AppCtx {
            fs: &mut fs,
            clock: &clock,
        };
        for c in "hxe".chars() {
            term.on_key(KeyEvent::ch(c), &mut ctx);
        }
        term.on_key(KeyEvent::new(Key::Backspace), &mut ctx);
        term.on_key(KeyEvent::new(Key::Backspace), &mut ctx);
        term.on_key(KeyEvent::ch('e'), &mut ctx);
        assert_eq!(term.input, "he");
    }

    #[test]
    fn scrollback_stays_within_its_bound() {
        let mut term = Terminal::new();
        let mut fs = RamFs::new();
        for i in 0..SCROLLBACK_LINES {
            type_line(&mut term, &mut fs, &format!("echo line-{i}"));
        }
        assert!(term.lines().count() <= SCROLLBACK_LINES);
        // the banner has been evicted by now
        assert!(!term.lines().any(|l| l == "Vesper Terminal"));
        // newest output survives
        let last = format!("line-{}", SCROLLBACK_LINES - 1);
        assert!(term.lines().any(|l| l == last));
    }

    #[test]
    fn exit_requests_window_close() {
        let mut term = Terminal::new();
        let mut fs = RamFs::new();
        assert_eq!(
            type_line(&mut term, &mut fs, "exit"),
            ContentEffect::CloseWindow
        );
    }
}

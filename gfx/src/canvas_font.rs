//! Fixed-cell text rendering over the `font8x8` glyph set.
//!
//! Glyph rows are bytes with the least-significant bit on the left.
//! A `Color32::TRANSPARENT` background leaves untouched pixels behind
//! the glyph; anything else paints the full cell.

use font8x8::{BASIC_FONTS, UnicodeFonts};
use vesper_abi::{Canvas, Color32};

pub const FONT_CHAR_WIDTH: i32 = 8;
pub const FONT_CHAR_HEIGHT: i32 = 8;

const TAB_CELLS: i32 = 4;

fn glyph_for(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

pub fn draw_char<T: Canvas + ?Sized>(
    target: &mut T,
    x: i32,
    y: i32,
    ch: char,
    fg: Color32,
    bg: Color32,
) {
    let glyph = glyph_for(ch);
    let has_bg = bg != Color32::TRANSPARENT;

    for (row_idx, &row_bits) in glyph.iter().enumerate() {
        let py = y + row_idx as i32;
        for col in 0..FONT_CHAR_WIDTH {
            let px = x + col;
            if (row_bits >> col) & 1 == 1 {
                target.put_pixel(px, py, fg);
            } else if has_bg {
                target.put_pixel(px, py, bg);
            }
        }
    }
}

/// Draw a string starting at `(x, y)`. Newlines return to `x` on the
/// next text row; tabs advance to the next tab stop.
pub fn draw_str<T: Canvas + ?Sized>(
    target: &mut T,
    x: i32,
    y: i32,
    text: &str,
    fg: Color32,
    bg: Color32,
) {
    let mut cx = x;
    let mut cy = y;

    for ch in text.chars() {
        match ch {
            '\n' => {
                cx = x;
                cy += FONT_CHAR_HEIGHT;
            }
            '\r' => {
                cx = x;
            }
            '\t' => {
                let tab_width = TAB_CELLS * FONT_CHAR_WIDTH;
                cx = ((cx - x + tab_width) / tab_width) * tab_width + x;
            }
            _ => {
                draw_char(target, cx, cy, ch, fg, bg);
                cx += FONT_CHAR_WIDTH;
            }
        }
        if cy >= target.height() as i32 {
            break;
        }
    }
}

/// Pixel width of the first line of `text`.
pub fn str_width(text: &str) -> i32 {
    let mut width = 0i32;
    for ch in text.chars() {
        match ch {
            '\n' => break,
            '\t' => {
                let tab_width = TAB_CELLS * FONT_CHAR_WIDTH;
                width = ((width + tab_width - 1) / tab_width) * tab_width;
            }
            _ => width += FONT_CHAR_WIDTH,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Framebuffer;

    #[test]
    fn str_width_counts_cells() {
        assert_eq!(str_width("start"), 5 * FONT_CHAR_WIDTH);
        assert_eq!(str_width("ab\ncdef"), 2 * FONT_CHAR_WIDTH);
    }

    #[test]
    fn draw_char_sets_foreground_pixels() {
        let mut fb = Framebuffer::new(16, 16);
        draw_char(&mut fb, 0, 0, 'X', Color32::WHITE, Color32::TRANSPARENT);
        let lit = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y) == Color32::WHITE.to_u32())
            .count();
        assert!(lit > 0);
    }
}

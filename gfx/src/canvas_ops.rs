use vesper_abi::{Canvas, Color32};

pub fn fill_rect<T: Canvas + ?Sized>(target: &mut T, x: i32, y: i32, w: i32, h: i32, color: Color32) {
    target.fill_rect_px(x, y, w, h, color);
}

/// One-pixel rectangle outline.
pub fn draw_rect<T: Canvas + ?Sized>(target: &mut T, x: i32, y: i32, w: i32, h: i32, color: Color32) {
    if w <= 0 || h <= 0 {
        return;
    }
    target.hline(x, x + w - 1, y, color);
    target.hline(x, x + w - 1, y + h - 1, color);
    target.vline(x, y, y + h - 1, color);
    target.vline(x + w - 1, y, y + h - 1, color);
}

/// Bresenham line between two points, inclusive.
pub fn draw_line<T: Canvas + ?Sized>(
    target: &mut T,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color32,
) {
    let w = target.width() as i32;
    let h = target.height() as i32;

    if (x0 < 0 && x1 < 0) || (y0 < 0 && y1 < 0) || (x0 >= w && x1 >= w) || (y0 >= h && y1 >= h) {
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cx = x0;
    let mut cy = y0;

    loop {
        target.put_pixel(cx, cy, color);
        if cx == x1 && cy == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            cx += sx;
        }
        if e2 <= dx {
            err += dx;
            cy += sy;
        }
    }
}

/// Vertical gradient fill: `top` at the first row, `bottom` at the last,
/// linearly interpolated per row.
pub fn fill_gradient_v<T: Canvas + ?Sized>(
    target: &mut T,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    top: Color32,
    bottom: Color32,
) {
    if w <= 0 || h <= 0 {
        return;
    }
    for row in 0..h {
        let num = row as u32;
        let den = h as u32;
        let r = lerp_channel(top.red(), bottom.red(), num, den);
        let g = lerp_channel(top.green(), bottom.green(), num, den);
        let b = lerp_channel(top.blue(), bottom.blue(), num, den);
        target.fill_row_span(y + row, x, x + w - 1, Color32::rgb(r, g, b));
    }
}

#[inline]
fn lerp_channel(a: u8, b: u8, num: u32, den: u32) -> u8 {
    let a = a as i32;
    let b = b as i32;
    (a + (b - a) * num as i32 / den as i32) as u8
}

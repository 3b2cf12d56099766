//! Full-scene compositor. No partial invalidation: when the dirty flag
//! is set, the whole stack is repainted back-to-front (background,
//! taskbar, windows, start menu, cursor, FPS overlay).

use vesper_abi::{Canvas, Color32};
use vesper_gfx::{draw_str, fill_gradient_v, fill_rect};

use crate::desktop::Desktop;
use crate::taskbar;
use crate::theme::*;

pub(crate) fn render(desktop: &Desktop, canvas: &mut dyn Canvas) {
    draw_background(canvas);
    draw_taskbar(canvas);

    for win in &desktop.windows {
        win.draw(canvas);
    }

    if desktop.menu_open {
        desktop.start_menu.draw(canvas);
    }

    draw_cursor(canvas, desktop.pointer);
    draw_fps(canvas, desktop.fps.current());
}

fn draw_background(canvas: &mut dyn Canvas) {
    fill_gradient_v(
        canvas,
        0,
        0,
        SCREEN_WIDTH,
        SCREEN_HEIGHT - TASKBAR_HEIGHT,
        COLOR_DESKTOP_TOP,
        COLOR_DESKTOP_BOTTOM,
    );
}

fn draw_taskbar(canvas: &mut dyn Canvas) {
    let top = taskbar::taskbar_top();
    fill_rect(canvas, 0, top, SCREEN_WIDTH, TASKBAR_HEIGHT, COLOR_TASKBAR);

    fill_rect(
        canvas,
        START_BUTTON_INSET,
        top + START_BUTTON_INSET,
        START_REGION_WIDTH,
        TASKBAR_HEIGHT - 2 * START_BUTTON_INSET,
        COLOR_START_BUTTON,
    );
    draw_str(
        canvas,
        20,
        top + (TASKBAR_HEIGHT - vesper_gfx::FONT_CHAR_HEIGHT) / 2,
        "Start",
        COLOR_TEXT_LIGHT,
        Color32::TRANSPARENT,
    );
}

fn draw_cursor(canvas: &mut dyn Canvas, pointer: (i32, i32)) {
    let (mx, my) = pointer;
    canvas.hline(mx - 8, mx + 8, my, COLOR_CURSOR);
    canvas.vline(mx, my - 8, my + 8, COLOR_CURSOR);
}

fn draw_fps(canvas: &mut dyn Canvas, fps: u32) {
    draw_str(
        canvas,
        20,
        20,
        &format!("FPS: {fps}"),
        COLOR_FPS_TEXT,
        Color32::TRANSPARENT,
    );
}

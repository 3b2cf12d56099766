use vesper_abi::Color32;
use vesper_abi::draw::rgb;

// Screen / layout
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const TASKBAR_HEIGHT: i32 = 40;

// Window chrome
pub const TITLE_BAR_HEIGHT: i32 = 25;
pub const CLOSE_BUTTON_SIZE: i32 = 16;
pub const CLOSE_BUTTON_MARGIN: i32 = 2;

// Taskbar / start menu
pub const START_REGION_WIDTH: i32 = 80;
pub const START_BUTTON_INSET: i32 = 5;
pub const START_MENU_WIDTH: i32 = 200;
pub const START_MENU_HEIGHT: i32 = 210;

// Content layout
pub const CONTENT_MARGIN: i32 = 5;
pub const LINE_HEIGHT: i32 = 15;
pub const ENTRY_HEIGHT: i32 = 18;
pub const ICON_SIZE: i32 = 16;

// Colors
pub const COLOR_DESKTOP_TOP: Color32 = rgb(0x64, 0x95, 0xED);
pub const COLOR_DESKTOP_BOTTOM: Color32 = rgb(0x00, 0x00, 0x8B);
pub const COLOR_TASKBAR: Color32 = rgb(40, 40, 40);
pub const COLOR_START_BUTTON: Color32 = rgb(0, 122, 204);

pub const COLOR_TITLE_BAR: Color32 = rgb(0xA9, 0xA9, 0xA9);
pub const COLOR_OUTLINE: Color32 = Color32::BLACK;
pub const COLOR_CLOSE_BUTTON: Color32 = rgb(0xE8, 0x11, 0x23);
pub const COLOR_TEXT_LIGHT: Color32 = Color32::WHITE;
pub const COLOR_TEXT_DARK: Color32 = Color32::BLACK;

pub const COLOR_MENU_BG: Color32 = rgb(0xD3, 0xD3, 0xD3);
pub const COLOR_MENU_BUTTON: Color32 = rgb(0x80, 0x80, 0x80);

pub const COLOR_WINDOW_GRAY: Color32 = rgb(0x80, 0x80, 0x80);
pub const COLOR_PANEL: Color32 = rgb(0xA9, 0xA9, 0xA9);
pub const COLOR_SELECTION: Color32 = rgb(0x00, 0x00, 0xFF);
pub const COLOR_DIR_ICON: Color32 = rgb(0xFF, 0xFF, 0x00);
pub const COLOR_FILE_ICON: Color32 = rgb(0xD3, 0xD3, 0xD3);

pub const COLOR_TERMINAL_BG: Color32 = Color32::BLACK;
pub const COLOR_EDITOR_BG: Color32 = Color32::WHITE;
pub const COLOR_SAVE_BUTTON: Color32 = rgb(0x00, 0x64, 0x00);

pub const COLOR_CURSOR: Color32 = Color32::WHITE;
pub const COLOR_FPS_TEXT: Color32 = Color32::BLACK;

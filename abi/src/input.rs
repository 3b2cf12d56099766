//! Pointer and keyboard event types, plus the input port trait.

use bitflags::bitflags;

bitflags! {
    /// Pointer button state as sampled once per frame.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct MouseButtons: u8 {
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

/// A decoded key. Printable input arrives as `Char`; everything the
/// shell reacts to has its own variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Delete,
    Home,
    End,
}

/// A single key-press event as delivered by the host's non-blocking
/// poll. Key releases are not reported; the shell has no use for them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    #[inline]
    pub const fn new(key: Key) -> Self {
        Self { key }
    }

    /// Convenience constructor for printable input.
    #[inline]
    pub const fn ch(c: char) -> Self {
        Self { key: Key::Char(c) }
    }

    /// The printable character carried by this event, if any.
    #[inline]
    pub fn printable(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// The input side of the platform boundary.
///
/// `pointer_position` and `buttons` are sampled exactly once per frame
/// by the dispatcher and used consistently for edge detection and drag
/// continuation within that frame. `next_key` is a non-blocking poll,
/// drained until empty each frame.
pub trait InputPort {
    fn pointer_position(&mut self) -> (i32, i32);

    fn buttons(&mut self) -> MouseButtons;

    fn next_key(&mut self) -> Option<KeyEvent>;
}

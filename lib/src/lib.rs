//! Support types shared across the Vesper workspace.

pub mod clock;
pub mod ring;

pub use clock::{Clock, ManualClock, SystemClock, WallTime};
pub use ring::BoundedRing;

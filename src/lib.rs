#![no_std]

pub mod columns;
pub mod mailbox;
pub mod mode;
pub mod motion;
pub mod pixel;
pub mod renderer;
pub mod sensing;
pub mod strip;

pub use columns::{CapacityError, ColumnBuffer};
pub use mailbox::SwingMailbox;
pub use mode::DisplayMode;
pub use motion::{AccelSample, Direction, MotionFilter, SwingEvent};
pub use pixel::{ChannelLayout, PixelCountError, PixelWord, Rgb, StripGeometry};
pub use renderer::{Palette, WandRenderer, per_column_budget};
pub use sensing::SwingSensing;
pub use strip::StripTransmitter;

pub use embassy_time::{Duration, Instant};

/// Abstract pixel transport trait
///
/// Implement this trait to support different hardware push primitives
/// (PIO state machines, RMT channels, SPI). The transmitter is generic
/// over this trait so tests can substitute deterministic timing.
pub trait PixelBus {
    /// Push one 32-bit transfer word, blocking until the output
    /// buffer accepts it
    fn push(&mut self, word: u32);

    /// Check whether the output buffer has fully drained
    fn is_idle(&self) -> bool;
}

/// Abstract accelerometer axis trait
///
/// One synchronous poll-style read of the sensing axis, no buffering
/// assumed. The register-level bus driver lives behind this seam.
pub trait AxisSensor {
    /// Read the current raw signed axis value
    fn read_axis(&mut self) -> i16;
}

//! Single-slot swing handoff between the sensing and rendering tasks.
//!
//! A completed swing is packed into one 32-bit word and published
//! through an overwrite-latest signal: publishing replaces any
//! unconsumed value, so the renderer always observes the most recent
//! swing, never a backlog.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::motion::{Direction, SwingEvent};

const DIRECTION_BIT: u32 = 1 << 31;

/// Pack a swing into one transfer word: duration in the low 31 bits,
/// direction in bit 31.
///
/// A duration of 2^31 µs (~35.79 min) or more overflows into the
/// direction bit. That bound is inherent to the word format and is
/// left as a documented limit.
pub const fn encode(event: SwingEvent) -> u32 {
    (event.direction as u32) << 31 | event.duration_us
}

/// Unpack a swing word produced by [`encode`].
pub const fn decode(word: u32) -> SwingEvent {
    let direction = if word & DIRECTION_BIT != 0 {
        Direction::Forward
    } else {
        Direction::Reverse
    };
    SwingEvent {
        direction,
        duration_us: word & !DIRECTION_BIT,
    }
}

/// One-deep, overwrite-latest mailbox carrying packed swing words.
///
/// The single-word publish is the only synchronization between the
/// two tasks; decode never observes fields from two different sends.
/// `const`-constructible so firmware can place it in a `static`.
pub struct SwingMailbox {
    inner: Signal<CriticalSectionRawMutex, u32>,
}

impl SwingMailbox {
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    /// Publish a swing, replacing any unconsumed one.
    pub fn send(&self, event: SwingEvent) {
        self.inner.signal(encode(event));
    }

    /// Take the latest swing published since the last receive, if any.
    pub fn try_receive(&self) -> Option<SwingEvent> {
        self.inner.try_take().map(decode)
    }

    /// Suspend the calling task until a swing is published.
    pub async fn receive(&self) -> SwingEvent {
        decode(self.inner.wait().await)
    }
}

impl Default for SwingMailbox {
    fn default() -> Self {
        Self::new()
    }
}

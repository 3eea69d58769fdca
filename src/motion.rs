//! Swing direction extraction from raw acceleration samples.
//!
//! A hysteresis filter turns the sign of the jerk (rate of change of
//! acceleration) into a confirmed swing direction: the confirmed
//! direction flips only when the last `WINDOW` raw sign bits
//! unanimously disagree with it. Each confirmed flip closes one
//! half-swing and reports its duration.

use embassy_time::{Duration, Instant};

/// Conversion factor from a raw ADXL34x axis reading to m/s²
/// (4 mg per LSB at full resolution).
const RAW_TO_MSS: f32 = 0.039_226_6;

/// One accelerometer poll.
#[derive(Debug, Clone, Copy)]
pub struct AccelSample {
    pub at: Instant,
    pub raw: i16,
}

/// Direction of wand travel.
///
/// `Forward` corresponds to positive jerk; the renderer walks message
/// columns in ascending order for `Forward` and descending for
/// `Reverse` so the text reads the same on both half-swings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Reverse = 0,
    Forward = 1,
}

/// One completed half-swing, bounded by two confirmed direction flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwingEvent {
    pub direction: Direction,
    /// Duration of the completed swing in microseconds
    pub duration_us: u32,
}

/// Hysteresis filter over raw jerk signs.
///
/// `WINDOW` is the number of consecutive agreeing sign bits required
/// before the confirmed direction may flip.
#[derive(Debug, Clone)]
pub struct MotionFilter<const WINDOW: usize> {
    /// Previous sample time and acceleration, for the jerk quotient
    prev: Option<(Instant, f32)>,
    /// Raw jerk-sign history, bit 0 newest
    hidden: u32,
    /// Confirmed-direction history, bit 0 newest
    display: u32,
    confirmed: Direction,
    last_flip_at: Option<Instant>,
}

impl<const WINDOW: usize> MotionFilter<WINDOW> {
    const MASK: u32 = if WINDOW >= 32 {
        u32::MAX
    } else {
        (1 << WINDOW) - 1
    };

    /// Create a filter with the given starting confirmed direction.
    ///
    /// The sign history is seeded to agree with the starting direction
    /// so the window is unanimous at rest.
    pub const fn new(initial: Direction) -> Self {
        let seed = match initial {
            Direction::Forward => u32::MAX,
            Direction::Reverse => 0,
        };
        Self {
            prev: None,
            hidden: seed,
            display: seed,
            confirmed: initial,
            last_flip_at: None,
        }
    }

    /// Feed one sample; returns a completed swing on a confirmed flip.
    pub fn poll(&mut self, sample: AccelSample) -> Option<SwingEvent> {
        let accel = f32::from(sample.raw) * RAW_TO_MSS;

        let bit = match self.prev {
            Some((prev_at, prev_accel)) => {
                let elapsed_us = (sample.at - prev_at).as_micros();
                if elapsed_us == 0 {
                    // degenerate poll spacing, keep the previous sign
                    self.hidden & 1
                } else {
                    let jerk = (accel - prev_accel) / elapsed_us as f32;
                    if jerk < 0.0 {
                        0
                    } else if jerk > 0.0 {
                        1
                    } else {
                        self.hidden & 1
                    }
                }
            }
            None => {
                // first poll: no jerk yet, start the swing clock here
                self.last_flip_at = Some(sample.at);
                self.hidden & 1
            }
        };
        self.prev = Some((sample.at, accel));
        self.hidden = self.hidden << 1 | bit;

        let event = self.resolve_flip(sample.at);
        self.display = self.display << 1 | self.confirmed as u32;
        event
    }

    /// Flip the confirmed direction iff the window unanimously
    /// disagrees with it.
    fn resolve_flip(&mut self, now: Instant) -> Option<SwingEvent> {
        let window = self.hidden & Self::MASK;
        let flipped = match self.confirmed {
            Direction::Forward if window == 0 => Direction::Reverse,
            Direction::Reverse if window == Self::MASK => Direction::Forward,
            _ => return None,
        };

        self.confirmed = flipped;
        let duration_us = self
            .last_flip_at
            .map_or(0, |at| (now - at).as_micros()) as u32;
        self.last_flip_at = Some(now);
        Some(SwingEvent {
            direction: flipped,
            duration_us,
        })
    }

    /// Current confirmed direction
    pub const fn confirmed(&self) -> Direction {
        self.confirmed
    }

    /// Rolling confirmed-direction history, bit 0 newest
    pub const fn display_history(&self) -> u32 {
        self.display
    }

    /// Time of the most recent confirmed flip or re-arm, if any
    pub const fn last_flip_at(&self) -> Option<Instant> {
        self.last_flip_at
    }

    /// Whether no flip has been confirmed within `timeout`
    pub fn is_stale(&self, now: Instant, timeout: Duration) -> bool {
        self.last_flip_at
            .is_some_and(|at| now.saturating_duration_since(at) > timeout)
    }

    /// Restart the swing clock at `now`.
    ///
    /// Called after a stale-direction timeout so a resumed swing does
    /// not report a duration spanning the idle gap.
    pub fn rearm(&mut self, now: Instant) {
        self.last_flip_at = Some(now);
    }
}

impl<const WINDOW: usize> Default for MotionFilter<WINDOW> {
    fn default() -> Self {
        Self::new(Direction::Forward)
    }
}

//! Timed strip transmission over a 32-bit push primitive.
//!
//! GRBW strips take one transfer word per pixel. GRB strips stream
//! 3 channel bytes per pixel packed 4 bytes per word, so words do not
//! align with pixel boundaries; the byte stream runs contiguously and
//! a partial final word is zero-padded. After the last word the
//! transmitter waits for the transport to drain and then holds the
//! inter-frame reset gap required by the wire protocol.

use embassy_time::{Duration, Instant, Timer};

use crate::PixelBus;
use crate::pixel::{ChannelLayout, PixelWord, StripGeometry};

/// Minimum idle gap between frames.
///
/// The protocol floor is ~50 µs; 200 µs leaves margin for the last
/// word still shifting out after the FIFO reports empty.
pub const RESET_GAP: Duration = Duration::from_micros(200);

/// Sleep between FIFO-empty polls while draining
const DRAIN_POLL: Duration = Duration::from_micros(1);

/// Encodes pixel data into the strip wire format and transmits it.
pub struct StripTransmitter<B: PixelBus> {
    bus: B,
    geometry: StripGeometry,
}

impl<B: PixelBus> StripTransmitter<B> {
    pub const fn new(bus: B, geometry: StripGeometry) -> Self {
        Self { bus, geometry }
    }

    /// Light every pixel with one color. Returns elapsed µs.
    pub async fn fill(&mut self, color: PixelWord) -> u64 {
        self.transmit(|_| color).await
    }

    /// Light pixels per `pattern`: bit `i` set selects `on` for pixel
    /// `i`, clear selects `off`. Returns elapsed µs.
    pub async fn render(&mut self, pattern: u32, on: PixelWord, off: PixelWord) -> u64 {
        self.transmit(|pixel| if (pattern >> pixel) & 1 == 1 { on } else { off })
            .await
    }

    async fn transmit(&mut self, pixel_at: impl Fn(usize) -> PixelWord) -> u64 {
        let started = Instant::now();

        match self.geometry.layout {
            ChannelLayout::Grbw => self.push_direct(&pixel_at),
            ChannelLayout::Grb => self.push_packed(&pixel_at),
        }

        while !self.bus.is_idle() {
            Timer::after(DRAIN_POLL).await;
        }
        Timer::after(RESET_GAP).await;

        started.elapsed().as_micros()
    }

    /// One full-width transfer word per pixel, pushed unchanged.
    fn push_direct(&mut self, pixel_at: &impl Fn(usize) -> PixelWord) {
        for pixel in 0..self.geometry.pixel_count {
            self.bus.push(pixel_at(pixel).raw());
        }
    }

    /// 3 channel bytes per pixel in G, R, B order, packed 4 bytes per
    /// word with the first byte in the most significant position.
    fn push_packed(&mut self, pixel_at: &impl Fn(usize) -> PixelWord) {
        let total_bytes = 3 * self.geometry.pixel_count;
        let mut word = 0u32;
        let mut filled = 0;

        for byte in 0..total_bytes {
            let value = pixel_at(byte / 3).channel(byte % 3);
            word = word << 8 | u32::from(value);
            filled += 1;
            if filled == 4 {
                self.bus.push(word);
                word = 0;
                filled = 0;
            }
        }

        if filled > 0 {
            // zero-pad the trailing bytes of an incomplete word
            self.bus.push(word << (8 * (4 - filled)));
        }
    }
}

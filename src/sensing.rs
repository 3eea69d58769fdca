//! Sensing task: polls the accelerometer and publishes completed
//! swings to the mailbox.

use embassy_time::{Duration, Instant, Ticker};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::AxisSensor;
use crate::mailbox::SwingMailbox;
use crate::motion::{AccelSample, MotionFilter};

/// Accelerometer poll cadence
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Elapsed time without a confirmed flip after which the wand is
/// assumed to have stopped moving
pub const DIRECTION_TIMEOUT: Duration = Duration::from_millis(500);

/// Sensing task: feeds samples to the hysteresis filter at a fixed
/// cadence and ships confirmed swings to the renderer.
pub struct SwingSensing<'a, S: AxisSensor, const WINDOW: usize> {
    sensor: S,
    filter: MotionFilter<WINDOW>,
    swings: &'a SwingMailbox,
}

impl<'a, S: AxisSensor, const WINDOW: usize> SwingSensing<'a, S, WINDOW> {
    pub const fn new(
        sensor: S,
        filter: MotionFilter<WINDOW>,
        swings: &'a SwingMailbox,
    ) -> Self {
        Self {
            sensor,
            filter,
            swings,
        }
    }

    /// Main sensing loop. Call this from the sensing task.
    pub async fn run(&mut self) -> ! {
        let mut ticker = Ticker::every(POLL_INTERVAL);
        loop {
            ticker.next().await;

            let sample = AccelSample {
                at: Instant::now(),
                raw: self.sensor.read_axis(),
            };
            if let Some(event) = self.filter.poll(sample) {
                #[cfg(feature = "esp32-log")]
                println!(
                    "swing: dir={:?} duration={}us",
                    event.direction, event.duration_us
                );
                self.swings.send(event);
            } else if self.filter.is_stale(sample.at, DIRECTION_TIMEOUT) {
                // resumed motion should not report the idle gap as a
                // swing duration
                self.filter.rearm(sample.at);
            }
        }
    }
}

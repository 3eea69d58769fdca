use embassy_time::{Duration, Timer, with_timeout};

use crate::PixelBus;
use crate::columns::ColumnBuffer;
use crate::mailbox::SwingMailbox;
use crate::mode::DisplayMode;
use crate::motion::{Direction, SwingEvent};
use crate::pixel::{PixelWord, Rgb, StripGeometry};
use crate::strip::StripTransmitter;

/// How long the renderer waits for a swing before treating the wand
/// as resting
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(500);

/// Time each column may occupy so the whole buffer fits the swing.
///
/// Degenerate inputs (zero duration, zero columns) yield a zero
/// budget instead of a division fault.
pub const fn per_column_budget(duration_us: u32, total_columns: usize) -> u64 {
    if total_columns == 0 {
        0
    } else {
        duration_us as u64 / total_columns as u64
    }
}

/// Remaining sleep after a column transmission, clamped at zero.
///
/// A transmission slower than the budget simply runs the pass past
/// the nominal swing duration.
pub const fn column_sleep(budget_us: u64, elapsed_us: u64) -> u64 {
    budget_us.saturating_sub(elapsed_us)
}

/// Composed colors for everything the wand paints.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Lit message pixels
    pub message: PixelWord,
    /// Unlit pixels inside a column
    pub background: PixelWord,
    /// Whole strip while the wand rests
    pub rest: PixelWord,
    /// Ambient color for forward travel
    pub forward: PixelWord,
    /// Ambient color for reverse travel
    pub reverse: PixelWord,
}

impl Palette {
    /// The wand's stock colors: blue-white ink on a faint green
    /// background, dim blue at rest, red/green direction colors.
    pub const fn classic(geometry: StripGeometry) -> Self {
        Self {
            message: geometry.compose(Rgb {
                r: 90,
                g: 149,
                b: 207,
            }),
            background: geometry.compose(Rgb { r: 0, g: 15, b: 0 }),
            rest: geometry.compose(Rgb { r: 0, g: 0, b: 15 }),
            forward: geometry.compose(Rgb { r: 0, g: 255, b: 0 }),
            reverse: geometry.compose(Rgb { r: 255, g: 0, b: 0 }),
        }
    }
}

/// Rendering task: replays swings received from the mailbox onto the
/// strip.
pub struct WandRenderer<'a, B: PixelBus, const MAX_COLUMNS: usize> {
    strip: StripTransmitter<B>,
    columns: &'a ColumnBuffer<MAX_COLUMNS>,
    swings: &'a SwingMailbox,
    palette: Palette,
}

impl<'a, B: PixelBus, const MAX_COLUMNS: usize> WandRenderer<'a, B, MAX_COLUMNS> {
    pub const fn new(
        strip: StripTransmitter<B>,
        columns: &'a ColumnBuffer<MAX_COLUMNS>,
        swings: &'a SwingMailbox,
        palette: Palette,
    ) -> Self {
        Self {
            strip,
            columns,
            swings,
            palette,
        }
    }

    /// Main render loop. Call this from the rendering task.
    pub async fn run(&mut self) -> ! {
        loop {
            match with_timeout(IDLE_TIMEOUT, self.swings.receive()).await {
                Ok(event) => {
                    let mut next = Some(event);
                    while let Some(current) = next {
                        next = self.pass(current).await;
                    }
                }
                Err(_) => {
                    self.strip.fill(self.palette.rest).await;
                }
            }
        }
    }

    /// Render one swing; returns the superseding event on preemption.
    pub async fn pass(&mut self, event: SwingEvent) -> Option<SwingEvent> {
        match DisplayMode::load() {
            DisplayMode::Message => self.replay_columns(event).await,
            DisplayMode::Ambient => self.hold_direction_color(event).await,
        }
    }

    async fn replay_columns(&mut self, event: SwingEvent) -> Option<SwingEvent> {
        let total = self.columns.len();
        let budget = per_column_budget(event.duration_us, total);

        for step in 0..total {
            if let Some(newer) = self.swings.try_receive() {
                return Some(newer);
            }
            let column = match event.direction {
                Direction::Forward => step,
                Direction::Reverse => total - 1 - step,
            };
            let elapsed = self
                .strip
                .render(
                    self.columns.get(column),
                    self.palette.message,
                    self.palette.background,
                )
                .await;
            let sleep = column_sleep(budget, elapsed);
            if sleep > 0 {
                Timer::after(Duration::from_micros(sleep)).await;
            }
        }
        None
    }

    /// Ambient display: hold the direction color for the swing,
    /// still re-checking the mailbox at column granularity.
    async fn hold_direction_color(&mut self, event: SwingEvent) -> Option<SwingEvent> {
        let color = match event.direction {
            Direction::Forward => self.palette.forward,
            Direction::Reverse => self.palette.reverse,
        };
        let total = self.columns.len();
        let budget = per_column_budget(event.duration_us, total);

        let mut elapsed = self.strip.fill(color).await;
        for _ in 0..total {
            if let Some(newer) = self.swings.try_receive() {
                return Some(newer);
            }
            let sleep = column_sleep(budget, elapsed);
            if sleep > 0 {
                Timer::after(Duration::from_micros(sleep)).await;
            }
            elapsed = 0;
        }
        None
    }
}

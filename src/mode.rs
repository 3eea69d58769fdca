//! Process-wide display-mode flag.
//!
//! Written by the debounced button handler, read by the rendering
//! task. Plain single-word atomic load/store; the only guarantee is
//! that the next read sees the latest value.

use core::sync::atomic::{AtomicU8, Ordering};

const MODE_NAME_MESSAGE: &str = "message";
const MODE_NAME_AMBIENT: &str = "ambient";

const MODE_ID_MESSAGE: u8 = 0;
const MODE_ID_AMBIENT: u8 = 1;

static CURRENT: AtomicU8 = AtomicU8::new(MODE_ID_MESSAGE);

/// What the wand paints during a swing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    /// Replay the message column buffer (persistence of vision)
    Message = MODE_ID_MESSAGE,
    /// Hold a direction-reactive color for the swing
    Ambient = MODE_ID_AMBIENT,
}

impl DisplayMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_MESSAGE => Self::Message,
            MODE_ID_AMBIENT => Self::Ambient,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => MODE_NAME_MESSAGE,
            Self::Ambient => MODE_NAME_AMBIENT,
        }
    }

    /// Latest mode written by the input handler
    pub fn load() -> Self {
        Self::from_raw(CURRENT.load(Ordering::Relaxed)).unwrap_or(Self::Message)
    }

    pub fn store(self) {
        CURRENT.store(self as u8, Ordering::Relaxed);
    }

    /// Advance to the next mode; called from the button edge handler
    pub fn cycle() -> Self {
        let next = match Self::load() {
            Self::Message => Self::Ambient,
            Self::Ambient => Self::Message,
        };
        next.store();
        next
    }
}

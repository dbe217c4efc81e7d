use crate::ScreenSize;

/// Things the driver reacts to between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Exit the application
    Exit,

    /// Stop or resume advancing on every tick
    TogglePause,

    /// Advance by a single generation
    Step,

    /// The terminal changed size
    Resize { cols: ScreenSize, rows: ScreenSize },
}

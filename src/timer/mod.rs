//! Countdown timers: `HHMMSS` entry and formatting, per-timer records, and the board holding them.

pub(crate) mod input;
pub(crate) mod model;
pub(crate) mod timefmt;

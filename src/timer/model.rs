use crate::{
    foundation::error::RingTimerResult,
    scheduler::provider::AnimationEvent,
    timer::{input::TimeInput, timefmt},
};

/// One countdown timer as persisted by the host.
///
/// Times are wall-clock milliseconds supplied by the caller; the record never reads a clock.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerRecord {
    /// Entered duration, `HHMMSS` digits.
    pub time: TimeInput,
    /// Stable id, also the ring's subscriber id.
    pub id: String,
    /// Counting down.
    pub is_running: bool,
    /// Stopped part-way; `accumulated_time` holds the progress.
    pub is_paused: bool,
    /// Elapsed ms banked across previous runs.
    pub accumulated_time: u64,
    /// Wall-clock ms when the current run began.
    pub start_time: Option<u64>,
    /// The ring is animating back after a reset.
    pub is_resetting: bool,
}

impl TimerRecord {
    /// Idle timer with no time entered.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            time: TimeInput::new(),
            id: id.into(),
            is_running: false,
            is_paused: false,
            accumulated_time: 0,
            start_time: None,
            is_resetting: false,
        }
    }

    /// Same record with `time` entered.
    pub fn with_time(mut self, time: TimeInput) -> Self {
        self.time = time;
        self
    }

    /// Entered duration in ms.
    pub fn total_ms(&self) -> u64 {
        self.time.total_ms()
    }

    /// Time counted so far: the current run plus whatever was banked before it.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.start_time {
            Some(start) => now_ms
                .saturating_sub(start)
                .saturating_add(self.accumulated_time),
            None => self.accumulated_time,
        }
    }

    /// Time left, negative once overrun.
    pub fn remaining_ms(&self, now_ms: u64) -> i64 {
        clamp_i64(self.total_ms()).saturating_sub(clamp_i64(self.elapsed_ms(now_ms)))
    }

    /// Countdown text for display, `HH:MM:SS`.
    pub fn display(&self, now_ms: u64) -> RingTimerResult<String> {
        timefmt::format_timer_running(self.time.as_str(), clamp_i64(self.elapsed_ms(now_ms)))
    }

    /// Begin or resume counting. Refused (returns `false`) when already running or nothing is
    /// left to count.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.is_running || self.remaining_ms(now_ms) <= 0 {
            return false;
        }
        self.start_time = Some(now_ms);
        self.is_running = true;
        self.is_paused = false;
        self.is_resetting = false;
        tracing::debug!(id = %self.id, now_ms, "timer started");
        true
    }

    /// Bank the current run and stop. Returns `false` if it was not running.
    pub fn stop(&mut self, now_ms: u64) -> bool {
        let Some(start) = self.start_time.take() else {
            return false;
        };
        self.accumulated_time = self
            .accumulated_time
            .saturating_add(now_ms.saturating_sub(start));
        self.is_running = false;
        self.is_paused = true;
        tracing::debug!(id = %self.id, accumulated = self.accumulated_time, "timer stopped");
        true
    }

    /// Discard all progress and flag the ring's reset pass.
    pub fn reset(&mut self) {
        self.start_time = None;
        self.accumulated_time = 0;
        self.is_running = false;
        self.is_paused = false;
        self.is_resetting = true;
        tracing::debug!(id = %self.id, "timer reset");
    }

    /// The ring finished counting down.
    pub fn complete(&mut self, now_ms: u64) {
        self.stop(now_ms);
        self.is_paused = false;
    }

    /// The ring finished its reset pass.
    pub fn finish_reset(&mut self) {
        self.is_resetting = false;
    }

    /// Back to idle after a reload: running, paused and resetting are cleared, banked time kept.
    fn normalize_loaded(&mut self) {
        self.is_running = false;
        self.is_paused = false;
        self.is_resetting = false;
        self.start_time = None;
    }
}

/// Every timer on screen, in display order. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerBoard {
    timers: Vec<TimerRecord>,
    next_id: u64,
}

impl Default for TimerBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerBoard {
    /// Board with one fresh timer.
    pub fn new() -> Self {
        let mut board = Self {
            timers: Vec::new(),
            next_id: 0,
        };
        board.add();
        board
    }

    /// Append a fresh timer and return it.
    pub fn add(&mut self) -> &mut TimerRecord {
        let id = self.fresh_id();
        tracing::debug!(%id, "timer added");
        self.timers.push(TimerRecord::new(id));
        let last = self.timers.len() - 1;
        &mut self.timers[last]
    }

    /// Remove a timer. The last remaining timer cannot be removed.
    pub fn remove(&mut self, id: &str) -> Option<TimerRecord> {
        if self.timers.len() <= 1 {
            return None;
        }
        let idx = self.timers.iter().position(|t| t.id == id)?;
        tracing::debug!(id, "timer removed");
        Some(self.timers.remove(idx))
    }

    /// Timer by id.
    pub fn get(&self, id: &str) -> Option<&TimerRecord> {
        self.timers.iter().find(|t| t.id == id)
    }

    /// Mutable timer by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut TimerRecord> {
        self.timers.iter_mut().find(|t| t.id == id)
    }

    /// Timers in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TimerRecord> {
        self.timers.iter()
    }

    /// Number of timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// No timers.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Forward a scheduler event to the timer with the same id. Unknown ids are ignored.
    pub fn apply_event(&mut self, event: &AnimationEvent, now_ms: u64) {
        match event {
            AnimationEvent::Completed(id) => {
                if let Some(t) = self.get_mut(id) {
                    t.complete(now_ms);
                }
            }
            AnimationEvent::ResetFinished(id) => {
                if let Some(t) = self.get_mut(id) {
                    t.finish_reset();
                }
            }
        }
    }

    /// Flat JSON list of every record.
    pub fn to_json(&self) -> RingTimerResult<String> {
        Ok(serde_json::to_string_pretty(&self.timers)?)
    }

    /// Load a list written by [`TimerBoard::to_json`]. Every record comes back idle; an empty
    /// list yields a board with one fresh timer.
    pub fn from_json(json: &str) -> RingTimerResult<Self> {
        let mut timers: Vec<TimerRecord> = serde_json::from_str(json)?;
        timers.iter_mut().for_each(TimerRecord::normalize_loaded);
        if timers.is_empty() {
            return Ok(Self::new());
        }
        tracing::debug!(count = timers.len(), "timers loaded");
        Ok(Self {
            timers,
            next_id: 0,
        })
    }

    fn fresh_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("timer-{}", self.next_id);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn clamp_i64(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/timer/model.rs"]
mod tests;

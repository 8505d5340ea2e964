/// What an animated entity reports after one update or reset step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Keep ticking.
    Running,
    /// The current pass (forward or reset) is done; the scheduler completes the subscriber.
    Finished,
}

/// Per-entity callbacks driven by the shared frame loop.
///
/// Implementors own (or share) their render state; the scheduler only ever calls through this
/// trait and never looks inside.
pub trait Animate {
    /// Repaint the current state without advancing it.
    fn draw(&mut self);

    /// Advance forward by `delta` seconds.
    fn update(&mut self, delta: f64) -> Progress;

    /// Rewind by `delta` seconds. Entities with nothing to rewind finish immediately.
    fn reset(&mut self, _delta: f64) -> Progress {
        Progress::Finished
    }
}

type DrawFn = Box<dyn FnMut()>;
type StepFn = Box<dyn FnMut(f64) -> Progress>;

/// [`Animate`] assembled from closures.
pub struct FnAnimate {
    draw: DrawFn,
    update: StepFn,
    reset: Option<StepFn>,
}

impl FnAnimate {
    /// Closures for draw and update; reset finishes immediately unless [`FnAnimate::on_reset`]
    /// is set.
    pub fn new(draw: impl FnMut() + 'static, update: impl FnMut(f64) -> Progress + 'static) -> Self {
        Self {
            draw: Box::new(draw),
            update: Box::new(update),
            reset: None,
        }
    }

    /// Closure for the reset pass.
    pub fn on_reset(mut self, reset: impl FnMut(f64) -> Progress + 'static) -> Self {
        self.reset = Some(Box::new(reset));
        self
    }
}

impl Animate for FnAnimate {
    fn draw(&mut self) {
        (self.draw)();
    }

    fn update(&mut self, delta: f64) -> Progress {
        (self.update)(delta)
    }

    fn reset(&mut self, delta: f64) -> Progress {
        match self.reset.as_mut() {
            Some(reset) => reset(delta),
            None => Progress::Finished,
        }
    }
}

/// Where a subscriber is in its lifecycle.
///
/// Running-forward, running-resetting and idle are mutually exclusive by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not ticked by the frame loop.
    Idle,
    /// Ticked through [`Animate::update`].
    Forward,
    /// Ticked through [`Animate::reset`].
    Resetting,
}

/// An animated entity registered with the scheduler under a unique id.
pub struct AnimationSubscriber {
    id: String,
    target: Box<dyn Animate>,
    phase: Phase,
    started: bool,
}

impl std::fmt::Debug for AnimationSubscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationSubscriber")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

impl AnimationSubscriber {
    /// Idle subscriber driving `target`.
    pub fn new(id: impl Into<String>, target: impl Animate + 'static) -> Self {
        Self {
            id: id.into(),
            target: Box::new(target),
            phase: Phase::Idle,
            started: false,
        }
    }

    /// Subscriber from bare closures; see [`FnAnimate`].
    pub fn from_fns(
        id: impl Into<String>,
        draw: impl FnMut() + 'static,
        update: impl FnMut(f64) -> Progress + 'static,
        reset: impl FnMut(f64) -> Progress + 'static,
    ) -> Self {
        Self::new(id, FnAnimate::new(draw, update).on_reset(reset))
    }

    /// Register already running forward (e.g. ambient background animation).
    pub fn running(mut self) -> Self {
        self.phase = Phase::Forward;
        self.started = true;
        self
    }

    /// Registry key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticked by the frame loop (forward or resetting).
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Ticked through the reset pass.
    pub fn is_resetting(&self) -> bool {
        self.phase == Phase::Resetting
    }

    /// Has been started since the last reset/complete, so a reset has something to rewind.
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub(crate) fn set_state(&mut self, phase: Phase, started: bool) {
        self.phase = phase;
        self.started = started;
    }

    pub(crate) fn draw(&mut self) {
        self.target.draw();
    }

    pub(crate) fn step(&mut self, delta: f64) -> Progress {
        match self.phase {
            Phase::Idle => Progress::Running,
            Phase::Forward => self.target.update(delta),
            Phase::Resetting => self.target.reset(delta),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/subscriber.rs"]
mod tests;

use std::{cell::RefCell, rc::Rc};

use crate::{
    animation::{circle::Circle, dot::DotStyle},
    config::settings::SceneSettings,
    foundation::core::Canvas,
    foundation::error::RingTimerResult,
    render::surface::{FrameRGBA, Surface},
    scheduler::{
        provider::AnimationControl,
        subscriber::{Animate, AnimationSubscriber, Progress},
    },
};

struct RingState {
    circle: Circle,
    surface: Surface,
    style: DotStyle,
    duration: f64,
    reset_duration: f64,
}

impl RingState {
    fn repaint(&mut self) {
        self.surface.clear();
        self.circle.draw(&mut self.surface, &self.style);
    }
}

struct RingAnimator(Rc<RefCell<RingState>>);

impl Animate for RingAnimator {
    fn draw(&mut self) {
        self.0.borrow_mut().repaint();
    }

    fn update(&mut self, delta: f64) -> Progress {
        let mut state = self.0.borrow_mut();
        let duration = state.duration;
        state.circle.update(delta, duration);
        state.repaint();
        if state.circle.is_complete() {
            Progress::Finished
        } else {
            Progress::Running
        }
    }

    fn reset(&mut self, delta: f64) -> Progress {
        let mut state = self.0.borrow_mut();
        let duration = state.reset_duration;
        state.circle.update_reset(delta, duration);
        state.repaint();
        if state.circle.is_reset() {
            Progress::Finished
        } else {
            Progress::Running
        }
    }
}

/// One timer's countdown ring on its own square canvas.
///
/// The subscriber registered by [`RingView::mount`] shares this view's ring and surface, so
/// [`RingView::frame`] always shows what the last tick painted.
pub struct RingView {
    id: String,
    state: Rc<RefCell<RingState>>,
}

impl std::fmt::Debug for RingView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingView")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl RingView {
    /// Ring for a `duration_secs` countdown, sized from the settings' viewport.
    pub fn new(
        id: impl Into<String>,
        duration_secs: f64,
        settings: &SceneSettings,
    ) -> RingTimerResult<Self> {
        Self::with_canvas(id, duration_secs, settings.ring_canvas()?, settings)
    }

    /// Ring on an explicit square canvas.
    pub fn with_canvas(
        id: impl Into<String>,
        duration_secs: f64,
        canvas: Canvas,
        settings: &SceneSettings,
    ) -> RingTimerResult<Self> {
        let circle = settings
            .ring
            .circle(f64::from(canvas.width.min(canvas.height)))
            .with_pop_out(settings.pop_out)
            .with_dot_size(settings.dot_size);
        let surface = Surface::new(canvas)?.with_clear_rgba(settings.clear_rgba());
        let id = id.into();
        tracing::debug!(
            %id,
            duration_secs,
            dots = circle.dot_count(),
            size = canvas.width,
            "ring view created"
        );
        Ok(Self {
            id,
            state: Rc::new(RefCell::new(RingState {
                circle,
                surface,
                style: settings.dot_style,
                duration: duration_secs,
                reset_duration: settings.reset_duration,
            })),
        })
    }

    /// Subscriber id, the same as the timer's.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Register with `control`; paints the ring once.
    pub fn mount(&self, control: &mut dyn AnimationControl) {
        control.subscribe(AnimationSubscriber::new(
            self.id.clone(),
            RingAnimator(Rc::clone(&self.state)),
        ));
    }

    /// Withdraw from `control`. The surface keeps its last frame.
    pub fn unmount(&self, control: &mut dyn AnimationControl) {
        control.unsubscribe(&self.id);
    }

    /// Inspect the ring.
    pub fn with_circle<T>(&self, f: impl FnOnce(&Circle) -> T) -> T {
        f(&self.state.borrow().circle)
    }

    /// Rasterize the current painting.
    pub fn frame(&self) -> FrameRGBA {
        self.state.borrow_mut().surface.frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/ring.rs"]
mod tests;

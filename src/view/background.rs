use std::{cell::RefCell, rc::Rc};

use crate::{
    animation::blob::{Blob, BlobStyle},
    config::settings::SceneSettings,
    foundation::core::{Canvas, Point},
    foundation::error::RingTimerResult,
    render::surface::{FrameRGBA, Surface},
    scheduler::{
        provider::AnimationControl,
        subscriber::{Animate, AnimationSubscriber, Progress},
    },
};

/// Subscriber id of the background.
pub const BACKGROUND_ID: &str = "background";

struct BackgroundState {
    blobs: Vec<Blob>,
    surface: Surface,
    style: BlobStyle,
}

impl BackgroundState {
    fn repaint(&mut self) {
        self.surface.clear();
        for blob in &self.blobs {
            blob.draw(&mut self.surface, &self.style);
        }
    }
}

struct BackgroundAnimator(Rc<RefCell<BackgroundState>>);

impl Animate for BackgroundAnimator {
    fn draw(&mut self) {
        self.0.borrow_mut().repaint();
    }

    fn update(&mut self, delta: f64) -> Progress {
        let mut state = self.0.borrow_mut();
        for blob in &mut state.blobs {
            blob.update(delta);
        }
        state.repaint();
        Progress::Running
    }
}

/// Ambient wobbling blobs behind every timer. Runs for as long as it is mounted.
pub struct BackgroundView {
    state: Rc<RefCell<BackgroundState>>,
}

impl std::fmt::Debug for BackgroundView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundView").finish_non_exhaustive()
    }
}

impl BackgroundView {
    /// Background covering the settings' viewport.
    pub fn new(settings: &SceneSettings) -> RingTimerResult<Self> {
        Self::with_canvas(settings.viewport, settings)
    }

    /// Background on an explicit canvas; blob anchors scale with it.
    pub fn with_canvas(canvas: Canvas, settings: &SceneSettings) -> RingTimerResult<Self> {
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let blobs = settings
            .background
            .iter()
            .map(|p| Blob::new(Point::new(p.x * w, p.y * h), p.radius, Blob::DEFAULT_NOISE_OFFSET))
            .collect::<Vec<_>>();
        tracing::debug!(blobs = blobs.len(), w, h, "background view created");
        Ok(Self {
            state: Rc::new(RefCell::new(BackgroundState {
                blobs,
                surface: Surface::new(canvas)?.with_clear_rgba(settings.clear_rgba()),
                style: settings.blob_style,
            })),
        })
    }

    /// Register with `control` already running.
    pub fn mount(&self, control: &mut dyn AnimationControl) {
        control.subscribe(
            AnimationSubscriber::new(BACKGROUND_ID, BackgroundAnimator(Rc::clone(&self.state)))
                .running(),
        );
    }

    /// Withdraw from `control`.
    pub fn unmount(&self, control: &mut dyn AnimationControl) {
        control.unsubscribe(BACKGROUND_ID);
    }

    /// Current progress of each blob's slow breathing cycle.
    pub fn blob_progress(&self) -> Vec<f64> {
        self.state.borrow().blobs.iter().map(Blob::progress).collect()
    }

    /// Rasterize the current painting.
    pub fn frame(&self) -> FrameRGBA {
        self.state.borrow_mut().surface.frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/background.rs"]
mod tests;

use indexmap::IndexMap;

use crate::scheduler::{
    frame::{FrameHandle, FrameRequester, ManualFrames},
    subscriber::{AnimationSubscriber, Phase, Progress},
};

/// Subscription and lifecycle API that views talk to.
///
/// Implemented by [`Scheduler`] and by [`NoopControl`]; a view is handed one or the other when it
/// is built and never checks for the provider's presence per call.
pub trait AnimationControl {
    /// Register (or replace, keeping its position) a subscriber and paint it once.
    fn subscribe(&mut self, subscriber: AnimationSubscriber);

    /// Remove a subscriber. Its surface is left as last painted.
    fn unsubscribe(&mut self, id: &str);

    /// Begin ticking forward. No-op if already running.
    fn start(&mut self, id: &str);

    /// Stop ticking. No-op if not running.
    fn pause(&mut self, id: &str);

    /// Begin the reset pass. No-op unless started since the last reset/complete.
    fn reset(&mut self, id: &str);

    /// Force idle.
    fn complete(&mut self, id: &str);
}

/// Stand-in used when no animation provider is mounted: every call does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopControl;

impl AnimationControl for NoopControl {
    fn subscribe(&mut self, _subscriber: AnimationSubscriber) {}
    fn unsubscribe(&mut self, _id: &str) {}
    fn start(&mut self, _id: &str) {}
    fn pause(&mut self, _id: &str) {}
    fn reset(&mut self, _id: &str) {}
    fn complete(&mut self, _id: &str) {}
}

/// Something a subscriber finished during a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    /// A forward pass reported [`Progress::Finished`].
    Completed(String),
    /// A reset pass reported [`Progress::Finished`].
    ResetFinished(String),
}

/// Single shared frame loop for every registered subscriber.
///
/// The loop is live exactly while at least one subscriber is running: the first
/// `start`/`reset` requests a frame, and the loop stops requesting frames as soon as nothing is
/// running. Within a tick, subscribers are visited in registration order.
pub struct Scheduler<R: FrameRequester = ManualFrames> {
    subscribers: IndexMap<String, AnimationSubscriber>,
    frames: R,
    pending: Option<FrameHandle>,
    previous_timestamp: Option<f64>,
}

impl Default for Scheduler<ManualFrames> {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler<ManualFrames> {
    /// Scheduler for hosts that drive [`Scheduler::tick`] from their own clock.
    pub fn new() -> Self {
        Self::with_requester(ManualFrames::default())
    }
}

impl<R: FrameRequester> Scheduler<R> {
    /// Scheduler backed by the host's frame primitive.
    pub fn with_requester(frames: R) -> Self {
        Self {
            subscribers: IndexMap::new(),
            frames,
            pending: None,
            previous_timestamp: None,
        }
    }

    /// The frame requester.
    pub fn frames(&self) -> &R {
        &self.frames
    }

    /// A frame callback is outstanding.
    pub fn is_loop_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Registered subscriber by id.
    pub fn subscriber(&self, id: &str) -> Option<&AnimationSubscriber> {
        self.subscribers.get(id)
    }

    /// Registered ids in visiting order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.subscribers.keys().map(String::as_str)
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// No subscribers registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// At least one subscriber is running.
    pub fn any_running(&self) -> bool {
        self.subscribers.values().any(AnimationSubscriber::is_running)
    }

    /// Run one frame at host time `timestamp_ms`.
    ///
    /// Does nothing unless a frame was requested. The first frame after the loop (re)starts has
    /// a zero delta, so time spent idle is never fed to subscribers.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, timestamp_ms: f64) -> Vec<AnimationEvent> {
        if self.pending.take().is_none() {
            return Vec::new();
        }

        let previous = self.previous_timestamp.unwrap_or(timestamp_ms);
        let delta = ((timestamp_ms - previous) / 1000.0).max(0.0);
        self.previous_timestamp = Some(timestamp_ms);

        let mut finished = Vec::new();
        for sub in self.subscribers.values_mut() {
            if !sub.is_running() {
                continue;
            }
            let resetting = sub.is_resetting();
            if sub.step(delta) == Progress::Finished {
                finished.push((sub.id().to_owned(), resetting));
            }
        }

        let mut events = Vec::with_capacity(finished.len());
        for (id, resetting) in finished {
            self.complete_inner(&id);
            events.push(if resetting {
                AnimationEvent::ResetFinished(id)
            } else {
                AnimationEvent::Completed(id)
            });
        }

        if self.any_running() {
            self.pending = Some(self.frames.request_frame());
        } else {
            tracing::debug!("no subscriber running; frame loop idle");
            self.previous_timestamp = None;
        }
        events
    }

    fn ensure_loop(&mut self) {
        if self.pending.is_none() {
            tracing::debug!("frame loop started");
            self.pending = Some(self.frames.request_frame());
        }
    }

    fn stop_loop_if_idle(&mut self) {
        if self.any_running() {
            return;
        }
        if let Some(handle) = self.pending.take() {
            tracing::debug!("frame loop stopped");
            self.frames.cancel_frame(handle);
        }
        self.previous_timestamp = None;
    }

    fn complete_inner(&mut self, id: &str) {
        let Some(sub) = self.subscribers.get_mut(id) else {
            tracing::debug!(id, "complete: unknown subscriber");
            return;
        };
        sub.set_state(Phase::Idle, false);
        tracing::debug!(id, "subscriber completed");
    }
}

impl<R: FrameRequester> AnimationControl for Scheduler<R> {
    fn subscribe(&mut self, mut subscriber: AnimationSubscriber) {
        subscriber.draw();
        let running = subscriber.is_running();
        tracing::debug!(id = subscriber.id(), running, "subscribe");
        self.subscribers
            .insert(subscriber.id().to_owned(), subscriber);

        if running {
            self.ensure_loop();
        } else {
            self.stop_loop_if_idle();
        }
    }

    fn unsubscribe(&mut self, id: &str) {
        if self.subscribers.shift_remove(id).is_none() {
            tracing::debug!(id, "unsubscribe: unknown subscriber");
            return;
        }
        tracing::debug!(id, "unsubscribe");
        self.stop_loop_if_idle();
    }

    fn start(&mut self, id: &str) {
        let Some(sub) = self.subscribers.get_mut(id) else {
            tracing::debug!(id, "start: unknown subscriber");
            return;
        };
        if sub.is_running() {
            return;
        }
        sub.set_state(Phase::Forward, true);
        tracing::debug!(id, "start");
        self.ensure_loop();
    }

    fn pause(&mut self, id: &str) {
        let Some(sub) = self.subscribers.get_mut(id) else {
            tracing::debug!(id, "pause: unknown subscriber");
            return;
        };
        if !sub.is_running() {
            return;
        }
        let started = sub.is_started();
        sub.set_state(Phase::Idle, started);
        tracing::debug!(id, "pause");
        self.stop_loop_if_idle();
    }

    fn reset(&mut self, id: &str) {
        let Some(sub) = self.subscribers.get_mut(id) else {
            tracing::debug!(id, "reset: unknown subscriber");
            return;
        };
        if !sub.is_started() {
            return;
        }
        sub.set_state(Phase::Resetting, false);
        tracing::debug!(id, "reset");
        self.ensure_loop();
    }

    fn complete(&mut self, id: &str) {
        self.complete_inner(id);
        self.stop_loop_if_idle();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/provider.rs"]
mod tests;

//! ringtimer is a headless engine for dot-ring countdown timers.
//!
//! Each timer is drawn as a ring of dots that pop outward one by one as time runs out and
//! retract when the timer is reset. A wobbling blob background runs behind every ring. All of
//! it is driven by one shared frame loop.
//!
//! # Overview
//!
//! 1. **Enter a time**: [`TimeInput`] collects up to six `HHMMSS` digits; the free functions in
//!    this crate parse and format them.
//! 2. **Track it**: [`TimerRecord`] counts elapsed wall-clock time across start/stop, and
//!    [`TimerBoard`] holds every timer and round-trips them through JSON.
//! 3. **Animate it**: [`RingView`] and [`BackgroundView`] own their animated state and register
//!    an [`AnimationSubscriber`] with a [`Scheduler`]. The host calls [`Scheduler::tick`] once
//!    per display frame while [`Scheduler::is_loop_active`] holds.
//! 4. **Look at it**: views rasterize through `vello_cpu` into premultiplied [`FrameRGBA`]
//!    pixmaps, which can be written as PNG.
//!
//! Everything is single-threaded. Views share state with their subscribers through
//! `Rc<RefCell<_>>`; nothing here is `Send`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod render;
mod scheduler;
mod timer;
mod view;

pub use animation::blob::{Blob, BlobStyle};
pub use animation::circle::{Circle, PopOut, RingLayout};
pub use animation::dot::{Dot, DotMotion, DotRetract, DotStyle};
pub use animation::ease::{ease_in_cubic, lerp};
pub use config::settings::{BlobPlacement, FPS_ENV, SceneSettings, default_fps};
pub use foundation::core::{BezPath, Canvas, Fps, Point, Rgba8, Vec2};
pub use foundation::error::{RingTimerError, RingTimerResult};
pub use render::composite::{PremulRgba8, over, over_in_place, unpremultiply};
pub use render::painter::{PaintOp, Painter, RecordingPainter};
pub use render::surface::{FrameRGBA, Surface};
pub use scheduler::frame::{FrameHandle, FrameRequester, ManualFrames};
pub use scheduler::provider::{AnimationControl, AnimationEvent, NoopControl, Scheduler};
pub use scheduler::subscriber::{Animate, AnimationSubscriber, FnAnimate, Phase, Progress};
pub use timer::input::TimeInput;
pub use timer::model::{TimerBoard, TimerRecord};
pub use timer::timefmt::{
    HHMMSS_DIGITS, format_ms_to_hhmmss, format_raw_input, format_timer_compact,
    format_timer_running, parse_hhmmss_to_ms,
};
pub use view::background::{BACKGROUND_ID, BackgroundView};
pub use view::ring::RingView;

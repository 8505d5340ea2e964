//! The shared animation frame loop and the subscriber protocol it drives.

pub(crate) mod frame;
pub(crate) mod provider;
pub(crate) mod subscriber;

//! Animated entities: the countdown ring, its dots and the background blobs.

pub(crate) mod blob;
pub(crate) mod circle;
pub(crate) mod dot;
pub(crate) mod ease;

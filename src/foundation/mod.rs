//! Shared primitives: geometry re-exports, canvas/frame-rate types and the error taxonomy.

pub(crate) mod core;
pub(crate) mod error;

//! Views: each owns its animated state and a surface, and hands the scheduler a subscriber
//! bound to that state.

pub(crate) mod background;
pub(crate) mod ring;

//! Scene configuration loaded from JSON, with environment overrides.

pub(crate) mod settings;

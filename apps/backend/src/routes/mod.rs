//! HTTP handlers, one module per practice mode

pub mod citation;
pub mod sequence;
pub mod settings;
pub mod stealth;
pub mod typed;

//! View models for the hourly strip, hourly detail and current conditions,
//! plus their plain-text rendering.

pub mod current;
pub mod detail;
pub mod strip;
pub mod text;

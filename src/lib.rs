//! Gesture-driven playback control: two producers (HTTP, recognition loop)
//! feed one dispatcher that debounces per-gesture and calls the playback API.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

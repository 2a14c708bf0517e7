//! Port implementations.
//!
//! `live` talks to the real world, `recording` wraps a live adapter and
//! captures every call into a cassette, and `replaying` serves a cassette
//! back without side effects.

pub mod live;
pub mod recording;
pub mod replaying;

//! World Module
//!
//! Room bounds: the square floor plan, its walls, and the boundary clamp
//! applied to candidate positions before any collision test runs.

pub mod room;

pub use room::Room;

//! Engine services plus the clock, formatting, and path helpers they rely on.

pub mod format;
pub mod services;
pub mod time;
pub mod utils;

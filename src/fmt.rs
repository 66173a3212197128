//! Logging macros that forward to `defmt` when the feature is enabled.
//!
//! Declared first in `lib.rs` with `#[macro_use]`, so every module sees
//! `debug!` and `warn!` by textual scope.
#![allow(unused_macros)]

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

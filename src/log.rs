//! Logging shims for the pass engine.
//!
//! With the `tracing` feature on, `debug!` and `warn!` are the `tracing`
//! macros and hosts see pass scheduling, coalescing and degenerate
//! configuration through their own subscriber. With the feature off, both
//! expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};

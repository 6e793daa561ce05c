//! Traits at the seams between the store, the detector, and long-running loads.

pub mod cancellation;
pub mod observer;

pub use cancellation::{Cancellable, CancellationToken};
pub use observer::WordObserver;

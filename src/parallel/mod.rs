//! Generic bounded parallel execution.
//!
//! This module only manages threads and channels; it does not know what a
//! game name or an app ID is. Clients hand it a list of work items, a worker
//! function, and a sink that observes outcomes in completion order.

pub mod core;

pub use core::WorkerPool;

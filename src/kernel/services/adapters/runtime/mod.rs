//! Async runtime adapter: executes background requests off the event loop.

mod async_runtime;

pub use async_runtime::AsyncRuntime;

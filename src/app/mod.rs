//! Application layer: owns the header store and drives its effects.

mod bridge;

use std::sync::Arc;

use crate::kernel::services::ports::{AccountService, AsyncExecutor};
use crate::kernel::services::KernelServiceHost;
use crate::kernel::{HeaderState, Store};

const MAX_KERNEL_BUS_DRAIN_PER_TICK: usize = 64;

pub struct HeaderApp {
    store: Store,
    kernel_services: KernelServiceHost,
    submitted_searches: Vec<String>,
}

impl HeaderApp {
    pub fn new(executor: Arc<dyn AsyncExecutor>, accounts: Arc<dyn AccountService>) -> Self {
        Self {
            store: Store::new(HeaderState::new()),
            kernel_services: KernelServiceHost::new(executor, accounts),
            submitted_searches: Vec::new(),
        }
    }

    pub fn state(&self) -> &HeaderState {
        self.store.state()
    }

    pub fn state_mut(&mut self) -> &mut HeaderState {
        self.store.state_mut()
    }

    pub fn last_submitted_search(&self) -> Option<&str> {
        self.submitted_searches.last().map(String::as_str)
    }

    pub fn submitted_searches(&self) -> &[String] {
        &self.submitted_searches
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/header_app.rs"]
mod tests;

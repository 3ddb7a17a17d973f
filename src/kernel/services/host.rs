use std::future::Future;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use super::bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
use super::ports::{AccountService, AsyncExecutor};
use crate::kernel::Action;

/// Owns the kernel bus and the collaborators that background tasks need.
pub struct KernelServiceHost {
    bus: KernelBusSender,
    rx: KernelBusReceiver,
    executor: Arc<dyn AsyncExecutor>,
    accounts: Arc<dyn AccountService>,
}

#[derive(Clone)]
pub struct KernelServiceContext {
    bus: KernelBusSender,
    executor: Arc<dyn AsyncExecutor>,
    accounts: Arc<dyn AccountService>,
}

impl KernelServiceHost {
    pub fn new(executor: Arc<dyn AsyncExecutor>, accounts: Arc<dyn AccountService>) -> Self {
        let (bus, rx) = kernel_bus();
        Self {
            bus,
            rx,
            executor,
            accounts,
        }
    }

    pub fn context(&self) -> KernelServiceContext {
        KernelServiceContext {
            bus: self.bus.clone(),
            executor: Arc::clone(&self.executor),
            accounts: Arc::clone(&self.accounts),
        }
    }

    pub fn try_recv(&mut self) -> Result<KernelMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<KernelMessage, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl KernelServiceContext {
    pub fn dispatch(&self, action: Action) {
        let _ = self.bus.send_action(action);
    }

    pub fn spawn_future<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.executor.spawn(Box::pin(task));
    }

    /// Issues one current-account request; the completion is posted back as
    /// `AccountResolved` or `AccountFetchFailed` tagged with `generation`.
    pub fn fetch_current_account(&self, generation: u64) {
        let request = self.accounts.current_account();
        let ctx = self.clone();
        self.spawn_future(async move {
            let action = match request.await {
                Ok(account) => Action::AccountResolved {
                    generation,
                    account,
                },
                Err(err) => Action::AccountFetchFailed {
                    generation,
                    error: err.to_string(),
                },
            };
            ctx.dispatch(action);
        });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/host.rs"]
mod tests;

use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

use super::{HeaderApp, MAX_KERNEL_BUS_DRAIN_PER_TICK};
use crate::kernel::services::KernelMessage;
use crate::kernel::{Action, Effect};

impl HeaderApp {
    /// Attach lifecycle hook; issues the current-account fetch on first attach.
    pub fn on_mount(&mut self) -> bool {
        self.dispatch(Action::Activate)
    }

    pub fn on_unmount(&mut self) -> bool {
        self.dispatch(Action::Deactivate)
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    /// Applies every completion already posted to the bus.
    pub fn poll_kernel_bus(&mut self) -> bool {
        let mut changed = false;
        let mut drained = 0usize;
        while drained < MAX_KERNEL_BUS_DRAIN_PER_TICK {
            match self.kernel_services.try_recv() {
                Ok(KernelMessage::Action(action)) => {
                    drained += 1;
                    changed |= self.dispatch(action);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Blocks up to `timeout` for the next completion, then drains the rest.
    pub fn wait_kernel_bus(&mut self, timeout: Duration) -> bool {
        match self.kernel_services.recv_timeout(timeout) {
            Ok(KernelMessage::Action(action)) => {
                let changed = self.dispatch(action);
                changed | self.poll_kernel_bus()
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchCurrentAccount { generation } => {
                tracing::debug!(generation, "requesting current account");
                self.kernel_services.context().fetch_current_account(generation);
            }
            Effect::SubmitSearch { query } => {
                tracing::info!(query = %query, "search submitted");
                self.submitted_searches.push(query);
            }
        }
    }
}

use super::{Action, Effect, HeaderState};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: HeaderState,
}

impl Store {
    pub fn new(state: HeaderState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &HeaderState {
        &self.state
    }

    /// Direct access for binding subscribers to the search query.
    pub fn state_mut(&mut self) -> &mut HeaderState {
        &mut self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Activate => match self.state.attach() {
                Some(generation) => {
                    tracing::debug!(generation, "header attached");
                    DispatchResult {
                        effects: vec![Effect::FetchCurrentAccount { generation }],
                        state_changed: true,
                    }
                }
                None => DispatchResult::unchanged(),
            },
            Action::Deactivate => {
                let changed = self.state.detach();
                if changed {
                    tracing::debug!("header detached");
                }
                DispatchResult::changed(changed)
            }
            Action::AccountResolved {
                generation,
                account,
            } => {
                let signed_in = account.is_some();
                let changed = self.state.resolve_account(generation, account);
                if changed {
                    tracing::info!(generation, signed_in, "current account resolved");
                } else {
                    tracing::debug!(
                        generation,
                        current = ?self.state.current_generation(),
                        "dropping stale account completion"
                    );
                }
                DispatchResult::changed(changed)
            }
            Action::AccountFetchFailed { generation, error } => {
                tracing::warn!(generation, error = %error, "current account fetch failed");
                DispatchResult::unchanged()
            }
            Action::SetSearchQuery(query) => {
                DispatchResult::changed(self.state.set_search_query(query))
            }
            Action::SearchAppend(ch) => DispatchResult::changed(self.state.push_search_char(ch)),
            Action::SearchBackspace => DispatchResult::changed(self.state.pop_search_char()),
            Action::SearchClear => {
                DispatchResult::changed(self.state.set_search_query(String::new()))
            }
            Action::SearchSubmit => {
                let query = self.state.search_query().trim();
                if query.is_empty() {
                    return DispatchResult::unchanged();
                }
                DispatchResult {
                    effects: vec![Effect::SubmitSearch {
                        query: query.to_string(),
                    }],
                    state_changed: false,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;

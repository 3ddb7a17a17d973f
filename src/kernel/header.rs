//! Page header state: search query binding, account status and the classes
//! applied to the account container.

use super::account::{Account, AccountStatus};
use super::class_list::ClassList;
use super::observable::Property;

pub const LOGGED_IN_CLASS: &str = "loggedIn";
pub const LOGGED_OUT_CLASS: &str = "loggedOut";

/// Accessibility landmark announced by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkRole {
    Banner,
}

impl LandmarkRole {
    pub fn as_str(self) -> &'static str {
        match self {
            LandmarkRole::Banner => "banner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Detached,
    Attached {
        generation: u64,
    },
}

#[derive(Debug, Default)]
pub struct HeaderState {
    search_query: Property<String>,
    account: AccountStatus,
    account_container: ClassList,
    lifecycle: Lifecycle,
    generation: u64,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> LandmarkRole {
        LandmarkRole::Banner
    }

    pub fn search_query(&self) -> &str {
        self.search_query.get()
    }

    pub fn search_query_property(&self) -> &Property<String> {
        &self.search_query
    }

    pub fn search_query_property_mut(&mut self) -> &mut Property<String> {
        &mut self.search_query
    }

    pub fn account_status(&self) -> &AccountStatus {
        &self.account
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.account()
    }

    pub fn logged_in(&self) -> bool {
        self.account.logged_in()
    }

    pub fn logged_out(&self) -> bool {
        self.account.logged_out()
    }

    pub fn account_container(&self) -> &ClassList {
        &self.account_container
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Attached { .. })
    }

    pub fn current_generation(&self) -> Option<u64> {
        match self.lifecycle {
            Lifecycle::Attached { generation } => Some(generation),
            Lifecycle::Detached => None,
        }
    }

    /// Attaches the header and returns the generation whose fetch must be
    /// issued, or `None` when already attached.
    pub fn attach(&mut self) -> Option<u64> {
        if self.is_attached() {
            return None;
        }
        self.generation += 1;
        self.lifecycle = Lifecycle::Attached {
            generation: self.generation,
        };
        self.account = AccountStatus::Unknown;
        self.sync_account_classes();
        Some(self.generation)
    }

    /// Returns `true` if the header was attached. The search query belongs to
    /// the binding and survives detach.
    pub fn detach(&mut self) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.lifecycle = Lifecycle::Detached;
        self.account = AccountStatus::Unknown;
        self.sync_account_classes();
        true
    }

    /// Applies a fetch completion. Only the first completion for the live
    /// generation is accepted.
    pub fn resolve_account(&mut self, generation: u64, account: Option<Account>) -> bool {
        if self.current_generation() != Some(generation) || self.account.is_resolved() {
            return false;
        }
        self.account = AccountStatus::from_resolved(account);
        self.sync_account_classes();
        true
    }

    pub fn set_search_query(&mut self, query: String) -> bool {
        self.search_query.set(query)
    }

    pub fn push_search_char(&mut self, ch: char) -> bool {
        self.search_query.update(|q| {
            q.push(ch);
            true
        })
    }

    pub fn pop_search_char(&mut self) -> bool {
        self.search_query.update(|q| q.pop().is_some())
    }

    fn sync_account_classes(&mut self) {
        let logged_in = self.account.logged_in();
        let logged_out = self.account.logged_out();
        self.account_container.toggle(LOGGED_IN_CLASS, logged_in);
        self.account_container.toggle(LOGGED_OUT_CLASS, logged_out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/header.rs"]
mod tests;

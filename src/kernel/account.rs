use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u64);

/// Account record as reported by the review server's account endpoint.
///
/// Only presence matters to the header; the remaining fields are used for the
/// label shown next to the avatar slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_account_id")]
    pub id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Account {
    pub fn new(id: u64) -> Self {
        Self {
            id: AccountId(id),
            name: None,
            display_name: None,
            username: None,
            email: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn display_label(&self) -> &str {
        [
            self.display_name.as_deref(),
            self.name.as_deref(),
            self.username.as_deref(),
            self.email.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or("Anonymous")
    }
}

/// Result of the current-account lookup for one activation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccountStatus {
    #[default]
    Unknown,
    LoggedIn(Account),
    LoggedOut,
}

impl AccountStatus {
    pub fn from_resolved(account: Option<Account>) -> Self {
        match account {
            Some(account) => AccountStatus::LoggedIn(account),
            None => AccountStatus::LoggedOut,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, AccountStatus::Unknown)
    }

    pub fn logged_in(&self) -> bool {
        matches!(self, AccountStatus::LoggedIn(_))
    }

    pub fn logged_out(&self) -> bool {
        matches!(self, AccountStatus::LoggedOut)
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            AccountStatus::LoggedIn(account) => Some(account),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/account.rs"]
mod tests;

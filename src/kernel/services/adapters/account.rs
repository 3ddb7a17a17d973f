//! Account service adapters.
//!
//! `FileAccountService` reads the account document the review server returns
//! for `/accounts/self/detail`. Anonymous sessions are represented by a
//! missing file or a `null` body.

use std::io;
use std::path::{Path, PathBuf};

use crate::kernel::account::Account;
use crate::kernel::services::ports::account::{AccountFuture, AccountService, Result};

/// Prefix the server puts in front of JSON bodies to defeat script inclusion.
const JSON_PREFIX: &str = ")]}'";

pub fn parse_account_payload(body: &str) -> Result<Option<Account>> {
    let body = body.trim_start_matches('\u{feff}');
    let body = body.strip_prefix(JSON_PREFIX).unwrap_or(body);
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<Account>>(body)?)
}

#[derive(Debug, Clone)]
pub struct FileAccountService {
    path: PathBuf,
}

impl FileAccountService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountService for FileAccountService {
    fn current_account(&self) -> AccountFuture {
        let path = self.path.clone();
        Box::pin(async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(body) => parse_account_payload(&body),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "no account document, anonymous");
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            }
        })
    }
}

/// Resolves a fixed account; `None` behaves as an anonymous session.
#[derive(Debug, Clone, Default)]
pub struct StaticAccountService {
    account: Option<Account>,
}

impl StaticAccountService {
    pub fn new(account: Option<Account>) -> Self {
        Self { account }
    }

    pub fn anonymous() -> Self {
        Self { account: None }
    }
}

impl AccountService for StaticAccountService {
    fn current_account(&self) -> AccountFuture {
        let account = self.account.clone();
        Box::pin(async move { Ok(account) })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/account.rs"]
mod tests;

use std::future::Future;
use std::io;
use std::pin::Pin;

use crate::kernel::account::Account;

pub type Result<T> = std::result::Result<T, AccountError>;

pub type AccountFuture = Pin<Box<dyn Future<Output = Result<Option<Account>>> + Send + 'static>>;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid account payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Account service unavailable: {0}")]
    Unavailable(String),
}

/// Source of the signed-in account. `Ok(None)` means anonymous.
pub trait AccountService: Send + Sync {
    fn current_account(&self) -> AccountFuture;
}

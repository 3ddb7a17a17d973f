//! Service ports: traits + data contracts.

pub mod account;
pub mod runtime;
pub mod settings;

pub use account::{AccountError, AccountFuture, AccountService};
pub use runtime::{AsyncExecutor, BoxFuture};
pub use settings::{Settings, ThemeSettings};

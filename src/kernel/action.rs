use crate::kernel::account::Account;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Activate,
    Deactivate,
    AccountResolved {
        generation: u64,
        account: Option<Account>,
    },
    AccountFetchFailed {
        generation: u64,
        error: String,
    },
    SetSearchQuery(String),
    SearchAppend(char),
    SearchBackspace,
    SearchClear,
    SearchSubmit,
}

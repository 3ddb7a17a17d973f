//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod account;
pub mod paths;
pub mod runtime;
pub mod settings;

pub use account::{parse_account_payload, FileAccountService, StaticAccountService};
pub use paths::{ensure_log_dir, get_log_dir};
pub use runtime::AsyncRuntime;
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from,
    write_default_settings,
};

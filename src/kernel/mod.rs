//! Headless header core (state/action/effect).

pub mod account;
pub mod action;
pub mod class_list;
pub mod effect;
pub mod header;
pub mod observable;
pub mod services;
pub mod store;

pub use account::{Account, AccountId, AccountStatus};
pub use action::Action;
pub use class_list::ClassList;
pub use effect::Effect;
pub use header::{HeaderState, LandmarkRole, Lifecycle, LOGGED_IN_CLASS, LOGGED_OUT_CLASS};
pub use observable::{Property, SubscriptionId};
pub use store::{DispatchResult, Store};

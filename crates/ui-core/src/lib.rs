//! DOM-free building blocks of the student-management page runtime.
//!
//! Everything here runs on the host as well as in the browser, so the page
//! behaviour (filtering, debouncing, persisted preferences, toasts, meters)
//! is unit-tested without a DOM. The `sms-frontend` crate wires these pieces
//! to `web-sys`.

pub mod config;
pub mod counter;
pub mod debounce;
pub mod effects;
pub mod live_search;
pub mod password;
pub mod reveal;
pub mod sidebar;
pub mod storage;
pub mod theme;
pub mod toast;
pub mod upload;

pub use config::UiConfig;
pub use debounce::{Debouncer, ManualScheduler, Scheduler};
pub use live_search::{FilterTarget, SearchBinding};
pub use storage::{KeyValueStore, MemoryStore};

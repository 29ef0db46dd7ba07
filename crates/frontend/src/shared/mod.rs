pub mod clipboard;
pub mod counter;
pub mod dom;
pub mod effects;
pub mod live_search;
pub mod password;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod timer;
pub mod toast;
pub mod upload;

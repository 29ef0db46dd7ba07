pub mod modal;
pub mod sidebar;

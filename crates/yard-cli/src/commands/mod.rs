pub mod compare;
pub mod dispatch;
pub mod list;
pub mod show;

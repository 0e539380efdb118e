//! Page components mounted by the router

mod chat;
mod dashboard;

pub use chat::Chat;
pub use dashboard::Dashboard;

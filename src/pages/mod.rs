//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; shared session access comes
//! from context, and the navigation guard has already run by the time a page
//! renders.

pub mod dashboard;
pub mod login;
pub mod models;
pub mod playground;
pub mod users;

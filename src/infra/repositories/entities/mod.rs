//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod account;
pub mod attendance;
pub mod employee;
pub mod notification;

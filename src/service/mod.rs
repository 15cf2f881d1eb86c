//! Business logic orchestration between the Discord event handlers and the
//! roster store.

pub mod application;
pub mod list_delivery;

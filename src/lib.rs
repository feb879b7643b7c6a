//! Desk Planner API Library
//!
//! This library provides the core functionality for the desk planner API:
//! the desk layout calculation, the people and team domain, and the
//! repository and HTTP adapters around them.

pub mod api;
pub mod domain;
pub mod infrastructure;

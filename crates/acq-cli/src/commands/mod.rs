//! CLI command implementations.

pub mod backends;
pub mod common;
pub mod create;
pub mod delete;
pub mod list;
pub mod result;
pub mod run;
pub mod show;
pub mod update;
pub mod validate;

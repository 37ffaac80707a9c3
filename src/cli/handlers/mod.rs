//! Reusable command handlers

pub mod list;

pub use list::run_list_command;

//! Shared CLI argument types

mod global;
mod pagination;

pub use global::GlobalOptions;
pub use pagination::PageSizeArgs;

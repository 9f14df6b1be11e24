//! Shared value types.

mod pagination;

pub use pagination::{Page, PageQuery, PageRequest, UserPage};

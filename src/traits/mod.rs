//! Operation traits.
//!
//! Each resource type implements the operations its endpoints support.

mod get;
mod list;

pub use get::Get;
pub use list::List;

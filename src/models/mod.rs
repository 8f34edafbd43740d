//! Cloud Controller resource models.

mod application;
mod event;
mod info;
mod metadata;
mod organization;
mod space;

pub use application::*;
pub use event::*;
pub use info::*;
pub use metadata::*;
pub use organization::*;
pub use space::*;

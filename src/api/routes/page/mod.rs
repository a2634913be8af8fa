//! The chat page served at the root of the site

pub mod public;
mod router;
mod template;
pub use router::router;
pub use template::{Template, templates};

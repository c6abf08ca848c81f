//! Application layer: running interaction trees
//!
//! This layer walks domain nodes and depends on the console boundary traits.

pub mod demo;
pub mod error;
pub mod error_ext;
pub mod walker;

pub use demo::sample_interaction;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use walker::{Flow, Walker, MISCONFIGURED_MESSAGE};

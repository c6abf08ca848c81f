//! Domain layer: interaction nodes and their staged builder
//!
//! Building a tree performs no I/O; running it lives in the application layer.

pub mod builder;
pub mod error;
pub mod inputs;
pub mod node;
pub mod outline;

pub use builder::{ContinuationBuilder, Finisher, InteractionBuilder, MenuBuilder, PromptBuilder};
pub use error::DomainError;
pub use inputs::{CaseSensitivity, InputPrompts, Inputs};
pub use node::{
    Action, ActionFailure, Answer, Body, Continuation, MenuOption, Node, PromptTable,
};

//! Fluent builder and runtime for tree-shaped interactive console sessions.
//!
//! Build a tree with [`domain::InteractionBuilder`], then run it against any
//! [`infrastructure::TextInput`] / [`infrastructure::TextOutput`] pair:
//!
//! ```no_run
//! use interact::domain::InteractionBuilder;
//! use interact::infrastructure::{ReaderInput, WriterOutput};
//!
//! let mut root = InteractionBuilder::new()
//!     .with_intro("Hello")
//!     .prompt_for_input("name", "Your name")
//!     .with_menu(|menu| {
//!         menu.option("Greet and exit", |opt| {
//!             opt.run_action(|_, output, inputs| {
//!                 output.write_line(&format!("Hi {}", inputs.get("name").map(String::as_str).unwrap_or("there")))
//!             })
//!             .and_exit()
//!         })
//!     })
//!     .build();
//!
//! root.run(&mut ReaderInput::stdin(), &mut WriterOutput::stdout()).unwrap();
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, Flow, Walker};
pub use domain::{InteractionBuilder, Node};

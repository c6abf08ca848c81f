//! Infrastructure layer: console I/O boundary and its implementations

pub mod traits;

pub use traits::{ReaderInput, TextInput, TextOutput, WriterOutput};

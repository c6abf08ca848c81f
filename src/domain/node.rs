//! Interaction nodes: the immutable units of a session tree

use std::fmt;
use std::io;

use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::inputs::{CaseSensitivity, InputPrompts, Inputs};
use crate::infrastructure::traits::{TextInput, TextOutput};

/// Terminal behavior of a node.
///
/// Receives the session's input source, output sink and the inputs collected
/// for the node it belongs to.
pub type Action =
    Box<dyn FnMut(&mut dyn TextInput, &mut dyn TextOutput, &Inputs) -> Result<(), ActionFailure>>;

/// What happens after a node's action has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Unwind the whole session.
    Exit,
    /// Return to the parent, which renders its choices again.
    GoBack,
}

/// Failure raised by an action. Reported and then swallowed by the walker.
#[derive(Error, Debug)]
#[error("{kind}: {error}")]
pub struct ActionFailure {
    kind: String,
    error: anyhow::Error,
}

impl ActionFailure {
    pub fn new(kind: impl Into<String>, error: anyhow::Error) -> Self {
        Self {
            kind: kind.into(),
            error,
        }
    }

    /// Wrap an error, naming the failure after the error's type.
    ///
    /// An I/O error, bare or behind `.context(..)`, is named after its
    /// `ErrorKind` instead.
    pub fn of<E: Into<anyhow::Error>>(error: E) -> Self {
        let error = error.into();
        let kind = match error.downcast_ref::<io::Error>() {
            Some(io) => format!("io::Error({:?})", io.kind()),
            None => short_type_name::<E>(),
        };
        Self::new(kind, error)
    }

    /// Failure for an action that panicked.
    pub fn panic(message: impl Into<String>) -> Self {
        Self::new("panic", anyhow::anyhow!(message.into()))
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }
}

/// `core::num::error::ParseIntError` → `ParseIntError`, `anyhow::Error` →
/// `anyhow::Error`, `core::fmt::Error` → `fmt::Error`.
///
/// A bare `Error` keeps the closest module name that is not `error`.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let mut segments = base.rsplit("::");
    let name = segments.next().unwrap_or(base);
    if name != "Error" {
        return name.to_string();
    }
    match segments.find(|segment| *segment != "error") {
        Some(module) => format!("{}::{}", module, name),
        None => name.to_string(),
    }
}

/// One numbered menu entry.
#[derive(Debug)]
pub struct MenuOption {
    pub(crate) label: String,
    pub(crate) node: Node,
}

impl MenuOption {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn node(&self) -> &Node {
        &self.node
    }
}

/// One keyed answer of a prompt table.
#[derive(Debug)]
pub struct Answer {
    pub(crate) key: String,
    pub(crate) node: Node,
}

impl Answer {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn node(&self) -> &Node {
        &self.node
    }
}

/// Single free-text selection among keyed children.
#[derive(Debug)]
pub struct PromptTable {
    pub(crate) heading: Option<String>,
    pub(crate) answers: Vec<Answer>,
    pub(crate) case: CaseSensitivity,
}

impl PromptTable {
    pub(crate) fn new(heading: String, case: CaseSensitivity) -> Self {
        let heading = if heading.trim().is_empty() {
            None
        } else {
            Some(heading)
        };
        Self {
            heading,
            answers: Vec::new(),
            case,
        }
    }

    /// Insert an answer. An existing key equal under the case policy is
    /// replaced in place; returns `true` in that case.
    pub(crate) fn insert(&mut self, key: String, node: Node) -> bool {
        match self.position(&key) {
            Some(idx) => {
                self.answers[idx] = Answer { key, node };
                true
            }
            None => {
                self.answers.push(Answer { key, node });
                false
            }
        }
    }

    /// Index of the answer matching `answer` under the case policy.
    pub fn position(&self, answer: &str) -> Option<usize> {
        self.answers
            .iter()
            .position(|a| self.case.matches(&a.key, answer))
    }

    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn case(&self) -> CaseSensitivity {
        self.case
    }
}

/// The single body of a node.
pub enum Body {
    Menu(Vec<MenuOption>),
    Prompt(PromptTable),
    Action {
        action: Action,
        continuation: Continuation,
    },
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Menu(options) => f.debug_tuple("Menu").field(options).finish(),
            Body::Prompt(table) => f.debug_tuple("Prompt").field(table).finish(),
            Body::Action { continuation, .. } => f
                .debug_struct("Action")
                .field("continuation", continuation)
                .finish_non_exhaustive(),
        }
    }
}

/// A fully configured interaction unit.
///
/// Built once through [`crate::domain::InteractionBuilder`]; only `collected`
/// changes afterwards, and only while the node runs.
#[derive(Debug)]
pub struct Node {
    pub(crate) intro: String,
    pub(crate) prompts: InputPrompts,
    pub(crate) inherited: Inputs,
    pub(crate) collected: Inputs,
    pub(crate) body: Body,
}

impl Node {
    pub fn intro(&self) -> &str {
        &self.intro
    }

    pub fn input_prompts(&self) -> &InputPrompts {
        &self.prompts
    }

    /// Snapshot of the parent's inputs taken when this node was built.
    pub fn inherited_inputs(&self) -> &Inputs {
        &self.inherited
    }

    /// Values collected so far by this node (including merged inherited ones).
    pub fn collected_inputs(&self) -> &Inputs {
        &self.collected
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Children in display order; empty for action nodes.
    pub fn children(&self) -> Vec<&Node> {
        match &self.body {
            Body::Menu(options) => options.iter().map(|o| &o.node).collect(),
            Body::Prompt(table) => table.answers.iter().map(|a| &a.node).collect(),
            Body::Action { .. } => Vec::new(),
        }
    }

    /// Whether this node has something to dispatch to.
    pub fn has_body(&self) -> bool {
        match &self.body {
            Body::Menu(options) => !options.is_empty(),
            Body::Prompt(table) => !table.answers.is_empty(),
            Body::Action { .. } => true,
        }
    }

    /// Check the whole tree for nodes without options, answers or action.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.has_body() {
            return Err(self.missing_body());
        }
        self.children()
            .into_iter()
            .try_for_each(|child| child.validate())
    }

    pub(crate) fn missing_body(&self) -> DomainError {
        DomainError::MissingBody {
            intro: self.intro.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_std_error_when_wrapping_then_kind_is_short_type_name() {
        let err = "x".parse::<i32>().unwrap_err();
        let failure = ActionFailure::of(err);
        assert_eq!(failure.kind(), "ParseIntError");
    }

    #[test]
    fn given_anyhow_error_when_wrapping_then_kind_names_the_crate() {
        let failure = ActionFailure::of(anyhow::anyhow!("boom"));
        assert_eq!(failure.kind(), "anyhow::Error");
        assert_eq!(failure.error().to_string(), "boom");
    }

    #[test]
    fn given_io_error_when_wrapping_then_kind_names_the_error_kind() {
        let failure = ActionFailure::of(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(failure.kind(), "io::Error(NotFound)");
    }

    #[test]
    fn given_io_error_behind_context_when_wrapping_then_kind_names_the_error_kind() {
        use anyhow::Context;

        let result: anyhow::Result<()> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked")).context("opening report");
        let failure = ActionFailure::of(result.unwrap_err());
        assert_eq!(failure.kind(), "io::Error(PermissionDenied)");
    }

    #[test]
    fn given_fmt_error_when_wrapping_then_kind_keeps_module() {
        let failure = ActionFailure::of(std::fmt::Error);
        assert_eq!(failure.kind(), "fmt::Error");
    }

    #[test]
    fn given_panic_message_when_wrapping_then_kind_is_panic() {
        let failure = ActionFailure::panic("oops");
        assert_eq!(failure.kind(), "panic");
        assert_eq!(failure.to_string(), "panic: oops");
    }
}

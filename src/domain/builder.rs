//! Staged fluent builder for interaction trees.
//!
//! Every stage is its own type, so only the calls legal at that point are
//! available:
//!
//! ```text
//! InteractionBuilder ──with_menu / prompt*──▶ Finisher ──build──▶ Node
//!         │
//!         └──run_action──▶ ContinuationBuilder ──and_exit / and_go_back──▶ Node
//! ```
//!
//! Child builders handed to menu options and prompt answers are seeded with a
//! snapshot of the parent's inputs at that moment.

use tracing::{debug, warn};

use crate::domain::inputs::{CaseSensitivity, InputPrompts, Inputs};
use crate::domain::node::{
    Action, ActionFailure, Body, Continuation, MenuOption, Node, PromptTable,
};
use crate::infrastructure::traits::{TextInput, TextOutput};

/// Construction record shared by all stages.
#[derive(Debug, Default)]
struct NodeRecord {
    intro: String,
    prompts: InputPrompts,
    inherited: Inputs,
    defaults: Inputs,
}

impl NodeRecord {
    /// Inputs visible to children built from this record.
    fn snapshot(&self) -> Inputs {
        let mut inputs = self.inherited.clone();
        inputs.extend(self.defaults.iter().map(|(k, v)| (k.clone(), v.clone())));
        inputs
    }

    fn finish(self, body: Body) -> Node {
        Node {
            intro: self.intro,
            prompts: self.prompts,
            inherited: self.inherited,
            collected: self.defaults,
            body,
        }
    }
}

/// Base stage: intro, inputs and the choice of body.
#[derive(Debug, Default)]
pub struct InteractionBuilder {
    record: NodeRecord,
}

impl InteractionBuilder {
    /// Start a root interaction.
    pub fn new() -> Self {
        Self::default()
    }

    fn child(inherited: Inputs) -> Self {
        Self {
            record: NodeRecord {
                inherited,
                ..NodeRecord::default()
            },
        }
    }

    /// Text printed whenever the node is entered.
    pub fn with_intro(mut self, text: impl Into<String>) -> Self {
        self.record.intro = text.into();
        self
    }

    /// Ask for `key` when the node is entered, showing `prompt`.
    pub fn prompt_for_input(mut self, key: impl Into<String>, prompt: impl Into<String>) -> Self {
        self.record.prompts.declare(key, prompt);
        self
    }

    /// Starting value for `key`, shown as the current value when prompting and
    /// passed down to children built afterwards.
    pub fn with_default_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.record.defaults.insert(key.into(), value.into());
        self
    }

    /// Numbered menu of child interactions.
    pub fn with_menu<F>(self, configure: F) -> Finisher
    where
        F: FnOnce(MenuBuilder) -> MenuBuilder,
    {
        let menu = configure(MenuBuilder {
            seed: self.record.snapshot(),
            options: Vec::new(),
        });
        debug!("with_menu: {} options", menu.options.len());
        Finisher {
            record: self.record,
            body: Body::Menu(menu.options),
        }
    }

    /// Single free-text choice, matched exactly.
    pub fn prompt<F>(self, heading: impl Into<String>, configure: F) -> Finisher
    where
        F: FnOnce(PromptBuilder) -> PromptBuilder,
    {
        self.prompt_with(heading.into(), CaseSensitivity::Sensitive, configure)
    }

    /// Single free-text choice, matched ignoring case.
    pub fn prompt_case_insensitive<F>(self, heading: impl Into<String>, configure: F) -> Finisher
    where
        F: FnOnce(PromptBuilder) -> PromptBuilder,
    {
        self.prompt_with(heading.into(), CaseSensitivity::Insensitive, configure)
    }

    fn prompt_with<F>(self, heading: String, case: CaseSensitivity, configure: F) -> Finisher
    where
        F: FnOnce(PromptBuilder) -> PromptBuilder,
    {
        let prompt = configure(PromptBuilder {
            seed: self.record.snapshot(),
            table: PromptTable::new(heading, case),
        });
        debug!("prompt: {} answers, {:?}", prompt.table.answers.len(), case);
        Finisher {
            record: self.record,
            body: Body::Prompt(prompt.table),
        }
    }

    /// Terminal action. Any error it returns is reported and the session goes
    /// on according to the chosen continuation.
    pub fn run_action<F, E>(self, mut action: F) -> ContinuationBuilder
    where
        F: FnMut(&mut dyn TextInput, &mut dyn TextOutput, &Inputs) -> Result<(), E> + 'static,
        E: Into<anyhow::Error> + 'static,
    {
        let action: Action = Box::new(
            move |input: &mut dyn TextInput, output: &mut dyn TextOutput, inputs: &Inputs| {
                action(input, output, inputs).map_err(ActionFailure::of)
            },
        );
        ContinuationBuilder {
            record: self.record,
            action,
        }
    }
}

/// Menu stage: collects numbered options.
pub struct MenuBuilder {
    seed: Inputs,
    options: Vec<MenuOption>,
}

impl MenuBuilder {
    /// Add an option; `configure` builds the child it leads to.
    pub fn option<F>(mut self, label: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(InteractionBuilder) -> Node,
    {
        let node = configure(InteractionBuilder::child(self.seed.clone()));
        self.options.push(MenuOption {
            label: label.into(),
            node,
        });
        self
    }
}

/// Prompt stage: collects keyed answers.
pub struct PromptBuilder {
    seed: Inputs,
    table: PromptTable,
}

impl PromptBuilder {
    /// Add an answer; `configure` builds the child it leads to.
    pub fn answer<F>(mut self, key: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(InteractionBuilder) -> Node,
    {
        let key = key.into();
        let node = configure(InteractionBuilder::child(self.seed.clone()));
        if self.table.insert(key.clone(), node) {
            warn!("prompt answer {:?} declared twice, keeping the last one", key);
        }
        self
    }
}

/// Finishing stage once a menu or prompt table is configured.
///
/// A node has exactly one body, so no action can be attached here:
///
/// ```compile_fail
/// use interact::domain::InteractionBuilder;
///
/// let _ = InteractionBuilder::new()
///     .with_menu(|menu| menu)
///     .run_action(|_, output, _| output.write_line("x"))
///     .and_exit();
/// ```
#[derive(Debug)]
pub struct Finisher {
    record: NodeRecord,
    body: Body,
}

impl Finisher {
    pub fn build(self) -> Node {
        self.record.finish(self.body)
    }
}

/// Continuation stage after an action was attached.
pub struct ContinuationBuilder {
    record: NodeRecord,
    action: Action,
}

impl ContinuationBuilder {
    /// Stop the whole session after the action.
    pub fn and_exit(self) -> Node {
        self.finish(Continuation::Exit)
    }

    /// Return to the parent after the action.
    pub fn and_go_back(self) -> Node {
        self.finish(Continuation::GoBack)
    }

    fn finish(self, continuation: Continuation) -> Node {
        self.record.finish(Body::Action {
            action: self.action,
            continuation,
        })
    }
}

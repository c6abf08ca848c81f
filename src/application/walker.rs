//! Runtime walker: executes an interaction tree against a console.
//!
//! A node is entered by merging the inputs handed down from its parent,
//! printing its intro and prompting for its own inputs. It then dispatches on
//! its body until a child (or its own action) decides the session should exit.

use std::any::Any;
use std::backtrace::BacktraceStatus;
use std::panic::{self, AssertUnwindSafe};

use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{
    Action, ActionFailure, Body, Continuation, DomainError, InputPrompts, Inputs, MenuOption,
    Node, PromptTable,
};
use crate::infrastructure::traits::{TextInput, TextOutput};

/// Printed before a misconfigured node aborts the session.
pub const MISCONFIGURED_MESSAGE: &str = "The interaction has not been configured properly: \
     no Menu, Prompts or Action have been found. This is a fatal error.";

/// Decision a node hands back to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going at the parent's level.
    Continue,
    /// Unwind the whole session.
    Exit,
}

impl Flow {
    pub fn should_continue(self) -> bool {
        self == Flow::Continue
    }
}

impl From<Flow> for bool {
    fn from(flow: Flow) -> bool {
        flow.should_continue()
    }
}

/// Drives nodes against one input source and one output sink.
pub struct Walker<'io> {
    input: &'io mut dyn TextInput,
    output: &'io mut dyn TextOutput,
}

impl<'io> Walker<'io> {
    pub fn new(input: &'io mut dyn TextInput, output: &'io mut dyn TextOutput) -> Self {
        Self { input, output }
    }

    /// Run `root` to completion and return its decision to the caller.
    pub fn run(&mut self, root: &mut Node) -> ApplicationResult<Flow> {
        let flow = self.run_node(root, &Inputs::new())?;
        debug!("run: session finished with {:?}", flow);
        Ok(flow)
    }

    fn run_node(&mut self, node: &mut Node, parent: &Inputs) -> ApplicationResult<Flow> {
        let Node {
            intro,
            prompts,
            inherited,
            collected,
            body,
        } = node;
        debug!("run_node: intro={:?}", intro);

        merge_missing(collected, parent);
        merge_missing(collected, inherited);

        self.output.write_line(intro).with_io_context("write intro")?;
        self.collect_inputs(prompts, collected)?;

        loop {
            let flow = match &mut *body {
                Body::Menu(options) => {
                    if options.is_empty() {
                        return Err(self.misconfigured(intro)?);
                    }
                    let idx = self.select_option(options)?;
                    debug!("menu: selected {} ({:?})", idx, options[idx].label);
                    self.run_node(&mut options[idx].node, collected)?
                }
                Body::Prompt(table) => {
                    if table.answers.is_empty() {
                        return Err(self.misconfigured(intro)?);
                    }
                    let idx = self.select_answer(table)?;
                    debug!("prompt: selected {:?}", table.answers[idx].key);
                    self.run_node(&mut table.answers[idx].node, collected)?
                }
                Body::Action {
                    action,
                    continuation,
                } => {
                    self.invoke(action, collected)?;
                    return Ok(match continuation {
                        Continuation::Exit => Flow::Exit,
                        Continuation::GoBack => Flow::Continue,
                    });
                }
            };

            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
            trace!("run_node: child went back, dispatching again");
        }
    }

    fn collect_inputs(&mut self, prompts: &InputPrompts, collected: &mut Inputs) -> ApplicationResult<()> {
        for (key, prompt) in prompts.iter() {
            let current = collected.get(key).map(String::as_str).unwrap_or("");
            self.output
                .write(&format!("{} [{}]: ", prompt, current))
                .with_io_context("write input prompt")?;

            let line = self.read_line()?;
            // empty line keeps the shown value
            if !line.is_empty() {
                debug!("collect_inputs: {}={:?}", key, line);
                collected.insert(key.to_string(), line);
            }
        }
        Ok(())
    }

    fn select_option(&mut self, options: &[MenuOption]) -> ApplicationResult<usize> {
        for (idx, option) in options.iter().enumerate() {
            self.output
                .write_line(&format!("{}. {}", idx, option.label))
                .with_io_context("write menu")?;
        }

        let max = options.len() - 1;
        loop {
            self.output
                .write(&format!("[0 - {}]: ", max))
                .with_io_context("write menu prompt")?;
            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(idx) if idx <= max => return Ok(idx),
                _ => trace!("select_option: rejected {:?}", line),
            }
        }
    }

    fn select_answer(&mut self, table: &PromptTable) -> ApplicationResult<usize> {
        if let Some(heading) = &table.heading {
            self.output
                .write_line(heading)
                .with_io_context("write prompt heading")?;
        }

        let choices = format!("[{}]: ", table.answers.iter().map(|a| a.key.as_str()).join(", "));
        loop {
            self.output
                .write(&choices)
                .with_io_context("write prompt choices")?;
            let line = self.read_line()?;
            match table.position(&line) {
                Some(idx) => return Ok(idx),
                None => trace!("select_answer: rejected {:?}", line),
            }
        }
    }

    fn invoke(&mut self, action: &mut Action, inputs: &Inputs) -> ApplicationResult<()> {
        let input: &mut dyn TextInput = &mut *self.input;
        let output: &mut dyn TextOutput = &mut *self.output;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| action(input, output, inputs)));

        let failure = match outcome {
            Ok(Ok(())) => return Ok(()),
            Ok(Err(failure)) => failure,
            Err(payload) => ActionFailure::panic(panic_message(payload.as_ref())),
        };
        warn!("action failed: {}", failure);
        self.report_failure(&failure)
    }

    fn report_failure(&mut self, failure: &ActionFailure) -> ApplicationResult<()> {
        self.output
            .write_line(&format!(
                "{} has been thrown during action execution. Details below.",
                failure.kind()
            ))
            .with_io_context("write failure report")?;

        for cause in failure.error().chain() {
            self.output
                .write_line(&cause.to_string())
                .with_io_context("write failure report")?;
        }

        let backtrace = failure.error().backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            self.output
                .write_line(&backtrace.to_string())
                .with_io_context("write failure report")?;
        }
        Ok(())
    }

    /// Report a node without anything to dispatch to and build the fatal error.
    fn misconfigured(&mut self, intro: &str) -> ApplicationResult<ApplicationError> {
        self.output
            .write_line(MISCONFIGURED_MESSAGE)
            .with_io_context("write configuration error")?;
        Ok(DomainError::MissingBody {
            intro: intro.to_string(),
        }
        .into())
    }

    fn read_line(&mut self) -> ApplicationResult<String> {
        self.input
            .read_line()
            .with_io_context("read input")?
            .ok_or(ApplicationError::EndOfInput)
    }
}

impl Node {
    /// Run this node as the root of a session.
    pub fn run(
        &mut self,
        input: &mut dyn TextInput,
        output: &mut dyn TextOutput,
    ) -> ApplicationResult<Flow> {
        Walker::new(input, output).run(self)
    }
}

/// Copy entries of `from` whose keys `into` does not have yet.
fn merge_missing(into: &mut Inputs, from: &Inputs) {
    for (key, value) in from {
        if !into.contains_key(key) {
            into.insert(key.clone(), value.clone());
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "action panicked".to_string()
    }
}

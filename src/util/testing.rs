//! Test support: logging setup and scripted console doubles

use std::collections::VecDeque;
use std::env;
use std::io;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::{TextInput, TextOutput};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    // RUST_LOG wins; otherwise trace our own crate only
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("interact=trace"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }

    if env::var("RUST_LOG").is_ok() {
        debug!("Using RUST_LOG filter");
    }
}

/// Input source replaying fixed lines, then reporting end of input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl TextInput for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Output sink collecting everything written.
#[derive(Debug, Default)]
pub struct CapturedOutput {
    text: String,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Complete lines written so far (a trailing fragment counts as a line).
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// Number of times `needle` occurs in the output.
    pub fn count(&self, needle: &str) -> usize {
        self.text.matches(needle).count()
    }

    /// Byte offset of the first `needle`, for ordering assertions.
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.text.find(needle)
    }
}

impl TextOutput for CapturedOutput {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.text.push_str(line);
        self.text.push('\n');
        Ok(())
    }

    fn write(&mut self, fragment: &str) -> io::Result<()> {
        self.text.push_str(fragment);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn given_scripted_lines_when_reading_then_ends_with_none() {
        let mut input = ScriptedInput::new(["a", ""]);

        assert_eq!(input.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line().unwrap(), None);
        assert_eq!(input.remaining(), 0);
    }
}

//! Command dispatch for the `interact` binary

use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::{sample_interaction, ApplicationError};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::infrastructure::{ReaderInput, WriterOutput};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    if !settings.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::Demo { validate }) => cmd_demo(&settings, *validate),
        Some(Commands::Outline) => cmd_outline(),
        Some(Commands::Config { command }) => cmd_config(command, &settings),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see `interact --help`".to_string(),
        )),
    }
}

#[instrument(skip(settings))]
fn cmd_demo(settings: &Settings, validate: bool) -> CliResult<()> {
    let mut root = sample_interaction();
    if validate || settings.validate {
        root.validate().map_err(ApplicationError::from)?;
    }

    let mut stdin = ReaderInput::stdin();
    let mut stdout = WriterOutput::stdout();
    match root.run(&mut stdin, &mut stdout) {
        Ok(flow) => debug!("demo: finished with {:?}", flow),
        Err(ApplicationError::EndOfInput) => {
            output::warning("input closed before the session finished")
        }
        Err(e) => return Err(e.into()),
    }

    output::info(&settings.exit_message);
    Ok(())
}

#[instrument]
fn cmd_outline() -> CliResult<()> {
    output::header("Sample interaction");
    output::info(&sample_interaction().outline());
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
    }
    Ok(())
}

fn cmd_completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "treedit";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            match self.shell {
                Shell::Bash => {
                    eprintln!("# Install with:");
                    eprintln!(
                        "#   treedit completions bash > ~/.local/share/bash-completion/completions/treedit"
                    );
                }
                Shell::Zsh => {
                    eprintln!("# Install with:");
                    eprintln!("#   treedit completions zsh > ~/.zsh/completions/_treedit");
                }
                Shell::Fish => {
                    eprintln!("# Install with:");
                    eprintln!("#   treedit completions fish > ~/.config/fish/completions/treedit.fish");
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

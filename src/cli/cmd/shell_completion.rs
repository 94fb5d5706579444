use clap::{Command, Parser};
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generates completions for some shells.
///
/// For example, with bash:
/// `mmadmin shell-completion --shell bash > ~/.local/share/bash-completion/completions/mmadmin`
#[derive(Parser, std::fmt::Debug)]
pub struct Input {
    /// For which shell to generate completions.
    #[arg(long, value_enum)]
    pub shell: Shell,

    /// The binary name.
    #[arg(long, default_value = "mmadmin")]
    pub binary: String,
}

impl Input {
    pub fn print_completions(&self, app: &mut Command) {
        self.write_completions(app, &mut std::io::stdout());
    }

    fn write_completions(&self, app: &mut Command, out: &mut dyn Write) {
        generate(self.shell, app, &self.binary, out);
    }
}

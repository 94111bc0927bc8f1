//! Shell integration scripts printed by `ttyhop shell <shell>`.

const ZSH_SCRIPT: &str = include_str!("../shell_integration/ttyhop.zsh");

/// Shells with an integration script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Shell {
    Zsh,
}

impl Shell {
    /// The integration script, ready for `eval`.
    pub fn script(self) -> &'static str {
        match self {
            Shell::Zsh => ZSH_SCRIPT,
        }
    }
}

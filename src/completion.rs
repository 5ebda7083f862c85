//! Shell completion script generation.

use crate::error::{ResolveError, Result};
use clap::Command;
use clap_complete::{generate, Shell};

/// Shell names accepted by the `completions` subcommand.
pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Parse a shell name such as `zsh`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(ResolveError::ShellCompletion(format!(
                "Unsupported shell: '{}'",
                name
            ))),
        }
    }

    /// Convert to the `clap_complete::Shell` type.
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Generate the completion script for `cmd` as a string.
pub fn generate_completion_script(shell: ShellType, cmd: &mut Command) -> String {
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell.to_clap_shell(), cmd, name, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

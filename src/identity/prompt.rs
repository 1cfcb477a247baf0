use super::*;

/// Interactive source of a player name.
/// Implementations can be a terminal dialog, a modal form, or a script.
pub trait Prompt {
    /// Ask for a name. `error` is the reason the previous attempt was refused.
    fn ask(&mut self, error: Option<&NameError>) -> anyhow::Result<String>;
}

/// Terminal dialog that cannot be dismissed without entering a name.
#[cfg(feature = "cli")]
#[derive(Debug, Default)]
pub struct TerminalPrompt;

#[cfg(feature = "cli")]
impl Prompt for TerminalPrompt {
    fn ask(&mut self, error: Option<&NameError>) -> anyhow::Result<String> {
        use colored::Colorize;
        if let Some(error) = error {
            eprintln!("{}", error.to_string().red());
        }
        Ok(dialoguer::Input::<String>::new()
            .with_prompt("Player name")
            .allow_empty(true)
            .report(false)
            .interact_text()?)
    }
}

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;

use crate::error::ScaffoldError;

/// Single-select capability. `Ok(None)` means the user backed out.
pub trait Prompt {
    fn select(&self, label: &str, items: &[String]) -> Result<Option<String>>;
}

/// Arrow-key selection on the terminal.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn select(&self, label: &str, items: &[String]) -> Result<Option<String>> {
        let chosen = Select::with_theme(&ColorfulTheme::default())
            .items(items)
            .with_prompt(label)
            .default(0)
            .interact_opt()?;

        Ok(chosen.and_then(|idx| items.get(idx).cloned()))
    }
}

/// Answers with a name given up front, as long as it is one of the choices.
pub struct PresetPrompt(pub String);

impl Prompt for PresetPrompt {
    fn select(&self, _label: &str, items: &[String]) -> Result<Option<String>> {
        if items.iter().any(|item| item == &self.0) {
            Ok(Some(self.0.clone()))
        } else {
            Err(ScaffoldError::UnknownTemplate(self.0.clone()).into())
        }
    }
}

/// Ask for a template. Backing out, or having no terminal to ask on, ends
/// the run as a cancellation.
pub fn select_template(prompt: &dyn Prompt, templates: &[String]) -> Result<String, ScaffoldError> {
    match prompt.select("📜 Choose a template", templates) {
        Ok(Some(template)) => Ok(template),
        Ok(None) => Err(ScaffoldError::Cancelled),
        Err(e) => match e.downcast::<ScaffoldError>() {
            Ok(e) => Err(e),
            Err(e) => {
                debug!("prompt failed: {e:#}");
                Err(ScaffoldError::Cancelled)
            }
        },
    }
}

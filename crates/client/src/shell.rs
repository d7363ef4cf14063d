//! Interactive line shell: the presentation layer over [`CharacterModel`].

use std::io::{BufRead, Write};

use sheet_core::{CharacterModel, Intent, IntentOutcome, RulesOracle, SheetError};

use crate::command::{Command, HELP, parse_line};
use crate::render::{RollDisplay, SheetDisplay};

/// What the shell wants the caller to do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Holds the only reference to the model and forwards parsed intents to it.
pub struct Shell {
    model: CharacterModel,
}

impl Shell {
    pub fn new(model: CharacterModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &CharacterModel {
        &self.model
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "Character sheet builder. Type 'help' for commands.")?;
        for line in input.lines() {
            match self.handle_line(&line?) {
                Reply::Text(text) if text.is_empty() => {}
                Reply::Text(text) => writeln!(output, "{}", text)?,
                Reply::Quit => break,
            }
            output.flush()?;
        }
        tracing::info!("Shell closed with {} characters", self.model.len());
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::Text(String::new()),
            Err(error) => {
                tracing::debug!("Rejected input '{}': {}", line.trim(), error);
                return Reply::Text(format!("error: {}", error));
            }
        };

        match command {
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
            Command::List | Command::Show(None) => Reply::Text(self.render_all()),
            Command::Show(Some(index)) => Reply::Text(self.render_one(index)),
            Command::Intent(intent) => Reply::Text(self.forward(intent)),
        }
    }

    fn forward(&mut self, intent: Intent) -> String {
        let intent = self.canonicalize(intent);

        if let Intent::RollSkillCheck { index } = intent {
            if let Ok(false) = self.model.can_roll(index) {
                return format!("select a skill first: check {} <skill>", index);
            }
        }

        match self.model.execute(&intent) {
            Ok(IntentOutcome::Changed) => intent
                .index()
                .map(|index| self.render_one(index))
                .unwrap_or_default(),
            Ok(IntentOutcome::Unchanged) => "no change (limit reached)".to_string(),
            Ok(IntentOutcome::Added(index)) => self.render_one(index),
            Ok(IntentOutcome::Rolled(outcome)) => format!("rolled {}", RollDisplay(&outcome)),
            Err(error) => {
                let severity = error.severity();
                if severity.is_recoverable() {
                    tracing::info!(
                        "{} deferred [{}]: {}",
                        intent.kind(),
                        error.error_code(),
                        error
                    );
                } else {
                    tracing::warn!(
                        "{} failed [{}/{}]: {}",
                        intent.kind(),
                        severity.as_str(),
                        error.error_code(),
                        error
                    );
                }
                format!("error: {}", error)
            }
        }
    }

    /// Matches typed skill and class names to table names ignoring case.
    fn canonicalize(&self, intent: Intent) -> Intent {
        let rules = self.model.rules();
        let skill_name = |name: String| {
            rules
                .skills()
                .iter()
                .find(|skill| skill.name.eq_ignore_ascii_case(&name))
                .map(|skill| skill.name.clone())
                .unwrap_or(name)
        };

        match intent {
            Intent::IncrementSkill { index, skill } => Intent::IncrementSkill {
                index,
                skill: skill_name(skill),
            },
            Intent::DecrementSkill { index, skill } => Intent::DecrementSkill {
                index,
                skill: skill_name(skill),
            },
            Intent::SelectCheckSkill { index, skill } => Intent::SelectCheckSkill {
                index,
                skill: skill.map(skill_name),
            },
            Intent::ToggleClass { index, class } => Intent::ToggleClass {
                index,
                class: canonical_class(rules, class),
            },
            other => other,
        }
    }

    fn render_one(&self, index: usize) -> String {
        match self.model.sheet(index) {
            Ok(view) => SheetDisplay(&view).to_string(),
            Err(error) => format!("error: {}", error),
        }
    }

    fn render_all(&self) -> String {
        self.model
            .sheets()
            .iter()
            .map(|view| SheetDisplay(view).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn canonical_class(rules: &dyn RulesOracle, name: String) -> String {
    rules
        .classes()
        .iter()
        .find(|class| class.name.eq_ignore_ascii_case(&name))
        .map(|class| class.name.clone())
        .unwrap_or(name)
}

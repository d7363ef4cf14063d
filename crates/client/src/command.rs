//! Line command parsing.
//!
//! Each input line becomes either a shell command (`show`, `help`, ...) or
//! an [`Intent`] for the model. Skill and class names may contain spaces and
//! take the rest of the line.

use sheet_core::{Attribute, Intent, LookupError};

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// All characters.
    List,
    /// One character, or all when `None`.
    Show(Option<usize>),
    Intent(Intent),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a character number")]
    InvalidIndex(String),

    #[error("'{0}' is not a valid DC")]
    InvalidDc(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

pub const HELP: &str = "\
commands:
  list                         show every character
  show [n]                     show character n (or all)
  add                          add a character
  inc <n> <attribute>          raise an attribute
  dec <n> <attribute>          lower an attribute
  skill+ <n> <skill>           allocate a skill point
  skill- <n> <skill>           remove a skill point
  class <n> <class>            select or deselect a class
  check <n> <skill|none>       choose the skill to check
  dc <n> <value>               set the difficulty class
  roll <n>                     roll the skill check
  help                         this text
  quit                         leave";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let verb = verb.to_ascii_lowercase();

    let command = match verb.as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "list" => Command::List,
        "show" => Command::Show(words.next().map(parse_index).transpose()?),
        "add" => Command::Intent(Intent::AddCharacter),
        "inc" | "dec" => {
            let command = if verb == "inc" { "inc" } else { "dec" };
            let index = required_index(&mut words, command)?;
            let name = rest(words).ok_or(CommandError::MissingArgument {
                command,
                argument: "an attribute",
            })?;
            let attribute = Attribute::parse(&name)?;
            Command::Intent(if command == "inc" {
                Intent::IncrementAttribute { index, attribute }
            } else {
                Intent::DecrementAttribute { index, attribute }
            })
        }
        "skill+" | "skill-" => {
            let command = if verb == "skill+" { "skill+" } else { "skill-" };
            let index = required_index(&mut words, command)?;
            let skill = rest(words).ok_or(CommandError::MissingArgument {
                command,
                argument: "a skill",
            })?;
            Command::Intent(if command == "skill+" {
                Intent::IncrementSkill { index, skill }
            } else {
                Intent::DecrementSkill { index, skill }
            })
        }
        "class" => {
            let index = required_index(&mut words, "class")?;
            let class = rest(words).ok_or(CommandError::MissingArgument {
                command: "class",
                argument: "a class",
            })?;
            Command::Intent(Intent::ToggleClass { index, class })
        }
        "check" => {
            let index = required_index(&mut words, "check")?;
            let skill = rest(words).ok_or(CommandError::MissingArgument {
                command: "check",
                argument: "a skill or 'none'",
            })?;
            let skill = (!skill.eq_ignore_ascii_case("none")).then_some(skill);
            Command::Intent(Intent::SelectCheckSkill { index, skill })
        }
        "dc" => {
            let index = required_index(&mut words, "dc")?;
            let raw = words.next().ok_or(CommandError::MissingArgument {
                command: "dc",
                argument: "a value",
            })?;
            let dc = raw
                .parse()
                .map_err(|_| CommandError::InvalidDc(raw.to_string()))?;
            Command::Intent(Intent::SetCheckDc { index, dc })
        }
        "roll" => {
            let index = required_index(&mut words, "roll")?;
            Command::Intent(Intent::RollSkillCheck { index })
        }
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_index(raw: &str) -> Result<usize, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidIndex(raw.to_string()))
}

fn required_index<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<usize, CommandError> {
    let raw = words.next().ok_or(CommandError::MissingArgument {
        command,
        argument: "a character number",
    })?;
    parse_index(raw)
}

/// Remaining words joined by single spaces, or `None` if there are none.
fn rest<'a>(words: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = words.collect::<Vec<_>>().join(" ");
    (!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(line: &str) -> Intent {
        match parse_line(line) {
            Ok(Some(Command::Intent(intent))) => intent,
            other => panic!("expected intent for '{line}', got {other:?}"),
        }
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn attribute_commands() {
        assert_eq!(
            intent("inc 0 strength"),
            Intent::IncrementAttribute {
                index: 0,
                attribute: Attribute::Strength
            }
        );
        assert_eq!(
            intent("DEC 2 Wisdom"),
            Intent::DecrementAttribute {
                index: 2,
                attribute: Attribute::Wisdom
            }
        );
        assert_eq!(
            parse_line("inc 0 luck"),
            Err(CommandError::Lookup(LookupError::UnknownAttribute(
                "luck".into()
            )))
        );
    }

    #[test]
    fn multi_word_skills() {
        assert_eq!(
            intent("skill+ 1 Sleight   of Hand"),
            Intent::IncrementSkill {
                index: 1,
                skill: "Sleight of Hand".into()
            }
        );
        assert_eq!(
            intent("check 0 Animal Handling"),
            Intent::SelectCheckSkill {
                index: 0,
                skill: Some("Animal Handling".into())
            }
        );
        assert_eq!(
            intent("check 0 none"),
            Intent::SelectCheckSkill {
                index: 0,
                skill: None
            }
        );
    }

    #[test]
    fn dc_accepts_negative_values() {
        assert_eq!(intent("dc 0 -4"), Intent::SetCheckDc { index: 0, dc: -4 });
        assert_eq!(
            parse_line("dc 0 hard"),
            Err(CommandError::InvalidDc("hard".into()))
        );
    }

    #[test]
    fn argument_errors() {
        assert_eq!(
            parse_line("roll"),
            Err(CommandError::MissingArgument {
                command: "roll",
                argument: "a character number"
            })
        );
        assert_eq!(
            parse_line("roll first"),
            Err(CommandError::InvalidIndex("first".into()))
        );
        assert_eq!(
            parse_line("class 0"),
            Err(CommandError::MissingArgument {
                command: "class",
                argument: "a class"
            })
        );
        assert_eq!(
            parse_line("dance"),
            Err(CommandError::UnknownCommand("dance".into()))
        );
    }

    #[test]
    fn shell_commands() {
        assert_eq!(parse_line("show"), Ok(Some(Command::Show(None))));
        assert_eq!(parse_line("show 3"), Ok(Some(Command::Show(Some(3)))));
        assert_eq!(parse_line("list"), Ok(Some(Command::List)));
        assert_eq!(parse_line("exit"), Ok(Some(Command::Quit)));
        assert_eq!(
            parse_line("add"),
            Ok(Some(Command::Intent(Intent::AddCharacter)))
        );
    }
}

//! Line-oriented command language.
//!
//! ```text
//! # comment
//! create <id> <parent> [<parent>...]
//! cite <child> <parent>
//! remove <id>
//! children <id> | parents <id> | exists <id> | get <id>
//! title <id> <text...>
//! root
//! ```

use citegraph_core::PaperId;

use crate::error::{CliError, Result};

/// One parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { id: PaperId, parents: Vec<PaperId> },
    Cite { child: PaperId, parent: PaperId },
    Remove { id: PaperId },
    Children { id: PaperId },
    Parents { id: PaperId },
    Exists { id: PaperId },
    Get { id: PaperId },
    Title { id: PaperId, title: String },
    Root,
}

impl Command {
    /// The keyword this command is written with.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Cite { .. } => "cite",
            Self::Remove { .. } => "remove",
            Self::Children { .. } => "children",
            Self::Parents { .. } => "parents",
            Self::Exists { .. } => "exists",
            Self::Get { .. } => "get",
            Self::Title { .. } => "title",
            Self::Root => "root",
        }
    }
}

/// Parse a single line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Command>> {
    let content = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };
    let mut words = content.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let err = |message: String| CliError::Parse {
        line: line_no,
        message,
    };
    let exact = |n: usize| -> Result<()> {
        if args.len() == n {
            Ok(())
        } else {
            Err(err(format!(
                "`{keyword}` takes {n} argument(s), got {}",
                args.len()
            )))
        }
    };

    let command = match keyword {
        "create" => {
            if args.len() < 2 {
                return Err(err("`create` needs an id and at least one parent".to_string()));
            }
            Command::Create {
                id: args[0].into(),
                parents: args[1..].iter().map(|&p| PaperId::from(p)).collect(),
            }
        }
        "cite" => {
            exact(2)?;
            Command::Cite {
                child: args[0].into(),
                parent: args[1].into(),
            }
        }
        "remove" => {
            exact(1)?;
            Command::Remove { id: args[0].into() }
        }
        "children" => {
            exact(1)?;
            Command::Children { id: args[0].into() }
        }
        "parents" => {
            exact(1)?;
            Command::Parents { id: args[0].into() }
        }
        "exists" => {
            exact(1)?;
            Command::Exists { id: args[0].into() }
        }
        "get" => {
            exact(1)?;
            Command::Get { id: args[0].into() }
        }
        "title" => {
            if args.len() < 2 {
                return Err(err("`title` needs an id and some text".to_string()));
            }
            Command::Title {
                id: args[0].into(),
                title: args[1..].join(" "),
            }
        }
        "root" => {
            exact(0)?;
            Command::Root
        }
        other => return Err(err(format!("unknown command `{other}`"))),
    };
    Ok(Some(command))
}

/// Parse a whole script, pairing each command with its 1-based line number.
/// Stops at the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<(usize, Command)>> {
    let mut commands = Vec::new();
    for (i, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(line, i + 1)? {
            commands.push((i + 1, command));
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        parse_line(line, 1).unwrap().unwrap()
    }

    #[test]
    fn test_parse_create_multi_parent() {
        assert_eq!(
            parse("create C A B"),
            Command::Create {
                id: "C".into(),
                parents: vec!["A".into(), "B".into()],
            }
        );
    }

    #[test]
    fn test_parse_title_joins_words() {
        assert_eq!(
            parse("title p1   A  Relational Model"),
            Command::Title {
                id: "p1".into(),
                title: "A Relational Model".to_string(),
            }
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("", 1).unwrap(), None);
        assert_eq!(parse_line("   ", 1).unwrap(), None);
        assert_eq!(parse_line("# just a note", 1).unwrap(), None);
        assert_eq!(parse("exists x # trailing"), Command::Exists { id: "x".into() });
    }

    #[test]
    fn test_create_without_parent_is_rejected() {
        let err = parse_line("create lonely", 4).unwrap_err();
        assert!(matches!(err, CliError::Parse { line: 4, .. }));
    }

    #[test]
    fn test_wrong_arity() {
        assert!(parse_line("remove", 1).is_err());
        assert!(parse_line("cite a", 1).is_err());
        assert!(parse_line("root now", 1).is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("delete x", 9).unwrap_err();
        assert_eq!(err.to_string(), "Parse error on line 9: unknown command `delete`");
    }

    #[test]
    fn test_parse_script_line_numbers() {
        let script = "# header\ncreate a R\n\ncite a R\nroot\n";
        let commands = parse_script(script).unwrap();
        let lines: Vec<usize> = commands.iter().map(|(l, _)| *l).collect();
        assert_eq!(lines, vec![2, 4, 5]);
        assert_eq!(commands[2].1.name(), "root");
    }
}

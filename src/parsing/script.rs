use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: {message}")]
    InvalidCommand { line: usize, message: String },
}

/// One scoreboard operation from a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        home: String,
        away: String,
    },
    Update {
        home: String,
        away: String,
        home_score: i64,
        away_score: i64,
    },
    Finish {
        home: String,
        away: String,
    },
    Summary,
}

/// A parsed command and the 1-based line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Parse a script file.
///
/// # Errors
///
/// Returns `ScriptError::Io` if the file cannot be read, or
/// `ScriptError::InvalidCommand` for the first malformed line.
pub fn parse_script_file(path: &Path) -> Result<Vec<ScriptLine>, ScriptError> {
    let content = std::fs::read_to_string(path)?;
    parse_script_text(&content)
}

/// Parse script text, one command per line.
///
/// Blank lines and lines starting with `#` are skipped. Team names keep
/// their raw spelling; normalization is the scoreboard's job.
///
/// ```text
/// # opening fixtures
/// start Uruguay, Panama
/// update Uruguay, Panama, 2, 0
/// finish Uruguay, Panama
/// summary
/// ```
///
/// # Errors
///
/// Returns `ScriptError::InvalidCommand` for the first malformed line.
pub fn parse_script_text(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let command = parse_command(line).map_err(|message| ScriptError::InvalidCommand {
            line: line_num,
            message,
        })?;

        commands.push(ScriptLine {
            line: line_num,
            command,
        });
    }

    Ok(commands)
}

/// Parse a single non-empty command line
pub fn parse_command(line: &str) -> Result<Command, String> {
    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));
    let fields: Vec<&str> = if rest.trim().is_empty() {
        Vec::new()
    } else {
        rest.split(',').map(str::trim).collect()
    };

    match keyword.to_lowercase().as_str() {
        "start" => {
            let [home, away] = expect_fields::<2>("start", &fields)?;
            Ok(Command::Start {
                home: home.to_string(),
                away: away.to_string(),
            })
        }
        "update" => {
            let [home, away, home_score, away_score] = expect_fields::<4>("update", &fields)?;
            Ok(Command::Update {
                home: home.to_string(),
                away: away.to_string(),
                home_score: parse_score(home_score)?,
                away_score: parse_score(away_score)?,
            })
        }
        "finish" => {
            let [home, away] = expect_fields::<2>("finish", &fields)?;
            Ok(Command::Finish {
                home: home.to_string(),
                away: away.to_string(),
            })
        }
        "summary" => {
            expect_fields::<0>("summary", &fields)?;
            Ok(Command::Summary)
        }
        other => Err(format!("Unknown command '{other}'")),
    }
}

fn expect_fields<'a, const N: usize>(
    keyword: &str,
    fields: &[&'a str],
) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(fields).map_err(|_| {
        format!(
            "'{keyword}' expects {N} comma-separated field(s), found {}",
            fields.len()
        )
    })
}

fn parse_score(field: &str) -> Result<i64, String> {
    field
        .parse()
        .map_err(|_| format!("Invalid score '{field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_text() {
        let script = r"# World Cup, day one
start Uruguay, Panama

update  uruguay , panama , 2 , 0
FINISH Uruguay, Panama
summary
";

        let commands = parse_script_text(script).unwrap();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0].line, 2);
        assert_eq!(
            commands[0].command,
            Command::Start {
                home: "Uruguay".to_string(),
                away: "Panama".to_string(),
            }
        );
        assert_eq!(
            commands[1].command,
            Command::Update {
                home: "uruguay".to_string(),
                away: "panama".to_string(),
                home_score: 2,
                away_score: 0,
            }
        );
        assert_eq!(commands[1].line, 4);
        assert!(matches!(commands[2].command, Command::Finish { .. }));
        assert_eq!(commands[3].command, Command::Summary);
    }

    #[test]
    fn test_negative_score_is_left_to_the_scoreboard() {
        let command = parse_command("update Uruguay, Panama, -1, 0").unwrap();
        assert!(matches!(command, Command::Update { home_score: -1, .. }));
    }

    #[test]
    fn test_team_names_with_spaces_and_hyphens() {
        let command = parse_command("start United-States of America, Costa Rica").unwrap();
        assert_eq!(
            command,
            Command::Start {
                home: "United-States of America".to_string(),
                away: "Costa Rica".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_command("start Uruguay").unwrap_err();
        assert!(err.contains("expects 2"));

        let err = parse_command("update Uruguay, Panama, 1").unwrap_err();
        assert!(err.contains("expects 4"));

        let err = parse_command("summary now").unwrap_err();
        assert!(err.contains("expects 0"));
    }

    #[test]
    fn test_invalid_score() {
        let err = parse_command("update Uruguay, Panama, two, 0").unwrap_err();
        assert!(err.contains("Invalid score 'two'"));
    }

    #[test]
    fn test_error_reports_line_number() {
        let script = "start Uruguay, Panama\n\nkickoff Brazil, Germany\n";
        match parse_script_text(script) {
            Err(ScriptError::InvalidCommand { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("kickoff"));
            }
            other => panic!("Expected InvalidCommand, got {other:?}"),
        }
    }
}

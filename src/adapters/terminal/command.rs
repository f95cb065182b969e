//! Line commands understood by the terminal wizard.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::foundation::BirthDate;
use crate::domain::reference::Dimension;
use crate::ports::ExportFormat;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardCommand {
    Birth(BirthDate),
    Tab(Dimension),
    /// `None` clears the selection.
    Range(Option<String>),
    Status(String),
    Commit,
    /// 1-based position in the active track.
    Remove(usize),
    List,
    Options,
    Show,
    Report,
    /// 1-based position among the report's comparisons.
    Chart(usize),
    Back,
    Export(Option<ExportFormat>),
    Help,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("未知命令: {0}（输入 help 查看帮助）")]
    Unknown(String),

    #[error("{command} 需要参数: {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("{0}")]
    InvalidArgument(String),
}

impl FromStr for WizardCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(WizardCommand::Show);
        };
        let arg = parts.next();

        let command = match verb.to_lowercase().as_str() {
            "birth" => {
                let raw = require(arg, "birth", "YYYY-MM-DD")?;
                let date = raw
                    .parse::<BirthDate>()
                    .map_err(|e| CommandError::InvalidArgument(e.to_string()))?;
                WizardCommand::Birth(date)
            }
            "tab" => {
                let raw = require(arg, "tab", "emotion|career")?;
                let dimension = raw
                    .parse::<Dimension>()
                    .map_err(|e| CommandError::InvalidArgument(e.to_string()))?;
                WizardCommand::Tab(dimension)
            }
            "range" => WizardCommand::Range(arg.map(str::to_string)),
            "status" => WizardCommand::Status(require(arg, "status", "code")?.to_string()),
            "commit" | "+" => WizardCommand::Commit,
            "remove" | "rm" => WizardCommand::Remove(position(require(arg, "remove", "n")?)?),
            "list" | "ls" => WizardCommand::List,
            "options" => WizardCommand::Options,
            "show" => WizardCommand::Show,
            "report" => WizardCommand::Report,
            "chart" => WizardCommand::Chart(position(require(arg, "chart", "n")?)?),
            "back" => WizardCommand::Back,
            "export" | "save" => {
                let format = arg
                    .map(|raw| {
                        raw.parse::<ExportFormat>()
                            .map_err(|e| CommandError::InvalidArgument(e.to_string()))
                    })
                    .transpose()?;
                WizardCommand::Export(format)
            }
            "help" | "?" => WizardCommand::Help,
            "quit" | "exit" | "q" => WizardCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn require<'a>(
    arg: Option<&'a str>,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument { command, expected })
}

fn position(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CommandError::InvalidArgument(format!(
            "序号应为正整数: {}",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<WizardCommand, CommandError> {
        line.parse()
    }

    #[test]
    fn parses_editing_commands() {
        assert_eq!(
            parse("birth 1990-01-31").unwrap(),
            WizardCommand::Birth("1990-01-31".parse().unwrap())
        );
        assert_eq!(parse("tab career").unwrap(), WizardCommand::Tab(Dimension::Career));
        assert_eq!(
            parse("range 21-25").unwrap(),
            WizardCommand::Range(Some("21-25".into()))
        );
        assert_eq!(parse("range").unwrap(), WizardCommand::Range(None));
        assert_eq!(parse("  commit ").unwrap(), WizardCommand::Commit);
        assert_eq!(parse("remove 2").unwrap(), WizardCommand::Remove(2));
    }

    #[test]
    fn blank_line_redraws() {
        assert_eq!(parse("").unwrap(), WizardCommand::Show);
    }

    #[test]
    fn export_format_is_optional() {
        assert_eq!(parse("export").unwrap(), WizardCommand::Export(None));
        assert_eq!(
            parse("export json").unwrap(),
            WizardCommand::Export(Some(ExportFormat::Json))
        );
        assert!(matches!(
            parse("export png"),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse("dance"),
            Err(CommandError::Unknown("dance".into()))
        );
        assert!(matches!(
            parse("status"),
            Err(CommandError::MissingArgument { command: "status", .. })
        ));
        assert!(matches!(parse("remove 0"), Err(CommandError::InvalidArgument(_))));
        assert!(matches!(
            parse("birth 1990-02-30"),
            Err(CommandError::InvalidArgument(_))
        ));
    }
}

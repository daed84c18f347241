use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Parser, Subcommand};
use tasktrack_core::{StatusFilter, TaskId};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tasktrack",
    version,
    about = "Daily task tracker shell: add, toggle, delete and filter tasks kept in memory",
    disable_help_subcommand = true
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Config file to load instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Filter to start on, overriding the config file
    #[arg(
        long = "filter",
        value_name = "FILTER",
        value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<StatusFilter>())
    )]
    pub filter: Option<StatusFilter>,

    /// Prompt shown before each line, overriding the config file
    #[arg(long = "prompt", value_name = "TEXT")]
    pub prompt: Option<String>,
}

/// Level used when `RUST_LOG` is not set. Quiet flags win over verbose ones.
pub fn log_level(verbose: u8, quiet: u8) -> LevelFilter {
    match (quiet, verbose) {
        (2.., _) => LevelFilter::ERROR,
        (1, _) | (0, 0) => LevelFilter::WARN,
        (0, 1) => LevelFilter::INFO,
        (0, 2) => LevelFilter::DEBUG,
        (0, _) => LevelFilter::TRACE,
    }
}

pub fn init_tracing(verbose: u8, quiet: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level(verbose, quiet).into())
        .from_env_lossy();

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
}

/// One command typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    Draft(String),
    Submit,
    Toggle(TaskId),
    Delete(TaskId),
    Filter(StatusFilter),
    List,
    Help,
    Quit,
}

/// Commands with a fixed number of arguments, parsed by clap from the
/// whitespace-split line.
#[derive(Parser, Debug)]
#[command(
    name = "tasktrack",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct FixedLine {
    #[command(subcommand)]
    command: FixedCommand,
}

#[derive(Subcommand, Debug)]
enum FixedCommand {
    /// Add the current draft
    Submit,
    /// Flip a task between pending and completed
    #[command(alias = "done")]
    Toggle {
        #[arg(value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<TaskId>()))]
        id: TaskId,
    },
    /// Remove a task
    #[command(alias = "rm")]
    Delete {
        #[arg(value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<TaskId>()))]
        id: TaskId,
    },
    /// Show all, pending or completed tasks
    Filter {
        #[arg(value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<StatusFilter>()))]
        filter: StatusFilter,
    },
    /// Print the list again
    List,
    /// Show commands
    Help,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

impl From<FixedCommand> for ShellCommand {
    fn from(command: FixedCommand) -> Self {
        match command {
            FixedCommand::Submit => ShellCommand::Submit,
            FixedCommand::Toggle { id } => ShellCommand::Toggle(id),
            FixedCommand::Delete { id } => ShellCommand::Delete(id),
            FixedCommand::Filter { filter } => ShellCommand::Filter(filter),
            FixedCommand::List => ShellCommand::List,
            FixedCommand::Help => ShellCommand::Help,
            FixedCommand::Quit => ShellCommand::Quit,
        }
    }
}

impl ShellCommand {
    /// Parses one shell line. Text after `add` and `draft` is kept as typed,
    /// minus the whitespace separating it from the command word. The error
    /// is a single line fit for printing back to the user.
    pub fn parse_line(line: &str) -> anyhow::Result<Self> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match word {
            "add" => return Ok(ShellCommand::Add(rest.trim_start().to_string())),
            "draft" => return Ok(ShellCommand::Draft(rest.trim_start().to_string())),
            _ => {}
        }

        FixedLine::try_parse_from(line.split_whitespace())
            .map(|parsed| parsed.command.into())
            .map_err(|err| {
                let rendered = err.to_string();
                let mut lines = rendered.lines().map(str::trim).filter(|l| !l.is_empty());
                let mut message = lines
                    .next()
                    .unwrap_or("invalid command")
                    .trim_start_matches("error: ")
                    .to_string();
                if message.ends_with(':')
                    && let Some(detail) = lines.next()
                {
                    message.push(' ');
                    message.push_str(detail);
                }
                anyhow!(message)
            })
    }
}

pub const SHELL_HELP: &str = "\
commands:
  add <text...>                      add a task
  draft <text...>                    set the draft without adding it
  submit                             add the current draft
  toggle <id>      (done)            flip pending/completed
  delete <id>      (rm)              remove a task
  filter <all|pending|completed>     choose which tasks are listed
  list                               print the list again
  help                               show this help
  quit             (exit)            leave";

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tasktrack_core::{StatusFilter, TaskId};
    use tracing_subscriber::filter::LevelFilter;

    use super::{GlobalCli, ShellCommand, log_level};

    fn parse(line: &str) -> ShellCommand {
        ShellCommand::parse_line(line).expect("parse")
    }

    #[test]
    fn add_keeps_text_as_typed() {
        assert_eq!(parse("add a  b"), ShellCommand::Add("a  b".to_string()));
        assert_eq!(parse("add -- x"), ShellCommand::Add("-- x".to_string()));
        assert_eq!(parse("add call --mom"), ShellCommand::Add("call --mom".to_string()));
        assert_eq!(parse("  add\tbuy milk "), ShellCommand::Add("buy milk ".to_string()));
        assert_eq!(parse("add"), ShellCommand::Add(String::new()));
    }

    #[test]
    fn draft_keeps_inner_spacing() {
        assert_eq!(
            parse("draft  keep   spaces"),
            ShellCommand::Draft("keep   spaces".to_string())
        );
        assert_eq!(parse("draft --help"), ShellCommand::Draft("--help".to_string()));
    }

    #[test]
    fn text_commands_need_an_exact_word() {
        assert!(ShellCommand::parse_line("added milk").is_err());
        assert!(ShellCommand::parse_line("drafts x").is_err());
    }

    #[test]
    fn aliases_and_typed_args() {
        assert_eq!(parse("done 3"), ShellCommand::Toggle(TaskId::new(3)));
        assert_eq!(parse("rm  4 "), ShellCommand::Delete(TaskId::new(4)));
        assert_eq!(parse("filter Completed"), ShellCommand::Filter(StatusFilter::Completed));
        assert_eq!(parse("exit"), ShellCommand::Quit);
        assert_eq!(parse("submit"), ShellCommand::Submit);
    }

    #[test]
    fn bad_lines_give_one_line_errors() {
        for line in ["frobnicate", "toggle abc", "filter done", "delete", "submit now"] {
            let err = ShellCommand::parse_line(line).expect_err(line).to_string();
            assert!(!err.contains('\n'), "{line}: {err}");
            assert!(!err.is_empty());
        }
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(log_level(0, 0), LevelFilter::WARN);
        assert_eq!(log_level(1, 0), LevelFilter::INFO);
        assert_eq!(log_level(2, 0), LevelFilter::DEBUG);
        assert_eq!(log_level(5, 0), LevelFilter::TRACE);
        assert_eq!(log_level(3, 1), LevelFilter::WARN);
        assert_eq!(log_level(0, 2), LevelFilter::ERROR);
    }

    #[test]
    fn startup_flags_are_typed() {
        let cli = GlobalCli::try_parse_from([
            "tasktrack",
            "-vv",
            "--config",
            "tracker.toml",
            "--filter",
            "pending",
            "--prompt",
            "> ",
        ])
        .expect("flags");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("tracker.toml")));
        assert_eq!(cli.filter, Some(StatusFilter::Pending));
        assert_eq!(cli.prompt.as_deref(), Some("> "));

        assert!(GlobalCli::try_parse_from(["tasktrack", "--filter", "done"]).is_err());
    }
}

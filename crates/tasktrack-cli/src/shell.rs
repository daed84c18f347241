use std::io::{BufRead, Write};

use anyhow::Context;
use tasktrack_core::{Action, ListView, TaskListController};
use tracing::{debug, info, warn};

use crate::cli::{SHELL_HELP, ShellCommand};
use crate::render::Renderer;

/// Line-oriented host for one controller. Every line is applied in full
/// before the next one is read.
pub struct Shell<R, W> {
    controller: TaskListController,
    renderer: Renderer,
    prompt: Option<String>,
    input: R,
    out: W,
}

enum Step {
    Continue,
    Quit,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(controller: TaskListController, renderer: Renderer, input: R, out: W) -> Self {
        Self {
            controller,
            renderer,
            prompt: None,
            input,
            out,
        }
    }

    /// Prompt printed before each line; left unset for piped input.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn controller(&self) -> &TaskListController {
        &self.controller
    }

    pub fn into_parts(self) -> (TaskListController, W) {
        (self.controller, self.out)
    }

    /// Runs until `quit` or end of input.
    #[tracing::instrument(skip_all)]
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.render()?;

        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{prompt}")?;
                self.out.flush().context("failed to flush prompt")?;
            }

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read command line")?;
            if read == 0 {
                info!("end of input");
                break;
            }

            if let Step::Quit = self.handle_line(&line)? {
                info!("quit requested");
                break;
            }
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> anyhow::Result<Step> {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            return Ok(Step::Continue);
        }

        let command = match ShellCommand::parse_line(line) {
            Ok(command) => command,
            Err(err) => {
                warn!(line = %line, error = %err, "rejected command line");
                writeln!(self.out, "error: {err}")?;
                return Ok(Step::Continue);
            }
        };

        let action = match command {
            ShellCommand::Add(text) => Action::Add(text),
            ShellCommand::Draft(text) => Action::SetDraft(text),
            ShellCommand::Submit => Action::Submit,
            ShellCommand::Toggle(id) => Action::Toggle(id),
            ShellCommand::Delete(id) => Action::Delete(id),
            ShellCommand::Filter(filter) => Action::SetFilter(filter),
            ShellCommand::List => {
                self.render()?;
                return Ok(Step::Continue);
            }
            ShellCommand::Help => {
                writeln!(self.out, "{SHELL_HELP}")?;
                return Ok(Step::Continue);
            }
            ShellCommand::Quit => return Ok(Step::Quit),
        };

        let changed = self.controller.apply(action);
        debug!(changed, "applied shell command");
        self.render()?;
        Ok(Step::Continue)
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let view = ListView::of(&self.controller);
        self.renderer
            .print_view(&mut self.out, &view)
            .context("failed to render task list")
    }
}

use crate::core::controller::MenuController;
use crate::core::{Course, CourseField, MenuItem};
use crate::report;
use crate::utils::error::{MenuError, Result};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  add <name>|<description>|<price>|<course>   add a dish (course: Starters, Main, Dessert or 1-3)
  remove <n>                                  remove dish number n as shown by list
  list                                        show the menu
  averages                                    show average price per course
  filter <course>                             show one course
  help                                        show this text
  quit                                        leave
";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Add(MenuItem),
    /// 1-based position as shown by `list`.
    Remove(usize),
    List,
    Averages,
    Filter(Course),
    Help,
    Quit,
}

fn command_error(input: &str, reason: impl Into<String>) -> MenuError {
    MenuError::CommandError {
        input: input.to_string(),
        reason: reason.into(),
    }
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword {
            "add" => {
                let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
                if fields.len() != 4 {
                    return Err(command_error(
                        line,
                        "add expects name|description|price|course",
                    ));
                }
                Ok(SessionCommand::Add(MenuItem {
                    name: fields[0].to_string(),
                    description: fields[1].to_string(),
                    price: fields[2].to_string(),
                    course: CourseField::parse(fields[3]),
                }))
            }
            "remove" => match rest.parse::<usize>() {
                Ok(position) if position >= 1 => Ok(SessionCommand::Remove(position)),
                _ => Err(command_error(line, "remove expects a dish number from 1")),
            },
            "filter" => rest
                .parse::<Course>()
                .map(SessionCommand::Filter)
                .map_err(|reason| command_error(line, reason)),
            "list" => Ok(SessionCommand::List),
            "averages" => Ok(SessionCommand::Averages),
            "help" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            "" => Err(command_error(line, "empty command")),
            other => Err(command_error(line, format!("unknown command '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Continue(String),
    Quit,
}

/// Line-oriented stand-in for the home, add and filter screens.
pub struct Session {
    controller: MenuController,
    currency_prefix: String,
}

impl Session {
    pub fn new(controller: MenuController, currency_prefix: impl Into<String>) -> Self {
        Self {
            controller,
            currency_prefix: currency_prefix.into(),
        }
    }

    pub fn controller(&self) -> &MenuController {
        &self.controller
    }

    pub fn execute(&mut self, command: SessionCommand) -> SessionOutcome {
        let prefix = self.currency_prefix.as_str();
        let text = match command {
            SessionCommand::Add(item) => {
                let name = item.name.clone();
                let count = self.controller.append(item);
                format!(
                    "Added {} ({} items)\n{}",
                    name,
                    count,
                    report::render_averages(prefix, &self.controller.averages())
                )
            }
            SessionCommand::Remove(position) => match self.controller.remove_at(position - 1) {
                Some(item) => format!(
                    "Removed {}\n{}",
                    item.name,
                    report::render_averages(prefix, &self.controller.averages())
                ),
                None => format!("No dish number {}\n", position),
            },
            SessionCommand::List => {
                report::render_numbered_items(prefix, self.controller.snapshot())
            }
            SessionCommand::Averages => {
                report::render_averages(prefix, &self.controller.averages())
            }
            SessionCommand::Filter(course) => {
                report::render_filtered(prefix, &self.controller.filter(course))
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return SessionOutcome::Quit,
        };
        SessionOutcome::Continue(text)
    }

    /// Runs until `quit` or end of input. Bad commands are reported and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match SessionCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    tracing::debug!("Rejected command: {}", e);
                    writeln!(output, "{} ({})", e.user_friendly_message(), e.recovery_suggestion())?;
                    continue;
                }
            };

            match self.execute(command) {
                SessionOutcome::Continue(text) => {
                    write!(output, "{}", text)?;
                    output.flush()?;
                }
                SessionOutcome::Quit => break,
            }
        }
        Ok(())
    }

    pub fn into_controller(self) -> MenuController {
        self.controller
    }
}

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::debug;

use crate::commands::{self, Command, Outcome};
use crate::error::{CommandError, TodoTableError};
use crate::record::TodoRecord;

pub const GREETING: &str = "Please, write your command!";

/// The interactive session. Owns the scanned records for its whole lifetime;
/// commands run strictly one after another against them.
#[derive(Debug, Default)]
pub struct Session {
    records: Vec<TodoRecord>,
}

impl Session {
    pub fn new(records: Vec<TodoRecord>) -> Self {
        Session { records }
    }

    /// The records in their current order.
    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    /// Parse and run one input line. A rejected line leaves the records as
    /// they were.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let command = Command::parse(line)?;
        debug!(?command, "executing command");
        Ok(commands::execute(&mut self.records, command))
    }

    /// Read commands line by line until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), TodoTableError> {
        writeln!(output, "{GREETING}")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(Outcome::Exit) => break,
                Ok(Outcome::Table(table)) => writeln!(output, "{table}")?,
                Err(err) => {
                    debug!(input = %line, %err, "rejected command");
                    writeln!(output, "{}", err.to_string().red())?;
                }
            }
            output.flush()?;
        }

        Ok(())
    }
}

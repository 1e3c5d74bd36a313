//! Line-oriented terminal I/O.
//!
//! Reads one directive per line and prints reports and errors, coloured with
//! crossterm when writing to a terminal.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::report::Report;

const GREETING: &str = "oH, It'S YoU AgAiN. wHaT Do yOu wAnT? (type \"help\" if you're lost)";
const PROMPT: &str = "> ";
const DIVIDER: &str = "____________________________________________________________";

/// Terminal front end over any reader/writer pair.
pub struct Ui<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Ui<io::StdinLock<'static>, io::Stdout> {
    /// Ui bound to the process's stdin/stdout.
    pub fn stdio(color: bool) -> Self {
        Ui::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> Ui<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Ui { input, output, color }
    }

    pub fn show_greeting(&mut self) -> io::Result<()> {
        self.framed(GREETING, false)
    }

    pub fn show_report(&mut self, report: &Report) -> io::Result<()> {
        self.framed(report.message(), false)
    }

    pub fn show_error(&mut self, error: &dyn Display) -> io::Result<()> {
        self.framed(&error.to_string(), true)
    }

    /// Prompt and read the next line. `None` at end of input.
    pub fn read_line(&mut self, prompt: bool) -> io::Result<Option<String>> {
        if prompt {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn framed(&mut self, message: &str, is_error: bool) -> io::Result<()> {
        let divider = if self.color { DIVIDER.dark_grey().to_string() } else { DIVIDER.to_string() };
        writeln!(self.output, "{divider}")?;
        for line in message.lines() {
            if self.color && is_error {
                writeln!(self.output, "{}", line.red())?;
            } else {
                writeln!(self.output, "{line}")?;
            }
        }
        writeln!(self.output, "{divider}")?;
        self.output.flush()
    }

    /// Consume the ui and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

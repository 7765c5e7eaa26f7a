//! Line-oriented text boundary between the game and its operator.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Shows `prompt` and blocks for one line of input.
    ///
    /// The trailing line terminator is stripped. Returns `Ok(None)` once the
    /// input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}

fn strip_terminator(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

/// Console bound to the process' stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        StdConsole
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(strip_terminator(buf))),
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }
}

/// Console fed from a fixed script of input lines that records everything
/// the game shows.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            input: input.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// Number of output lines equal to `line`.
    pub fn count_output(&self, line: &str) -> usize {
        self.output.iter().filter(|l| *l == line).count()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_owned());
        Ok(self.input.pop_front().map(strip_terminator))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_owned());
        Ok(())
    }
}

use crate::domain::employee::Performance;
use crate::error::{RecordError, Result};
use dialoguer::Input;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const BLANK_INPUT: &str = "You must not leave blank this information ... Please enter again ...";
pub const NOT_WHOLE_NUMBER: &str = "Please enter a whole number (0 or more) !!!";
pub const NOT_POSITIVE: &str = "You must enter a number that more than 0 !!!";
pub const NOT_SINGLE_CHARACTER: &str = "Please enter only a single character.";

/// A non-empty line of text, trimmed.
pub fn parse_text(raw: &str) -> std::result::Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        Err(BLANK_INPUT)
    } else {
        Ok(value.to_string())
    }
}

/// A whole number made of decimal digits only, no sign.
pub fn parse_whole_number<T: FromStr>(raw: &str) -> std::result::Result<T, &'static str> {
    let value = parse_text(raw)?;
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NOT_WHOLE_NUMBER);
    }
    value.parse().map_err(|_| NOT_WHOLE_NUMBER)
}

pub fn parse_performance(raw: &str) -> std::result::Result<Performance, &'static str> {
    parse_text(raw)?.parse().map_err(|_| NOT_POSITIVE)
}

pub fn parse_choice(raw: &str) -> std::result::Result<char, &'static str> {
    let text = parse_text(raw)?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(choice), None) => Ok(choice),
        _ => Err(NOT_SINGLE_CHARACTER),
    }
}

/// Input collection.
///
/// Every reader method keeps asking until the operator enters an acceptable
/// value, so callers only ever see trimmed, validated values. On a terminal
/// the questions are asked with `dialoguer`; otherwise lines are read from
/// `input`, which keeps piped sessions scriptable. End of piped input is
/// reported as `RecordError::InputClosed`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    terminal: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            terminal: false,
        }
    }

    /// Asks questions through `dialoguer` when `terminal` is true.
    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RecordError::InputClosed);
        }
        Ok(line)
    }

    fn read<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> std::result::Result<T, &'static str>,
    ) -> Result<T> {
        if self.terminal {
            // dialoguer appends its own ": " to the prompt.
            let raw: String = Input::new()
                .with_prompt(label.trim_end().trim_end_matches(':'))
                .allow_empty(true)
                .validate_with(|raw: &String| parse(raw.as_str()).map(|_| ()))
                .interact_text()?;
            return parse(&raw).map_err(|e| RecordError::Validation(e.to_string()));
        }

        loop {
            let raw = self.ask(label)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "\n{message}\n")?,
            }
        }
    }

    pub fn text(&mut self, label: &str) -> Result<String> {
        self.read(label, parse_text)
    }

    pub fn whole_number<T: FromStr>(&mut self, label: &str) -> Result<T> {
        self.read(label, parse_whole_number)
    }

    /// A decimal working-performance multiplier greater than 0.
    pub fn performance(&mut self, label: &str) -> Result<Performance> {
        self.read(label, parse_performance)
    }

    /// A single-character menu selection. Blank lines are skipped silently.
    pub fn choice(&mut self, label: &str) -> Result<char> {
        if self.terminal {
            return self.read(label, parse_choice);
        }

        let mut raw = self.ask(label)?;
        loop {
            match parse_choice(&raw) {
                Ok(choice) => return Ok(choice),
                Err(BLANK_INPUT) => raw = self.ask("")?,
                Err(message) => raw = self.ask(&format!("\n{message} Try again: "))?,
            }
        }
    }

    /// Waits for the operator to press ENTER. End of input is not an error here.
    pub fn pause(&mut self) -> Result<()> {
        write!(
            self.output,
            "\n------------------------------\nPress ENTER to continue. . ."
        )?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}

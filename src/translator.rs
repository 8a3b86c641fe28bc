//! Translator that turns a dig plan into turtle drawing commands.
//!
//! The entry point is [`PlanTranslator`]. Configure it with a [`TranslatorConfig`], then
//! call [`PlanTranslator::translate_plan`] to collect commands or
//! [`PlanTranslator::write_plan`] to stream rendered lines to a sink.

use crate::error::{PlanError, Result};
use crate::plan::{DigRecord, token_count};
use crate::turtle::{DEFAULT_TURTLE, Heading, TurtleCommand};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info, warn};

/// What to do with a line that is not exactly three tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Stop with [`PlanError::MalformedLine`].
    #[default]
    Reject,
    /// Log a warning and produce no output for the line.
    Skip,
}

/// Configuration for plan translation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Receiver name used in emitted calls (`t` in `t.forward(10)`).
    pub turtle_name: String,
    /// Handling of malformed lines.
    pub malformed: MalformedPolicy,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            turtle_name: DEFAULT_TURTLE.to_string(),
            malformed: MalformedPolicy::Reject,
        }
    }
}

/// Translates dig plan lines into pairs of turtle commands.
///
/// Translation is a pure per-line mapping: each record yields a heading command (or the
/// invalid-heading marker) followed by a forward command, and nothing carries over from
/// one line to the next.
#[derive(Clone, Debug, Default)]
pub struct PlanTranslator {
    config: TranslatorConfig,
}

impl PlanTranslator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Returns the heading command and the forward command for one record.
    pub fn translate_record(&self, record: &DigRecord<'_>) -> [TurtleCommand; 2] {
        let heading = Heading::from_token(record.direction);
        if heading == Heading::Invalid {
            warn!(direction = record.direction, "unrecognized direction");
        }
        [
            heading.command(),
            TurtleCommand::Forward {
                distance: record.distance.to_string(),
            },
        ]
    }

    /// Translates a single line into its two rendered output lines.
    ///
    /// Returns `None` if the line is not exactly three tokens; the malformed-line policy
    /// only applies to whole plans.
    pub fn translate_line(&self, line: &str) -> Option<(String, String)> {
        let record = DigRecord::parse(line)?;
        let [heading, forward] = self.translate_record(&record);
        let turtle = self.config.turtle_name.as_str();
        Some((
            heading.render(turtle).to_string(),
            forward.render(turtle).to_string(),
        ))
    }

    /// Translates every line of `input`, in order.
    pub fn translate_plan(&self, input: &str) -> Result<Vec<TurtleCommand>> {
        let mut commands = Vec::new();
        for record in self.records(input) {
            commands.extend(self.translate_record(&record?));
        }
        info!(commands = commands.len(), "translated plan");
        Ok(commands)
    }

    /// Writes the rendered commands for `input` to `out`, one per line.
    ///
    /// Each input line's pair is written before the next line is read, so a rejected
    /// malformed line leaves the output for all preceding lines in place. Returns the
    /// number of lines written.
    pub fn write_plan<W: Write>(&self, input: &str, mut out: W) -> Result<usize> {
        let turtle = self.config.turtle_name.as_str();
        let mut written = 0;
        for record in self.records(input) {
            for command in self.translate_record(&record?) {
                writeln!(out, "{}", command.render(turtle))?;
                written += 1;
            }
        }
        out.flush()?;
        info!(lines = written, "wrote plan");
        Ok(written)
    }

    /// Writes the commands for `input` to `out` as a pretty-printed JSON array.
    ///
    /// Returns the number of commands written.
    pub fn write_json<W: Write>(&self, input: &str, mut out: W) -> Result<usize> {
        let commands = self.translate_plan(input)?;
        serde_json::to_writer_pretty(&mut out, &commands)?;
        writeln!(out)?;
        out.flush()?;
        Ok(commands.len())
    }

    /// Parsed records of `input`, with the malformed-line policy applied.
    fn records<'a>(
        &'a self,
        input: &'a str,
    ) -> impl Iterator<Item = Result<DigRecord<'a>>> + 'a {
        input.lines().enumerate().filter_map(move |(idx, line)| {
            let line_no = idx + 1;
            match DigRecord::parse(line) {
                Some(record) => {
                    debug!(
                        line = line_no,
                        direction = record.direction,
                        distance = record.distance,
                        "record"
                    );
                    Some(Ok(record))
                }
                None => {
                    let tokens = token_count(line);
                    match self.config.malformed {
                        MalformedPolicy::Reject => Some(Err(PlanError::MalformedLine {
                            line: line_no,
                            tokens,
                        })),
                        MalformedPolicy::Skip => {
                            warn!(line = line_no, tokens, "skipping malformed line");
                            None
                        }
                    }
                }
            }
        })
    }
}

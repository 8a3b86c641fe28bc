//! Turtle headings and the drawing commands emitted for a renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Receiver name used in emitted calls when none is configured.
pub const DEFAULT_TURTLE: &str = "t";

/// Literal line emitted in place of a heading for an unknown direction.
pub const INVALID_HEADING_MARKER: &str = "### invalid heading ###";

/// Absolute heading of the turtle.
///
/// Angles follow the usual turtle convention: 0° faces east and angles grow
/// counter-clockwise, so north is 90°.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// `U`, 90°.
    Up,
    /// `L`, 180°.
    Left,
    /// `D`, 270°.
    Down,
    /// `R`, 0°.
    Right,
    /// Any other direction token. Has no angle.
    Invalid,
}

impl Heading {
    /// Direction tokens and the heading each one selects.
    pub const TABLE: [(&'static str, Heading); 4] = [
        ("U", Heading::Up),
        ("L", Heading::Left),
        ("D", Heading::Down),
        ("R", Heading::Right),
    ];

    /// Maps a direction token to its heading. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Self {
        Self::TABLE
            .iter()
            .find(|(t, _)| *t == token)
            .map(|&(_, h)| h)
            .unwrap_or(Heading::Invalid)
    }

    /// The heading in degrees, or `None` for [`Heading::Invalid`].
    pub fn degrees(self) -> Option<u16> {
        match self {
            Heading::Right => Some(0),
            Heading::Up => Some(90),
            Heading::Left => Some(180),
            Heading::Down => Some(270),
            Heading::Invalid => None,
        }
    }

    /// The command that points the turtle along this heading.
    pub fn command(self) -> TurtleCommand {
        match self.degrees() {
            Some(degrees) => TurtleCommand::SetHeading { degrees },
            None => TurtleCommand::InvalidHeading,
        }
    }
}

/// A single drawing instruction.
///
/// Serializes to JSON tagged by `command`, e.g. `{"command":"forward","distance":"10"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum TurtleCommand {
    /// `t.setheading(<degrees>)`
    SetHeading { degrees: u16 },
    /// Stands in for a heading when the direction was not recognized.
    InvalidHeading,
    /// `t.forward(<distance>)`, distance copied verbatim from the plan.
    Forward { distance: String },
}

impl TurtleCommand {
    /// Renders the command as a call on the turtle named `turtle`.
    pub fn render<'a>(&'a self, turtle: &'a str) -> Rendered<'a> {
        Rendered {
            command: self,
            turtle,
        }
    }
}

impl fmt::Display for TurtleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(DEFAULT_TURTLE).fmt(f)
    }
}

/// A [`TurtleCommand`] bound to a receiver name, ready to be written as one line.
#[derive(Clone, Copy, Debug)]
pub struct Rendered<'a> {
    command: &'a TurtleCommand,
    turtle: &'a str,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.command {
            TurtleCommand::SetHeading { degrees } => {
                write!(f, "{}.setheading({})", self.turtle, degrees)
            }
            TurtleCommand::InvalidHeading => f.write_str(INVALID_HEADING_MARKER),
            TurtleCommand::Forward { distance } => {
                write!(f, "{}.forward({})", self.turtle, distance)
            }
        }
    }
}

//! Dig plan records as they appear in the input text.
//!
//! A plan is a sequence of lines of the form `<direction> <distance> <extra>`, e.g.
//! `R 6 (#70c710)`. Only the first two tokens are ever translated; the third is kept so
//! a [`DigRecord`] mirrors its source line faithfully.

/// A single line of a dig plan, split into its three tokens.
///
/// Tokens borrow from the source line. `distance` is deliberately left as text: it is
/// echoed into the output exactly as written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigRecord<'a> {
    /// Direction letter (`U`, `L`, `D`, `R`, or anything else).
    pub direction: &'a str,

    /// Distance to travel, verbatim.
    pub distance: &'a str,

    /// Trailing token, carried but never interpreted.
    pub extra: &'a str,
}

impl<'a> DigRecord<'a> {
    /// Splits `line` on whitespace into exactly three tokens.
    ///
    /// Returns `None` when the line has any other number of tokens, including blank lines.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let (direction, distance, extra) = (tokens.next()?, tokens.next()?, tokens.next()?);
        if tokens.next().is_some() {
            return None;
        }
        Some(Self {
            direction,
            distance,
            extra,
        })
    }
}

/// Number of whitespace-separated tokens on `line`, for diagnostics.
pub fn token_count(line: &str) -> usize {
    line.split_whitespace().count()
}

//! # dig-turtle
//!
//! Translates dig plans (lines such as `R 6 (#70c710)`) into turtle-graphics drawing
//! commands.
//!
//! Each plan line becomes a heading command followed by a forward command:
//!
//! ```text
//! U 10 (comment)   ->   t.setheading(90)
//!                       t.forward(10)
//! ```
//!
//! Directions outside `U`/`L`/`D`/`R` produce the literal `### invalid heading ###` line
//! in place of the heading. Distances are copied verbatim and never parsed.

pub mod error;
pub mod plan;
pub mod translator;
pub mod turtle;

pub use error::*;
pub use plan::*;
pub use translator::*;
pub use turtle::*;

//! Command-line interface of the `geometry` binary.
//!
//! Without a subcommand the demo set of shapes is reported. Measurements are parsed as plain
//! numbers, negative ones included, and validated by the shape constructors.

use clap::{ArgAction, Parser, Subcommand};

use crate::{
    domain::{self, Shape, ShapeError},
    report,
};

#[derive(Debug, Parser)]
#[command(name = "geometry", version, about = "Compute the area of circles, triangles and squares")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Demo)
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Circle of radius 5, triangle 3/4/5 and square of side 4
    Demo,
    Circle {
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    Triangle {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    Square {
        #[arg(allow_negative_numbers = true)]
        side: f64,
    },
}

impl Command {
    pub fn shapes(self) -> Result<Vec<Shape>, ShapeError> {
        match self {
            Command::Demo => report::demo_shapes(),
            Command::Circle { radius } => Ok(vec![domain::Circle::new(radius)?.into()]),
            Command::Triangle { a, b, c } => Ok(vec![domain::Triangle::new(a, b, c)?.into()]),
            Command::Square { side } => Ok(vec![domain::Square::new(side)?.into()]),
        }
    }
}

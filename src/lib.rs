//! Monte Carlo simulation of weighted dice.
//!
//! A [`Die`] draws faces with weight-proportional probability, a [`Game`]
//! rolls a fixed set of dice sharing one face set for a number of rounds,
//! and an [`Analyzer`] derives statistics from the latest results.

mod analyzer;
pub mod defs;
mod die;
mod game;
pub mod prelude;
mod print;
mod simulation;
mod table;
mod value;

use std::sync::Arc;

pub use analyzer::{Analyzer, FaceCounts, Tally};
pub use die::{Die, DieLike, Snapshot};
pub use game::{Game, GameLike, ResultsFormat};
pub use print::PrintExt;
pub use simulation::Simulation;
pub use table::{NarrowRow, NarrowTable, ResultsTable, WideTable};
use thiserror::Error;
pub use value::{DefaultValue, Value};

pub type Weight = f64;
pub type Result<T> = ::core::result::Result<T, Error>;
type Ptr<T> = Arc<T>;

pub const DEFAULT_WEIGHT: Weight = 1.0;
pub const DEFAULT_ROLLS: usize = 1_000;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("inconsistent state: {0}")]
    InconsistentState(String),
}

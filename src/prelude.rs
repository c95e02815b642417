pub use crate::defs::*;
pub use crate::{
    Analyzer, Die, DieLike, Error, FaceCounts, Game, GameLike, PrintExt, ResultsFormat,
    ResultsTable, Simulation, Snapshot, Tally, WideTable,
};

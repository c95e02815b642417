use bon::Builder;
use log::debug;

use crate::die::DieLike;
use crate::{Analyzer, Game, Result, DEFAULT_ROLLS};

/// A bounded simulation run.
///
/// ```
/// use mcsim::{defs, Simulation};
///
/// let game = Simulation::builder()
///     .rolls(100)
///     .seed(7)
///     .build()
///     .run([defs::d6(), defs::d6()])
///     .unwrap();
/// assert_eq!(game.rolls(), 100);
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    #[builder(default = DEFAULT_ROLLS)]
    rolls: usize,
    seed: Option<u64>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Simulation {
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Builds a game from `dice` and plays it.
    pub fn run<D, I>(&self, dice: I) -> Result<Game<D>>
    where
        D: DieLike,
        I: IntoIterator<Item = D>,
    {
        let mut game = match self.seed {
            Some(seed) => Game::seeded(dice, seed)?,
            None => Game::new(dice)?,
        };
        debug!("simulation: {} rolls, seed {:?}", self.rolls, self.seed);
        game.play(self.rolls)?;
        Ok(game)
    }

    pub fn analyze<D, I>(&self, dice: I) -> Result<Analyzer<Game<D>>>
    where
        D: DieLike,
        I: IntoIterator<Item = D>,
    {
        self.run(dice).map(Analyzer::new)
    }
}

use std::fmt::Display;
use std::str::FromStr;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::die::{same_face_set, DieLike};
use crate::table::{NarrowTable, ResultsTable, WideTable};
use crate::{Error, Result};

/// Read access to a game's latest results, as needed by the
/// [`Analyzer`](crate::Analyzer).
pub trait GameLike {
    type Face: crate::Value;

    /// Face set shared by every die, in the first die's order.
    fn faces(&self) -> &[Self::Face];

    fn die_count(&self) -> usize;

    /// Latest results, empty before the first play.
    fn outcomes(&self) -> &WideTable<Self::Face>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResultsFormat {
    #[default]
    Wide,
    Narrow,
}

/// A fixed set of dice rolled together, round after round.
///
/// `D` is either an owned [`Die`](crate::Die) or a borrowed `&Die`; a
/// borrowed die cannot have its weights changed while the game lives.
#[derive(Debug)]
pub struct Game<D, G = StdRng>
where
    D: DieLike,
    G: RngCore,
{
    dice: Vec<D>,
    rng: G,
    results: WideTable<D::Face>,
}

impl<D> Game<D, StdRng>
where
    D: DieLike,
{
    pub fn new<I>(dice: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
    {
        Self::with_rng(dice, StdRng::from_entropy())
    }

    /// Reproducible game: the same seed and dice give the same results.
    pub fn seeded<I>(dice: I, seed: u64) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
    {
        Self::with_rng(dice, StdRng::seed_from_u64(seed))
    }
}

impl<D, G> Game<D, G>
where
    D: DieLike,
    G: RngCore,
{
    /// Every die must carry the same face set as the first one. Weights may
    /// differ.
    pub fn with_rng<I>(dice: I, rng: G) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
    {
        let dice: Vec<D> = dice.into_iter().collect();
        let Some(first) = dice.first() else {
            return Err(Error::InvalidArgument("game needs at least one die".into()));
        };
        for (i, die) in dice.iter().enumerate().skip(1) {
            if !same_face_set(first.faces(), die.faces()) {
                return Err(Error::InconsistentState(format!(
                    "die {} has faces {:?}, expected {:?}",
                    i + 1,
                    die.faces(),
                    first.faces()
                )));
            }
        }

        debug!(
            "new game: {} dice, {} faces each",
            dice.len(),
            first.faces().len()
        );
        let results = WideTable::empty(dice.len());
        Ok(Self { dice, rng, results })
    }

    #[must_use]
    pub fn dice(&self) -> &[D] {
        &self.dice
    }

    #[must_use]
    pub fn die_count(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn faces(&self) -> &[D::Face] {
        self.dice[0].faces()
    }

    /// Row count of the latest play, 0 before the first.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.results.rolls()
    }

    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Rolls every die once per round for `rolls` rounds, replacing the
    /// previous results. On error the previous results are kept.
    pub fn play(&mut self, rolls: usize) -> Result<()> {
        if rolls == 0 {
            return Err(Error::InvalidArgument("roll count must be at least 1".into()));
        }
        let cells = rolls
            .checked_mul(self.dice.len())
            .ok_or_else(|| Error::InvalidArgument(format!("{rolls} rolls overflow the table")))?;

        let mut values = Vec::new();
        values.try_reserve_exact(cells).map_err(|e| {
            let dice = self.dice.len();
            Error::InvalidArgument(format!("cannot hold {rolls} rolls of {dice} dice: {e}"))
        })?;
        for _ in 0..rolls {
            for die in &self.dice {
                values.push(die.sample_rng(&mut self.rng)?.clone());
            }
        }

        self.results = WideTable::from_values(self.dice.len(), values);
        debug!("played {rolls} rolls with {} dice", self.dice.len());
        Ok(())
    }

    /// Copy of the latest results in the requested layout. Empty, with a
    /// logged warning, before the first play.
    #[must_use]
    pub fn results(&self, format: ResultsFormat) -> ResultsTable<D::Face> {
        if self.results.is_empty() {
            warn!("results requested before the game was played");
        }
        match format {
            ResultsFormat::Wide => ResultsTable::Wide(self.results.clone()),
            ResultsFormat::Narrow => ResultsTable::Narrow(self.results.to_narrow()),
        }
    }

    #[must_use]
    pub fn wide(&self) -> WideTable<D::Face> {
        self.results.clone()
    }

    #[must_use]
    pub fn narrow(&self) -> NarrowTable<D::Face> {
        self.results.to_narrow()
    }
}

impl<D, G> GameLike for Game<D, G>
where
    D: DieLike,
    G: RngCore,
{
    type Face = D::Face;

    fn faces(&self) -> &[D::Face] {
        Game::faces(self)
    }

    fn die_count(&self) -> usize {
        self.dice.len()
    }

    fn outcomes(&self) -> &WideTable<D::Face> {
        &self.results
    }
}

impl<A> GameLike for &A
where
    A: GameLike + ?Sized,
{
    type Face = A::Face;

    fn faces(&self) -> &[A::Face] {
        (**self).faces()
    }

    fn die_count(&self) -> usize {
        (**self).die_count()
    }

    fn outcomes(&self) -> &WideTable<A::Face> {
        (**self).outcomes()
    }
}

impl FromStr for ResultsFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "wide" => Ok(ResultsFormat::Wide),
            "narrow" => Ok(ResultsFormat::Narrow),
            other => Err(Error::InvalidArgument(format!(
                "unknown results format {other:?}, expected \"wide\" or \"narrow\""
            ))),
        }
    }
}

impl Display for ResultsFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultsFormat::Wide => write!(f, "wide"),
            ResultsFormat::Narrow => write!(f, "narrow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::Die;

    fn d6() -> Die<i32> {
        Die::new(1..=6).unwrap()
    }

    #[test]
    fn game_needs_dice() {
        let err = Game::<Die<i32>>::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn mismatched_faces_are_rejected() {
        let err = Game::new([d6(), Die::new(1..=5).unwrap()]).unwrap_err();
        assert!(matches!(err, Error::InconsistentState(_)));

        let err = Game::new([d6(), Die::new(2..=7).unwrap()]).unwrap_err();
        assert!(matches!(err, Error::InconsistentState(_)));
    }

    #[test]
    fn face_order_and_weights_may_differ() {
        let mut loaded = Die::new([6, 5, 4, 3, 2, 1]).unwrap();
        loaded.set_weight(&6, 5).unwrap();
        let game = Game::new([d6(), loaded]).unwrap();
        assert_eq!(game.faces(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_before_play() {
        let game = Game::new([d6(), d6()]).unwrap();
        assert!(!game.has_results());
        assert_eq!(game.wide().shape(), (0, 2));
        assert!(game.results(ResultsFormat::Narrow).is_empty());
    }

    #[test]
    fn play_fills_rolls_by_dice() {
        let mut game = Game::seeded([d6(), d6(), d6()], 1).unwrap();
        game.play(5).unwrap();
        let wide = game.wide();
        assert_eq!(wide.shape(), (5, 3));
        assert!(wide.values().iter().all(|v| (1..=6).contains(v)));
        assert_eq!(game.narrow().len(), 15);
    }

    #[test]
    fn replay_replaces_results() {
        let mut game = Game::seeded([d6(), d6()], 2).unwrap();
        game.play(10).unwrap();
        game.play(3).unwrap();
        assert_eq!(game.rolls(), 3);
    }

    #[test]
    fn zero_rolls_keeps_previous_results() {
        let mut game = Game::seeded([d6()], 3).unwrap();
        game.play(4).unwrap();
        let before = game.wide();
        let err = game.play(0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(game.wide(), before);
    }

    #[test]
    fn oversized_play_fails_without_touching_results() {
        let mut game = Game::seeded([d6(), d6()], 6).unwrap();
        game.play(2).unwrap();
        let before = game.wide();

        for rolls in [usize::MAX, usize::MAX / 2, usize::MAX / 8] {
            let err = game.play(rolls).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "rolls={rolls}");
        }
        assert_eq!(game.wide(), before);
    }

    #[test]
    fn same_seed_same_results() {
        let mut a = Game::with_rng([d6(), d6()], ChaCha8Rng::seed_from_u64(9)).unwrap();
        let mut b = Game::with_rng([d6(), d6()], ChaCha8Rng::seed_from_u64(9)).unwrap();
        a.play(20).unwrap();
        b.play(20).unwrap();
        assert_eq!(a.wide(), b.wide());
    }

    #[test]
    fn borrowed_dice() {
        let die = d6();
        let mut game = Game::seeded([&die, &die], 4).unwrap();
        game.play(2).unwrap();
        assert_eq!(game.die_count(), 2);
    }

    #[test]
    fn results_are_copies() {
        let mut game = Game::seeded([d6(), d6()], 5).unwrap();
        game.play(3).unwrap();
        let copy = game.results(ResultsFormat::Wide);
        game.play(1).unwrap();
        assert_eq!(copy.len(), 3);
        assert_eq!(game.rolls(), 1);
    }

    #[test]
    fn parse_format() {
        assert_eq!("wide".parse::<ResultsFormat>(), Ok(ResultsFormat::Wide));
        assert_eq!("narrow".parse::<ResultsFormat>(), Ok(ResultsFormat::Narrow));
        assert!(matches!(
            "bogus_format".parse::<ResultsFormat>(),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(ResultsFormat::Narrow.to_string(), "narrow");
    }
}

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::game::GameLike;
use crate::value::Value;

/// Statistics over the latest results of one game.
///
/// Every method recomputes from the game's current results, so an analyzer
/// that owns its game stays valid across replays via [`Analyzer::game_mut`].
#[derive(Clone, Debug)]
pub struct Analyzer<A>
where
    A: GameLike,
{
    game: A,
}

/// Per-roll count of every face of the game's face set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceCounts<T>
where
    T: Value,
{
    faces: Vec<T>,
    counts: Vec<usize>,
}

/// Distinct outcome tuples with how many rolls produced each, in ascending
/// key order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally<T>
where
    T: Value,
{
    entries: Vec<(Vec<T>, usize)>,
}

impl<A> Analyzer<A>
where
    A: GameLike,
{
    pub fn new(game: A) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &A {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut A {
        &mut self.game
    }

    pub fn into_inner(self) -> A {
        self.game
    }

    /// Rolls where every die shows the same face.
    #[must_use]
    pub fn jackpot_count(&self) -> usize {
        self.game
            .outcomes()
            .rows()
            .filter(|row| row.iter().all_equal())
            .count()
    }

    #[must_use]
    pub fn face_counts(&self) -> FaceCounts<A::Face> {
        let faces = self.game.faces();
        let index: BTreeMap<&A::Face, usize> =
            faces.iter().enumerate().map(|(i, f)| (f, i)).collect();

        let outcomes = self.game.outcomes();
        let mut counts = vec![0; outcomes.rolls() * faces.len()];
        for (r, row) in outcomes.rows().enumerate() {
            let base = r * faces.len();
            for value in row {
                if let Some(i) = index.get(value) {
                    counts[base + i] += 1;
                }
            }
        }

        FaceCounts {
            faces: faces.to_vec(),
            counts,
        }
    }

    /// Order-independent tally: each roll's outcomes are sorted first, so
    /// `(1, 2)` and `(2, 1)` count together.
    #[must_use]
    pub fn combo_counts(&self) -> Tally<A::Face> {
        Tally::from_keys(
            self.game
                .outcomes()
                .rows()
                .map(|row| row.iter().cloned().sorted().collect()),
        )
    }

    /// Order-preserving tally: `(1, 2)` and `(2, 1)` are different keys.
    #[must_use]
    pub fn permutations(&self) -> Tally<A::Face> {
        Tally::from_keys(self.game.outcomes().rows().map(<[A::Face]>::to_vec))
    }
}

impl<T> FaceCounts<T>
where
    T: Value,
{
    #[must_use]
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        match self.faces.len() {
            0 => 0,
            n => self.counts.len() / n,
        }
    }

    /// `(rolls, faces)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rolls(), self.faces.len())
    }

    /// Counts for one roll, numbered from 1, in face order.
    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        if roll == 0 || roll > self.rolls() {
            return None;
        }
        let n = self.faces.len();
        let start = (roll - 1) * n;
        Some(&self.counts[start..start + n])
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, usize> {
        self.counts.chunks_exact(self.faces.len().max(1))
    }

    #[must_use]
    pub fn count(&self, roll: usize, face: &T) -> Option<usize> {
        let i = self.faces.iter().position(|f| f == face)?;
        self.row(roll).map(|r| r[i])
    }

    /// How often each face came up over all rolls, in face order.
    #[must_use]
    pub fn totals(&self) -> Vec<usize> {
        let mut totals = vec![0; self.faces.len()];
        for row in self.rows() {
            for (t, c) in totals.iter_mut().zip(row) {
                *t += c;
            }
        }
        totals
    }
}

impl<T> Tally<T>
where
    T: Value,
{
    fn from_keys<I>(keys: I) -> Self
    where
        I: Iterator<Item = Vec<T>>,
    {
        let entries = keys
            .sorted()
            .dedup_with_count()
            .map(|(n, key)| (key, n))
            .collect();
        Self { entries }
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of rolls.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    #[must_use]
    pub fn get(&self, key: &[T]) -> Option<usize> {
        self.entries
            .binary_search_by(|(k, _)| k.as_slice().cmp(key))
            .ok()
            .map(|i| self.entries[i].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &[T]> {
        self.entries.iter().map(|(k, _)| k.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Vec<T>, usize)> {
        self.entries.iter()
    }

    /// Entries by descending count, ties in key order.
    #[must_use]
    pub fn most_common(&self) -> Vec<(&[T], usize)> {
        self.entries
            .iter()
            .map(|(k, n)| (k.as_slice(), *n))
            .sorted_by(|(k1, n1), (k2, n2)| n2.cmp(n1).then_with(|| k1.cmp(k2)))
            .collect()
    }
}

impl<'a, T> IntoIterator for &'a Tally<T>
where
    T: Value,
{
    type Item = &'a (Vec<T>, usize);
    type IntoIter = std::slice::Iter<'a, (Vec<T>, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

mod snapshot;

use std::fmt::Debug;
use std::str::FromStr;

use itertools::Itertools;
use num::ToPrimitive;
use rand::{thread_rng, Rng, RngCore};

pub use snapshot::Snapshot;

use crate::value::{DefaultValue, Value};
use crate::{Error, Ptr, Result, Weight, DEFAULT_WEIGHT};

/// Something a [`Game`](crate::Game) can roll.
pub trait DieLike {
    type Face: Value;

    fn faces(&self) -> &[Self::Face];

    fn weights(&self) -> &[Weight];

    fn sample_rng<G>(&self, rng: &mut G) -> Result<&Self::Face>
    where
        G: RngCore + ?Sized;
}

/// A die with a fixed face set and a mutable weight per face.
///
/// Clones share the face set and copy the weights.
#[derive(Clone, PartialEq)]
pub struct Die<T = DefaultValue>
where
    T: Value,
{
    faces: Ptr<[T]>,
    weights: Vec<Weight>,
}

impl<T> Die<T>
where
    T: Value,
{
    /// Builds an evenly weighted die. Faces keep the given order.
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let faces: Vec<T> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(Error::InvalidArgument("die needs at least one face".into()));
        }
        if let Some((dup, _)) = faces.iter().sorted().tuple_windows().find(|(a, b)| a == b) {
            return Err(Error::InvalidArgument(format!("duplicate face {dup:?}")));
        }

        let weights = vec![DEFAULT_WEIGHT; faces.len()];
        Ok(Self {
            faces: faces.into(),
            weights,
        })
    }

    #[must_use]
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    #[must_use]
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[must_use]
    pub fn contains(&self, face: &T) -> bool {
        self.position(face).is_some()
    }

    #[must_use]
    pub fn weight(&self, face: &T) -> Option<Weight> {
        self.position(face).map(|i| self.weights[i])
    }

    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.weights.iter().sum()
    }

    /// Draw probability of each face, in face order. All zero when every
    /// weight is zero.
    #[must_use]
    pub fn probabilities(&self) -> Vec<f64> {
        let total = self.total_weight();
        if total <= 0.0 {
            return vec![0.0; self.len()];
        }
        self.weights.iter().map(|w| w / total).collect_vec()
    }

    /// Whether both dice carry the same faces, ignoring order.
    #[must_use]
    pub fn same_faces(&self, other: &Self) -> bool {
        Ptr::ptr_eq(&self.faces, &other.faces) || same_face_set(&self.faces, &other.faces)
    }

    /// Replaces the weight of one face.
    ///
    /// The weight must convert to a finite, non-negative real, and the sum of
    /// all weights must stay finite. Zero is allowed and makes the face
    /// impossible to draw.
    pub fn set_weight<W>(&mut self, face: &T, weight: W) -> Result<()>
    where
        W: ToPrimitive + Debug,
    {
        let i = self
            .position(face)
            .ok_or_else(|| Error::NotFound(format!("face {face:?} is not on this die")))?;
        let value = weight
            .to_f64()
            .ok_or_else(|| Error::InvalidArgument(format!("weight {weight:?} is not a real")))?;
        let value = check_weight(value)?;

        let rest: Weight = self
            .weights
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, w)| w)
            .sum();
        if !(rest + value).is_finite() {
            return Err(Error::InvalidArgument(format!(
                "weight {value} makes the total weight overflow"
            )));
        }

        self.weights[i] = value;
        Ok(())
    }

    /// Like [`Die::set_weight`], parsing the weight from text.
    pub fn set_weight_str(&mut self, face: &T, weight: &str) -> Result<()> {
        let value = Weight::from_str(weight.trim())
            .map_err(|e| Error::InvalidArgument(format!("weight {weight:?}: {e}")))?;
        self.set_weight(face, value)
    }

    pub fn sample_rng<G>(&self, rng: &mut G) -> Result<&T>
    where
        G: RngCore + ?Sized,
    {
        let total = self.total_weight();
        if total <= 0.0 {
            return Err(Error::InconsistentState("all face weights are zero".into()));
        }

        let x = rng.gen_range(0.0..total);
        let mut pos = 0.0;
        for (face, w) in self.faces.iter().zip(&self.weights) {
            pos += w;
            if x < pos {
                return Ok(face);
            }
        }

        // Rounding can leave `x` just past the last boundary.
        self.faces
            .iter()
            .zip(&self.weights)
            .rev()
            .find(|(_, w)| **w > 0.0)
            .map(|(face, _)| face)
            .ok_or_else(|| Error::InconsistentState("all face weights are zero".into()))
    }

    /// Draws `count` faces with replacement.
    pub fn roll_rng<G>(&self, count: usize, rng: &mut G) -> Result<Vec<T>>
    where
        G: RngCore + ?Sized,
    {
        if count == 0 {
            return Err(Error::InvalidArgument("roll count must be at least 1".into()));
        }
        (0..count)
            .map(|_| self.sample_rng(rng).cloned())
            .collect()
    }

    pub fn roll(&self, count: usize) -> Result<Vec<T>> {
        let mut rng = thread_rng();
        self.roll_rng(count, &mut rng)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(
            self.faces
                .iter()
                .cloned()
                .zip(self.weights.iter().copied())
                .collect(),
        )
    }

    fn position(&self, face: &T) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }
}

impl<T> DieLike for Die<T>
where
    T: Value,
{
    type Face = T;

    fn faces(&self) -> &[T] {
        Die::faces(self)
    }

    fn weights(&self) -> &[Weight] {
        Die::weights(self)
    }

    fn sample_rng<G>(&self, rng: &mut G) -> Result<&T>
    where
        G: RngCore + ?Sized,
    {
        Die::sample_rng(self, rng)
    }
}

impl<T> DieLike for &Die<T>
where
    T: Value,
{
    type Face = T;

    fn faces(&self) -> &[T] {
        Die::faces(self)
    }

    fn weights(&self) -> &[Weight] {
        Die::weights(self)
    }

    fn sample_rng<G>(&self, rng: &mut G) -> Result<&T>
    where
        G: RngCore + ?Sized,
    {
        Die::sample_rng(self, rng)
    }
}

impl<T> Debug for Die<T>
where
    T: Value,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Die")
            .field("faces", &self.faces)
            .field("weights", &self.weights)
            .finish()
    }
}

pub(crate) fn same_face_set<T>(lhs: &[T], rhs: &[T]) -> bool
where
    T: Value,
{
    lhs.len() == rhs.len() && lhs.iter().sorted().eq(rhs.iter().sorted())
}

fn check_weight(value: Weight) -> Result<Weight> {
    if !value.is_finite() {
        return Err(Error::InvalidArgument(format!("weight {value} is not finite")));
    }
    if value < 0.0 {
        return Err(Error::InvalidArgument(format!("weight {value} is negative")));
    }
    Ok(value)
}

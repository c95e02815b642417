use std::ops::Index;

use crate::value::Value;
use crate::Weight;

/// Owned copy of a die's face → weight table, in face order.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<T>
where
    T: Value,
{
    entries: Vec<(T, Weight)>,
}

impl<T> Snapshot<T>
where
    T: Value,
{
    pub(crate) fn new(entries: Vec<(T, Weight)>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn weight(&self, face: &T) -> Option<Weight> {
        self.entries
            .iter()
            .find(|(f, _)| f == face)
            .map(|(_, w)| *w)
    }

    pub fn faces(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(f, _)| f)
    }

    pub fn weights(&self) -> impl Iterator<Item = Weight> + '_ {
        self.entries.iter().map(|(_, w)| *w)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (T, Weight)> {
        self.entries.iter()
    }
}

impl<T> Index<&T> for Snapshot<T>
where
    T: Value,
{
    type Output = Weight;

    fn index(&self, face: &T) -> &Weight {
        match self.entries.iter().find(|(f, _)| f == face) {
            Some((_, w)) => w,
            None => panic!("face {face:?} is not in the snapshot"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T>
where
    T: Value,
{
    type Item = &'a (T, Weight);
    type IntoIter = std::slice::Iter<'a, (T, Weight)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use std::slice::ChunksExact;

use crate::value::Value;

/// Roll outcomes with one row per roll and one column per die.
///
/// Rolls and dice are numbered from 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideTable<T>
where
    T: Value,
{
    columns: usize,
    values: Vec<T>,
}

/// One cell of a [`NarrowTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrowRow<T> {
    pub roll: usize,
    pub die: usize,
    pub value: T,
}

/// Roll outcomes with one row per (roll, die) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrowTable<T>
where
    T: Value,
{
    rows: Vec<NarrowRow<T>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsTable<T>
where
    T: Value,
{
    Wide(WideTable<T>),
    Narrow(NarrowTable<T>),
}

impl<T> WideTable<T>
where
    T: Value,
{
    pub(crate) fn empty(columns: usize) -> Self {
        Self {
            columns,
            values: Vec::new(),
        }
    }

    /// `values` is row-major and its length a multiple of `columns`.
    pub(crate) fn from_values(columns: usize, values: Vec<T>) -> Self {
        debug_assert!(columns > 0 && values.len() % columns == 0);
        Self { columns, values }
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.values.len() / self.columns
        }
    }

    #[must_use]
    pub fn dice(&self) -> usize {
        self.columns
    }

    /// `(rolls, dice)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rolls(), self.columns)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[T]> {
        if roll == 0 || roll > self.rolls() {
            return None;
        }
        let start = (roll - 1) * self.columns;
        Some(&self.values[start..start + self.columns])
    }

    #[must_use]
    pub fn get(&self, roll: usize, die: usize) -> Option<&T> {
        match die {
            0 => None,
            _ => self.row(roll).and_then(|r| r.get(die - 1)),
        }
    }

    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.values.chunks_exact(self.columns.max(1))
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn to_narrow(&self) -> NarrowTable<T> {
        let rows = self
            .rows()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter().enumerate().map(move |(d, value)| NarrowRow {
                    roll: r + 1,
                    die: d + 1,
                    value: value.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }
}

impl<T> NarrowTable<T>
where
    T: Value,
{
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, roll: usize, die: usize) -> Option<&T> {
        self.rows
            .iter()
            .find(|r| r.roll == roll && r.die == die)
            .map(|r| &r.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NarrowRow<T>> {
        self.rows.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|r| &r.value)
    }
}

impl<'a, T> IntoIterator for &'a NarrowTable<T>
where
    T: Value,
{
    type Item = &'a NarrowRow<T>;
    type IntoIter = std::slice::Iter<'a, NarrowRow<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> ResultsTable<T>
where
    T: Value,
{
    /// Number of rows in the table's own layout.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ResultsTable::Wide(t) => t.rolls(),
            ResultsTable::Narrow(t) => t.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn into_wide(self) -> Option<WideTable<T>> {
        match self {
            ResultsTable::Wide(t) => Some(t),
            ResultsTable::Narrow(_) => None,
        }
    }

    #[must_use]
    pub fn into_narrow(self) -> Option<NarrowTable<T>> {
        match self {
            ResultsTable::Wide(_) => None,
            ResultsTable::Narrow(t) => Some(t),
        }
    }
}

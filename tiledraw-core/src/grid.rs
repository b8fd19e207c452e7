//! Sparse grid representation
//!
//! A grid is an ordered list of `(position, value)` entries. Order is kept
//! so exports are stable, but it has no other meaning. The same position may
//! appear more than once; lookups and merges treat the later entry as the
//! one that counts.
//!
//! The entry list is shared behind an `Arc`, so cloning a grid (or a drawing)
//! never copies its entries.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bounds::GridBounds;
use crate::position::GridPosition;

/// A single grid entry
pub type GridElement<T> = (GridPosition, T);

/// An immutable sparse grid of values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    elements: Arc<[GridElement<T>]>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Grid {
            elements: Arc::from(Vec::new()),
        }
    }
}

impl<T> Grid<T> {
    pub fn new(elements: Vec<GridElement<T>>) -> Self {
        Grid {
            elements: elements.into(),
        }
    }

    pub fn elements(&self) -> &[GridElement<T>] {
        &self.elements
    }

    /// Number of entries, counting shadowed duplicates
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if there are no entries at all
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Smallest bounds covering every entry (`Null` when there are none).
    /// Recomputed on every call.
    pub fn bounds(&self) -> GridBounds {
        self.elements
            .iter()
            .fold(GridBounds::NULL, |bounds, (position, _)| bounds.including(*position))
    }

    /// Value at `position`; the last matching entry wins
    pub fn get(&self, position: GridPosition) -> Option<&T> {
        self.elements
            .iter()
            .rev()
            .find(|(p, _)| *p == position)
            .map(|(_, value)| value)
    }

    /// A new grid over `elements`
    pub fn with_elements(&self, elements: Vec<GridElement<T>>) -> Self {
        Grid::new(elements)
    }

    /// Transform every entry
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(GridPosition, &T) -> U,
    {
        Grid::new(
            self.elements
                .iter()
                .map(|(position, value)| (*position, f(*position, value)))
                .collect(),
        )
    }

    /// Keep the entries matching `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(GridPosition, &T) -> bool,
    {
        Grid::new(
            self.elements
                .iter()
                .filter(|(position, value)| predicate(*position, value))
                .cloned()
                .collect(),
        )
    }

    /// Keep the entries inside `bounds`
    pub fn cropped_to(&self, bounds: GridBounds) -> Self
    where
        T: Clone,
    {
        self.filter(|position, _| bounds.contains(position))
    }

    /// Merge `other` over this grid.
    ///
    /// Each position appears once in the result, in order of first
    /// appearance across both grids. The value is taken from the last entry
    /// for that position, so `other` wins over `self`.
    pub fn merged(&self, other: &Grid<T>) -> Self
    where
        T: Clone,
    {
        let mut index: HashMap<GridPosition, usize> = HashMap::new();
        let mut merged: Vec<GridElement<T>> = Vec::with_capacity(self.len() + other.len());

        for (position, value) in self.elements.iter().chain(other.elements.iter()) {
            match index.get(position) {
                Some(&slot) => merged[slot].1 = value.clone(),
                None => {
                    index.insert(*position, merged.len());
                    merged.push((*position, value.clone()));
                }
            }
        }

        Grid::new(merged)
    }

    /// Export as a `height x width` matrix over `bounds()`, row-major.
    ///
    /// Cells without an entry hold `fill`. Entries with a `Null` position
    /// are skipped.
    pub fn to_matrix(&self, fill: T) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        let bounds = self.bounds();
        let Some((origin_column, origin_row)) = bounds.min().coords() else {
            return Vec::new();
        };

        // Dense: every row is allocated up front. Drawings stay within the
        // configured max size, so the matrix is small in practice.
        let mut matrix = vec![vec![fill; bounds.width() as usize]; bounds.height() as usize];
        for (position, value) in self.elements.iter() {
            if let Some((column, row)) = position.coords() {
                let r = (row - origin_row) as usize;
                let c = (column - origin_column) as usize;
                matrix[r][c] = value.clone();
            }
        }
        matrix
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridElement<T>> {
        self.elements.iter()
    }
}

impl<T> FromIterator<GridElement<T>> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = GridElement<T>>>(iter: I) -> Self {
        Grid::new(iter.into_iter().collect())
    }
}

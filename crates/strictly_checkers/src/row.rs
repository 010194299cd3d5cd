//! Row-at-a-time view of the board.

use super::space::Space;

/// One row of the board, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    index: usize,
    spaces: &'a [Space],
}

impl<'a> Row<'a> {
    pub(crate) fn new(index: usize, spaces: &'a [Space]) -> Self {
        Self { index, spaces }
    }

    /// Index of this row within the board (0 is the top of the view).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Iterates over the spaces in this row.
    pub fn iter(&self) -> std::slice::Iter<'a, Space> {
        self.spaces.iter()
    }
}

impl<'a> IntoIterator for Row<'a> {
    type Item = &'a Space;
    type IntoIter = std::slice::Iter<'a, Space>;

    fn into_iter(self) -> Self::IntoIter {
        self.spaces.iter()
    }
}

//! Dense row-major 2-D table for the breaking dynamic program

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Matrix<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Change dimensions, keeping every entry that is still in range
    pub fn resize(&mut self, rows: usize, cols: usize, fill: T) {
        if rows == self.rows && cols == self.cols {
            return;
        }

        let mut data = vec![fill; rows * cols];
        for r in 0..rows.min(self.rows) {
            for c in 0..cols.min(self.cols) {
                data[r * cols + c] = self.data[r * self.cols + c].clone();
            }
        }
        self.data = data;
        self.rows = rows;
        self.cols = cols;
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_keeps_entries() {
        let mut m = Matrix::new(2, 2, 0);
        m[(0, 1)] = 5;
        m[(1, 0)] = 7;
        m.resize(3, 4, -1);
        assert_eq!(m[(0, 1)], 5);
        assert_eq!(m[(1, 0)], 7);
        assert_eq!(m[(2, 3)], -1);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
    }

    #[test]
    fn test_get_out_of_range() {
        let m = Matrix::new(1, 1, 0.0);
        assert_eq!(m.get(0, 0), Some(&0.0));
        assert_eq!(m.get(1, 0), None);
    }
}

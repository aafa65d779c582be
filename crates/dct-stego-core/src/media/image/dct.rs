//! Separable 2D DCT-II and its inverse (DCT-III) on square blocks,
//! orthonormal scaling so that a forward/inverse pair is lossless.

use std::f64::consts::PI;
use std::ops::{Index, IndexMut};

/// square matrix of samples, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    size: usize,
    data: Vec<f64>,
}

/// the frequency domain view of a [`Block`], `[(0, 0)]` is the DC term
pub type CoefficientMatrix = Block;

impl Block {
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    pub fn from_fn(size: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut block = Self::zeros(size);
        for row in 0..size {
            for col in 0..size {
                block[(row, col)] = f(row, col);
            }
        }
        block
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Index<(usize, usize)> for Block {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for Block {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.size + col]
    }
}

/// Forward and inverse block transform with a precomputed cosine table.
#[derive(Debug, Clone)]
pub struct BlockTransformer {
    n: usize,
    /// `cos[k * n + i] = alpha(k) * cos(PI * (2i + 1) * k / 2n)`
    cos: Vec<f64>,
}

impl BlockTransformer {
    pub fn new(n: usize) -> Self {
        let nf = n as f64;
        let mut cos = vec![0.0; n * n];
        for k in 0..n {
            let alpha = if k == 0 {
                (1.0 / nf).sqrt()
            } else {
                (2.0 / nf).sqrt()
            };
            for i in 0..n {
                cos[k * n + i] = alpha * (PI * (2.0 * i as f64 + 1.0) * k as f64 / (2.0 * nf)).cos();
            }
        }

        Self { n, cos }
    }

    /// 2D DCT-II: rows first, then columns
    pub fn forward(&self, block: &Block) -> CoefficientMatrix {
        debug_assert_eq!(block.size(), self.n);
        let n = self.n;

        let mut rows = Block::zeros(n);
        for r in 0..n {
            for k in 0..n {
                rows[(r, k)] = (0..n).map(|i| block[(r, i)] * self.cos[k * n + i]).sum();
            }
        }

        let mut out = Block::zeros(n);
        for c in 0..n {
            for k in 0..n {
                out[(k, c)] = (0..n).map(|i| rows[(i, c)] * self.cos[k * n + i]).sum();
            }
        }
        out
    }

    /// 2D DCT-III, the exact inverse of [`forward`](Self::forward)
    pub fn inverse(&self, coefficients: &CoefficientMatrix) -> Block {
        debug_assert_eq!(coefficients.size(), self.n);
        let n = self.n;

        let mut rows = Block::zeros(n);
        for r in 0..n {
            for i in 0..n {
                rows[(r, i)] = (0..n)
                    .map(|k| coefficients[(r, k)] * self.cos[k * n + i])
                    .sum();
            }
        }

        let mut out = Block::zeros(n);
        for c in 0..n {
            for i in 0..n {
                out[(i, c)] = (0..n).map(|k| rows[(k, c)] * self.cos[k * n + i]).sum();
            }
        }
        out
    }
}

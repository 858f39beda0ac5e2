//! KeyMatrix: validated square key matrix over the integers mod 26.
//!
//! Holds the Hill cipher key as a flat row-major buffer with entries already
//! reduced into `[0, 26)`. Determinant and adjugate are computed by cofactor
//! expansion in pure integer arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;
use crate::utils::modular::{self, MODULUS};

/// Smallest supported matrix order.
pub const MIN_ORDER: usize = 2;

/// Largest supported matrix order.
pub const MAX_ORDER: usize = 3;

/// Square matrix of order 2 or 3 with entries reduced modulo 26.
///
/// A `KeyMatrix` is only a well-shaped matrix; invertibility is checked by
/// [`inverse`](Self::inverse), which [`MatrixCipher`](crate::MatrixCipher)
/// calls on construction.
///
/// # Examples
///
/// ```
/// use hillvig::KeyMatrix;
///
/// let key: KeyMatrix = "[[3, 3], [2, 5]]".parse().unwrap();
/// assert_eq!(key.order(), 2);
/// assert_eq!(key.determinant(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct KeyMatrix {
    order: usize,
    entries: Vec<i64>,
}

impl KeyMatrix {
    /// Builds a key matrix from its rows.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKeyShape`] if `rows` is empty, ragged,
    /// not square, or of an order other than 2 or 3.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, CipherError> {
        let order = rows.len();
        let square = rows.iter().all(|row| row.as_ref().len() == order);
        if !square || !(MIN_ORDER..=MAX_ORDER).contains(&order) {
            return Err(CipherError::InvalidKeyShape {
                rows: order,
                row_lengths: rows.iter().map(|row| row.as_ref().len()).collect(),
            });
        }

        let entries = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .map(modular::reduce)
            .collect();
        Ok(KeyMatrix { order, entries })
    }

    /// Returns the matrix order `n` (also the cipher block size).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the reduced entry at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if either index is not below [`order`](Self::order).
    pub fn entry(&self, row: usize, col: usize) -> i64 {
        assert!(row < self.order && col < self.order, "index out of range");
        self.entries[row * self.order + col]
    }

    /// Returns the reduced entries as nested rows.
    pub fn rows(&self) -> Vec<Vec<i64>> {
        self.entries
            .chunks(self.order)
            .map(<[i64]>::to_vec)
            .collect()
    }

    /// Integer determinant of the reduced entries (not reduced itself).
    pub fn determinant(&self) -> i64 {
        determinant(&self.entries, self.order)
    }

    /// Adjugate (transposed cofactor matrix), reduced modulo 26.
    pub fn adjugate(&self) -> KeyMatrix {
        let n = self.order;
        let mut entries = vec![0i64; n * n];
        for (i, row) in entries.chunks_mut(n).enumerate() {
            for (j, item) in row.iter_mut().enumerate() {
                // adj[i][j] = cofactor[j][i]
                let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                let minor = minor(&self.entries, n, j, i);
                *item = modular::reduce(sign * determinant(&minor, n - 1));
            }
        }
        KeyMatrix { order: n, entries }
    }

    /// Modular inverse of the matrix: `adjugate * det^-1 mod 26`.
    ///
    /// # Errors
    /// - [`CipherError::SingularKey`] if `det mod 26` is 0 or shares a
    ///   factor with 26.
    /// - [`CipherError::NoModularInverse`] if the determinant passed the
    ///   coprimality check but has no inverse. This indicates a defect.
    pub fn inverse(&self) -> Result<KeyMatrix, CipherError> {
        let det = modular::reduce(self.determinant());
        if det == 0 || modular::gcd(det, MODULUS) != 1 {
            return Err(CipherError::SingularKey { determinant: det });
        }
        let det_inv = modular::mod_inverse(det, MODULUS).ok_or(CipherError::NoModularInverse {
            value: det,
            modulus: MODULUS,
        })?;

        let mut inverse = self.adjugate();
        for item in inverse.entries.iter_mut() {
            *item = modular::reduce(*item * det_inv);
        }
        Ok(inverse)
    }

    /// Multiplies the matrix by one block (column vector) modulo 26.
    ///
    /// `block.len()` must equal the order.
    pub(crate) fn apply(&self, block: &[u8], out: &mut Vec<u8>) {
        debug_assert_eq!(block.len(), self.order);
        for row in self.entries.chunks(self.order) {
            let sum: i64 = row
                .iter()
                .zip(block)
                .map(|(&k, &v)| k * i64::from(v))
                .sum();
            out.push(modular::reduce(sum) as u8);
        }
    }
}

/// Laplace expansion along the first row.
fn determinant(entries: &[i64], n: usize) -> i64 {
    match n {
        0 => 1,
        1 => entries[0],
        2 => entries[0] * entries[3] - entries[1] * entries[2],
        _ => (0..n)
            .map(|col| {
                let sign = if col % 2 == 0 { 1 } else { -1 };
                sign * entries[col] * determinant(&minor(entries, n, 0, col), n - 1)
            })
            .sum(),
    }
}

/// Returns the `(n-1)x(n-1)` matrix left after removing `skip_row` and `skip_col`.
fn minor(entries: &[i64], n: usize, skip_row: usize, skip_col: usize) -> Vec<i64> {
    entries
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx / n != skip_row && idx % n != skip_col)
        .map(|(_, &v)| v)
        .collect()
}

impl TryFrom<Vec<Vec<i64>>> for KeyMatrix {
    type Error = CipherError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        KeyMatrix::from_rows(&rows)
    }
}

impl From<KeyMatrix> for Vec<Vec<i64>> {
    fn from(matrix: KeyMatrix) -> Self {
        matrix.rows()
    }
}

impl FromStr for KeyMatrix {
    type Err = CipherError;

    /// Parses a nested integer list literal such as `[[3, 3], [2, 5]]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<i64>> =
            serde_json::from_str(s).map_err(|e| CipherError::MalformedKey(e.to_string()))?;
        KeyMatrix::from_rows(&rows)
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.entries.chunks(self.order).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

//! Distance matrix input.
//!
//! [`DistanceMatrix`] is the read-only cost table the whole run shares:
//! square, non-negative, with an optional reserved marker value denoting
//! edges that must not be traversed. It can be built in memory via
//! [`DistanceMatrix::from_rows`] or loaded from a delimited text file via
//! [`DistanceMatrix::load_csv`].

use std::path::Path;
use thiserror::Error;

/// Marker value conventionally used for infeasible edges.
///
/// A matrix cell equal to this value makes any tour crossing that edge
/// evaluate to the infeasibility sentinel.
pub const DEFAULT_INFEASIBLE_MARKER: f64 = 100_000.0;

/// Errors raised while constructing or loading a distance matrix.
///
/// These are fatal at startup: a run never begins with a malformed matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The underlying file could not be read or parsed as delimited text.
    #[error("failed to read distance matrix: {0}")]
    Read(#[from] csv::Error),

    /// A cell could not be parsed as a number.
    #[error("row {row}: cannot parse '{value}' as a distance")]
    Parse { row: usize, value: String },

    /// The matrix has no rows.
    #[error("distance matrix is empty")]
    Empty,

    /// The matrix is not square.
    #[error("distance matrix is not square: {rows} rows x {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// A cell holds a negative or non-finite value.
    #[error("invalid distance {value} at ({row}, {col}): distances must be finite and non-negative")]
    InvalidDistance { row: usize, col: usize, value: f64 },
}

/// A square matrix of travel costs between nodes.
///
/// `get(i, j)` is the cost of traveling from node `i` to node `j`. The
/// diagonal is ignored by tour-cost computation. Symmetry is conventional,
/// not enforced. The matrix is immutable after construction and is shared
/// by reference across evaluation workers.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
    infeasible_marker: Option<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from row vectors.
    ///
    /// Validates that the input is non-empty, square, and that every cell
    /// is finite and non-negative. The default infeasible marker
    /// ([`DEFAULT_INFEASIBLE_MARKER`]) is installed; use
    /// [`with_infeasible_marker`](Self::with_infeasible_marker) or
    /// [`without_infeasible_marker`](Self::without_infeasible_marker) to
    /// change it.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }

        let mut data = Vec::with_capacity(size * size);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::NotSquare {
                    rows: size,
                    cols: row.len(),
                });
            }
            for (col_idx, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(MatrixError::InvalidDistance {
                        row: row_idx,
                        col: col_idx,
                        value,
                    });
                }
                data.push(value);
            }
        }

        Ok(Self {
            size,
            data,
            infeasible_marker: Some(DEFAULT_INFEASIBLE_MARKER),
        })
    }

    /// Loads a matrix from a delimited text file.
    ///
    /// The file must contain a square numeric table with one header row,
    /// which is discarded. Any I/O, parse, or shape problem is returned as
    /// a [`MatrixError`] with a descriptive message.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self, MatrixError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut rows: Vec<Vec<f64>> = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            let row = record
                .iter()
                .map(|field| {
                    field.parse::<f64>().map_err(|_| MatrixError::Parse {
                        row: row_idx,
                        value: field.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>, MatrixError>>()?;
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    /// Sets the marker value that denotes infeasible edges.
    pub fn with_infeasible_marker(mut self, marker: f64) -> Self {
        self.infeasible_marker = Some(marker);
        self
    }

    /// Disables infeasible-edge detection: every edge is traversable.
    pub fn without_infeasible_marker(mut self) -> Self {
        self.infeasible_marker = None;
        self
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost of traveling from node `from` to node `to`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Whether `distance` equals the reserved infeasible-edge marker.
    pub fn is_infeasible(&self, distance: f64) -> bool {
        self.infeasible_marker == Some(distance)
    }
}

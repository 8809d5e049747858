use thiserror::Error;

// ---------------------------------------------------------------------------
// Modality – which plotting strategy is active
// ---------------------------------------------------------------------------

/// The five supported data modalities. The central panel dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modality {
    #[default]
    Points,
    Arrays,
    Audio,
    Text,
    Images,
}

impl Modality {
    pub const ALL: [Modality; 5] = [
        Modality::Points,
        Modality::Arrays,
        Modality::Audio,
        Modality::Text,
        Modality::Images,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Modality::Points => "Points",
            Modality::Arrays => "Arrays",
            Modality::Audio => "Audio",
            Modality::Text => "Text",
            Modality::Images => "Images",
        }
    }
}

// ---------------------------------------------------------------------------
// Input validation errors
// ---------------------------------------------------------------------------

/// Errors produced while turning raw user text into typed values.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("empty input")]
    EmptyInput,
    #[error("invalid point '{0}', expected (x,y)")]
    BadPoint(String),
    #[error("row {row}: '{token}' is not a number")]
    BadNumber { row: usize, token: String },
    #[error("row {row} has {got} values, previous rows have {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("{0} rows given, only 2 or 3 dimensions are supported")]
    UnsupportedDimensions(usize),
}

// ---------------------------------------------------------------------------
// Point – one (x, y) coordinate pair
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A parsed list of points, consumed by the scatter plot.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    pub points: Vec<Point>,
}

impl PointSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ArrayData – 2 or 3 equal-length numeric rows
// ---------------------------------------------------------------------------

/// Validated array input: a planar (x, y) series or a spatial (x, y, z)
/// trajectory. Any other row count is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    Planar { x: Vec<f64>, y: Vec<f64> },
    Spatial { x: Vec<f64>, y: Vec<f64>, z: Vec<f64> },
}

impl ArrayData {
    /// Build from row-major input. Rows are assumed equal-length (the parser
    /// enforces this); the row count decides the plot dimensionality.
    pub fn from_rows(mut rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        match rows.len() {
            2 => {
                let y = rows.pop().unwrap_or_default();
                let x = rows.pop().unwrap_or_default();
                Ok(ArrayData::Planar { x, y })
            }
            3 => {
                let z = rows.pop().unwrap_or_default();
                let y = rows.pop().unwrap_or_default();
                let x = rows.pop().unwrap_or_default();
                Ok(ArrayData::Spatial { x, y, z })
            }
            other => Err(DataError::UnsupportedDimensions(other)),
        }
    }

    /// Number of samples per dimension.
    pub fn len(&self) -> usize {
        match self {
            ArrayData::Planar { x, .. } | ArrayData::Spatial { x, .. } => x.len(),
        }
    }

    pub fn dimensions(&self) -> usize {
        match self {
            ArrayData::Planar { .. } => 2,
            ArrayData::Spatial { .. } => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// AudioClip – decoded mono samples
// ---------------------------------------------------------------------------

/// A fully decoded audio file: mono samples at the source sample rate.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioClip {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_rows_build_planar() {
        let data = ArrayData::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(data.dimensions(), 2);
        assert_eq!(data.len(), 2);
        match data {
            ArrayData::Planar { x, y } => {
                assert_eq!(x, vec![1.0, 2.0]);
                assert_eq!(y, vec![3.0, 4.0]);
            }
            other => panic!("expected planar, got {other:?}"),
        }
    }

    #[test]
    fn three_rows_build_spatial() {
        let rows = vec![vec![1.0], vec![2.0], vec![3.0]];
        let data = ArrayData::from_rows(rows).unwrap();
        assert_eq!(data.dimensions(), 3);
        match data {
            ArrayData::Spatial { x, y, z } => {
                assert_eq!((x[0], y[0], z[0]), (1.0, 2.0, 3.0));
            }
            other => panic!("expected spatial, got {other:?}"),
        }
    }

    #[test]
    fn other_row_counts_are_rejected() {
        for n in [0usize, 1, 4, 7] {
            let rows = vec![vec![0.0]; n];
            assert_eq!(
                ArrayData::from_rows(rows),
                Err(DataError::UnsupportedDimensions(n)),
                "row count {n} should be rejected"
            );
        }
    }

    #[test]
    fn clip_duration() {
        let clip = AudioClip {
            samples: vec![0.0; 44_100],
            sample_rate: 22_050,
        };
        assert!((clip.duration_secs() - 2.0).abs() < 1e-9);
    }
}

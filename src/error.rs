//! Error types for trace handling and plotting.

use thiserror::Error;

/// Errors raised by convergence-trace handling and the plotting helpers.
#[derive(Debug, Error)]
pub enum ExampleError {
    /// A recorded point has a different dimension than the trace.
    #[error("trace dimension mismatch: trace holds {expected}-dimensional points, got {got}")]
    TraceDimensionMismatch {
        /// Dimension of the points already in the trace
        expected: usize,
        /// Dimension of the rejected point
        got: usize,
    },

    /// A trace was required but contains no points.
    #[error("trace '{name}' contains no points")]
    EmptyTrace {
        /// Name of the offending trace
        name: String,
    },

    /// A plotting routine needs points of a specific dimension.
    #[error("plot requires {expected}-dimensional trace points, got {got}")]
    PlotDimensionMismatch {
        /// Dimension the plot routine expects
        expected: usize,
        /// Dimension of the supplied trace
        got: usize,
    },

    /// The sample grid handed to a plotting routine is empty or too small.
    #[error("sample grid must contain at least {min} points, got {got}")]
    SampleGridTooSmall {
        /// Minimum number of points required
        min: usize,
        /// Number of points supplied
        got: usize,
    },

    /// Lower bound is not strictly below the upper bound.
    #[error("degenerate bounds: lower ({lower}) must be < upper ({upper})")]
    DegenerateBounds {
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// A CSV trace file row could not be parsed.
    #[error("invalid trace CSV at line {line}: {reason}")]
    InvalidTraceRow {
        /// 1-based line number in the CSV file
        line: usize,
        /// What went wrong on that line
        reason: String,
    },

    /// Underlying I/O failure while reading or writing a trace or plot.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, ExampleError>;

impl ExampleError {
    /// Returns `true` if this is a dimension mismatch of any kind.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            ExampleError::TraceDimensionMismatch { .. }
                | ExampleError::PlotDimensionMismatch { .. }
        )
    }

    /// Returns `true` if this error came from parsing a trace CSV file.
    pub fn is_trace_parse_error(&self) -> bool {
        matches!(self, ExampleError::InvalidTraceRow { .. })
    }
}

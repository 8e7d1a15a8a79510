//! Convergence traces: the sequence of points an optimization method visited,
//! recorded by the caller and consumed by the plotting helpers.
//!
//! The crate itself contains no optimizer; traces are built through
//! [`ConvergenceTrace::record`] or loaded from CSV files written by an
//! earlier run.

use crate::error::{ExampleError, Result};
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A single recorded evaluation along an optimization trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePoint {
    /// Evaluation number, starting at 0
    pub iteration: usize,
    /// Input position
    pub x: Vec<f64>,
    /// Function value f(x)
    pub f_value: f64,
    /// Best function value seen up to and including this point
    pub best_so_far: f64,
    /// Whether this evaluation improved on the previous best
    pub is_improvement: bool,
}

/// An ordered sequence of [`TracePoint`]s for one function.
#[derive(Debug, Clone)]
pub struct ConvergenceTrace {
    /// Name of the function the trace was recorded on (used for filenames)
    pub function_name: String,
    points: Vec<TracePoint>,
}

impl ConvergenceTrace {
    /// Create an empty trace for the named function.
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            points: Vec::new(),
        }
    }

    /// Append an evaluation. Best-so-far bookkeeping and the improvement flag
    /// are derived here; the caller only supplies the position and value.
    pub fn record(&mut self, x: &[f64], f_value: f64) -> Result<()> {
        if let Some(first) = self.points.first() {
            if first.x.len() != x.len() {
                return Err(ExampleError::TraceDimensionMismatch {
                    expected: first.x.len(),
                    got: x.len(),
                });
            }
        }

        let previous_best = self.points.last().map(|p| p.best_so_far);
        let is_improvement = match previous_best {
            Some(best) => f_value < best,
            None => true,
        };
        let best_so_far = if is_improvement {
            f_value
        } else {
            previous_best.unwrap_or(f_value)
        };

        self.points.push(TracePoint {
            iteration: self.points.len(),
            x: x.to_vec(),
            f_value,
            best_so_far,
            is_improvement,
        });
        Ok(())
    }

    /// All recorded points, in evaluation order.
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trace holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dimension of the recorded positions, if any point has been recorded.
    pub fn dimension(&self) -> Option<usize> {
        self.points.first().map(|p| p.x.len())
    }

    /// Points that improved on the best value so far.
    pub fn improvements(&self) -> Vec<&TracePoint> {
        self.points.iter().filter(|p| p.is_improvement).collect()
    }

    /// The last improving point, i.e. the best solution in the trace.
    pub fn best(&self) -> Option<&TracePoint> {
        self.points.iter().rev().find(|p| p.is_improvement)
    }

    /// Write the trace as CSV:
    /// `iteration,x0,..,x{n-1},f_value,best_so_far,is_improvement`.
    pub fn save_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        let mut file = BufWriter::new(File::create(path)?);

        let dim = self.dimension().unwrap_or(0);
        write!(file, "iteration,")?;
        for i in 0..dim {
            write!(file, "x{},", i)?;
        }
        writeln!(file, "f_value,best_so_far,is_improvement")?;

        for point in &self.points {
            write!(file, "{},", point.iteration)?;
            for &xi in &point.x {
                write!(file, "{:.16},", xi)?;
            }
            writeln!(
                file,
                "{:.16},{:.16},{}",
                point.f_value, point.best_so_far, point.is_improvement
            )?;
        }

        file.flush()?;
        Ok(())
    }

    /// Load a trace from a CSV file produced by [`ConvergenceTrace::save_csv`].
    /// The function name is taken from the file stem.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let function_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        let mut lines = content.lines().enumerate();
        let (_, header) = lines.next().ok_or(ExampleError::InvalidTraceRow {
            line: 1,
            reason: "file is empty".to_string(),
        })?;
        if !header.starts_with("iteration,") {
            return Err(ExampleError::InvalidTraceRow {
                line: 1,
                reason: format!("expected header starting with 'iteration,', got '{}'", header),
            });
        }
        // Columns between `iteration` and the trailing three hold coordinates.
        let dim = header.split(',').count().saturating_sub(4);

        let mut trace = Self::new(function_name);
        for (idx, line) in lines {
            let line_no = idx + 1;
            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() != dim + 4 {
                return Err(ExampleError::InvalidTraceRow {
                    line: line_no,
                    reason: format!("expected {} columns, got {}", dim + 4, parts.len()),
                });
            }

            let iteration: usize = parts[0].parse().map_err(|_| ExampleError::InvalidTraceRow {
                line: line_no,
                reason: format!("invalid iteration '{}'", parts[0]),
            })?;

            let mut x = Vec::with_capacity(dim);
            for part in &parts[1..1 + dim] {
                let coord: f64 = part.parse().map_err(|_| ExampleError::InvalidTraceRow {
                    line: line_no,
                    reason: format!("invalid coordinate '{}'", part),
                })?;
                x.push(coord);
            }

            let f_value: f64 =
                parts[1 + dim]
                    .parse()
                    .map_err(|_| ExampleError::InvalidTraceRow {
                        line: line_no,
                        reason: format!("invalid f_value '{}'", parts[1 + dim]),
                    })?;
            let best_so_far: f64 =
                parts[2 + dim]
                    .parse()
                    .map_err(|_| ExampleError::InvalidTraceRow {
                        line: line_no,
                        reason: format!("invalid best_so_far '{}'", parts[2 + dim]),
                    })?;
            let is_improvement: bool =
                parts[3 + dim]
                    .parse()
                    .map_err(|_| ExampleError::InvalidTraceRow {
                        line: line_no,
                        reason: format!("invalid is_improvement '{}'", parts[3 + dim]),
                    })?;

            trace.points.push(TracePoint {
                iteration,
                x,
                f_value,
                best_so_far,
                is_improvement,
            });
        }

        Ok(trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tracks_best_so_far() {
        let mut trace = ConvergenceTrace::new("quartic_well");

        trace.record(&[4.0], 2.36).unwrap();
        trace.record(&[2.0], 1.52).unwrap();
        trace.record(&[3.0], 1.27).unwrap();
        trace.record(&[2.5], 1.395).unwrap();

        let points = trace.points();
        assert_eq!(points.len(), 4);
        assert!(points[0].is_improvement);
        assert!(points[1].is_improvement);
        assert!(points[2].is_improvement);
        assert!(!points[3].is_improvement);
        assert_eq!(points[3].best_so_far, 1.27);
        assert_eq!(trace.best().unwrap().iteration, 2);
        assert_eq!(trace.improvements().len(), 3);
    }

    #[test]
    fn test_record_rejects_dimension_change() {
        let mut trace = ConvergenceTrace::new("sphere");
        trace.record(&[1.0, 2.0], 5.0).unwrap();

        let err = trace.record(&[1.0], 1.0).unwrap_err();
        assert!(err.is_dimension_error());
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_csv_round_trip() {
        let mut trace = ConvergenceTrace::new("sphere");
        trace.record(&[2.0, -1.0], 5.0).unwrap();
        trace.record(&[1.0, -0.5], 1.25).unwrap();
        trace.record(&[1.5, 0.0], 2.25).unwrap();

        let dir = std::env::temp_dir().join("math_example_functions_trace_test");
        let path = dir.join("sphere.csv");
        trace.save_csv(&path).unwrap();

        let loaded = ConvergenceTrace::load_csv(&path).unwrap();
        assert_eq!(loaded.function_name, "sphere");
        assert_eq!(loaded.points(), trace.points());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_csv_reports_line_numbers() {
        let dir = std::env::temp_dir().join("math_example_functions_trace_bad");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.csv");
        std::fs::write(
            &path,
            "iteration,x0,f_value,best_so_far,is_improvement\n0,1.0,2.0,2.0,true\n1,oops,1.0,1.0,true\n",
        )
        .unwrap();

        let err = ConvergenceTrace::load_csv(&path).unwrap_err();
        match err {
            ExampleError::InvalidTraceRow { line, .. } => assert_eq!(line, 3),
            other => panic!("expected InvalidTraceRow, got {:?}", other),
        }

        std::fs::remove_dir_all(&dir).ok();
    }
}

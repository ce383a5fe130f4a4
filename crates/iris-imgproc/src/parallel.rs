use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride must be valid.
    #[error("row stride must be > 0 and divide the buffer length, got {0}")]
    InvalidRowStride(usize),
}

/// Controls how the per-row kernels are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Apply a function to every row of a flat buffer, passing the row index along.
///
/// Each invocation of `f` receives exclusive access to its own row, so rows can be
/// filled concurrently without any locking. The result does not depend on the
/// strategy.
///
/// # Arguments
///
/// * `dst` - The destination buffer, `rows * row_stride` elements long.
/// * `row_stride` - The number of elements in one row.
/// * `strategy` - The execution strategy.
/// * `f` - The kernel called with `(row_index, row)`.
pub fn par_iter_rows_indexed<T, F>(
    dst: &mut [T],
    row_stride: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if row_stride == 0 || dst.len() % row_stride != 0 {
        return Err(ParallelError::InvalidRowStride(row_stride));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(i, row)| f(i, row));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(i, row)| f(i, row));
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_exact_mut(row_stride)
                    .enumerate()
                    .for_each(|(i, row)| f(i, row));
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_with_row_index(strategy: ExecutionStrategy) -> Result<Vec<usize>, ParallelError> {
        let mut dst = vec![0usize; 12];
        par_iter_rows_indexed(&mut dst, 4, strategy, |i, row| {
            row.iter_mut().for_each(|v| *v = i);
        })?;
        Ok(dst)
    }

    #[test]
    fn test_rows_serial() -> Result<(), ParallelError> {
        let dst = fill_with_row_index(ExecutionStrategy::Serial)?;
        assert_eq!(dst, vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]);
        Ok(())
    }

    #[test]
    fn test_rows_parallel_matches_serial() -> Result<(), ParallelError> {
        let serial = fill_with_row_index(ExecutionStrategy::Serial)?;
        let parallel = fill_with_row_index(ExecutionStrategy::ParallelRows)?;
        let fixed = fill_with_row_index(ExecutionStrategy::Fixed(2))?;
        assert_eq!(serial, parallel);
        assert_eq!(serial, fixed);
        Ok(())
    }

    #[test]
    fn test_rows_invalid_stride() {
        let mut dst = vec![0u8; 5];
        let res = par_iter_rows_indexed(&mut dst, 0, ExecutionStrategy::Serial, |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidRowStride(0)));

        let res = par_iter_rows_indexed(&mut dst, 2, ExecutionStrategy::Serial, |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidRowStride(2)));
    }

    #[test]
    fn test_rows_fixed_error() {
        let mut dst = vec![0u8; 4];
        let res = par_iter_rows_indexed(&mut dst, 2, ExecutionStrategy::Fixed(0), |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
    }
}

use serde_derive::{Deserialize, Serialize};

use crate::errors::{MatrixError, Result};
use crate::linalg::{allocate, Matrix};

/// Which slices of a matrix `softmax_batch` normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Each row is one distribution over its columns (one sample per row).
    Row,
    /// Each column is one distribution over its rows (one sample per column).
    Column,
}

/// What softmax does with a vector whose elements are all `-inf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Fail with `MatrixError::DegenerateInput`.
    #[default]
    Reject,
    /// Return a vector of `NaN`, which is what the formula itself produces.
    PropagateNan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftmaxConfig {
    pub degenerate: DegeneratePolicy,
}

/// Writes softmax(logits) into `out`, which must be empty with room for `logits.len()` values.
fn softmax_into(logits: &[f64], out: &mut Vec<f64>, config: &SoftmaxConfig) -> Result<()> {
    if logits.is_empty() {
        return Err(MatrixError::EmptyVector);
    }

    if logits.iter().all(|&x| x == f64::NEG_INFINITY) {
        return match config.degenerate {
            DegeneratePolicy::Reject => {
                log::debug!("softmax over {} -inf logits rejected", logits.len());
                Err(MatrixError::DegenerateInput)
            }
            DegeneratePolicy::PropagateNan => {
                out.extend(logits.iter().map(|_| f64::NAN));
                Ok(())
            }
        };
    }

    // shifting by the max keeps exp() from overflowing
    let max_logit = logits
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    out.extend(logits.iter().map(|&x| (x - max_logit).exp()));

    let sum_exps: f64 = out.iter().sum();
    for e in out.iter_mut() {
        *e /= sum_exps;
    }

    Ok(())
}

/// Numerically stable softmax over a slice, using the default config.
pub fn softmax(logits: &[f64]) -> Result<Vec<f64>> {
    softmax_with(logits, &SoftmaxConfig::default())
}

pub fn softmax_with(logits: &[f64], config: &SoftmaxConfig) -> Result<Vec<f64>> {
    if logits.is_empty() {
        return Err(MatrixError::EmptyVector);
    }
    let mut out = allocate(1, logits.len())?;
    softmax_into(logits, &mut out, config)?;
    Ok(out)
}

/// Softmax over a 1xN or Nx1 matrix. The result has the same shape as `v`.
pub fn softmax_vector(v: &Matrix) -> Result<Matrix> {
    softmax_vector_with(v, &SoftmaxConfig::default())
}

pub fn softmax_vector_with(v: &Matrix, config: &SoftmaxConfig) -> Result<Matrix> {
    if !v.is_vector() {
        log::debug!("softmax_vector called on a {} matrix", v.shape());
        return Err(MatrixError::NotAVector { shape: v.shape() });
    }

    let mut data = allocate(v.num_rows(), v.num_columns())?;
    softmax_into(v.as_slice(), &mut data, config)?;
    Ok(Matrix::from_parts(v.num_rows(), v.num_columns(), data))
}

/// Applies softmax independently to every row or every column of `m`.
pub fn softmax_batch(m: &Matrix, axis: Axis) -> Result<Matrix> {
    softmax_batch_with(m, axis, &SoftmaxConfig::default())
}

pub fn softmax_batch_with(m: &Matrix, axis: Axis, config: &SoftmaxConfig) -> Result<Matrix> {
    log::trace!("softmax_batch over {} along {:?}", m.shape(), axis);

    let mut result = Matrix::new(m.num_rows(), m.num_columns())?;

    match axis {
        Axis::Row => {
            for i in 0..m.num_rows() {
                let row = m.extract_row(i)?;
                let softmax_row = softmax_vector_with(&row, config)?;
                result.insert_row(i, &softmax_row)?;
            }
        }
        Axis::Column => {
            for j in 0..m.num_columns() {
                let column = m.extract_column(j)?;
                let softmax_column = softmax_vector_with(&column, config)?;
                result.insert_column(j, &softmax_column)?;
            }
        }
    }

    Ok(result)
}

/// Computes the Jacobian of softmax at `v`.
///
/// Entry (i, j) is how much output probability i moves per unit change of logit j:
/// `p_i * (1 - p_i)` on the diagonal and `-p_i * p_j` elsewhere.
pub fn softmax_jacobian(v: &Matrix) -> Result<Matrix> {
    let probabilities = softmax_vector(v)?;
    let p = probabilities.as_slice();
    let n = p.len();

    let mut jacobian = Matrix::new(n, n)?;
    for i in 0..n {
        for j in 0..n {
            let value = if i == j {
                p[i] * (1.0 - p[i])
            } else {
                -p[i] * p[j]
            };
            jacobian.set(i, j, value);
        }
    }

    Ok(jacobian)
}

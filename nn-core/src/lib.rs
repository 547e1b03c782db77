//! Dense `f64` matrices with the element-wise operations a small neural network needs:
//! mapping a scalar function, Hadamard product, clipping, and a numerically stable
//! softmax over vectors or along either axis of a batch.

pub mod engine;
pub mod errors;
pub mod linalg;
pub mod softmax;

pub use errors::{MatrixError, Result};
pub use linalg::{ColumnsMatrixBuilder, Matrix, RowsMatrixBuilder, ScalarFn, Shape};
pub use softmax::{Axis, DegeneratePolicy, SoftmaxConfig};

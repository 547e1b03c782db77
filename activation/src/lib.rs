//! Scalar activation functions and their derivatives, pluggable into
//! [`nn_core::Matrix::map`].

use nn_core::{Matrix, Result};

pub mod elu;
pub mod errors;
pub mod hard_sigmoid;
pub mod leaky_relu;
pub mod registry;
pub mod relu;
pub mod sigmoid;
pub mod swish;
pub mod tanh;

pub use errors::ActivationError;
pub use registry::ActivationFunction;

pub trait Activator {
    fn activate(&self, z: f64) -> f64;
    fn activate_derivative(&self, z: f64) -> f64;
}

/// Applies `activator` to every element of `z_m`, returning a new matrix.
pub fn activate_matrix<A>(z_m: &Matrix, activator: &A) -> Result<Matrix>
where
    A: Activator + ?Sized,
{
    z_m.map(&|z: f64| activator.activate(z))
}

pub fn activate_derivative_matrix<A>(z_m: &Matrix, activator: &A) -> Result<Matrix>
where
    A: Activator + ?Sized,
{
    z_m.map(&|z: f64| activator.activate_derivative(z))
}

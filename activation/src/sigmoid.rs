use crate::Activator;

/// The logistic function `1 / (1 + e^-z)`.
///
/// Negative inputs use the equivalent form `e^z / (1 + e^z)` so that `e^-z` is never
/// evaluated for large negative `z`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sigmoid {}

impl Sigmoid {
    pub fn new() -> Sigmoid {
        Sigmoid {}
    }
}

impl Activator for Sigmoid {
    fn activate(&self, z: f64) -> f64 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let e_to_the_z = z.exp();
            e_to_the_z / (1.0 + e_to_the_z)
        }
    }

    /// Compute the derivative of the sigmoid function at the given z
    fn activate_derivative(&self, z: f64) -> f64 {
        let az = self.activate(z);
        az * (1.0 - az)
    }
}

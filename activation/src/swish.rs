use crate::sigmoid::Sigmoid;
use crate::Activator;

/// `z * sigmoid(z)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Swish {}

impl Swish {
    pub fn new() -> Swish {
        Swish {}
    }
}

impl Activator for Swish {
    fn activate(&self, z: f64) -> f64 {
        z * Sigmoid::new().activate(z)
    }

    fn activate_derivative(&self, z: f64) -> f64 {
        let s = Sigmoid::new().activate(z);
        s + z * s * (1.0 - s)
    }
}

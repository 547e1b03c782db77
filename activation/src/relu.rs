use crate::Activator;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReLU {}

impl ReLU {
    pub fn new() -> ReLU {
        ReLU {}
    }
}

impl Activator for ReLU {
    fn activate(&self, z: f64) -> f64 {
        if z < 0.0 {
            0.0
        } else {
            z
        }
    }

    fn activate_derivative(&self, z: f64) -> f64 {
        if z > 0.0 {
            1.0
        } else {
            0.0
        }
    }
}

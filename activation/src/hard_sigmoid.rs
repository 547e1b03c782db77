use crate::Activator;

const SLOPE: f64 = 0.2;
const OFFSET: f64 = 0.5;

/// Piecewise linear approximation of the sigmoid: `clamp(0.2 z + 0.5, 0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HardSigmoid {}

impl HardSigmoid {
    pub fn new() -> HardSigmoid {
        HardSigmoid {}
    }
}

impl Activator for HardSigmoid {
    fn activate(&self, z: f64) -> f64 {
        (SLOPE * z + OFFSET).max(0.0).min(1.0)
    }

    fn activate_derivative(&self, z: f64) -> f64 {
        // saturates at z = -2.5 and z = 2.5
        let y = SLOPE * z + OFFSET;
        if y > 0.0 && y < 1.0 {
            SLOPE
        } else {
            0.0
        }
    }
}

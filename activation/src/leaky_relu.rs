use crate::Activator;

/// ReLU with a small slope for negative inputs instead of a flat zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeakyReLU {
    tail_slope: f64,
}

impl LeakyReLU {
    pub const DEFAULT_TAIL_SLOPE: f64 = 0.01;

    pub fn new(tail_slope: f64) -> Self {
        Self { tail_slope }
    }

    pub fn tail_slope(&self) -> f64 {
        self.tail_slope
    }
}

impl Default for LeakyReLU {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TAIL_SLOPE)
    }
}

impl Activator for LeakyReLU {
    fn activate(&self, z: f64) -> f64 {
        if z < 0.0 {
            self.tail_slope * z
        } else {
            z
        }
    }

    fn activate_derivative(&self, z: f64) -> f64 {
        if z <= 0.0 {
            self.tail_slope
        } else {
            1.0
        }
    }
}

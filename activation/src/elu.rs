// for info on ELU, see HOML P 336 and https://ml-cheatsheet.readthedocs.io/en/latest/activation_functions.html#elu

use crate::Activator;

/// Exponential linear unit: `alpha * (e^z - 1)` below zero, identity above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ELU {
    alpha: f64,
}

impl ELU {
    pub const DEFAULT_ALPHA: f64 = 1.0;

    pub fn new(alpha: f64) -> ELU {
        ELU { alpha }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for ELU {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALPHA)
    }
}

impl Activator for ELU {
    fn activate(&self, z: f64) -> f64 {
        if z < 0.0 {
            self.alpha * (z.exp() - 1.0)
        } else {
            z
        }
    }

    fn activate_derivative(&self, z: f64) -> f64 {
        if z < 0.0 {
            self.alpha * z.exp()
        } else {
            1.0
        }
    }
}

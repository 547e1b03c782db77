use crate::Activator;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tanh {}

impl Tanh {
    pub fn new() -> Tanh {
        Tanh {}
    }
}

impl Activator for Tanh {
    fn activate(&self, z: f64) -> f64 {
        z.tanh()
    }

    fn activate_derivative(&self, z: f64) -> f64 {
        let t = z.tanh();
        1.0 - t * t
    }
}

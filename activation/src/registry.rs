use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;

use crate::elu::ELU;
use crate::errors::ActivationError;
use crate::hard_sigmoid::HardSigmoid;
use crate::leaky_relu::LeakyReLU;
use crate::relu::ReLU;
use crate::sigmoid::Sigmoid;
use crate::swish::Swish;
use crate::tanh::Tanh;
use crate::Activator;

fn default_tail_slope() -> f64 {
    LeakyReLU::DEFAULT_TAIL_SLOPE
}

fn default_alpha() -> f64 {
    ELU::DEFAULT_ALPHA
}

/// Every activation this crate provides, selectable by name or from JSON config such as
/// `{"type": "leaky_relu", "tail_slope": 0.1}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivationFunction {
    #[serde(rename = "sigmoid")]
    Sigmoid,
    #[serde(rename = "tanh")]
    Tanh,
    #[serde(rename = "relu")]
    ReLU,
    #[serde(rename = "leaky_relu")]
    LeakyReLU {
        #[serde(default = "default_tail_slope")]
        tail_slope: f64,
    },
    #[serde(rename = "elu")]
    ELU {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    #[serde(rename = "swish")]
    Swish,
    #[serde(rename = "hard_sigmoid")]
    HardSigmoid,
}

impl ActivationFunction {
    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::LeakyReLU { .. } => "leaky_relu",
            ActivationFunction::ELU { .. } => "elu",
            ActivationFunction::Swish => "swish",
            ActivationFunction::HardSigmoid => "hard_sigmoid",
        }
    }

    /// Parses and validates a JSON activation config.
    pub fn from_json(json: &str) -> Result<Self, ActivationError> {
        let activation_function: ActivationFunction = serde_json::from_str(json).map_err(|e| {
            log::debug!("activation config rejected: {}", e);
            ActivationError::InvalidConfig(e.to_string())
        })?;
        activation_function.validate()?;
        Ok(activation_function)
    }

    pub fn to_json(&self) -> String {
        // serializing this enum cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ActivationError> {
        match *self {
            ActivationFunction::LeakyReLU { tail_slope } if !tail_slope.is_finite() => Err(
                ActivationError::InvalidConfig(format!("tail_slope must be finite, got {}", tail_slope)),
            ),
            ActivationFunction::ELU { alpha } if !(alpha.is_finite() && alpha > 0.0) => Err(
                ActivationError::InvalidConfig(format!("alpha must be positive, got {}", alpha)),
            ),
            _ => Ok(()),
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = ActivationError;

    /// Looks up an activation by name, using the default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            "tanh" => Ok(ActivationFunction::Tanh),
            "relu" => Ok(ActivationFunction::ReLU),
            "leaky_relu" => Ok(ActivationFunction::LeakyReLU {
                tail_slope: default_tail_slope(),
            }),
            "elu" => Ok(ActivationFunction::ELU {
                alpha: default_alpha(),
            }),
            "swish" => Ok(ActivationFunction::Swish),
            "hard_sigmoid" => Ok(ActivationFunction::HardSigmoid),
            _ => Err(ActivationError::UnknownActivation(s.to_owned())),
        }
    }
}

impl Activator for ActivationFunction {
    fn activate(&self, z: f64) -> f64 {
        match *self {
            ActivationFunction::Sigmoid => Sigmoid::new().activate(z),
            ActivationFunction::Tanh => Tanh::new().activate(z),
            ActivationFunction::ReLU => ReLU::new().activate(z),
            ActivationFunction::LeakyReLU { tail_slope } => LeakyReLU::new(tail_slope).activate(z),
            ActivationFunction::ELU { alpha } => ELU::new(alpha).activate(z),
            ActivationFunction::Swish => Swish::new().activate(z),
            ActivationFunction::HardSigmoid => HardSigmoid::new().activate(z),
        }
    }

    fn activate_derivative(&self, z: f64) -> f64 {
        match *self {
            ActivationFunction::Sigmoid => Sigmoid::new().activate_derivative(z),
            ActivationFunction::Tanh => Tanh::new().activate_derivative(z),
            ActivationFunction::ReLU => ReLU::new().activate_derivative(z),
            ActivationFunction::LeakyReLU { tail_slope } => {
                LeakyReLU::new(tail_slope).activate_derivative(z)
            }
            ActivationFunction::ELU { alpha } => ELU::new(alpha).activate_derivative(z),
            ActivationFunction::Swish => Swish::new().activate_derivative(z),
            ActivationFunction::HardSigmoid => HardSigmoid::new().activate_derivative(z),
        }
    }
}

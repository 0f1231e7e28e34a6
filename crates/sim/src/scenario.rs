use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cartpole_plant::{ControllerGains, PhysicalParameters, Reference, State};
use cartpole_solvers::ode::Method;

use crate::{FitnessWeights, Simulation};

/// A simulation run and its scoring weights, as stored in a config file.
///
/// Every section is optional. Missing values fall back to the baseline
/// swing-up run: the default plant and gains, the pendulum starting at
/// `theta = 0.2` near hanging, 100 s sampled every 10 ms.
///
/// ```toml
/// duration = 20.0
/// time_step = 0.005
///
/// [initial_state]
/// theta = 0.5
///
/// [gains]
/// k_theta = 250.0
///
/// [method]
/// kind = "dopri5"
/// rel_tol = 1e-9
/// abs_tol = 1e-9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub initial_state: State,
    pub reference: Reference,
    pub params: PhysicalParameters,
    pub gains: ControllerGains,
    pub duration: f64,
    pub time_step: f64,
    pub method: Method,
    pub fitness: FitnessWeights,
}

/// Errors that can occur when loading a [`Scenario`].
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown scenario format for {}, expected .toml or .json", .0.display())]
    UnknownFormat(PathBuf),
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            initial_state: State::new(0.0, 0.2, 0.0, 0.0),
            reference: Reference::default(),
            params: PhysicalParameters::default(),
            gains: ControllerGains::default(),
            duration: 100.0,
            time_step: 0.01,
            method: Method::default(),
            fitness: FitnessWeights::default(),
        }
    }
}

impl Scenario {
    /// Parses a scenario from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Toml`] if the text is not a valid scenario.
    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses a scenario from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Json`] if the text is not a valid scenario.
    pub fn from_json_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a scenario file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is neither `toml` nor `json`, if the
    /// file cannot be read, or if its contents do not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ScenarioError::UnknownFormat(path.to_path_buf())),
        };

        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&text)
    }

    /// The simulation this scenario describes.
    #[must_use]
    pub fn simulation(&self) -> Simulation {
        Simulation {
            initial_state: self.initial_state,
            reference: self.reference,
            params: self.params,
            gains: self.gains,
            duration: self.duration,
            time_step: self.time_step,
            method: self.method,
        }
    }
}

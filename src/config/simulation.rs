use super::params::{
    parse_initial_state, state_from_values, EngineActivation, PhysicalConstants, ScenarioParams,
};
use crate::constants::{DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, DEFAULT_OUTPUT_DIR};
use crate::errors::SimError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const PARAMS_SECTION: &str = "PARAMS";
const QUANTITY_SECTION: &str = "QuantityScenario";
const OUTPUT_SECTION: &str = "output";

#[derive(Debug, Deserialize)]
struct QuantityScenario {
    n: usize,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InitialStateValue {
    Text(String),
    Values(Vec<f64>),
}

#[derive(Debug, Deserialize)]
struct ScenarioSection {
    k: f64,
    engine_on: bool,
    thrust: f64,
    initial_state: InitialStateValue,
    title: String,
    #[serde(default)]
    engine_activation: EngineActivation,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    pub directory: PathBuf,
    pub width: u32,
    pub height: u32,
    pub export_csv: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
            export_csv: false,
        }
    }
}

/// A loaded configuration file.
///
/// `PARAMS` and `QuantityScenario` are read eagerly and must be valid for the
/// configuration to load at all. Scenario sections are only read on request
/// through [`SimulationConfig::scenario`], so a broken scenario does not
/// prevent the others from running.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub constants: PhysicalConstants,
    pub scenario_count: usize,
    pub output: OutputOptions,
    sections: toml::Table,
}

impl SimulationConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SimError> {
        let sections: toml::Table = text.parse()?;

        let constants: PhysicalConstants = read_section(&sections, PARAMS_SECTION)?;
        constants.validate()?;

        let quantity: QuantityScenario = read_section(&sections, QUANTITY_SECTION)?;

        let output = match sections.get(OUTPUT_SECTION) {
            Some(_) => read_section(&sections, OUTPUT_SECTION)?,
            None => OutputOptions::default(),
        };
        if output.width == 0 || output.height == 0 {
            return Err(SimError::invalid_parameter(
                "output",
                format!("image size must be non-zero, got {}x{}", output.width, output.height),
            ));
        }

        Ok(SimulationConfig {
            constants,
            scenario_count: quantity.n,
            output,
            sections,
        })
    }

    pub fn scenario_section_name(index: usize) -> String {
        format!("scenario{}", index)
    }

    /// Loads scenario `index`, counted from 1.
    pub fn scenario(&self, index: usize) -> Result<ScenarioParams, SimError> {
        let name = Self::scenario_section_name(index);
        let section: ScenarioSection = read_section(&self.sections, &name)?;

        let initial_state = match &section.initial_state {
            InitialStateValue::Text(text) => parse_initial_state(&name, text)?,
            InitialStateValue::Values(values) => state_from_values(&name, values)?,
        };

        let params = ScenarioParams {
            drag_coefficient: section.k,
            engine_on: section.engine_on,
            thrust: section.thrust,
            initial_state,
            title: section.title,
            engine_activation: section.engine_activation,
        };
        params.validate()?;
        Ok(params)
    }
}

fn read_section<T: DeserializeOwned>(sections: &toml::Table, name: &str) -> Result<T, SimError> {
    let value = sections
        .get(name)
        .ok_or_else(|| SimError::MissingSection(name.to_string()))?;
    value
        .clone()
        .try_into()
        .map_err(|source| SimError::InvalidSection {
            section: name.to_string(),
            source,
        })
}

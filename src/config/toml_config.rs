use crate::core::step::Step;
use crate::domain::bottle::Bottle;
use crate::domain::locale::Locale;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub bottle: BottleConfig,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BottleConfig {
    pub capacity: f64,
    pub initial_level: Option<f64>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    pub action: String,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub show_each_step: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入場景
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Like `from_toml_str`, resolving `${VAR}` through `lookup` instead of the environment.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換變數 (例如 ${CAPACITY})，未設定的變數保持原樣
    fn substitute_vars<F>(content: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = match Regex::new(r"\$\{([^}]+)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Capacity-only construction unless an initial level is configured.
    pub fn build_bottle(&self) -> Bottle {
        match self.bottle.initial_level {
            Some(level) => Bottle::with_level(self.bottle.capacity, level),
            None => Bottle::new(self.bottle.capacity),
        }
    }

    pub fn steps(&self) -> Result<Vec<Step>> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let amount = validate_required_field(&format!("steps[{}].amount", i), &step.amount)?;
                Step::from_action(&step.action, *amount)
            })
            .collect()
    }

    pub fn locale(&self) -> Result<Locale> {
        match &self.bottle.locale {
            Some(name) => name.parse(),
            None => Ok(Locale::default()),
        }
    }

    pub fn show_each_step(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.show_each_step)
            .unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for ScenarioConfig {
    // Negative capacities stay legal; the bottle's own clamp arithmetic handles them.
    fn validate(&self) -> Result<()> {
        validate_finite("bottle.capacity", self.bottle.capacity)?;
        if let Some(level) = self.bottle.initial_level {
            validate_finite("bottle.initial_level", level)?;
        }
        self.locale()?;

        for (i, step) in self.steps.iter().enumerate() {
            validate_non_empty_string(&format!("steps[{}].action", i), &step.action)?;
            let amount = validate_required_field(&format!("steps[{}].amount", i), &step.amount)?;
            validate_finite(&format!("steps[{}].amount", i), *amount)?;
        }

        // Unknown actions
        self.steps()?;
        Ok(())
    }
}

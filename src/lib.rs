pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, RunPlan};

pub use config::toml_config::ScenarioConfig;
pub use core::{
    session::{Session, StepOutcome},
    step::Step,
};
pub use domain::{bottle::Bottle, locale::Locale};
pub use utils::error::{BottleError, Result};

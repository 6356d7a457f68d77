pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::ScenarioConfig;
#[cfg(feature = "cli")]
use crate::core::step::Step;
#[cfg(feature = "cli")]
use crate::domain::{bottle::Bottle, locale::Locale};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bottle")]
#[command(about = "Fill and empty a bottle, then describe it")]
pub struct CliConfig {
    /// Capacity in ml (ignored with --config)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub capacity: f64,

    /// Initial level in ml, not clamped until the first step (ignored with --config)
    #[arg(long, allow_negative_numbers = true)]
    pub level: Option<f64>,

    /// Description language: en or de
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Path to a TOML scenario file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the bottle after every step
    #[arg(long)]
    pub show_steps: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json: bool,

    /// Steps to run, e.g. fill:500 empty:120
    #[arg(allow_hyphen_values = true)]
    pub steps: Vec<Step>,
}

/// Everything a run needs once CLI flags and the scenario file are merged.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub bottle: Bottle,
    pub steps: Vec<Step>,
    pub locale: Locale,
    pub show_steps: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列與場景檔案：旗標優先，位置參數步驟接在場景步驟之後
    pub fn build_plan(&self, scenario: Option<&ScenarioConfig>) -> Result<RunPlan> {
        let plan = match scenario {
            Some(scenario) => {
                let mut steps = scenario.steps()?;
                steps.extend(self.steps.iter().copied());
                RunPlan {
                    bottle: scenario.build_bottle(),
                    steps,
                    locale: match self.locale {
                        Some(locale) => locale,
                        None => scenario.locale()?,
                    },
                    show_steps: self.show_steps || scenario.show_each_step(),
                }
            }
            None => RunPlan {
                bottle: match self.level {
                    Some(level) => Bottle::with_level(self.capacity, level),
                    None => Bottle::new(self.capacity),
                },
                steps: self.steps.clone(),
                locale: self.locale.unwrap_or_default(),
                show_steps: self.show_steps,
            },
        };
        Ok(plan)
    }
}

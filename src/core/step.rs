use crate::domain::bottle::Bottle;
use crate::utils::error::BottleError;
use std::fmt;
use std::str::FromStr;

/// One scripted mutation of a bottle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Fill(f64),
    Empty(f64),
}

impl Step {
    /// Builds a step from an action name (`fill` / `empty`, any case) and an amount.
    pub fn from_action(action: &str, amount: f64) -> Result<Self, BottleError> {
        match action.trim().to_ascii_lowercase().as_str() {
            "fill" => Ok(Step::Fill(amount)),
            "empty" => Ok(Step::Empty(amount)),
            other => Err(BottleError::StepParseError {
                input: format!("{}:{}", action, amount),
                reason: format!("unknown action '{}'", other),
            }),
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Step::Fill(_) => "fill",
            Step::Empty(_) => "empty",
        }
    }

    pub fn amount(&self) -> f64 {
        match *self {
            Step::Fill(amount) | Step::Empty(amount) => amount,
        }
    }

    pub fn apply(&self, bottle: &mut Bottle) {
        match *self {
            Step::Fill(amount) => bottle.fill(amount),
            Step::Empty(amount) => bottle.empty(amount),
        }
    }

    /// Level the step would produce without clamping.
    pub fn unclamped_level(&self, level: f64) -> f64 {
        match *self {
            Step::Fill(amount) => level + amount,
            Step::Empty(amount) => level - amount,
        }
    }
}

impl FromStr for Step {
    type Err = BottleError;

    /// Parses `<action>:<amount>`, e.g. `fill:500` or `empty:-20`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, amount) = s.split_once(':').ok_or_else(|| BottleError::StepParseError {
            input: s.to_string(),
            reason: "expected <action>:<amount>".to_string(),
        })?;

        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|e| BottleError::StepParseError {
                input: s.to_string(),
                reason: format!("invalid amount: {}", e),
            })?;

        Step::from_action(action, amount).map_err(|e| match e {
            BottleError::StepParseError { reason, .. } => BottleError::StepParseError {
                input: s.to_string(),
                reason,
            },
            other => other,
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.action(), self.amount())
    }
}

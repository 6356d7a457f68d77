use crate::utils::error::BottleError;
use std::str::FromStr;

/// Language a bottle describes itself in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    German,
}

impl Locale {
    /// Renders a fill description. Quantities always carry a fractional part (`0.0`, `500.0`).
    pub fn render(self, level: f64, capacity: f64) -> String {
        match self {
            Locale::English => format!(
                "The bottle is filled with {:?} ml of {:?} ml.",
                level, capacity
            ),
            Locale::German => format!(
                "Die Flasche ist mit {:?} ml von {:?} ml gefüllt.",
                level, capacity
            ),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::German => "de",
        }
    }
}

impl FromStr for Locale {
    type Err = BottleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "de" | "german" | "deutsch" => Ok(Locale::German),
            _ => Err(BottleError::InvalidLocale {
                value: s.to_string(),
            }),
        }
    }
}

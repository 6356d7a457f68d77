use crate::core::step::Step;
use crate::domain::bottle::Bottle;

/// What a single step did to the bottle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub step: Step,
    pub level_before: f64,
    pub level_after: f64,
    /// The level was forced back into range.
    pub clamped: bool,
}

/// Owns a bottle and applies scripted steps to it in order.
#[derive(Debug, Clone, Default)]
pub struct Session {
    bottle: Bottle,
    outcomes: Vec<StepOutcome>,
}

impl Session {
    pub fn new(bottle: Bottle) -> Self {
        Self {
            bottle,
            outcomes: Vec::new(),
        }
    }

    pub fn bottle(&self) -> &Bottle {
        &self.bottle
    }

    pub fn into_bottle(self) -> Bottle {
        self.bottle
    }

    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn clamp_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.clamped).count()
    }

    pub fn apply(&mut self, step: Step) -> StepOutcome {
        let level_before = self.bottle.current_level();
        let expected = step.unclamped_level(level_before);

        step.apply(&mut self.bottle);

        let level_after = self.bottle.current_level();
        // NaN never equals itself; a NaN that survives the step is not a clamp.
        let clamped = level_after != expected && !(level_after.is_nan() && expected.is_nan());

        tracing::debug!(
            step = %step,
            level_before,
            level_after,
            "Applied step"
        );
        if clamped {
            tracing::info!(
                step = %step,
                unclamped = expected,
                level_after,
                capacity = self.bottle.capacity(),
                "Level clamped"
            );
        }

        let outcome = StepOutcome {
            step,
            level_before,
            level_after,
            clamped,
        };
        self.outcomes.push(outcome);
        outcome
    }

    pub fn run<I>(&mut self, steps: I) -> Vec<StepOutcome>
    where
        I: IntoIterator<Item = Step>,
    {
        steps.into_iter().map(|step| self.apply(step)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_reports_clamp() {
        let mut session = Session::new(Bottle::new(1000.0));
        let outcomes = session.run([Step::Fill(500.0), Step::Fill(700.0)]);

        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].clamped);
        assert_eq!(outcomes[0].level_after, 500.0);
        assert!(outcomes[1].clamped);
        assert_eq!(outcomes[1].level_before, 500.0);
        assert_eq!(outcomes[1].level_after, 1000.0);
        assert_eq!(session.clamp_count(), 1);
        assert_eq!(session.bottle().current_level(), 1000.0);
    }

    #[test]
    fn test_outcomes_accumulate_across_calls() {
        let mut session = Session::new(Bottle::with_level(1000.0, 300.0));
        session.apply(Step::Empty(500.0));
        session.apply(Step::Fill(10.0));

        assert_eq!(session.outcomes().len(), 2);
        assert_eq!(session.clamp_count(), 1);
        assert_eq!(session.into_bottle().current_level(), 10.0);
    }

    #[test]
    fn test_empty_session_keeps_bottle() {
        let session = Session::new(Bottle::with_level(10.0, 20.0));
        assert!(session.outcomes().is_empty());
        assert_eq!(session.bottle().current_level(), 20.0);
    }
}

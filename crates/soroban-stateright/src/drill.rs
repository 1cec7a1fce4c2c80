//! Stateright model of one class at one term count.

use soroban_core::{ClassConfig, ClassId, RequirementProgress, Transition};
use stateright::{Model, Property};

/// Partial sequence, reduced to what future moves and rules depend on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrillState {
    /// Terms placed so far
    pub terms: usize,
    /// Running total
    pub current: i32,
    /// Requirement counters; `None` for classes without a requirement
    pub progress: Option<RequirementProgress>,
}

impl DrillState {
    fn initial(config: &ClassConfig) -> Self {
        Self {
            terms: 0,
            current: 0,
            progress: config.requirement.map(|r| r.progress()),
        }
    }

    /// No absence rule broken so far.
    pub fn no_forbidden_transition(&self, config: &ClassConfig) -> bool {
        match (&self.progress, config.requirement) {
            (Some(progress), Some(requirement)) => !progress.is_violated(&requirement),
            _ => true,
        }
    }

    pub fn requirement_met(&self, config: &ClassConfig) -> bool {
        match (&self.progress, config.requirement) {
            (Some(progress), Some(requirement)) => progress.is_satisfied(&requirement),
            _ => true,
        }
    }
}

/// Every sequence of `term_count` terms the class's table allows.
///
/// Moves that leave the class range are dropped, as the generator abandons
/// such attempts.
pub struct DrillModel {
    pub class: ClassId,
    pub term_count: usize,
}

impl DrillModel {
    pub fn new(class: ClassId, term_count: usize) -> Self {
        debug_assert!(term_count > 0, "Term count must be positive");
        Self { class, term_count }
    }

    fn config(&self) -> &'static ClassConfig {
        self.class.config()
    }
}

impl Model for DrillModel {
    type State = DrillState;
    type Action = i32;

    fn init_states(&self) -> Vec<Self::State> {
        vec![DrillState::initial(self.config())]
    }

    fn actions(&self, state: &Self::State, actions: &mut Vec<Self::Action>) {
        if state.terms >= self.term_count {
            return;
        }
        let is_first = state.terms == 0;
        actions.extend_from_slice(self.config().candidates(state.current, is_first));
    }

    fn next_state(&self, state: &Self::State, delta: Self::Action) -> Option<Self::State> {
        let config = self.config();
        let current = state.current + delta;
        if !config.in_range(current) {
            return None;
        }

        let mut progress = state.progress.clone();
        if state.terms > 0 {
            if let (Some(progress), Some(requirement)) = (progress.as_mut(), config.requirement) {
                progress.observe(&requirement, &Transition::new(state.current, delta));
            }
        }

        Some(DrillState {
            terms: state.terms + 1,
            current,
            progress,
        })
    }

    fn properties(&self) -> Vec<Property<Self>> {
        vec![
            Property::always("NoForbiddenTransition", |model: &Self, state: &DrillState| {
                state.no_forbidden_transition(model.config())
            }),
            Property::sometimes("Completes", |model: &Self, state: &DrillState| {
                state.terms == model.term_count && state.requirement_met(model.config())
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stateright::Checker;

    #[test]
    fn test_initial_state() {
        let model = DrillModel::new(ClassId::C3A, 5);
        let init = model.init_states();
        assert_eq!(init.len(), 1);
        assert_eq!(init[0].terms, 0);
        assert!(init[0].no_forbidden_transition(model.config()));
    }

    #[test]
    fn test_first_move_is_not_a_transition() {
        let model = DrillModel::new(ClassId::C3B, 2);
        let init = &model.init_states()[0];
        let placed = model.next_state(init, 15).unwrap();
        assert_eq!(placed.progress, init.progress);

        let borrowed = model.next_state(&placed, -7).unwrap();
        assert!(borrowed.requirement_met(model.config()));
    }

    #[test]
    fn test_out_of_range_moves_are_dropped() {
        let model = DrillModel::new(ClassId::C3E, 3);
        let state = DrillState {
            terms: 1,
            current: 15,
            progress: None,
        };
        assert!(model.next_state(&state, 7).is_none());
        assert!(model.next_state(&state, 4).is_some());
    }

    #[test]
    fn test_every_class_at_min_terms() {
        for class in ClassId::ALL {
            let model = DrillModel::new(class, class.config().min_terms);
            model
                .checker()
                .threads(1)
                .spawn_bfs()
                .join()
                .assert_properties();
        }
    }

    #[test]
    fn test_every_class_at_every_term_count() {
        for class in ClassId::ALL {
            let config = class.config();
            for term_count in config.min_terms..=config.max_terms {
                let checker = DrillModel::new(class, term_count)
                    .checker()
                    .threads(num_cpus::get())
                    .spawn_bfs()
                    .join();
                assert!(
                    checker.discovery("Completes").is_some(),
                    "class {} cannot complete {} terms",
                    class,
                    term_count
                );
                checker.assert_no_discovery("NoForbiddenTransition");
            }
        }
    }

    #[test]
    fn test_requirement_unreachable_below_min_terms() {
        // Three five-complements need three transitions.
        let checker = DrillModel::new(ClassId::C2D, 3)
            .checker()
            .threads(1)
            .spawn_bfs()
            .join();
        assert!(checker.discovery("Completes").is_none());
    }
}

//! Structural validation of complete sequences.
//!
//! [`validate`] is the generator's post-hoc check: the class requirement over
//! every transition. [`check_sequence`] audits a sequence from elsewhere (a
//! stored question, a hand-written drill) against everything a generated
//! sequence guarantees, one [`RuleResult`] per check.

use crate::problem::running_totals;
use crate::registry::ClassConfig;
use crate::rules::{transitions, Requirement, Transition};

/// Whether a built sequence satisfies its class's requirement.
///
/// `steps` must hold the running total after each term of `numbers`; slices
/// of different lengths never pass. Otherwise classes without a requirement
/// always pass.
pub fn validate(config: &ClassConfig, numbers: &[i32], steps: &[i32]) -> bool {
    if numbers.len() != steps.len() {
        return false;
    }
    match config.requirement {
        Some(requirement) => requirement.is_satisfied_by(transitions(numbers, steps)),
        None => true,
    }
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    pub name: String,
    pub holds: bool,
    pub violation: Option<String>,
}

impl RuleResult {
    #[must_use]
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holds: true,
            violation: None,
        }
    }

    #[must_use]
    pub fn fail(name: impl Into<String>, violation: String) -> Self {
        debug_assert!(
            !violation.is_empty(),
            "Violation description must not be empty"
        );
        Self {
            name: name.into(),
            holds: false,
            violation: Some(violation),
        }
    }

    /// Single-line status.
    #[must_use]
    pub fn format_status(&self) -> String {
        if self.holds {
            format!("[PASS] {}", self.name)
        } else {
            format!(
                "[FAIL] {}: {}",
                self.name,
                self.violation.as_deref().unwrap_or("unknown")
            )
        }
    }
}

/// Every check run by [`check_sequence`].
#[derive(Debug, Clone)]
pub struct SequenceReport {
    pub steps: Vec<i32>,
    pub results: Vec<RuleResult>,
}

impl SequenceReport {
    pub fn all_hold(&self) -> bool {
        self.results.iter().all(|r| r.holds)
    }

    pub fn first_failure(&self) -> Option<&RuleResult> {
        self.results.iter().find(|r| !r.holds)
    }

    #[must_use]
    pub fn format_report(&self) -> String {
        let passed = self.results.iter().filter(|r| r.holds).count();
        let mut report = format!(
            "Sequence check: {}/{} passed (steps {:?})\n",
            passed,
            self.results.len(),
            self.steps
        );
        for result in &self.results {
            report.push_str(&result.format_status());
            report.push('\n');
        }
        report
    }
}

/// Audit `numbers` against a class.
///
/// Checks term count, the first-term table, table legality of every later
/// term, the running-total range, and each requirement rule separately.
pub fn check_sequence(config: &ClassConfig, numbers: &[i32]) -> SequenceReport {
    let steps = running_totals(numbers);
    let mut results = Vec::new();

    results.push(match config.check_term_count(numbers.len()) {
        Ok(()) => RuleResult::pass("TermCount"),
        Err(e) => RuleResult::fail("TermCount", e.to_string()),
    });

    results.push(match numbers.first() {
        Some(first) if config.candidates(0, true).contains(first) => RuleResult::pass("FirstTerm"),
        Some(first) => RuleResult::fail(
            "FirstTerm",
            format!("{} is not a starting value for class {}", first, config.id),
        ),
        None => RuleResult::fail("FirstTerm", "sequence is empty".to_string()),
    });

    let illegal = transitions(numbers, &steps)
        .enumerate()
        .find(|(_, t)| !config.candidates(t.pre, false).contains(&t.delta));
    results.push(match illegal {
        None => RuleResult::pass("TableLegality"),
        Some((i, t)) => RuleResult::fail("TableLegality", describe_illegal(config, i + 2, &t)),
    });

    results.push(match steps.iter().position(|&s| !config.in_range(s)) {
        None => RuleResult::pass("WithinRange"),
        Some(i) => RuleResult::fail(
            "WithinRange",
            format!(
                "total {} after term {} outside [0, {}]",
                steps[i],
                i + 1,
                config.max_value
            ),
        ),
    });

    if let Some(requirement) = config.requirement {
        for rule in requirement.rules() {
            let single = Requirement::new(std::slice::from_ref(rule));
            let name = rule.to_string();
            results.push(if single.is_satisfied_by(transitions(numbers, &steps)) {
                RuleResult::pass(name)
            } else {
                RuleResult::fail(name, "not satisfied".to_string())
            });
        }
    }

    SequenceReport { steps, results }
}

fn describe_illegal(config: &ClassConfig, term: usize, t: &Transition) -> String {
    match t.kind() {
        Some(kind) => format!(
            "term {} ({}{:+}) is a {} move, not allowed in class {}",
            term,
            t.pre,
            t.delta,
            kind.description(),
            config.id
        ),
        None => format!(
            "term {} ({}{:+}) cannot be made on the beads",
            term, t.pre, t.delta
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::ClassId;

    #[test]
    fn test_validate_presence() {
        let config = ClassId::C2A.config();
        // 4 +1 is a five-complement addition
        assert!(validate(config, &[4, 1], &[4, 5]));
        // 3 +1 is direct
        assert!(!validate(config, &[3, 1], &[3, 4]));
    }

    #[test]
    fn test_validate_absence() {
        let config = ClassId::C1A.config();
        assert!(validate(config, &[3, 1, -2], &[3, 4, 2]));
        assert!(!validate(config, &[4, 1], &[4, 5]));
    }

    #[test]
    fn test_validate_without_requirement() {
        let config = ClassId::C3E.config();
        assert!(validate(config, &[1, 1, 1], &[1, 2, 3]));
    }

    #[test]
    fn test_validate_rejects_misaligned_steps() {
        // The carry 8 +3 is there, but steps stop short.
        assert!(!validate(ClassId::C3A.config(), &[8, 3], &[8]));
        assert!(!validate(ClassId::C3E.config(), &[1, 1], &[1, 2, 3]));
    }

    #[test]
    fn test_first_term_is_not_a_transition() {
        // 3B starts above ten; the placement itself is no borrow.
        let config = ClassId::C3B.config();
        assert!(!validate(config, &[15, 2], &[15, 17]));
        assert!(validate(config, &[15, -7], &[15, 8]));
    }

    #[test]
    fn test_check_sequence_passes() {
        let report = check_sequence(ClassId::C3A.config(), &[8, 3, -1]);
        assert!(report.all_hold(), "{}", report.format_report());
        assert_eq!(report.steps, vec![8, 11, 10]);
    }

    #[test]
    fn test_check_sequence_reports_illegal_move() {
        // 4 +1 needs a five-complement, which 1A does not teach.
        let report = check_sequence(ClassId::C1A.config(), &[4, 1]);
        assert!(!report.all_hold());
        let failure = report.first_failure().unwrap();
        assert_eq!(failure.name, "TableLegality");
        let violation = failure.violation.as_deref().unwrap();
        assert!(violation.contains("five-complement addition"));
        let text = report.format_report();
        assert!(text.contains("[FAIL] never crossing five upward"));
    }

    #[test]
    fn test_check_sequence_reports_range_and_count() {
        let report = check_sequence(ClassId::C3A.config(), &[9, 9, 5]);
        let failed: Vec<&str> = report
            .results
            .iter()
            .filter(|r| !r.holds)
            .map(|r| r.name.as_str())
            .collect();
        assert!(failed.contains(&"WithinRange"));

        let report = check_sequence(ClassId::C3A.config(), &[9]);
        assert_eq!(report.first_failure().unwrap().name, "TermCount");
    }

    #[test]
    fn test_check_sequence_empty() {
        let report = check_sequence(ClassId::C1B.config(), &[]);
        assert!(!report.all_hold());
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_format_status() {
        assert!(RuleResult::pass("X").format_status().starts_with("[PASS]"));
        let failed = RuleResult::fail("X", "bad".to_string());
        assert!(failed.format_status().contains("bad"));
    }
}

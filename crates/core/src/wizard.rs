//! Registration wizard step definitions, gating rules, and navigation.
//!
//! The wizard walks a candidate through seven steps. Steps 1-6 each persist
//! their own child records; step 7 (Review) is terminal and only submits.
//! Which steps are "completed" is always derived from the presence of those
//! child records, never stored on the application row, so the derivation
//! here can be exercised without a live database.

use std::collections::BTreeSet;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The seven steps of the registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    PersonalInfo,
    OtherDetails,
    Education,
    Experience,
    Documents,
    Payment,
    Review,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 7;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 7;

/// Highest step that can be marked "completed" (Review never completes).
pub const MAX_COMPLETABLE_STEP: u8 = 6;

/// The payment step number, which gates progression to Review.
pub const PAYMENT_STEP: u8 = 6;

impl RegistrationStep {
    /// Convert a 1-based step number to a `RegistrationStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::PersonalInfo),
            2 => Ok(Self::OtherDetails),
            3 => Ok(Self::Education),
            4 => Ok(Self::Experience),
            5 => Ok(Self::Documents),
            6 => Ok(Self::Payment),
            7 => Ok(Self::Review),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::OtherDetails => 2,
            Self::Education => 3,
            Self::Experience => 4,
            Self::Documents => 5,
            Self::Payment => 6,
            Self::Review => 7,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::OtherDetails => "Other Details",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Documents => "Documents",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }
}

// ---------------------------------------------------------------------------
// Completed-step derivation
// ---------------------------------------------------------------------------

/// Presence of the per-step child records for one candidate's application.
///
/// Loaded by the database layer in a single pass; the wizard derives the
/// completed-step set from these flags rather than trusting anything the
/// client remembers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepRecords {
    /// A `personal_info` row exists (step 1).
    pub has_personal_info: bool,
    /// An `other_details` row exists (step 2).
    pub has_other_details: bool,
    /// At least one `educational_qualifications` row exists (step 3).
    pub education_rows: u32,
    /// At least one `experience_info` row exists (step 4).
    pub experience_rows: u32,
    /// At least one `documents` row exists (step 5).
    pub document_rows: u32,
    /// The latest payment row has status "completed" (step 6).
    pub payment_completed: bool,
}

impl StepRecords {
    /// Derive the set of completed step numbers (subset of 1..=6).
    pub fn completed_steps(&self) -> BTreeSet<u8> {
        let mut completed = BTreeSet::new();
        if self.has_personal_info {
            completed.insert(1);
        }
        if self.has_other_details {
            completed.insert(2);
        }
        if self.education_rows > 0 {
            completed.insert(3);
        }
        if self.experience_rows > 0 {
            completed.insert(4);
        }
        if self.document_rows > 0 {
            completed.insert(5);
        }
        if self.payment_completed {
            completed.insert(6);
        }
        completed
    }
}

/// The furthest completed step, or 0 when nothing is completed.
pub fn max_completed(completed: &BTreeSet<u8>) -> u8 {
    completed.iter().copied().max().unwrap_or(0)
}

/// Derive the step the candidate should land on after (re)loading data.
///
/// All six completable steps done plus a completed (or exempted) payment
/// puts the candidate on Review; otherwise the first step after the
/// furthest completed one, clamped to the payment step.
pub fn derive_current_step(completed: &BTreeSet<u8>, payment_completed: bool) -> u8 {
    let max = max_completed(completed);
    if max >= MAX_COMPLETABLE_STEP && payment_completed {
        MAX_STEP
    } else {
        (max + 1).min(MAX_COMPLETABLE_STEP)
    }
}

/// The furthest step a candidate may navigate to.
///
/// One past the furthest completed step, treating step 1 as always reachable.
pub fn max_reachable_step(completed: &BTreeSet<u8>) -> u8 {
    max_completed(completed).max(1) + 1
}

// ---------------------------------------------------------------------------
// Wizard controller
// ---------------------------------------------------------------------------

/// In-memory navigation state for one candidate's registration wizard.
///
/// Owns `current_step` and answers navigation requests against the derived
/// completed-step set. Rebuilt from [`StepRecords`] whenever fresh data is
/// loaded, so a stale client can never unlock a step the store disagrees
/// with.
#[derive(Debug, Clone)]
pub struct WizardController {
    current_step: u8,
    completed_steps: BTreeSet<u8>,
    payment_completed: bool,
}

impl WizardController {
    /// Build the controller from freshly loaded step records.
    pub fn from_records(records: &StepRecords) -> Self {
        let completed_steps = records.completed_steps();
        let payment_completed = records.payment_completed;
        let current_step = derive_current_step(&completed_steps, payment_completed);
        Self {
            current_step,
            completed_steps,
            payment_completed,
        }
    }

    /// The step the candidate is currently on (1..=7).
    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    /// The derived completed-step set (subset of 1..=6).
    pub fn completed_steps(&self) -> &BTreeSet<u8> {
        &self.completed_steps
    }

    /// Whether the latest payment is completed (or exempted).
    pub fn payment_completed(&self) -> bool {
        self.payment_completed
    }

    /// Navigate directly to step `n`.
    ///
    /// Allowed iff `n` is no further than one past the furthest completed
    /// step. A rejected jump leaves `current_step` unchanged.
    pub fn go_to_step(&mut self, n: u8) -> Result<(), CoreError> {
        if n < MIN_STEP || n > MAX_STEP {
            return Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            )));
        }
        if n > max_reachable_step(&self.completed_steps) {
            return Err(CoreError::Forbidden(
                "Please complete the previous steps before proceeding".to_string(),
            ));
        }
        self.current_step = n;
        Ok(())
    }

    /// Advance to the next step.
    ///
    /// From the payment step this is only permitted once payment is
    /// completed (or the candidate's category is exempt). From Review there
    /// is nowhere to go.
    pub fn next(&mut self) -> Result<(), CoreError> {
        match self.current_step {
            s if s < PAYMENT_STEP => {
                if !self.completed_steps.contains(&s) {
                    return Err(CoreError::Forbidden(
                        "Save the current step before proceeding".to_string(),
                    ));
                }
                self.current_step = s + 1;
                Ok(())
            }
            PAYMENT_STEP => {
                if !self.payment_completed {
                    return Err(CoreError::Forbidden(
                        "Please complete the payment to proceed".to_string(),
                    ));
                }
                self.current_step = MAX_STEP;
                Ok(())
            }
            _ => Err(CoreError::Validation(
                "Already on the final step".to_string(),
            )),
        }
    }

    /// Go back one step; never goes below step 1 and is always allowed.
    pub fn previous(&mut self) {
        if self.current_step > MIN_STEP {
            self.current_step -= 1;
        }
    }

    /// Whether the application may be submitted from the current position.
    pub fn can_submit(&self) -> bool {
        self.current_step == MAX_STEP
            && max_completed(&self.completed_steps) >= MAX_COMPLETABLE_STEP
            && self.payment_completed
    }
}

// ---------------------------------------------------------------------------
// Application number
// ---------------------------------------------------------------------------

/// Generate the human-readable application number assigned at submission.
///
/// Format: `REG<year><7-digit suffix of the unix millisecond clock>`,
/// e.g. `REG20261234567`.
pub fn generate_application_number(now: Timestamp) -> String {
    use chrono::Datelike;
    let year = now.year();
    let suffix = now.timestamp_millis().rem_euclid(10_000_000);
    format!("REG{year}{suffix:07}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn completed(steps: &[u8]) -> BTreeSet<u8> {
        steps.iter().copied().collect()
    }

    fn controller(steps: &[u8], payment_completed: bool) -> WizardController {
        WizardController {
            current_step: derive_current_step(&completed(steps), payment_completed),
            completed_steps: completed(steps),
            payment_completed,
        }
    }

    // -- RegistrationStep --

    #[test]
    fn step_from_number_roundtrip() {
        for n in MIN_STEP..=MAX_STEP {
            let step = RegistrationStep::from_number(n).unwrap();
            assert_eq!(step.to_number(), n);
            assert!(!step.label().is_empty());
        }
    }

    #[test]
    fn step_from_number_invalid() {
        assert!(RegistrationStep::from_number(0).is_err());
        assert!(RegistrationStep::from_number(8).is_err());
        assert!(RegistrationStep::from_number(255).is_err());
    }

    // -- StepRecords derivation --

    #[test]
    fn no_records_means_no_completed_steps() {
        assert!(StepRecords::default().completed_steps().is_empty());
    }

    #[test]
    fn each_record_maps_to_its_step() {
        let records = StepRecords {
            has_personal_info: true,
            has_other_details: false,
            education_rows: 2,
            experience_rows: 0,
            document_rows: 1,
            payment_completed: false,
        };
        assert_eq!(records.completed_steps(), completed(&[1, 3, 5]));
    }

    #[test]
    fn completed_payment_marks_step_six() {
        let records = StepRecords {
            has_personal_info: true,
            has_other_details: true,
            education_rows: 1,
            experience_rows: 1,
            document_rows: 1,
            payment_completed: true,
        };
        assert_eq!(records.completed_steps(), completed(&[1, 2, 3, 4, 5, 6]));
    }

    // -- derive_current_step --

    #[test]
    fn fresh_application_starts_on_step_one() {
        assert_eq!(derive_current_step(&completed(&[]), false), 1);
    }

    #[test]
    fn five_completed_without_payment_lands_on_six() {
        assert_eq!(derive_current_step(&completed(&[1, 2, 3, 4, 5]), false), 6);
    }

    #[test]
    fn six_completed_with_payment_lands_on_review() {
        assert_eq!(
            derive_current_step(&completed(&[1, 2, 3, 4, 5, 6]), true),
            7
        );
    }

    #[test]
    fn six_completed_without_payment_stays_on_six() {
        // The derived set should never contain 6 without a completed
        // payment, but the clamp holds regardless.
        assert_eq!(derive_current_step(&completed(&[1, 2, 3, 4, 5, 6]), false), 6);
    }

    #[test]
    fn gaps_do_not_matter_only_max_does() {
        assert_eq!(derive_current_step(&completed(&[1, 4]), false), 5);
    }

    // -- go_to_step gating --

    #[test]
    fn go_to_step_allowed_iff_within_reach() {
        // Property: for all completed sets, go_to_step(n) succeeds iff
        // n <= max(completed ∪ {1}) + 1.
        let cases: &[&[u8]] = &[&[], &[1], &[1, 2], &[1, 2, 3], &[1, 2, 3, 4, 5], &[2, 3]];
        for steps in cases {
            let limit = steps.iter().copied().max().unwrap_or(1).max(1) + 1;
            for n in MIN_STEP..=MAX_STEP {
                let mut wizard = controller(steps, false);
                let before = wizard.current_step();
                let result = wizard.go_to_step(n);
                if n <= limit {
                    assert!(result.is_ok(), "step {n} should be reachable for {steps:?}");
                    assert_eq!(wizard.current_step(), n);
                } else {
                    assert!(result.is_err(), "step {n} should be locked for {steps:?}");
                    assert_eq!(wizard.current_step(), before, "rejected jump must not move");
                }
            }
        }
    }

    #[test]
    fn go_to_step_rejects_out_of_range() {
        let mut wizard = controller(&[1, 2, 3, 4, 5], false);
        assert!(wizard.go_to_step(0).is_err());
        assert!(wizard.go_to_step(8).is_err());
    }

    // -- next --

    #[test]
    fn next_advances_over_completed_step() {
        let mut wizard = controller(&[1], false);
        wizard.go_to_step(1).unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn next_blocked_on_unsaved_step() {
        let mut wizard = controller(&[1], false);
        wizard.go_to_step(2).unwrap();
        assert!(wizard.next().is_err());
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn next_from_payment_step_requires_completed_payment() {
        let mut wizard = controller(&[1, 2, 3, 4, 5], false);
        assert_eq!(wizard.current_step(), 6);
        let err = wizard.next();
        assert!(err.is_err());
        assert_eq!(wizard.current_step(), 6, "rejection must not change state");
    }

    #[test]
    fn next_from_payment_step_with_payment_reaches_review() {
        let mut wizard = controller(&[1, 2, 3, 4, 5, 6], true);
        wizard.go_to_step(6).unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.current_step(), 7);
    }

    #[test]
    fn next_from_review_is_rejected() {
        let mut wizard = controller(&[1, 2, 3, 4, 5, 6], true);
        assert_eq!(wizard.current_step(), 7);
        assert!(wizard.next().is_err());
    }

    // -- previous --

    #[test]
    fn previous_never_goes_below_one() {
        let mut wizard = controller(&[], false);
        assert_eq!(wizard.current_step(), 1);
        wizard.previous();
        assert_eq!(wizard.current_step(), 1);

        let mut wizard = controller(&[1, 2, 3, 4, 5, 6], true);
        for _ in 0..20 {
            wizard.previous();
        }
        assert_eq!(wizard.current_step(), 1);
    }

    // -- can_submit --

    #[test]
    fn submit_only_reachable_from_review() {
        let mut wizard = controller(&[1, 2, 3, 4, 5, 6], true);
        assert_eq!(wizard.current_step(), 7);
        assert!(wizard.can_submit());

        wizard.previous();
        assert!(!wizard.can_submit());
    }

    #[test]
    fn submit_blocked_without_payment() {
        let wizard = controller(&[1, 2, 3, 4, 5], false);
        assert!(!wizard.can_submit());
    }

    // -- application number --

    #[test]
    fn application_number_matches_pattern() {
        let now = chrono::Utc.with_ymd_and_hms(2026, 8, 27, 12, 30, 45).unwrap();
        let number = generate_application_number(now);
        let re = regex::Regex::new(r"^REG\d{4}\d{7}$").unwrap();
        assert!(re.is_match(&number), "got {number}");
        assert!(number.starts_with("REG2026"));
    }

    #[test]
    fn application_number_suffix_is_zero_padded() {
        // A timestamp whose millisecond clock ends in a small remainder
        // must still produce exactly seven suffix digits.
        let now = chrono::Utc.timestamp_millis_opt(1_780_000_000_042).unwrap();
        let number = generate_application_number(now);
        assert_eq!(number.len(), "REG".len() + 4 + 7);
    }
}

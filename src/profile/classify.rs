//! Conformance classification
//!
//! Evaluates the membership conditions over an [`AdaptorProfile`].
//! Classification never fails: every violated condition becomes a diagnostic
//! in the report, and the overall answer stays a boolean query
//! ([`ClassifyReport::is_adaptor`]).
//!
//! The conditions, one rule each:
//! 1. the subject is a concrete owned type;
//! 2. the subject claims the mark for itself;
//! 3. the subject claims no foreign marks;
//! 4. the subject is not itself a sequence;
//! 5. the subject accepts at least one sequence type.

use serde::Serialize;

use super::errors::{ClaimError, ErrorCode};
use super::{AdaptorProfile, Profiled, Shape};

macro_rules! trace_rule {
    ($rule:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("classify_rule", rule = $rule).entered();
    };
}

// ============================================================================
// Severity and diagnostics
// ============================================================================

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The condition is violated; the subject is not an adaptor.
    Error,
    /// Suspicious but non-disqualifying.
    Warning,
}

/// One finding of one rule.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Whether this finding disqualifies the subject.
    pub severity: Severity,
    /// The underlying violation.
    #[serde(flatten)]
    pub error: ClaimError,
}

impl Diagnostic {
    /// An error-severity finding.
    pub fn error(error: ClaimError) -> Self {
        Diagnostic {
            severity: Severity::Error,
            error,
        }
    }

    /// A warning-severity finding.
    pub fn warning(error: ClaimError) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            error,
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of classifying one profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassifyReport {
    diagnostics: Vec<Diagnostic>,
}

impl ClassifyReport {
    /// Empty report; classifies as conforming.
    pub fn new() -> Self {
        ClassifyReport {
            diagnostics: Vec::new(),
        }
    }

    /// All findings, in rule order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Error-severity findings only.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Warning-severity findings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Whether any condition is violated outright.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// The membership answer: no error-severity findings.
    pub fn is_adaptor(&self) -> bool {
        !self.has_errors()
    }

    /// Whether a specific violation was found.
    pub fn has(&self, code: ErrorCode) -> bool {
        self.diagnostics.iter().any(|d| d.error.code == code)
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the report is clean.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ============================================================================
// Rules
// ============================================================================

/// A single membership condition.
pub trait ClassifyRule: Send + Sync {
    /// Rule name for reporting and tracing.
    fn name(&self) -> &str;

    /// Evaluate the condition; an empty result means satisfied.
    fn check(&self, profile: &AdaptorProfile) -> Vec<Diagnostic>;
}

/// Condition 1: the subject is a concrete owned type.
pub struct OwnedSubjectRule;

impl ClassifyRule for OwnedSubjectRule {
    fn name(&self) -> &str {
        "owned_subject"
    }

    fn check(&self, profile: &AdaptorProfile) -> Vec<Diagnostic> {
        if profile.shape() == Shape::Owned {
            return Vec::new();
        }
        vec![Diagnostic::error(
            ClaimError::new(
                ErrorCode::BorrowedSubject,
                profile.subject().name(),
                format!("subject is described as {}", profile.shape().as_str()),
            )
            .with_hint("describe the adaptor as its concrete owned type"),
        )]
    }
}

/// Condition 2: the subject claims the mark for itself.
pub struct SelfClaimRule;

impl ClassifyRule for SelfClaimRule {
    fn name(&self) -> &str {
        "self_claim"
    }

    fn check(&self, profile: &AdaptorProfile) -> Vec<Diagnostic> {
        let subject = profile.subject();
        if profile.claims().iter().any(|c| c.id() == subject.id()) {
            return Vec::new();
        }
        vec![Diagnostic::error(
            ClaimError::new(
                ErrorCode::MissingSelfClaim,
                subject.name(),
                "no mark claimed for the subject itself",
            )
            .with_hint("declare the type with declare_adaptor! or implement its self-mark"),
        )]
    }
}

/// Condition 3: no marks for other types. Duplicate self-claims are
/// harmless, so they only warn.
pub struct SoleClaimRule;

impl ClassifyRule for SoleClaimRule {
    fn name(&self) -> &str {
        "sole_claim"
    }

    fn check(&self, profile: &AdaptorProfile) -> Vec<Diagnostic> {
        let subject = profile.subject();
        let mut diagnostics = Vec::new();
        for claim in profile.claims() {
            if claim.id() != subject.id() {
                diagnostics.push(Diagnostic::error(
                    ClaimError::new(
                        ErrorCode::ForeignClaim,
                        subject.name(),
                        format!("claims the mark for {}", claim.name()),
                    )
                    .with_hint("an adaptor claims exactly its own mark"),
                ));
            }
        }
        let self_claims = profile
            .claims()
            .iter()
            .filter(|c| c.id() == subject.id())
            .count();
        if self_claims > 1 {
            diagnostics.push(Diagnostic::warning(ClaimError::new(
                ErrorCode::DuplicateClaim,
                subject.name(),
                format!("self-mark recorded {self_claims} times"),
            )));
        }
        diagnostics
    }
}

/// Condition 4: the subject is not itself a sequence.
pub struct NotSequenceRule;

impl ClassifyRule for NotSequenceRule {
    fn name(&self) -> &str {
        "not_sequence"
    }

    fn check(&self, profile: &AdaptorProfile) -> Vec<Diagnostic> {
        if !profile.is_sequence() {
            return Vec::new();
        }
        vec![Diagnostic::error(
            ClaimError::new(
                ErrorCode::SubjectIsSequence,
                profile.subject().name(),
                "subject iterates, so it sits on the sequence side of the pipe",
            )
            .with_hint("split the sequence behavior and the adaptor behavior into two types"),
        )]
    }
}

/// Condition 5: the subject accepts at least one sequence type.
pub struct AcceptsSequenceRule;

impl ClassifyRule for AcceptsSequenceRule {
    fn name(&self) -> &str {
        "accepts_sequence"
    }

    fn check(&self, profile: &AdaptorProfile) -> Vec<Diagnostic> {
        if !profile.accepts().is_empty() {
            return Vec::new();
        }
        vec![Diagnostic::error(
            ClaimError::new(
                ErrorCode::NoSequenceInput,
                profile.subject().name(),
                "no accepted sequence type recorded",
            )
            .with_hint("record a witness with ProfileBuilder::accepts"),
        )]
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Evaluates a rule set over profiles.
pub struct Classifier {
    rules: Vec<Box<dyn ClassifyRule>>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Classifier {
    /// An engine with no rules; classifies everything as conforming.
    pub fn new() -> Self {
        Classifier { rules: Vec::new() }
    }

    /// An engine with the five membership conditions installed.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(OwnedSubjectRule));
        engine.add_rule(Box::new(SelfClaimRule));
        engine.add_rule(Box::new(SoleClaimRule));
        engine.add_rule(Box::new(NotSequenceRule));
        engine.add_rule(Box::new(AcceptsSequenceRule));
        engine
    }

    /// Install an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ClassifyRule>) {
        self.rules.push(rule);
    }

    /// Evaluate every rule over `profile`.
    pub fn classify(&self, profile: &AdaptorProfile) -> ClassifyReport {
        let mut report = ClassifyReport::new();
        for rule in &self.rules {
            trace_rule!(rule.name());
            report.diagnostics.extend(rule.check(profile));
        }
        report
    }
}

/// Classify `T` with the default rules.
///
/// The whole classification as one boolean, composable with ordinary logic:
///
/// ```
/// use seqpipe::profile::classify::conforms;
/// use seqpipe::{Skip, Take};
///
/// assert!(conforms::<Take>() && conforms::<Skip>());
/// ```
pub fn conforms<T: Profiled>() -> bool {
    Classifier::with_defaults()
        .classify(&T::profile())
        .is_adaptor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptors::Take;
    use crate::apply::ApplyOnce;
    use crate::closure::AdaptorMark;

    // ─── fixtures ───────────────────────────────────────────────────────────

    // Callable on sequences but never claims any mark.
    #[derive(Debug, Clone, Copy)]
    struct Unclaimed;

    impl ApplyOnce<Vec<i32>> for Unclaimed {
        type Output = usize;

        fn apply_once(self, seq: Vec<i32>) -> usize {
            seq.len()
        }
    }

    // Claims a mark, but for another type.
    #[derive(Debug, Clone, Copy)]
    struct WrongTarget;

    #[derive(Debug, Clone, Copy)]
    struct Innocent;

    impl AdaptorMark<Innocent> for WrongTarget {}

    impl ApplyOnce<Vec<i32>> for WrongTarget {
        type Output = usize;

        fn apply_once(self, seq: Vec<i32>) -> usize {
            seq.len()
        }
    }

    // Claims its own mark and a foreign one on top.
    #[derive(Debug, Clone, Copy)]
    struct Greedy;

    impl AdaptorMark<Greedy> for Greedy {}
    impl AdaptorMark<Innocent> for Greedy {}

    impl ApplyOnce<Vec<i32>> for Greedy {
        type Output = usize;

        fn apply_once(self, seq: Vec<i32>) -> usize {
            seq.len()
        }
    }

    // A marked, callable type that also iterates.
    #[derive(Debug, Clone, Copy)]
    struct Iterant;

    impl Iterator for Iterant {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            None
        }
    }

    impl AdaptorMark<Iterant> for Iterant {}

    impl ApplyOnce<Vec<i32>> for Iterant {
        type Output = usize;

        fn apply_once(self, seq: Vec<i32>) -> usize {
            seq.len()
        }
    }

    // Marked but with no sequence input at all.
    #[derive(Debug, Clone, Copy)]
    struct Picky;

    impl AdaptorMark<Picky> for Picky {}

    fn engine() -> Classifier {
        Classifier::with_defaults()
    }

    // ─── per-condition flips ────────────────────────────────────────────────

    #[test]
    fn test_conforming_profile_classifies_true() {
        let report = engine().classify(&Take::profile());
        assert!(report.is_adaptor());
        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_self_claim_flips() {
        let profile = AdaptorProfile::describe::<Unclaimed>()
            .accepts::<Vec<i32>>()
            .finish();
        let report = engine().classify(&profile);
        assert!(!report.is_adaptor());
        assert!(report.has(ErrorCode::MissingSelfClaim));
        assert!(!report.has(ErrorCode::ForeignClaim));
    }

    #[test]
    fn test_wrong_target_claim_flips() {
        let profile = AdaptorProfile::describe::<WrongTarget>()
            .claim::<Innocent>()
            .accepts::<Vec<i32>>()
            .finish();
        let report = engine().classify(&profile);
        assert!(!report.is_adaptor());
        assert!(report.has(ErrorCode::MissingSelfClaim));
        assert!(report.has(ErrorCode::ForeignClaim));
    }

    #[test]
    fn test_extra_foreign_claim_flips() {
        let profile = AdaptorProfile::describe::<Greedy>()
            .claim::<Greedy>()
            .claim::<Innocent>()
            .accepts::<Vec<i32>>()
            .finish();
        let report = engine().classify(&profile);
        assert!(!report.is_adaptor());
        assert!(report.has(ErrorCode::ForeignClaim));
        assert!(!report.has(ErrorCode::MissingSelfClaim));
    }

    #[test]
    fn test_sequence_subject_flips() {
        let profile = AdaptorProfile::describe::<Iterant>()
            .claim::<Iterant>()
            .sequence()
            .accepts::<Vec<i32>>()
            .finish();
        let report = engine().classify(&profile);
        assert!(!report.is_adaptor());
        assert!(report.has(ErrorCode::SubjectIsSequence));
    }

    #[test]
    fn test_no_accepted_sequence_flips() {
        let profile = AdaptorProfile::describe::<Picky>().claim::<Picky>().finish();
        let report = engine().classify(&profile);
        assert!(!report.is_adaptor());
        assert!(report.has(ErrorCode::NoSequenceInput));
    }

    #[test]
    fn test_borrowed_shapes_flip() {
        let shared = AdaptorProfile::describe::<Take>()
            .claim::<Take>()
            .accepts::<Vec<i32>>()
            .via_shared()
            .finish();
        assert!(!engine().classify(&shared).is_adaptor());

        let exclusive = AdaptorProfile::describe::<Take>()
            .claim::<Take>()
            .accepts::<Vec<i32>>()
            .via_exclusive()
            .finish();
        let report = engine().classify(&exclusive);
        assert!(!report.is_adaptor());
        assert!(report.has(ErrorCode::BorrowedSubject));
    }

    #[test]
    fn test_duplicate_self_claim_warns_without_disqualifying() {
        let profile = AdaptorProfile::describe::<Take>()
            .claim::<Take>()
            .claim::<Take>()
            .accepts::<Vec<i32>>()
            .finish();
        let report = engine().classify(&profile);
        assert!(report.is_adaptor());
        assert!(report.has(ErrorCode::DuplicateClaim));
        assert_eq!(report.warnings().count(), 1);
        assert_eq!(report.errors().count(), 0);
    }

    #[test]
    fn test_violations_accumulate() {
        let profile = AdaptorProfile::describe::<Iterant>()
            .sequence()
            .via_shared()
            .finish();
        let report = engine().classify(&profile);
        assert!(!report.is_adaptor());
        assert!(report.len() >= 3);
        assert!(report.has(ErrorCode::BorrowedSubject));
        assert!(report.has(ErrorCode::MissingSelfClaim));
        assert!(report.has(ErrorCode::SubjectIsSequence));
        assert!(report.has(ErrorCode::NoSequenceInput));
    }

    // ─── engine behavior ────────────────────────────────────────────────────

    #[test]
    fn test_empty_engine_accepts_anything() {
        let profile = AdaptorProfile::describe::<Picky>().via_shared().finish();
        let report = Classifier::new().classify(&profile);
        assert!(report.is_adaptor());
        assert!(report.is_empty());
    }

    #[test]
    fn test_custom_rule_participates() {
        struct ShortNameRule;

        impl ClassifyRule for ShortNameRule {
            fn name(&self) -> &str {
                "short_name"
            }

            fn check(&self, profile: &AdaptorProfile) -> Vec<Diagnostic> {
                if profile.subject().name().len() < 200 {
                    return Vec::new();
                }
                vec![Diagnostic::warning(ClaimError::new(
                    ErrorCode::DuplicateClaim,
                    profile.subject().name(),
                    "name is unreasonably long",
                ))]
            }
        }

        let mut engine = engine();
        engine.add_rule(Box::new(ShortNameRule));
        let report = engine.classify(&Take::profile());
        assert!(report.is_adaptor());
    }

    #[test]
    fn test_conforms_predicate() {
        struct UnclaimedByProfile;

        impl ApplyOnce<Vec<i32>> for UnclaimedByProfile {
            type Output = usize;

            fn apply_once(self, seq: Vec<i32>) -> usize {
                seq.len()
            }
        }

        impl Profiled for UnclaimedByProfile {
            fn profile() -> AdaptorProfile {
                AdaptorProfile::describe::<UnclaimedByProfile>()
                    .accepts::<Vec<i32>>()
                    .finish()
            }
        }

        assert!(conforms::<Take>());
        assert!(!conforms::<UnclaimedByProfile>());
    }

    // ─── serialization ──────────────────────────────────────────────────────

    #[test]
    fn test_report_serializes_to_json() {
        let profile = AdaptorProfile::describe::<Picky>().claim::<Picky>().finish();
        let report = engine().classify(&profile);
        let json = serde_json::to_value(&report).unwrap();
        let first = &json["diagnostics"][0];
        assert_eq!(first["severity"], "error");
        assert_eq!(first["code"], "no_sequence_input");
        assert!(first["message"].as_str().unwrap().contains("no accepted"));
    }
}

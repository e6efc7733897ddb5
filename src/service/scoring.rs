//! Load scoring and classification
//!
//! Two formulas exist. [`ScoringModel::Weighted`] is the default; the
//! [`ScoringModel::Margin`] model reproduces the older API endpoint. They are
//! never mixed within one classification.

use crate::model::{
    AnswerSet, ClassificationResult, LoadCategory, LoadScores, ScoringModel, Severity,
};

/// Scores at or above this are `high` under the weighted model
const WEIGHTED_HIGH_THRESHOLD: f64 = 70.0;
/// Scores below this are `low` under the weighted model
const WEIGHTED_LOW_THRESHOLD: f64 = 45.0;
/// Scores at or above this are `high` under the margin model
const MARGIN_HIGH_THRESHOLD: f64 = 65.0;
/// Lead emotional needs over the current leader under the margin model
const EMOTIONAL_MARGIN: f64 = 5.0;
/// Answers at or above this count as "often true" for the flag questions
const FLAG_THRESHOLD: f64 = 2.0;

/// Classify an answer set with the given model
pub fn classify(answers: &AnswerSet, model: ScoringModel) -> ClassificationResult {
    let result = match model {
        ScoringModel::Weighted => classify_weighted(answers),
        ScoringModel::Margin => classify_margin(answers),
    };

    tracing::debug!(
        model = ?model,
        dominant = %result.dominant,
        secondary = %result.secondary,
        severity = %result.severity,
        recovery = result.recovery,
        reframe = result.reframe,
        "Classified answer set"
    );

    result
}

/// Per-category scores under the weighted model.
///
/// decision is in [0, 100], cognitive in [0, 110] and emotional in [0, 115]
/// for answers within the 0..=3 scale.
pub fn weighted_scores(answers: &AnswerSet) -> LoadScores {
    let q = |id: &str| answers.get(id);

    let decision = (q("q1") / 3.0) * 100.0;

    let cognitive_raw = q("q2") + q("q3") + q("q5") + q("q8");
    let emotional_raw = q("q4") + q("q9");

    let mut cognitive = (cognitive_raw / 12.0) * 100.0;
    let mut emotional = (emotional_raw / 6.0) * 100.0;

    let responsibility_factor = q("q6") / 3.0;
    cognitive += responsibility_factor * 10.0;
    emotional += responsibility_factor * 15.0;

    LoadScores {
        decision,
        cognitive,
        emotional,
    }
}

pub fn classify_weighted(answers: &AnswerSet) -> ClassificationResult {
    let ranked = weighted_scores(answers).ranked();
    let (dominant, max) = ranked[0];
    let (secondary, _) = ranked[1];

    let severity = promote_for_recovery(weighted_severity(max), answers);

    ClassificationResult {
        dominant,
        secondary,
        severity,
        recovery: recovery_flag(answers),
        reframe: reframe_flag(answers),
    }
}

/// Severity bucket for the dominant score under the weighted model
pub fn weighted_severity(max: f64) -> Severity {
    let mut severity = Severity::Moderate;
    if max >= WEIGHTED_HIGH_THRESHOLD {
        severity = Severity::High;
    }
    if max < WEIGHTED_LOW_THRESHOLD {
        severity = Severity::Low;
    }
    severity
}

/// Per-category scores under the margin model: responsibility is folded into
/// the raw sums at half weight before normalizing.
pub fn margin_scores(answers: &AnswerSet) -> LoadScores {
    let q = |id: &str| answers.get(id);

    let decision = (q("q1") / 3.0) * 100.0;

    let cognitive_raw = q("q2") + q("q3") + q("q5") + q("q8") + (q("q6") * 0.5);
    let cognitive = (cognitive_raw / 12.0) * 100.0;

    let emotional_raw = q("q4") + q("q9") + (q("q6") * 0.5);
    let emotional = (emotional_raw / 6.0) * 100.0;

    LoadScores {
        decision,
        cognitive,
        emotional,
    }
}

pub fn classify_margin(answers: &AnswerSet) -> ClassificationResult {
    let scores = margin_scores(answers);

    let mut dominant = LoadCategory::Cognitive;
    let mut max = scores.cognitive;

    if scores.decision > max {
        dominant = LoadCategory::Decision;
        max = scores.decision;
    }

    if scores.emotional > max + EMOTIONAL_MARGIN {
        dominant = LoadCategory::Emotional;
        max = scores.emotional;
    }

    // The margin model has no ranking of its own; take the stronger of the rest
    let secondary = scores
        .ranked()
        .into_iter()
        .map(|(category, _)| category)
        .find(|category| *category != dominant)
        .unwrap_or(LoadCategory::Decision);

    let severity = promote_for_recovery(margin_severity(max), answers);

    ClassificationResult {
        dominant,
        secondary,
        severity,
        recovery: recovery_flag(answers),
        reframe: reframe_flag(answers),
    }
}

/// Severity bucket under the margin model. Never `low`.
pub fn margin_severity(max: f64) -> Severity {
    if max >= MARGIN_HIGH_THRESHOLD {
        Severity::High
    } else {
        Severity::Moderate
    }
}

/// Little downtime pushes a moderate load to high
fn promote_for_recovery(severity: Severity, answers: &AnswerSet) -> Severity {
    if recovery_flag(answers) && severity == Severity::Moderate {
        Severity::High
    } else {
        severity
    }
}

fn recovery_flag(answers: &AnswerSet) -> bool {
    answers.get("q7") >= FLAG_THRESHOLD
}

fn reframe_flag(answers: &AnswerSet) -> bool {
    answers.get("q10") >= FLAG_THRESHOLD
}

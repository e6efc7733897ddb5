//! Turns a classification into page content

use serde::Serialize;

use crate::model::copy::{self, ChangeBlock};
use crate::model::{BreakdownData, ClassificationResult, LoadCategory, Severity};
use crate::service::transport;

pub const BREAKDOWN_PATH: &str = "/breakdown";

/// Content of the results snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub summary: &'static str,
    pub dominant: LoadCategory,
    pub severity: Severity,
    /// Link to the breakdown carrying the full classification
    pub breakdown_link: String,
    pub result: ClassificationResult,
}

/// Content of the full breakdown
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownView {
    pub dominant_label: &'static str,
    pub headline: &'static str,
    pub body: &'static [&'static str],
}

pub fn summarize(result: &ClassificationResult) -> Result<SummaryView, serde_json::Error> {
    Ok(SummaryView {
        summary: copy::result_copy(result.dominant, result.severity),
        dominant: result.dominant,
        severity: result.severity,
        breakdown_link: transport::data_link(BREAKDOWN_PATH, result)?,
        result: *result,
    })
}

pub fn breakdown(data: &BreakdownData) -> BreakdownView {
    let ChangeBlock { headline, body } = *change_block(data.dominant, data.secondary);

    BreakdownView {
        dominant_label: copy::load_label(data.dominant),
        headline,
        body,
    }
}

/// Variant for (dominant, secondary), or the dominant category's default
pub fn change_block(
    dominant: LoadCategory,
    secondary: Option<LoadCategory>,
) -> &'static ChangeBlock {
    let group = copy::change_the_math(dominant);
    match secondary {
        Some(secondary) => group.variant_or_default(secondary),
        None => &group.default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(dominant: LoadCategory, secondary: LoadCategory) -> ClassificationResult {
        ClassificationResult {
            dominant,
            secondary,
            severity: Severity::Moderate,
            recovery: false,
            reframe: false,
        }
    }

    fn data(dominant: LoadCategory, secondary: Option<LoadCategory>) -> BreakdownData {
        BreakdownData {
            dominant,
            secondary,
        }
    }

    #[test]
    fn test_summary_uses_result_copy() {
        let view = summarize(&result(LoadCategory::Cognitive, LoadCategory::Decision)).unwrap();
        assert_eq!(
            view.summary,
            "Open loops and context switching are consuming meaningful capacity."
        );
        assert_eq!(view.dominant, LoadCategory::Cognitive);
        assert_eq!(view.severity, Severity::Moderate);
        assert!(view.breakdown_link.starts_with("/breakdown?data=%7B"));
    }

    #[test]
    fn test_breakdown_explicit_pair() {
        let full = result(LoadCategory::Decision, LoadCategory::Emotional);
        let view = breakdown(&BreakdownData::from(&full));
        assert_eq!(view.dominant_label, "Decision Load");
        assert_eq!(view.headline, "Decision Pressure Is Being Felt Emotionally");
        assert_eq!(view.body.len(), 3);
    }

    #[test]
    fn test_breakdown_falls_back_to_default() {
        let view = breakdown(&data(LoadCategory::Emotional, Some(LoadCategory::Emotional)));
        assert_eq!(view.headline, "Responsibility Without Control Is the Driver");

        for dominant in LoadCategory::ALL {
            let group = copy::change_the_math(dominant);
            for secondary in LoadCategory::ALL {
                let block = change_block(dominant, Some(secondary));
                match group.variant(secondary) {
                    Some(explicit) => assert_eq!(block, explicit),
                    None => assert_eq!(block, &group.default),
                }
            }
        }
    }

    #[test]
    fn test_breakdown_without_secondary_uses_default() {
        for dominant in LoadCategory::ALL {
            let view = breakdown(&data(dominant, None));
            assert_eq!(view.headline, copy::change_the_math(dominant).default.headline);
            assert_eq!(view.dominant_label, copy::load_label(dominant));
        }
    }
}

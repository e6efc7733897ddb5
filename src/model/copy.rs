//! Static copy tables shown on the results and breakdown pages

use crate::model::{LoadCategory, Severity};

/// Headline plus ordered body sentences for one breakdown variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeBlock {
    pub headline: &'static str,
    pub body: &'static [&'static str],
}

/// Breakdown variants for one dominant category, keyed by secondary category.
/// `default` covers any secondary without its own entry.
#[derive(Debug, Clone, Copy)]
pub struct VariantGroup {
    pub decision: Option<ChangeBlock>,
    pub cognitive: Option<ChangeBlock>,
    pub emotional: Option<ChangeBlock>,
    pub default: ChangeBlock,
}

impl VariantGroup {
    pub fn variant(&self, secondary: LoadCategory) -> Option<&ChangeBlock> {
        match secondary {
            LoadCategory::Decision => self.decision.as_ref(),
            LoadCategory::Cognitive => self.cognitive.as_ref(),
            LoadCategory::Emotional => self.emotional.as_ref(),
        }
    }

    pub fn variant_or_default(&self, secondary: LoadCategory) -> &ChangeBlock {
        self.variant(secondary).unwrap_or(&self.default)
    }
}

pub fn load_label(category: LoadCategory) -> &'static str {
    match category {
        LoadCategory::Decision => "Decision Load",
        LoadCategory::Cognitive => "Cognitive Load",
        LoadCategory::Emotional => "Emotional Load",
    }
}

/// One-sentence snapshot for a dominant category at a given severity
pub fn result_copy(dominant: LoadCategory, severity: Severity) -> &'static str {
    match (dominant, severity) {
        (LoadCategory::Decision, Severity::Low) => {
            "You’re making decisions, but they’re not currently overwhelming your capacity."
        }
        (LoadCategory::Decision, Severity::Moderate) => {
            "Decision volume is taking up more mental space than it appears."
        }
        (LoadCategory::Decision, Severity::High) => {
            "The sheer number of decisions you’re making is actively draining your capacity."
        }
        (LoadCategory::Cognitive, Severity::Low) => {
            "Your thinking load is present but largely contained."
        }
        (LoadCategory::Cognitive, Severity::Moderate) => {
            "Open loops and context switching are consuming meaningful capacity."
        }
        (LoadCategory::Cognitive, Severity::High) => {
            "Unfinished thinking and fragmentation are heavily taxing your mental bandwidth."
        }
        (LoadCategory::Emotional, Severity::Low) => {
            "Emotional responsibility is present but manageable."
        }
        (LoadCategory::Emotional, Severity::Moderate) => {
            "Responsibility for others is adding noticeable mental weight."
        }
        (LoadCategory::Emotional, Severity::High) => {
            "Responsibility without control is significantly draining your capacity."
        }
    }
}

pub fn change_the_math(dominant: LoadCategory) -> &'static VariantGroup {
    match dominant {
        LoadCategory::Decision => &DECISION_VARIANTS,
        LoadCategory::Cognitive => &COGNITIVE_VARIANTS,
        LoadCategory::Emotional => &EMOTIONAL_VARIANTS,
    }
}

static COGNITIVE_VARIANTS: VariantGroup = VariantGroup {
    decision: Some(ChangeBlock {
        headline: "Fragmentation Is Being Amplified by Decisions",
        body: &[
            "Your cognitive load is being driven by unfinished thinking and frequent context switching.",
            "Decision volume compounds this fragmentation, increasing mental strain.",
            "This creates persistent mental noise even when individual tasks are manageable.",
        ],
    }),
    cognitive: None,
    emotional: Some(ChangeBlock {
        headline: "Cognitive Load Is Being Carried Into Emotional Space",
        body: &[
            "Your primary strain is cognitive, but it is intensified by responsibility and interpersonal demands.",
            "Open loops tend to linger longer when emotional carry is present.",
            "This combination reduces the effectiveness of recovery.",
        ],
    }),
    default: ChangeBlock {
        headline: "Open Loops Are Consuming Capacity",
        body: &[
            "Your load is being driven by unfinished thinking, context switching, and fragmentation.",
            "Even a single recurring open loop can account for more strain than it appears.",
            "This kind of load persists even when total workload is reasonable.",
        ],
    },
};

static DECISION_VARIANTS: VariantGroup = VariantGroup {
    decision: None,
    cognitive: Some(ChangeBlock {
        headline: "Decision Volume Is Creating Cognitive Drag",
        body: &[
            "Your primary load comes from the number of decisions you are making.",
            "These decisions generate downstream cognitive strain and mental fatigue.",
            "Choice density matters more than effort in this pattern.",
        ],
    }),
    emotional: Some(ChangeBlock {
        headline: "Decision Pressure Is Being Felt Emotionally",
        body: &[
            "Your decision load is intensified by responsibility toward others.",
            "Choices carry emotional weight, not just cognitive effort.",
            "This makes even small decisions feel heavier than expected.",
        ],
    }),
    default: ChangeBlock {
        headline: "Decision Volume Is the Multiplier",
        body: &[
            "Your load is amplified by the number of decisions you are required to make.",
            "Decision density increases strain even when responsibility stays constant.",
            "Effort-based fixes often fail when choice volume remains high.",
        ],
    },
};

static EMOTIONAL_VARIANTS: VariantGroup = VariantGroup {
    decision: Some(ChangeBlock {
        headline: "Responsibility Is Compounding Decision Pressure",
        body: &[
            "Emotional load increases the cost of each decision you make.",
            "Choices feel heavier when outcomes affect others.",
            "This compounds fatigue even when decision volume is moderate.",
        ],
    }),
    cognitive: Some(ChangeBlock {
        headline: "Responsibility Is Prolonging Cognitive Load",
        body: &[
            "Emotional responsibility makes cognitive demands harder to resolve.",
            "Tasks tend to linger longer when responsibility without control is present.",
            "This increases overall strain without increasing visible workload.",
        ],
    }),
    emotional: None,
    default: ChangeBlock {
        headline: "Responsibility Without Control Is the Driver",
        body: &[
            "Your load is amplified by responsibility for outcomes you do not fully control.",
            "Emotional carry consumes capacity independently of productivity.",
            "This is why rest alone often fails to resolve this kind of strain.",
        ],
    },
};

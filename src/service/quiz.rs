//! Request-scoped quiz operations over the configured scoring model

use crate::model::{AnswerSet, BreakdownData, ClassificationResult, OfferConfig, ScoringModel};
use crate::service::presenter::{self, BreakdownView, SummaryView};
use crate::service::scoring;
use crate::service::transport::{self, TransportError};

pub const RESULTS_PATH: &str = "/results";

/// Stateless facade shared by all workers; holds configuration only
#[derive(Debug, Clone)]
pub struct QuizService {
    model: ScoringModel,
    offer: OfferConfig,
}

impl QuizService {
    pub fn new(model: ScoringModel, offer: OfferConfig) -> Self {
        Self { model, offer }
    }

    pub fn model(&self) -> ScoringModel {
        self.model
    }

    pub fn price_label(&self) -> &str {
        &self.offer.price_label
    }

    pub fn score(&self, answers: &AnswerSet) -> ClassificationResult {
        scoring::classify(answers, self.model)
    }

    /// Where intake sends a complete answer set
    pub fn results_link(&self, answers: &AnswerSet) -> Result<String, serde_json::Error> {
        transport::data_link(RESULTS_PATH, answers)
    }

    /// Decode answers from the results page parameter, score and summarize
    pub fn snapshot(&self, raw: Option<&str>) -> Result<SummaryView, TransportError> {
        let answers: AnswerSet = transport::decode(raw)?;
        let result = self.score(&answers);
        Ok(presenter::summarize(&result)?)
    }

    /// Decode the breakdown page parameter. Only `dominant` is required.
    pub fn breakdown(&self, raw: Option<&str>) -> Result<BreakdownView, TransportError> {
        let data: BreakdownData = transport::decode(raw)?;
        Ok(presenter::breakdown(&data))
    }
}

impl Default for QuizService {
    fn default() -> Self {
        Self::new(ScoringModel::default(), OfferConfig::default())
    }
}

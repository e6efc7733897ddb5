pub mod answers;
pub mod classification;
pub mod config;
pub mod copy;
pub mod questions;

pub use answers::AnswerSet;
pub use classification::{BreakdownData, ClassificationResult, LoadCategory, LoadScores, Severity};
pub use config::{Config, OfferConfig, ScoringModel};
pub use questions::QUESTIONS;

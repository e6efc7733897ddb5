pub mod intake;
pub mod presenter;
pub mod quiz;
pub mod scoring;
pub mod transport;

pub use quiz::QuizService;

pub mod evaluator;
pub mod extractor;

pub use evaluator::AnswerEvaluator;
pub use extractor::{extract_review_questions, QUESTION_SECTION_MARKER};

pub mod session;

pub use session::QuizSession;

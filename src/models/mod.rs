pub mod question;

pub use question::{ReviewQuestion, Verdict, FALLBACK_EXPLANATION};

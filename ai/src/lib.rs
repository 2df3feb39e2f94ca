//! AI-assisted code review.
//!
//! [`CodeReviewer`] is the seam the API depends on; [`GeminiReviewer`] is the
//! production implementation that calls Google's Gemini `generateContent`
//! endpoint once per review.

pub mod error;
pub mod gemini;
pub mod reviewer;

pub use error::AiError;
pub use gemini::GeminiReviewer;
pub use reviewer::CodeReviewer;

//! Client for the Gemini `generateContent` API and the three coaching calls
//! built on it: journal feedback, goal-vs-time feedback, and goal plans.

pub mod client;
pub mod config;
pub mod error;
pub mod feedback;
mod prompts;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::AiError;
pub use feedback::{FeedbackService, GoalFeedback, GoalPlan, JournalFeedback};

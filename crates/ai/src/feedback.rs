//! The coaching calls, behind a trait so the HTTP layer can swap in a stub.

use async_trait::async_trait;
use disciplineos_core::analytics::CoachInputRow;
use disciplineos_core::goals::GoalPlanInput;
use serde::{Deserialize, Serialize};

use crate::client::GeminiClient;
use crate::error::AiError;
use crate::prompts;

/// Reflection on a single journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalFeedback {
    pub mood: String,
    pub experience: String,
    pub insights: String,
}

/// Commentary on time spent versus goal progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalFeedback {
    pub observation: String,
    pub suggestion: String,
}

/// Suggested next sub-tasks for a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPlan {
    pub suggested_steps: Vec<String>,
}

#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Whether calls can succeed at all (e.g. an API key is present).
    fn is_available(&self) -> bool {
        true
    }

    async fn journal_feedback(&self, entry: &str) -> Result<JournalFeedback, AiError>;

    async fn goal_feedback(&self, rows: &[CoachInputRow]) -> Result<GoalFeedback, AiError>;

    async fn goal_plan(&self, goal: &GoalPlanInput) -> Result<GoalPlan, AiError>;
}

#[async_trait]
impl FeedbackService for GeminiClient {
    fn is_available(&self) -> bool {
        self.is_configured()
    }

    async fn journal_feedback(&self, entry: &str) -> Result<JournalFeedback, AiError> {
        self.generate(&prompts::journal_prompt(entry), prompts::journal_schema())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Journal feedback failed"))
    }

    async fn goal_feedback(&self, rows: &[CoachInputRow]) -> Result<GoalFeedback, AiError> {
        let data = serde_json::to_string(rows)?;
        self.generate(&prompts::goal_feedback_prompt(&data), prompts::goal_feedback_schema())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Goal feedback failed"))
    }

    async fn goal_plan(&self, goal: &GoalPlanInput) -> Result<GoalPlan, AiError> {
        let data = serde_json::to_string(goal)?;
        self.generate(&prompts::goal_plan_prompt(&data), prompts::goal_plan_schema())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Goal plan failed"))
    }
}

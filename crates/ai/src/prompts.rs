//! Prompt texts and the response schemas that pin down each reply shape.

use serde_json::{json, Value};

pub(crate) fn journal_prompt(entry: &str) -> String {
    format!(
        "Analyze the following journal entry. Respond ONLY with a valid JSON object.\n\
         - mood: A single word for the emotional tone (e.g., \"Positive\", \"Stressed\", \"Neutral\").\n\
         - experience: A one-sentence summary of what happened.\n\
         - insights: A short (1-2 sentence) motivational insight or a simple actionable plan for tomorrow based on the entry.\n\
         \n\
         Journal Entry:\n\
         {entry}\n"
    )
}

pub(crate) fn journal_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "mood": { "type": "STRING" },
            "experience": { "type": "STRING" },
            "insights": { "type": "STRING" },
        },
        "required": ["mood", "experience", "insights"],
    })
}

pub(crate) fn goal_feedback_prompt(analytics_json: &str) -> String {
    format!(
        "You are a productivity coach for an app called \"DisciplineOS\".\n\
         Analyze the following user data, which shows time spent vs. goal progress for their main life categories.\n\
         Respond ONLY with a valid JSON object.\n\
         \n\
         - \"observation\": Write a 1-2 sentence analysis of the data. Find the biggest insight \
         (e.g., \"Your 'Study' time is highly effective, but your 'Work' time is not translating into progress.\")\n\
         - \"suggestion\": Write a 1-2 sentence, simple, actionable suggestion for the user \
         (e.g., \"Try breaking down your 'Work' goals into smaller sub-tasks to get unstuck.\")\n\
         \n\
         User Data:\n\
         {analytics_json}\n"
    )
}

pub(crate) fn goal_feedback_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "observation": { "type": "STRING" },
            "suggestion": { "type": "STRING" },
        },
        "required": ["observation", "suggestion"],
    })
}

pub(crate) fn goal_plan_prompt(goal_json: &str) -> String {
    format!(
        "You are a productivity coach for \"DisciplineOS\".\n\
         A user needs a plan for their goal. Analyze their goal, what they've completed, and what's left to do.\n\
         Respond ONLY with a valid JSON object.\n\
         \n\
         - \"suggested_steps\": An array of 3-5 simple, actionable sub-tasks to help them make progress.\n\
         \n\
         User's Goal Data:\n\
         {goal_json}\n"
    )
}

pub(crate) fn goal_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggested_steps": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
            },
        },
        "required": ["suggested_steps"],
    })
}

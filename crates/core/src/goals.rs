//! Goal progress and the goal-plan payload sent to the AI coach.

use serde::Serialize;

use crate::analytics::round_to;

/// Percentage of completed sub-tasks, one decimal. A goal with no sub-tasks
/// is at 0%.
pub fn progress_percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(completed as f64 / total as f64 * 100.0, 1)
}

/// Goal summary handed to the coach when asking for next steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlanInput {
    pub goal_title: String,
    pub completed_tasks: Vec<String>,
    pub incomplete_tasks: Vec<String>,
}

impl GoalPlanInput {
    /// Split `(title, is_completed)` pairs into done and outstanding lists,
    /// preserving order.
    pub fn new<'a, I>(goal_title: &str, sub_tasks: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let (done, open): (Vec<_>, Vec<_>) = sub_tasks.into_iter().partition(|(_, is_done)| *is_done);
        Self {
            goal_title: goal_title.to_string(),
            completed_tasks: done.into_iter().map(|(t, _)| t.to_string()).collect(),
            incomplete_tasks: open.into_iter().map(|(t, _)| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_handles_empty_goal() {
        assert_eq!(progress_percent(0, 0), 0.0);
    }

    #[test]
    fn progress_rounds_to_one_decimal() {
        assert_eq!(progress_percent(1, 3), 33.3);
        assert_eq!(progress_percent(2, 3), 66.7);
        assert_eq!(progress_percent(4, 4), 100.0);
    }

    #[test]
    fn plan_input_partitions_tasks() {
        let input = GoalPlanInput::new(
            "Run a marathon",
            [("Buy shoes", true), ("Run 5k", false), ("Run 10k", false)],
        );
        assert_eq!(input.completed_tasks, vec!["Buy shoes"]);
        assert_eq!(input.incomplete_tasks, vec!["Run 5k", "Run 10k"]);

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["goalTitle"], "Run a marathon");
        assert_eq!(json["incompleteTasks"][1], "Run 10k");
    }
}

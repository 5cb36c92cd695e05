//! Collection wrapper types for displaying groups of goals.

use std::fmt;

use crate::{
    content::format_title,
    models::{Goal, Progress},
};

/// Newtype wrapper for displaying a goal history.
///
/// Each goal renders as a short summary: query, id, progress and objective.
/// An empty history renders a single line saying so.
///
/// # Examples
///
/// ```rust
/// use roadmap_core::{display::Goals, models::Goal};
///
/// let goal = Goal {
///     id: "g1".to_string(),
///     query: "Learn Python in 30 days".to_string(),
///     ..Default::default()
/// };
/// let output = Goals(vec![goal]).to_string();
/// assert!(output.contains("## Learn Python in 30 days (ID: g1)"));
///
/// assert_eq!(Goals(vec![]).to_string(), "No goals found.\n");
/// ```
pub struct Goals(pub Vec<Goal>);

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No goals found.");
        }

        for goal in &self.0 {
            let progress = Progress::from_tasks(&goal.result.tasks);
            let counts = if progress.total > 0 {
                format!(" ({}/{})", progress.completed, progress.total)
            } else {
                String::new()
            };

            writeln!(f, "## {} (ID: {}){counts}", goal.query, goal.id)?;
            writeln!(f)?;
            if !goal.result.objective.is_empty() {
                writeln!(
                    f,
                    "- **Objective**: {}",
                    format_title(&goal.result.objective)
                )?;
            }
            if !goal.timestamp.is_empty() {
                writeln!(f, "- **Created**: {}", goal.created_label())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

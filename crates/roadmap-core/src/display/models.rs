//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures carry no
//! presentation logic. Task titles and content pass through
//! [`crate::content`] before they are written.

use std::fmt;

use super::{collections::Goals, datetime::OrdinalDate};
use crate::{
    content::{format_content, format_title},
    models::{DashboardStats, Goal, Plan, Progress, Task, TaskField},
};

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Task {
    fn status_icon(&self) -> &'static str {
        if self.is_completed() {
            "✓ Done"
        } else {
            "○ Todo"
        }
    }

    /// Write the task as a numbered section.
    ///
    /// `show_status` is off for generated plans, which have no completion
    /// state yet.
    fn fmt_task(&self, f: &mut fmt::Formatter<'_>, number: usize, show_status: bool) -> fmt::Result {
        let title = format_title(&self.title);
        if show_status {
            writeln!(f, "### {number}. {title} ({})", self.status_icon())?;
        } else {
            writeln!(f, "### {number}. {title}")?;
        }
        writeln!(f)?;

        if let Some(duration) = self.duration_label() {
            writeln!(f, "- Duration: {duration}")?;
            writeln!(f)?;
        }

        let content = format_content(&self.content);
        if !content.trim().is_empty() {
            writeln!(f, "{}", content.trim_end())?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_task(f, 1, self.completed.is_some())
    }
}

fn fmt_tasks(f: &mut fmt::Formatter<'_>, tasks: &[Task], show_status: bool) -> fmt::Result {
    if tasks.is_empty() {
        return writeln!(f, "No tasks in this plan.");
    }

    writeln!(f, "## Tasks")?;
    writeln!(f)?;
    for (i, task) in tasks.iter().enumerate() {
        task.fmt_task(f, i + 1, show_status)?;
    }
    Ok(())
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", format_title(&self.objective))?;
        writeln!(f)?;
        fmt_tasks(f, &self.tasks, false)
    }
}

impl Goal {
    /// Creation date for display, or the raw timestamp if it does not parse.
    pub(crate) fn created_label(&self) -> String {
        match self.created_at() {
            Some(ts) => OrdinalDate(&ts).to_string(),
            None => self.timestamp.clone(),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.query)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        if !self.timestamp.is_empty() {
            writeln!(f, "- Created: {}", self.created_label())?;
        }
        writeln!(
            f,
            "- Progress: {}",
            Progress::from_tasks(&self.result.tasks)
        )?;

        writeln!(f, "\n## Objective")?;
        writeln!(f)?;
        writeln!(f, "{}", format_title(&self.result.objective))?;
        writeln!(f)?;

        fmt_tasks(f, &self.result.tasks, true)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} tasks completed ({}%)",
            self.completed,
            self.total,
            self.percentage()
        )
    }
}

/// Fixed-width text progress bar, e.g. `[███░░░░░░░] 33%`.
pub struct ProgressBar<'a>(pub &'a Progress);

impl ProgressBar<'_> {
    const WIDTH: u64 = 20;
}

impl fmt::Display for ProgressBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percentage = self.0.percentage().min(100);
        let filled = (percentage * Self::WIDTH / 100) as usize;
        let empty = Self::WIDTH as usize - filled;
        write!(
            f,
            "[{}{}] {percentage}%",
            "█".repeat(filled),
            "░".repeat(empty)
        )
    }
}

impl fmt::Display for DashboardStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dashboard")?;
        writeln!(f)?;
        writeln!(f, "- Total plans: {}", self.total_plans)?;
        writeln!(
            f,
            "- Completed tasks: {}/{}",
            self.completed_tasks, self.total_tasks
        )?;
        writeln!(f, "- Overall progress: {}", ProgressBar(&self.progress()))?;
        writeln!(f)?;

        writeln!(f, "## Recent plans")?;
        writeln!(f)?;
        write!(f, "{}", Goals(self.recent.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, content: &str, completed: Option<bool>) -> Task {
        Task {
            title: title.to_string(),
            content: content.to_string(),
            duration: None,
            completed,
        }
    }

    #[test]
    fn test_task_content_is_formatted() {
        let plan = Plan {
            objective: "**Python**".to_string(),
            tasks: vec![task(
                "**Setup**",
                r"- Subtask 1: Install\n- Resource: Docs - https://docs.python.org",
                None,
            )],
        };
        let output = plan.to_string();

        assert!(output.contains("# Python"));
        assert!(output.contains("### 1. Setup\n"));
        assert!(output.contains("- Install\n- Resource: [Docs](https://docs.python.org)"));
        assert!(!output.contains("**"));
    }

    #[test]
    fn test_standalone_task_status() {
        assert!(task("A", "", Some(false)).to_string().contains("○ Todo"));
        assert!(task("A", "", Some(true)).to_string().contains("✓ Done"));
        let unset = task("A", "", None).to_string();
        assert!(!unset.contains("Todo") && !unset.contains("Done"));
    }

    #[test]
    fn test_progress_bar() {
        let bar = ProgressBar(&Progress { completed: 1, total: 2 }).to_string();
        assert_eq!(bar, format!("[{}{}] 50%", "█".repeat(10), "░".repeat(10)));

        let empty = ProgressBar(&Progress::default()).to_string();
        assert!(empty.ends_with("] 0%"));
    }

    #[test]
    fn test_dashboard_display() {
        let goal = Goal {
            id: "g1".to_string(),
            query: "Learn Rust".to_string(),
            result: Plan {
                objective: "Ship a crate".to_string(),
                tasks: vec![task("A", "", Some(true)), task("B", "", None)],
            },
            ..Default::default()
        };
        let stats = DashboardStats::from_history(&[goal]);
        let output = stats.to_string();

        assert!(output.contains("- Total plans: 1"));
        assert!(output.contains("- Completed tasks: 1/2"));
        assert!(output.contains("50%"));
        assert!(output.contains("Learn Rust"));
    }
}

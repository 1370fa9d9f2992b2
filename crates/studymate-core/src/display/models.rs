//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so data structures stay free of
//! presentation code.

use std::fmt;

use crate::models::{DailyLesson, Studyplan, UserStudyplan, UserTask};

impl fmt::Display for Studyplan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Days: {}", self.daily_lessons.len())?;
        writeln!(f)?;
        writeln!(f, "{}", self.desc)?;

        for (i, lesson) in self.daily_lessons.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "## Day {}: {}", i + 1, lesson.name)?;
            writeln!(f)?;
            write!(f, "{lesson}")?;
        }

        Ok(())
    }
}

impl fmt::Display for DailyLesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.desc)?;
        writeln!(f)?;
        for task in &self.tasks {
            writeln!(f, "- {task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for UserTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.is_done() { "x" } else { " " };
        write!(f, "[{check}] {}", self.goal)
    }
}

impl fmt::Display for UserStudyplan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {} ({}/{})",
            self.name,
            self.completed_tasks(),
            self.total_tasks()
        )?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        if let Some(id) = &self.original_id {
            writeln!(f, "- Original: {id}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.desc)?;

        for (i, lesson) in self.daily_lessons.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "## Day {}: {}", i + 1, lesson.name)?;
            writeln!(f)?;
            writeln!(f, "{}", lesson.desc)?;
            writeln!(f)?;
            for task in &lesson.tasks {
                writeln!(f, "- {task}")?;
            }
        }

        Ok(())
    }
}

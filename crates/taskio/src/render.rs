//! Line-oriented rendering of projections and task details.

use std::fmt::Write as _;

use taskio_core::Task;
use taskio_core::date;
use taskio_core::view::{Projection, TaskGroup};

use crate::palette::Painter;

/// Render a projection as a listing with a count heading.
pub fn listing(projection: &Projection<'_>, painter: &Painter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", painter.heading(&format!("Tasks ({})", projection.len())));
    if projection.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            painter.muted("No tasks yet. Create one with `taskio add`.")
        );
        return out;
    }
    match projection {
        Projection::Flat(tasks) => {
            for task in tasks {
                let _ = writeln!(out, "{}", row(task, painter));
            }
        }
        Projection::Grouped(groups) => {
            for group in groups {
                let _ = writeln!(out);
                append_group(&mut out, group, painter);
            }
        }
    }
    out
}

/// Render a single task in full.
pub fn detail(task: &Task, painter: &Painter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", painter.heading("Title:"), task.title);
    if let Some(id) = task.id {
        let _ = writeln!(out, "{} {id}", painter.heading("Id:"));
    }
    let _ = writeln!(out, "{} {}", painter.heading("Status:"), task.status.label());
    let _ = writeln!(
        out,
        "{} {}",
        painter.heading("Due:"),
        task.due_date.map_or_else(|| "-".to_owned(), date::format)
    );
    let _ = writeln!(out, "{} {}", painter.heading("Category:"), task.category_label());
    if let Some(description) = task.description.as_deref() {
        let _ = writeln!(out, "{} {description}", painter.heading("Description:"));
    }
    out
}

fn append_group(out: &mut String, group: &TaskGroup<'_>, painter: &Painter) {
    let label = format!("{} ({})", group.label, group.tasks.len());
    let _ = writeln!(out, "{}", painter.heading(&label));
    for task in &group.tasks {
        let _ = writeln!(out, "{}", row(task, painter));
    }
}

fn row(task: &Task, painter: &Painter) -> String {
    let id = task.id.map_or_else(|| "-".to_owned(), |id| id.to_string());
    let mut line = format!("{id:>4}  {} {}", painter.status(task.status), task.title);
    if let Some(due) = task.due_date {
        let _ = write!(line, "  due {}", date::format(due));
    }
    if let Some(category) = task.category.as_deref() {
        let _ = write!(line, "  #{category}");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskio_core::id::TaskId;
    use taskio_core::status::TaskStatus;
    use taskio_core::view::{SortKey, ViewOptions, project};
    use time::macros::date;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: Some(TaskId(1)),
                title: "Ship the release".into(),
                description: None,
                status: TaskStatus::InProgress,
                due_date: Some(date!(2026 - 08 - 14)),
                category: Some("Work".into()),
            },
            Task {
                id: Some(TaskId(2)),
                title: "Water the plants".into(),
                description: None,
                status: TaskStatus::Todo,
                due_date: None,
                category: None,
            },
        ]
    }

    #[test]
    fn flat_listing_shows_count_ids_and_fields() {
        let tasks = sample_tasks();
        let projection = project(&tasks, &ViewOptions::default());
        let text = listing(&projection, &Painter::plain());

        assert!(text.starts_with("Tasks (2)\n"));
        assert!(text.contains("   1  [~] Ship the release  due 2026-08-14  #Work"));
        assert!(text.contains("   2  [ ] Water the plants"));
    }

    #[test]
    fn empty_listing_renders_the_empty_state() {
        let projection = project(&[], &ViewOptions::default());
        let text = listing(&projection, &Painter::plain());
        assert!(text.starts_with("Tasks (0)\n"));
        assert!(text.contains("No tasks yet"));
    }

    #[test]
    fn grouped_listing_labels_each_bucket() {
        let tasks = sample_tasks();
        let options = ViewOptions {
            sort: SortKey::None,
            group_by_category: true,
        };
        let projection = project(&tasks, &options);
        let text = listing(&projection, &Painter::plain());

        let work = text.find("Work (1)").unwrap_or_else(|| panic!("missing Work bucket"));
        let uncategorized = text
            .find("Uncategorized (1)")
            .unwrap_or_else(|| panic!("missing Uncategorized bucket"));
        assert!(work < uncategorized);
    }

    #[test]
    fn detail_prints_every_populated_field() {
        let task = Task {
            id: Some(TaskId(5)),
            title: "Plan the offsite".into(),
            description: Some("Book the venue first".into()),
            status: TaskStatus::Todo,
            due_date: Some(date!(2026 - 09 - 30)),
            category: Some("Events".into()),
        };
        let text = detail(&task, &Painter::plain());

        assert!(text.contains("Title: Plan the offsite"));
        assert!(text.contains("Id: 5"));
        assert!(text.contains("Status: To Do"));
        assert!(text.contains("Due: 2026-09-30"));
        assert!(text.contains("Category: Events"));
        assert!(text.contains("Description: Book the venue first"));
    }

    #[test]
    fn detail_substitutes_placeholders_for_absent_fields() {
        let task = Task {
            id: None,
            title: "Bare".into(),
            description: None,
            status: TaskStatus::Done,
            due_date: None,
            category: None,
        };
        let text = detail(&task, &Painter::plain());
        assert!(text.contains("Due: -"));
        assert!(text.contains("Category: Uncategorized"));
        assert!(!text.contains("Description:"));
        assert!(!text.contains("Id:"));
    }
}

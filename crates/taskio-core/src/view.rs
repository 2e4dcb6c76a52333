//! Pure derivation of the displayed task sequence from sort/group options.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::Task;

/// Sort key selectable in the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Preserve input order unchanged.
    #[default]
    None,
    /// Fixed status rank: to do, in progress, done.
    Status,
    /// Ascending due date; dateless tasks after all dated ones.
    DueDate,
    /// Ascending category label; missing categories compare as
    /// [`Task::UNCATEGORIZED`].
    Category,
}

/// User-selected ordering and grouping options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Active sort key.
    pub sort: SortKey,
    /// Partition the sorted sequence into category buckets.
    pub group_by_category: bool,
}

/// Ordered, optionally grouped sequence derived for display.
///
/// Borrows the source collection; deriving a view never mutates it.
#[derive(Debug, PartialEq, Eq)]
pub enum Projection<'a> {
    /// Flat listing in the current sort order.
    Flat(Vec<&'a Task>),
    /// Category buckets in alphabetical order, `Uncategorized` last.
    Grouped(Vec<TaskGroup<'a>>),
}

impl Projection<'_> {
    /// Total number of tasks across the projection.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(tasks) => tasks.len(),
            Self::Grouped(groups) => groups.iter().map(|group| group.tasks.len()).sum(),
        }
    }

    /// True when the projection holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One category bucket of a grouped projection.
#[derive(Debug, PartialEq, Eq)]
pub struct TaskGroup<'a> {
    /// Bucket label: the category, or [`Task::UNCATEGORIZED`].
    pub label: String,
    /// Tasks in the bucket, in the current sort order.
    pub tasks: Vec<&'a Task>,
}

/// Derive the display sequence for `tasks` under `options`.
#[must_use]
pub fn project<'a>(tasks: &'a [Task], options: &ViewOptions) -> Projection<'a> {
    let ordered = sorted(tasks, options.sort);
    if options.group_by_category {
        Projection::Grouped(group_by_category(ordered))
    } else {
        Projection::Flat(ordered)
    }
}

fn sorted(tasks: &[Task], key: SortKey) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    match key {
        SortKey::None => {}
        // Vec::sort_by is stable; ties keep their relative input order.
        SortKey::Status => ordered.sort_by_key(|task| task.status.rank()),
        SortKey::DueDate => ordered.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortKey::Category => ordered.sort_by(|a, b| a.category_label().cmp(b.category_label())),
    }
    ordered
}

fn group_by_category(ordered: Vec<&Task>) -> Vec<TaskGroup<'_>> {
    let mut buckets: BTreeMap<&str, Vec<&Task>> = BTreeMap::new();
    for task in ordered {
        buckets.entry(task.category_label()).or_default().push(task);
    }

    // The Uncategorized bucket goes last regardless of alphabetical position.
    let uncategorized = buckets.remove(Task::UNCATEGORIZED);
    let mut groups: Vec<TaskGroup<'_>> = buckets
        .into_iter()
        .map(|(label, tasks)| TaskGroup {
            label: label.to_owned(),
            tasks,
        })
        .collect();
    groups.extend(uncategorized.map(|tasks| TaskGroup {
        label: Task::UNCATEGORIZED.to_owned(),
        tasks,
    }));
    groups
}

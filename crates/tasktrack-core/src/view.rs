//! Display-ready projection of a controller.
//!
//! Both hosts render from a [`ListView`] taken right after a state change,
//! so the header line, the tab labels and the list body always agree with
//! each other.

use serde::Serialize;

use crate::controller::{Counts, TaskListController};
use crate::filter::StatusFilter;
use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterTab {
    pub filter: StatusFilter,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

impl EmptyState {
    pub fn for_filter(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::All => Self {
                title: "No tasks yet",
                hint: "Add a task above to get started!",
            },
            StatusFilter::Completed => Self {
                title: "No completed tasks",
                hint: "Complete some tasks to see them here",
            },
            StatusFilter::Pending => Self {
                title: "No pending tasks",
                hint: "All tasks are completed! 🎉",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub draft: String,
    pub filter: StatusFilter,
    pub tasks: Vec<Task>,
    pub counts: Counts,
}

impl ListView {
    pub fn of(controller: &TaskListController) -> Self {
        Self {
            draft: controller.draft().to_string(),
            filter: controller.filter(),
            tasks: controller.visible_tasks().into_iter().cloned().collect(),
            counts: controller.counts(),
        }
    }

    /// `"{completed} of {total} tasks completed"`, or `None` for an empty list.
    pub fn summary(&self) -> Option<String> {
        if self.counts.total == 0 {
            return None;
        }
        Some(format!(
            "{} of {} tasks completed",
            self.counts.completed, self.counts.total
        ))
    }

    pub fn filter_tabs(&self) -> Vec<FilterTab> {
        StatusFilter::ORDER
            .into_iter()
            .map(|filter| {
                let n = match filter {
                    StatusFilter::All => self.counts.total,
                    StatusFilter::Pending => self.counts.pending,
                    StatusFilter::Completed => self.counts.completed,
                };
                FilterTab {
                    filter,
                    label: format!("{} ({n})", filter.label()),
                    active: filter == self.filter,
                }
            })
            .collect()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.tasks
            .is_empty()
            .then(|| EmptyState::for_filter(self.filter))
    }
}

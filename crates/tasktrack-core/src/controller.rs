use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::filter::StatusFilter;
use crate::task::{Task, TaskId};

/// Totals over the whole list, independent of the active filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Every gesture a presentation layer can route into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetDraft(String),
    Submit,
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    SetFilter(StatusFilter),
}

/// Owns the task list plus the transient draft and filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListController {
    tasks: Vec<Task>,
    draft: String,
    filter: StatusFilter,
    next_id: u64,
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListController {
    pub fn new() -> Self {
        Self::with_filter(StatusFilter::default())
    }

    pub fn with_filter(filter: StatusFilter) -> Self {
        Self {
            tasks: Vec::new(),
            draft: String::new(),
            filter,
            next_id: 1,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    #[tracing::instrument(skip(self, text))]
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        trace!(len = self.draft.len(), "draft updated");
    }

    /// Appends a task built from `input` and clears the draft. Blank input
    /// is ignored and leaves the draft as it was.
    #[tracing::instrument(skip(self, input))]
    pub fn add(&mut self, input: &str) -> Option<TaskId> {
        let id = TaskId::new(self.next_id);
        let Some(task) = Task::from_input(id, input) else {
            trace!("blank input, nothing added");
            return None;
        };

        self.next_id += 1;
        debug!(id = %id, text = %task.text, "added task");
        self.tasks.push(task);
        self.draft.clear();
        Some(id)
    }

    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let draft = self.draft.clone();
        self.add(&draft)
    }

    #[tracing::instrument(skip(self))]
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle();
                debug!(id = %id, completed = task.completed, "toggled task");
                true
            }
            None => {
                trace!(id = %id, "toggle on unknown id ignored");
                false
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(idx) = self.tasks.iter().position(|task| task.id == id) else {
            trace!(id = %id, "delete on unknown id ignored");
            return None;
        };

        let removed = self.tasks.remove(idx);
        debug!(id = %id, remaining = self.tasks.len(), "deleted task");
        Some(removed)
    }

    #[tracing::instrument(skip(self))]
    pub fn set_filter(&mut self, filter: StatusFilter) {
        debug!(from = %self.filter, to = %filter, "filter changed");
        self.filter = filter;
    }

    /// Tasks passing the active filter, in list order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .collect()
    }

    pub fn counts(&self) -> Counts {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        Counts {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// Routes one action to its operation. Returns whether the task list,
    /// draft or filter may have changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::SetDraft(text) => {
                self.set_draft(text);
                true
            }
            Action::Submit => self.submit_draft().is_some(),
            Action::Add(text) => self.add(&text).is_some(),
            Action::Toggle(id) => self.toggle(id),
            Action::Delete(id) => self.delete(id).is_some(),
            Action::SetFilter(filter) => {
                self.set_filter(filter);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Counts, TaskListController};
    use crate::filter::StatusFilter;
    use crate::task::TaskId;

    fn texts(ctl: &TaskListController) -> Vec<&str> {
        ctl.visible_tasks()
            .into_iter()
            .map(|task| task.text.as_str())
            .collect()
    }

    #[test]
    fn add_appends_and_clears_draft() {
        let mut ctl = TaskListController::new();
        ctl.set_draft("  buy milk  ");
        let id = ctl.submit_draft().expect("added");

        assert_eq!(ctl.draft(), "");
        let last = ctl.tasks().last().expect("one task");
        assert_eq!(last.id, id);
        assert_eq!(last.text, "buy milk");
        assert!(!last.completed);
    }

    #[test]
    fn blank_submit_keeps_draft() {
        let mut ctl = TaskListController::new();
        ctl.set_draft("   ");
        assert!(ctl.submit_draft().is_none());
        assert_eq!(ctl.draft(), "   ");
        assert!(ctl.tasks().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut ctl = TaskListController::new();
        let a = ctl.add("a").expect("a");
        let b = ctl.add("b").expect("b");
        ctl.delete(b);
        let c = ctl.add("c").expect("c");

        assert_ne!(c, b);
        assert_ne!(c, a);
        assert!(c > b);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut ctl = TaskListController::new();
        ctl.add("a");
        let before = ctl.clone();

        assert!(!ctl.toggle(TaskId::new(99)));
        assert!(ctl.delete(TaskId::new(99)).is_none());
        assert_eq!(ctl, before);
    }

    #[test]
    fn filters_preserve_order() {
        let mut ctl = TaskListController::new();
        ctl.add("A");
        let b = ctl.add("B").expect("b");
        ctl.add("C");
        ctl.toggle(b);

        assert_eq!(texts(&ctl), vec!["A", "B", "C"]);
        ctl.set_filter(StatusFilter::Pending);
        assert_eq!(texts(&ctl), vec!["A", "C"]);
        ctl.set_filter(StatusFilter::Completed);
        assert_eq!(texts(&ctl), vec!["B"]);
    }

    #[test]
    fn counts_follow_every_change() {
        let mut ctl = TaskListController::new();
        assert_eq!(ctl.counts(), Counts::default());

        let a = ctl.add("a").expect("a");
        ctl.add("b");
        ctl.toggle(a);
        assert_eq!(
            ctl.counts(),
            Counts {
                total: 2,
                completed: 1,
                pending: 1
            }
        );

        ctl.delete(a);
        assert_eq!(
            ctl.counts(),
            Counts {
                total: 1,
                completed: 0,
                pending: 1
            }
        );
    }

    #[test]
    fn apply_routes_actions() {
        let mut ctl = TaskListController::new();
        assert!(ctl.apply(Action::SetDraft("write report".to_string())));
        assert!(ctl.apply(Action::Submit));
        assert!(!ctl.apply(Action::Submit));
        assert!(ctl.apply(Action::Add("call mom".to_string())));
        assert!(!ctl.apply(Action::Add("  ".to_string())));

        let first = ctl.tasks()[0].id;
        assert!(ctl.apply(Action::Toggle(first)));
        assert!(ctl.apply(Action::SetFilter(StatusFilter::Completed)));
        assert_eq!(texts(&ctl), vec!["write report"]);
        assert!(ctl.apply(Action::Delete(first)));
        assert!(!ctl.apply(Action::Delete(first)));
        assert_eq!(ctl.counts().total, 1);
    }

    #[test]
    fn blank_add_leaves_draft_untouched() {
        let mut ctl = TaskListController::new();
        ctl.set_draft("half typed");
        ctl.apply(Action::Add("  ".to_string()));
        assert_eq!(ctl.draft(), "half typed");

        ctl.apply(Action::Add("other".to_string()));
        assert_eq!(ctl.draft(), "");
    }
}

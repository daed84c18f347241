//! In-memory task list controller shared by the terminal and web hosts.

pub mod controller;
pub mod filter;
pub mod task;
pub mod view;

pub use controller::{Action, Counts, TaskListController};
pub use filter::StatusFilter;
pub use task::{Task, TaskId};
pub use view::{EmptyState, FilterTab, ListView};

mod empty_state;
mod filter_bar;
mod header;
mod task_input;
mod task_list;
mod task_list_row;

pub use empty_state::EmptyStatePanel;
pub use filter_bar::FilterBar;
pub use header::TrackerHeader;
pub use task_input::TaskInput;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;

use tasktrack_core::{
  Task,
  TaskId
};
use web_sys::{
  Event,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:      Task,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.task.id;
  let checkbox_id = format!("task-{id}");
  let completed = props.task.completed;

  let row_class = if completed {
    "row done"
  } else {
    "row"
  };
  let label_class = if completed {
    "task-text done"
  } else {
    "task-text"
  };

  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  html! {
      <div class={row_class}>
          <input
              type="checkbox"
              id={checkbox_id.clone()}
              checked={completed}
              onchange={move |_: Event| on_toggle.emit(id)}
          />
          <label for={checkbox_id} class={label_class}>
              { &props.task.text }
          </label>
          <button
              class="delete"
              aria-label="Delete task"
              onclick={move |_: MouseEvent| on_delete.emit(id)}
          >
              { "🗑" }
          </button>
      </div>
  }
}

use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskInputProps {
  pub draft:     String,
  pub on_input:  Callback<String>,
  pub on_submit: Callback<()>
}

#[function_component(TaskInput)]
pub fn task_input(
  props: &TaskInputProps
) -> Html {
  let oninput = {
    let on_input = props.on_input.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };

  let onkeydown = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          on_submit.emit(());
        }
      }
    )
  };

  let onclick = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_submit.emit(())
      }
    )
  };

  html! {
      <div class="panel add-task">
          <input
              type="text"
              placeholder="What needs to be done today?"
              value={props.draft.clone()}
              {oninput}
              {onkeydown}
          />
          <button class="add" {onclick}>{ "+ Add Task" }</button>
      </div>
  }
}

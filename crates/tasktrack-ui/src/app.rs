use std::rc::Rc;

use tasktrack_core::{
  Action,
  ListView,
  StatusFilter,
  TaskId,
  TaskListController
};
use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_reducer
};

use crate::components::{
  EmptyStatePanel,
  FilterBar,
  TaskInput,
  TaskList,
  TrackerHeader
};

/// Reducer state for the widget. Wraps the controller so every gesture
/// goes through `Action`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
  controller: TaskListController
}

impl TrackerState {
  pub fn view(&self) -> ListView {
    ListView::of(&self.controller)
  }
}

impl Reducible for TrackerState {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Action
  ) -> Rc<Self> {
    tracing::debug!(?action, "ui action");
    let mut next = (*self).clone();
    if next.controller.apply(action) {
      Rc::new(next)
    } else {
      self
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let state =
    use_reducer(TrackerState::default);
  let view = state.view();

  let on_draft_input = {
    let state = state.clone();
    Callback::from(
      move |text: String| {
        state
          .dispatch(Action::SetDraft(text))
      }
    )
  };

  let on_submit = {
    let state = state.clone();
    Callback::from(move |_: ()| {
      state.dispatch(Action::Submit)
    })
  };

  let on_toggle = {
    let state = state.clone();
    Callback::from(move |id: TaskId| {
      state.dispatch(Action::Toggle(id))
    })
  };

  let on_delete = {
    let state = state.clone();
    Callback::from(move |id: TaskId| {
      state.dispatch(Action::Delete(id))
    })
  };

  let on_filter = {
    let state = state.clone();
    Callback::from(
      move |filter: StatusFilter| {
        state.dispatch(
          Action::SetFilter(filter)
        )
      }
    )
  };

  html! {
      <div class="tracker">
          <TrackerHeader summary={view.summary()} />
          <main class="tracker-main">
              <TaskInput
                  draft={view.draft.clone()}
                  on_input={on_draft_input}
                  on_submit={on_submit}
              />
              {
                  if let Some(empty) = view.empty_state() {
                      html! { <EmptyStatePanel state={empty} /> }
                  } else {
                      html! {
                          <TaskList
                              tasks={view.tasks.clone()}
                              on_toggle={on_toggle}
                              on_delete={on_delete}
                          />
                      }
                  }
              }
          </main>
          <FilterBar tabs={view.filter_tabs()} on_select={on_filter} />
      </div>
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use tasktrack_core::{
    Action,
    StatusFilter
  };
  use yew::Reducible;

  use super::TrackerState;

  fn step(
    state: Rc<TrackerState>,
    action: Action
  ) -> Rc<TrackerState> {
    state.reduce(action)
  }

  #[test]
  fn typing_then_enter_adds_a_task() {
    let state =
      Rc::new(TrackerState::default());
    let state = step(
      state,
      Action::SetDraft(
        "water plants".to_string()
      )
    );
    assert_eq!(
      state.view().draft,
      "water plants"
    );

    let state =
      step(state, Action::Submit);
    let view = state.view();
    assert_eq!(view.draft, "");
    assert_eq!(view.tasks.len(), 1);
    assert_eq!(
      view.summary().as_deref(),
      Some("0 of 1 tasks completed")
    );
  }

  #[test]
  fn no_op_actions_keep_the_same_state()
  {
    let state =
      Rc::new(TrackerState::default());
    let next = step(
      Rc::clone(&state),
      Action::Submit
    );
    assert!(Rc::ptr_eq(&state, &next));
  }

  #[test]
  fn filter_tabs_follow_toggles() {
    let mut state =
      Rc::new(TrackerState::default());
    for text in ["a", "b"] {
      state = step(
        state,
        Action::Add(text.to_string())
      );
    }
    let first =
      state.view().tasks[0].id;
    state =
      step(state, Action::Toggle(first));
    state = step(
      state,
      Action::SetFilter(
        StatusFilter::Completed
      )
    );

    let view = state.view();
    let labels: Vec<String> = view
      .filter_tabs()
      .into_iter()
      .map(|tab| tab.label)
      .collect();
    assert_eq!(
      labels,
      vec![
        "All (2)",
        "Pending (1)",
        "Completed (1)"
      ]
    );
    assert_eq!(view.tasks.len(), 1);
    assert_eq!(view.tasks[0].id, first);
  }
}

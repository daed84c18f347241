use tasktrack_core::EmptyState;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmptyStatePanelProps {
  pub state: EmptyState
}

#[function_component(EmptyStatePanel)]
pub fn empty_state_panel(
  props: &EmptyStatePanelProps
) -> Html {
  html! {
      <div class="empty">
          <div class="empty-title">{ props.state.title }</div>
          <p class="empty-hint">{ props.state.hint }</p>
      </div>
  }
}

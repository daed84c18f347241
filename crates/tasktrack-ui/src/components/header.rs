use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TrackerHeaderProps {
  pub summary: Option<String>
}

#[function_component(TrackerHeader)]
pub fn tracker_header(
  props: &TrackerHeaderProps
) -> Html {
  html! {
      <header class="tracker-header">
          <h1>{ "Daily Task Tracker" }</h1>
          {
              if let Some(summary) = &props.summary {
                  html! { <p class="summary">{ summary }</p> }
              } else {
                  html! {}
              }
          }
      </header>
  }
}

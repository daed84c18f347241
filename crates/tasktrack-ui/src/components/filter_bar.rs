use tasktrack_core::{
  FilterTab,
  StatusFilter
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub tabs:      Vec<FilterTab>,
  pub on_select: Callback<StatusFilter>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  html! {
      <nav class="filter-bar">
          {
              for props.tabs.iter().map(|tab| {
                  let filter = tab.filter;
                  let on_select = props.on_select.clone();
                  let class = if tab.active { "tab active" } else { "tab" };
                  html! {
                      <button
                          key={filter.as_str()}
                          class={class}
                          onclick={move |_| on_select.emit(filter)}
                      >
                          { &tab.label }
                      </button>
                  }
              })
          }
      </nav>
  }
}

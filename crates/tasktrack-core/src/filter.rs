use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};
use tracing::trace;

use crate::task::Task;

/// Status subset applied to the displayed list. Exactly one is active.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
  #[default]
  All,
  Pending,
  Completed
}

impl StatusFilter {
  /// Display order of the filter tabs.
  pub const ORDER: [StatusFilter; 3] = [
    StatusFilter::All,
    StatusFilter::Pending,
    StatusFilter::Completed
  ];

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    let ok = match self {
      | StatusFilter::All => true,
      | StatusFilter::Pending => {
        !task.completed
      }
      | StatusFilter::Completed => {
        task.completed
      }
    };
    trace!(filter = %self, id = %task.id, ok, "filter match");
    ok
  }

  pub fn as_str(self) -> &'static str {
    match self {
      | StatusFilter::All => "all",
      | StatusFilter::Pending => {
        "pending"
      }
      | StatusFilter::Completed => {
        "completed"
      }
    }
  }

  /// Capitalized name used on tabs.
  pub fn label(self) -> &'static str {
    match self {
      | StatusFilter::All => "All",
      | StatusFilter::Pending => {
        "Pending"
      }
      | StatusFilter::Completed => {
        "Completed"
      }
    }
  }
}

impl fmt::Display for StatusFilter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for StatusFilter {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "all" => Ok(StatusFilter::All),
      | "pending" => {
        Ok(StatusFilter::Pending)
      }
      | "completed" => {
        Ok(StatusFilter::Completed)
      }
      | other => Err(anyhow!(
        "unknown filter '{other}', \
         expected one of: all, \
         pending, completed"
      ))
    }
  }
}

use std::io::{self, IsTerminal, Write};

use tasktrack_core::ListView;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Colours ids, completed rows and the active tab when stdout is a
    /// terminal.
    pub fn for_stdout() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Header summary, the visible tasks (or the empty-state copy) and the
    /// filter bar, in that order.
    #[tracing::instrument(skip_all, fields(filter = %view.filter, visible = view.tasks.len()))]
    pub fn print_view<W: Write>(&self, out: &mut W, view: &ListView) -> anyhow::Result<()> {
        if let Some(summary) = view.summary() {
            writeln!(out, "{summary}")?;
        }

        if let Some(empty) = view.empty_state() {
            writeln!(out, "{}", empty.title)?;
            writeln!(out, "  {}", empty.hint)?;
        } else {
            let headers = vec!["ID".to_string(), "Done".to_string(), "Task".to_string()];
            let rows = view
                .tasks
                .iter()
                .map(|task| {
                    let id = self.paint(&task.id.to_string(), "33");
                    let done = if task.completed { "[x]" } else { "[ ]" }.to_string();
                    let text = if task.completed {
                        self.paint(&task.text, "9;2")
                    } else {
                        task.text.clone()
                    };
                    vec![id, done, text]
                })
                .collect();
            write_table(&mut *out, headers, rows)?;
        }

        if !view.draft.is_empty() {
            writeln!(out, "draft: {}", view.draft)?;
        }

        let tabs = view
            .filter_tabs()
            .into_iter()
            .map(|tab| {
                if tab.active {
                    self.paint(&format!("[{}]", tab.label), "1")
                } else {
                    format!(" {} ", tab.label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{tabs}")?;
        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    let last = column_count.saturating_sub(1);
    for (idx, header) in headers.iter().enumerate() {
        if idx == last {
            write!(writer, "{header}")?;
        } else {
            write!(writer, "{:width$} ", header, width = widths[idx])?;
        }
    }
    writeln!(writer)?;

    for (idx, width) in widths.iter().enumerate() {
        let sep = if idx == last { "" } else { " " };
        write!(writer, "{:-<width$}{sep}", "", width = *width)?;
    }
    writeln!(writer)?;

    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx == last {
                write!(writer, "{cell}")?;
                continue;
            }
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = widths[idx].saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}

use std::fmt::Write;

use uuid::Uuid;

use crate::model::task::{Status, Task};

/// Placeholder shown instead of data rows when the effective list is empty.
pub const EMPTY_MESSAGE: &str = "No tasks today, wanna do something?";

/// One displayable task row. The text cells are already escaped for
/// embedding in a markup context; `id` is the weak back-reference an action
/// affordance carries so a later activation can be routed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// 1-based position in the effective list, not derived from the id.
    pub row_no: usize,
    pub id: Uuid,
    pub description: String,
    pub due_date: String,
    pub status: String,
    /// Label of the toggle affordance: "Undo" for a Done task, else "Done".
    pub action_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Single placeholder row carrying [`EMPTY_MESSAGE`].
    Empty,
    Rows(Vec<RenderedRow>),
}

impl Presentation {
    pub fn row_count(&self) -> usize {
        match self {
            Presentation::Empty => 0,
            Presentation::Rows(rows) => rows.len(),
        }
    }

    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            Presentation::Empty => &[],
            Presentation::Rows(rows) => rows,
        }
    }

    /// Table-body markup for embedding in an HTML shell: one row per task
    /// with the toggle and delete buttons carrying the task id, or a single
    /// full-width placeholder row when there is nothing to show.
    pub fn to_html(&self) -> String {
        match self {
            Presentation::Empty => {
                format!("<tr><td colspan=\"5\">{EMPTY_MESSAGE}</td></tr>")
            }
            Presentation::Rows(rows) => {
                let mut out = String::new();
                for row in rows {
                    let _ = write!(
                        out,
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                         <td><button data-id=\"{}\">{}</button>\
                         <button data-id=\"{}\">Delete</button></td></tr>",
                        row.row_no,
                        row.description,
                        row.due_date,
                        row.status,
                        row.id,
                        row.action_label,
                        row.id,
                    );
                }
                out
            }
        }
    }
}

/// Materializes the presentation for the given effective list. Deterministic
/// and side-effect free; row numbers are recomputed from scratch every call
/// because they shift under deletion and filtering.
pub fn render(tasks: &[Task]) -> Presentation {
    if tasks.is_empty() {
        return Presentation::Empty;
    }

    let rows = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| RenderedRow {
            row_no: idx + 1,
            id: task.id,
            description: escape_markup(&task.description),
            due_date: escape_markup(&task.due_date),
            status: escape_markup(task.status.as_str()),
            action_label: action_label(task.status),
        })
        .collect();

    Presentation::Rows(rows)
}

fn action_label(status: Status) -> &'static str {
    match status {
        Status::Done => "Undo",
        Status::Pending => "Done",
    }
}

/// Escapes user-supplied text for a markup context. The ampersand must be
/// replaced first so already-produced entities are not escaped again.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_replaces_all_special_characters() {
        assert_eq!(
            escape_markup("a & b < c > d \" e ' f"),
            "a &amp; b &lt; c &gt; d &quot; e &#039; f"
        );
        assert_eq!(escape_markup("<script>"), "&lt;script&gt;");
        assert_eq!(escape_markup("plain text"), "plain text");
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let presentation = render(&[]);
        assert_eq!(presentation, Presentation::Empty);
        assert_eq!(presentation.row_count(), 0);
        assert!(presentation.to_html().contains(EMPTY_MESSAGE));
        assert!(presentation.to_html().contains("colspan=\"5\""));
    }

    #[test]
    fn test_rows_are_numbered_by_position() {
        let tasks = vec![
            Task::new("Buy milk".to_string(), "2024-01-01".to_string()),
            Task::new("Walk dog".to_string(), "2024-01-02".to_string()),
        ];

        let presentation = render(&tasks);
        let rows = presentation.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_no, 1);
        assert_eq!(rows[0].description, "Buy milk");
        assert_eq!(rows[1].row_no, 2);
        assert_eq!(rows[1].id, tasks[1].id);
    }

    #[test]
    fn test_action_label_follows_status() {
        let mut tasks = vec![
            Task::new("Buy milk".to_string(), "2024-01-01".to_string()),
            Task::new("Walk dog".to_string(), "2024-01-02".to_string()),
        ];
        tasks[1].status = Status::Done;

        let rows = render(&tasks).rows().to_vec();
        assert_eq!(rows[0].action_label, "Done");
        assert_eq!(rows[0].status, "Pending");
        assert_eq!(rows[1].action_label, "Undo");
        assert_eq!(rows[1].status, "Done");
    }

    #[test]
    fn test_markup_injection_is_neutralized() {
        let tasks = vec![Task::new(
            "<script>alert('x')</script>".to_string(),
            "2024-01-01".to_string(),
        )];

        let presentation = render(&tasks);
        let row = &presentation.rows()[0];
        assert_eq!(
            row.description,
            "&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"
        );
        assert!(!presentation.to_html().contains("<script>"));
    }

    #[test]
    fn test_html_rows_carry_the_task_id() {
        let tasks = vec![Task::new("Buy milk".to_string(), "2024-01-01".to_string())];
        let html = render(&tasks).to_html();

        assert!(html.contains(&format!("data-id=\"{}\"", tasks[0].id)));
        assert!(html.contains(">Done</button>"));
        assert!(html.contains(">Delete</button>"));
    }
}

use crate::model::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    RowNumber,
    Description,
    DueDate,
    Status,
}

impl FilterKind {
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::RowNumber => "row number",
            FilterKind::Description => "description",
            FilterKind::DueDate => "due date",
            FilterKind::Status => "status",
        }
    }
}

/// What the user typed into the filter controls: a kind and a raw query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub kind: Option<FilterKind>,
    pub query: String,
}

impl FilterSpec {
    pub fn new(kind: Option<FilterKind>, query: impl Into<String>) -> Self {
        Self {
            kind,
            query: query.into(),
        }
    }

    /// A spec with no kind or an empty trimmed query means "no filter" and
    /// must behave exactly like an explicit filter clear.
    pub fn is_noop(&self) -> bool {
        self.kind.is_none() || self.query.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// No meaningful spec: show everything. Distinct from matching nothing,
    /// so the caller can tell "show all" from "zero matches".
    PassThrough,
    Matched(Vec<Task>),
}

/// Derives the filtered view of `tasks` for `spec`. Pure; no state is kept
/// between calls. Order of the input is preserved in the output.
pub fn apply(tasks: &[Task], spec: &FilterSpec) -> FilterOutcome {
    let query = spec.query.trim();
    let kind = match spec.kind {
        Some(kind) if !query.is_empty() => kind,
        _ => return FilterOutcome::PassThrough,
    };

    let matched = match kind {
        // Strict base-10 parse; anything unparseable matches nothing.
        // Positions are 1-based against the slice handed in.
        FilterKind::RowNumber => match query.parse::<usize>() {
            Ok(n) if n >= 1 => tasks.get(n - 1).cloned().into_iter().collect(),
            _ => Vec::new(),
        },
        FilterKind::Description => {
            let q = query.to_lowercase();
            tasks
                .iter()
                .filter(|t| t.description.to_lowercase().contains(&q))
                .cloned()
                .collect()
        }
        // Exact string equality on the YYYY-MM-DD token; no normalization,
        // no partial-date matching.
        FilterKind::DueDate => tasks
            .iter()
            .filter(|t| t.due_date == query)
            .cloned()
            .collect(),
        FilterKind::Status => {
            let q = query.to_lowercase();
            tasks
                .iter()
                .filter(|t| t.status.as_str().to_lowercase() == q)
                .cloned()
                .collect()
        }
    };

    FilterOutcome::Matched(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Status;

    fn sample_tasks() -> Vec<Task> {
        let mut tasks = vec![
            Task::new("Buy milk".to_string(), "2024-01-01".to_string()),
            Task::new("Walk dog".to_string(), "2024-01-02".to_string()),
            Task::new("Water plants".to_string(), "2024-01-02".to_string()),
        ];
        tasks[1].status = Status::Done;
        tasks
    }

    fn matched(outcome: FilterOutcome) -> Vec<Task> {
        match outcome {
            FilterOutcome::Matched(tasks) => tasks,
            FilterOutcome::PassThrough => panic!("expected a matched outcome"),
        }
    }

    #[test]
    fn test_noop_spec_passes_through() {
        let tasks = sample_tasks();

        let no_kind = FilterSpec::new(None, "anything");
        assert_eq!(apply(&tasks, &no_kind), FilterOutcome::PassThrough);

        let blank_query = FilterSpec::new(Some(FilterKind::Description), "   ");
        assert_eq!(apply(&tasks, &blank_query), FilterOutcome::PassThrough);
    }

    #[test]
    fn test_row_number_selects_by_position() {
        let tasks = sample_tasks();

        let hit = matched(apply(
            &tasks,
            &FilterSpec::new(Some(FilterKind::RowNumber), "2"),
        ));
        assert_eq!(hit, vec![tasks[1].clone()]);

        for query in ["0", "4", "abc"] {
            let miss = matched(apply(
                &tasks,
                &FilterSpec::new(Some(FilterKind::RowNumber), query),
            ));
            assert!(miss.is_empty(), "query {:?} should match nothing", query);
        }
    }

    #[test]
    fn test_description_match_is_case_insensitive_substring() {
        let tasks = sample_tasks();
        let spec = FilterSpec::new(Some(FilterKind::Description), "DOG");

        let hit = matched(apply(&tasks, &spec));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].description, "Walk dog");
    }

    #[test]
    fn test_due_date_match_is_exact() {
        let tasks = sample_tasks();

        let hit = matched(apply(
            &tasks,
            &FilterSpec::new(Some(FilterKind::DueDate), "2024-01-02"),
        ));
        assert_eq!(hit.len(), 2);

        // No partial-date matching.
        let miss = matched(apply(
            &tasks,
            &FilterSpec::new(Some(FilterKind::DueDate), "2024-01"),
        ));
        assert!(miss.is_empty());
    }

    #[test]
    fn test_status_match_is_case_insensitive() {
        let tasks = sample_tasks();

        for query in ["done", "DONE"] {
            let hit = matched(apply(
                &tasks,
                &FilterSpec::new(Some(FilterKind::Status), query),
            ));
            assert_eq!(hit.len(), 1);
            assert_eq!(hit[0].description, "Walk dog");
        }

        let pending = matched(apply(
            &tasks,
            &FilterSpec::new(Some(FilterKind::Status), "pending"),
        ));
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_apply_is_idempotent_on_unchanged_input() {
        let tasks = sample_tasks();
        let spec = FilterSpec::new(Some(FilterKind::Description), "wa");

        let first = apply(&tasks, &spec);
        let second = apply(&tasks, &spec);
        assert_eq!(first, second);
    }
}

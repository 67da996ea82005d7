use chrono::Local;
use ratatui::widgets::TableState;
use todotab_core::{Controller, Event, FilterKind, FilterSpec, Presentation, Response};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Adding,
    Filtering,
    Confirming(PendingAction),
}

/// A destructive action parked until the user answers the prompt.
/// `n` or Esc cancels with no state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteTask(Uuid),
    ClearAll,
}

impl PendingAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingAction::DeleteTask(_) => "Delete this task? (y/n)",
            PendingAction::ClearAll => "Are you sure you want to clear ALL tasks? (y/n)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Description,
    DueDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Kind,
    Query,
}

/// Single-line text input with a char-indexed cursor.
#[derive(Debug, Default)]
pub struct Input {
    pub value: String,
    pub cursor: usize,
}

impl Input {
    fn byte_index(&self, chars: usize) -> usize {
        self.value.chars().take(chars).map(|c| c.len_utf8()).sum()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn set(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.value = value;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

const KIND_OPTIONS: [Option<FilterKind>; 5] = [
    None,
    Some(FilterKind::RowNumber),
    Some(FilterKind::Description),
    Some(FilterKind::DueDate),
    Some(FilterKind::Status),
];

pub struct App {
    controller: Controller,
    pub presentation: Presentation,
    pub table_state: TableState,
    pub mode: Mode,
    pub description_input: Input,
    pub due_date_input: Input,
    pub add_focus: AddField,
    pub filter_kind: Option<FilterKind>,
    pub query_input: Input,
    pub filter_focus: FilterField,
    pub alert: Option<String>,
}

impl App {
    pub fn new() -> App {
        let controller = Controller::new();
        let presentation = controller.current_view();

        let mut due_date_input = Input::default();
        due_date_input.set(today());

        App {
            controller,
            presentation,
            table_state: TableState::default(),
            mode: Mode::Normal,
            description_input: Input::default(),
            due_date_input,
            add_focus: AddField::Description,
            filter_kind: None,
            query_input: Input::default(),
            filter_focus: FilterField::Kind,
            alert: None,
        }
    }

    // --- Navigation ---

    pub fn next(&mut self) {
        let count = self.presentation.row_count();
        if count == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= count - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let count = self.presentation.row_count();
        if count == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    count - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Id of the selected row, resolved from the presentation. The row only
    /// ever carries the id; the task itself is looked up at event time.
    fn selected_id(&self) -> Option<Uuid> {
        let i = self.table_state.selected()?;
        self.presentation.rows().get(i).map(|row| row.id)
    }

    // --- Actions on the selected row ---

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.dispatch(Event::ToggleRequested { id });
        }
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.mode = Mode::Confirming(PendingAction::DeleteTask(id));
        }
    }

    pub fn request_clear_all(&mut self) {
        self.mode = Mode::Confirming(PendingAction::ClearAll);
    }

    pub fn confirm(&mut self, yes: bool) {
        if let Mode::Confirming(action) = self.mode {
            self.mode = Mode::Normal;
            if !yes {
                return;
            }
            match action {
                PendingAction::DeleteTask(id) => {
                    self.dispatch(Event::DeleteRequested { id });
                }
                PendingAction::ClearAll => {
                    self.dispatch(Event::ClearAllRequested);
                    self.filter_kind = None;
                    self.query_input.clear();
                }
            }
        }
    }

    // --- Mode switching ---

    pub fn enter_add_mode(&mut self) {
        self.mode = Mode::Adding;
        self.add_focus = AddField::Description;
    }

    pub fn enter_filter_mode(&mut self) {
        self.mode = Mode::Filtering;
        self.filter_focus = FilterField::Kind;
    }

    pub fn cancel_input(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn clear_filter(&mut self) {
        self.filter_kind = None;
        self.query_input.clear();
        self.dispatch(Event::FilterCleared);
    }

    // --- Text input routing ---

    pub fn input_char(&mut self, c: char) {
        match self.mode {
            Mode::Adding => self.focused_add_input().insert(c),
            Mode::Filtering => {
                if self.filter_focus == FilterField::Query {
                    self.query_input.insert(c);
                }
            }
            Mode::Normal | Mode::Confirming(_) => {}
        }
    }

    pub fn delete_char(&mut self) {
        match self.mode {
            Mode::Adding => self.focused_add_input().backspace(),
            Mode::Filtering => {
                if self.filter_focus == FilterField::Query {
                    self.query_input.backspace();
                }
            }
            Mode::Normal | Mode::Confirming(_) => {}
        }
    }

    pub fn left(&mut self) {
        match self.mode {
            Mode::Adding => self.focused_add_input().move_left(),
            Mode::Filtering => match self.filter_focus {
                FilterField::Kind => self.cycle_kind(false),
                FilterField::Query => self.query_input.move_left(),
            },
            Mode::Normal | Mode::Confirming(_) => {}
        }
    }

    pub fn right(&mut self) {
        match self.mode {
            Mode::Adding => self.focused_add_input().move_right(),
            Mode::Filtering => match self.filter_focus {
                FilterField::Kind => self.cycle_kind(true),
                FilterField::Query => self.query_input.move_right(),
            },
            Mode::Normal | Mode::Confirming(_) => {}
        }
    }

    pub fn next_field(&mut self) {
        match self.mode {
            Mode::Adding => {
                self.add_focus = match self.add_focus {
                    AddField::Description => AddField::DueDate,
                    AddField::DueDate => AddField::Description,
                };
            }
            Mode::Filtering => {
                self.filter_focus = match self.filter_focus {
                    FilterField::Kind => FilterField::Query,
                    FilterField::Query => FilterField::Kind,
                };
            }
            Mode::Normal | Mode::Confirming(_) => {}
        }
    }

    fn focused_add_input(&mut self) -> &mut Input {
        match self.add_focus {
            AddField::Description => &mut self.description_input,
            AddField::DueDate => &mut self.due_date_input,
        }
    }

    fn cycle_kind(&mut self, forward: bool) {
        let pos = KIND_OPTIONS
            .iter()
            .position(|k| *k == self.filter_kind)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % KIND_OPTIONS.len()
        } else {
            (pos + KIND_OPTIONS.len() - 1) % KIND_OPTIONS.len()
        };
        self.filter_kind = KIND_OPTIONS[next];
    }

    // --- Submission ---

    pub fn submit(&mut self) {
        match self.mode {
            Mode::Adding => self.submit_add(),
            Mode::Filtering => self.submit_filter(),
            Mode::Normal | Mode::Confirming(_) => {}
        }
    }

    fn submit_add(&mut self) {
        let event = Event::CreateRequested {
            description: self.description_input.value.clone(),
            due_date: self.due_date_input.value.clone(),
        };
        if self.dispatch(event) {
            // Ready for the next entry: inputs reset, focus back on the
            // description. The form stays open.
            self.description_input.clear();
            self.due_date_input.set(today());
            self.add_focus = AddField::Description;
        }
    }

    fn submit_filter(&mut self) {
        let spec = FilterSpec::new(self.filter_kind, self.query_input.value.clone());
        self.dispatch(Event::FilterApplied { spec });
        self.mode = Mode::Normal;
    }

    /// Hands one event to the controller and takes over the re-rendered
    /// view. Returns whether the event was accepted.
    fn dispatch(&mut self, event: Event) -> bool {
        match self.controller.handle(event) {
            Response::Rendered(presentation) => {
                self.presentation = presentation;
                self.alert = None;
                self.fix_selection();
                true
            }
            Response::Rejected(err) => {
                self.alert = Some(format!("Form validation failed: {err}."));
                false
            }
        }
    }

    /// Row numbers shift under deletion and filtering; clamp the selection
    /// to whatever the new presentation actually has.
    fn fix_selection(&mut self) {
        let count = self.presentation.row_count();
        if count == 0 {
            self.table_state.select(None);
        } else {
            let i = self.table_state.selected().unwrap_or(0).min(count - 1);
            self.table_state.select(Some(i));
        }
    }

    // --- Read accessors for drawing ---

    pub fn filter_status(&self) -> String {
        match self.controller.active_filter() {
            Some(spec) => {
                let kind = spec.kind.map_or("?", |k| k.label());
                format!("Filter: {} ~ \"{}\"", kind, spec.query.trim())
            }
            None => "Filter: off".to_string(),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        self.filter_kind.map_or("(none)", |k| k.label())
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_task(app: &mut App, description: &str) {
        app.enter_add_mode();
        for c in description.chars() {
            app.input_char(c);
        }
        app.submit();
        app.cancel_input();
    }

    #[test]
    fn test_starts_with_placeholder_and_no_selection() {
        let app = App::new();
        assert_eq!(app.presentation, Presentation::Empty);
        assert_eq!(app.table_state.selected(), None);
        assert!(!app.due_date_input.value.is_empty());
    }

    #[test]
    fn test_add_flow_creates_row_and_resets_inputs() {
        let mut app = App::new();
        add_task(&mut app, "Buy milk");

        assert_eq!(app.presentation.row_count(), 1);
        assert_eq!(app.presentation.rows()[0].description, "Buy milk");
        assert!(app.description_input.value.is_empty());
        assert_eq!(app.add_focus, AddField::Description);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_rejected_add_raises_alert_and_keeps_input() {
        let mut app = App::new();
        app.enter_add_mode();
        app.submit();

        assert!(app.alert.is_some());
        assert_eq!(app.presentation, Presentation::Empty);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = App::new();
        add_task(&mut app, "Buy milk");
        app.next();

        app.request_delete_selected();
        assert!(matches!(app.mode, Mode::Confirming(PendingAction::DeleteTask(_))));

        // Declining cancels with no state change.
        app.confirm(false);
        assert_eq!(app.presentation.row_count(), 1);
        assert_eq!(app.mode, Mode::Normal);

        app.request_delete_selected();
        app.confirm(true);
        assert_eq!(app.presentation, Presentation::Empty);
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn test_filter_cycle_and_apply() {
        let mut app = App::new();
        add_task(&mut app, "Buy milk");
        add_task(&mut app, "Walk dog");

        app.enter_filter_mode();
        // none -> row number -> description
        app.right();
        app.right();
        assert_eq!(app.filter_kind, Some(FilterKind::Description));
        app.next_field();
        for c in "dog".chars() {
            app.input_char(c);
        }
        app.submit();

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.presentation.row_count(), 1);
        assert_eq!(app.presentation.rows()[0].description, "Walk dog");

        app.clear_filter();
        assert_eq!(app.presentation.row_count(), 2);
        assert_eq!(app.filter_kind, None);
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut app = App::new();
        add_task(&mut app, "Buy milk");
        app.request_clear_all();
        app.confirm(true);

        assert_eq!(app.presentation, Presentation::Empty);
        assert_eq!(app.filter_status(), "Filter: off");
    }
}

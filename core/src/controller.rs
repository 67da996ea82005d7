use tracing::debug;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::filter::{self, FilterOutcome, FilterSpec};
use crate::render::{self, Presentation};
use crate::store::TaskStore;

/// A discrete user-initiated action, raised by whatever affordance the
/// boundary exposes. Delete and clear-all arrive here only after the
/// boundary has confirmed the destructive intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CreateRequested { description: String, due_date: String },
    DeleteRequested { id: Uuid },
    ToggleRequested { id: Uuid },
    FilterApplied { spec: FilterSpec },
    FilterCleared,
    ClearAllRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The view to display after the event took effect.
    Rendered(Presentation),
    /// Creation failed validation; store and view are unchanged and the
    /// boundary should notify the user.
    Rejected(ValidationError),
}

/// Wires events to the store and filter engine and re-renders after every
/// accepted event. Owns the one piece of transient UI state: the filter
/// spec currently in effect, if any. Constructed once per session; there
/// are no hidden statics.
#[derive(Debug, Default)]
pub struct Controller {
    store: TaskStore,
    active_filter: Option<FilterSpec>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_active(&self) -> bool {
        self.active_filter.is_some()
    }

    pub fn active_filter(&self) -> Option<&FilterSpec> {
        self.active_filter.as_ref()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Renders the currently effective list without mutating anything.
    /// Used for the initial paint.
    pub fn current_view(&self) -> Presentation {
        self.render_effective()
    }

    /// Consumes one event to completion. Events never overlap; the boundary
    /// is single-threaded and hands them over one at a time.
    pub fn handle(&mut self, event: Event) -> Response {
        match event {
            Event::CreateRequested {
                description,
                due_date,
            } => match self.store.create(&description, &due_date) {
                // A new task is not revealed by force: an active filter
                // stays applied and may legitimately hide it.
                Ok(_) => Response::Rendered(self.render_effective()),
                Err(err) => {
                    debug!(%err, "task creation rejected");
                    Response::Rejected(err)
                }
            },
            Event::DeleteRequested { id } => {
                self.store.delete(id);
                Response::Rendered(self.render_effective())
            }
            Event::ToggleRequested { id } => {
                self.store.toggle_status(id);
                Response::Rendered(self.render_effective())
            }
            Event::FilterApplied { spec } => {
                // A no-op spec behaves exactly like an explicit clear.
                if spec.is_noop() {
                    self.active_filter = None;
                } else {
                    debug!(?spec, "filter applied");
                    self.active_filter = Some(spec);
                }
                Response::Rendered(self.render_effective())
            }
            Event::FilterCleared => {
                self.active_filter = None;
                Response::Rendered(self.render_effective())
            }
            Event::ClearAllRequested => {
                self.store.clear_all();
                self.active_filter = None;
                Response::Rendered(self.render_effective())
            }
        }
    }

    /// Full store, or the held spec re-run against the current store.
    /// Filters always run against the full store, never against a previous
    /// filter's output.
    fn render_effective(&self) -> Presentation {
        match &self.active_filter {
            Some(spec) => match filter::apply(self.store.list(), spec) {
                FilterOutcome::Matched(tasks) => render::render(&tasks),
                FilterOutcome::PassThrough => render::render(self.store.list()),
            },
            None => render::render(self.store.list()),
        }
    }
}

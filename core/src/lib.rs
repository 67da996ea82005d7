pub mod controller;
pub mod error;
pub mod filter;
pub mod model;
pub mod render;
pub mod store;


pub use controller::{Controller, Event, Response};
pub use error::ValidationError;
pub use filter::{FilterKind, FilterOutcome, FilterSpec};
pub use model::task::{Status, Task};
pub use render::{render, Presentation, RenderedRow, EMPTY_MESSAGE};
pub use store::TaskStore;

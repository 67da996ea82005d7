use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Done,
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl Status {
    /// Textual form shown to the user and matched by the status filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Done => "Done",
        }
    }

    pub fn toggled(&self) -> Status {
        match self {
            Status::Pending => Status::Done,
            Status::Done => Status::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub description: String,

    // Kept as the raw YYYY-MM-DD token from the input widget. Compared as a
    // string everywhere; never parsed into a date type.
    pub due_date: String,

    pub status: Status,
}

impl Task {
    pub fn new(description: String, due_date: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            due_date,
            status: Status::default(),
        }
    }
}

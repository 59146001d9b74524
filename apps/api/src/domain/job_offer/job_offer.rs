use serde::{Deserialize, Serialize};

/// A posted job vacancy
///
/// The identifier is absent until storage assigns one. The remaining
/// fields are opaque to the API layer; `title` only has to be present.
///
/// # Invariants
/// - A job offer submitted for creation has no `id`
///
/// # Example
/// ```
/// use jobvacancy_api::domain::job_offer::JobOffer;
///
/// let offer = JobOffer::new("Rust developer").with_location("Buenos Aires");
///
/// assert!(offer.is_new());
/// assert_eq!(offer.location.as_deref(), Some("Buenos Aires"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobOffer {
    pub id: Option<i64>,
    pub title: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl JobOffer {
    /// Creates a job offer that has not been persisted yet
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            location: None,
            description: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true when storage has not assigned an identifier yet
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

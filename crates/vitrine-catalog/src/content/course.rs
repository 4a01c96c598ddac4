//! Course type.

use serde::{Deserialize, Serialize};
use vitrine_commerce::CourseId;

/// A course offered on the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique course identifier.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description (may contain HTML/markdown).
    pub description: Option<String>,
    /// Cover image reference.
    pub cover_image: Option<String>,
    /// Total workload in hours.
    pub workload_hours: Option<i32>,
    /// Where to enroll (external platform).
    pub enrollment_url: Option<String>,
}

impl Course {
    /// Create a new course.
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CourseId::generate(),
            title: title.into(),
            slug: slug.into(),
            description: None,
            cover_image: None,
            workload_hours: None,
            enrollment_url: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the workload.
    pub fn with_workload_hours(mut self, hours: i32) -> Self {
        self.workload_hours = Some(hours);
        self
    }
}

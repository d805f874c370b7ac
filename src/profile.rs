//! Profile composer — accumulates free-text tags per category.

use crate::model::{ExperienceLevel, UserProfile};

/// The four tag categories a profile is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    Skills,
    Interests,
    CompletedCourses,
    PreferredDomains,
}

impl TagCategory {
    pub const ALL: [TagCategory; 4] = [
        Self::Skills,
        Self::Interests,
        Self::CompletedCourses,
        Self::PreferredDomains,
    ];

    /// Label used by the REPL surface.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Interests => "interests",
            Self::CompletedCourses => "completed courses",
            Self::PreferredDomains => "preferred domains",
        }
    }
}

/// Session-scoped tag accumulator.
///
/// Entries are case-sensitive, duplicate-free within a category, and keep
/// first-insertion order (insertion order is the display order). Nothing is
/// persisted; the composer dies with the session.
#[derive(Debug, Default)]
pub struct ProfileComposer {
    skills: Vec<String>,
    interests: Vec<String>,
    completed_courses: Vec<String>,
    preferred_domains: Vec<String>,
}

impl ProfileComposer {
    pub fn new() -> Self {
        Self::default()
    }

    fn category(&self, category: TagCategory) -> &Vec<String> {
        match category {
            TagCategory::Skills => &self.skills,
            TagCategory::Interests => &self.interests,
            TagCategory::CompletedCourses => &self.completed_courses,
            TagCategory::PreferredDomains => &self.preferred_domains,
        }
    }

    fn category_mut(&mut self, category: TagCategory) -> &mut Vec<String> {
        match category {
            TagCategory::Skills => &mut self.skills,
            TagCategory::Interests => &mut self.interests,
            TagCategory::CompletedCourses => &mut self.completed_courses,
            TagCategory::PreferredDomains => &mut self.preferred_domains,
        }
    }

    /// Add a tag. Empty/whitespace-only input and exact duplicates are
    /// silently ignored. Returns the updated ordered contents.
    pub fn add_tag(&mut self, category: TagCategory, value: &str) -> &[String] {
        let value = value.trim();
        let tags = self.category_mut(category);
        if !value.is_empty() && !tags.iter().any(|t| t == value) {
            tags.push(value.to_string());
        }
        tags
    }

    /// Remove the first exact match. No-op when absent.
    pub fn remove_tag(&mut self, category: TagCategory, value: &str) -> &[String] {
        let value = value.trim();
        let tags = self.category_mut(category);
        if let Some(pos) = tags.iter().position(|t| t == value) {
            tags.remove(pos);
        }
        tags
    }

    /// Current ordered contents of a category.
    pub fn tags(&self, category: TagCategory) -> &[String] {
        self.category(category)
    }

    /// Immutable profile snapshot from current contents plus the supplied
    /// experience level.
    pub fn snapshot(&self, experience_level: ExperienceLevel) -> UserProfile {
        UserProfile {
            skills: self.skills.clone(),
            interests: self.interests.clone(),
            completed_courses: self.completed_courses.clone(),
            experience_level,
            preferred_domains: self.preferred_domains.clone(),
        }
    }
}

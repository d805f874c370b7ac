//! Wire schema for the recommendation service.
//!
//! Every payload crossing the HTTP boundary has an explicit type here;
//! unexpected shapes are rejected at deserialization instead of propagating
//! untyped JSON through the client.

use serde::{Deserialize, Serialize};

/// Self-assessed experience level submitted with a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        Self::Intermediate
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!(
                "unknown experience level '{other}' (expected beginner, intermediate or advanced)"
            )),
        }
    }
}

/// The profile submitted for recommendations.
///
/// Each list is duplicate-free and keeps first-insertion order; the composer
/// enforces both before a snapshot is taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub completed_courses: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub preferred_domains: Vec<String>,
}

/// One ranked job descriptor. Immutable once received; selected by position
/// in the result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job_id: String,
    pub title: String,
    pub domain: String,
    /// Match score in [0, 1], server-computed.
    pub score: f64,
    pub required_skills: Vec<String>,
}

impl JobRecommendation {
    /// Score as a rounded percentage for display.
    pub fn score_percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}

/// Wire shape of `POST /recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<JobRecommendation>,
}

/// A course attached to a step. Purely descriptive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub url: String,
}

/// One step of a path proposal. The wire names the ordinal `step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepTemplate {
    #[serde(rename = "step")]
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub recommended_courses: Vec<Course>,
}

/// Wire shape of `GET /jobs/{job_id}/learning-path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathTemplate {
    pub path: Vec<StepTemplate>,
}

/// Completion state of a step on an active path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Completed,
}

impl StepStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Doubles as the `status` query-string value on step updates.
        let s = match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

/// One step of a user-owned path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub courses: Vec<Course>,
    pub status: StepStatus,
}

/// A user-owned, server-persisted learning path.
///
/// The client holds a transient copy. `progress_percentage` is always the
/// server's aggregate over step statuses; the client never computes it and
/// every mutation response replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivePath {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub progress_percentage: u8,
    pub steps: Vec<PathStep>,
}

impl ActivePath {
    pub fn step(&self, step_number: u32) -> Option<&PathStep> {
        self.steps.iter().find(|s| s.step_number == step_number)
    }
}

/// Error body optionally returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

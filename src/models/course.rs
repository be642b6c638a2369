use serde::{Deserialize, Serialize};

/// Difficulty level of a course or a learner
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Parses a level token, defaulting to beginner for unknown values
    pub fn parse(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            _ => Level::Beginner,
        }
    }

    /// Position on the beginner/intermediate/advanced scale
    pub fn ordinal(self) -> i8 {
        match self {
            Level::Beginner => 0,
            Level::Intermediate => 1,
            Level::Advanced => 2,
        }
    }

    /// Title-cased name for display in rationales
    pub fn display(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Whether a course is free or paid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cost {
    Free,
    Paid,
}

impl Cost {
    /// Parses a cost token, defaulting to paid for unknown values
    pub fn parse(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "free" => Cost::Free,
            _ => Cost::Paid,
        }
    }

    /// Title-cased name for display in rationales
    pub fn display(self) -> &'static str {
        match self {
            Cost::Free => "Free",
            Cost::Paid => "Paid",
        }
    }
}

/// A single catalog entry. Loaded once at startup and never mutated
/// by the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Course title (e.g., "Python for Beginners")
    pub title: String,
    /// Platform offering the course (e.g., "Coursera")
    pub provider: String,
    /// Free-text duration (e.g., "6 weeks")
    pub duration: String,
    /// Prerequisite skill tokens; empty when the course has none
    pub prerequisites: Vec<String>,
    /// Skills the course teaches
    pub skill_tags: Vec<String>,
    /// Difficulty level
    pub level: Level,
    /// Domain the course belongs to, matched case-insensitively
    pub domain: String,
    pub cost: Cost,
    /// Enrollment URL
    pub link: String,
}

impl Course {
    /// Concatenated text used as this course's document in the similarity index
    pub fn document_text(&self) -> String {
        let mut parts = Vec::with_capacity(3 + self.skill_tags.len());
        parts.push(self.title.as_str());
        parts.push(self.provider.as_str());
        parts.extend(self.skill_tags.iter().map(String::as_str));
        parts.push(self.domain.as_str());
        parts.join(" ")
    }
}

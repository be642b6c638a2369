use serde::{Deserialize, Serialize};

use super::Level;

/// A learner's profile as submitted with a recommendation request.
/// Read-only during matching; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserProfile {
    /// Education level (e.g., "Bachelor's")
    #[serde(default)]
    pub education: String,
    /// Field of study (e.g., "Computer Science")
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Domain the learner wants to move into, if any
    #[serde(default)]
    pub target_domain: Option<String>,
    #[serde(default)]
    pub career_goals: Option<String>,
    /// Self-assessed experience level
    #[serde(default)]
    pub level: Level,
}

impl UserProfile {
    /// Concatenated text used as the query document in the similarity index
    pub fn query_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.education.as_str(), self.major.as_str()];
        parts.extend(self.technical_skills.iter().map(String::as_str));
        parts.extend(self.soft_skills.iter().map(String::as_str));
        parts.extend(self.interests.iter().map(String::as_str));
        if let Some(domain) = &self.target_domain {
            parts.push(domain.as_str());
        }
        if let Some(goals) = &self.career_goals {
            parts.push(goals.as_str());
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

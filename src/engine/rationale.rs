use super::scorers::skill_similarity;
use crate::models::{ScoredCourse, UserProfile};

/// How many matched skills / missing prerequisites a rationale names
const SHOWN_TOKEN_CAP: usize = 2;

/// Builds the human-readable explanation for one recommendation.
///
/// Everything here derives from the course record and the rule scorers;
/// the TF-IDF similarity is never recomputed.
pub fn rationale(scored: &ScoredCourse, profile: &UserProfile) -> String {
    let course = &scored.course;

    // User skills that line up with what the course teaches
    let mut matching_skills: Vec<&str> = Vec::new();
    for skill in &profile.technical_skills {
        let matches = course
            .skill_tags
            .iter()
            .any(|tag| skill_similarity(skill, tag) > 0.6);
        if matches && !matching_skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            matching_skills.push(skill.as_str());
        }
    }
    matching_skills.truncate(SHOWN_TOKEN_CAP);

    // Prerequisites the learner does not cover yet
    let mut missing_prereqs: Vec<&str> = course
        .prerequisites
        .iter()
        .filter(|prereq| {
            !profile
                .technical_skills
                .iter()
                .any(|skill| skill_similarity(prereq, skill) > 0.7)
        })
        .map(String::as_str)
        .collect();
    missing_prereqs.truncate(SHOWN_TOKEN_CAP);

    let mut parts: Vec<String> = Vec::with_capacity(5);

    if matching_skills.is_empty() {
        parts.push("Great starting point for your interests".to_string());
    } else {
        parts.push(format!(
            "Matches your skills in {}",
            matching_skills.join(", ")
        ));
    }

    if missing_prereqs.is_empty() {
        parts.push("Builds directly on your current skills".to_string());
    } else {
        parts.push(format!("Will help you learn {}", missing_prereqs.join(", ")));
    }

    parts.push(format!("Level: {}", course.level.display()));
    parts.push(format!("Duration: {}", course.duration));
    parts.push(format!("Cost: {}", course.cost.display()));

    parts.join(". ") + "."
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentScores, Cost, Course, Level};

    fn scored(tags: &[&str], prereqs: &[&str]) -> ScoredCourse {
        ScoredCourse {
            course: Course {
                title: "Data Science Fundamentals".to_string(),
                provider: "Coursera".to_string(),
                duration: "10 weeks".to_string(),
                prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
                skill_tags: tags.iter().map(|t| t.to_string()).collect(),
                level: Level::Beginner,
                domain: "data science".to_string(),
                cost: Cost::Free,
                link: "https://example.org".to_string(),
            },
            fit_score: 75,
            scores: ComponentScores {
                similarity: 0.4,
                level: 1.0,
                prerequisite: 0.5,
            },
        }
    }

    fn profile(skills: &[&str]) -> UserProfile {
        UserProfile {
            technical_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_names_matching_skills_and_missing_prereqs() {
        let scored = scored(&["python", "pandas"], &["python", "statistics"]);
        let text = rationale(&scored, &profile(&["python"]));
        assert!(text.starts_with("Matches your skills in python"), "{text}");
        assert!(text.contains("Will help you learn statistics"), "{text}");
        assert!(text.contains("Level: Beginner"));
        assert!(text.contains("Duration: 10 weeks"));
        assert!(text.ends_with("Cost: Free."), "{text}");
    }

    #[test]
    fn test_fallback_clause_when_no_skills_match() {
        let scored = scored(&["figma", "design"], &[]);
        let text = rationale(&scored, &profile(&["accounting"]));
        assert!(text.starts_with("Great starting point for your interests"), "{text}");
        assert!(text.contains("Builds directly on your current skills"), "{text}");
    }

    #[test]
    fn test_caps_shown_tokens_at_two() {
        let scored = scored(&[], &["linux", "networking", "bash", "git"]);
        let text = rationale(&scored, &profile(&[]));
        assert!(text.contains("Will help you learn linux, networking"), "{text}");
        assert!(!text.contains("bash"));
    }

    #[test]
    fn test_sentence_structure() {
        let text = rationale(&scored(&["python"], &[]), &profile(&["python"]));
        assert!(text.ends_with('.'));
        assert_eq!(text.matches(". ").count(), 4);
    }
}

use super::scorers::prerequisite_satisfied;
use crate::models::{Level, ScoredCourse, Timeline, UserProfile};

/// Splits a ranked recommendation list into what the learner can start
/// now and what to work toward.
///
/// A course is short-term when it is beginner level, or when every
/// prerequisite is already covered by the learner's skills and the course
/// is at most intermediate. Ranked order is preserved inside each bucket
/// and each bucket is capped.
pub fn partition_timeline(
    ranked: &[ScoredCourse],
    profile: &UserProfile,
    short_term_cap: usize,
    long_term_cap: usize,
) -> Timeline {
    let mut timeline = Timeline::default();

    for scored in ranked {
        let course = &scored.course;
        let prerequisites_met = course
            .prerequisites
            .iter()
            .all(|p| prerequisite_satisfied(&profile.technical_skills, p));

        let short_term = course.level == Level::Beginner
            || (prerequisites_met && course.level <= Level::Intermediate);

        if short_term {
            timeline.short_term.push(scored.clone());
        } else {
            timeline.long_term.push(scored.clone());
        }
    }

    timeline.short_term.truncate(short_term_cap);
    timeline.long_term.truncate(long_term_cap);
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentScores, Cost, Course};

    fn scored(title: &str, level: Level, prereqs: &[&str], fit_score: u8) -> ScoredCourse {
        ScoredCourse {
            course: Course {
                title: title.to_string(),
                provider: "edX".to_string(),
                duration: "8 weeks".to_string(),
                prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
                skill_tags: vec![],
                level,
                domain: "software development".to_string(),
                cost: Cost::Paid,
                link: "https://example.org".to_string(),
            },
            fit_score,
            scores: ComponentScores {
                similarity: 0.5,
                level: 1.0,
                prerequisite: 1.0,
            },
        }
    }

    fn profile_with_skills(skills: &[&str]) -> UserProfile {
        UserProfile {
            technical_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_beginner_goes_short_term_advanced_goes_long_term() {
        let ranked = vec![
            scored("Python for Beginners", Level::Beginner, &[], 90),
            scored(
                "Advanced Deep Learning",
                Level::Advanced,
                &["machine learning", "calculus"],
                45,
            ),
        ];
        let timeline = partition_timeline(&ranked, &profile_with_skills(&["python"]), 3, 5);
        assert_eq!(timeline.short_term.len(), 1);
        assert_eq!(timeline.short_term[0].course.title, "Python for Beginners");
        assert_eq!(timeline.long_term.len(), 1);
        assert_eq!(timeline.long_term[0].course.title, "Advanced Deep Learning");
    }

    #[test]
    fn test_intermediate_with_met_prerequisites_is_short_term() {
        let ranked = vec![scored(
            "Advanced Python Programming",
            Level::Intermediate,
            &["python"],
            70,
        )];
        let timeline = partition_timeline(&ranked, &profile_with_skills(&["python"]), 3, 5);
        assert_eq!(timeline.short_term.len(), 1);
        assert!(timeline.long_term.is_empty());
    }

    #[test]
    fn test_intermediate_with_unmet_prerequisites_is_long_term() {
        let ranked = vec![scored(
            "Docker and Kubernetes",
            Level::Intermediate,
            &["linux", "basic networking"],
            60,
        )];
        let timeline = partition_timeline(&ranked, &profile_with_skills(&["python"]), 3, 5);
        assert!(timeline.short_term.is_empty());
        assert_eq!(timeline.long_term.len(), 1);
    }

    #[test]
    fn test_buckets_are_capped_and_ordered() {
        let ranked: Vec<ScoredCourse> = (0..6)
            .map(|i| scored(&format!("Course {i}"), Level::Beginner, &[], 90 - i as u8))
            .collect();
        let timeline = partition_timeline(&ranked, &UserProfile::default(), 3, 5);
        assert_eq!(timeline.short_term.len(), 3);
        assert!(timeline.long_term.is_empty());
        let titles: Vec<&str> = timeline
            .short_term
            .iter()
            .map(|s| s.course.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Course 0", "Course 1", "Course 2"]);
    }
}

//! Rule-based scoring functions. All pure; nothing here touches the
//! similarity index or any shared state.

use std::collections::HashSet;

use crate::models::Level;

/// Level compatibility on the beginner/intermediate/advanced scale.
///
/// Courses at or below the learner's level score 1.0, one step above
/// scores 0.7, and anything further above scores 0.3 so that advanced
/// material is strongly penalized for beginners.
pub fn level_match(user_level: Level, course_level: Level) -> f64 {
    match course_level.ordinal() - user_level.ordinal() {
        d if d > 1 => 0.3,
        1 => 0.7,
        _ => 1.0,
    }
}

/// Similarity between two skill tokens, case-insensitive.
///
/// Exact match scores 1.0, a substring match 0.8, otherwise the overlap
/// of whitespace-split word sets relative to the larger token.
pub fn skill_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.8;
    }

    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();
    let common = words_a.intersection(&words_b).count();
    if common == 0 {
        return 0.0;
    }
    common as f64 / words_a.len().max(words_b.len()) as f64
}

/// Returns true when any of the learner's skills satisfies `prerequisite`,
/// either by substring overlap or by skill similarity above 0.7.
pub fn prerequisite_satisfied(user_skills: &[String], prerequisite: &str) -> bool {
    let prerequisite = prerequisite.trim().to_lowercase();
    user_skills.iter().any(|skill| {
        let skill = skill.trim().to_lowercase();
        !skill.is_empty()
            && (prerequisite.contains(&skill)
                || skill.contains(&prerequisite)
                || skill_similarity(&prerequisite, &skill) > 0.7)
    })
}

/// Fraction of a course's prerequisites the learner already covers.
/// A course with no prerequisites scores 1.0.
pub fn prerequisite_match(user_skills: &[String], prerequisites: &[String]) -> f64 {
    if prerequisites.is_empty() {
        return 1.0;
    }
    let met = prerequisites
        .iter()
        .filter(|p| prerequisite_satisfied(user_skills, p))
        .count();
    met as f64 / prerequisites.len() as f64
}

/// Bonus multiplier when the learner's target domain is contained in the
/// course domain, case-insensitively. Returns 1.0 otherwise.
pub fn domain_bonus(target_domain: Option<&str>, course_domain: &str, bonus: f64) -> f64 {
    match target_domain {
        Some(target) if !target.trim().is_empty() => {
            let target = target.trim().to_lowercase();
            if course_domain.to_lowercase().contains(&target) {
                bonus
            } else {
                1.0
            }
        }
        _ => 1.0,
    }
}

/// Bonus multiplier when any interest token is contained in the course
/// domain, case-insensitively. Returns 1.0 otherwise.
pub fn interest_bonus(interests: &[String], course_domain: &str, bonus: f64) -> f64 {
    let course_domain = course_domain.to_lowercase();
    let matched = interests.iter().any(|interest| {
        let interest = interest.trim().to_lowercase();
        !interest.is_empty() && course_domain.contains(&interest)
    });
    if matched {
        bonus
    } else {
        1.0
    }
}

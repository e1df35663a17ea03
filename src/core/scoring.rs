use crate::core::filters::contains_either;
use crate::models::{Candidate, ScoringWeights, SearchCriteria};

/// GPA (0-30 reference scale) where the credential ramp starts
const GPA_RAMP_START: f64 = 24.0;
/// Width of the ramp; full credit at `GPA_RAMP_START + GPA_RAMP_SPAN`
const GPA_RAMP_SPAN: f64 = 6.0;

/// Sub-scores and match details for one candidate
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Composite 0-100 score
    pub score: u8,
    /// Candidate-side course names that satisfied a required course
    pub matched_courses: Vec<String>,
    /// Candidate-side skill strings that satisfied a required skill
    pub matched_skills: Vec<String>,
}

/// Compute the composite match score for a candidate.
///
/// Four independently capped sub-scores are summed and scaled against
/// the total weight in play:
/// - courses:    `min(40, matched * 13)`
/// - skills:     `min(30, matched * 7)`
/// - location:   binary 15 on a city substring match
/// - credential: linear GPA ramp, 0 at 24 up to 15 at 30
///
/// Capping each dimension before summation keeps any single dimension
/// from dominating the result. Deterministic and pure; ties are the
/// ranker's concern.
pub fn calculate_match_score(
    candidate: &Candidate,
    criteria: &SearchCriteria,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let (course_score, matched_courses) = course_sub_score(candidate, criteria, weights);
    let (skill_score, matched_skills) = skill_sub_score(candidate, criteria, weights);
    let location_score = location_sub_score(candidate, criteria, weights);
    let credential_score = credential_sub_score(candidate, weights);

    let total = course_score + skill_score + location_score + credential_score;
    let scaled = (total / weights.total() * 100.0).round();

    ScoreBreakdown {
        score: scaled.clamp(0.0, 100.0) as u8,
        matched_courses,
        matched_skills,
    }
}

/// Count distinct required courses matched anywhere across the
/// candidate's course entries (substring either direction)
fn course_sub_score(
    candidate: &Candidate,
    criteria: &SearchCriteria,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let mut matched = 0usize;
    let mut matched_names: Vec<String> = Vec::new();

    for token in &criteria.required_courses {
        let hit = candidate.education.iter().find_map(|e| {
            e.courses
                .iter()
                .find(|course| contains_either(&course.name.to_lowercase(), token))
        });
        if let Some(course) = hit {
            matched += 1;
            if !matched_names.contains(&course.name) {
                matched_names.push(course.name.clone());
            }
        }
    }

    let score = (matched as f64 * weights.course_step).min(weights.courses);
    (score, matched_names)
}

/// Count distinct required skills found anywhere across all skill groups
fn skill_sub_score(
    candidate: &Candidate,
    criteria: &SearchCriteria,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let mut matched = 0usize;
    let mut matched_skills: Vec<String> = Vec::new();

    for token in &criteria.required_skills {
        let hit = candidate
            .skills
            .all()
            .find(|skill| contains_either(&skill.to_lowercase(), token));
        if let Some(skill) = hit {
            matched += 1;
            if !matched_skills.contains(skill) {
                matched_skills.push(skill.clone());
            }
        }
    }

    let score = (matched as f64 * weights.skill_step).min(weights.skills);
    (score, matched_skills)
}

/// Binary: full credit when the candidate's city contains the
/// requested location string
#[inline]
fn location_sub_score(
    candidate: &Candidate,
    criteria: &SearchCriteria,
    weights: &ScoringWeights,
) -> f64 {
    match &criteria.location {
        Some(location) if candidate.location.city.to_lowercase().contains(location) => {
            weights.location
        }
        _ => 0.0,
    }
}

/// Linear ramp over the primary education's normalized GPA, floored
/// at 0 below the ramp start. Rewards strong academics without making
/// them a hard gate (that is the filter pipeline's job).
#[inline]
fn credential_sub_score(candidate: &Candidate, weights: &ScoringWeights) -> f64 {
    let Some(gpa) = candidate
        .primary_education()
        .and_then(|e| e.normalized_gpa())
    else {
        return 0.0;
    };
    ((gpa - GPA_RAMP_START) / GPA_RAMP_SPAN * weights.credential)
        .clamp(0.0, weights.credential)
}

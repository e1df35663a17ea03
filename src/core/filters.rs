use crate::models::{Candidate, SearchCriteria};

/// Substring containment in either direction, used for course and
/// skill tokens so abbreviations and variants still match.
/// Both sides must already be lower-cased.
#[inline]
pub fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// True when any requested token matches any candidate value
/// (substring in either direction). An empty request is no constraint.
#[inline]
fn any_token_matches(requested: &[String], candidate_values: &[String]) -> bool {
    if requested.is_empty() {
        return true;
    }
    requested.iter().any(|token| {
        candidate_values
            .iter()
            .any(|value| contains_either(&value.to_lowercase(), token))
    })
}

/// Apply every filter stage over the pool, preserving pool order.
/// A candidate survives only if all non-empty constraints hold.
pub fn filter_pool<'a>(pool: &'a [Candidate], criteria: &SearchCriteria) -> Vec<&'a Candidate> {
    pool.iter()
        .filter(|candidate| matches_criteria(candidate, criteria))
        .collect()
}

/// Logical AND across all stages; cheap stages run before the
/// free-text scan over nested project and course text.
pub fn matches_criteria(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    matches_location(candidate, criteria)
        && matches_geography(candidate, criteria)
        && matches_gpa_floor(candidate, criteria)
        && matches_academics(candidate, criteria)
        && matches_experience_range(candidate, criteria)
        && matches_portfolio(candidate, criteria)
        && matches_work_preferences(candidate, criteria)
        && matches_salary(candidate, criteria)
        && matches_spoken_languages(candidate, criteria)
        && matches_skills(candidate, criteria)
        && matches_courses(candidate, criteria)
        && matches_free_text(candidate, criteria)
}

/// Free-form location string against city or country
#[inline]
pub fn matches_location(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    let Some(location) = &criteria.location else {
        return true;
    };
    candidate.location.city.to_lowercase().contains(location)
        || candidate.location.country.to_lowercase().contains(location)
}

/// Country and city multi-select stages
#[inline]
pub fn matches_geography(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    if !criteria.countries.is_empty() {
        let country = candidate.location.country.to_lowercase();
        if !criteria.countries.iter().any(|c| contains_either(&country, c)) {
            return false;
        }
    }
    if !criteria.cities.is_empty() {
        let city = candidate.location.city.to_lowercase();
        if !criteria.cities.iter().any(|c| contains_either(&city, c)) {
            return false;
        }
    }
    true
}

/// GPA floor on the 0-30 reference scale, satisfied by any education
/// entry. Entries without usable GPA data are skipped, and a candidate
/// whose entries all lack GPA data is retained (fail-open).
#[inline]
pub fn matches_gpa_floor(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    if criteria.min_gpa <= 0.0 {
        return true;
    }
    let mut saw_gpa = false;
    for education in &candidate.education {
        if let Some(gpa) = education.normalized_gpa() {
            saw_gpa = true;
            if gpa >= criteria.min_gpa {
                return true;
            }
        }
    }
    // No entry carried GPA data: the constraint is not applicable
    !saw_gpa
}

/// Degree, major, university, and graduation-year stages
pub fn matches_academics(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    if !criteria.degrees.is_empty() {
        let found = candidate.education.iter().any(|e| {
            let degree = e.degree.to_lowercase();
            criteria.degrees.iter().any(|d| contains_either(&degree, d))
        });
        if !found {
            return false;
        }
    }
    if !criteria.majors.is_empty() {
        let found = candidate.education.iter().any(|e| {
            let major = e.major.to_lowercase();
            criteria.majors.iter().any(|m| contains_either(&major, m))
        });
        if !found {
            return false;
        }
    }
    if !criteria.universities.is_empty() {
        let found = candidate.education.iter().any(|e| {
            let university = e.university.to_lowercase();
            criteria
                .universities
                .iter()
                .any(|u| contains_either(&university, u))
        });
        if !found {
            return false;
        }
    }
    if !criteria.graduation_years.is_empty() {
        let found = candidate.education.iter().any(|e| {
            e.graduation_year
                .map(|year| criteria.graduation_years.contains(&year))
                .unwrap_or(false)
        });
        if !found {
            return false;
        }
    }
    true
}

/// Approximate years of experience derived from the entry count must
/// fall within the requested range
#[inline]
pub fn matches_experience_range(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    let years = candidate.experience.len() as f64 * criteria.years_per_experience_entry;
    years >= criteria.min_experience_years && years <= criteria.max_experience_years
}

/// Project count, GitHub presence, star threshold, portfolio presence
#[inline]
pub fn matches_portfolio(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    if candidate.projects.len() < criteria.min_projects {
        return false;
    }
    if criteria.github_required && !has_url(&candidate.github_url) {
        return false;
    }
    if criteria.min_github_stars > 0 && candidate.total_github_stars() < criteria.min_github_stars {
        return false;
    }
    if criteria.portfolio_required && !has_url(&candidate.portfolio_url) {
        return false;
    }
    true
}

#[inline]
fn has_url(url: &Option<String>) -> bool {
    url.as_deref().map(|u| !u.trim().is_empty()).unwrap_or(false)
}

/// Work type, relocation, visa, and sponsorship stages. The tri-state
/// fields only filter when explicitly set.
pub fn matches_work_preferences(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    if !any_token_matches(&criteria.work_types, &candidate.looking_for.work_types) {
        return false;
    }
    if let Some(relocate) = criteria.willing_to_relocate {
        if candidate.looking_for.willing_to_relocate != relocate {
            return false;
        }
    }
    if !any_token_matches(&criteria.visa_statuses, &candidate.visa_status) {
        return false;
    }
    if let Some(sponsorship) = criteria.requires_sponsorship {
        if candidate.requires_sponsorship != sponsorship {
            return false;
        }
    }
    true
}

/// Salary-range overlap, enforced only when the currencies match.
/// A currency mismatch or missing expectation skips the stage for the
/// candidate rather than failing it.
#[inline]
pub fn matches_salary(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    let (Some(requested), Some(expected)) = (
        &criteria.salary_range,
        &candidate.looking_for.salary_expectation,
    ) else {
        return true;
    };
    if expected.currency.to_lowercase() != requested.currency {
        return true;
    }
    expected.overlaps(requested)
}

#[inline]
pub fn matches_spoken_languages(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    any_token_matches(&criteria.spoken_languages, &candidate.skills.languages)
}

/// General and per-category skill membership stages
pub fn matches_skills(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    if !criteria.required_skills.is_empty() {
        let found = criteria.required_skills.iter().any(|token| {
            candidate
                .skills
                .all()
                .any(|skill| contains_either(&skill.to_lowercase(), token))
        });
        if !found {
            return false;
        }
    }
    any_token_matches(&criteria.programming_languages, &candidate.skills.programming)
        && any_token_matches(&criteria.frameworks, &candidate.skills.frameworks)
        && any_token_matches(&criteria.databases, &candidate.skills.databases)
        && any_token_matches(&criteria.cloud_platforms, &candidate.skills.tools)
}

/// Required-course membership; a required course matches an actual
/// course if either string contains the other. Grades are ignored
/// here (they feed scoring, not filtering).
pub fn matches_courses(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    if criteria.required_courses.is_empty() {
        return true;
    }
    criteria.required_courses.iter().any(|token| {
        candidate.education.iter().any(|e| {
            e.courses
                .iter()
                .any(|course| contains_either(&course.name.to_lowercase(), token))
        })
    })
}

/// Case-insensitive substring scan across name, universities, majors,
/// all skills, project titles/descriptions/technologies, and course
/// names. The most expensive stage, so it runs last.
pub fn matches_free_text(candidate: &Candidate, criteria: &SearchCriteria) -> bool {
    let Some(needle) = &criteria.free_text else {
        return true;
    };

    if candidate.name.to_lowercase().contains(needle) {
        return true;
    }
    for education in &candidate.education {
        if education.university.to_lowercase().contains(needle)
            || education.major.to_lowercase().contains(needle)
        {
            return true;
        }
        if education
            .courses
            .iter()
            .any(|c| c.name.to_lowercase().contains(needle))
        {
            return true;
        }
    }
    if candidate
        .skills
        .all()
        .any(|skill| skill.to_lowercase().contains(needle))
    {
        return true;
    }
    candidate.projects.iter().any(|project| {
        project.title.to_lowercase().contains(needle)
            || project.description.to_lowercase().contains(needle)
            || project
                .technologies
                .iter()
                .any(|t| t.to_lowercase().contains(needle))
    })
}

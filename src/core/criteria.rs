use crate::models::{SalaryRange, SearchCriteria, SearchQuery};

/// Reference GPA scale everything is normalized to before comparison
pub const REFERENCE_GPA_SCALE: f64 = 30.0;

/// Default approximation factor: years of experience per work entry
pub const DEFAULT_YEARS_PER_ENTRY: f64 = 1.5;

/// Turn a raw search query into canonical criteria.
///
/// Total over its input: absent or malformed fields resolve to the
/// permissive "no constraint" default, never to an error. All
/// comparison strings come out lower-cased and trimmed, multi-value
/// fields deduplicated, numeric ranges ordered.
pub fn normalize(query: &SearchQuery) -> SearchCriteria {
    let free_text = query
        .free_text
        .as_deref()
        .map(norm_token)
        .filter(|t| !t.is_empty());

    let location = query
        .location
        .as_deref()
        .map(norm_token)
        .filter(|t| !t.is_empty());

    // Experience bounds: negative or NaN values relax to "no
    // constraint", inverted ranges are swapped
    let mut min_exp = query.min_experience_years.unwrap_or(0.0).max(0.0);
    let mut max_exp = match query.max_experience_years {
        Some(max) if max >= 0.0 => max,
        _ => f64::INFINITY,
    };
    if max_exp < min_exp {
        std::mem::swap(&mut min_exp, &mut max_exp);
    }

    let years_per_entry = match query.years_per_experience_entry {
        Some(y) if y > 0.0 => y,
        _ => DEFAULT_YEARS_PER_ENTRY,
    };

    SearchCriteria {
        free_text,
        required_courses: norm_set(&query.required_courses),
        required_skills: norm_set(&query.required_skills),
        location,
        min_gpa: normalize_min_gpa(query.min_gpa, query.gpa_scale),
        min_experience_years: min_exp,
        max_experience_years: max_exp,
        programming_languages: norm_set(&query.programming_languages),
        frameworks: norm_set(&query.frameworks),
        databases: norm_set(&query.databases),
        cloud_platforms: norm_set(&query.cloud_platforms),
        degrees: norm_set(&query.degrees),
        majors: norm_set(&query.majors),
        universities: norm_set(&query.universities),
        graduation_years: dedup_years(&query.graduation_years),
        min_projects: query.min_projects.unwrap_or(0),
        github_required: query.github_required.unwrap_or(false),
        min_github_stars: query.min_github_stars.unwrap_or(0),
        portfolio_required: query.portfolio_required.unwrap_or(false),
        countries: norm_set(&query.countries),
        cities: norm_set(&query.cities),
        work_types: norm_set(&query.work_types),
        willing_to_relocate: query.willing_to_relocate,
        visa_statuses: norm_set(&query.visa_statuses),
        requires_sponsorship: query.requires_sponsorship,
        salary_range: query.salary_range.as_ref().map(normalize_salary),
        spoken_languages: norm_set(&query.spoken_languages),
        years_per_experience_entry: years_per_entry,
    }
}

/// Lower-case and trim a comparison token
#[inline]
pub fn norm_token(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalize a multi-select field into a deduplicated, lower-cased set.
/// Preserves first-seen order so criteria stay deterministic.
fn norm_set(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let token = norm_token(value);
        if !token.is_empty() && !out.contains(&token) {
            out.push(token);
        }
    }
    out
}

fn dedup_years(years: &[i32]) -> Vec<i32> {
    let mut out: Vec<i32> = Vec::with_capacity(years.len());
    for &year in years {
        if !out.contains(&year) {
            out.push(year);
        }
    }
    out
}

/// Rescale a GPA floor onto the 0-30 reference scale. A floor on a
/// 4.0 scale becomes `value / 4.0 * 30`; a floor already on the
/// 30-point scale passes through unchanged. Degenerate scales fall
/// back to "no floor".
fn normalize_min_gpa(min_gpa: Option<f64>, scale: Option<f64>) -> f64 {
    let Some(value) = min_gpa else {
        return 0.0;
    };
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    match scale {
        Some(max) if max > 0.0 && max.is_finite() => value / max * REFERENCE_GPA_SCALE,
        _ => value,
    }
}

fn normalize_salary(range: &SalaryRange) -> SalaryRange {
    let (min, max) = if range.min <= range.max {
        (range.min, range.max)
    } else {
        (range.max, range.min)
    };
    SalaryRange {
        min,
        max,
        currency: norm_token(&range.currency),
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Candidate, SalaryRange};

/// Raw, unvalidated search query as submitted by a caller UI/API.
/// Every field is optional; absent or malformed values resolve to
/// "no constraint" in the normalizer and never produce an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    #[serde(alias = "free_text", rename = "freeText")]
    pub free_text: Option<String>,
    #[serde(alias = "required_courses", rename = "requiredCourses")]
    pub required_courses: Vec<String>,
    #[serde(alias = "required_skills", rename = "requiredSkills")]
    pub required_skills: Vec<String>,
    pub location: Option<String>,
    #[serde(alias = "min_gpa", rename = "minGpa")]
    pub min_gpa: Option<f64>,
    /// Maximum of the scale `minGpa` is expressed on; defaults to the
    /// 30-point reference scale when absent
    #[serde(alias = "gpa_scale", rename = "gpaScale")]
    pub gpa_scale: Option<f64>,
    #[serde(alias = "min_experience_years", rename = "minExperienceYears")]
    pub min_experience_years: Option<f64>,
    #[serde(alias = "max_experience_years", rename = "maxExperienceYears")]
    pub max_experience_years: Option<f64>,
    #[serde(alias = "years_per_experience_entry", rename = "yearsPerExperienceEntry")]
    pub years_per_experience_entry: Option<f64>,
    #[serde(alias = "programming_languages", rename = "programmingLanguages")]
    pub programming_languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    #[serde(alias = "cloud_platforms", rename = "cloudPlatforms")]
    pub cloud_platforms: Vec<String>,
    pub degrees: Vec<String>,
    pub majors: Vec<String>,
    pub universities: Vec<String>,
    #[serde(alias = "graduation_years", rename = "graduationYears")]
    pub graduation_years: Vec<i32>,
    #[serde(alias = "min_projects", rename = "minProjects")]
    pub min_projects: Option<usize>,
    #[serde(alias = "github_required", rename = "githubRequired")]
    pub github_required: Option<bool>,
    #[serde(alias = "min_github_stars", rename = "minGithubStars")]
    pub min_github_stars: Option<u32>,
    #[serde(alias = "portfolio_required", rename = "portfolioRequired")]
    pub portfolio_required: Option<bool>,
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    #[serde(alias = "work_types", rename = "workTypes")]
    pub work_types: Vec<String>,
    #[serde(alias = "willing_to_relocate", rename = "willingToRelocate")]
    pub willing_to_relocate: Option<bool>,
    #[serde(alias = "visa_statuses", rename = "visaStatuses")]
    pub visa_statuses: Vec<String>,
    #[serde(alias = "requires_sponsorship", rename = "requiresSponsorship")]
    pub requires_sponsorship: Option<bool>,
    #[serde(alias = "salary_range", rename = "salaryRange")]
    pub salary_range: Option<SalaryRange>,
    #[serde(alias = "spoken_languages", rename = "spokenLanguages")]
    pub spoken_languages: Vec<String>,
}

/// Request to search a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchCandidatesRequest {
    /// The full candidate pool for this search; the service holds no
    /// store of its own
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub query: SearchQuery,
    #[validate(range(min = 1, max = 500))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

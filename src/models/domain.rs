use serde::{Deserialize, Serialize};

/// A completed course inside an education entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub grade: Option<f64>,
}

/// One education entry (a candidate may hold several degrees)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub university: String,
    pub major: String,
    pub degree: String,
    #[serde(default)]
    pub gpa: Option<f64>,
    /// Maximum of the grading scale the GPA is expressed on (4.0, 30, ...).
    /// Absent or zero means the entry carries no usable GPA data.
    #[serde(rename = "maxGpa", alias = "maxGPA", default)]
    pub max_gpa: Option<f64>,
    #[serde(rename = "graduationYear", default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Education {
    /// GPA on the 0-30 reference scale, or None when the entry has no
    /// usable GPA data (missing value or degenerate scale).
    pub fn normalized_gpa(&self) -> Option<f64> {
        match (self.gpa, self.max_gpa) {
            (Some(gpa), Some(max)) if max > 0.0 => Some(gpa / max * 30.0),
            _ => None,
        }
    }
}

/// Candidate skills, grouped the way profiles collect them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub programming: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    /// Tools and cloud platforms share one group in profile data
    #[serde(default)]
    pub tools: Vec<String>,
    /// Spoken languages
    #[serde(default)]
    pub languages: Vec<String>,
}

impl SkillSet {
    /// Every skill string across all groups
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.programming
            .iter()
            .chain(self.frameworks.iter())
            .chain(self.databases.iter())
            .chain(self.tools.iter())
            .chain(self.languages.iter())
    }
}

/// A portfolio project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub stars: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

/// A prior work engagement; only the entry count feeds the engine's
/// years-of-experience approximation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    #[serde(default)]
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

impl SalaryRange {
    /// Standard closed-interval overlap test
    pub fn overlaps(&self, other: &SalaryRange) -> bool {
        self.max >= other.min && self.min <= other.max
    }
}

/// What the candidate is looking for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookingFor {
    #[serde(rename = "workTypes", default)]
    pub work_types: Vec<String>,
    #[serde(rename = "willingToRelocate", default)]
    pub willing_to_relocate: bool,
    #[serde(rename = "salaryExpectation", default)]
    pub salary_expectation: Option<SalaryRange>,
}

/// A full candidate profile as supplied by the external store.
/// The engine never creates, mutates, or persists these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub location: Location,
    #[serde(rename = "lookingFor", default)]
    pub looking_for: LookingFor,
    #[serde(rename = "visaStatus", default)]
    pub visa_status: Vec<String>,
    #[serde(rename = "requiresSponsorship", default)]
    pub requires_sponsorship: bool,
    #[serde(rename = "githubUrl", default)]
    pub github_url: Option<String>,
    #[serde(rename = "portfolioUrl", default)]
    pub portfolio_url: Option<String>,
}

impl Candidate {
    /// Primary (first) education entry, the one credential scoring uses
    pub fn primary_education(&self) -> Option<&Education> {
        self.education.first()
    }

    /// Total stars across all projects; missing counts read as 0
    pub fn total_github_stars(&self) -> u32 {
        self.projects.iter().map(|p| p.stars.unwrap_or(0)).sum()
    }
}

/// Normalized search criteria. Every comparison string is lower-cased
/// and trimmed, every multi-value field deduplicated. An empty
/// collection always means "no constraint", never "match nothing".
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    pub free_text: Option<String>,
    pub required_courses: Vec<String>,
    pub required_skills: Vec<String>,
    pub location: Option<String>,
    /// GPA floor on the 0-30 reference scale
    pub min_gpa: f64,
    pub min_experience_years: f64,
    /// `f64::INFINITY` when unbounded
    pub max_experience_years: f64,
    pub programming_languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub cloud_platforms: Vec<String>,
    pub degrees: Vec<String>,
    pub majors: Vec<String>,
    pub universities: Vec<String>,
    pub graduation_years: Vec<i32>,
    pub min_projects: usize,
    pub github_required: bool,
    pub min_github_stars: u32,
    pub portfolio_required: bool,
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    pub work_types: Vec<String>,
    pub willing_to_relocate: Option<bool>,
    pub visa_statuses: Vec<String>,
    pub requires_sponsorship: Option<bool>,
    pub salary_range: Option<SalaryRange>,
    pub spoken_languages: Vec<String>,
    /// Approximation factor for deriving years of experience from the
    /// number of experience entries
    pub years_per_experience_entry: f64,
}

impl SearchCriteria {
    /// Criteria with every constraint relaxed; filtering with these is
    /// the identity on the pool
    pub fn unconstrained() -> Self {
        Self::default()
    }
}

impl Default for SearchCriteria {
    /// The permissive default: no constraint on any dimension
    fn default() -> Self {
        Self {
            free_text: None,
            required_courses: Vec::new(),
            required_skills: Vec::new(),
            location: None,
            min_gpa: 0.0,
            min_experience_years: 0.0,
            max_experience_years: f64::INFINITY,
            programming_languages: Vec::new(),
            frameworks: Vec::new(),
            databases: Vec::new(),
            cloud_platforms: Vec::new(),
            degrees: Vec::new(),
            majors: Vec::new(),
            universities: Vec::new(),
            graduation_years: Vec::new(),
            min_projects: 0,
            github_required: false,
            min_github_stars: 0,
            portfolio_required: false,
            countries: Vec::new(),
            cities: Vec::new(),
            work_types: Vec::new(),
            willing_to_relocate: None,
            visa_statuses: Vec::new(),
            requires_sponsorship: None,
            salary_range: None,
            spoken_languages: Vec::new(),
            years_per_experience_entry: crate::core::criteria::DEFAULT_YEARS_PER_ENTRY,
        }
    }
}

/// One scored, surviving candidate. Produced fresh per search and
/// never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub candidate: Candidate,
    /// Composite match score, 0-100
    pub score: u8,
    #[serde(rename = "matchedCourses")]
    pub matched_courses: Vec<String>,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

/// Scoring weights and per-match step sizes
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub courses: f64,
    pub skills: f64,
    pub location: f64,
    pub credential: f64,
    pub course_step: f64,
    pub skill_step: f64,
}

impl ScoringWeights {
    /// Sum of the weights in play; the score denominator
    pub fn total(&self) -> f64 {
        self.courses + self.skills + self.location + self.credential
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            courses: 40.0,
            skills: 30.0,
            location: 15.0,
            credential: 15.0,
            course_step: 13.0,
            skill_step: 7.0,
        }
    }
}

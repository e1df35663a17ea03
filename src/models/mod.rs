// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, Course, Education, Experience, Location, LookingFor, Project, RankedResult,
    SalaryRange, ScoringWeights, SearchCriteria, SkillSet,
};
pub use requests::{SearchCandidatesRequest, SearchQuery};
pub use responses::{ErrorResponse, HealthResponse, SearchCandidatesResponse};

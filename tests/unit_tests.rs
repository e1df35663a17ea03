// Unit tests for talent-algo

use talent_algo::core::{filter_pool, matches_criteria, normalize};
use talent_algo::models::{
    Candidate, Course, Education, Experience, Location, LookingFor, Project, SalaryRange,
    SearchCriteria, SearchQuery, SkillSet,
};

fn education(gpa: Option<f64>, max_gpa: Option<f64>, courses: &[&str]) -> Education {
    Education {
        university: "Politecnico di Milano".to_string(),
        major: "Computer Science".to_string(),
        degree: "Bachelors".to_string(),
        gpa,
        max_gpa,
        graduation_year: Some(2025),
        courses: courses
            .iter()
            .map(|name| Course {
                name: (*name).to_string(),
                grade: None,
            })
            .collect(),
    }
}

fn candidate(id: &str, city: &str, gpa: Option<f64>, max_gpa: Option<f64>) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: format!("Candidate {}", id),
        education: vec![education(gpa, max_gpa, &["Network Security"])],
        skills: SkillSet {
            programming: vec!["Python".to_string()],
            frameworks: vec!["React".to_string()],
            databases: vec!["PostgreSQL".to_string()],
            tools: vec!["AWS".to_string()],
            languages: vec!["Italian".to_string(), "English".to_string()],
        },
        projects: vec![Project {
            title: "Packet Inspector".to_string(),
            description: "Deep packet inspection toolkit".to_string(),
            technologies: vec!["Python".to_string()],
            stars: Some(5),
        }],
        experience: vec![Experience {
            company: "TechCo".to_string(),
            position: "Intern".to_string(),
        }],
        location: Location {
            city: city.to_string(),
            country: "Italy".to_string(),
        },
        looking_for: LookingFor {
            work_types: vec!["remote".to_string()],
            willing_to_relocate: false,
            salary_expectation: Some(SalaryRange {
                min: 30_000.0,
                max: 40_000.0,
                currency: "EUR".to_string(),
            }),
        },
        visa_status: vec!["EU Citizen".to_string()],
        requires_sponsorship: false,
        github_url: Some("https://github.com/example".to_string()),
        portfolio_url: None,
    }
}

fn pool() -> Vec<Candidate> {
    vec![
        candidate("1", "Milan", Some(30.0), Some(30.0)),
        candidate("2", "Rome", Some(24.0), Some(30.0)),
        candidate("3", "Milan", Some(3.7), Some(4.0)),
        candidate("4", "Turin", None, None),
    ]
}

#[test]
fn test_empty_criteria_is_identity_on_pool() {
    let pool = pool();
    let surviving = filter_pool(&pool, &SearchCriteria::unconstrained());
    assert_eq!(surviving.len(), pool.len());

    let ids: Vec<&str> = surviving.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[test]
fn test_filter_monotonicity_under_added_constraints() {
    let pool = pool();

    let base = SearchCriteria {
        countries: vec!["italy".to_string()],
        ..SearchCriteria::unconstrained()
    };
    let narrowed = SearchCriteria {
        countries: vec!["italy".to_string()],
        cities: vec!["milan".to_string()],
        min_gpa: 26.0,
        ..SearchCriteria::unconstrained()
    };

    let base_ids: Vec<&str> = filter_pool(&pool, &base)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    let narrowed_ids: Vec<&str> = filter_pool(&pool, &narrowed)
        .iter()
        .map(|c| c.id.as_str())
        .collect();

    assert!(narrowed_ids.iter().all(|id| base_ids.contains(id)));
}

#[test]
fn test_empty_set_means_no_constraint_for_every_set_field() {
    let pool = pool();
    let query = SearchQuery {
        required_courses: vec![],
        required_skills: vec![],
        programming_languages: vec![],
        frameworks: vec![],
        databases: vec![],
        cloud_platforms: vec![],
        degrees: vec![],
        majors: vec![],
        universities: vec![],
        graduation_years: vec![],
        countries: vec![],
        cities: vec![],
        work_types: vec![],
        visa_statuses: vec![],
        spoken_languages: vec![],
        ..Default::default()
    };

    let criteria = normalize(&query);
    assert_eq!(filter_pool(&pool, &criteria).len(), pool.len());
}

#[test]
fn test_gpa_scale_invariance_between_candidates() {
    // 3.7/4.0 and 27.75/30 are the same normalized GPA
    let four_scale = candidate("a", "Milan", Some(3.7), Some(4.0));
    let thirty_scale = candidate("b", "Milan", Some(27.75), Some(30.0));

    for floor in [20.0, 24.0, 27.0, 27.75, 28.0, 30.0] {
        let criteria = SearchCriteria {
            min_gpa: floor,
            ..SearchCriteria::unconstrained()
        };
        assert_eq!(
            matches_criteria(&four_scale, &criteria),
            matches_criteria(&thirty_scale, &criteria),
            "filter outcomes diverged at floor {}",
            floor
        );
    }
}

#[test]
fn test_fail_open_candidate_without_gpa_data_retained() {
    let pool = pool();
    let criteria = SearchCriteria {
        min_gpa: 28.0,
        ..SearchCriteria::unconstrained()
    };

    let ids: Vec<&str> = filter_pool(&pool, &criteria)
        .iter()
        .map(|c| c.id.as_str())
        .collect();

    // Candidate 4 has no GPA data and must not be excluded by the floor
    assert!(ids.contains(&"4"));
    // Candidate 2 has real GPA data below the floor and is excluded
    assert!(!ids.contains(&"2"));
}

#[test]
fn test_normalizer_is_total_over_garbage_input() {
    let query = SearchQuery {
        free_text: Some("   ".to_string()),
        min_gpa: Some(f64::NAN),
        gpa_scale: Some(0.0),
        min_experience_years: Some(-3.0),
        max_experience_years: Some(-10.0),
        years_per_experience_entry: Some(0.0),
        ..Default::default()
    };

    let criteria = normalize(&query);
    assert!(criteria.free_text.is_none());
    assert_eq!(criteria.min_gpa, 0.0);
    assert!(criteria.min_experience_years >= 0.0);
    assert!(criteria.max_experience_years >= criteria.min_experience_years);
    assert!(criteria.years_per_experience_entry > 0.0);

    // And the resulting criteria still behave as unconstrained
    let pool = pool();
    assert_eq!(filter_pool(&pool, &criteria).len(), pool.len());
}

#[test]
fn test_free_text_reaches_project_and_course_text() {
    let pool = pool();

    let criteria = normalize(&SearchQuery {
        free_text: Some("Packet".to_string()),
        ..Default::default()
    });
    assert_eq!(filter_pool(&pool, &criteria).len(), pool.len());

    // "net" matches "Network Security" by substring
    let criteria = normalize(&SearchQuery {
        free_text: Some("NET".to_string()),
        ..Default::default()
    });
    assert_eq!(filter_pool(&pool, &criteria).len(), pool.len());

    let criteria = normalize(&SearchQuery {
        free_text: Some("quantum".to_string()),
        ..Default::default()
    });
    assert!(filter_pool(&pool, &criteria).is_empty());
}

#[test]
fn test_currency_mismatch_skips_salary_stage() {
    let pool = pool();
    let criteria = normalize(&SearchQuery {
        salary_range: Some(SalaryRange {
            min: 500_000.0,
            max: 600_000.0,
            currency: "USD".to_string(),
        }),
        ..Default::default()
    });

    // All candidates expect EUR, so the stage never applies
    assert_eq!(filter_pool(&pool, &criteria).len(), pool.len());
}

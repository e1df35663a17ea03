// Integration tests for talent-algo

use talent_algo::core::{top_k, Matcher};
use talent_algo::models::{
    Candidate, Course, Education, Location, ScoringWeights, SearchQuery, SkillSet,
};

fn candidate(id: &str, city: &str, gpa: f64, courses: &[&str]) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: format!("Candidate {}", id),
        education: vec![Education {
            university: "Politecnico di Milano".to_string(),
            major: "Cybersecurity".to_string(),
            degree: "Masters".to_string(),
            gpa: Some(gpa),
            max_gpa: Some(30.0),
            graduation_year: Some(2025),
            courses: courses
                .iter()
                .map(|name| Course {
                    name: (*name).to_string(),
                    grade: None,
                })
                .collect(),
        }],
        skills: SkillSet::default(),
        projects: vec![],
        experience: vec![],
        location: Location {
            city: city.to_string(),
            country: "Italy".to_string(),
        },
        looking_for: Default::default(),
        visa_status: vec![],
        requires_sponsorship: false,
        github_url: None,
        portfolio_url: None,
    }
}

fn milan_query() -> SearchQuery {
    SearchQuery {
        location: Some("Milan".to_string()),
        required_courses: vec!["Network Security".to_string(), "Cryptography".to_string()],
        min_gpa: Some(24.0),
        ..Default::default()
    }
}

#[test]
fn test_end_to_end_milan_scenario() {
    let matcher = Matcher::with_default_weights();
    let pool = vec![
        candidate("A", "Milan", 30.0, &["Network Security"]),
        candidate("B", "Rome", 24.0, &[]),
        candidate("C", "Milan", 27.0, &["Network Security", "Cryptography"]),
    ];

    let outcome = matcher.search(&pool, &milan_query());

    // B is excluded (wrong location). C's second course match (26 vs
    // 13 points) outweighs A's GPA edge (7.5 vs 15), so C ranks first:
    // C = 26 + 15 + 7.5 = 48.5 -> 49, A = 13 + 15 + 15 = 43.
    assert_eq!(outcome.total_found, 2);
    assert_eq!(outcome.results[0].candidate.id, "C");
    assert_eq!(outcome.results[0].score, 49);
    assert_eq!(outcome.results[1].candidate.id, "A");
    assert_eq!(outcome.results[1].score, 43);
    assert_eq!(outcome.mean_score, 46.0);
}

#[test]
fn test_equal_scores_keep_pool_order() {
    let matcher = Matcher::with_default_weights();
    // Identical profiles score identically; pool order must survive
    let pool = vec![
        candidate("first", "Milan", 27.0, &["Network Security"]),
        candidate("second", "Milan", 27.0, &["Network Security"]),
        candidate("third", "Milan", 27.0, &["Network Security"]),
    ];

    let outcome = matcher.search(&pool, &milan_query());

    assert_eq!(outcome.total_found, 3);
    let ids: Vec<&str> = outcome
        .results
        .iter()
        .map(|r| r.candidate.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
    assert!(outcome.results.windows(2).all(|w| w[0].score == w[1].score));
}

#[test]
fn test_score_bounded_across_diverse_pool() {
    let matcher = Matcher::with_default_weights();
    let pool: Vec<Candidate> = (0..50)
        .map(|i| {
            candidate(
                &i.to_string(),
                if i % 2 == 0 { "Milan" } else { "Rome" },
                18.0 + (i % 13) as f64,
                if i % 3 == 0 {
                    &["Network Security", "Cryptography"][..]
                } else {
                    &["Databases"][..]
                },
            )
        })
        .collect();

    let outcome = matcher.search(&pool, &milan_query());
    assert!(outcome.results.iter().all(|r| r.score <= 100));
    assert!(outcome.mean_score >= 0.0 && outcome.mean_score <= 100.0);
}

#[test]
fn test_adding_a_match_never_decreases_score() {
    let matcher = Matcher::with_default_weights();
    let base = candidate("base", "Milan", 27.0, &["Network Security"]);
    let richer = candidate("richer", "Milan", 27.0, &["Network Security", "Cryptography"]);

    let query = milan_query();
    let base_score = matcher.search(&[base], &query).results[0].score;
    let richer_score = matcher.search(&[richer], &query).results[0].score;

    assert!(richer_score >= base_score);
}

#[test]
fn test_gpa_scale_invariant_outcomes() {
    let matcher = Matcher::with_default_weights();
    let four_scale = candidate("four", "Milan", 27.75, &["Network Security"]);
    let mut four_scale = four_scale;
    four_scale.education[0].gpa = Some(3.7);
    four_scale.education[0].max_gpa = Some(4.0);
    let thirty_scale = candidate("thirty", "Milan", 27.75, &["Network Security"]);

    let query = milan_query();
    let a = matcher.search(&[four_scale], &query);
    let b = matcher.search(&[thirty_scale], &query);

    assert_eq!(a.total_found, b.total_found);
    assert_eq!(a.results[0].score, b.results[0].score);
}

#[test]
fn test_top_k_default_is_best_match() {
    let matcher = Matcher::with_default_weights();
    let pool = vec![
        candidate("A", "Milan", 30.0, &["Network Security"]),
        candidate("C", "Milan", 27.0, &["Network Security", "Cryptography"]),
    ];

    let outcome = matcher.search(&pool, &milan_query());
    let best = top_k(&outcome.results, 1);

    assert_eq!(best.len(), 1);
    assert_eq!(best[0].candidate.id, "C");
}

#[test]
fn test_sharded_pool_merges_to_same_ranking() {
    // A caller may shard the pool, score shards independently, and
    // concatenate in pool order before one final stable sort
    let matcher = Matcher::with_default_weights();
    let pool = vec![
        candidate("1", "Milan", 27.0, &["Network Security"]),
        candidate("2", "Milan", 30.0, &["Network Security"]),
        candidate("3", "Milan", 27.0, &["Network Security"]),
        candidate("4", "Milan", 24.0, &["Network Security"]),
    ];

    let whole = matcher.search(&pool, &milan_query());

    let left = matcher.search(&pool[..2], &milan_query());
    let right = matcher.search(&pool[2..], &milan_query());
    let mut merged = Vec::new();
    merged.extend(left.results.iter().map(|r| r.candidate.id.clone()));
    merged.extend(right.results.iter().map(|r| r.candidate.id.clone()));

    // Re-rank the concatenation through the engine and compare
    let merged_pool: Vec<Candidate> = merged
        .iter()
        .map(|id| pool.iter().find(|c| &c.id == id).unwrap().clone())
        .collect();
    let re_ranked = matcher.search(&merged_pool, &milan_query());

    let whole_ids: Vec<&str> = whole
        .results
        .iter()
        .map(|r| r.candidate.id.as_str())
        .collect();
    let re_ranked_ids: Vec<&str> = re_ranked
        .results
        .iter()
        .map(|r| r.candidate.id.as_str())
        .collect();
    assert_eq!(whole_ids, re_ranked_ids);
}

#[test]
fn test_custom_weights_change_ordering() {
    // With the course dimension zeroed out, A's GPA edge wins
    let weights = ScoringWeights {
        courses: 0.0,
        course_step: 0.0,
        ..ScoringWeights::default()
    };
    let matcher = Matcher::new(weights);
    let pool = vec![
        candidate("A", "Milan", 30.0, &["Network Security"]),
        candidate("C", "Milan", 27.0, &["Network Security", "Cryptography"]),
    ];

    let outcome = matcher.search(&pool, &milan_query());
    assert_eq!(outcome.results[0].candidate.id, "A");
}

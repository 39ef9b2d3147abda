mod common;

use candidate_tracker::database::seed::default_candidates;
use candidate_tracker::dto::candidate_dto::{split_skills, FilterQuery, SkillsInput};
use candidate_tracker::error::Error;
use candidate_tracker::models::candidate::{Candidate, CandidateStatus};
use candidate_tracker::services::filter_service::{
    derive_options, derive_stats, filter_candidates, CandidateStats, FilterCriteria,
};
use common::candidate;

fn ids(candidates: &[&Candidate]) -> Vec<String> {
    candidates.iter().map(|c| c.id.clone()).collect()
}

fn with_experience(id: &str, years: i32) -> Candidate {
    let mut c = candidate(id, &format!("Exp {}", id));
    c.experience_years = years;
    c
}

fn with_salary(id: &str, min: i64, max: i64) -> Candidate {
    let mut c = candidate(id, &format!("Sal {}", id));
    c.salary_min = min;
    c.salary_max = max;
    c
}

#[test]
fn default_criteria_keep_everything_in_order() {
    let seed = default_candidates().unwrap();
    let visible = filter_candidates(&seed, &FilterCriteria::default());

    assert_eq!(visible.len(), seed.len());
    assert_eq!(ids(&visible), seed.iter().map(|c| c.id.clone()).collect::<Vec<_>>());
}

#[test]
fn experience_bounds_are_inclusive_and_combined() {
    let list = vec![
        with_experience("a", 2),
        with_experience("b", 5),
        with_experience("c", 9),
    ];
    let criteria = FilterCriteria {
        min_exp: Some(3),
        max_exp: Some(8),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_candidates(&list, &criteria)), vec!["b"]);

    let edges = FilterCriteria {
        min_exp: Some(2),
        max_exp: Some(5),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_candidates(&list, &edges)), vec!["a", "b"]);
}

#[test]
fn salary_filter_is_an_overlap_test() {
    let list = vec![
        with_salary("band", 2_000_000, 3_000_000),
        with_salary("low", 500_000, 900_000),
        with_salary("high", 2_900_000, 4_000_000),
    ];

    let both = FilterCriteria {
        min_sal: Some(2_500_000),
        max_sal: Some(2_800_000),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_candidates(&list, &both)), vec!["band"]);

    let min_only = FilterCriteria {
        min_sal: Some(2_500_000),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_candidates(&list, &min_only)), vec!["band", "high"]);

    let max_only = FilterCriteria {
        max_sal: Some(1_000_000),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_candidates(&list, &max_only)), vec!["low"]);
}

#[test]
fn search_matches_name_or_email_ignoring_case() {
    let seed = default_candidates().unwrap();

    let by_name = FilterCriteria {
        search: "MEERA".into(),
        ..FilterCriteria::default()
    };
    let names: Vec<&str> = filter_candidates(&seed, &by_name)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Meera Iyer"]);

    let by_email = FilterCriteria {
        search: "sanya.m@".into(),
        ..FilterCriteria::default()
    };
    assert_eq!(filter_candidates(&seed, &by_email).len(), 1);
}

#[test]
fn role_and_status_match_exactly() {
    let seed = default_candidates().unwrap();

    let role = FilterCriteria {
        role: Some("Product Manager".into()),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_candidates(&seed, &role)), vec!["2"]);

    let partial_role = FilterCriteria {
        role: Some("Manager".into()),
        ..FilterCriteria::default()
    };
    assert!(filter_candidates(&seed, &partial_role).is_empty());

    let status = FilterCriteria {
        status: Some(CandidateStatus::Interviewing),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_candidates(&seed, &status)), vec!["1", "6"]);
}

#[test]
fn location_is_a_case_sensitive_substring() {
    let seed = default_candidates().unwrap();

    let state = FilterCriteria {
        location: Some("Maharashtra".into()),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_candidates(&seed, &state)), vec!["3", "5"]);

    let lowercase = FilterCriteria {
        location: Some("maharashtra".into()),
        ..FilterCriteria::default()
    };
    assert!(filter_candidates(&seed, &lowercase).is_empty());
}

#[test]
fn skills_match_any_element_ignoring_case() {
    let seed = default_candidates().unwrap();
    let criteria = FilterCriteria {
        skills: "docker".into(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_candidates(&seed, &criteria)), vec!["4", "6"]);
}

#[test]
fn every_predicate_must_hold() {
    let seed = default_candidates().unwrap();
    let criteria = FilterCriteria {
        skills: "python".into(),
        min_exp: Some(4),
        ..FilterCriteria::default()
    };
    // Ananya (5y) and Vikram (3y) know Python; only Ananya clears the bound.
    assert_eq!(ids(&filter_candidates(&seed, &criteria)), vec!["4"]);

    let contradictory = FilterCriteria {
        status: Some(CandidateStatus::Hired),
        role: Some("Data Scientist".into()),
        ..FilterCriteria::default()
    };
    assert!(filter_candidates(&seed, &contradictory).is_empty());
}

#[test]
fn stats_cover_the_full_list() {
    let seed = default_candidates().unwrap();
    let stats = derive_stats(&seed);

    assert_eq!(
        stats,
        CandidateStats {
            total: 8,
            hired: 1,
            interviewing: 2,
            rejected: 1,
        }
    );
    assert!(stats.hired + stats.interviewing + stats.rejected <= stats.total);
    assert_eq!(derive_stats(&[]), CandidateStats::default());
}

#[test]
fn options_are_distinct_in_first_seen_order() {
    let mut list = vec![
        candidate("1", "A"),
        candidate("2", "B"),
        candidate("3", "C"),
    ];
    list[1].role = "Data Scientist".into();
    list[1].location = "Chennai, Tamil Nadu".into();

    let options = derive_options(&list);
    assert_eq!(options.roles, vec!["Backend Developer", "Data Scientist"]);
    assert_eq!(
        options.locations,
        vec!["Pune, Maharashtra", "Chennai, Tamil Nadu"]
    );
}

#[test]
fn query_wildcards_and_blanks_disable_filters() {
    let query = FilterQuery {
        search: Some(String::new()),
        role: Some("all".into()),
        status: Some("all".into()),
        location: Some("all".into()),
        skills: Some(String::new()),
        min_exp: Some(String::new()),
        max_exp: None,
        min_sal: Some("  ".into()),
        max_sal: None,
    };
    assert_eq!(FilterCriteria::try_from(query).unwrap(), FilterCriteria::default());
}

#[test]
fn query_values_become_criteria() {
    let query: FilterQuery = serde_json::from_value(serde_json::json!({
        "search": "patel",
        "status": "Hired",
        "minExp": "3",
        "max_sal": "2800000"
    }))
    .unwrap();
    let criteria = FilterCriteria::try_from(query).unwrap();

    assert_eq!(criteria.search, "patel");
    assert_eq!(criteria.status, Some(CandidateStatus::Hired));
    assert_eq!(criteria.min_exp, Some(3));
    assert_eq!(criteria.max_sal, Some(2_800_000));
    assert_eq!(criteria.role, None);
}

#[test]
fn malformed_query_values_are_rejected() {
    let bad_number = FilterQuery {
        min_exp: Some("five".into()),
        ..FilterQuery::default()
    };
    assert!(matches!(
        FilterCriteria::try_from(bad_number),
        Err(Error::BadRequest(_))
    ));

    let bad_status = FilterQuery {
        status: Some("Archived".into()),
        ..FilterQuery::default()
    };
    assert!(matches!(
        FilterCriteria::try_from(bad_status),
        Err(Error::BadRequest(_))
    ));
}

#[test]
fn delimited_skills_are_split_and_trimmed() {
    assert_eq!(
        split_skills(" React , TypeScript,,Next.js "),
        vec!["React", "TypeScript", "Next.js"]
    );
    assert!(split_skills("").is_empty());

    let list: SkillsInput = serde_json::from_str(r#"["Go", " Rust "]"#).unwrap();
    assert_eq!(list.into_skills(), vec!["Go", " Rust "]);
}

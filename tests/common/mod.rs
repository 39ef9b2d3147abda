//! Helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use candidate_tracker::database::medium::MemoryMedium;
use candidate_tracker::models::candidate::{
    Candidate, CandidateProfile, CandidateStatus, NewCandidate,
};
use candidate_tracker::services::candidate_service::CandidateService;
use chrono::Utc;

/// Store over a fresh in-memory medium with no simulated delay.
pub fn test_service() -> (CandidateService, Arc<MemoryMedium>) {
    let medium = Arc::new(MemoryMedium::new());
    let service = CandidateService::with_latency(medium.clone(), Duration::ZERO);
    (service, medium)
}

pub fn new_candidate(name: &str) -> NewCandidate {
    NewCandidate {
        name: name.to_string(),
        email: format!("{}@example.in", name.to_lowercase().replace(' ', ".")),
        phone: "+91 90000 00000".to_string(),
        role: "Backend Developer".to_string(),
        skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        experience_years: 4,
        location: "Pune, Maharashtra".to_string(),
        salary_min: 1_800_000,
        salary_max: 2_400_000,
        status: CandidateStatus::New,
        profile: CandidateProfile::default(),
    }
}

pub fn candidate(id: &str, name: &str) -> Candidate {
    Candidate::from_new(id.to_string(), Utc::now(), new_candidate(name))
}

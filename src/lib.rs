pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::candidate_service::CandidateService;

#[derive(Clone)]
pub struct AppState {
    pub candidate_service: CandidateService,
}

impl AppState {
    pub fn new(candidate_service: CandidateService) -> Self {
        Self { candidate_service }
    }
}

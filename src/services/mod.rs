pub mod candidate_service;
pub mod filter_service;

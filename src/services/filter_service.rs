//! Dashboard filtering and aggregates over an in-memory candidate list.
//!
//! Nothing here touches storage or mutates its input.

use crate::models::candidate::{Candidate, CandidateStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Active predicates. `None` (or an empty string for `search`/`skills`)
/// leaves that field unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of `name` or `email`.
    pub search: String,
    /// Exact `role`.
    pub role: Option<String>,
    pub status: Option<CandidateStatus>,
    /// Case-sensitive substring of `location`.
    pub location: Option<String>,
    /// Case-insensitive substring of any skill.
    pub skills: String,
    pub min_exp: Option<i32>,
    pub max_exp: Option<i32>,
    /// Passes when `salary_max >= min_sal`.
    pub min_sal: Option<i64>,
    /// Passes when `salary_min <= max_sal`.
    pub max_sal: Option<i64>,
}

impl FilterCriteria {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.matches_search(candidate)
            && self.role.as_ref().map_or(true, |role| candidate.role == *role)
            && self.status.map_or(true, |status| candidate.status == status)
            && self
                .location
                .as_ref()
                .map_or(true, |location| candidate.location.contains(location.as_str()))
            && self.matches_skills(candidate)
            && self.min_exp.map_or(true, |min| candidate.experience_years >= min)
            && self.max_exp.map_or(true, |max| candidate.experience_years <= max)
            // salary band overlap, not containment
            && self.min_sal.map_or(true, |min| candidate.salary_max >= min)
            && self.max_sal.map_or(true, |max| candidate.salary_min <= max)
    }

    fn matches_search(&self, candidate: &Candidate) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        candidate.name.to_lowercase().contains(&needle)
            || candidate.email.to_lowercase().contains(&needle)
    }

    fn matches_skills(&self, candidate: &Candidate) -> bool {
        if self.skills.is_empty() {
            return true;
        }
        let needle = self.skills.to_lowercase();
        candidate
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateStats {
    pub total: usize,
    pub hired: usize,
    pub interviewing: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub roles: Vec<String>,
    pub locations: Vec<String>,
}

/// Candidates satisfying every active predicate, in input order.
pub fn filter_candidates<'a>(
    candidates: &'a [Candidate],
    criteria: &FilterCriteria,
) -> Vec<&'a Candidate> {
    candidates.iter().filter(|c| criteria.matches(c)).collect()
}

pub fn derive_stats(candidates: &[Candidate]) -> CandidateStats {
    candidates
        .iter()
        .fold(
            CandidateStats {
                total: candidates.len(),
                ..CandidateStats::default()
            },
            |mut stats, candidate| {
                match candidate.status {
                    CandidateStatus::Hired => stats.hired += 1,
                    CandidateStatus::Interviewing => stats.interviewing += 1,
                    CandidateStatus::Rejected => stats.rejected += 1,
                    CandidateStatus::New => {}
                }
                stats
            },
        )
}

pub fn derive_options(candidates: &[Candidate]) -> FilterOptions {
    FilterOptions {
        roles: distinct_in_order(candidates.iter().map(|c| c.role.as_str())),
        locations: distinct_in_order(candidates.iter().map(|c| c.location.as_str())),
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

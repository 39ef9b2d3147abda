use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::candidate::{
    Candidate, CandidatePatch, CandidateProfile, CandidateStatus, NewCandidate,
};
use crate::services::filter_service::{CandidateStats, FilterCriteria, FilterOptions};

/// Criteria value meaning "do not filter on this field".
pub const WILDCARD: &str = "all";

/// `skills` as submitted by a form: one comma-delimited string, or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    Delimited(String),
    List(Vec<String>),
}

impl Default for SkillsInput {
    fn default() -> Self {
        SkillsInput::List(Vec::new())
    }
}

impl SkillsInput {
    pub fn into_skills(self) -> Vec<String> {
        match self {
            SkillsInput::Delimited(raw) => split_skills(&raw),
            SkillsInput::List(skills) => skills,
        }
    }
}

/// Splits a comma-delimited skills field, trimming each part.
///
/// Empty parts are dropped on purpose: `"React, "` yields `["React"]`, not
/// `["React", ""]`, and a blank field yields no skills at all.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub skills: SkillsInput,
    pub experience_years: i32,
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
    #[serde(default)]
    pub status: CandidateStatus,
    #[serde(flatten)]
    pub profile: CandidateProfile,
}

impl From<CandidateForm> for NewCandidate {
    fn from(form: CandidateForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            role: form.role,
            skills: form.skills.into_skills(),
            experience_years: form.experience_years,
            location: form.location,
            salary_min: form.salary_min,
            salary_max: form.salary_max,
            status: form.status,
            profile: form.profile,
        }
    }
}

/// Edit payload. The dashboard resubmits the whole record, `id` and
/// `created_at` included; those keys are not part of this shape and drop out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateUpdateForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub skills: Option<SkillsInput>,
    pub experience_years: Option<i32>,
    pub location: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub status: Option<CandidateStatus>,
    #[serde(flatten)]
    pub profile: CandidateProfile,
}

impl From<CandidateUpdateForm> for CandidatePatch {
    fn from(form: CandidateUpdateForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            role: form.role,
            skills: form.skills.map(SkillsInput::into_skills),
            experience_years: form.experience_years,
            location: form.location,
            salary_min: form.salary_min,
            salary_max: form.salary_max,
            status: form.status,
            profile: form.profile,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    #[serde(rename = "minExp", alias = "min_exp")]
    pub min_exp: Option<String>,
    #[serde(rename = "maxExp", alias = "max_exp")]
    pub max_exp: Option<String>,
    #[serde(rename = "minSal", alias = "min_sal")]
    pub min_sal: Option<String>,
    #[serde(rename = "maxSal", alias = "max_sal")]
    pub max_sal: Option<String>,
}

impl TryFrom<FilterQuery> for FilterCriteria {
    type Error = Error;

    fn try_from(query: FilterQuery) -> Result<Self> {
        let status = selection(query.status)
            .map(|raw| raw.parse::<CandidateStatus>().map_err(Error::BadRequest))
            .transpose()?;

        Ok(Self {
            search: query.search.unwrap_or_default(),
            role: selection(query.role),
            status,
            location: selection(query.location),
            skills: query.skills.unwrap_or_default(),
            min_exp: bound("minExp", query.min_exp)?,
            max_exp: bound("maxExp", query.max_exp)?,
            min_sal: bound("minSal", query.min_sal)?,
            max_sal: bound("maxSal", query.max_sal)?,
        })
    }
}

fn selection(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != WILDCARD)
}

fn bound<T>(name: &str, value: Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::BadRequest(format!("{} must be an integer, got {:?}", name, raw))),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse<'a> {
    pub candidates: Vec<&'a Candidate>,
    pub stats: CandidateStats,
    pub options: FilterOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

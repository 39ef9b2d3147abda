use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[default]
    New,
    Interviewing,
    Hired,
    Rejected,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 4] = [
        CandidateStatus::New,
        CandidateStatus::Interviewing,
        CandidateStatus::Hired,
        CandidateStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::New => "New",
            CandidateStatus::Interviewing => "Interviewing",
            CandidateStatus::Hired => "Hired",
            CandidateStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CandidateStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown candidate status: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub responsibilities: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub contact: String,
}

/// Extended profile data. Stored and returned as-is, never interpreted.
///
/// The same shape is used as the profile part of an update: every `Some`
/// field replaces the stored value, `None` keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhaar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_ctc: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CandidateProfile {
    pub fn is_empty(&self) -> bool {
        *self == CandidateProfile::default()
    }

    pub fn merge(&mut self, patch: CandidateProfile) {
        merge_field(&mut self.aadhaar, patch.aadhaar);
        merge_field(&mut self.current_ctc, patch.current_ctc);
        merge_field(&mut self.notice_period, patch.notice_period);
        merge_field(&mut self.work_mode, patch.work_mode);
        merge_field(&mut self.languages, patch.languages);
        merge_field(&mut self.education, patch.education);
        merge_field(&mut self.certifications, patch.certifications);
        merge_field(&mut self.linkedin, patch.linkedin);
        merge_field(&mut self.github, patch.github);
        merge_field(&mut self.portfolio, patch.portfolio);
        merge_field(&mut self.summary, patch.summary);
        merge_field(&mut self.work_experience, patch.work_experience);
        merge_field(&mut self.references, patch.references);
        merge_field(&mut self.notes, patch.notes);
    }
}

fn merge_field<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub status: CandidateStatus,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub profile: CandidateProfile,
}

/// Candidate fields supplied by the caller on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
    #[serde(default)]
    pub status: CandidateStatus,
    #[serde(flatten)]
    pub profile: CandidateProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience_years: Option<i32>,
    pub location: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub status: Option<CandidateStatus>,
    #[serde(flatten)]
    pub profile: CandidateProfile,
}

impl CandidatePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.role.is_none()
            && self.skills.is_none()
            && self.experience_years.is_none()
            && self.location.is_none()
            && self.salary_min.is_none()
            && self.salary_max.is_none()
            && self.status.is_none()
            && self.profile.is_empty()
    }
}

impl Candidate {
    pub fn from_new(id: String, created_at: DateTime<Utc>, data: NewCandidate) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            role: data.role,
            skills: data.skills,
            experience_years: data.experience_years,
            location: data.location,
            salary_min: data.salary_min,
            salary_max: data.salary_max,
            status: data.status,
            created_at,
            profile: data.profile,
        }
    }

    /// Field-by-field merge of `patch` over this record.
    ///
    /// `id` and `created_at` are restored afterwards, whatever the patch held.
    pub fn apply_patch(&mut self, patch: CandidatePatch) {
        let id = self.id.clone();
        let created_at = self.created_at;

        merge_value(&mut self.name, patch.name);
        merge_value(&mut self.email, patch.email);
        merge_value(&mut self.phone, patch.phone);
        merge_value(&mut self.role, patch.role);
        merge_value(&mut self.skills, patch.skills);
        merge_value(&mut self.experience_years, patch.experience_years);
        merge_value(&mut self.location, patch.location);
        merge_value(&mut self.salary_min, patch.salary_min);
        merge_value(&mut self.salary_max, patch.salary_max);
        merge_value(&mut self.status, patch.status);
        self.profile.merge(patch.profile);

        self.id = id;
        self.created_at = created_at;
    }
}

fn merge_value<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

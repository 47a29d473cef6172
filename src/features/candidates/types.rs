use crate::api::PageRequest;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Applied,
    Shortlisted,
    Interviewed,
    Rejected,
    Hired,
}

impl CandidateStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CandidateStatus::Applied => "applied",
            CandidateStatus::Shortlisted => "shortlisted",
            CandidateStatus::Interviewed => "interviewed",
            CandidateStatus::Rejected => "rejected",
            CandidateStatus::Hired => "hired",
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

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "applied" => Ok(CandidateStatus::Applied),
            "shortlisted" => Ok(CandidateStatus::Shortlisted),
            "interviewed" => Ok(CandidateStatus::Interviewed),
            "rejected" => Ok(CandidateStatus::Rejected),
            "hired" => Ok(CandidateStatus::Hired),
            other => Err(format!("unknown candidate status: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: CandidateStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
    pub company_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Candidate {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListCandidatesParams {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCandidateRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCandidateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkImportRequest {
    pub candidates: Vec<CreateCandidateRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_invitations: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkImportResponse {
    pub total: u64,
    pub imported: u64,
    pub errors: u64,
    #[serde(default)]
    pub message: String,
}

/// Extra form fields sent with a spreadsheet import.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkImportFileOptions {
    pub send_invitations: Option<bool>,
    pub default_domain: Option<String>,
}

impl BulkImportFileOptions {
    pub(crate) fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        if let Some(send) = self.send_invitations {
            fields.push(("send_invitations".to_string(), send.to_string()));
        }
        if let Some(domain) = self.default_domain.as_deref().map(str::trim) {
            if !domain.is_empty() {
                fields.push(("default_domain".to_string(), domain.to_string()));
            }
        }
        fields
    }
}

/// Background import job created by a file upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportJob {
    pub job_id: String,
    pub status: String,
    #[serde(default)]
    pub total_records: u64,
    #[serde(default)]
    pub created_count: u64,
    #[serde(default)]
    pub failed_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_duration_seconds: Option<f64>,
}

impl ImportJob {
    /// Statuses after which the job no longer changes.
    pub const TERMINAL_STATUSES: [&'static str; 5] =
        ["completed", "failed", "partial", "partially_completed", "cancelled"];

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        let status = self.status.trim().to_ascii_lowercase();
        Self::TERMINAL_STATUSES.contains(&status.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEmailRequest {
    pub candidate_ids: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEmailResponse {
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_candidates: u64,
    #[serde(default)]
    pub candidates_by_status: BTreeMap<CandidateStatus, u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates_by_domain: Option<BTreeMap<String, u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_days_to_hire: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_interviews: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_feedback: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: CandidateStatus,
    pub count: u64,
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_off_rate: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunnelAnalytics {
    pub funnel_stages: Vec<FunnelStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_acceptance_rate: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepartmentHireTime {
    pub average: f64,
    pub median: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeToHireMetrics {
    pub average_days_to_hire: f64,
    pub median_days_to_hire: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_department: Option<BTreeMap<String, DepartmentHireTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

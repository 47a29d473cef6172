use crate::api::PageRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewRoundType {
    Screening,
    Technical,
    Behavioral,
    Final,
    Hr,
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Rescheduled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Pass,
    Fail,
    Maybe,
}

/// Parses the wire spelling of a fieldless enum, case-insensitively.
fn parse_wire<T: serde::de::DeserializeOwned>(value: &str, kind: &str) -> Result<T, String> {
    let wire = value.trim().to_ascii_uppercase().replace(['-', ' '], "_");
    serde_json::from_value(serde_json::Value::String(wire))
        .map_err(|_| format!("unknown {kind}: {}", value.trim()))
}

/// Wire spelling of a fieldless enum.
fn wire_name<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(text)) => text,
        _ => String::new(),
    }
}

macro_rules! wire_enum_text {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = String;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    parse_wire(value, $kind)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&wire_name(self))
                }
            }
        )*
    };
}

wire_enum_text!(
    InterviewRoundType => "round type",
    InterviewStatus => "interview status",
    Recommendation => "recommendation",
);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRound {
    pub id: String,
    pub candidate_id: String,
    pub interviewer_id: String,
    pub round_type: InterviewRoundType,
    pub status: InterviewStatus,
    pub scheduled_at: String,
    pub timezone: String,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub company_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListInterviewsParams {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InterviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInterviewRoundRequest {
    pub candidate_id: String,
    pub interviewer_id: String,
    pub round_type: InterviewRoundType,
    pub scheduled_at: String,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchScheduleRequest {
    pub candidate_id: String,
    pub interviewer_ids: Vec<String>,
    pub round_types: Vec<InterviewRoundType>,
    pub start_date: String,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_between_rounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchScheduleResponse {
    pub rounds: Vec<InterviewRound>,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInterviewRoundRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InterviewStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescheduleRequest {
    pub scheduled_at: String,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompleteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRoundProgress {
    pub candidate_id: String,
    pub completed_count: u32,
    pub pending_count: u32,
    pub cancelled_count: u32,
    pub rounds: Vec<InterviewRound>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct InterviewerScheduleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewerSchedule {
    pub interviewer_id: String,
    pub scheduled_rounds: Vec<InterviewRound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_slots: Option<Vec<TimeSlot>>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UpcomingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_ahead: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingRounds {
    pub upcoming_rounds: Vec<InterviewRound>,
    pub total_count: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn enum_text_matches_wire_names() {
        assert_eq!(InterviewStatus::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!("in-progress".parse::<InterviewStatus>(), Ok(InterviewStatus::InProgress));
        assert_eq!("technical".parse::<InterviewRoundType>(), Ok(InterviewRoundType::Technical));
        assert_eq!("maybe".parse::<Recommendation>(), Ok(Recommendation::Maybe));
        assert!("later".parse::<InterviewStatus>().is_err());
    }

    #[test]
    fn unknown_round_type_fails_decoding() {
        let result = serde_json::from_str::<InterviewRoundType>("\"PAIRING\"");
        assert!(result.is_err());
    }
}

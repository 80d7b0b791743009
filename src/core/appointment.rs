use crate::error::BookingError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ANONYMOUS_STUDENT: &str = "anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HelpType {
    Counsellor,
    Psychiatrist,
    PeerVolunteer,
}

impl HelpType {
    pub const ALL: [HelpType; 3] = [
        HelpType::Counsellor,
        HelpType::Psychiatrist,
        HelpType::PeerVolunteer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HelpType::Counsellor => "Counsellor",
            HelpType::Psychiatrist => "Psychiatrist",
            HelpType::PeerVolunteer => "Peer Volunteer",
        }
    }
}

impl Default for HelpType {
    fn default() -> Self {
        HelpType::Counsellor
    }
}

/// Запрос на запись, уходит один раз и нигде не хранится
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentRequest {
    pub request_id: Uuid,
    #[serde(rename = "type")]
    pub help: HelpType,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "studentId")]
    pub student_id: &'static str,
}

impl AppointmentRequest {
    /// Builds a request from raw form fields. The date is required and must be
    /// `YYYY-MM-DD`; blank notes are dropped.
    pub fn from_form(help: HelpType, date: &str, notes: &str) -> Result<Self, BookingError> {
        let date = date.trim();
        if date.is_empty() {
            return Err(BookingError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(date.to_string()))?;

        let notes = notes.trim();
        Ok(Self {
            request_id: Uuid::new_v4(),
            help,
            date,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            student_id: ANONYMOUS_STUDENT,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_valid() {
        let req = AppointmentRequest::from_form(HelpType::Psychiatrist, " 2025-03-14 ", "  exams  ").unwrap();
        assert_eq!(req.help, HelpType::Psychiatrist);
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(req.notes.as_deref(), Some("exams"));
        assert_eq!(req.student_id, ANONYMOUS_STUDENT);
    }

    #[test]
    fn test_from_form_blank_notes_dropped() {
        let req = AppointmentRequest::from_form(HelpType::default(), "2025-01-02", "   ").unwrap();
        assert_eq!(req.help, HelpType::Counsellor);
        assert!(req.notes.is_none());
    }

    #[test]
    fn test_from_form_missing_date() {
        assert_eq!(
            AppointmentRequest::from_form(HelpType::Counsellor, "  ", ""),
            Err(BookingError::MissingDate)
        );
    }

    #[test]
    fn test_from_form_invalid_date() {
        assert_eq!(
            AppointmentRequest::from_form(HelpType::Counsellor, "14/03/2025", ""),
            Err(BookingError::InvalidDate("14/03/2025".to_string()))
        );
        assert!(AppointmentRequest::from_form(HelpType::Counsellor, "2025-02-30", "").is_err());
    }

    #[test]
    fn test_request_ids_differ() {
        let a = AppointmentRequest::from_form(HelpType::Counsellor, "2025-01-02", "").unwrap();
        let b = AppointmentRequest::from_form(HelpType::Counsellor, "2025-01-02", "").unwrap();
        assert_ne!(a.request_id, b.request_id);
    }

    #[test]
    fn test_serialized_payload() {
        let req = AppointmentRequest::from_form(HelpType::PeerVolunteer, "2025-05-01", "").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "PeerVolunteer");
        assert_eq!(json["date"], "2025-05-01");
        assert_eq!(json["studentId"], "anonymous");
        assert!(json.get("notes").is_none());
    }
}

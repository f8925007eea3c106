use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lower bound of the favourable band.
pub const FAVORABLE_THRESHOLD: f64 = 80.0;
/// Lower bound of the caution band.
pub const CAUTION_THRESHOLD: f64 = 60.0;

/// Colour band of a percentage score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Favorable,
    Caution,
    Unfavorable,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= FAVORABLE_THRESHOLD {
            ScoreBand::Favorable
        } else if score >= CAUTION_THRESHOLD {
            ScoreBand::Caution
        } else {
            ScoreBand::Unfavorable
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::Favorable => "success",
            ScoreBand::Caution => "warning",
            ScoreBand::Unfavorable => "danger",
        }
    }
}

/// A recorded quiz attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    #[serde(default)]
    pub topic: Option<String>,
    pub score: f64,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicTrend {
    pub topic: String,
    pub score: f64,
}

/// Body of `GET /api/performance/{student_id}`.
///
/// Subjects keep the order the server sent them in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentDetail {
    #[serde(default)]
    pub subject_proficiency: IndexMap<String, f64>,
    #[serde(default)]
    pub recent_quizzes: Vec<QuizAttempt>,
    #[serde(default)]
    pub trends: Vec<TopicTrend>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(ScoreBand::from_score(100.0), ScoreBand::Favorable);
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Favorable);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Caution);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Caution);
        assert_eq!(ScoreBand::from_score(59.99), ScoreBand::Unfavorable);
        assert_eq!(ScoreBand::from_score(0.0).css_class(), "danger");
    }

    #[test]
    fn detail_parses_server_payload() {
        let body = r#"{
            "recent_quizzes": [{"topic": "Fractions", "score": 72.5, "date": "2024-03-01"}],
            "subject_proficiency": {"Mathematics": 81.25, "Science": 55.0},
            "trends": [{"topic": "Fractions", "score": 70.0, "data": [1, 2]}]
        }"#;
        let detail: StudentDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.recent_quizzes.len(), 1);
        assert_eq!(
            detail.recent_quizzes[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(detail.subject_proficiency["Mathematics"], 81.25);
        assert_eq!(detail.trends[0].topic, "Fractions");
    }

    #[test]
    fn subjects_keep_payload_order() {
        let body = r#"{"subject_proficiency": {"Science": 55.0, "Art": 90.0, "Mathematics": 81.0}}"#;
        let detail: StudentDetail = serde_json::from_str(body).unwrap();
        let subjects: Vec<_> = detail.subject_proficiency.keys().map(String::as_str).collect();
        assert_eq!(subjects, vec!["Science", "Art", "Mathematics"]);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let detail: StudentDetail = serde_json::from_str("{}").unwrap();
        assert!(detail.subject_proficiency.is_empty());
        assert!(detail.recent_quizzes.is_empty());
    }
}

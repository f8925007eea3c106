use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::ids::StudentId;
use crate::model::performance::{CAUTION_THRESHOLD, FAVORABLE_THRESHOLD, QuizAttempt};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardRole {
    #[default]
    Student,
    Teacher,
}

impl FromStr for DashboardRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" | "learner" => Ok(DashboardRole::Student),
            "teacher" | "educator" => Ok(DashboardRole::Teacher),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dashboard role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

/// Time-ordered attempts feeding the score trend chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    #[serde(default)]
    pub recent_quizzes: Vec<QuizAttempt>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectStat {
    pub average_score: f64,
    #[serde(default)]
    pub total_quizzes: u32,
}

/// Headline number animated from zero on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterTile {
    pub label: String,
    pub value: u64,
}

/// Roster status derived from a learner's recent average.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrafficLight {
    Green,
    Amber,
    Red,
    Gray,
}

impl TrafficLight {
    #[must_use]
    pub fn for_average(average: Option<f64>) -> Self {
        match average {
            None => TrafficLight::Gray,
            Some(score) if score >= FAVORABLE_THRESHOLD => TrafficLight::Green,
            Some(score) if score >= CAUTION_THRESHOLD => TrafficLight::Amber,
            Some(_) => TrafficLight::Red,
        }
    }

    /// Category tag used by the dashboard filters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficLight::Green => "green",
            TrafficLight::Amber => "amber",
            TrafficLight::Red => "red",
            TrafficLight::Gray => "gray",
        }
    }

    #[must_use]
    pub fn needs_attention(self) -> bool {
        matches!(self, TrafficLight::Red)
    }
}

/// One learner row of the teacher roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentStanding {
    pub learner_name: String,
    pub student_id: StudentId,
    #[serde(default)]
    pub avg_score: f64,
    #[serde(default)]
    pub quiz_count: u32,
}

impl StudentStanding {
    #[must_use]
    pub fn status(&self) -> TrafficLight {
        let average = (self.quiz_count > 0).then_some(self.avg_score);
        TrafficLight::for_average(average)
    }
}

/// Externally supplied dashboard payload, read once at start-up.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub performance_data: PerformanceData,
    #[serde(default)]
    /// Subject averages in the order the payload lists them.
    pub subject_data: IndexMap<String, SubjectStat>,
    #[serde(default)]
    pub counters: Vec<CounterTile>,
    #[serde(default)]
    pub students: Vec<StudentStanding>,
}

impl DashboardData {
    /// Learners whose standing needs attention, shown as clickable alerts.
    pub fn alerts(&self) -> impl Iterator<Item = &StudentStanding> {
        self.students
            .iter()
            .filter(|student| student.status().needs_attention())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: &str, avg: f64, count: u32) -> StudentStanding {
        StudentStanding {
            learner_name: format!("Learner {id}"),
            student_id: StudentId::new(id).unwrap(),
            avg_score: avg,
            quiz_count: count,
        }
    }

    #[test]
    fn traffic_light_thresholds() {
        assert_eq!(standing("a", 80.0, 3).status(), TrafficLight::Green);
        assert_eq!(standing("b", 60.0, 3).status(), TrafficLight::Amber);
        assert_eq!(standing("c", 59.0, 3).status(), TrafficLight::Red);
        assert_eq!(standing("d", 0.0, 0).status(), TrafficLight::Gray);
    }

    #[test]
    fn alerts_only_include_red() {
        let data = DashboardData {
            students: vec![standing("a", 90.0, 2), standing("b", 40.0, 2), standing("c", 0.0, 0)],
            ..DashboardData::default()
        };
        let ids: Vec<_> = data.alerts().map(|s| s.student_id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn role_parses_aliases() {
        assert_eq!("Teacher".parse::<DashboardRole>(), Ok(DashboardRole::Teacher));
        assert_eq!("learner".parse::<DashboardRole>(), Ok(DashboardRole::Student));
        assert!("admin".parse::<DashboardRole>().is_err());
    }

    #[test]
    fn payload_sections_are_optional() {
        let data: DashboardData = serde_json::from_str(
            r#"{"subject_data": {"Mathematics": {"average_score": 72.5, "total_quizzes": 4}}}"#,
        )
        .unwrap();
        assert!(data.performance_data.recent_quizzes.is_empty());
        assert_eq!(data.subject_data["Mathematics"].total_quizzes, 4);
    }

    #[test]
    fn subject_data_keeps_payload_order() {
        let data: DashboardData = serde_json::from_str(
            r#"{"subject_data": {
                "Science": {"average_score": 55.0},
                "Mathematics": {"average_score": 72.5}
            }}"#,
        )
        .unwrap();
        let subjects: Vec<_> = data.subject_data.keys().map(String::as_str).collect();
        assert_eq!(subjects, vec!["Science", "Mathematics"]);
    }
}

use chrono::NaiveDate;

use crate::model::{DashboardData, StudentDetail};

/// Labels and values ready for a chart or bar list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Score trend over recent attempts, in supplied order.
    #[must_use]
    pub fn score_trend(data: &DashboardData) -> Self {
        data.performance_data
            .recent_quizzes
            .iter()
            .map(|attempt| (format_date(attempt.date), attempt.score))
            .collect()
    }

    /// Average score per subject, in map order.
    #[must_use]
    pub fn subject_breakdown(data: &DashboardData) -> Self {
        data.subject_data
            .iter()
            .map(|(subject, stat)| (subject.clone(), stat.average_score))
            .collect()
    }

    /// Score over time for one student, from their recent attempts.
    #[must_use]
    pub fn student_trend(detail: &StudentDetail) -> Self {
        detail
            .recent_quizzes
            .iter()
            .map(|attempt| (format_date(attempt.date), attempt.score))
            .collect()
    }
}

impl FromIterator<(String, f64)> for ChartSeries {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

/// `Mon D, YYYY`, e.g. `Mar 1, 2024`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Score with one decimal place.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PerformanceData, QuizAttempt, SubjectStat, TopicTrend};

    fn attempt(day: u32, score: f64) -> QuizAttempt {
        QuizAttempt {
            topic: None,
            score,
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        }
    }

    #[test]
    fn score_trend_keeps_supplied_order() {
        let data = DashboardData {
            performance_data: PerformanceData {
                recent_quizzes: vec![attempt(12, 64.0), attempt(1, 88.5)],
            },
            ..DashboardData::default()
        };
        let series = ChartSeries::score_trend(&data);
        assert_eq!(series.labels, vec!["Mar 12, 2024", "Mar 1, 2024"]);
        assert_eq!(series.values, vec![64.0, 88.5]);
    }

    #[test]
    fn subject_breakdown_uses_averages() {
        let mut data = DashboardData::default();
        data.subject_data.insert(
            "Science".into(),
            SubjectStat {
                average_score: 55.0,
                total_quizzes: 2,
            },
        );
        data.subject_data.insert(
            "History".into(),
            SubjectStat {
                average_score: 91.0,
                total_quizzes: 5,
            },
        );
        let series = ChartSeries::subject_breakdown(&data);
        let points: Vec<_> = series.points().collect();
        assert_eq!(points, vec![("Science", 55.0), ("History", 91.0)]);
    }

    #[test]
    fn student_trend_charts_recent_attempts() {
        let detail = StudentDetail {
            recent_quizzes: vec![attempt(3, 70.0), attempt(9, 84.0)],
            trends: vec![TopicTrend {
                topic: "Fractions".into(),
                score: 77.0,
            }],
            ..StudentDetail::default()
        };
        let series = ChartSeries::student_trend(&detail);
        assert_eq!(series.labels, vec!["Mar 3, 2024", "Mar 9, 2024"]);
        assert_eq!(series.values, vec![70.0, 84.0]);
    }

    #[test]
    fn scores_use_one_decimal() {
        assert_eq!(format_score(81.26), "81.3%");
        assert_eq!(format_score(60.0), "60.0%");
    }
}

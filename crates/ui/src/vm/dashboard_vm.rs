use nura_core::dashboard::{ChartSeries, FilterBar, ProgressFill, format_score};
use nura_core::model::{DashboardRole, ScoreBand, StudentId, TrafficLight};
use services::Dashboard;

#[derive(Clone, Debug, PartialEq)]
pub struct BarVm {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub score_label: String,
    pub band_class: &'static str,
    /// Filter tag; the subject name for subject bars.
    pub category: String,
}

impl BarVm {
    #[must_use]
    pub fn fill(&self, filling: bool) -> ProgressFill {
        if filling {
            ProgressFill::Filling {
                percent: self.value,
            }
        } else {
            ProgressFill::Reset
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RosterRowVm {
    pub student_id: StudentId,
    pub name: String,
    pub status: TrafficLight,
    pub average_label: String,
    pub quiz_count: u32,
}

impl RosterRowVm {
    #[must_use]
    pub fn category(&self) -> &'static str {
        self.status.as_str()
    }

    #[must_use]
    pub fn status_class(&self) -> String {
        format!("status-dot status-{}", self.status.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub role: DashboardRole,
    pub counters: Vec<(String, u64)>,
    pub trend: Vec<BarVm>,
    pub subjects: Vec<BarVm>,
    pub roster: Vec<RosterRowVm>,
    pub alerts: Vec<RosterRowVm>,
}

impl DashboardVm {
    #[must_use]
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        let data = dashboard.data();
        let roster: Vec<RosterRowVm> = data.students.iter().map(map_roster_row).collect();
        let alerts = data.alerts().map(map_roster_row).collect();
        Self {
            role: dashboard.role(),
            counters: dashboard
                .counters()
                .into_iter()
                .map(|(label, counter)| (label, counter.target()))
                .collect(),
            trend: map_bars("trend", &dashboard.score_trend()),
            subjects: map_bars("subject", &dashboard.subject_breakdown()),
            roster,
            alerts,
        }
    }

    /// Filter buttons for this role: subjects for students, standings for teachers.
    #[must_use]
    pub fn filter_bar(&self) -> FilterBar {
        match self.role {
            DashboardRole::Student => {
                FilterBar::new(self.subjects.iter().map(|bar| bar.category.as_str()))
            }
            DashboardRole::Teacher => FilterBar::new(self.roster.iter().map(RosterRowVm::category)),
        }
    }
}

/// Bars for a chart series. The category tag of every bar is its label.
#[must_use]
pub fn map_bars(prefix: &str, series: &ChartSeries) -> Vec<BarVm> {
    series
        .points()
        .enumerate()
        .map(|(index, (label, value))| BarVm {
            key: format!("{prefix}-{index}"),
            label: label.to_string(),
            value,
            score_label: format_score(value),
            band_class: ScoreBand::from_score(value).css_class(),
            category: label.to_string(),
        })
        .collect()
}

fn map_roster_row(student: &nura_core::model::StudentStanding) -> RosterRowVm {
    RosterRowVm {
        student_id: student.student_id.clone(),
        name: student.learner_name.clone(),
        status: student.status(),
        average_label: if student.quiz_count > 0 {
            format_score(student.avg_score)
        } else {
            "No attempts".to_string()
        },
        quiz_count: student.quiz_count,
    }
}

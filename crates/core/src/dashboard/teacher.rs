use std::str::FromStr;

use crate::dashboard::charts::{ChartSeries, format_score};
use crate::model::{Notification, ScoreBand, StudentDetail, StudentId};

//
// ─── CLASS ACTIONS ─────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassAction {
    ExportData,
    SendFeedback,
    GenerateReport,
}

impl ClassAction {
    pub const ALL: [ClassAction; 3] = [
        ClassAction::ExportData,
        ClassAction::SendFeedback,
        ClassAction::GenerateReport,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ClassAction::ExportData => "export-data",
            ClassAction::SendFeedback => "send-feedback",
            ClassAction::GenerateReport => "generate-report",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ClassAction::ExportData => "Export Data",
            ClassAction::SendFeedback => "Send Feedback",
            ClassAction::GenerateReport => "Generate Report",
        }
    }

    /// Placeholder notice for the action; feedback has none.
    #[must_use]
    pub fn notification(self) -> Option<Notification> {
        match self {
            ClassAction::ExportData => Some(Notification::info("Exporting class data...")),
            ClassAction::SendFeedback => None,
            ClassAction::GenerateReport => Some(Notification::info("Generating class report...")),
        }
    }
}

impl FromStr for ClassAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("unknown class action: {s}"))
    }
}

//
// ─── STUDENT DETAIL PANEL ──────────────────────────────────────────────────────
//

/// One row of the per-subject breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectRow {
    pub subject: String,
    pub score: f64,
    pub band: ScoreBand,
}

impl SubjectRow {
    #[must_use]
    pub fn score_label(&self) -> String {
        format_score(self.score)
    }
}

#[must_use]
pub fn subject_rows(detail: &StudentDetail) -> Vec<SubjectRow> {
    detail
        .subject_proficiency
        .iter()
        .map(|(subject, score)| SubjectRow {
            subject: subject.clone(),
            score: *score,
            band: ScoreBand::from_score(*score),
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum PanelState {
    #[default]
    Closed,
    Loading {
        student: StudentId,
    },
    Ready {
        student: StudentId,
        rows: Vec<SubjectRow>,
        trend: ChartSeries,
    },
    Failed {
        student: StudentId,
        message: String,
    },
}

/// Ticket for one in-flight detail fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    pub student: StudentId,
}

/// Modal showing one student's detail.
///
/// Fetches are not cancelled: whichever response resolves last is shown, even
/// if it belongs to an older request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailPanel {
    state: PanelState,
}

impl DetailPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.state, PanelState::Closed)
    }

    /// Show the loading placeholder for `student`.
    pub fn open(&mut self, student: StudentId) -> DetailRequest {
        self.state = PanelState::Loading {
            student: student.clone(),
        };
        DetailRequest { student }
    }

    /// Apply a fetch result. Ignored once the panel has been closed.
    pub fn resolve(
        &mut self,
        request: DetailRequest,
        result: Result<StudentDetail, String>,
    ) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = match result {
            Ok(detail) => PanelState::Ready {
                student: request.student,
                rows: subject_rows(&detail),
                trend: ChartSeries::student_trend(&detail),
            },
            Err(message) => PanelState::Failed {
                student: request.student,
                message,
            },
        };
        true
    }

    pub fn close(&mut self) {
        self.state = PanelState::Closed;
    }
}

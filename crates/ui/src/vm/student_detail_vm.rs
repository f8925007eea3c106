use nura_core::dashboard::PanelState;

use super::dashboard_vm::{BarVm, map_bars};

/// What the student detail modal shows.
#[derive(Clone, Debug, PartialEq)]
pub enum StudentDetailVm {
    Hidden,
    Loading {
        student: String,
    },
    Ready {
        student: String,
        subjects: Vec<BarVm>,
        trend: Vec<BarVm>,
    },
    Failed {
        student: String,
    },
}

impl StudentDetailVm {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, StudentDetailVm::Hidden)
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self {
            StudentDetailVm::Hidden => String::new(),
            StudentDetailVm::Loading { student }
            | StudentDetailVm::Ready { student, .. }
            | StudentDetailVm::Failed { student } => format!("Student {student}"),
        }
    }
}

#[must_use]
pub fn map_student_detail(state: &PanelState) -> StudentDetailVm {
    match state {
        PanelState::Closed => StudentDetailVm::Hidden,
        PanelState::Loading { student } => StudentDetailVm::Loading {
            student: student.to_string(),
        },
        PanelState::Ready {
            student,
            rows,
            trend,
        } => StudentDetailVm::Ready {
            student: student.to_string(),
            subjects: rows
                .iter()
                .enumerate()
                .map(|(index, row)| BarVm {
                    key: format!("detail-subject-{index}"),
                    label: row.subject.clone(),
                    value: row.score,
                    score_label: row.score_label(),
                    band_class: row.band.css_class(),
                    category: row.subject.clone(),
                })
                .collect(),
            trend: map_bars("detail-trend", trend),
        },
        PanelState::Failed { student, .. } => StudentDetailVm::Failed {
            student: student.to_string(),
        },
    }
}

mod dashboard_vm;
mod notifications;
mod quiz_vm;
mod student_detail_vm;

pub use dashboard_vm::{BarVm, DashboardVm, RosterRowVm, map_bars};
pub use notifications::{NoticeQueue, NoticeVm};
pub use quiz_vm::{QuizCommand, QuizVm, SubmitPromptVm, marker_class};
pub use student_detail_vm::{StudentDetailVm, map_student_detail};

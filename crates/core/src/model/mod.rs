mod answers;
mod dashboard;
mod ids;
mod interaction;
mod notification;
mod performance;
mod quiz;

pub use ids::{ParseIdError, QuestionId, StudentId};

pub use answers::{AnswerSheet, ChoiceKey};
pub use dashboard::{
    CounterTile, DashboardData, DashboardRole, PerformanceData, StudentStanding, SubjectStat,
    TrafficLight, UnknownRole,
};
pub use interaction::{InteractionEvent, InteractionKind};
pub use notification::{DEFAULT_NOTIFICATION_DURATION, Notification, NotificationLevel};
pub use performance::{
    CAUTION_THRESHOLD, FAVORABLE_THRESHOLD, QuizAttempt, ScoreBand, StudentDetail, TopicTrend,
};
pub use quiz::{Choice, Question, QuizConfig, QuizConfigError, QuizDefinition};

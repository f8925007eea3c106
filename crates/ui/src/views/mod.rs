mod dashboard;
mod home;
mod notices;
mod quiz;
mod scripts;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use quiz::QuizView;

mod components;
mod teacher;
mod view;

pub use view::DashboardView;

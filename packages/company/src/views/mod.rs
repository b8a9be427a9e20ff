mod home;
mod hr_dashboard;

pub use home::Home;
pub use hr_dashboard::HrDashboard;

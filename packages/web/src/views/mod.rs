mod jobs;
mod signin;

pub use jobs::JobsGrid;
pub use signin::SignIn;

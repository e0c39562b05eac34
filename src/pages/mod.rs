pub mod assessment;
pub mod auth;
pub mod career_detail;
pub mod dashboard;
pub mod home;
pub mod recommendations;

use serde::Serialize;

use crate::router::{ASSESSMENT_PATH, RECOMMENDATIONS_PATH};
use crate::session::User;

#[derive(Serialize, Clone, Debug)]
pub struct StatCard {
    pub number: u32,
    pub label: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct AssessmentRecord {
    pub id: u32,
    pub date: String,
    pub top_career: String,
    pub score: u32,
    pub results_path: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct DashboardPage {
    pub username: String,
    pub stats: Vec<StatCard>,
    pub history: Vec<AssessmentRecord>,
    pub new_assessment_path: String,
}

fn stat(number: u32, label: &str) -> StatCard {
    StatCard {
        number,
        label: label.to_string(),
    }
}

fn record(id: u32, date: &str, top_career: &str, score: u32) -> AssessmentRecord {
    AssessmentRecord {
        id,
        date: date.to_string(),
        top_career: top_career.to_string(),
        score,
        results_path: RECOMMENDATIONS_PATH.to_string(),
    }
}

/// Dashboard view model. Stats and history are mock data until real
/// assessment persistence arrives with the backend integration.
pub fn build(user: &User) -> DashboardPage {
    DashboardPage {
        username: user.username.clone(),
        stats: vec![
            stat(3, "Assessments Taken"),
            stat(8, "Skills Tracked"),
            stat(12, "Careers Explored"),
        ],
        history: vec![
            record(3, "2025-03-20", "Software Developer", 98),
            record(2, "2025-02-05", "Software Developer", 92),
            record(1, "2025-01-15", "Software Developer", 87),
        ],
        new_assessment_path: ASSESSMENT_PATH.to_string(),
    }
}

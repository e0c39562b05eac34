use serde::{Deserialize, Serialize};

use crate::router::RECOMMENDATIONS_PATH;
use crate::validation::{require, FieldError};

pub const WORK_STYLE_OPTIONS: [&str; 3] = ["Team-oriented", "Independent", "Flexible"];
pub const EDUCATION_OPTIONS: [&str; 3] = ["High School", "Undergraduate", "Postgraduate"];

#[derive(Serialize, Clone, Debug)]
pub struct Question {
    pub id: String,
    pub label: String,
    pub kind: String,
    pub placeholder: Option<String>,
    pub options: Vec<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct AssessmentPage {
    pub title: String,
    pub intro: String,
    pub questions: Vec<Question>,
}

/// Ephemeral answer set keyed by question id. Held in the webview's form
/// state, validated here on submit, never persisted.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentAnswers {
    pub skills: String,
    pub interests: String,
    pub work_style: String,
    pub education: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct AssessmentSubmitResponse {
    pub success: bool,
    pub errors: Vec<FieldError>,
    pub redirect_to: Option<String>,
}

fn text_question(id: &str, label: &str, placeholder: &str) -> Question {
    Question {
        id: id.to_string(),
        label: label.to_string(),
        kind: "text".to_string(),
        placeholder: Some(placeholder.to_string()),
        options: Vec::new(),
    }
}

fn select_question(id: &str, label: &str, options: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        label: label.to_string(),
        kind: "select".to_string(),
        placeholder: None,
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

/// Question schema served to the webview so the form renders from data.
pub fn build() -> AssessmentPage {
    AssessmentPage {
        title: "Career Assessment".to_string(),
        intro: "Answer a few questions to help our AI understand your preferences.".to_string(),
        questions: vec![
            text_question(
                "skills",
                "What are your top 3 skills?",
                "e.g., Problem Solving, Design, Communication",
            ),
            text_question(
                "interests",
                "What are your main interests?",
                "e.g., Technology, Art, Finance",
            ),
            select_question("workStyle", "Preferred work style?", &WORK_STYLE_OPTIONS),
            select_question("education", "Highest education level?", &EDUCATION_OPTIONS),
        ],
    }
}

fn check_option(field: &str, value: &str, options: &[&str], errors: &mut Vec<FieldError>) {
    if !value.trim().is_empty() && !options.contains(&value.trim()) {
        errors.push(FieldError::new(field, "Select one of the offered options"));
    }
}

/// Validate a submission. On success the response carries the
/// recommendations navigation target; the answers themselves are not
/// forwarded anywhere.
/// TODO: hand the validated answers to the recommendation engine once a real
/// scoring call exists; today the recommendations page renders the static
/// mock ranking regardless.
pub fn submit(answers: &AssessmentAnswers) -> AssessmentSubmitResponse {
    let mut errors = Vec::new();
    require("skills", &answers.skills, &mut errors);
    require("interests", &answers.interests, &mut errors);
    require("workStyle", &answers.work_style, &mut errors);
    require("education", &answers.education, &mut errors);
    check_option("workStyle", &answers.work_style, &WORK_STYLE_OPTIONS, &mut errors);
    check_option("education", &answers.education, &EDUCATION_OPTIONS, &mut errors);

    if errors.is_empty() {
        AssessmentSubmitResponse {
            success: true,
            errors,
            redirect_to: Some(RECOMMENDATIONS_PATH.to_string()),
        }
    } else {
        AssessmentSubmitResponse {
            success: false,
            errors,
            redirect_to: None,
        }
    }
}

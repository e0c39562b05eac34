use serde::Serialize;

use crate::catalog::{mock_recommendations, Recommendation};
use crate::router::ASSESSMENT_PATH;

#[derive(Serialize, Clone, Debug)]
pub struct RecommendationsPage {
    pub title: String,
    pub intro: String,
    pub recommendations: Vec<Recommendation>,
    pub retake_path: String,
}

/// Recommendations view model. Renders the static mock ranking; the
/// submitted assessment answers are intentionally not consulted here (the
/// handoff is not wired up yet, see `pages::assessment::submit`).
pub fn build() -> RecommendationsPage {
    RecommendationsPage {
        title: "Your Career Recommendations".to_string(),
        intro: "Based on your assessment, here are your top matches:".to_string(),
        recommendations: mock_recommendations(),
        retake_path: ASSESSMENT_PATH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_page() {
        let page = build();
        assert_eq!(page.recommendations.len(), 5);
        assert_eq!(page.retake_path, "/assessment");
        assert_eq!(page.recommendations[0].rank, 1);
    }
}

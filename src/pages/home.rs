use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct HomePage {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub features: Vec<Feature>,
    pub benefits: Vec<String>,
}

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Landing page content. Public, static.
pub fn build() -> HomePage {
    HomePage {
        hero_title: "Discover Your Ideal Career Path with AI".to_string(),
        hero_subtitle: "Get personalized career recommendations powered by machine learning"
            .to_string(),
        features: vec![
            feature(
                "📝",
                "Take Assessment",
                "Answer questions about your skills, interests, education, and work preferences",
            ),
            feature(
                "🤖",
                "AI Analysis",
                "Our machine learning model analyzes your profile to find the best career matches",
            ),
            feature(
                "🎯",
                "Get Recommendations",
                "Receive top 5 career suggestions with detailed explanations and skill gaps",
            ),
            feature(
                "📚",
                "Learn & Grow",
                "Access learning resources and track your progress over time",
            ),
        ],
        benefits: vec![
            "Personalized recommendations based on YOUR unique profile".to_string(),
            "ML-powered insights with confidence scoring".to_string(),
            "Detailed skill gap analysis with learning resources".to_string(),
            "Track your career journey over time".to_string(),
            "30+ careers across multiple industries".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_content() {
        let page = build();
        assert_eq!(page.features.len(), 4);
        assert_eq!(page.benefits.len(), 5);
        assert!(page.hero_title.contains("Career Path"));
    }
}

use lazy_static::lazy_static;
use serde::Serialize;

/// External learning material linked from a career detail page.
#[derive(Serialize, Clone, Debug)]
pub struct LearningResource {
    pub name: &'static str,
    pub url: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Static career profile backing the recommendations and detail pages.
#[derive(Serialize, Clone, Debug)]
pub struct CareerProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub required_skills: Vec<&'static str>,
    pub salary_range: &'static str,
    pub job_growth: &'static str,
    pub learning_resources: Vec<LearningResource>,
}

lazy_static! {
    static ref CAREER_CATALOG: Vec<CareerProfile> = vec![
        CareerProfile {
            name: "Software Developer",
            description: "Design, develop, and maintain software applications and systems.",
            required_skills: vec![
                "Programming",
                "Problem Solving",
                "Data Structures",
                "Git",
                "Debugging",
            ],
            salary_range: "$60,000 - $180,000",
            job_growth: "+22% (Much faster than average)",
            learning_resources: vec![
                LearningResource {
                    name: "CS50 - Harvard",
                    url: "https://cs50.harvard.edu",
                    kind: "Course",
                },
                LearningResource {
                    name: "FreeCodeCamp",
                    url: "https://freecodecamp.org",
                    kind: "Platform",
                },
                LearningResource {
                    name: "The Odin Project",
                    url: "https://theodinproject.com",
                    kind: "Curriculum",
                },
            ],
        },
        CareerProfile {
            name: "Data Scientist",
            description: "Analyze complex data to help organizations make better decisions.",
            required_skills: vec![
                "Python",
                "Statistics",
                "Machine Learning",
                "Data Visualization",
                "SQL",
            ],
            salary_range: "$70,000 - $200,000",
            job_growth: "+36% (Much faster than average)",
            learning_resources: vec![
                LearningResource {
                    name: "Kaggle Learn",
                    url: "https://kaggle.com/learn",
                    kind: "Platform",
                },
                LearningResource {
                    name: "DataCamp",
                    url: "https://datacamp.com",
                    kind: "Course",
                },
            ],
        },
        CareerProfile {
            name: "UX/UI Designer",
            description: "Create intuitive and engaging user experiences for digital products.",
            required_skills: vec![
                "UI/UX Design",
                "Prototyping",
                "User Research",
                "Figma",
                "Adobe XD",
            ],
            salary_range: "$55,000 - $140,000",
            job_growth: "+16% (Much faster than average)",
            learning_resources: vec![
                LearningResource {
                    name: "Google UX Design Certificate",
                    url: "https://grow.google/uxdesign",
                    kind: "Certificate",
                },
                LearningResource {
                    name: "Interaction Design Foundation",
                    url: "https://interaction-design.org",
                    kind: "Platform",
                },
            ],
        },
        CareerProfile {
            name: "Web Developer",
            description: "Build and maintain websites and web applications.",
            required_skills: vec!["HTML/CSS", "JavaScript", "React", "Web Development", "Git"],
            salary_range: "$50,000 - $130,000",
            job_growth: "+23% (Much faster than average)",
            learning_resources: vec![
                LearningResource {
                    name: "MDN Web Docs",
                    url: "https://developer.mozilla.org",
                    kind: "Documentation",
                },
                LearningResource {
                    name: "Frontend Masters",
                    url: "https://frontendmasters.com",
                    kind: "Platform",
                },
            ],
        },
        CareerProfile {
            name: "Digital Marketing Manager",
            description: "Plan and execute digital marketing campaigns across various channels.",
            required_skills: vec![
                "Marketing",
                "SEO",
                "Social Media",
                "Analytics",
                "Content Strategy",
            ],
            salary_range: "$55,000 - $120,000",
            job_growth: "+10% (Faster than average)",
            learning_resources: vec![
                LearningResource {
                    name: "Google Digital Marketing",
                    url: "https://grow.google",
                    kind: "Certificate",
                },
                LearningResource {
                    name: "HubSpot Academy",
                    url: "https://academy.hubspot.com",
                    kind: "Platform",
                },
            ],
        },
        CareerProfile {
            name: "Product Manager",
            description: "Guide product development from conception to launch.",
            required_skills: vec![
                "Product Strategy",
                "Agile",
                "User Research",
                "Data Analysis",
                "Communication",
            ],
            salary_range: "$70,000 - $180,000",
            job_growth: "+14% (Faster than average)",
            learning_resources: vec![
                LearningResource {
                    name: "Product School",
                    url: "https://productschool.com",
                    kind: "Platform",
                },
            ],
        },
    ];
}

pub fn all_careers() -> &'static [CareerProfile] {
    &CAREER_CATALOG
}

/// Look a career up by display name, case-insensitively. Callers pass the
/// already percent-decoded `:careerName` route segment.
pub fn find_career(name: &str) -> Option<&'static CareerProfile> {
    let wanted = name.trim().to_lowercase();
    CAREER_CATALOG.iter().find(|c| c.name.to_lowercase() == wanted)
}

// Recommendation data served to the recommendations page

#[derive(Serialize, Clone, Debug)]
pub struct Recommendation {
    pub career: String,
    pub description: String,
    pub skills: Vec<String>,
    pub match_score: f64,
    pub confidence_level: String,
    pub rank: u32,
    pub missing_skills: Vec<String>,
}

/// Confidence labels for a 0..1 match score, same thresholds the original
/// scoring service used.
pub fn confidence_label(score: f64) -> &'static str {
    if score >= 0.8 {
        "Very High"
    } else if score >= 0.6 {
        "High"
    } else if score >= 0.4 {
        "Moderate"
    } else {
        "Low"
    }
}

/// Ranked stand-in recommendations. Assessment answers are not consulted;
/// the assessment → recommendations handoff is not wired up yet (see
/// `pages::assessment::submit`).
pub fn mock_recommendations() -> Vec<Recommendation> {
    let ranked: [(&str, f64, &[&str]); 5] = [
        ("Software Developer", 0.92, &["Git", "SQL"]),
        ("Data Scientist", 0.85, &["Machine Learning", "Statistics"]),
        ("UX/UI Designer", 0.78, &["Figma", "User Research"]),
        ("Web Developer", 0.72, &["JavaScript", "React"]),
        ("Product Manager", 0.68, &["Agile", "Product Strategy"]),
    ];

    ranked
        .iter()
        .enumerate()
        .map(|(i, (name, score, missing))| {
            let profile = find_career(name);
            Recommendation {
                career: name.to_string(),
                description: profile.map(|p| p.description.to_string()).unwrap_or_default(),
                skills: profile
                    .map(|p| p.required_skills.iter().map(|s| s.to_string()).collect())
                    .unwrap_or_default(),
                match_score: (score * 100.0).round(),
                confidence_level: confidence_label(*score).to_string(),
                rank: (i + 1) as u32,
                missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_career_is_case_insensitive() {
        assert!(find_career("data scientist").is_some());
        assert!(find_career("Data Scientist").is_some());
        assert!(find_career("  Data Scientist  ").is_some());
        assert!(find_career("Basket Weaving Consultant").is_none());
    }

    #[test]
    fn test_confidence_labels_match_thresholds() {
        assert_eq!(confidence_label(0.92), "Very High");
        assert_eq!(confidence_label(0.8), "Very High");
        assert_eq!(confidence_label(0.78), "High");
        assert_eq!(confidence_label(0.6), "High");
        assert_eq!(confidence_label(0.45), "Moderate");
        assert_eq!(confidence_label(0.1), "Low");
    }

    #[test]
    fn test_mock_recommendations_are_ranked() {
        let recs = mock_recommendations();
        assert_eq!(recs.len(), 5);

        for (i, rec) in recs.iter().enumerate() {
            assert_eq!(rec.rank, (i + 1) as u32);
            assert!(!rec.description.is_empty(), "{} has no profile", rec.career);
            assert!(!rec.skills.is_empty());
        }

        for pair in recs.windows(2) {
            assert!(pair[0].match_score > pair[1].match_score);
        }

        assert_eq!(recs[0].career, "Software Developer");
        assert_eq!(recs[0].confidence_level, "Very High");
        assert_eq!(recs[4].confidence_level, "Moderate");
    }

    #[test]
    fn test_every_catalog_entry_is_complete() {
        for career in all_careers() {
            assert!(!career.description.is_empty());
            assert!(!career.required_skills.is_empty());
            assert!(!career.learning_resources.is_empty());
        }
    }
}

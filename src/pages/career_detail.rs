use serde::Serialize;

use crate::catalog::{find_career, CareerProfile};
use crate::router::RECOMMENDATIONS_PATH;

#[derive(Serialize, Clone, Debug)]
pub struct CareerDetailPage {
    pub career: CareerProfile,
    pub back_path: String,
}

/// Detail view for a single catalogue entry. `career_name` is the
/// percent-decoded route segment; unknown names yield None and the command
/// layer reports the error.
pub fn build(career_name: &str) -> Option<CareerDetailPage> {
    find_career(career_name).map(|career| CareerDetailPage {
        career: career.clone(),
        back_path: RECOMMENDATIONS_PATH.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_lookup() {
        let page = build("Software Developer").expect("catalogue entry exists");
        assert_eq!(page.career.name, "Software Developer");
        assert_eq!(page.back_path, "/recommendations");

        assert!(build("data scientist").is_some());
        assert!(build("Underwater Basket Weaver").is_none());
    }
}

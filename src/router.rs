use lazy_static::lazy_static;
use serde::Serialize;

use crate::session::SessionState;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ASSESSMENT_PATH: &str = "/assessment";
pub const RECOMMENDATIONS_PATH: &str = "/recommendations";

/// One entry per navigable page.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    Home,
    SignUp,
    Login,
    Dashboard,
    Assessment,
    Recommendations,
    CareerDetail { career_name: String },
}

impl Route {
    /// Protected routes require an authenticated session to render.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Assessment
                | Route::Recommendations
                | Route::CareerDetail { .. }
        )
    }
}

lazy_static! {
    /// Static path table, enumerated once at startup. `/career/:careerName`
    /// carries a parameter and is matched separately in `match_path`.
    static ref EXACT_ROUTES: Vec<(&'static str, Route)> = vec![
        (HOME_PATH, Route::Home),
        ("/signup", Route::SignUp),
        (LOGIN_PATH, Route::Login),
        (DASHBOARD_PATH, Route::Dashboard),
        (ASSESSMENT_PATH, Route::Assessment),
        (RECOMMENDATIONS_PATH, Route::Recommendations),
    ];
}

/// Map a requested path to its route. Trailing slashes are tolerated; the
/// career name segment is percent-decoded.
pub fn match_path(path: &str) -> Option<Route> {
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    if let Some((_, route)) = EXACT_ROUTES.iter().find(|(p, _)| *p == path) {
        return Some(route.clone());
    }

    if let Some(rest) = path.strip_prefix("/career/") {
        if !rest.is_empty() && !rest.contains('/') {
            let career_name = urlencoding::decode(rest)
                .map(|c| c.into_owned())
                .unwrap_or_else(|_| rest.to_string());
            return Some(Route::CareerDetail { career_name });
        }
    }

    None
}

/// Pure access decision: public routes always pass, protected routes pass
/// only with an authenticated session.
pub fn can_access(route: &Route, session: &SessionState) -> bool {
    !route.is_protected() || session.is_authenticated()
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouteResolution {
    Render { route: Route },
    Redirect { to: String },
    NotFound { redirect_to: String },
}

/// Resolve a requested path against the current session. A denied protected
/// path redirects to the login page without the protected view ever being
/// built. Unknown paths fall back to the home page.
pub fn resolve(path: &str, session: &SessionState) -> RouteResolution {
    match match_path(path) {
        Some(route) => {
            if can_access(&route, session) {
                RouteResolution::Render { route }
            } else {
                RouteResolution::Redirect {
                    to: LOGIN_PATH.to_string(),
                }
            }
        }
        None => RouteResolution::NotFound {
            redirect_to: HOME_PATH.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;

    fn authenticated() -> SessionState {
        SessionState::Authenticated {
            user: User {
                id: 1,
                username: "Demo User".to_string(),
                email: "demo@example.com".to_string(),
            },
            token: "demo-token-1".to_string(),
        }
    }

    #[test]
    fn test_protected_routes_require_authentication() {
        let protected = [
            Route::Dashboard,
            Route::Assessment,
            Route::Recommendations,
            Route::CareerDetail {
                career_name: "Data Scientist".to_string(),
            },
        ];
        for route in &protected {
            assert!(!can_access(route, &SessionState::Unauthenticated));
            assert!(can_access(route, &authenticated()));
        }

        let public = [Route::Home, Route::SignUp, Route::Login];
        for route in &public {
            assert!(can_access(route, &SessionState::Unauthenticated));
            assert!(can_access(route, &authenticated()));
        }
    }

    #[test]
    fn test_dashboard_redirects_to_login_when_unauthenticated() {
        assert_eq!(
            resolve("/dashboard", &SessionState::Unauthenticated),
            RouteResolution::Redirect {
                to: "/login".to_string()
            }
        );
        assert_eq!(
            resolve("/dashboard", &authenticated()),
            RouteResolution::Render {
                route: Route::Dashboard
            }
        );
    }

    #[test]
    fn test_career_detail_path_is_percent_decoded() {
        assert_eq!(
            match_path("/career/Data%20Scientist"),
            Some(Route::CareerDetail {
                career_name: "Data Scientist".to_string()
            })
        );
        // A protected parameterized route still redirects when logged out
        assert_eq!(
            resolve("/career/Data%20Scientist", &SessionState::Unauthenticated),
            RouteResolution::Redirect {
                to: "/login".to_string()
            }
        );
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(match_path("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(match_path("/"), Some(Route::Home));
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(
            resolve("/no-such-page", &SessionState::Unauthenticated),
            RouteResolution::NotFound {
                redirect_to: "/".to_string()
            }
        );
        assert_eq!(match_path("/career/"), None);
        assert_eq!(match_path("/career/a/b"), None);
    }
}

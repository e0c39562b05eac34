// End-to-end session flow exercised through the library API: login from the
// form payload, route gating, restart rehydration, and logout.

use careerpath_lib::pages::auth::{self, LoginPayload, LOGIN_USERNAME};
use careerpath_lib::router::{self, Route, RouteResolution};
use careerpath_lib::session::{SessionState, SessionStore};

#[test]
fn test_login_then_navigate_then_restart_then_logout() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open(dir.path()).unwrap();
    assert!(!store.current().is_authenticated());

    // Protected page before login: redirect, no dashboard render
    assert_eq!(
        router::resolve("/dashboard", store.current()),
        RouteResolution::Redirect {
            to: "/login".to_string()
        }
    );

    // Demo login with a non-empty password is accepted
    let payload = LoginPayload {
        email: "demo@example.com".to_string(),
        password: "password123".to_string(),
    };
    assert!(auth::validate_login(&payload).is_empty());

    let (user, token) = auth::issue_session(LOGIN_USERNAME, &payload.email);
    store.login(user.clone(), token.clone()).unwrap();

    assert_eq!(
        router::resolve("/dashboard", store.current()),
        RouteResolution::Render {
            route: Route::Dashboard
        }
    );

    // Restart: a fresh store over the same directory restores the session
    drop(store);
    let mut store = SessionStore::open(dir.path()).unwrap();
    match store.current() {
        SessionState::Authenticated {
            user: restored,
            token: restored_token,
        } => {
            assert_eq!(restored, &user);
            assert_eq!(restored_token, &token);
        }
        SessionState::Unauthenticated => panic!("session lost across restart"),
    }

    // Logout twice: second call is a no-op, gate closes again
    store.logout();
    store.logout();
    assert_eq!(store.load(), SessionState::Unauthenticated);
    assert_eq!(
        router::resolve("/dashboard", store.current()),
        RouteResolution::Redirect {
            to: "/login".to_string()
        }
    );
}

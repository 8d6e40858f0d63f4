use salonbook_core::models::user::{User, UserType};
use salonbook_core::session::{Session, Theme};

fn owner() -> User {
    User {
        user_id: 1,
        name: "Owner".to_string(),
        email: "owner@example.com".to_string(),
        mobile: None,
        user_type: UserType::SalonOwner,
    }
}

#[test]
fn test_login_then_logout() {
    let mut session = Session::new();
    assert!(!session.is_authenticated());

    session.set_theme(Theme::Dark);
    session.login(owner(), "token-1");
    assert!(session.is_authenticated());
    assert!(session.is_admin());
    assert_eq!(session.user_id(), Some(1));
    assert_eq!(session.token(), Some("token-1"));

    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(session.token().is_none());
    assert_eq!(session.theme(), Theme::Dark);
}

#[test]
fn test_customer_is_not_admin() {
    let mut session = Session::new();
    session.login(
        User {
            user_type: UserType::Customer,
            ..owner()
        },
        "token-2",
    );
    assert!(!session.is_admin());
}

use rms_auth::{AuthError, SessionService};
use rms_storage::{InMemoryUserStore, UserRecord};
use std::sync::Arc;

fn user_store() -> Arc<InMemoryUserStore> {
    Arc::new(InMemoryUserStore::with_users(vec![UserRecord {
        user_id: "user-admin".to_string(),
        username: "admin".to_string(),
        display_name: "Administrador".to_string(),
        password: "admin123".to_string(),
        is_admin: true,
    }]))
}

#[tokio::test]
async fn login_issues_resolvable_session() {
    let service = SessionService::new(user_store(), 3600);
    let (user, handle) = service.login("admin", "admin123").await.expect("login");
    assert!(user.is_admin);
    assert!(!handle.session_id.is_empty());

    let ctx = service.resolve(&handle.session_id).expect("resolve");
    assert_eq!(ctx.user_id, "user-admin");
    assert!(ctx.is_admin);
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let service = SessionService::new(user_store(), 3600);
    let err = service.login("admin", "wrong").await.expect_err("reject");
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn unknown_session_is_invalid() {
    let service = SessionService::new(user_store(), 3600);
    let err = service.resolve("no-such-session").expect_err("invalid");
    assert!(matches!(err, AuthError::SessionInvalid));
}

#[tokio::test]
async fn zero_ttl_session_expires_immediately() {
    let service = SessionService::new(user_store(), 0);
    let (_, handle) = service.login("admin", "admin123").await.expect("login");
    let err = service.resolve(&handle.session_id).expect_err("expired");
    assert!(matches!(err, AuthError::SessionExpired));
}

#[tokio::test]
async fn logout_removes_session() {
    let service = SessionService::new(user_store(), 3600);
    let (_, handle) = service.login("admin", "admin123").await.expect("login");
    assert!(service.logout(&handle.session_id));
    assert!(!service.logout(&handle.session_id));
    assert!(service.resolve(&handle.session_id).is_err());
}

#[tokio::test]
async fn first_login_upgrades_plaintext_seed() {
    let store = user_store();
    let service = SessionService::new(store.clone(), 3600);
    let _ = service.login("admin", "admin123").await.expect("login");

    let ctx = domain::SessionContext::default();
    let user = rms_storage::UserStore::find_by_username(store.as_ref(), &ctx, "admin")
        .await
        .expect("query")
        .expect("admin");
    assert!(user.password.starts_with("$argon2"));

    // 升级后的哈希仍可登录
    let _ = service.login("admin", "admin123").await.expect("relogin");
}

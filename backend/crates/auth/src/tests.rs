//! Behaviour tests for the auth crate
//! Use cases against the in-memory repository, then the router end to end.

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::{
        AuthConfig, ChangePasswordInput, ChangePasswordUseCase, CurrentUserUseCase, LoginInput,
        LoginUseCase, RegisterInput, RegisterUseCase, TokenService,
    };
    use crate::domain::value_object::UserId;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryUserRepository;

    fn setup() -> (Arc<InMemoryUserRepository>, Arc<AuthConfig>) {
        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(AuthConfig::with_random_secret()),
        )
    }

    fn register_input(name: &str, acc: &str, pw: &str) -> RegisterInput {
        RegisterInput {
            name: Some(name.to_string()),
            acc_name: Some(acc.to_string()),
            password: Some(pw.to_string()),
        }
    }

    fn login_input(acc: &str, pw: &str) -> LoginInput {
        LoginInput {
            acc_name: Some(acc.to_string()),
            password: Some(pw.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_issues_token_for_new_user() {
        let (repo, config) = setup();
        let output = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "alice", "secret-1"))
            .await
            .unwrap();

        assert_eq!(output.user.acc_name.as_str(), "alice");
        assert_eq!(output.user.name.as_str(), "Alice");

        let claims = TokenService::new(config).verify(&output.token).unwrap();
        assert_eq!(claims.user_id(), output.user.user_id);
    }

    #[tokio::test]
    async fn test_register_missing_or_blank_field() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo, config);

        let mut input = register_input("Alice", "alice", "secret-1");
        input.password = None;
        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Please add all fields"));

        let err = use_case
            .execute(register_input("   ", "alice", "secret-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_duplicate_account_name() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo, config);

        use_case
            .execute(register_input("Alice", "alice", "secret-1"))
            .await
            .unwrap();
        let err = use_case
            .execute(register_input("Other Alice", "alice", "secret-2"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AccountNameTaken));
    }

    #[tokio::test]
    async fn test_login_succeeds_with_correct_password() {
        let (repo, config) = setup();
        let registered = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "alice", "secret-1"))
            .await
            .unwrap();

        let output = LoginUseCase::new(repo, config)
            .execute(login_input("alice", "secret-1"))
            .await
            .unwrap();
        assert_eq!(output.user.user_id, registered.user.user_id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (repo, config) = setup();
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "alice", "secret-1"))
            .await
            .unwrap();
        let use_case = LoginUseCase::new(repo, config);

        let wrong_password = use_case
            .execute(login_input("alice", "wrong"))
            .await
            .unwrap_err();
        let unknown_account = use_case
            .execute(login_input("nobody", "secret-1"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_account, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_account.to_string());
    }

    #[test]
    fn test_unknown_account_hash_rejects_everything() {
        use crate::application::login::dummy_password;
        use crate::domain::value_object::user_password::RawPassword;

        let dummy = dummy_password().unwrap();
        assert!(dummy.as_phc_string().starts_with("$argon2"));
        let guess = RawPassword::new("secret-1".to_string()).unwrap();
        assert!(!dummy.verify(&guess, None));
        assert!(std::ptr::eq(dummy, dummy_password().unwrap()));
    }

    #[tokio::test]
    async fn test_login_missing_field() {
        let (repo, config) = setup();
        let err = LoginUseCase::new(repo, config)
            .execute(LoginInput {
                acc_name: Some("alice".to_string()),
                password: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_current_user_not_found() {
        let (repo, _) = setup();
        let err = CurrentUserUseCase::new(repo)
            .execute(UserId::new(999))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_change_password() {
        let (repo, config) = setup();
        let registered = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "alice", "secret-1"))
            .await
            .unwrap();
        let use_case = ChangePasswordUseCase::new(repo.clone(), config.clone());

        use_case
            .execute(
                registered.user.user_id,
                ChangePasswordInput {
                    current_password: Some("secret-1".to_string()),
                    new_password: Some("secret-2".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(repo.password_writes().await, 1);

        let login = LoginUseCase::new(repo, config);
        assert!(login.execute(login_input("alice", "secret-2")).await.is_ok());
        assert!(matches!(
            login.execute(login_input("alice", "secret-1")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_change_to_same_password_skips_write() {
        let (repo, config) = setup();
        let registered = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "alice", "secret-1"))
            .await
            .unwrap();

        ChangePasswordUseCase::new(repo.clone(), config)
            .execute(
                registered.user.user_id,
                ChangePasswordInput {
                    current_password: Some("secret-1".to_string()),
                    new_password: Some("secret-1".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(repo.password_writes().await, 0);
    }

    #[tokio::test]
    async fn test_clean_user_is_not_written() {
        use crate::domain::repository::UserRepository;

        let (repo, config) = setup();
        let registered = RegisterUseCase::new(repo.clone(), config)
            .execute(register_input("Alice", "alice", "secret-1"))
            .await
            .unwrap();

        let loaded = repo.find_by_id(registered.user.user_id).await.unwrap().unwrap();
        assert!(!loaded.password_changed());
        repo.update_password(&loaded).await.unwrap();
        assert_eq!(repo.password_writes().await, 0);
    }

    #[tokio::test]
    async fn test_change_password_requires_current() {
        let (repo, config) = setup();
        let registered = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "alice", "secret-1"))
            .await
            .unwrap();

        let err = ChangePasswordUseCase::new(repo.clone(), config)
            .execute(
                registered.user.user_id,
                ChangePasswordInput {
                    current_password: Some("guess".to_string()),
                    new_password: Some("secret-2".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(repo.password_writes().await, 0);
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AuthConfig;
    use crate::domain::value_object::UserId;
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::router::auth_router_generic;

    fn app(repo: InMemoryUserRepository) -> Router {
        auth_router_generic(repo, Arc::new(AuthConfig::with_random_secret()))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn authed(mut req: Request<Body>, token: &str) -> Request<Body> {
        req.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        req
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn register(app: &Router, acc: &str) -> Value {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/register",
                json!({ "name": "Alice", "accname": acc, "accpassword": "secret-1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_register_response_shape() {
        let app = app(InMemoryUserRepository::new());
        let body = register(&app, "alice").await;

        assert!(body["_id"].is_i64());
        assert_eq!(body["name"], "Alice");
        assert_eq!(body["accname"], "alice");
        assert!(body["token"].is_string());
        assert!(body.get("accpassword").is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_is_bad_request() {
        let app = app(InMemoryUserRepository::new());
        register(&app, "alice").await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/register",
                json!({ "name": "Bob", "accname": "alice", "accpassword": "x" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "User already exists");
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let app = app(InMemoryUserRepository::new());
        let response = app
            .oneshot(json_request("POST", "/register", json!({ "name": "Alice" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Please add all fields");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app(InMemoryUserRepository::new());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn test_login_and_me() {
        let app = app(InMemoryUserRepository::new());
        let registered = register(&app, "alice").await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "accname": "alice", "accpassword": "secret-1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let login = body_json(response).await;
        assert_eq!(login["_id"], registered["_id"]);

        let token = login["token"].as_str().unwrap();
        let response = app
            .oneshot(authed(
                Request::builder().uri("/me").body(Body::empty()).unwrap(),
                token,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let me = body_json(response).await;
        assert_eq!(me["userid"], registered["_id"]);
        assert_eq!(me["accname"], "alice");
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let app = app(InMemoryUserRepository::new());
        register(&app, "alice").await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "accname": "alice", "accpassword": "nope" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_me_without_token() {
        let app = app(InMemoryUserRepository::new());
        let response = app
            .oneshot(Request::builder().uri("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["message"], "Not authorized, no token");
    }

    #[tokio::test]
    async fn test_me_with_garbage_token() {
        let app = app(InMemoryUserRepository::new());
        let response = app
            .oneshot(authed(
                Request::builder().uri("/me").body(Body::empty()).unwrap(),
                "not.a.token",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["message"],
            "Not authorized, token failed"
        );
    }

    #[tokio::test]
    async fn test_me_for_deleted_user_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let app = app(repo.clone());
        let registered = register(&app, "alice").await;
        let token = registered["token"].as_str().unwrap();

        repo.remove(UserId::new(registered["_id"].as_i64().unwrap()))
            .await;

        let response = app
            .oneshot(authed(
                Request::builder().uri("/me").body(Body::empty()).unwrap(),
                token,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_change_password_route() {
        let app = app(InMemoryUserRepository::new());
        let registered = register(&app, "alice").await;
        let token = registered["token"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(authed(
                json_request(
                    "PUT",
                    "/password",
                    json!({ "currentPassword": "secret-1", "newPassword": "secret-2" }),
                ),
                token,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "accname": "alice", "accpassword": "secret-2" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

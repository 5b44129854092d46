use crate::helpers::{fixtures::TEST_PASSWORD, TestContext};
use hyper::StatusCode;

#[tokio::test]
async fn it_should_login_and_issue_a_usable_bearer_token() {
    let ctx = TestContext::new().await.unwrap();
    ctx.register_user("alice@example.com", "Alice").await.unwrap();

    let response = ctx
        .client
        .post_form(
            "/v1/login",
            &[("username", "alice@example.com"), ("password", TEST_PASSWORD)],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    let token = body["token"].as_str().expect("token present");
    assert!(!token.is_empty());
    assert_eq!(body["token_type"].as_str(), Some("Bearer"));

    // The token fetches the same identity back
    let profile = ctx.client.get_with_auth("/v1/user", token).await.unwrap();
    profile.assert_status(StatusCode::OK);
    let profile = profile.body.as_ref().unwrap();
    assert_eq!(profile["email"].as_str(), Some("alice@example.com"));
    assert_eq!(profile["name"].as_str(), Some("Alice"));
}

#[tokio::test]
async fn it_should_reject_a_malformed_login_identifier() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post_form(
            "/v1/login",
            &[("username", "not-an-email"), ("password", TEST_PASSWORD)],
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Invalid email");
}

#[tokio::test]
async fn it_should_reject_a_login_with_missing_fields_as_invalid_email() {
    let ctx = TestContext::new().await.unwrap();

    // No username at all decodes as an empty identifier
    let response = ctx
        .client
        .post_form("/v1/login", &[("password", TEST_PASSWORD)])
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Invalid email");
}

#[tokio::test]
async fn it_should_distinguish_an_unknown_user_from_a_wrong_password() {
    let ctx = TestContext::new().await.unwrap();
    ctx.register_user("bob@example.com", "Bob").await.unwrap();

    let unknown = ctx
        .client
        .post_form(
            "/v1/login",
            &[("username", "nobody@example.com"), ("password", TEST_PASSWORD)],
        )
        .await
        .unwrap();
    unknown
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error("User not found");

    let wrong = ctx
        .client
        .post_form(
            "/v1/login",
            &[("username", "bob@example.com"), ("password", "nope")],
        )
        .await
        .unwrap();
    wrong
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error("Wrong password");
}

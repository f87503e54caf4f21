use crate::helpers::{get_cookie, get_random_username, TestApp};
use auth_smoke::token::decode_claims_unverified;
use auth_smoke::utils::{ACCESS_TOKEN_COOKIE_NAME, REFRESH_TOKEN_COOKIE_NAME};

#[tokio::test]
#[ignore = "requires a running auth service (see AUTH_SERVICE_URL)"]
async fn should_set_decodable_session_cookies_on_signup() {
    let app = TestApp::new();

    let response = app
        .signup(get_random_username(), "testpassword".to_owned())
        .await;
    assert_eq!(
        response.status().as_u16(),
        201,
        "Expected 201, got {}",
        response.status().as_u16()
    );

    let access_token =
        get_cookie(&response, ACCESS_TOKEN_COOKIE_NAME).expect("Access token missing on signing up");
    let refresh_token = get_cookie(&response, REFRESH_TOKEN_COOKIE_NAME)
        .expect("Refresh token missing on signing up");

    assert!(!access_token.is_empty(), "Access token is empty");
    assert!(!refresh_token.is_empty(), "Refresh token is empty");

    assert!(
        decode_claims_unverified(&access_token).is_some(),
        "Access token not in correct format"
    );
    assert!(
        decode_claims_unverified(&refresh_token).is_some(),
        "Refresh token not in correct format"
    );
}

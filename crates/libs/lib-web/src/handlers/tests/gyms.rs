use super::*;
use crate::middleware::ROLE_DENIED_MESSAGE;
use serde_json::json;

fn gym_body(title: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "title": title,
        "description": "Some description.",
        "phone": "1199999999",
        "latitude": latitude,
        "longitude": longitude,
    })
}

#[tokio::test]
async fn test_create_gym() {
    let app = test_app();
    let token = app.create_and_authenticate_user(true).await;

    let response = app
        .send(
            Method::POST,
            "/gyms",
            Some(&token),
            Some(gym_body("JavaScript Gym", -27.2092052, -49.6401091)),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["gym"]["title"], "JavaScript Gym");
    assert_eq!(response.body["gym"]["phone"], "1199999999");
}

#[tokio::test]
async fn test_create_gym_requires_admin() {
    let app = test_app();
    let token = app.create_and_authenticate_user(false).await;

    let response = app
        .send(
            Method::POST,
            "/gyms",
            Some(&token),
            Some(gym_body("JavaScript Gym", -27.2092052, -49.6401091)),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], ROLE_DENIED_MESSAGE);
}

#[tokio::test]
async fn test_create_gym_invalid_coordinates() {
    let app = test_app();
    let token = app.create_and_authenticate_user(true).await;

    let response = app
        .send(Method::POST, "/gyms", Some(&token), Some(gym_body("JavaScript Gym", 100.0, 0.0)))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_gyms() {
    let app = test_app();
    let token = app.create_and_authenticate_user(true).await;
    for i in 1..=22 {
        app.send(
            Method::POST,
            "/gyms",
            Some(&token),
            Some(gym_body(&format!("JavaScript Gym {i}"), -27.2092052, -49.6401091)),
        )
        .await;
    }
    app.send(
        Method::POST,
        "/gyms",
        Some(&token),
        Some(gym_body("TypeScript Gym", -27.2092052, -49.6401091)),
    )
    .await;

    let first = app
        .send(Method::GET, "/gyms/search?q=JavaScript", Some(&token), None)
        .await;
    let second = app
        .send(Method::GET, "/gyms/search?q=JavaScript&page=2", Some(&token), None)
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["gyms"].as_array().unwrap().len(), 20);
    let titles: Vec<_> = second.body["gyms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["JavaScript Gym 21", "JavaScript Gym 22"]);
}

#[tokio::test]
async fn test_search_gyms_rejects_page_zero() {
    let app = test_app();
    let token = app.create_and_authenticate_user(false).await;

    let response = app
        .send(Method::GET, "/gyms/search?q=Gym&page=0", Some(&token), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nearby_gyms() {
    let app = test_app();
    let token = app.create_and_authenticate_user(true).await;
    app.send(
        Method::POST,
        "/gyms",
        Some(&token),
        Some(gym_body("Near Gym", -27.2092052, -49.6401091)),
    )
    .await;
    app.send(
        Method::POST,
        "/gyms",
        Some(&token),
        Some(gym_body("Far Gym", -26.9021413, -48.6748931)),
    )
    .await;

    let response = app
        .send(
            Method::GET,
            "/gyms/nearby?latitude=-27.2092052&longitude=-49.6401091",
            Some(&token),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let gyms = response.body["gyms"].as_array().unwrap();
    assert_eq!(gyms.len(), 1);
    assert_eq!(gyms[0]["title"], "Near Gym");
}

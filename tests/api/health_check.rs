use crate::helpers::App;

#[tokio::test]
async fn health_check_works() {
    let app = App::new().await;

    let response = app.get_health_check().await;

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "tifekt-comingsoon");
    assert!(body["time"].as_str().is_some());
}

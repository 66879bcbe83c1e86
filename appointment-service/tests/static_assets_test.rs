mod common;

use common::TestApp;
use reqwest::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn root_serves_the_client_entry_document() {
    let assets_dir = format!("target/test-assets-{}", Uuid::new_v4());
    tokio::fs::create_dir_all(&assets_dir).await.unwrap();
    tokio::fs::write(
        format!("{}/index.html", assets_dir),
        "<html><body>appointment client</body></html>",
    )
    .await
    .unwrap();
    tokio::fs::write(format!("{}/app.js", assets_dir), "console.log('hi');")
        .await
        .unwrap();

    let dir = assets_dir.clone();
    let app = TestApp::spawn_with(move |config| {
        config.assets.dir = dir;
    })
    .await;

    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("appointment client"));

    let response = client
        .get(format!("{}/app.js", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);

    // API routes still win over the asset fallback.
    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);

    app.cleanup().await;
    let _ = tokio::fs::remove_dir_all(&assets_dir).await;
}

//! Client library against a live server backed by the in-memory store.

use std::sync::Arc;

use tokio::net::TcpListener;

use toki_dict::client::{DictionaryApp, Notice, OfficialFilter, WordsClient};
use toki_dict::{api_router, AppState, MemoryWordStore, WordPayload};

async fn spawn_server() -> String {
    let router = api_router(AppState::new(Arc::new(MemoryWordStore::new())));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn visible(app: &DictionaryApp) -> Vec<String> {
    app.view.visible().map(|w| w.word.clone()).collect()
}

#[tokio::test]
async fn add_edit_delete_flow_reloads_after_each_change() {
    let base = spawn_server().await;
    let mut app = DictionaryApp::new(WordsClient::new(base));
    app.reload().await.unwrap();
    assert_eq!(app.view.total(), 0);

    app.form.word = "toki".into();
    app.form.meaning = "말하다".into();
    app.form.is_official = true;
    assert_eq!(app.submit().await, vec![Notice::Added]);
    assert_eq!(app.form.word, "");

    app.form.word = "ijo".into();
    app.form.meaning = "thing".into();
    assert_eq!(app.submit().await, vec![Notice::Added]);
    assert_eq!(visible(&app), ["ijo", "toki"]);
    assert_eq!(app.view.official_count(), 1);

    app.view.set_query("말");
    assert_eq!(visible(&app), ["toki"]);
    app.view.set_query("");
    app.view.set_filter(OfficialFilter::Unofficial);
    assert_eq!(visible(&app), ["ijo"]);
    app.view.set_filter(OfficialFilter::All);

    let ijo = app.view.find_by_word("ijo").cloned().unwrap();
    app.start_edit(&ijo);
    assert_eq!(app.editing(), Some(ijo.id));
    app.form.english = "thing".into();
    assert_eq!(app.submit().await, vec![Notice::Updated]);
    assert_eq!(app.editing(), None);
    let updated = app.view.find(ijo.id).unwrap();
    assert_eq!(updated.english.as_deref(), Some("thing"));

    let outcome = app.delete(ijo.id, |_| true).await;
    assert_eq!(outcome, Some(vec![Notice::Deleted]));
    assert_eq!(visible(&app), ["toki"]);
}

#[tokio::test]
async fn failed_requests_surface_fixed_notices() {
    let base = spawn_server().await;
    let mut app = DictionaryApp::new(WordsClient::new(base));

    app.start_edit(&toki_dict::Word {
        id: 404,
        word: "nasin".into(),
        meaning: "길".into(),
        english: None,
        is_official: false,
        example: None,
        created_at: chrono::NaiveDateTime::default(),
    });
    assert_eq!(app.submit().await, vec![Notice::SaveFailed]);
    // Edit mode and form survive a failed save.
    assert_eq!(app.editing(), Some(404));

    assert_eq!(app.delete(404, |_| true).await, Some(vec![Notice::DeleteFailed]));
}

#[tokio::test]
async fn raw_client_reports_status_errors() {
    let client = WordsClient::new(spawn_server().await);
    let err = client
        .create(&WordPayload {
            word: Some("toki".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));

    let err = client.delete(1).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn unreachable_server_is_a_load_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let mut app = DictionaryApp::new(WordsClient::new(format!("http://{}", addr)));
    assert_eq!(app.reload().await, Err(Notice::LoadFailed));
}

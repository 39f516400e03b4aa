//! End-to-end fetch against a real HTTP server standing in for the backend.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

use boardlist::components::board_list::BoardList;
use boardlist::config::ClientConfig;
use boardlist::net::api::{API_BOARDS, ApiError, BoardsApi, HttpBoardsApi};
use boardlist::net::types::Board;
use boardlist::state::boards::{BoardsAction, FETCH_BOARDS_FAILED, fetch_all_boards};
use boardlist::state::store::{Action, Store};

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base: String) -> HttpBoardsApi {
    let config = ClientConfig { api_base_url: base, ..ClientConfig::default() };
    HttpBoardsApi::new(&config).unwrap()
}

fn boards_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        API_BOARDS,
        get(move || async move { (status, [("content-type", "application/json")], body) }),
    )
}

#[tokio::test]
async fn fetches_boards_from_backend() {
    let base = spawn_backend(boards_router(StatusCode::OK, r#"[{"id":1,"name":"Internals"}]"#)).await;
    let api = client_for(base);

    let boards = api.fetch_boards().await.unwrap();
    assert_eq!(boards, vec![Board::new(1, "Internals")]);
}

#[tokio::test]
async fn mount_renders_fetched_boards() {
    let base = spawn_backend(boards_router(StatusCode::OK, r#"[{"id":1,"name":"Internals"},{"id":2,"name":"Roadmap"}]"#)).await;
    let api = client_for(base);
    let store = Store::new();
    let view = BoardList::new(store.clone());

    assert!(view.mount(&api).await);

    let actions = store.actions();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0], Action::Boards(BoardsAction::Pending));
    assert_eq!(
        actions[1],
        Action::Boards(BoardsAction::Fulfilled(vec![Board::new(1, "Internals"), Board::new(2, "Roadmap")]))
    );
    assert_eq!(view.render().rows.len(), 2);
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let base = spawn_backend(boards_router(StatusCode::INTERNAL_SERVER_ERROR, "{}")).await;
    let api = client_for(base);

    assert_eq!(api.fetch_boards().await, Err(ApiError::Status { status: 500 }));
}

#[tokio::test]
async fn server_error_rejects_with_fixed_message() {
    let base = spawn_backend(boards_router(StatusCode::INTERNAL_SERVER_ERROR, "{}")).await;
    let api = client_for(base);
    let store = Store::new();

    fetch_all_boards(&api, &store).await;

    let state = store.state().boards;
    assert_eq!(state.fetch_error.as_deref(), Some(FETCH_BOARDS_FAILED));
    assert!(!state.fetch_loading);
    assert!(state.entities.is_empty());
}

#[tokio::test]
async fn malformed_body_rejects_with_fixed_message() {
    let base = spawn_backend(boards_router(StatusCode::OK, r#"{"boards":"nope"}"#)).await;
    let api = client_for(base);
    let store = Store::new();

    fetch_all_boards(&api, &store).await;

    assert_eq!(
        store.actions().last(),
        Some(&Action::Boards(BoardsAction::Rejected(FETCH_BOARDS_FAILED.into())))
    );
}

#[tokio::test]
async fn unknown_path_is_treated_as_failure() {
    let base = spawn_backend(Router::new()).await;
    let api = client_for(base);

    assert_eq!(api.fetch_boards().await, Err(ApiError::Status { status: 404 }));
}

#[tokio::test]
async fn refused_connection_rejects_with_fixed_message() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client_for(format!("http://{addr}"));
    let store = Store::new();

    fetch_all_boards(&api, &store).await;

    let state = store.state().boards;
    assert_eq!(state.fetch_error.as_deref(), Some(FETCH_BOARDS_FAILED));
    assert!(!state.fetch_loading);
}

#[tokio::test]
async fn duplicate_board_ids_reject_with_fixed_message() {
    let body = r#"[{"id":1,"name":"Internals"},{"id":1,"name":"Roadmap"}]"#;
    let base = spawn_backend(boards_router(StatusCode::OK, body)).await;
    let api = client_for(base);
    let store = Store::new();

    fetch_all_boards(&api, &store).await;

    let state = store.state().boards;
    assert_eq!(state.fetch_error.as_deref(), Some(FETCH_BOARDS_FAILED));
    assert!(state.entities.is_empty());
}

#[tokio::test]
async fn empty_board_name_is_a_parse_error() {
    let base = spawn_backend(boards_router(StatusCode::OK, r#"[{"id":1,"name":""}]"#)).await;
    let api = client_for(base);

    assert!(matches!(api.fetch_boards().await, Err(ApiError::Parse(_))));
}

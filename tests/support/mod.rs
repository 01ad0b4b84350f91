use snake_server::interface_adapters::state::AppState;

// Serve `state` on an ephemeral loopback port inside the calling test's
// runtime and return the base URL. The server task ends with the runtime.
pub async fn spawn_server(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(snake_server::run_with_state(listener, state));

    format!("http://{addr}")
}

// Example payload from the engine documentation.
pub fn sneky_snek() -> serde_json::Value {
    serde_json::json!({
        "game": {"id": "g1"},
        "turn": 4,
        "board": {
            "height": 15,
            "width": 15,
            "food": [{"x": 1, "y": 3}],
            "snakes": [
                {"id": "s1", "name": "Sneky Snek", "health": 90, "body": [{"x": 1, "y": 3}]}
            ]
        },
        "you": {"id": "s1", "name": "Sneky Snek", "health": 90, "body": [{"x": 1, "y": 3}]}
    })
}

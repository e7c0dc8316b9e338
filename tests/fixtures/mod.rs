//! Test fixtures: a local HTTP server standing in for the room backend.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

/// Room collection used by most tests: id 1 has a string-typed price,
/// id 2 is inactive, id 3 has no isActive field at all.
pub const SAMPLE_ROOMS: &str = r#"[
    {"id": 1, "roomNumber": "1", "basePrice": "100", "isActive": true},
    {"id": 2, "roomNumber": "2", "basePrice": 50, "isActive": false},
    {"id": 3, "roomNumber": "3", "basePrice": 200}
]"#;

/// What the fixture backend answers on `GET /api/rooms`.
#[derive(Clone)]
pub enum RoomsFixture {
    Json(&'static str),
    Error { status: u16, body: &'static str },
    NoContent,
}

pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Bind and spawn the fixture backend on a dedicated port.
    ///
    /// The listener is bound before the server task is spawned, so the
    /// server is reachable as soon as this returns.
    pub async fn start(port: u16, fixture: RoomsFixture) -> Self {
        let app = Router::new().route(
            "/api/rooms",
            get(move || {
                let fixture = fixture.clone();
                async move { respond(fixture) }
            }),
        );

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .expect("Failed to bind fixture server");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Fixture server failed");
        });

        Self { port }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

fn respond(fixture: RoomsFixture) -> Response {
    match fixture {
        RoomsFixture::Json(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        RoomsFixture::Error { status, body } => (
            StatusCode::from_u16(status).expect("valid fixture status"),
            body,
        )
            .into_response(),
        RoomsFixture::NoContent => StatusCode::NO_CONTENT.into_response(),
    }
}

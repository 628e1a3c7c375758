//! HTTP surface: one endpoint per turn plus a health probe.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use my_telegrams_conversation::{
    Dispatcher, RequestKind, SessionState, TurnFailure, TurnRequest, TurnResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared, immutable application state.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

/// One turn as forwarded by the voice platform adapter.
#[derive(Debug, Deserialize)]
pub struct TurnEnvelope {
    /// Linked access token or platform user id.
    pub user: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Session attributes returned by the previous turn.
    #[serde(default)]
    pub session: JsonValue,
    pub request: RequestKind,
}

fn default_locale() -> String {
    "en-US".to_string()
}

/// Reply to a turn; `session` is stored by the platform for the next turn.
#[derive(Debug, Serialize)]
pub struct TurnReply {
    pub response: TurnResponse,
    pub session: JsonValue,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/turn", post(turn))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn turn(State(state): State<AppState>, Json(envelope): Json<TurnEnvelope>) -> Json<TurnReply> {
    let request = TurnRequest {
        locale: envelope.locale,
        request: envelope.request,
    };

    let result = match SessionState::from_attributes(envelope.session) {
        Ok(session) => {
            state
                .dispatcher
                .process_turn(&envelope.user, &request, session)
                .await
        }
        Err(report) => {
            warn!(error = %report, "Rejecting turn with malformed session");
            let failure = TurnFailure::Unclassified {
                reason: report.to_string(),
            };
            state
                .dispatcher
                .reject(&request.locale, &failure, SessionState::default())
        }
    };

    Json(TurnReply {
        response: result.response,
        session: result.session.to_attributes(),
    })
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use my_telegrams_i18n::{BuiltinPhrases, FirstSelector, Locale, PhraseTable};
    use my_telegrams_integration::{BackendConfig, HttpBackend};
    use serde_json::json;
    use tower::ServiceExt;

    /// A router whose backend address refuses connections.
    async fn app() -> Router {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let address = listener.local_addr().expect("local addr");
        drop(listener);

        let mut config = BackendConfig::new(format!("http://{address}"));
        config.timeout_secs = 1;
        let backend = HttpBackend::new(&config).expect("backend");
        let dispatcher = Dispatcher::with_default_handlers(
            Arc::new(backend),
            Arc::new(BuiltinPhrases),
            Arc::new(FirstSelector),
        );
        router(AppState {
            dispatcher: Arc::new(dispatcher),
        })
    }

    async fn post_turn(app: Router, body: JsonValue) -> JsonValue {
        let response = app
            .oneshot(
                Request::post("/turn")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let response = app()
            .await
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn session_end_needs_no_backend() {
        let reply = post_turn(
            app().await,
            json!({"user": "amzn1.account", "request": {"type": "session_ended"}}),
        )
        .await;

        assert_eq!(reply["response"]["speech"], json!(""));
        assert_eq!(reply["response"]["should_end_session"], json!(true));
        assert_eq!(reply["session"], json!({}));
    }

    #[tokio::test]
    async fn unreachable_backend_reports_service_unavailable() {
        let reply = post_turn(
            app().await,
            json!({"user": "amzn1.account", "locale": "de-DE", "request": {"type": "launch"}}),
        )
        .await;

        assert_eq!(
            reply["response"]["speech"],
            json!(PhraseTable::for_locale(Locale::German).server_error)
        );
        assert_eq!(reply["session"], json!({}));
    }

    #[tokio::test]
    async fn malformed_session_gets_generic_apology() {
        let reply = post_turn(
            app().await,
            json!({
                "user": "amzn1.account",
                "session": {"ACCOUNT": 42},
                "request": {"type": "intent", "name": "AMAZON.HelpIntent"}
            }),
        )
        .await;

        let english = PhraseTable::for_locale(Locale::English);
        assert_eq!(
            reply["response"]["speech"],
            json!(english.frontend_error(&FirstSelector))
        );
        assert_eq!(reply["response"]["should_end_session"], json!(true));
    }
}

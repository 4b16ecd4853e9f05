//! Sending the query to Kinologue and resolving the response

use tokio::task::JoinHandle;

use crate::model::{KinologueClient, RequestTicket};
use super::AppController;

impl AppController {
    /// Send the current query text on a background task.
    ///
    /// Does nothing when the query is empty. Returns the handle of the
    /// spawned request so callers can wait for it.
    pub async fn send_query(&self) -> Option<JoinHandle<()>> {
        let model = self.model.lock().await;

        let Some(client) = model.get_kinologue_client().await else {
            tracing::warn!("Send requested but no Kinologue client is configured");
            return None;
        };

        let Some(ticket) = model.begin_request().await else {
            tracing::debug!("Ignoring send of empty query");
            return None;
        };
        drop(model);

        crate::log_request_start!(ticket.generation, query_len = ticket.query.len());

        let controller = self.clone();
        Some(tokio::spawn(async move {
            controller.run_request(client, ticket).await;
        }))
    }

    async fn run_request(&self, client: KinologueClient, ticket: RequestTicket) {
        let result = client.ask(&ticket.query).await;
        crate::log_request_result!(ticket.generation, result);

        let outcome = result.map_err(|e| Self::format_error(&e));

        let model = self.model.lock().await;
        if !model.resolve_request(&ticket, outcome).await {
            tracing::debug!(generation = ticket.generation, "Discarded response for superseded request");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::NaiveDate;
    use serde_json::json;
    use tokio::sync::Mutex;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::AppConfig;
    use crate::model::{AppModel, KinologueClient, RequestOutcome};
    use super::AppController;

    fn controller_for(server: &MockServer) -> AppController {
        let config = AppConfig {
            endpoint_url: format!("{}/", server.uri()),
            request_timeout_secs: 5,
            ..AppConfig::default()
        };
        let mut model = AppModel::new(&config, NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
        model.set_kinologue_client(KinologueClient::from_config(&config).unwrap());
        AppController::new(Arc::new(Mutex::new(model)))
    }

    async fn outcome(controller: &AppController) -> RequestOutcome {
        let model = controller.model.lock().await;
        model.get_request_state().await.outcome().clone()
    }

    #[tokio::test]
    async fn success_shows_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("X"))
            .expect(1)
            .mount(&server)
            .await;

        let controller = controller_for(&server);
        controller.model.lock().await.set_query("when is Sentimental Value at ICA?".to_string()).await;

        let handle = controller.send_query().await.unwrap();
        handle.await.unwrap();

        assert_eq!(outcome(&controller).await, RequestOutcome::Success("X".to_string()));
    }

    #[tokio::test]
    async fn server_error_becomes_failure_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let controller = controller_for(&server);
        {
            let model = controller.model.lock().await;
            model.toggle_cinema("ICA").await;
        }

        controller.send_query().await.unwrap().await.unwrap();

        match outcome(&controller).await {
            RequestOutcome::Failure(message) => assert!(message.contains("500"), "{message}"),
            other => panic!("expected failure, got {other:?}"),
        }
        // The composed query survives a failed send.
        let model = controller.model.lock().await;
        assert_eq!(model.current_query().await, "at ICA");
    }

    #[tokio::test]
    async fn empty_query_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let controller = controller_for(&server);
        assert!(controller.send_query().await.is_none());
        assert_eq!(outcome(&controller).await, RequestOutcome::Idle);
    }

    #[tokio::test]
    async fn slow_earlier_response_is_discarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "user_query": "first" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("stale")
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "user_query": "second" })))
            .respond_with(ResponseTemplate::new(200).set_body_string("fresh"))
            .mount(&server)
            .await;

        let controller = controller_for(&server);
        controller.model.lock().await.set_query("first".to_string()).await;
        let first = controller.send_query().await.unwrap();
        controller.model.lock().await.set_query("second".to_string()).await;
        let second = controller.send_query().await.unwrap();

        second.await.unwrap();
        first.await.unwrap();

        assert_eq!(outcome(&controller).await, RequestOutcome::Success("fresh".to_string()));
    }
}

//! Integration tests for the guestbook messages API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::util::ServiceExt;

    use rsvp::api::public::messages::MessageRow;
    use rsvp::core::AppConfig;

    use crate::test_utils::{
        MESSAGES_SHEET, RecordingStore, StoreCall, body_to_json, body_to_string, test_app,
        test_app_with, test_config,
    };

    fn get_messages() -> Request<Body> {
        Request::builder()
            .uri("/messages")
            .body(Body::empty())
            .unwrap()
    }

    fn post_message(body: String) -> Request<Body> {
        Request::builder()
            .uri("/messages")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    /// Tests messages are read in sheet order with short rows padded
    #[tokio::test]
    async fn it_lists_messages() {
        let store = Arc::new(RecordingStore::with_rows(vec![
            vec![json!("a"), json!("b"), json!("c")],
            vec![json!("x"), json!("y")],
        ]));
        let app = test_app(store.clone());

        let response = app.oneshot(get_messages()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        let messages: Vec<MessageRow> = serde_json::from_str(&body).unwrap();
        assert_eq!(
            messages,
            vec![
                MessageRow {
                    name: "a".to_string(),
                    message: "b".to_string(),
                    date: "c".to_string(),
                },
                MessageRow {
                    name: "x".to_string(),
                    message: "y".to_string(),
                    date: "".to_string(),
                },
            ]
        );
        assert_eq!(
            store.calls(),
            vec![StoreCall::Read {
                spreadsheet_id: MESSAGES_SHEET.to_string(),
                range: "Sheet1!A2:C".to_string(),
            }]
        );
    }

    /// Tests an empty sheet is an empty list
    #[tokio::test]
    async fn it_lists_no_messages_as_an_empty_array() {
        let app = test_app(Arc::new(RecordingStore::default()));

        let response = app.oneshot(get_messages()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_to_string(response.into_body()).await, "[]");
    }

    /// Tests a failing store read is a 500 with the error text
    #[tokio::test]
    async fn it_returns_500_when_the_read_fails() {
        let store = Arc::new(RecordingStore::failing(
            "unable to retrieve data from sheet: connection refused",
        ));
        let app = test_app(store);

        let response = app.oneshot(get_messages()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(
            body["error"],
            "unable to retrieve data from sheet: connection refused"
        );
    }

    /// Tests a missing spreadsheet id is a 500 without a store call
    #[tokio::test]
    async fn it_returns_500_when_the_sheet_is_not_configured() {
        let store = Arc::new(RecordingStore::default());
        let config = AppConfig {
            spreadsheet_messages_id: None,
            ..test_config()
        };
        let app = test_app_with(config, store.clone());

        let response = app.oneshot(get_messages()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(
            body["error"],
            "environment variable SPREADSHEET_MESSAGES_ID not set"
        );
        assert!(store.calls().is_empty());
    }

    /// Tests posting a message appends exactly one row
    #[tokio::test]
    async fn it_appends_a_message() {
        let store = Arc::new(RecordingStore::default());
        let app = test_app(store.clone());

        let response = app
            .oneshot(post_message(
                json!({
                    "name": "Jane",
                    "message": "Congratulations!",
                    "date": "2025-06-01"
                })
                .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body, json!({"status": "success"}));
        assert_eq!(
            store.calls(),
            vec![StoreCall::Append {
                spreadsheet_id: MESSAGES_SHEET.to_string(),
                sheet_name: "Sheet1".to_string(),
                rows: vec![vec![
                    json!("Jane"),
                    json!("Congratulations!"),
                    json!("2025-06-01")
                ]],
            }]
        );
    }

    /// Tests empty field values are accepted as-is
    #[tokio::test]
    async fn it_accepts_empty_fields() {
        let store = Arc::new(RecordingStore::default());
        let app = test_app(store.clone());

        let response = app
            .oneshot(post_message(
                json!({"name": "", "message": "", "date": ""}).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.calls().len(), 1);
    }

    /// Tests malformed messages return 400 and never reach the store
    #[tokio::test]
    async fn it_returns_400_for_malformed_messages() {
        let bodies = [
            "{".to_string(),
            json!({"name": "Jane", "message": "hi"}).to_string(),
            json!({"name": "Jane", "message": 7, "date": "2025-06-01"}).to_string(),
            json!(["Jane", "hi", "2025-06-01"]).to_string(),
        ];
        for body in bodies {
            let store = Arc::new(RecordingStore::default());
            let app = test_app(store.clone());

            let response = app.oneshot(post_message(body.clone())).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);
            assert!(store.calls().is_empty());
        }
    }

    /// Tests a failing append is a 500 with the error text
    #[tokio::test]
    async fn it_returns_500_when_the_append_fails() {
        let store = Arc::new(RecordingStore::failing(
            "unable to append data to sheet: Values append failed: 503",
        ));
        let app = test_app(store);

        let response = app
            .oneshot(post_message(
                json!({"name": "Jane", "message": "hi", "date": "today"}).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(
            body["error"],
            "unable to append data to sheet: Values append failed: 503"
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, seed_swim_club};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::attendance_record::{Origin, RecordKey};
    use db::repositories::{AttendanceRecordRepository, RecordStore};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_json(uri: &str, body: Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn register_then_repeat_reports_already_registered() {
        let (app, db) = make_test_app().await;
        seed_swim_club(&db).await;

        let body = json!({ "token": "ABC", "member_id": 7 });

        let response = app
            .clone()
            .oneshot(post_json("/api/attendance/register", body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["outcome"], "registered");
        assert_eq!(json["message"], "Attendance registered");

        let response = app
            .oneshot(post_json("/api/attendance/register", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ALREADY_REPORTED);
        let json = json_body(response).await;
        assert_eq!(json["data"]["outcome"], "already_registered");

        let rec = AttendanceRecordRepository::new(db)
            .get(RecordKey::new(7, 42))
            .await
            .unwrap()
            .unwrap();
        assert!(rec.present);
        assert_eq!(rec.origin, Origin::QrCheckIn);
    }

    #[tokio::test]
    async fn register_rejects_bad_token_unknown_member_and_ineligible() {
        let (app, db) = make_test_app().await;
        seed_swim_club(&db).await;

        let cases = [
            (json!({ "token": "XYZ", "member_id": 7 }), StatusCode::BAD_REQUEST, "invalid_token"),
            (json!({ "token": "", "member_id": 7 }), StatusCode::BAD_REQUEST, "invalid_token"),
            (json!({ "token": "ABC", "member_id": 999 }), StatusCode::BAD_REQUEST, "unknown_member"),
            (json!({ "token": "ABC", "member_id": 11 }), StatusCode::FORBIDDEN, "not_eligible"),
        ];

        for (body, status, outcome) in cases {
            let response = app
                .clone()
                .oneshot(post_json("/api/attendance/register", body))
                .await
                .unwrap();
            assert_eq!(response.status(), status);
            let json = json_body(response).await;
            assert_eq!(json["success"], false);
            assert_eq!(json["data"]["outcome"], outcome);
        }

        let store = AttendanceRecordRepository::new(db);
        assert!(!store.exists(RecordKey::new(7, 42)).await.unwrap());
        assert!(!store.exists(RecordKey::new(11, 42)).await.unwrap());
    }

    #[tokio::test]
    async fn manual_batch_reports_summary_and_keeps_qr_origin() {
        let (app, db) = make_test_app().await;
        seed_swim_club(&db).await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/attendance/register",
                json!({ "token": "ABC", "member_id": 7 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let batch = json!([
            { "member_id": 7, "token": "ABC", "present": false },
            { "member_id": 9, "token": "ABC", "present": true },
            { "member_id": 9, "token": "NOPE", "present": true },
            { "member_id": 404, "token": "ABC", "present": true }
        ]);
        let response = app
            .oneshot(post_json("/api/attendance/manual", batch))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["applied"], 2);
        assert_eq!(json["data"]["skipped_invalid_token"], 1);
        assert_eq!(json["data"]["skipped_unknown_member"], 1);

        let store = AttendanceRecordRepository::new(db);
        let ana = store.get(RecordKey::new(7, 42)).await.unwrap().unwrap();
        assert!(!ana.present);
        assert_eq!(ana.origin, Origin::QrCheckIn);
        let bea = store.get(RecordKey::new(9, 42)).await.unwrap().unwrap();
        assert!(bea.present);
        assert_eq!(bea.origin, Origin::Manual);
    }

    #[tokio::test]
    async fn manual_batch_rejects_malformed_body() {
        let (app, _db) = make_test_app().await;

        let response = app
            .oneshot(post_json(
                "/api/attendance/manual",
                json!({ "member_id": 7 }),
            ))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}

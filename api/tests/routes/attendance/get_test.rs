#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, seed_swim_club};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::attendance_record::{NewRecord, Origin, RecordKey};
    use db::repositories::{AttendanceRecordRepository, RecordStore};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn session_roster_lists_eligible_members_in_enrollment_order() {
        let (app, db) = make_test_app().await;
        seed_swim_club(&db).await;

        AttendanceRecordRepository::new(db)
            .insert_if_absent(NewRecord {
                key: RecordKey::new(7, 42),
                present: true,
                origin: Origin::QrCheckIn,
            })
            .await
            .unwrap();

        let response = app
            .oneshot(get("/api/attendance/sessions/42"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(
            json["data"],
            json!([
                { "member_id": 7, "name": "Ana", "present": true, "origin_is_qr": true },
                { "member_id": 9, "name": "Bea", "present": false, "origin_is_qr": false }
            ])
        );
    }

    #[tokio::test]
    async fn roster_by_token_matches_session_roster() {
        let (app, db) = make_test_app().await;
        seed_swim_club(&db).await;

        let by_id = json_body(
            app.clone()
                .oneshot(get("/api/attendance/sessions/42"))
                .await
                .unwrap(),
        )
        .await;
        let by_token = json_body(
            app.oneshot(get("/api/attendance/roster?token=ABC"))
                .await
                .unwrap(),
        )
        .await;

        assert_eq!(by_id["data"], by_token["data"]);
        assert_eq!(by_token["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_session_or_token_yields_empty_roster() {
        let (app, db) = make_test_app().await;
        seed_swim_club(&db).await;

        for uri in [
            "/api/attendance/sessions/999",
            "/api/attendance/roster?token=NOPE",
            "/api/attendance/roster",
        ] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let json = json_body(response).await;
            assert_eq!(json["data"], json!([]), "{uri}");
        }
    }
}

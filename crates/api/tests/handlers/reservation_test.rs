use axum::http::StatusCode;
use chrono::Duration;
use meetingroom_core::{
    errors::BookingError,
    models::reservation::{CreateReservationRequest, ReservationResponse, RoomIdInput},
    time::TimeValue,
};
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{hm, room, serve, stored_reservation, InMemoryStore, TestContext};

fn weekly_sync_payload() -> serde_json::Value {
    json!({
        "roomId": 2,
        "meetingName": "Weekly sync",
        "date": "2024-05-01",
        "reserver": "Sato",
        "start_time": "10:00:00",
        "end_time": "11:00:00"
    })
}

#[test_log::test(tokio::test)]
async fn test_get_reservations_shapes_rows() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_get_reservations_by_date()
        .with(predicate::eq("2024-05-01".to_string()))
        .times(1)
        .returning(|_| {
            Ok(vec![stored_reservation(
                7,
                hm(10, 0).into(),
                hm(11, 0).into(),
            )])
        });
    let server = ctx.into_server();

    let response = server
        .get("/reservations/get")
        .add_query_param("date", "2024-05-01")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Vec<ReservationResponse>>();
    assert_eq!(
        body,
        vec![ReservationResponse {
            reservation_id: 7,
            room_id: 2,
            room_name: "Ocean".to_string(),
            meeting_name: "Weekly sync".to_string(),
            date: "2024-05-01".to_string(),
            reserver: "Sato".to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            time: vec!["10:00".to_string(), "10:30".to_string()],
        }]
    );
}

#[tokio::test]
async fn test_get_reservations_normalizes_each_row_independently() {
    let mut ctx = TestContext::new();
    ctx.store.expect_get_reservations_by_date().returning(|_| {
        Ok(vec![
            stored_reservation(
                1,
                TimeValue::Text("09:00:00".into()),
                TimeValue::SinceMidnight(Duration::minutes(10 * 60 + 30)),
            ),
            stored_reservation(2, hm(13, 15).into(), hm(14, 0).into()),
        ])
    });
    let server = ctx.into_server();

    let body = server
        .get("/reservations/get")
        .add_query_param("date", "2024-05-01")
        .await
        .json::<Vec<ReservationResponse>>();

    assert_eq!(body.len(), 2);
    assert_eq!(body[0].time, vec!["09:00", "09:30", "10:00"]);
    assert_eq!(body[0].end_time, "10:30");
    assert_eq!(body[1].time, vec!["13:15", "13:45"]);
}

#[tokio::test]
async fn test_get_reservations_empty_day() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_get_reservations_by_date()
        .returning(|_| Ok(vec![]));
    let server = ctx.into_server();

    let response = server
        .get("/reservations/get")
        .add_query_param("date", "2030-12-31")
        .await;

    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_get_reservations_passes_malformed_date_through() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_get_reservations_by_date()
        .with(predicate::eq("01/05/2024".to_string()))
        .times(1)
        .returning(|_| {
            Err(BookingError::Database(eyre::eyre!(
                "invalid input syntax for type date"
            )))
        });
    let server = ctx.into_server();

    let response = server
        .get("/reservations/get")
        .add_query_param("date", "01/05/2024")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_reservations_unreadable_time_fails() {
    let mut ctx = TestContext::new();
    ctx.store.expect_get_reservations_by_date().returning(|_| {
        Ok(vec![stored_reservation(
            1,
            TimeValue::Text("10am".into()),
            hm(11, 0).into(),
        )])
    });
    let server = ctx.into_server();

    let response = server
        .get("/reservations/get")
        .add_query_param("date", "2024-05-01")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("10am"));
}

#[tokio::test]
async fn test_add_reservation_forwards_payload() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_create_reservation()
        .withf(|request: &CreateReservationRequest| {
            request.room_id == Some(RoomIdInput::from(2))
                && request.meeting_name.as_deref() == Some("Weekly sync")
                && request.date.as_deref() == Some("2024-05-01")
                && request.start_time.as_deref() == Some("10:00:00")
                && request.end_time.as_deref() == Some("11:00:00")
        })
        .times(1)
        .returning(|_| Ok(41));
    let server = ctx.into_server();

    let response = server
        .post("/reservations/add")
        .json(&weekly_sync_payload())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_add_reservation_does_not_check_time_order() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_create_reservation()
        .withf(|request: &CreateReservationRequest| {
            request.start_time.as_deref() == Some("12:00:00")
        })
        .times(1)
        .returning(|_| Ok(1));
    let server = ctx.into_server();

    let mut payload = weekly_sync_payload();
    payload["start_time"] = json!("12:00:00");

    let response = server.post("/reservations/add").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_add_reservation_accepts_room_id_as_string() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_create_reservation()
        .withf(|request: &CreateReservationRequest| {
            request.room_id == Some(RoomIdInput::from("2"))
        })
        .times(1)
        .returning(|_| Ok(5));
    let server = ctx.into_server();

    let mut payload = weekly_sync_payload();
    payload["roomId"] = json!("2");

    let response = server.post("/reservations/add").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_add_reservation_forwards_missing_fields_to_store() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_create_reservation()
        .withf(|request: &CreateReservationRequest| {
            request.room_id == Some(RoomIdInput::from(2))
                && request.date.is_none()
                && request.start_time.is_none()
        })
        .times(1)
        .returning(|_| {
            Err(BookingError::Database(eyre::eyre!(
                "null value in column \"date\" violates not-null constraint"
            )))
        });
    let server = ctx.into_server();

    let response = server
        .post("/reservations/add")
        .json(&json!({ "roomId": 2, "meetingName": "Weekly sync" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_add_reservation_malformed_json_is_rejected() {
    let mut ctx = TestContext::new();
    ctx.store.expect_create_reservation().times(0);
    let server = ctx.into_server();

    let response = server
        .post("/reservations/add")
        .content_type("application/json")
        .bytes("{\"roomId\": 2,".into())
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_add_reservation_database_rejection_is_server_error() {
    let mut ctx = TestContext::new();
    ctx.store.expect_create_reservation().returning(|_| {
        Err(BookingError::Database(eyre::eyre!(
            "invalid input syntax for type time"
        )))
    });
    let server = ctx.into_server();

    let response = server
        .post("/reservations/add")
        .json(&weekly_sync_payload())
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_delete_reservation() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_soft_delete_reservation()
        .with(predicate::eq(7))
        .times(1)
        .returning(|_| Ok(1));
    let server = ctx.into_server();

    let response = server.delete("/reservations/delete/7").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_reservation_succeeds() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_soft_delete_reservation()
        .with(predicate::eq(999999))
        .times(1)
        .returning(|_| Ok(0));
    let server = ctx.into_server();

    let response = server.delete("/reservations/delete/999999").await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_id_beyond_column_range_succeeds() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_soft_delete_reservation()
        .with(predicate::eq(3_000_000_000_i64))
        .times(1)
        .returning(|_| Ok(0));
    let server = ctx.into_server();

    let response = server.delete("/reservations/delete/3000000000").await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_non_integer_id_is_rejected() {
    let mut ctx = TestContext::new();
    ctx.store.expect_soft_delete_reservation().times(0);
    let server = ctx.into_server();

    let response = server
        .delete("/reservations/delete/abc")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn test_created_then_deleted_reservation_disappears() {
    let server = serve(InMemoryStore::with_rooms(vec![room(2, "Ocean")]));

    server
        .post("/reservations/add")
        .json(&weekly_sync_payload())
        .await
        .assert_status_ok();

    let listed = server
        .get("/reservations/get")
        .add_query_param("date", "2024-05-01")
        .await
        .json::<Vec<ReservationResponse>>();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].time, vec!["10:00", "10:30"]);
    let id = listed[0].reservation_id;

    server
        .delete(&format!("/reservations/delete/{}", id))
        .await
        .assert_status_ok();

    let listed = server
        .get("/reservations/get")
        .add_query_param("date", "2024-05-01")
        .await
        .json::<Vec<ReservationResponse>>();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_overlapping_reservations_are_both_kept() {
    let server = serve(InMemoryStore::with_rooms(vec![room(2, "Ocean")]));

    for _ in 0..2 {
        server
            .post("/reservations/add")
            .json(&weekly_sync_payload())
            .await
            .assert_status_ok();
    }

    let listed = server
        .get("/reservations/get")
        .add_query_param("date", "2024-05-01")
        .await
        .json::<Vec<ReservationResponse>>();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_deleting_unknown_id_leaves_day_unchanged() {
    let server = serve(InMemoryStore::with_rooms(vec![room(2, "Ocean")]));
    server
        .post("/reservations/add")
        .json(&weekly_sync_payload())
        .await
        .assert_status_ok();

    server
        .delete("/reservations/delete/999999")
        .await
        .assert_status_ok();

    let listed = server
        .get("/reservations/get")
        .add_query_param("date", "2024-05-01")
        .await
        .json::<Vec<ReservationResponse>>();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_room_id_from_init_data_can_be_posted_back() {
    let server = serve(InMemoryStore::with_rooms(vec![room(2, "Ocean")]));

    let init = server.get("/init-data").await.json::<serde_json::Value>();
    let mut payload = weekly_sync_payload();
    payload["roomId"] = init["meetingRooms"][0]["roomId"].clone();
    assert_eq!(payload["roomId"], json!("2"));

    server
        .post("/reservations/add")
        .json(&payload)
        .await
        .assert_status_ok();

    let listed = server
        .get("/reservations/get")
        .add_query_param("date", "2024-05-01")
        .await
        .json::<Vec<ReservationResponse>>();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].room_id, 2);
}

#[tokio::test]
async fn test_incomplete_reservation_is_not_stored() {
    let server = serve(InMemoryStore::with_rooms(vec![room(2, "Ocean")]));

    let mut payload = weekly_sync_payload();
    payload.as_object_mut().unwrap().remove("end_time");

    let response = server
        .post("/reservations/add")
        .json(&payload)
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let listed = server
        .get("/reservations/get")
        .add_query_param("date", "2024-05-01")
        .await
        .json::<Vec<ReservationResponse>>();
    assert!(listed.is_empty());
}

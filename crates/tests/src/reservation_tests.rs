use api_client::storage::TOKEN_KEY;
use api_client::TokenStore;
use pretty_assertions::assert_eq;
use shared_types::{mark_cancelled, ApiErrorKind, ReservationCreate, ReservationStatus};

use crate::common::{MockBackend, ADMIN_EMAIL, SLOT_TAKEN, TAKEN_START, USER_EMAIL};

fn booking(start: &str, end: &str) -> ReservationCreate {
    ReservationCreate {
        court_id: "c-1".into(),
        date: format!("{}T00:00:00", &start[..10]),
        start_time: start.into(),
        end_time: end.into(),
        notes: Some("Bring balls".into()),
    }
}

#[tokio::test]
async fn test_create_reservation_success() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    store.set(TOKEN_KEY, &backend.token_for(USER_EMAIL));

    let created = client
        .create_reservation(&booking("2025-03-10T09:00:00", "2025-03-10T10:00:00"))
        .await
        .unwrap();

    assert_eq!(created.status, ReservationStatus::Confirmed);
    assert_eq!(created.court_id, "c-1");
    assert_eq!(created.total_price, 25.0);
    assert_eq!(created.notes_text(), Some("Bring balls"));
}

#[tokio::test]
async fn test_create_reservation_conflict_surfaces_exact_detail() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    store.set(TOKEN_KEY, &backend.token_for(USER_EMAIL));

    let err = client
        .create_reservation(&booking(TAKEN_START, "2025-03-10T15:00:00"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::BadRequest);
    assert_eq!(err.detail_or("Failed to create reservation"), SLOT_TAKEN);
}

#[tokio::test]
async fn test_my_reservations_are_scoped_and_detailed() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    store.set(TOKEN_KEY, &backend.token_for(USER_EMAIL));

    let mine = client.get_my_reservations().await.unwrap();

    let ids: Vec<&str> = mine.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r-1", "r-2", "r-3"]);
    assert_eq!(mine[0].court_name(), "Center Court");
    assert_eq!(mine[1].court_location(), "N/A");
    assert_eq!(mine[2].status, ReservationStatus::Completed);
}

#[tokio::test]
async fn test_all_reservations_embed_users_for_admin() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    store.set(TOKEN_KEY, &backend.token_for(ADMIN_EMAIL));

    let all = client.get_all_reservations().await.unwrap();

    assert_eq!(all.len(), 4);
    let booker = all[0].user.as_ref().unwrap();
    assert_eq!(booker.email, USER_EMAIL);
}

#[tokio::test]
async fn test_get_reservation_of_another_user_is_not_found() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    store.set(TOKEN_KEY, &backend.token_for(USER_EMAIL));

    let err = client.get_reservation_by_id("r-9").await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::NotFound);
    assert_eq!(err.message, "Reservation not found");
}

#[tokio::test]
async fn test_cancel_updates_only_that_reservation() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    store.set(TOKEN_KEY, &backend.token_for(USER_EMAIL));
    let mut list = client.get_my_reservations().await.unwrap();

    let resp = client.cancel_reservation("r-2").await.unwrap();
    assert_eq!(resp.message, "Reservation cancelled successfully");
    assert!(mark_cancelled(&mut list, "r-2"));

    let statuses: Vec<ReservationStatus> = list.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ]
    );
    assert_eq!(backend.reservation_status("r-2").as_deref(), Some("CANCELLED"));
    assert_eq!(backend.reservation_status("r-1").as_deref(), Some("CONFIRMED"));

    let refreshed = client.get_my_reservations().await.unwrap();
    assert_eq!(refreshed, list);
}

#[tokio::test]
async fn test_cancelled_slot_can_be_booked_again() {
    let backend = MockBackend::start().await;
    let (client, store) = backend.client();
    store.set(TOKEN_KEY, &backend.token_for(USER_EMAIL));

    client.cancel_reservation("r-1").await.unwrap();
    let rebooked = client
        .create_reservation(&booking(TAKEN_START, "2025-03-10T15:00:00"))
        .await;

    assert!(rebooked.is_ok());
}

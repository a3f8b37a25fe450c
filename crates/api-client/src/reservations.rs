use shared_types::{MessageResponse, Reservation, ReservationCreate};

use crate::client::{ApiClient, ApiResult};

/// `/api/reservations/*` endpoints. All of them require a session.
impl ApiClient {
    pub async fn create_reservation(&self, data: &ReservationCreate) -> ApiResult<Reservation> {
        tracing::info!(court_id = %data.court_id, start = %data.start_time, "creating reservation");
        self.post("/api/reservations", data).await
    }

    pub async fn get_my_reservations(&self) -> ApiResult<Vec<Reservation>> {
        self.get("/api/reservations/my-reservations").await
    }

    /// Admin only.
    pub async fn get_all_reservations(&self) -> ApiResult<Vec<Reservation>> {
        self.get("/api/reservations/all").await
    }

    pub async fn get_reservation_by_id(&self, id: &str) -> ApiResult<Reservation> {
        self.get(&format!("/api/reservations/{id}")).await
    }

    /// Soft cancel. The backend keeps the row with status `CANCELLED`.
    pub async fn cancel_reservation(&self, id: &str) -> ApiResult<MessageResponse> {
        tracing::info!(reservation_id = id, "cancelling reservation");
        self.delete(&format!("/api/reservations/{id}")).await
    }
}

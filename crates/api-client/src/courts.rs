use shared_types::{AvailableSlots, Court, CourtCreate, CourtUpdate};

use crate::client::{ApiClient, ApiResult};

/// `/api/courts/*` endpoints.
impl ApiClient {
    pub async fn get_all_courts(&self) -> ApiResult<Vec<Court>> {
        self.get("/api/courts").await
    }

    pub async fn get_court_by_id(&self, id: &str) -> ApiResult<Court> {
        self.get(&format!("/api/courts/{id}")).await
    }

    /// Free one-hour slots for `date` ("YYYY-MM-DD").
    pub async fn get_available_slots(&self, court_id: &str, date: &str) -> ApiResult<AvailableSlots> {
        self.get_with_query(
            &format!("/api/courts/{court_id}/available-slots"),
            &[("date", date)],
        )
        .await
    }

    pub async fn create_court(&self, data: &CourtCreate) -> ApiResult<Court> {
        self.post("/api/courts", data).await
    }

    pub async fn update_court(&self, id: &str, data: &CourtUpdate) -> ApiResult<Court> {
        self.put(&format!("/api/courts/{id}"), data).await
    }

    pub async fn delete_court(&self, id: &str) -> ApiResult<()> {
        self.delete_no_content(&format!("/api/courts/{id}")).await
    }
}

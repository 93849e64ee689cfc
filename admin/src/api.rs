//! Typed client for the admin REST API
//!
//! All persistence, authorization and server-side validation live behind
//! these endpoints; this client only shapes requests and unwraps the
//! standard `{success, data?, message?}` envelope.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use shared::{
    ActivateSubscriptionRequest, ApiResponse, Business, BusinessService, BusinessUser,
    CreateBusinessRequest, CreateUserRequest, CreditPaymentRequest, CurrentSubscription,
    InventoryItem, PaymentReminderRequest, ServiceItem, ServiceItemRequest, ServiceRequest,
    StockAdjustmentRequest, Store, StoreRequest, SubscriptionPlan, TransferRequest,
    UpdateBusinessRequest, UpdateUserRequest,
};

use crate::error::{AppError, AppResult};

/// HTTP client for the `/api/admin/*` and `/api/subscription/*` endpoints
#[derive(Clone)]
pub struct AdminApiClient {
    client: Client,
    base_url: String,
    session_token: Option<String>,
}

impl AdminApiClient {
    /// Create a new client against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session_token: None,
        }
    }

    /// Attach a bearer session token to every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Business
    // ========================================================================

    pub async fn fetch_business(&self, business_id: Uuid) -> AppResult<Business> {
        self.get(&format!("/api/admin/business?businessId={}", business_id))
            .await
    }

    pub async fn create_business(&self, request: &CreateBusinessRequest) -> AppResult<Business> {
        self.post("/api/admin/business/create", request).await
    }

    pub async fn update_business(&self, request: &UpdateBusinessRequest) -> AppResult<Business> {
        self.put("/api/admin/business", request).await
    }

    /// Upload a business logo as multipart form data
    ///
    /// Image type and the 5 MB limit are validated by the form before this
    /// is called; the server enforces both again.
    pub async fn upload_logo(
        &self,
        business_id: Uuid,
        file_name: impl Into<String>,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<String> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.into())
            .mime_str(content_type)
            .map_err(AppError::Http)?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("businessId", business_id.to_string());

        let response = self
            .authorize(
                self.client
                    .post(format!("{}/api/admin/business/upload-logo", self.base_url)),
            )
            .multipart(form)
            .send()
            .await
            .map_err(AppError::Http)?;

        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct LogoResponse {
            logo_url: String,
        }
        let data: LogoResponse = Self::unwrap_envelope(response).await?;
        Ok(data.logo_url)
    }

    // ========================================================================
    // Services
    // ========================================================================

    pub async fn list_services(&self, business_id: Uuid) -> AppResult<Vec<BusinessService>> {
        self.get(&format!("/api/admin/services?businessId={}", business_id))
            .await
    }

    pub async fn create_service(&self, request: &ServiceRequest) -> AppResult<BusinessService> {
        self.post("/api/admin/services", request).await
    }

    pub async fn update_service(
        &self,
        service_id: Uuid,
        request: &ServiceRequest,
    ) -> AppResult<BusinessService> {
        self.put(&format!("/api/admin/services/{}", service_id), request)
            .await
    }

    pub async fn delete_service(&self, service_id: Uuid) -> AppResult<()> {
        self.delete(&format!("/api/admin/services/{}", service_id))
            .await
    }

    pub async fn create_service_item(
        &self,
        service_id: Uuid,
        request: &ServiceItemRequest,
    ) -> AppResult<ServiceItem> {
        self.post(
            &format!("/api/admin/services/{}/items", service_id),
            request,
        )
        .await
    }

    pub async fn update_service_item(
        &self,
        service_id: Uuid,
        item_id: Uuid,
        request: &ServiceItemRequest,
    ) -> AppResult<ServiceItem> {
        self.put(
            &format!("/api/admin/services/{}/items/{}", service_id, item_id),
            request,
        )
        .await
    }

    pub async fn delete_service_item(&self, service_id: Uuid, item_id: Uuid) -> AppResult<()> {
        self.delete(&format!(
            "/api/admin/services/{}/items/{}",
            service_id, item_id
        ))
        .await
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn list_users(&self, business_id: Uuid) -> AppResult<Vec<BusinessUser>> {
        self.get(&format!("/api/admin/users?businessId={}", business_id))
            .await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> AppResult<BusinessUser> {
        self.post("/api/admin/users", request).await
    }

    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: &UpdateUserRequest,
    ) -> AppResult<BusinessUser> {
        self.put(&format!("/api/admin/users/{}", user_id), request)
            .await
    }

    pub async fn delete_user(&self, user_id: Uuid, business_id: Uuid) -> AppResult<()> {
        self.delete(&format!(
            "/api/admin/users/{}?businessId={}",
            user_id, business_id
        ))
        .await
    }

    // ========================================================================
    // Stores & Inventory
    // ========================================================================

    pub async fn list_stores(&self, business_id: Uuid) -> AppResult<Vec<Store>> {
        self.get(&format!("/api/admin/stores?businessId={}", business_id))
            .await
    }

    pub async fn create_store(&self, request: &StoreRequest) -> AppResult<Store> {
        self.post("/api/admin/stores", request).await
    }

    pub async fn update_store(&self, store_id: Uuid, request: &StoreRequest) -> AppResult<Store> {
        self.put(&format!("/api/admin/stores/{}", store_id), request)
            .await
    }

    pub async fn delete_store(&self, store_id: Uuid) -> AppResult<()> {
        self.delete(&format!("/api/admin/stores/{}", store_id)).await
    }

    /// Current inventory held at one store location
    pub async fn inventory_by_location(
        &self,
        business_id: Uuid,
        store_id: Uuid,
    ) -> AppResult<Vec<InventoryItem>> {
        self.get(&format!(
            "/api/admin/inventory/by-location?businessId={}&storeId={}",
            business_id, store_id
        ))
        .await
    }

    pub async fn submit_transfer(&self, request: &TransferRequest) -> AppResult<()> {
        self.post_unit("/api/admin/inventory/transfer", request)
            .await
    }

    pub async fn submit_stock_adjustment(
        &self,
        request: &StockAdjustmentRequest,
    ) -> AppResult<()> {
        self.post_unit("/api/admin/stock-adjustments", request).await
    }

    // ========================================================================
    // Credit
    // ========================================================================

    pub async fn record_credit_payment(&self, request: &CreditPaymentRequest) -> AppResult<()> {
        self.post_unit("/api/admin/credit/payments", request).await
    }

    pub async fn send_payment_reminders(
        &self,
        request: &PaymentReminderRequest,
    ) -> AppResult<()> {
        self.post_unit("/api/admin/credit/reminders", request).await
    }

    // ========================================================================
    // Subscription
    // ========================================================================

    pub async fn list_subscription_plans(&self) -> AppResult<Vec<SubscriptionPlan>> {
        self.get("/api/subscription/plans").await
    }

    pub async fn current_subscription(
        &self,
        business_id: Uuid,
    ) -> AppResult<CurrentSubscription> {
        self.get(&format!(
            "/api/admin/subscription/current?businessId={}",
            business_id
        ))
        .await
    }

    pub async fn activate_subscription(
        &self,
        request: &ActivateSubscriptionRequest,
    ) -> AppResult<()> {
        self.post_unit("/api/admin/subscription/activate", request)
            .await
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self
            .authorize(self.client.get(format!("{}{}", self.base_url, path)))
            .send()
            .await
            .map_err(AppError::Http)?;
        Self::unwrap_envelope(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> AppResult<T> {
        let response = self
            .authorize(self.client.post(format!("{}{}", self.base_url, path)))
            .json(body)
            .send()
            .await
            .map_err(AppError::Http)?;
        Self::unwrap_envelope(response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> AppResult<T> {
        let response = self
            .authorize(self.client.put(format!("{}{}", self.base_url, path)))
            .json(body)
            .send()
            .await
            .map_err(AppError::Http)?;
        Self::unwrap_envelope(response).await
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let response = self
            .authorize(self.client.delete(format!("{}{}", self.base_url, path)))
            .send()
            .await
            .map_err(AppError::Http)?;
        Self::unwrap_status(response).await
    }

    /// POST where the caller only needs the declared success flag
    async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> AppResult<()> {
        let response = self
            .authorize(self.client.post(format!("{}{}", self.base_url, path)))
            .json(body)
            .send()
            .await
            .map_err(AppError::Http)?;
        Self::unwrap_status(response).await
    }

    /// Unwrap the `{success, data, message}` envelope into its data
    async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        let body = response.text().await.map_err(AppError::Http)?;

        let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|_| {
            AppError::UnexpectedResponse(format!("{}: {}", status, truncate(&body, 200)))
        })?;
        match envelope.into_result() {
            Ok(Some(data)) => Ok(data),
            Ok(None) => Err(AppError::UnexpectedResponse(
                "Success response missing data".to_string(),
            )),
            Err(message) => Err(AppError::Api(message)),
        }
    }

    /// Like [`Self::unwrap_envelope`], for endpoints whose data is unused
    async fn unwrap_status(response: reqwest::Response) -> AppResult<()> {
        let status = response.status();
        let body = response.text().await.map_err(AppError::Http)?;

        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(&body).map_err(|_| {
                AppError::UnexpectedResponse(format!("{}: {}", status, truncate(&body, 200)))
            })?;
        match envelope.into_result() {
            Ok(_) => Ok(()),
            Err(message) => Err(AppError::Api(message)),
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

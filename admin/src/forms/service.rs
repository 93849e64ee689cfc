//! Service and service item forms

use rust_decimal::Decimal;
use shared::{
    BusinessService, DurationUnit, ItemStatus, Language, ServiceItem, ServiceItemRequest,
    ServiceRequest, ServiceType,
};
use uuid::Uuid;

use crate::api::AdminApiClient;
use crate::error::{AppError, AppResult};
use crate::forms::business::{first_error, optional};
use crate::forms::{report_failure, FieldError, FieldErrors};
use crate::i18n::COMMON;
use crate::notifications::NotificationCenter;

/// Service create/edit dialog state
#[derive(Debug, Clone)]
pub struct ServiceForm {
    business_id: Uuid,
    service_id: Option<Uuid>,
    service_type: ServiceType,
    name: String,
    name_swahili: String,
    description: String,
    errors: FieldErrors,
    is_submitting: bool,
}

impl ServiceForm {
    pub fn new(business_id: Uuid) -> Self {
        Self {
            business_id,
            service_id: None,
            service_type: ServiceType::Rental,
            name: String::new(),
            name_swahili: String::new(),
            description: String::new(),
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    /// Initialize from the loaded entity (edit flow)
    pub fn load(service: &BusinessService) -> Self {
        Self {
            business_id: service.business_id,
            service_id: Some(service.id),
            service_type: service.service_type,
            name: service.name.clone(),
            name_swahili: service.name_swahili.clone().unwrap_or_default(),
            description: service.description.clone().unwrap_or_default(),
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_service_type(&mut self, service_type: ServiceType) {
        self.service_type = service_type;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_name_swahili(&mut self, value: impl Into<String>) {
        self.name_swahili = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(
                "name".to_string(),
                FieldError::new("Service name is required", "Jina la huduma linahitajika"),
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn build_request(&self) -> ServiceRequest {
        ServiceRequest {
            business_id: self.business_id,
            service_type: self.service_type,
            name: self.name.trim().to_string(),
            name_swahili: optional(&self.name_swahili),
            description: optional(&self.description),
        }
    }

    /// Guard + validate + build; no HTTP call happens on failure
    pub fn begin_submission(&mut self) -> AppResult<ServiceRequest> {
        if self.is_submitting {
            return Err(AppError::SubmissionInFlight);
        }
        if !self.validate() {
            return Err(first_error(&self.errors));
        }
        self.is_submitting = true;
        Ok(self.build_request())
    }

    pub fn record_failure(&mut self) {
        self.is_submitting = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Create or update the service
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_saved: F,
    ) -> AppResult<BusinessService>
    where
        F: FnOnce(&BusinessService),
    {
        let request = self.begin_submission()?;
        let result = match self.service_id {
            Some(service_id) => api.update_service(service_id, &request).await,
            None => api.create_service(&request).await,
        };

        match result {
            Ok(service) => {
                self.is_submitting = false;
                notifications.show_success(&service.name, COMMON.saved.get(language));
                on_saved(&service);
                Ok(service)
            }
            Err(err) => {
                self.record_failure();
                report_failure(notifications, "Service", &err, language);
                Err(err)
            }
        }
    }
}

/// Service item create/edit dialog state
#[derive(Debug, Clone)]
pub struct ServiceItemForm {
    service_id: Uuid,
    item_id: Option<Uuid>,
    item_number: String,
    name: String,
    price: Decimal,
    duration_value: i64,
    duration_unit: DurationUnit,
    status: ItemStatus,
    errors: FieldErrors,
    is_submitting: bool,
}

impl ServiceItemForm {
    pub fn new(service_id: Uuid) -> Self {
        Self {
            service_id,
            item_id: None,
            item_number: String::new(),
            name: String::new(),
            price: Decimal::ZERO,
            duration_value: 1,
            duration_unit: DurationUnit::default(),
            status: ItemStatus::default(),
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    /// Initialize from the loaded entity (edit flow)
    pub fn load(item: &ServiceItem) -> Self {
        Self {
            service_id: item.service_id,
            item_id: Some(item.id),
            item_number: item.item_number.clone(),
            name: item.name.clone(),
            price: item.price,
            duration_value: item.duration_value,
            duration_unit: item.duration_unit,
            status: item.status,
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_item_number(&mut self, value: impl Into<String>) {
        self.item_number = value.into();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    pub fn set_duration_value(&mut self, value: i64) {
        self.duration_value = value;
    }

    pub fn set_duration_unit(&mut self, unit: DurationUnit) {
        self.duration_unit = unit;
    }

    pub fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        if self.item_number.trim().is_empty() {
            errors.insert(
                "itemNumber".to_string(),
                FieldError::new("Item number is required", "Namba ya kifaa inahitajika"),
            );
        }
        if self.name.trim().is_empty() {
            errors.insert(
                "name".to_string(),
                FieldError::new("Item name is required", "Jina la kifaa linahitajika"),
            );
        }
        if self.price < Decimal::ZERO {
            errors.insert(
                "price".to_string(),
                FieldError::new("Price cannot be negative", "Bei haiwezi kuwa hasi"),
            );
        }
        if self.duration_value <= 0 {
            errors.insert(
                "durationValue".to_string(),
                FieldError::new("Duration must be positive", "Muda lazima uwe chanya"),
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn build_request(&self) -> ServiceItemRequest {
        ServiceItemRequest {
            item_number: self.item_number.trim().to_string(),
            name: self.name.trim().to_string(),
            price: self.price,
            duration_value: self.duration_value,
            duration_unit: self.duration_unit,
            status: self.status,
        }
    }

    /// Guard + validate + build; no HTTP call happens on failure
    pub fn begin_submission(&mut self) -> AppResult<ServiceItemRequest> {
        if self.is_submitting {
            return Err(AppError::SubmissionInFlight);
        }
        if !self.validate() {
            return Err(first_error(&self.errors));
        }
        self.is_submitting = true;
        Ok(self.build_request())
    }

    pub fn record_failure(&mut self) {
        self.is_submitting = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Create or update the item
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_saved: F,
    ) -> AppResult<ServiceItem>
    where
        F: FnOnce(&ServiceItem),
    {
        let request = self.begin_submission()?;
        let result = match self.item_id {
            Some(item_id) => {
                api.update_service_item(self.service_id, item_id, &request)
                    .await
            }
            None => api.create_service_item(self.service_id, &request).await,
        };

        match result {
            Ok(item) => {
                self.is_submitting = false;
                notifications.show_success(&item.name, COMMON.saved.get(language));
                on_saved(&item);
                Ok(item)
            }
            Err(err) => {
                self.record_failure();
                report_failure(notifications, "Service item", &err, language);
                Err(err)
            }
        }
    }
}

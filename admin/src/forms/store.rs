//! Store create/edit/delete form

use shared::{validate_email, validate_phone, Language, Store, StoreRequest, StoreType};
use uuid::Uuid;

use crate::api::AdminApiClient;
use crate::error::{AppError, AppResult};
use crate::forms::business::{first_error, optional};
use crate::forms::{check, report_failure, FieldError, FieldErrors};
use crate::i18n::{COMMON, STORES};
use crate::notifications::NotificationCenter;

/// Store dialog state; create when `store_id` is unset, edit otherwise
#[derive(Debug, Clone)]
pub struct StoreForm {
    business_id: Uuid,
    store_id: Option<Uuid>,
    name: String,
    name_swahili: String,
    store_type: StoreType,
    address: String,
    city: String,
    region: String,
    phone: String,
    email: String,
    manager_id: Option<Uuid>,
    errors: FieldErrors,
    is_submitting: bool,
    delete_confirmed: bool,
}

impl StoreForm {
    /// Blank form for creating a new store
    pub fn new(business_id: Uuid) -> Self {
        Self {
            business_id,
            store_id: None,
            name: String::new(),
            name_swahili: String::new(),
            store_type: StoreType::default(),
            address: String::new(),
            city: String::new(),
            region: String::new(),
            phone: String::new(),
            email: String::new(),
            manager_id: None,
            errors: FieldErrors::new(),
            is_submitting: false,
            delete_confirmed: false,
        }
    }

    /// Initialize from the loaded entity (edit flow)
    pub fn load(store: &Store) -> Self {
        Self {
            business_id: store.business_id,
            store_id: Some(store.id),
            name: store.name.clone(),
            name_swahili: store.name_swahili.clone().unwrap_or_default(),
            store_type: store.store_type,
            address: store.address.clone().unwrap_or_default(),
            city: store.city.clone().unwrap_or_default(),
            region: store.region.clone().unwrap_or_default(),
            phone: store.phone.clone().unwrap_or_default(),
            email: store.email.clone().unwrap_or_default(),
            manager_id: store.manager_id,
            errors: FieldErrors::new(),
            is_submitting: false,
            delete_confirmed: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.store_id.is_some()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_name_swahili(&mut self, value: impl Into<String>) {
        self.name_swahili = value.into();
    }

    pub fn set_store_type(&mut self, store_type: StoreType) {
        self.store_type = store_type;
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address = value.into();
    }

    pub fn set_city(&mut self, value: impl Into<String>) {
        self.city = value.into();
    }

    pub fn set_region(&mut self, value: impl Into<String>) {
        self.region = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_manager(&mut self, manager_id: Option<Uuid>) {
        self.manager_id = manager_id;
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(
                "name".to_string(),
                FieldError::new("Store name is required", "Jina la duka linahitajika"),
            );
        }
        if !self.phone.trim().is_empty() {
            check(
                &mut errors,
                "phone",
                validate_phone(self.phone.trim()),
                "Namba ya simu si sahihi",
            );
        }
        if !self.email.trim().is_empty() {
            check(
                &mut errors,
                "email",
                validate_email(self.email.trim()),
                "Barua pepe si sahihi",
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Build the request payload shared by create and update
    pub fn build_request(&self) -> StoreRequest {
        StoreRequest {
            business_id: self.business_id,
            name: self.name.trim().to_string(),
            name_swahili: optional(&self.name_swahili),
            store_type: self.store_type,
            address: optional(&self.address),
            city: optional(&self.city),
            region: optional(&self.region),
            phone: optional(&self.phone),
            email: optional(&self.email),
            manager_id: self.manager_id,
        }
    }

    /// Guard + validate + build; no HTTP call happens on failure
    pub fn begin_submission(&mut self) -> AppResult<StoreRequest> {
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

    /// Create or update the store, then hand the saved entity to the caller
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_saved: F,
    ) -> AppResult<Store>
    where
        F: FnOnce(&Store),
    {
        let request = self.begin_submission()?;
        let result = match self.store_id {
            Some(store_id) => api.update_store(store_id, &request).await,
            None => api.create_store(&request).await,
        };

        match result {
            Ok(store) => {
                self.handle_success(&store, notifications, language, on_saved);
                Ok(store)
            }
            Err(err) => {
                self.record_failure();
                report_failure(notifications, "Store", &err, language);
                Err(err)
            }
        }
    }

    /// Record a successful save: toast first, then the refresh callback
    pub fn handle_success<F>(
        &mut self,
        store: &Store,
        notifications: &NotificationCenter,
        language: Language,
        on_saved: F,
    ) where
        F: FnOnce(&Store),
    {
        self.is_submitting = false;
        let message = if self.is_edit() {
            STORES.updated
        } else {
            STORES.created
        };
        notifications.show_success(&store.name, message.get(language));
        on_saved(store);
    }

    /// First stage of the two-step delete confirmation
    pub fn confirm_delete(&mut self) {
        self.delete_confirmed = true;
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirmed = false;
    }

    pub fn is_delete_confirmed(&self) -> bool {
        self.delete_confirmed
    }

    /// Delete the store; requires [`StoreForm::confirm_delete`] first
    pub async fn delete<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_deleted: F,
    ) -> AppResult<()>
    where
        F: FnOnce(),
    {
        let store_id = self.store_id.ok_or_else(|| {
            AppError::validation("storeId", "Store is not saved yet", "Duka halijahifadhiwa")
        })?;
        if !self.delete_confirmed {
            return Err(AppError::validation(
                "confirm",
                "Confirm the deletion first",
                "Thibitisha ufutaji kwanza",
            ));
        }
        if self.is_submitting {
            return Err(AppError::SubmissionInFlight);
        }

        self.is_submitting = true;
        let result = api.delete_store(store_id).await;
        self.is_submitting = false;

        match result {
            Ok(()) => {
                notifications.show_success(&self.name, COMMON.deleted.get(language));
                on_deleted();
                Ok(())
            }
            Err(err) => {
                self.delete_confirmed = false;
                report_failure(notifications, "Store", &err, language);
                Err(err)
            }
        }
    }
}

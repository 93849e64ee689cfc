//! Business create wizard and settings form

use shared::{
    derive_slug, validate_email, validate_logo_upload, validate_phone, validate_slug, Business,
    BusinessType, CreateBusinessRequest, Language, UpdateBusinessRequest,
};
use uuid::Uuid;

use crate::api::AdminApiClient;
use crate::error::{is_slug_conflict, AppError, AppResult};
use crate::forms::{check, report_failure, FieldError, FieldErrors};
use crate::i18n::COMMON;
use crate::notifications::NotificationCenter;

/// Steps of the create-business wizard
///
/// A tenant must select a subscription plan before entering details, and
/// the dialog cannot be dismissed until creation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    PlanSelection,
    Details,
}

/// Two-step create-business wizard
#[derive(Debug, Clone)]
pub struct CreateBusinessForm {
    step: WizardStep,
    plan_id: Option<Uuid>,
    name: String,
    slug: String,
    /// Once the operator edits the slug manually, auto-derivation stops
    slug_edited: bool,
    business_type: BusinessType,
    email: String,
    phone: String,
    address: String,
    city: String,
    website: String,
    errors: FieldErrors,
    is_submitting: bool,
    completed: bool,
}

impl CreateBusinessForm {
    pub fn new() -> Self {
        Self {
            step: WizardStep::PlanSelection,
            plan_id: None,
            name: String::new(),
            slug: String::new(),
            slug_edited: false,
            business_type: BusinessType::Retail,
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            website: String::new(),
            errors: FieldErrors::new(),
            is_submitting: false,
            completed: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Backdrop dismissal is blocked until creation succeeds
    pub fn can_dismiss(&self) -> bool {
        self.completed
    }

    pub fn select_plan(&mut self, plan_id: Uuid) {
        self.plan_id = Some(plan_id);
        self.step = WizardStep::Details;
    }

    pub fn back_to_plan_selection(&mut self) {
        self.step = WizardStep::PlanSelection;
    }

    /// Set the business name, auto-deriving the slug unless it was edited
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if !self.slug_edited {
            self.slug = derive_slug(&self.name);
        }
    }

    /// Manually edit the slug; auto-derivation stops for this session
    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug_edited = true;
        self.slug = slug.into();
    }

    pub fn set_business_type(&mut self, business_type: BusinessType) {
        self.business_type = business_type;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_website(&mut self, website: impl Into<String>) {
        self.website = website.into();
    }

    /// Run field validation; returns true when submission may proceed
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();

        if self.plan_id.is_none() {
            errors.insert(
                "planId".to_string(),
                FieldError::new("Select a subscription plan", "Chagua kifurushi"),
            );
        }
        if self.name.trim().is_empty() {
            errors.insert(
                "name".to_string(),
                FieldError::new("Business name is required", "Jina la biashara linahitajika"),
            );
        }
        check(
            &mut errors,
            "slug",
            validate_slug(&self.slug),
            "Kitambulisho cha anwani si sahihi",
        );
        if !self.email.trim().is_empty() {
            check(
                &mut errors,
                "email",
                validate_email(self.email.trim()),
                "Barua pepe si sahihi",
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

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Build the create payload from validated state
    pub fn build_request(&self) -> AppResult<CreateBusinessRequest> {
        let plan_id = self.plan_id.ok_or_else(|| {
            AppError::validation("planId", "Select a subscription plan", "Chagua kifurushi")
        })?;
        Ok(CreateBusinessRequest {
            name: self.name.trim().to_string(),
            business_type: self.business_type,
            slug: self.slug.clone(),
            email: optional(&self.email),
            phone: optional(&self.phone),
            address: optional(&self.address),
            city: optional(&self.city),
            website: optional(&self.website),
            plan_id: Some(plan_id),
        })
    }

    /// Guard + validate + build; no HTTP call happens on failure
    pub fn begin_submission(&mut self) -> AppResult<CreateBusinessRequest> {
        if self.is_submitting {
            return Err(AppError::SubmissionInFlight);
        }
        if !self.validate() {
            return Err(first_error(&self.errors));
        }
        let request = self.build_request()?;
        self.is_submitting = true;
        Ok(request)
    }

    /// Record a failed creation, re-attaching slug collisions inline
    pub fn record_failure(&mut self, err: &AppError) {
        self.is_submitting = false;
        if let AppError::Api(message) = err {
            if is_slug_conflict(message) {
                self.errors.insert(
                    "slug".to_string(),
                    FieldError::new(
                        "This slug is already taken",
                        "Kitambulisho hiki kimeshachukuliwa",
                    ),
                );
            }
        }
    }

    /// Record a successful creation and close the wizard
    pub fn record_success(&mut self) {
        self.is_submitting = false;
        self.completed = true;
    }

    /// Create the business
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_created: F,
    ) -> AppResult<Business>
    where
        F: FnOnce(&Business),
    {
        let request = self.begin_submission()?;
        match api.create_business(&request).await {
            Ok(business) => {
                self.record_success();
                notifications.show_success(&business.name, COMMON.saved.get(language));
                on_created(&business);
                Ok(business)
            }
            Err(err) => {
                self.record_failure(&err);
                report_failure(notifications, "Business", &err, language);
                Err(err)
            }
        }
    }
}

impl Default for CreateBusinessForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings form for an existing business
#[derive(Debug, Clone)]
pub struct BusinessSettingsForm {
    business_id: Uuid,
    name: String,
    business_type: BusinessType,
    email: String,
    phone: String,
    address: String,
    city: String,
    website: String,
    preferred_language: Language,
    is_active: bool,
    errors: FieldErrors,
    is_submitting: bool,
}

impl BusinessSettingsForm {
    /// Initialize from the loaded entity (edit flow)
    pub fn load(business: &Business) -> Self {
        Self {
            business_id: business.id,
            name: business.name.clone(),
            business_type: business.business_type,
            email: business.email.clone().unwrap_or_default(),
            phone: business.phone.clone().unwrap_or_default(),
            address: business.address.clone().unwrap_or_default(),
            city: business.city.clone().unwrap_or_default(),
            website: business.website.clone().unwrap_or_default(),
            preferred_language: business.preferred_language,
            is_active: business.is_active,
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_business_type(&mut self, business_type: BusinessType) {
        self.business_type = business_type;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_website(&mut self, website: impl Into<String>) {
        self.website = website.into();
    }

    pub fn set_preferred_language(&mut self, language: Language) {
        self.preferred_language = language;
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(
                "name".to_string(),
                FieldError::new("Business name is required", "Jina la biashara linahitajika"),
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
        if !self.phone.trim().is_empty() {
            check(
                &mut errors,
                "phone",
                validate_phone(self.phone.trim()),
                "Namba ya simu si sahihi",
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn build_request(&self) -> UpdateBusinessRequest {
        UpdateBusinessRequest {
            business_id: self.business_id,
            name: self.name.trim().to_string(),
            business_type: self.business_type,
            email: optional(&self.email),
            phone: optional(&self.phone),
            address: optional(&self.address),
            city: optional(&self.city),
            website: optional(&self.website),
            preferred_language: self.preferred_language,
            is_active: self.is_active,
        }
    }

    /// Save the settings
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_updated: F,
    ) -> AppResult<Business>
    where
        F: FnOnce(&Business),
    {
        if self.is_submitting {
            return Err(AppError::SubmissionInFlight);
        }
        if !self.validate() {
            return Err(first_error(&self.errors));
        }
        let request = self.build_request();

        self.is_submitting = true;
        let result = api.update_business(&request).await;
        self.is_submitting = false;

        match result {
            Ok(business) => {
                notifications.show_success(&business.name, COMMON.saved.get(language));
                on_updated(&business);
                Ok(business)
            }
            Err(err) => {
                report_failure(notifications, "Business", &err, language);
                Err(err)
            }
        }
    }

    /// Validate and upload a business logo
    ///
    /// Image type and the 5 MB cap are checked before any bytes are sent.
    pub async fn upload_logo(
        &self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<String> {
        if let Err(message) = validate_logo_upload(content_type, bytes.len() as u64) {
            let err = AppError::validation("logo", message, "Nembo si sahihi");
            notifications.show_error("Logo", err.user_message(language));
            return Err(err);
        }
        match api
            .upload_logo(self.business_id, file_name, content_type, bytes)
            .await
        {
            Ok(url) => {
                notifications.show_success("Logo", COMMON.saved.get(language));
                Ok(url)
            }
            Err(err) => {
                report_failure(notifications, "Logo", &err, language);
                Err(err)
            }
        }
    }
}

/// Trimmed optional string field, None when empty
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// First inline error as an [`AppError`], for callers that want a Result
pub(crate) fn first_error(errors: &FieldErrors) -> AppError {
    errors
        .iter()
        .next()
        .map(|(field, e)| AppError::validation(field.clone(), &e.message, &e.message_sw))
        .unwrap_or_else(|| AppError::validation("form", "Invalid form", "Fomu si sahihi"))
}

//! User management forms

use shared::{
    validate_email, validate_password, validate_password_confirmation, validate_phone,
    BusinessUser, CreateUserRequest, Language, UpdateUserRequest, UserRole,
};
use uuid::Uuid;

use crate::api::AdminApiClient;
use crate::error::{AppError, AppResult};
use crate::forms::business::{first_error, optional};
use crate::forms::{check, report_failure, FieldError, FieldErrors};
use crate::i18n::USERS;
use crate::notifications::NotificationCenter;

/// How the add-user dialog operates
///
/// Create mode registers a brand-new account; invite mode links an
/// existing account by email, so name and password are not collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFormMode {
    #[default]
    Create,
    Invite,
}

/// Add-user dialog state
#[derive(Debug, Clone)]
pub struct AddUserForm {
    business_id: Uuid,
    mode: UserFormMode,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    password: String,
    password_confirmation: String,
    role: UserRole,
    is_active: bool,
    errors: FieldErrors,
    is_submitting: bool,
}

impl AddUserForm {
    pub fn new(business_id: Uuid) -> Self {
        Self {
            business_id,
            mode: UserFormMode::Create,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            password_confirmation: String::new(),
            role: UserRole::Cashier,
            is_active: true,
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    pub fn mode(&self) -> UserFormMode {
        self.mode
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Switch between create and invite mode
    ///
    /// Stale inline errors from the other mode's fields are cleared.
    pub fn set_mode(&mut self, mode: UserFormMode) {
        self.mode = mode;
        self.errors.clear();
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn set_password_confirmation(&mut self, value: impl Into<String>) {
        self.password_confirmation = value.into();
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Run field validation; invite mode only requires a valid email
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();

        check(
            &mut errors,
            "email",
            validate_email(self.email.trim()),
            "Barua pepe si sahihi",
        );

        if self.mode == UserFormMode::Create {
            if self.first_name.trim().is_empty() {
                errors.insert(
                    "firstName".to_string(),
                    FieldError::new("First name is required", "Jina la kwanza linahitajika"),
                );
            }
            if self.last_name.trim().is_empty() {
                errors.insert(
                    "lastName".to_string(),
                    FieldError::new("Last name is required", "Jina la mwisho linahitajika"),
                );
            }
            check(
                &mut errors,
                "password",
                validate_password(&self.password),
                "Nenosiri lazima liwe na herufi 8 au zaidi",
            );
            check(
                &mut errors,
                "passwordConfirmation",
                validate_password_confirmation(&self.password, &self.password_confirmation),
                "Manenosiri hayafanani",
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
    pub fn build_request(&self) -> CreateUserRequest {
        let invite = self.mode == UserFormMode::Invite;
        CreateUserRequest {
            business_id: self.business_id,
            first_name: if invite {
                None
            } else {
                Some(self.first_name.trim().to_string())
            },
            last_name: if invite {
                None
            } else {
                Some(self.last_name.trim().to_string())
            },
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            password: if invite {
                None
            } else {
                Some(self.password.clone())
            },
            role: self.role,
            is_active: self.is_active,
            invite_existing_user: invite,
        }
    }

    /// Guard + validate + build; no HTTP call happens on failure
    pub fn begin_submission(&mut self) -> AppResult<CreateUserRequest> {
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

    /// Create or invite the user
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_created: F,
    ) -> AppResult<BusinessUser>
    where
        F: FnOnce(&BusinessUser),
    {
        let request = self.begin_submission()?;
        match api.create_user(&request).await {
            Ok(user) => {
                self.is_submitting = false;
                let message = match self.mode {
                    UserFormMode::Create => USERS.created,
                    UserFormMode::Invite => USERS.invited,
                };
                notifications.show_success(&user.full_name(), message.get(language));
                on_created(&user);
                Ok(user)
            }
            Err(err) => {
                self.record_failure();
                report_failure(notifications, "User", &err, language);
                Err(err)
            }
        }
    }
}

/// Edit-user dialog state
///
/// The name is edited as a single field and split into first/last on the
/// first whitespace when the payload is built.
#[derive(Debug, Clone)]
pub struct EditUserForm {
    user_id: Uuid,
    business_id: Uuid,
    full_name: String,
    email: String,
    phone: String,
    /// Left empty to keep the current password
    password: String,
    password_confirmation: String,
    role: UserRole,
    is_active: bool,
    errors: FieldErrors,
    is_submitting: bool,
}

impl EditUserForm {
    /// Initialize from the loaded entity
    pub fn load(user: &BusinessUser) -> Self {
        Self {
            user_id: user.id,
            business_id: user.business_id,
            full_name: user.full_name(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            password: String::new(),
            password_confirmation: String::new(),
            role: user.role,
            is_active: user.is_active,
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn set_password_confirmation(&mut self, value: impl Into<String>) {
        self.password_confirmation = value.into();
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Split the display name into (first, last) on the first whitespace
    fn split_name(&self) -> (String, String) {
        let trimmed = self.full_name.trim();
        match trimmed.split_once(char::is_whitespace) {
            Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
            None => (trimmed.to_string(), String::new()),
        }
    }

    /// Run field validation; password rules apply only when changing it
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();

        if self.full_name.trim().is_empty() {
            errors.insert(
                "name".to_string(),
                FieldError::new("Name is required", "Jina linahitajika"),
            );
        }
        check(
            &mut errors,
            "email",
            validate_email(self.email.trim()),
            "Barua pepe si sahihi",
        );
        if !self.phone.trim().is_empty() {
            check(
                &mut errors,
                "phone",
                validate_phone(self.phone.trim()),
                "Namba ya simu si sahihi",
            );
        }
        if !self.password.is_empty() {
            check(
                &mut errors,
                "password",
                validate_password(&self.password),
                "Nenosiri lazima liwe na herufi 8 au zaidi",
            );
            check(
                &mut errors,
                "passwordConfirmation",
                validate_password_confirmation(&self.password, &self.password_confirmation),
                "Manenosiri hayafanani",
            );
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn build_request(&self) -> UpdateUserRequest {
        let (first_name, last_name) = self.split_name();
        UpdateUserRequest {
            business_id: self.business_id,
            first_name,
            last_name,
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
            role: self.role,
            is_active: self.is_active,
        }
    }

    /// Guard + validate + build; no HTTP call happens on failure
    pub fn begin_submission(&mut self) -> AppResult<UpdateUserRequest> {
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

    /// Save the user
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_updated: F,
    ) -> AppResult<BusinessUser>
    where
        F: FnOnce(&BusinessUser),
    {
        let request = self.begin_submission()?;
        match api.update_user(self.user_id, &request).await {
            Ok(user) => {
                self.is_submitting = false;
                notifications.show_success(&user.full_name(), USERS.updated.get(language));
                on_updated(&user);
                Ok(user)
            }
            Err(err) => {
                self.record_failure();
                report_failure(notifications, "User", &err, language);
                Err(err)
            }
        }
    }
}

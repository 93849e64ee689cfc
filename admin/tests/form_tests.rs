//! Form controller tests
//!
//! Tests for the CRUD dialogs including:
//! - Slug auto-derivation and the manual-edit override
//! - Create vs invite user modes and password rules
//! - Store payload shape and the two-step delete confirmation
//! - Payment amount bounds and reminder composition

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use duka_admin::error::AppError;
use duka_admin::forms::{
    AddUserForm, CreateBusinessForm, CreditPaymentForm, EditUserForm, ReminderForm,
    StockAdjustmentForm, StoreForm, UserFormMode, WizardStep,
};
use duka_admin::notifications::NotificationCenter;
use shared::{BusinessUser, CreditSale, InventoryItem, Language, Store, StoreType, UserRole};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn sample_user() -> BusinessUser {
    BusinessUser {
        id: Uuid::new_v4(),
        business_id: Uuid::new_v4(),
        first_name: "Amina".to_string(),
        last_name: "Juma".to_string(),
        email: "amina@example.com".to_string(),
        phone: None,
        role: UserRole::Manager,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_sale(outstanding: &str) -> CreditSale {
    CreditSale {
        id: Uuid::new_v4(),
        business_id: Uuid::new_v4(),
        customer_id: None,
        customer_name: "Baraka Mushi".to_string(),
        total_amount: dec("100000"),
        outstanding_amount: dec(outstanding),
        due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
    }
}

fn sample_product(quantity: i64) -> InventoryItem {
    InventoryItem {
        product_id: Uuid::new_v4(),
        name: "Cooking oil 1L".to_string(),
        name_swahili: None,
        sku: "OIL-1L".to_string(),
        quantity,
        reorder_point: Some(5),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Create business wizard
    // ------------------------------------------------------------------------

    #[test]
    fn test_slug_follows_name_until_edited() {
        let mut form = CreateBusinessForm::new();
        form.set_name("Koppela Mini Mart!");
        assert_eq!(form.slug(), "koppela-mini-mart");

        form.set_name("Duka la Mama");
        assert_eq!(form.slug(), "duka-la-mama");

        // Manual edit pins the slug
        form.set_slug("custom-slug");
        form.set_name("Something Else Entirely");
        assert_eq!(form.slug(), "custom-slug");
    }

    #[test]
    fn test_wizard_requires_plan_before_details() {
        let mut form = CreateBusinessForm::new();
        assert_eq!(form.step(), WizardStep::PlanSelection);

        form.select_plan(Uuid::new_v4());
        assert_eq!(form.step(), WizardStep::Details);
    }

    #[test]
    fn test_wizard_cannot_be_dismissed_until_created() {
        let mut form = CreateBusinessForm::new();
        assert!(!form.can_dismiss());

        form.select_plan(Uuid::new_v4());
        form.set_name("Koppela Mini Mart");
        assert!(!form.can_dismiss());

        form.begin_submission().unwrap();
        form.record_success();
        assert!(form.can_dismiss());
    }

    #[test]
    fn test_missing_plan_blocks_submission() {
        let mut form = CreateBusinessForm::new();
        form.set_name("Koppela Mini Mart");

        let err = form.begin_submission().unwrap_err();
        assert_eq!(err.field(), Some("planId"));
    }

    #[test]
    fn test_slug_conflict_attached_to_field() {
        let mut form = CreateBusinessForm::new();
        form.select_plan(Uuid::new_v4());
        form.set_name("Koppela Mini Mart");
        form.begin_submission().unwrap();

        form.record_failure(&AppError::Api(
            "A business with this slug already exists".to_string(),
        ));
        assert!(form.errors().contains_key("slug"));

        // Unrelated server errors leave the field map alone
        let mut other = CreateBusinessForm::new();
        other.select_plan(Uuid::new_v4());
        other.set_name("Koppela Mini Mart");
        other.begin_submission().unwrap();
        other.record_failure(&AppError::Api("Internal error".to_string()));
        assert!(!other.errors().contains_key("slug"));
    }

    #[test]
    fn test_double_submission_blocked() {
        let mut form = CreateBusinessForm::new();
        form.select_plan(Uuid::new_v4());
        form.set_name("Koppela Mini Mart");

        assert!(form.begin_submission().is_ok());
        let err = form.begin_submission().unwrap_err();
        assert!(matches!(err, AppError::SubmissionInFlight));

        // Failure re-enables submission
        form.record_failure(&AppError::Api("Internal error".to_string()));
        assert!(form.begin_submission().is_ok());
    }

    // ------------------------------------------------------------------------
    // User forms
    // ------------------------------------------------------------------------

    #[test]
    fn test_create_mode_requires_name_and_password() {
        let mut form = AddUserForm::new(Uuid::new_v4());
        form.set_email("amina@example.com");
        assert!(!form.validate());
        assert!(form.errors().contains_key("firstName"));
        assert!(form.errors().contains_key("password"));

        form.set_first_name("Amina");
        form.set_last_name("Juma");
        form.set_password("longenough");
        form.set_password_confirmation("longenough");
        assert!(form.validate());
    }

    #[test]
    fn test_short_or_mismatched_password_rejected() {
        let mut form = AddUserForm::new(Uuid::new_v4());
        form.set_first_name("Amina");
        form.set_last_name("Juma");
        form.set_email("amina@example.com");

        form.set_password("short");
        form.set_password_confirmation("short");
        assert!(!form.validate());
        assert!(form.errors().contains_key("password"));

        form.set_password("longenough");
        form.set_password_confirmation("different1");
        assert!(!form.validate());
        assert!(form.errors().contains_key("passwordConfirmation"));
    }

    #[test]
    fn test_invite_mode_only_needs_email() {
        let mut form = AddUserForm::new(Uuid::new_v4());
        form.set_mode(UserFormMode::Invite);
        form.set_email("amina@example.com");
        assert!(form.validate());

        let request = form.build_request();
        assert!(request.invite_existing_user);
        assert!(request.first_name.is_none());
        assert!(request.password.is_none());
    }

    #[test]
    fn test_edit_splits_full_name_on_first_whitespace() {
        let mut form = EditUserForm::load(&sample_user());
        form.set_full_name("Neema Anna Mollel");

        let request = form.build_request();
        assert_eq!(request.first_name, "Neema");
        assert_eq!(request.last_name, "Anna Mollel");
    }

    #[test]
    fn test_edit_single_name_has_empty_last() {
        let mut form = EditUserForm::load(&sample_user());
        form.set_full_name("Neema");

        let request = form.build_request();
        assert_eq!(request.first_name, "Neema");
        assert_eq!(request.last_name, "");
    }

    #[test]
    fn test_edit_password_optional() {
        let mut form = EditUserForm::load(&sample_user());
        assert!(form.validate());
        assert!(form.build_request().password.is_none());

        form.set_password("short");
        form.set_password_confirmation("short");
        assert!(!form.validate());

        form.set_password("longenough");
        form.set_password_confirmation("longenough");
        assert!(form.validate());
        assert!(form.build_request().password.is_some());
    }

    // ------------------------------------------------------------------------
    // Store form
    // ------------------------------------------------------------------------

    #[test]
    fn test_store_payload_shape() {
        let business_id = Uuid::new_v4();
        let mut form = StoreForm::new(business_id);
        form.set_name("Ilala Branch");
        form.set_city("Dar es Salaam");
        assert!(form.validate());

        let request = form.build_request();
        assert_eq!(request.business_id, business_id);
        assert_eq!(request.name, "Ilala Branch");
        assert_eq!(request.store_type, StoreType::RetailStore);
        assert_eq!(request.city.as_deref(), Some("Dar es Salaam"));
        assert!(request.name_swahili.is_none());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["storeType"], "retail_store");
        assert_eq!(json["businessId"], business_id.to_string());
        // Unset optionals are omitted entirely
        assert!(json.get("nameSwahili").is_none());
    }

    #[test]
    fn test_store_success_fires_callback_once() {
        let business_id = Uuid::new_v4();
        let mut form = StoreForm::new(business_id);
        form.set_name("Ilala Branch");
        let request = form.begin_submission().unwrap();
        assert!(form.is_submitting());

        let saved = Store {
            id: Uuid::new_v4(),
            business_id,
            name: request.name.clone(),
            name_swahili: None,
            store_type: request.store_type,
            address: None,
            city: None,
            region: None,
            phone: None,
            email: None,
            manager_id: None,
            is_active: true,
            inventory_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let notifications = NotificationCenter::new();
        let mut refreshes = 0;
        form.handle_success(&saved, &notifications, Language::English, |_| {
            refreshes += 1;
        });

        assert_eq!(refreshes, 1);
        assert!(!form.is_submitting());
        let toasts = notifications.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Ilala Branch");
    }

    #[test]
    fn test_store_delete_requires_confirmation() {
        let mut form = StoreForm::new(Uuid::new_v4());
        assert!(!form.is_delete_confirmed());

        form.confirm_delete();
        assert!(form.is_delete_confirmed());

        form.cancel_delete();
        assert!(!form.is_delete_confirmed());
    }

    // ------------------------------------------------------------------------
    // Stock adjustment
    // ------------------------------------------------------------------------

    #[test]
    fn test_adjustment_bounded_by_on_hand() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let mut form =
            StockAdjustmentForm::new(Uuid::new_v4(), &sample_product(8), None, today);
        form.set_reason("water damage");

        form.set_quantity(9);
        assert!(!form.validate());
        assert!(form.errors().contains_key("quantity"));

        form.set_quantity(8);
        assert!(form.validate());
    }

    #[test]
    fn test_adjustment_requires_reason() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let mut form =
            StockAdjustmentForm::new(Uuid::new_v4(), &sample_product(8), None, today);
        form.set_quantity(3);

        assert!(!form.validate());
        assert!(form.errors().contains_key("reason"));
    }

    #[test]
    fn test_adjustment_live_total_cost() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let mut form =
            StockAdjustmentForm::new(Uuid::new_v4(), &sample_product(20), None, today);
        form.set_quantity(3);
        form.set_unit_cost(dec("4500"));

        assert_eq!(form.total_cost(), dec("13500"));
        assert_eq!(form.total_cost(), form.build_request().total_cost());
    }

    // ------------------------------------------------------------------------
    // Credit payment
    // ------------------------------------------------------------------------

    #[test]
    fn test_payment_defaults_to_full_balance() {
        let form = CreditPaymentForm::new(sample_sale("45000"));
        assert_eq!(form.amount(), dec("45000"));
        assert_eq!(form.remaining_after(), Decimal::ZERO);
    }

    #[test]
    fn test_payment_amount_bounds() {
        let mut form = CreditPaymentForm::new(sample_sale("45000"));

        form.set_amount(Decimal::ZERO);
        assert!(!form.validate());

        form.set_amount(dec("45001"));
        assert!(!form.validate());
        assert!(form.errors().contains_key("amount"));

        form.set_amount(dec("20000"));
        assert!(form.validate());
        assert_eq!(form.remaining_after(), dec("25000"));
    }

    // ------------------------------------------------------------------------
    // Reminders
    // ------------------------------------------------------------------------

    #[test]
    fn test_reminder_requires_selection_and_message() {
        let sales = vec![sample_sale("45000")];
        let sale_id = sales[0].id;
        let mut form = ReminderForm::new(Uuid::new_v4(), "Koppela Mini Mart", sales);

        assert!(!form.validate());
        assert!(form.errors().contains_key("saleIds"));

        form.toggle(sale_id);
        form.set_message("  ");
        assert!(!form.validate());
        assert!(form.errors().contains_key("message"));

        form.set_message("Pay up please");
        assert!(form.validate());
    }

    #[test]
    fn test_reminder_preview_substitutes_placeholders() {
        let sales = vec![sample_sale("45000")];
        let sale_id = sales[0].id;
        let mut form = ReminderForm::new(Uuid::new_v4(), "Koppela Mini Mart", sales);
        form.toggle(sale_id);
        form.set_message("Hi {{customer}}, {{amount}} due {{dueDate}} - {{business}}");

        let preview = form.preview().unwrap();
        assert_eq!(
            preview,
            "Hi Baraka Mushi, 45000 due 2026-09-01 - Koppela Mini Mart"
        );
    }

    #[test]
    fn test_reminder_toggle_and_unknown_ids() {
        let sales = vec![sample_sale("45000"), sample_sale("9000")];
        let first = sales[0].id;
        let mut form = ReminderForm::new(Uuid::new_v4(), "Koppela Mini Mart", sales);

        form.toggle(first);
        assert_eq!(form.selected_count(), 1);
        form.toggle(first);
        assert_eq!(form.selected_count(), 0);

        // Ids not in the list are ignored
        form.toggle(Uuid::new_v4());
        assert_eq!(form.selected_count(), 0);

        form.select_all();
        assert_eq!(form.selected_count(), 2);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use shared::{derive_slug, validate_slug, MAX_SLUG_LEN};

    proptest! {
        /// Any derived slug passes slug validation or is empty
        #[test]
        fn prop_derived_slug_is_valid(name in "[a-zA-Z0-9 !?._-]{1,80}") {
            let slug = derive_slug(&name);
            prop_assert!(slug.len() <= MAX_SLUG_LEN);
            if !slug.is_empty() {
                prop_assert!(validate_slug(&slug).is_ok());
            }
        }

        /// A payment passes validation exactly when 0 < amount <= outstanding
        #[test]
        fn prop_payment_validation(amount in 0i64..100_000, outstanding in 1i64..50_000) {
            let mut form = CreditPaymentForm::new(sample_sale(&outstanding.to_string()));
            form.set_amount(Decimal::from(amount));

            let expected = amount > 0 && amount <= outstanding;
            prop_assert_eq!(form.validate(), expected);
        }
    }
}

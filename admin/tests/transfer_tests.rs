//! Store transfer workflow tests
//!
//! Tests for the transfer state machine including:
//! - Stage progression and cancellation
//! - Destination validation (source != destination, external text)
//! - Quantity clamping and stock-bound validation
//! - Double-submission guarding and failure recovery

use proptest::prelude::*;
use uuid::Uuid;

use duka_admin::error::AppError;
use duka_admin::workflows::{Destination, TransferStage, TransferWorkflow};
use shared::InventoryItem;

fn item(name: &str, quantity: i64) -> InventoryItem {
    InventoryItem {
        product_id: Uuid::new_v4(),
        name: name.to_string(),
        name_swahili: None,
        sku: format!("SKU-{}", name.to_uppercase()),
        quantity,
        reorder_point: None,
    }
}

/// Workflow advanced to item selection with the given products loaded
fn at_item_selection(products: Vec<InventoryItem>) -> (TransferWorkflow, Uuid, Uuid) {
    let source = Uuid::new_v4();
    let destination = Uuid::new_v4();
    let mut flow = TransferWorkflow::new(Uuid::new_v4());
    flow.open();
    flow.apply_source(source, products);
    flow.select_destination_store(destination).unwrap();
    (flow, source, destination)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_opens_at_source_selection() {
        let mut flow = TransferWorkflow::new(Uuid::new_v4());
        assert_eq!(flow.stage(), TransferStage::Idle);

        flow.open();
        assert_eq!(flow.stage(), TransferStage::SourceSelection);
    }

    #[test]
    fn test_cancel_discards_everything() {
        let (mut flow, _, _) = at_item_selection(vec![item("sugar", 10)]);
        flow.cancel();

        assert_eq!(flow.stage(), TransferStage::Idle);
        assert!(flow.from_store_id().is_none());
        assert_eq!(flow.destination(), &Destination::Unset);
        assert!(flow.products().is_empty());
    }

    #[test]
    fn test_changing_source_clears_entries() {
        let sugar = item("sugar", 10);
        let sugar_id = sugar.product_id;
        let (mut flow, _, _) = at_item_selection(vec![sugar]);
        flow.set_quantity(sugar_id, 5);
        assert_eq!(flow.quantity(sugar_id), 5);

        flow.apply_source(Uuid::new_v4(), vec![item("rice", 20)]);
        assert_eq!(flow.quantity(sugar_id), 0);
        assert_eq!(flow.stage(), TransferStage::DestinationSelection);
    }

    #[test]
    fn test_destination_must_differ_from_source() {
        let source = Uuid::new_v4();
        let mut flow = TransferWorkflow::new(Uuid::new_v4());
        flow.open();
        flow.apply_source(source, vec![item("sugar", 10)]);

        let err = flow.select_destination_store(source).unwrap_err();
        assert_eq!(err.field(), Some("toStoreId"));
        // Stage unchanged on rejection
        assert_eq!(flow.stage(), TransferStage::DestinationSelection);
    }

    #[test]
    fn test_quantity_clamped_to_available() {
        let sugar = item("sugar", 10);
        let sugar_id = sugar.product_id;
        let (mut flow, _, _) = at_item_selection(vec![sugar]);

        flow.set_quantity(sugar_id, 25);
        assert_eq!(flow.quantity(sugar_id), 10);

        flow.set_quantity(sugar_id, -3);
        assert_eq!(flow.quantity(sugar_id), 0);
    }

    #[test]
    fn test_refresh_keeps_entries_intact() {
        let sugar = item("sugar", 5);
        let sugar_id = sugar.product_id;
        let (mut flow, _, _) = at_item_selection(vec![sugar.clone()]);
        flow.set_quantity(sugar_id, 5);

        let mut restocked = sugar;
        restocked.quantity = 12;
        flow.refresh_inventory(vec![restocked]);

        assert_eq!(flow.quantity(sugar_id), 5);
        assert!(flow.build_request().is_ok());
    }

    #[test]
    fn test_stock_drop_since_load_blocks_submission() {
        let sugar = item("sugar", 5);
        let sugar_id = sugar.product_id;
        let (mut flow, _, _) = at_item_selection(vec![sugar.clone()]);
        flow.set_quantity(sugar_id, 5);
        assert!(flow.build_request().is_ok());

        // Another sale depleted the source while the modal was open
        let mut depleted = sugar;
        depleted.quantity = 4;
        flow.refresh_inventory(vec![depleted]);

        let err = flow.build_request().unwrap_err();
        assert_eq!(err.field(), Some("transfers"));
        assert!(err.user_message(shared::Language::English).contains("sugar"));
        // The rejection happened before any submission state was touched
        assert!(!flow.is_submitting());
        assert_eq!(flow.stage(), TransferStage::ItemSelection);
    }

    #[test]
    fn test_missing_source_uses_screen_strings() {
        let flow = TransferWorkflow::new(Uuid::new_v4());

        let err = flow.build_request().unwrap_err();
        assert_eq!(err.field(), Some("fromStoreId"));
        assert_eq!(
            err.user_message(shared::Language::English),
            duka_admin::i18n::TRANSFER.select_source.en
        );
        assert_eq!(
            err.user_message(shared::Language::Swahili),
            duka_admin::i18n::TRANSFER.select_source.sw
        );
    }

    #[test]
    fn test_build_request_requires_positive_quantity() {
        let (flow, _, _) = at_item_selection(vec![item("sugar", 10)]);

        let err = flow.build_request().unwrap_err();
        assert_eq!(err.field(), Some("transfers"));
    }

    #[test]
    fn test_build_request_payload_shape() {
        let sugar = item("sugar", 10);
        let rice = item("rice", 20);
        let sugar_id = sugar.product_id;
        let (mut flow, source, destination) = at_item_selection(vec![sugar, rice]);
        flow.set_quantity(sugar_id, 4);
        flow.set_reason(sugar_id, "restock");

        let request = flow.build_request().unwrap();
        assert_eq!(request.from_store_id, source);
        assert_eq!(request.to_store_id, Some(destination));
        assert!(!request.is_external_movement);
        assert_eq!(request.transfers.len(), 1);
        assert_eq!(request.transfers[0].product_id, sugar_id);
        assert_eq!(request.transfers[0].quantity, 4);
        assert_eq!(request.transfers[0].reason.as_deref(), Some("restock"));
    }

    #[test]
    fn test_external_destination_requires_text() {
        let sugar = item("sugar", 10);
        let sugar_id = sugar.product_id;
        let source = Uuid::new_v4();
        let mut flow = TransferWorkflow::new(Uuid::new_v4());
        flow.open();
        flow.apply_source(source, vec![sugar]);
        flow.select_external_destination("   ");
        flow.set_quantity(sugar_id, 2);

        let err = flow.build_request().unwrap_err();
        assert_eq!(err.field(), Some("externalDestination"));

        flow.select_external_destination("Kariakoo market stall");
        let request = flow.build_request().unwrap();
        assert!(request.is_external_movement);
        assert_eq!(request.to_store_id, None);
        assert_eq!(
            request.external_destination.as_deref(),
            Some("Kariakoo market stall")
        );
    }

    #[test]
    fn test_double_submission_blocked() {
        let sugar = item("sugar", 10);
        let sugar_id = sugar.product_id;
        let (mut flow, _, _) = at_item_selection(vec![sugar]);
        flow.set_quantity(sugar_id, 2);

        assert!(flow.begin_submission().is_ok());
        assert!(flow.is_submitting());
        assert_eq!(flow.stage(), TransferStage::Submitting);

        // Second click while in flight
        let err = flow.begin_submission().unwrap_err();
        assert!(matches!(err, AppError::SubmissionInFlight));
    }

    #[test]
    fn test_failure_returns_to_item_selection_with_data() {
        let sugar = item("sugar", 10);
        let sugar_id = sugar.product_id;
        let (mut flow, _, _) = at_item_selection(vec![sugar]);
        flow.set_quantity(sugar_id, 7);

        flow.begin_submission().unwrap();
        flow.record_failure();

        assert_eq!(flow.stage(), TransferStage::ItemSelection);
        assert!(!flow.is_submitting());
        assert_eq!(flow.quantity(sugar_id), 7);
        // Retry is possible immediately
        assert!(flow.begin_submission().is_ok());
    }

    #[test]
    fn test_validation_failure_does_not_set_submitting() {
        let (mut flow, _, _) = at_item_selection(vec![item("sugar", 10)]);

        assert!(flow.begin_submission().is_err());
        assert!(!flow.is_submitting());
        assert_eq!(flow.stage(), TransferStage::ItemSelection);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// Clamped quantities always land within [0, available]
        #[test]
        fn prop_quantity_within_bounds(requested in -1000i64..1000, available in 0i64..500) {
            let product = item("sugar", available);
            let product_id = product.product_id;
            let (mut flow, _, _) = at_item_selection(vec![product]);

            flow.set_quantity(product_id, requested);
            let quantity = flow.quantity(product_id);
            prop_assert!(quantity >= 0);
            prop_assert!(quantity <= available);
        }

        /// Every request the workflow builds satisfies its own invariants:
        /// all quantities positive and within stock, and exactly one of
        /// store/external destination set
        #[test]
        fn prop_built_requests_are_valid(
            quantities in proptest::collection::vec((0i64..50, 1i64..50), 1..8),
        ) {
            let products: Vec<InventoryItem> = quantities
                .iter()
                .map(|(_, available)| item("p", *available))
                .collect();
            let requests: Vec<(Uuid, i64)> = products
                .iter()
                .zip(&quantities)
                .map(|(p, (requested, _))| (p.product_id, *requested))
                .collect();

            let (mut flow, source, _) = at_item_selection(products.clone());
            for (product_id, requested) in &requests {
                flow.set_quantity(*product_id, *requested);
            }

            match flow.build_request() {
                Ok(request) => {
                    prop_assert!(!request.transfers.is_empty());
                    prop_assert_eq!(request.from_store_id, source);
                    prop_assert!(request.to_store_id.is_some() != request.external_destination.is_some());
                    for line in &request.transfers {
                        prop_assert!(line.quantity > 0);
                        let available = products
                            .iter()
                            .find(|p| p.product_id == line.product_id)
                            .map(|p| p.quantity)
                            .unwrap_or(0);
                        prop_assert!(line.quantity <= available);
                    }
                }
                Err(err) => {
                    // Only the no-items validation can fail here; clamping
                    // rules out overstock
                    prop_assert_eq!(err.field(), Some("transfers"));
                }
            }
        }
    }
}

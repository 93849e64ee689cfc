//! Store-to-store inventory transfer workflow
//!
//! Orchestrates a cross-store (or store-to-external) product movement as a
//! single logical operation: pick a source store, pick a destination, enter
//! per-product quantities, submit one batch request.
//!
//! Validation and payload construction are pure ([`TransferWorkflow::build_request`]);
//! submission is the only step that touches the network. A validation
//! failure therefore never issues an HTTP call.

use std::collections::HashMap;

use shared::{
    clamp_quantity, InventoryItem, NotificationType, TransferItem, TransferRequest,
};
use uuid::Uuid;

use crate::api::AdminApiClient;
use crate::error::{AppError, AppResult};
use crate::i18n::TRANSFER;
use crate::notifications::NotificationCenter;

/// Where the workflow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferStage {
    #[default]
    Idle,
    SourceSelection,
    DestinationSelection,
    ItemSelection,
    Submitting,
}

/// Destination of the transfer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Unset,
    /// Another store of the same business
    Store(Uuid),
    /// Free-text external destination (e.g., a market stall)
    External(String),
}

/// Per-product entry state
#[derive(Debug, Clone, Default)]
struct EntryState {
    quantity: i64,
    reason: Option<String>,
}

/// Client-side state machine for the transfer modal
#[derive(Debug, Clone)]
pub struct TransferWorkflow {
    business_id: Uuid,
    stage: TransferStage,
    from_store_id: Option<Uuid>,
    destination: Destination,
    products: Vec<InventoryItem>,
    entries: HashMap<Uuid, EntryState>,
    is_submitting: bool,
}

impl TransferWorkflow {
    pub fn new(business_id: Uuid) -> Self {
        Self {
            business_id,
            stage: TransferStage::Idle,
            from_store_id: None,
            destination: Destination::Unset,
            products: Vec::new(),
            entries: HashMap::new(),
            is_submitting: false,
        }
    }

    pub fn stage(&self) -> TransferStage {
        self.stage
    }

    pub fn from_store_id(&self) -> Option<Uuid> {
        self.from_store_id
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn products(&self) -> &[InventoryItem] {
        &self.products
    }

    /// Open the modal; begins at source selection
    pub fn open(&mut self) {
        self.reset();
        self.stage = TransferStage::SourceSelection;
    }

    /// Cancel at any point, discarding all in-progress selections
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Select the source store and load its current inventory
    pub async fn select_source(
        &mut self,
        api: &AdminApiClient,
        store_id: Uuid,
    ) -> AppResult<()> {
        let products = api.inventory_by_location(self.business_id, store_id).await?;
        self.apply_source(store_id, products);
        Ok(())
    }

    /// Apply a loaded source inventory
    ///
    /// Changing the source clears any previously loaded product list and
    /// entered quantities.
    pub fn apply_source(&mut self, store_id: Uuid, products: Vec<InventoryItem>) {
        self.from_store_id = Some(store_id);
        self.products = products;
        self.entries.clear();
        self.stage = TransferStage::DestinationSelection;
    }

    /// Replace the loaded product list with freshly fetched quantities
    ///
    /// Entered quantities are kept; a line that now exceeds the refreshed
    /// stock is caught by [`TransferWorkflow::build_request`].
    pub fn refresh_inventory(&mut self, products: Vec<InventoryItem>) {
        self.products = products;
    }

    /// Clear the source; the product list is dropped with it
    pub fn clear_source(&mut self) {
        self.from_store_id = None;
        self.products.clear();
        self.entries.clear();
        self.stage = TransferStage::SourceSelection;
    }

    /// Choose another store as destination
    ///
    /// The source store is excluded from the picker, but the selection is
    /// checked here as well since the list may be stale.
    pub fn select_destination_store(&mut self, store_id: Uuid) -> AppResult<()> {
        if self.from_store_id == Some(store_id) {
            return Err(AppError::validation(
                "toStoreId",
                "Source and destination must be different stores",
                "Duka la kutoka na la kupokea lazima yawe tofauti",
            ));
        }
        self.destination = Destination::Store(store_id);
        self.stage = TransferStage::ItemSelection;
        Ok(())
    }

    /// Choose an external free-text destination
    pub fn select_external_destination(&mut self, destination: impl Into<String>) {
        self.destination = Destination::External(destination.into());
        self.stage = TransferStage::ItemSelection;
    }

    /// Set the requested quantity for a product
    ///
    /// The value is clamped to `[0, known source quantity]`; the
    /// authoritative check happens again at submit time because the stock
    /// may have changed since it was loaded.
    pub fn set_quantity(&mut self, product_id: Uuid, quantity: i64) {
        let available = self.available_quantity(product_id).unwrap_or(0);
        let entry = self.entries.entry(product_id).or_default();
        entry.quantity = clamp_quantity(quantity, available);
    }

    /// Set the optional reason for a product line
    pub fn set_reason(&mut self, product_id: Uuid, reason: impl Into<String>) {
        let reason = reason.into();
        let entry = self.entries.entry(product_id).or_default();
        entry.reason = if reason.trim().is_empty() {
            None
        } else {
            Some(reason)
        };
    }

    /// Entered quantity for a product (0 = not included)
    pub fn quantity(&self, product_id: Uuid) -> i64 {
        self.entries.get(&product_id).map_or(0, |e| e.quantity)
    }

    /// Running total of all positive quantities
    pub fn total_selected(&self) -> i64 {
        self.entries.values().map(|e| e.quantity.max(0)).sum()
    }

    fn available_quantity(&self, product_id: Uuid) -> Option<i64> {
        self.products
            .iter()
            .find(|p| p.product_id == product_id)
            .map(|p| p.quantity)
    }

    /// Validate the workflow state and construct the transfer payload
    ///
    /// Checks run in order; the first failure aborts. Only items with a
    /// positive quantity are included.
    pub fn build_request(&self) -> AppResult<TransferRequest> {
        // a. source store is selected
        let from_store_id = self.from_store_id.ok_or_else(|| {
            AppError::validation(
                "fromStoreId",
                TRANSFER.select_source.en,
                TRANSFER.select_source.sw,
            )
        })?;

        // b. destination is fully specified
        let (to_store_id, external_destination) = match &self.destination {
            Destination::Unset => {
                return Err(AppError::validation(
                    "destination",
                    TRANSFER.select_destination.en,
                    TRANSFER.select_destination.sw,
                ))
            }
            Destination::External(text) if text.trim().is_empty() => {
                return Err(AppError::validation(
                    "externalDestination",
                    "Enter the external destination",
                    "Andika mahali pa kupeleka",
                ))
            }
            Destination::External(text) => (None, Some(text.trim().to_string())),
            Destination::Store(store_id) => (Some(*store_id), None),
        };

        // c. source != destination for store transfers
        if to_store_id == Some(from_store_id) {
            return Err(AppError::validation(
                "toStoreId",
                "Source and destination must be different stores",
                "Duka la kutoka na la kupokea lazima yawe tofauti",
            ));
        }

        // d. at least one item with a positive quantity
        let transfers: Vec<TransferItem> = self
            .products
            .iter()
            .filter_map(|product| {
                let entry = self.entries.get(&product.product_id)?;
                if entry.quantity > 0 {
                    Some(TransferItem {
                        product_id: product.product_id,
                        quantity: entry.quantity,
                        reason: entry.reason.clone(),
                    })
                } else {
                    None
                }
            })
            .collect();

        if transfers.is_empty() {
            return Err(AppError::validation(
                "transfers",
                "Enter a quantity for at least one product",
                "Weka idadi ya angalau bidhaa moja",
            ));
        }

        // e. no requested quantity exceeds the currently-known source stock
        for item in &transfers {
            let available = self.available_quantity(item.product_id).unwrap_or(0);
            if item.quantity > available {
                let name = self
                    .products
                    .iter()
                    .find(|p| p.product_id == item.product_id)
                    .map(|p| p.name.as_str())
                    .unwrap_or("product");
                return Err(AppError::validation(
                    "transfers",
                    format!(
                        "Requested quantity for {} exceeds available stock ({})",
                        name, available
                    ),
                    format!(
                        "Idadi iliyoombwa ya {} inazidi kiasi kilichopo ({})",
                        name, available
                    ),
                ));
            }
        }

        Ok(TransferRequest {
            business_id: self.business_id,
            from_store_id,
            to_store_id,
            external_destination,
            is_external_movement: to_store_id.is_none(),
            transfers,
        })
    }

    /// Guard against double submission and construct the payload
    ///
    /// While a request is in flight a second submit (e.g., a double-click)
    /// must not issue another HTTP call.
    pub fn begin_submission(&mut self) -> AppResult<TransferRequest> {
        if self.is_submitting {
            return Err(AppError::SubmissionInFlight);
        }
        let request = self.build_request()?;
        self.is_submitting = true;
        self.stage = TransferStage::Submitting;
        Ok(request)
    }

    /// Record a failed submission: back to item selection, data intact
    pub fn record_failure(&mut self) {
        self.is_submitting = false;
        self.stage = TransferStage::ItemSelection;
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Submit the transfer
    ///
    /// On failure the workflow returns to item selection with all entered
    /// data intact; on success it resets, raises notifications and invokes
    /// the caller's refresh callback.
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: shared::Language,
        on_success: F,
    ) -> AppResult<()>
    where
        F: FnOnce(),
    {
        let request = self.begin_submission()?;
        let result = api.submit_transfer(&request).await;

        match result {
            Ok(()) => {
                tracing::info!(
                    from_store = %request.from_store_id,
                    items = request.transfers.len(),
                    external = request.is_external_movement,
                    "inventory transfer submitted"
                );
                notifications.show_success(
                    TRANSFER.title.get(language),
                    TRANSFER.transfer_complete.get(language),
                );
                notifications.notify(
                    NotificationType::Stock,
                    TRANSFER.title.get(language),
                    TRANSFER.transfer_complete.get(language),
                );
                self.reset();
                on_success();
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "inventory transfer failed");
                self.record_failure();
                notifications.show_error(
                    TRANSFER.title.get(language),
                    err.user_message(language),
                );
                Err(err)
            }
        }
    }

    fn reset(&mut self) {
        self.stage = TransferStage::Idle;
        self.from_store_id = None;
        self.destination = Destination::Unset;
        self.products.clear();
        self.entries.clear();
        self.is_submitting = false;
    }
}

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::api::ProductGateway;
use crate::domain::{ProductForm, ProductRecord};
use crate::error::{ApiError, StoreError};
use crate::store::{ProductOperation, StoreAction, StoreRequest, StoreState};

/// Handle to the [`crate::store::ProductStore`] actor.
///
/// Each CRUD method runs one request lifecycle: it dispatches the pending
/// phase, calls the gateway, then dispatches fulfilled or rejected. Lifecycles
/// are independent; clones of the client may run them concurrently.
#[derive(Clone)]
pub struct ProductStoreClient {
    sender: mpsc::Sender<StoreRequest>,
    state: watch::Receiver<StoreState>,
    gateway: Arc<dyn ProductGateway>,
}

impl ProductStoreClient {
    pub(crate) fn new(
        sender: mpsc::Sender<StoreRequest>,
        state: watch::Receiver<StoreState>,
        gateway: Arc<dyn ProductGateway>,
    ) -> Self {
        Self {
            sender,
            state,
            gateway,
        }
    }

    /// Creates a product. The list is not updated; fetch again to see it.
    #[instrument(skip(self, form))]
    pub async fn add_new_product(&self, form: ProductForm) -> Result<Value, StoreError> {
        debug!("Sending request");
        let gateway = Arc::clone(&self.gateway);
        self.run_lifecycle(
            ProductOperation::Add,
            async move { gateway.add_product(&form).await },
            |_| StoreAction::Fulfilled(ProductOperation::Add),
        )
        .await
    }

    /// Replaces the product list with the server's.
    #[instrument(skip(self))]
    pub async fn fetch_all_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        debug!("Sending request");
        let gateway = Arc::clone(&self.gateway);
        self.run_lifecycle(
            ProductOperation::FetchAll,
            async move { gateway.fetch_all_products().await },
            |products: &Vec<ProductRecord>| StoreAction::ProductsFetched(products.clone()),
        )
        .await
    }

    #[instrument(skip(self, form))]
    pub async fn edit_product(&self, id: String, form: ProductForm) -> Result<Value, StoreError> {
        debug!("Sending request");
        let gateway = Arc::clone(&self.gateway);
        self.run_lifecycle(
            ProductOperation::Edit,
            async move { gateway.edit_product(&id, &form).await },
            |_| StoreAction::Fulfilled(ProductOperation::Edit),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: String) -> Result<Value, StoreError> {
        debug!("Sending request");
        let gateway = Arc::clone(&self.gateway);
        self.run_lifecycle(
            ProductOperation::Delete,
            async move { gateway.delete_product(&id).await },
            |_| StoreAction::Fulfilled(ProductOperation::Delete),
        )
        .await
    }

    /// Applies an action directly, outside any request lifecycle.
    pub async fn dispatch(&self, action: StoreAction) -> Result<(), StoreError> {
        crate::store_request!(self.sender, StoreRequest::Dispatch { action })
    }

    /// State as seen by the actor after every request queued before this one.
    pub async fn state(&self) -> Result<StoreState, StoreError> {
        crate::store_request!(self.sender, StoreRequest::GetState {})
    }

    /// Latest published state, without a round trip to the actor.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.clone()
    }

    async fn run_lifecycle<T, F>(
        &self,
        operation: ProductOperation,
        request: F,
        on_success: impl FnOnce(&T) -> StoreAction,
    ) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.dispatch(StoreAction::Pending(operation)).await?;

        match request.await {
            Ok(payload) => {
                self.dispatch(on_success(&payload)).await?;
                info!(operation = operation.type_prefix(), "Request fulfilled");
                Ok(payload)
            }
            Err(e) => {
                warn!(operation = operation.type_prefix(), error = %e, "Request rejected");
                let payload = operation.rejection_payload(e.server_message());
                self.dispatch(StoreAction::Rejected {
                    operation,
                    payload: Some(payload.clone()),
                })
                .await?;
                Err(StoreError::Rejected(payload))
            }
        }
    }
}

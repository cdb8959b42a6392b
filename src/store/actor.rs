use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, instrument};

use super::actions::StoreAction;
use super::reducer::reduce;
use super::state::StoreState;
use crate::api::ProductGateway;
use crate::clients::ProductStoreClient;

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum StoreRequest {
    Dispatch {
        action: StoreAction,
        respond_to: Response<()>,
    },
    GetState {
        respond_to: Response<StoreState>,
    },
}

/// Owns the [`StoreState`] and applies dispatched actions one at a time.
///
/// Every applied action is published on a watch channel so views can follow
/// the state without going through the actor. The actor stops once every
/// [`ProductStoreClient`] has been dropped.
pub struct ProductStore {
    receiver: mpsc::Receiver<StoreRequest>,
    state: watch::Sender<StoreState>,
}

impl ProductStore {
    pub fn new(buffer_size: usize, gateway: Arc<dyn ProductGateway>) -> (Self, ProductStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (state, state_rx) = watch::channel(StoreState::default());
        let actor = Self { receiver, state };
        let client = ProductStoreClient::new(sender, state_rx, gateway);
        (actor, client)
    }

    #[instrument(name = "product_store", skip(self))]
    pub async fn run(mut self) {
        info!("ProductStore starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(action = %action.type_name(), "Applying action");
                    self.state.send_modify(|state| reduce(state, &action));
                    let _ = respond_to.send(());
                }
                StoreRequest::GetState { respond_to } => {
                    let _ = respond_to.send(self.state.borrow().clone());
                }
            }
        }
        info!("ProductStore stopped");
    }
}

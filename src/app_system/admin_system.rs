use std::sync::Arc;

use tracing::{error, info};

use crate::api::{ImageUploader, ProductApi, ProductGateway};
use crate::clients::ProductStoreClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::store::ProductStore;
use crate::upload::ImageUploadWidget;

const STORE_BUFFER_SIZE: usize = 32;

/// The admin product screen: the product store and the image upload control,
/// sharing one backend.
///
/// Must be created inside a tokio runtime.
pub struct AdminSystem {
    pub store: ProductStoreClient,
    pub image_upload: ImageUploadWidget,
    handle: tokio::task::JoinHandle<()>,
}

impl AdminSystem {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        info!(base_url = config.base_url(), "Starting admin system");
        let api = Arc::new(ProductApi::new(config)?);
        Ok(Self::with_backend(api))
    }

    pub fn with_backend<B>(backend: Arc<B>) -> Self
    where
        B: ProductGateway + ImageUploader,
    {
        let (store, store_client) = ProductStore::new(STORE_BUFFER_SIZE, backend.clone());
        let handle = tokio::spawn(store.run());
        let image_upload = ImageUploadWidget::new(backend);

        Self {
            store: store_client,
            image_upload,
            handle,
        }
    }

    /// Stops the store actor. Clones of the store client handed out earlier
    /// keep it alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down admin system...");
        drop(self.store);
        drop(self.image_upload);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Admin system shutdown complete.");
        Ok(())
    }
}

//! Remote admin API: the seams the store and the upload widget talk through,
//! plus the reqwest-backed implementation.

mod http;

pub use http::ProductApi;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ProductForm, ProductRecord, SelectedFile, UploadedImageUrl};
use crate::error::ApiError;

/// Product CRUD endpoints.
#[async_trait]
pub trait ProductGateway: Send + Sync + 'static {
    async fn add_product(&self, form: &ProductForm) -> Result<Value, ApiError>;
    async fn fetch_all_products(&self) -> Result<Vec<ProductRecord>, ApiError>;
    async fn edit_product(&self, id: &str, form: &ProductForm) -> Result<Value, ApiError>;
    async fn delete_product(&self, id: &str) -> Result<Value, ApiError>;
}

/// Product image upload endpoint.
#[async_trait]
pub trait ImageUploader: Send + Sync + 'static {
    async fn upload_image(&self, file: &SelectedFile) -> Result<UploadedImageUrl, ApiError>;
}

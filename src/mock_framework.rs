//! # Mock Framework
//!
//! Utilities for testing the store client and the upload widget without a
//! server.
//!
//! [`ChannelGateway`] forwards every backend call as a [`GatewayCall`] on a
//! channel the test owns. Use helpers like [`expect_fetch_all`] or
//! [`expect_upload`] to take the next call, assert on its arguments and
//! answer it whenever the test is ready, so intermediate states (pending,
//! loading, superseded uploads) can be observed deterministically.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::api::{ImageUploader, ProductGateway};
use crate::clients::ProductStoreClient;
use crate::domain::{ProductForm, ProductRecord, SelectedFile, UploadedImageUrl};
use crate::error::ApiError;
use crate::store::ProductStore;

pub type Reply<T> = oneshot::Sender<Result<T, ApiError>>;

#[derive(Debug)]
pub enum GatewayCall {
    Add {
        form: ProductForm,
        respond_to: Reply<Value>,
    },
    FetchAll {
        respond_to: Reply<Vec<ProductRecord>>,
    },
    Edit {
        id: String,
        form: ProductForm,
        respond_to: Reply<Value>,
    },
    Delete {
        id: String,
        respond_to: Reply<Value>,
    },
    Upload {
        file: SelectedFile,
        respond_to: Reply<UploadedImageUrl>,
    },
}

/// Backend whose answers come from the test.
pub struct ChannelGateway {
    sender: mpsc::Sender<GatewayCall>,
}

impl ChannelGateway {
    async fn call<T>(&self, make: impl FnOnce(Reply<T>) -> GatewayCall) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| ApiError::Transport("mock gateway closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::Transport("mock reply dropped".to_string()))?
    }
}

#[async_trait]
impl ProductGateway for ChannelGateway {
    async fn add_product(&self, form: &ProductForm) -> Result<Value, ApiError> {
        let form = form.clone();
        self.call(|respond_to| GatewayCall::Add { form, respond_to }).await
    }

    async fn fetch_all_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        self.call(|respond_to| GatewayCall::FetchAll { respond_to }).await
    }

    async fn edit_product(&self, id: &str, form: &ProductForm) -> Result<Value, ApiError> {
        let (id, form) = (id.to_string(), form.clone());
        self.call(|respond_to| GatewayCall::Edit { id, form, respond_to }).await
    }

    async fn delete_product(&self, id: &str) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.call(|respond_to| GatewayCall::Delete { id, respond_to }).await
    }
}

#[async_trait]
impl ImageUploader for ChannelGateway {
    async fn upload_image(&self, file: &SelectedFile) -> Result<UploadedImageUrl, ApiError> {
        let file = file.clone();
        self.call(|respond_to| GatewayCall::Upload { file, respond_to }).await
    }
}

/// Creates a mock gateway and the receiver its calls arrive on.
pub fn create_mock_gateway(buffer_size: usize) -> (Arc<ChannelGateway>, mpsc::Receiver<GatewayCall>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Arc::new(ChannelGateway { sender }), receiver)
}

/// Starts a real [`ProductStore`] actor backed by a mock gateway.
pub fn create_mock_store(buffer_size: usize) -> (ProductStoreClient, mpsc::Receiver<GatewayCall>) {
    let (gateway, calls) = create_mock_gateway(buffer_size);
    let (store, client) = ProductStore::new(buffer_size, gateway);
    tokio::spawn(store.run());
    (client, calls)
}

/// Helper to verify that the next call is an Add
pub async fn expect_add(calls: &mut mpsc::Receiver<GatewayCall>) -> Option<(ProductForm, Reply<Value>)> {
    match calls.recv().await {
        Some(GatewayCall::Add { form, respond_to }) => Some((form, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is a FetchAll
pub async fn expect_fetch_all(calls: &mut mpsc::Receiver<GatewayCall>) -> Option<Reply<Vec<ProductRecord>>> {
    match calls.recv().await {
        Some(GatewayCall::FetchAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next call is an Edit
pub async fn expect_edit(
    calls: &mut mpsc::Receiver<GatewayCall>,
) -> Option<(String, ProductForm, Reply<Value>)> {
    match calls.recv().await {
        Some(GatewayCall::Edit { id, form, respond_to }) => Some((id, form, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is a Delete
pub async fn expect_delete(calls: &mut mpsc::Receiver<GatewayCall>) -> Option<(String, Reply<Value>)> {
    match calls.recv().await {
        Some(GatewayCall::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is an image Upload
pub async fn expect_upload(
    calls: &mut mpsc::Receiver<GatewayCall>,
) -> Option<(SelectedFile, Reply<UploadedImageUrl>)> {
    match calls.recv().await {
        Some(GatewayCall::Upload { file, respond_to }) => Some((file, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_gateway() {
        let (gateway, mut calls) = create_mock_gateway(10);

        let task = tokio::spawn(async move { gateway.delete_product("p1").await });

        let (id, responder) = expect_delete(&mut calls).await.expect("Expected Delete call");
        assert_eq!(id, "p1");
        responder.send(Ok(Value::Null)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Value::Null));
    }
}

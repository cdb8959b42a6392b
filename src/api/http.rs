use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{ImageUploader, ProductGateway};
use crate::config::ApiConfig;
use crate::domain::{ProductForm, ProductRecord, SelectedFile, UploadedImageUrl};
use crate::error::ApiError;

/// Multipart field the upload endpoint reads the image from.
const UPLOAD_FIELD: &str = "my_file";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProductListing {
    data: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    result: Option<UploadResult>,
}

#[derive(Debug, Deserialize)]
struct UploadResult {
    url: String,
}

/// HTTP client for `{base}/api/admin/products/*`.
#[derive(Debug, Clone)]
pub struct ProductApi {
    client: Client,
    config: ApiConfig,
}

impl ProductApi {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send_raw(request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            warn!(status = status.as_u16(), message = ?message, "Request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body.to_vec())
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let body = Self::send_raw(request).await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like [`Self::send`], but any 2xx body is accepted. Add, edit and
    /// delete answers are server-defined and only handed back to the caller.
    async fn send_any(request: RequestBuilder) -> Result<Value, ApiError> {
        let body = Self::send_raw(request).await?;
        Ok(lenient_body(&body))
    }
}

/// Empty body → `Null`, JSON → its value, anything else → the text.
fn lenient_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[async_trait]
impl ProductGateway for ProductApi {
    #[instrument(skip(self, form))]
    async fn add_product(&self, form: &ProductForm) -> Result<Value, ApiError> {
        debug!("Sending request");
        Self::send_any(self.client.post(self.config.endpoint("add")).json(form)).await
    }

    #[instrument(skip(self))]
    async fn fetch_all_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        debug!("Sending request");
        let listing: ProductListing = Self::send(self.client.get(self.config.endpoint("get"))).await?;
        Ok(listing.data)
    }

    #[instrument(skip(self, form))]
    async fn edit_product(&self, id: &str, form: &ProductForm) -> Result<Value, ApiError> {
        debug!("Sending request");
        let url = self.config.endpoint(&format!("edit/{id}"));
        Self::send_any(self.client.put(url).json(form)).await
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: &str) -> Result<Value, ApiError> {
        debug!("Sending request");
        let url = self.config.endpoint(&format!("delete/{id}"));
        Self::send_any(self.client.delete(url)).await
    }
}

#[async_trait]
impl ImageUploader for ProductApi {
    #[instrument(skip(self, file), fields(file_name = %file.name, size = file.size()))]
    async fn upload_image(&self, file: &SelectedFile) -> Result<UploadedImageUrl, ApiError> {
        debug!("Sending request");
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response: UploadResponse = Self::send(
            self.client
                .post(self.config.endpoint("upload-image"))
                .multipart(form),
        )
        .await?;

        match response {
            UploadResponse {
                success: true,
                result: Some(result),
            } => Ok(UploadedImageUrl::new(result.url)),
            other => {
                warn!(response = ?other, "Upload failed");
                Err(ApiError::UploadRejected)
            }
        }
    }
}

//! # Product Admin
//!
//! Client-side pieces of the shop's admin product screen.
//!
//! ## Ingredients
//!
//! - **Image upload** - validate a PNG/JPEG of at most 5 MiB, upload it, keep the
//!   returned URL → [`upload::ImageUploadWidget`]
//! - **Product store** - list, loading flag and error message, changed only by
//!   the add/fetch/edit/delete request lifecycles → [`store::ProductStore`],
//!   [`clients::ProductStoreClient`]
//! - **Remote API** - reqwest client for `/api/admin/products/*` behind two
//!   traits → [`api::ProductApi`], [`api::ProductGateway`], [`api::ImageUploader`]
//! - **System** - wiring and tracing setup → [`app_system::AdminSystem`],
//!   [`app_system::setup_tracing`]
//!
//! ## Example Usage
//!
//! ```ignore
//! let system = AdminSystem::new(ApiConfig::new("http://localhost:5000")?)?;
//!
//! // Upload the image first, then embed its URL in the form
//! if let Some(task) = system.image_upload.pick_file(Some(file))? {
//!     if let UploadOutcome::Uploaded(url) = task.outcome().await {
//!         system.store.add_new_product(form.with_image(&url)).await?;
//!     }
//! }
//!
//! // Add/edit/delete never touch the list; fetch to refresh it
//! system.store.fetch_all_products().await?;
//! system.shutdown().await?;
//! ```
//!
//! ## Expected Tracing Output
//!
//! ```text
//! INFO Starting admin system base_url="http://localhost:5000"
//! INFO product_store: ProductStore starting
//! DEBUG image_upload{generation=1 file_name=shoe.png}: Sending request
//! INFO image_upload{generation=1 file_name=shoe.png}: Image uploaded url=https://...
//! DEBUG add_new_product: Sending request
//! INFO add_new_product: Request fulfilled operation="products/addNewProduct"
//! ```

pub mod api;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;
pub mod upload;

#[cfg(test)]
mod mock_framework;

#[macro_use]
mod macros;
mod product_store_client;

pub use product_store_client::ProductStoreClient;

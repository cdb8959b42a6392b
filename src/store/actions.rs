use crate::domain::ProductRecord;

/// Used when a rejection carries no payload at all.
pub const GENERIC_FAILURE_MESSAGE: &str = "Có lỗi xảy ra";

/// The four remote operations the store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductOperation {
    Add,
    FetchAll,
    Edit,
    Delete,
}

impl ProductOperation {
    /// Prefix of the action type names for this operation.
    pub fn type_prefix(self) -> &'static str {
        match self {
            ProductOperation::Add => "products/addNewProduct",
            ProductOperation::FetchAll => "products/fetchAllProducts",
            ProductOperation::Edit => "products/editProduct",
            ProductOperation::Delete => "products/deleteProduct",
        }
    }

    /// Message stored when the server gave no reason for the failure.
    pub fn fallback_message(self) -> &'static str {
        match self {
            ProductOperation::Add => "Thêm sản phẩm thất bại",
            ProductOperation::FetchAll => "Lấy danh sách thất bại",
            ProductOperation::Edit => "Sửa sản phẩm thất bại",
            ProductOperation::Delete => "Xóa sản phẩm thất bại",
        }
    }

    /// Rejection payload for a failed request: the server's own message when
    /// it sent one, otherwise the fallback for this operation.
    pub fn rejection_payload(self, server_message: Option<&str>) -> String {
        server_message
            .filter(|m| !m.is_empty())
            .unwrap_or(self.fallback_message())
            .to_string()
    }
}

/// One phase transition of a request lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    Pending(ProductOperation),
    /// Fulfilled phase of [`ProductOperation::FetchAll`].
    ProductsFetched(Vec<ProductRecord>),
    /// Fulfilled phase of add, edit and delete. The response goes back to the
    /// caller only.
    Fulfilled(ProductOperation),
    Rejected {
        operation: ProductOperation,
        payload: Option<String>,
    },
}

impl StoreAction {
    pub fn operation(&self) -> ProductOperation {
        match self {
            StoreAction::Pending(op) | StoreAction::Fulfilled(op) => *op,
            StoreAction::ProductsFetched(_) => ProductOperation::FetchAll,
            StoreAction::Rejected { operation, .. } => *operation,
        }
    }

    /// Full action type, e.g. `products/deleteProduct/rejected`.
    pub fn type_name(&self) -> String {
        let phase = match self {
            StoreAction::Pending(_) => "pending",
            StoreAction::ProductsFetched(_) | StoreAction::Fulfilled(_) => "fulfilled",
            StoreAction::Rejected { .. } => "rejected",
        };
        format!("{}/{}", self.operation().type_prefix(), phase)
    }
}

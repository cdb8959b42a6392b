use crate::domain::ProductRecord;

/// View-model of the admin product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub is_loading: bool,
    pub product_list: Vec<ProductRecord>,
    pub error: Option<String>,
}

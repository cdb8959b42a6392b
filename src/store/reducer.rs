use super::actions::{ProductOperation, StoreAction, GENERIC_FAILURE_MESSAGE};
use super::state::StoreState;

/// Applies one phase transition to the state.
///
/// Only the fetch lifecycle touches `is_loading` and `product_list` on its
/// pending and fulfilled phases. Add, edit and delete successes leave the
/// state alone; callers re-fetch to see the change. Every rejected phase goes
/// through [`apply_rejection`].
pub fn reduce(state: &mut StoreState, action: &StoreAction) {
    match action {
        StoreAction::Pending(ProductOperation::FetchAll) => {
            state.is_loading = true;
            state.error = None;
        }
        StoreAction::ProductsFetched(products) => {
            state.is_loading = false;
            state.product_list = products.clone();
        }
        StoreAction::Rejected { payload, .. } => apply_rejection(state, payload.as_deref()),
        StoreAction::Pending(_) | StoreAction::Fulfilled(_) => {}
    }
}

/// Shared failure handler for every operation.
pub fn apply_rejection(state: &mut StoreState, payload: Option<&str>) {
    state.is_loading = false;
    state.error = Some(payload.unwrap_or(GENERIC_FAILURE_MESSAGE).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductRecord;
    use serde_json::json;

    fn record(id: &str) -> ProductRecord {
        ProductRecord::new(json!({ "_id": id }))
    }

    #[test]
    fn fetch_lifecycle_success() {
        let mut state = StoreState {
            error: Some("stale".to_string()),
            ..StoreState::default()
        };

        reduce(&mut state, &StoreAction::Pending(ProductOperation::FetchAll));
        assert!(state.is_loading);
        assert_eq!(state.error, None);

        reduce(&mut state, &StoreAction::ProductsFetched(vec![record("a"), record("b")]));
        assert!(!state.is_loading);
        assert_eq!(state.product_list, vec![record("a"), record("b")]);
    }

    #[test]
    fn fetch_replaces_list_wholesale() {
        let mut state = StoreState {
            product_list: vec![record("old")],
            ..StoreState::default()
        };
        reduce(&mut state, &StoreAction::ProductsFetched(vec![record("new")]));
        assert_eq!(state.product_list, vec![record("new")]);
    }

    #[test]
    fn fetch_rejected_with_message() {
        let mut state = StoreState::default();
        reduce(&mut state, &StoreAction::Pending(ProductOperation::FetchAll));
        reduce(
            &mut state,
            &StoreAction::Rejected {
                operation: ProductOperation::FetchAll,
                payload: Some("X".to_string()),
            },
        );
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("X"));
    }

    #[test]
    fn mutations_do_not_touch_loading_or_list() {
        let mut state = StoreState {
            is_loading: true,
            product_list: vec![record("a")],
            error: Some("earlier".to_string()),
        };
        let before = state.clone();

        for op in [ProductOperation::Add, ProductOperation::Edit, ProductOperation::Delete] {
            reduce(&mut state, &StoreAction::Pending(op));
            reduce(&mut state, &StoreAction::Fulfilled(op));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn every_rejection_clears_loading_and_sets_error() {
        for op in [
            ProductOperation::Add,
            ProductOperation::FetchAll,
            ProductOperation::Edit,
            ProductOperation::Delete,
        ] {
            let mut state = StoreState {
                is_loading: true,
                ..StoreState::default()
            };
            let payload = op.rejection_payload(None);
            reduce(
                &mut state,
                &StoreAction::Rejected {
                    operation: op,
                    payload: Some(payload.clone()),
                },
            );
            assert!(!state.is_loading);
            assert_eq!(state.error, Some(payload));
        }
    }

    #[test]
    fn rejection_without_payload_uses_generic_message() {
        let mut state = StoreState::default();
        reduce(
            &mut state,
            &StoreAction::Rejected {
                operation: ProductOperation::Delete,
                payload: None,
            },
        );
        assert_eq!(state.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
    }
}

//! Request submission
//!
//! Validates the form, composes the request, flips the response panel to
//! loading and hands the request to a background task.

use super::helpers::apply;
use crate::actions::AppAction;
use crate::compose::{compose, validate_form};
use crate::request::{execute_request_background, loggable_url, Transport};
use crate::state::AppState;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle Space/F5 - submit the current form
///
/// Returns true when a request was started.
pub fn handle_submit(state: &Arc<RwLock<AppState>>, transport: &Transport) -> bool {
    let composed = {
        let s = state.read();

        if s.response.is_loading() {
            tracing::info!("request already in progress, ignoring submit");
            return false;
        }

        let errors = validate_form(&s.form);
        if errors.is_empty() {
            compose(&s.form).map_err(|e| vec![e])
        } else {
            Err(errors)
        }
    };

    match composed {
        Ok(descriptor) => {
            tracing::info!(
                method = %descriptor.method,
                url = %loggable_url(&descriptor.url),
                query_params = descriptor.query_params.len(),
                headers = descriptor.headers.len(),
                "submitting request"
            );
            apply(state, AppAction::BeginRequest);
            execute_request_background(Arc::clone(state), transport.clone(), descriptor);
            true
        }
        Err(errors) => {
            for error in &errors {
                tracing::warn!(error = %error, "submission blocked");
            }
            apply(state, AppAction::SetValidation(errors));
            false
        }
    }
}

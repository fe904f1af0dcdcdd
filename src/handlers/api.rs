//! API Response Handler
//!
//! Routes responses from the background service into the model. List and
//! preview results are gated by request id inside the model; mutation
//! results may produce a follow-up list fetch.

use resadmin::services::ApiResponse;

use crate::App;

/// Handle API response from background service
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ListResult {
            request_id,
            scope,
            pdfs,
        } => {
            app.model.apply_list_result(request_id, scope, pdfs);
        }

        ApiResponse::UploadResult {
            scope,
            pdf_name,
            result,
        } => {
            tracing::debug!("Upload result for {} in {}", pdf_name, scope);
            let refresh = app.model.apply_upload_result(&pdf_name, result);
            app.dispatch(refresh);
        }

        ApiResponse::DeleteResult {
            scope,
            pdf_name,
            result,
        } => {
            tracing::debug!("Delete result for {} in {}", pdf_name, scope);
            let refresh = app.model.apply_delete_result(&pdf_name, result);
            app.dispatch(refresh);
        }

        ApiResponse::RenameResult {
            scope,
            old_name,
            new_name,
            result,
        } => {
            tracing::debug!("Rename result for {} in {}", old_name, scope);
            let refresh = app.model.apply_rename_result(&old_name, &new_name, result);
            app.dispatch(refresh);
        }

        ApiResponse::PreviewResult {
            request_id,
            url,
            document,
        } => {
            if !app.model.apply_preview_result(request_id, document) {
                tracing::debug!("Preview of {} arrived after the modal moved on", url);
            }
        }
    }
}

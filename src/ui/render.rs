use crate::App;
use ratatui::Frame;

use resadmin::{FilterField, Focus};

use super::{
    dialogs, filters,
    layout,
    legend::{self, LegendContext},
    resource_list,
    status_bar::{self, StatusInfo},
    toast, upload_form,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let model = &app.model;

    let legend_ctx = LegendContext {
        vim_mode: model.ui.vim_mode,
        focus: model.ui.focus,
        renaming: model.drafts.rename.is_some(),
        has_open_command: app.open_command.is_some(),
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);
    let layout_info = layout::calculate_layout(size, legend_height);

    let focused_filter: Option<FilterField> = match model.ui.focus {
        Focus::Filter(field) => Some(field),
        _ => None,
    };
    filters::render_filters(f, layout_info.filters_area, &model.filters, focused_filter);

    upload_form::render_upload_form(f, layout_info.upload_area, &model.drafts.upload, model.ui.focus);

    let scope_label = model.filters.scope().ok().map(|scope| scope.to_string());
    resource_list::render_resource_list(
        f,
        layout_info.resources_area,
        &model.resources,
        &model.drafts,
        scope_label.clone(),
        model.ui.focus == Focus::Resources,
    );

    legend::render_legend(f, layout_info.legend_area, legend_ctx);

    let status = StatusInfo {
        admin_name: model.ui.admin_name.as_deref(),
        scope: scope_label.clone(),
        pdf_count: model.resources.pdfs.len(),
        selected: model.selected_pdf().map(|pdf| pdf.name.as_str()),
        last_refreshed: model.resources.last_refreshed,
        last_error: model.resources.last_error.as_deref(),
    };
    status_bar::render_status_bar(f, layout_info.status_area, &status);

    // Overlays, lowest first
    if let Some(field) = model.ui.open_dropdown {
        filters::render_dropdown(
            f,
            layout_info.filters_area,
            &model.filters,
            field,
            model.ui.dropdown_index,
        );
    }

    if let Some(preview) = &model.ui.preview {
        dialogs::render_preview(f, preview, app.open_command.is_some());
    }

    if let Some(pdf_name) = &model.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, pdf_name, scope_label);
    }

    if let Some(message) = &model.ui.alert {
        dialogs::render_alert(f, message);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

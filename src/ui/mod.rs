// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (stacked panes)
// - render: Main orchestration function that coordinates all rendering
// - filters: Renders the four filter dropdowns and the open dropdown list
// - upload_form: Renders the PDF name and file path inputs
// - resource_list: Renders the PDF list, including the inline rename editor
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - dialogs: Renders modal dialogs (alert, delete confirmation, preview)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod filters;
pub mod layout;
pub mod legend;
pub mod render;
pub mod resource_list;
pub mod status_bar;
pub mod toast;
pub mod upload_form;

// Re-export main render function for convenience
pub use render::render;

// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Raw text of the search box
    pub query_text: String,

    /// Output folder text field; mapped into ExportOptions on export
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query_text: String::new(),
            out_dir_text: String::new(),
            out_dir_dirty: false,
            window_w: 1200,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

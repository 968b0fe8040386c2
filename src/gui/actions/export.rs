// src/gui/actions/export.rs
use crate::{export, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out dir first (mutates app) before any &app borrows
    if app.state.gui.out_dir_dirty {
        app.state.options.export.set_dir(&app.state.gui.out_dir_text);
        logf!(
            "Export: Out dir set → {}",
            app.state.options.export.out_dir.display()
        );
        app.state.gui.out_dir_dirty = false;
    }

    let count = app.session.filtered_len();
    if count == 0 {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    logf!("Export: Begin rows={}", count);
    let status_msg = match export::write_export(
        &app.state.options.export.out_dir,
        app.session.filtered(),
        export::today(),
    ) {
        Ok(Some(path)) => format!("Exported {} jobs → {}", count, path.display()),
        Ok(None) => "Nothing to export".to_string(),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}

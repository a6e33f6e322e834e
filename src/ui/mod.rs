mod gallery;
mod help;

use crate::app::App;
use ratatui::Frame;

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    gallery::render(app, frame);

    // Render help overlay on top if active
    if app.show_help {
        help::render(frame);
    }
}

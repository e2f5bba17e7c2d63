use super::{connect_view, main_view};
use crate::app::App;
use ratatui::Frame;

/// Main entry point for UI rendering
/// Decides whether to show the connect screen or the minting UI
pub fn draw(f: &mut Frame, app: &mut App) {
    if app.is_connected() {
        main_view::draw_main(f, app);
    } else {
        connect_view::draw_connect(f, app);
    }
}

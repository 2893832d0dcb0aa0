mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Phase;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.phase() {
        Phase::Select => welcome::render(frame, area, app),
        Phase::Running => quiz::render(frame, area, app),
        Phase::Result => result::render(frame, area, app),
    }
}

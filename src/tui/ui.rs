use crate::core::screen::Screen;
use crate::core::state::App;
use crate::core::transition::Keyframe;
use crate::tui::component::Component;
use crate::tui::components::{ScreenCard, TitleBar};
use crate::tui::surface::TerminalSurface;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HELP: &str = "enter/→ open  ←/bksp back  h home  x reset  o rotate  q quit";

/// The area screens are drawn into. The surface width tracks its width.
pub fn stage_area(area: Rect) -> Rect {
    let [_, stage, _] = areas(area);
    stage
}

fn areas(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App<TerminalSurface>) {
    let [title_area, stage, help_area] = areas(frame.area());

    let navigator = &app.navigator;
    for (view, keyframe) in navigator.surface().layers() {
        // Views that already left the stack have nothing to draw
        let Some(screen) = navigator.stack().iter().find(|s| s.view() == view) else {
            continue;
        };
        let mut card = card_for(&**screen, keyframe);
        card.render(frame, stage);
    }

    let mut title_bar = TitleBar::new(
        navigator.depth(),
        app.context.orientation,
        app.status_message.clone(),
        navigator.is_busy(),
    );
    title_bar.render(frame, title_area);

    frame.render_widget(
        Span::styled(HELP, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn card_for(screen: &dyn Screen, keyframe: Keyframe) -> ScreenCard {
    ScreenCard::new(
        screen.title(),
        screen.background().map(str::to_string),
        keyframe,
    )
}

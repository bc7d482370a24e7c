use crate::app::App;
use crate::ui::input::{key_to_app_event, mouse_to_app_event};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{render_view, HitAreas};
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// How long one animation tick lasts (spinner frame, background bounce).
const TICK: Duration = Duration::from_millis(100);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    hit_areas: HitAreas,
    started: Instant,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            hit_areas: HitAreas::default(),
            started: Instant::now(),
            _guard: guard,
        })
    }

    /// Mount the view, then run until the user quits.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let render_tick = Duration::from_millis(1000 / 30);
        app.mount();

        loop {
            app.drain_events();
            if app.should_quit() {
                return Ok(());
            }

            self.render_frame(app)?;

            if event::poll(render_tick)? {
                let app_event = match event::read()? {
                    Event::Key(key) => key_to_app_event(key),
                    Event::Mouse(mouse) => {
                        mouse_to_app_event(mouse, &self.hit_areas, app.state().is_gift_open())
                    }
                    _ => continue,
                };
                app.handle_event(app_event);
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let tick = (self.started.elapsed().as_millis() / TICK.as_millis()) as u64;
        let mut hit_areas = self.hit_areas;

        self.terminal.draw(|frame| {
            hit_areas = render_view(frame, &render_state, tick);
        })?;

        self.hit_areas = hit_areas;
        Ok(())
    }
}

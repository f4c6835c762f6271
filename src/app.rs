use crate::config::Config;
use crate::request::Transport;
use crate::state::AppState;
use crate::types::InputMode;
use crate::ui;
use crate::ui::draw;
use color_eyre::Result;
use parking_lot::RwLock;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

const SPINNER_TICK: Duration = Duration::from_millis(100);

pub struct App {
    state: Arc<RwLock<AppState>>,
    transport: Transport,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let transport = Transport::new(&config.http)?;
        let state = AppState::new(config.request);

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            transport,
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
        })
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed() > SPINNER_TICK {
                self.spinner_index = (self.spinner_index + 1) % draw::SPINNER.len();
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            self.event_handler
                .handle_events(&self.state, &self.transport)?;
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let state = self.state.read();

        // Create main layout: Header, URL bar, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // URL bar
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[2]);

        draw::render_header(frame, main_chunks[0], &state, self.spinner_index);
        draw::render_url_bar(frame, main_chunks[1], &state);
        draw::render_request_panel(frame, body_chunks[0], &state);
        draw::render_response_panel(frame, body_chunks[1], &state, self.spinner_index);
        draw::render_footer(frame, main_chunks[3], &state);

        // Render modals LAST so they sit on top
        match state.input.mode {
            InputMode::Editing(target) => draw::render_edit_modal(frame, &state, target),
            InputMode::CopyFallback => draw::render_copy_fallback_modal(frame, &state),
            InputMode::Normal => {}
        }
    }
}

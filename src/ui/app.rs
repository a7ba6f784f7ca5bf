//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::controller::{Command, Controller, RunState, TickOutcome};
use crate::ui::hit::HitMap;
use crate::ui::panes::{self, controls::BUTTON_HEIGHT, menu::MENU_HEIGHT};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Width of the left column holding the menu and buttons
const SIDEBAR_WIDTH: u16 = 24;

/// The main application state
pub struct App {
    /// Sorting state machine and the sequence it owns
    pub controller: Controller,

    /// Time between two frames; one tick is issued per frame
    pub frame_interval: Duration,

    /// Clickable regions of the last drawn frame
    pub hits: HitMap,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(controller: Controller, frame_interval: Duration) -> Self {
        let status_message = match controller.selection() {
            Some(algorithm) => format!("{} selected, press space to sort", algorithm),
            None => String::from("Pick an algorithm (1-5)"),
        };
        App {
            controller,
            frame_interval,
            hits: HitMap::new(),
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut next_frame = Instant::now();

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Drain input until the next frame is due
            next_frame += self.frame_interval;
            loop {
                let timeout = next_frame.saturating_duration_since(Instant::now());
                if !event::poll(timeout)? {
                    break;
                }
                self.handle_event(event::read()?);
                if self.should_quit {
                    break;
                }
            }

            // Don't try to catch up after a stall; just drop the missed frames
            let now = Instant::now();
            if next_frame < now {
                next_frame = now;
            }

            self.on_tick();
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        self.hits.clear();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(main_chunks[0]);

        // Sidebar: menu, Sort, Reload, run summary
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(MENU_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        let run_state = self.controller.run_state();

        panes::render_menu_pane(frame, sidebar[0], self.controller.selection(), &mut self.hits);

        panes::render_controls(
            frame,
            sidebar[1],
            sidebar[2],
            run_state,
            self.controller.selection().is_some(),
            &mut self.hits,
        );

        panes::render_summary_pane(
            frame,
            sidebar[3],
            self.controller.sequence().len(),
            self.controller.current_run(),
            self.controller.last_run(),
        );

        panes::render_bars_pane(
            frame,
            columns[1],
            self.controller.sequence(),
            self.controller.highlight(),
            run_state == RunState::Running,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            run_state,
            self.controller.last_error().is_some(),
        );
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Enter => {
                self.apply(Command::Start);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.apply(Command::Reset);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(algorithm) = Algorithm::from_index(index) {
                    self.apply(Command::Select(algorithm));
                }
            }
            KeyCode::Up => {
                let algorithm = self
                    .controller
                    .selection()
                    .map_or(Algorithm::Merge, Algorithm::prev);
                self.apply(Command::Select(algorithm));
            }
            KeyCode::Down => {
                let algorithm = self
                    .controller
                    .selection()
                    .map_or(Algorithm::Bubble, Algorithm::next);
                self.apply(Command::Select(algorithm));
            }
            _ => {}
        }
    }

    /// Resolve a left-button press against the last frame's buttons
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(command) = self.hits.resolve(mouse.column, mouse.row) {
            self.apply(command);
        }
    }

    /// Apply a user command and update the status message
    fn apply(&mut self, command: Command) {
        match command {
            Command::Select(algorithm) => {
                self.controller.select(algorithm);
                self.status_message = format!("{} selected", algorithm);
            }
            Command::Start => {
                if self.controller.start() {
                    if let Some(run) = self.controller.current_run() {
                        self.status_message = format!("Sorting with {}...", run.algorithm);
                    }
                } else if self.controller.run_state() == RunState::Running {
                    self.status_message = "Already sorting".to_string();
                } else {
                    self.status_message = "Pick an algorithm first (1-5)".to_string();
                }
            }
            Command::Reset => {
                self.controller.reset();
                self.status_message = "Reshuffled".to_string();
            }
            Command::Tick => self.on_tick(),
        }
    }

    /// Advance the running sort by one step
    fn on_tick(&mut self) {
        match self.controller.tick() {
            TickOutcome::Idle | TickOutcome::Stepped(_) => {}
            TickOutcome::Finished(stats) => {
                self.status_message = format!(
                    "{} finished in {} steps ({} cues)",
                    stats.algorithm, stats.steps, stats.cues
                );
            }
            TickOutcome::Failed(err) => {
                self.status_message = format!("Sort aborted: {}", err);
            }
        }
    }
}

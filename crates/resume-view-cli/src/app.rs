//! Application state and logic

use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;

use resume_view_core::{build_view, DisplayPreferences, FetchState, Resume, ViewTree};

use crate::event;
use crate::screens;

/// Number of adjustable rows in the preference sidebar
pub const PREF_ROWS: usize = 4;

/// Lines scrolled per page key press
const SCROLL_STEP: u16 = 5;

/// Messages from the background worker to the UI
#[derive(Debug)]
pub enum AppMessage {
    FetchComplete {
        /// Generation the fetch was issued under; stale generations are dropped
        generation: u64,
        result: resume_view_core::Result<Resume>,
    },
}

/// Messages from the UI to the background worker
#[derive(Debug, PartialEq, Eq)]
pub enum WorkerMessage {
    Fetch { name: String, generation: u64 },
    Shutdown,
}

/// Main application struct
pub struct App {
    /// Fetch lifecycle feeding the resume panel
    pub fetch: FetchState,
    /// User display preferences for the resume panel
    pub prefs: DisplayPreferences,
    /// Name the next fetch is issued for
    pub name: String,
    /// Input buffer while name-edit mode is open; exited on successful load
    pub editing: Option<String>,
    /// Selected preference row, 0..PREF_ROWS
    pub selected: usize,
    /// Content panel scroll offset
    pub scroll: u16,
    /// Whether the help overlay is open
    pub help_open: bool,
    pub should_quit: bool,
    /// Detail of the last fetch failure. Operator-facing only: it goes to
    /// the log, never to the content panel.
    pub last_error: Option<String>,

    /// Generation of the most recently issued fetch
    generation: u64,

    // Worker communication
    worker_tx: Sender<WorkerMessage>,
    worker_rx: Receiver<AppMessage>,
}

impl App {
    /// Create a new application instance
    pub fn new(name: impl Into<String>) -> Self {
        let (worker_tx, _worker_rx) = mpsc::channel::<WorkerMessage>();
        let (_app_tx, worker_rx) = mpsc::channel::<AppMessage>();

        Self {
            fetch: FetchState::Idle,
            prefs: DisplayPreferences::default(),
            name: name.into(),
            editing: None,
            selected: 0,
            scroll: 0,
            help_open: false,
            should_quit: false,
            last_error: None,
            generation: 0,
            worker_tx,
            worker_rx,
        }
    }

    /// Set up worker communication channels
    pub fn with_channels(
        mut self,
        worker_tx: Sender<WorkerMessage>,
        worker_rx: Receiver<AppMessage>,
    ) -> Self {
        self.worker_tx = worker_tx;
        self.worker_rx = worker_rx;
        self
    }

    /// Generation of the most recently issued fetch
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue a fetch for the current name.
    ///
    /// Bumps the generation so that any response still in flight from an
    /// earlier trigger is dropped when it arrives.
    pub fn start_fetch(&mut self) {
        self.generation += 1;
        self.fetch = FetchState::Loading;
        self.scroll = 0;
        let _ = self.worker_tx.send(WorkerMessage::Fetch {
            name: self.name.clone(),
            generation: self.generation,
        });
    }

    /// Handle a keyboard event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, even mid-edit
        if event::is_ctrl_c(&key) {
            self.should_quit = true;
            return;
        }

        // Help overlay: any key closes it
        if self.help_open {
            self.help_open = false;
            return;
        }

        // Name editing captures all remaining input
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        if event::is_quit(&key) {
            self.should_quit = true;
        } else if event::is_help(&key) {
            self.help_open = true;
        } else if event::is_key(&key, 'e') {
            self.editing = Some(self.name.clone());
        } else if event::is_key(&key, 'r') {
            self.start_fetch();
        } else if event::is_down(&key) {
            self.selected = (self.selected + 1) % PREF_ROWS;
        } else if event::is_up(&key) {
            self.selected = self.selected.checked_sub(1).unwrap_or(PREF_ROWS - 1);
        } else if event::is_left(&key) {
            self.adjust_selected(-1);
        } else if event::is_right(&key) {
            self.adjust_selected(1);
        } else if event::is_page_down(&key) {
            self.scroll = self.scroll.saturating_add(SCROLL_STEP);
        } else if event::is_page_up(&key) {
            self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        if event::is_escape(&key) {
            // Discard the buffer, keep the previous name
            self.editing = None;
            return;
        }

        if event::is_enter(&key) {
            // Commit and fetch; edit mode stays open until a resume arrives
            if let Some(buffer) = &self.editing {
                self.name = buffer.clone();
            }
            self.start_fetch();
            return;
        }

        if let Some(buffer) = self.editing.as_mut() {
            if key.code == KeyCode::Backspace {
                buffer.pop();
            } else if let KeyCode::Char(c) = key.code {
                buffer.push(c);
            }
        }
    }

    /// Apply a left/right step to the selected preference row
    fn adjust_selected(&mut self, step: isize) {
        match self.selected {
            0 => {
                if step > 0 {
                    self.prefs.increase_font_size();
                } else {
                    self.prefs.decrease_font_size();
                }
            }
            1 => {
                self.prefs.font_family = if step > 0 {
                    self.prefs.font_family.next()
                } else {
                    self.prefs.font_family.prev()
                };
            }
            2 => {
                self.prefs.background = if step > 0 {
                    self.prefs.background.next()
                } else {
                    self.prefs.background.prev()
                };
            }
            3 => {
                self.prefs.text_color = if step > 0 {
                    self.prefs.text_color.next()
                } else {
                    self.prefs.text_color.prev()
                };
            }
            _ => {}
        }
    }

    /// Drain and apply pending worker messages
    pub fn process_worker_messages(&mut self) {
        while let Ok(msg) = self.worker_rx.try_recv() {
            match msg {
                AppMessage::FetchComplete { generation, result } => {
                    if generation != self.generation {
                        tracing::debug!(
                            generation,
                            latest = self.generation,
                            "dropping stale fetch result"
                        );
                        continue;
                    }
                    match result {
                        Ok(resume) => {
                            self.fetch = FetchState::Loaded(resume);
                            self.editing = None;
                            self.last_error = None;
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "resume fetch failed");
                            self.last_error = Some(err.to_string());
                            self.fetch = FetchState::Failed;
                        }
                    }
                }
            }
        }
    }

    /// Display instructions for the current state
    pub fn view(&self) -> ViewTree {
        build_view(&self.prefs, &self.fetch)
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        screens::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use resume_view_core::{BackgroundColor, Error, FontFamily};

    /// App wired to channels the test drives from the worker's side
    fn harness() -> (App, Receiver<WorkerMessage>, Sender<AppMessage>) {
        let (worker_tx, worker_rx) = mpsc::channel();
        let (app_tx, app_rx) = mpsc::channel();
        let app = App::new("NAME").with_channels(worker_tx, app_rx);
        (app, worker_rx, app_tx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_resume(name: &str) -> Resume {
        Resume {
            name: name.to_string(),
            email: "a@x.com".to_string(),
            phone: String::new(),
            address: String::new(),
            twitter: String::new(),
            summary: String::new(),
            skills: vec!["Go".to_string(), "SQL".to_string()],
            projects: vec![],
        }
    }

    #[test]
    fn test_fetch_enters_loading_and_reaches_worker() {
        let (mut app, worker_rx, _app_tx) = harness();
        app.start_fetch();

        assert!(app.fetch.is_loading());
        assert_eq!(
            worker_rx.try_recv().unwrap(),
            WorkerMessage::Fetch {
                name: "NAME".to_string(),
                generation: 1
            }
        );
    }

    #[test]
    fn test_successful_fetch_loads_and_exits_edit_mode() {
        let (mut app, _worker_rx, app_tx) = harness();
        app.editing = Some("alice".to_string());
        app.start_fetch();

        app_tx
            .send(AppMessage::FetchComplete {
                generation: app.generation(),
                result: Ok(sample_resume("Alice")),
            })
            .unwrap();
        app.process_worker_messages();

        assert_eq!(app.fetch.resume().map(|r| r.name.as_str()), Some("Alice"));
        assert!(app.editing.is_none());
    }

    #[test]
    fn test_failure_discards_previous_resume() {
        let (mut app, _worker_rx, app_tx) = harness();
        app.fetch = FetchState::Loaded(sample_resume("Old"));

        app.start_fetch();
        app_tx
            .send(AppMessage::FetchComplete {
                generation: app.generation(),
                result: Err(Error::Status(500)),
            })
            .unwrap();
        app.process_worker_messages();

        assert_eq!(app.fetch, FetchState::Failed);
        assert!(app.fetch.resume().is_none());
        assert!(app.view().blocks.is_empty());
        // Failure detail stays on the operator channel
        assert!(app.last_error.is_some());
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let (mut app, _worker_rx, app_tx) = harness();
        app.start_fetch(); // generation 1
        app.start_fetch(); // generation 2 supersedes it

        app_tx
            .send(AppMessage::FetchComplete {
                generation: 1,
                result: Ok(sample_resume("Stale")),
            })
            .unwrap();
        app.process_worker_messages();
        // Still waiting on generation 2
        assert!(app.fetch.is_loading());

        app_tx
            .send(AppMessage::FetchComplete {
                generation: 2,
                result: Ok(sample_resume("Fresh")),
            })
            .unwrap();
        app.process_worker_messages();
        assert_eq!(app.fetch.resume().map(|r| r.name.as_str()), Some("Fresh"));
    }

    #[test]
    fn test_font_size_keys_stop_at_rails() {
        let (mut app, _worker_rx, _app_tx) = harness();
        app.selected = 0;

        for _ in 0..20 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.prefs.font_size(), 12);

        for _ in 0..20 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.prefs.font_size(), 24);
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let (mut app, _worker_rx, _app_tx) = harness();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected, PREF_ROWS - 1);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_prefs_without_resume_render_empty_panel() {
        let (mut app, _worker_rx, _app_tx) = harness();
        app.selected = 1;
        app.handle_key(key(KeyCode::Right)); // Default -> Serif
        app.selected = 2;
        app.handle_key(key(KeyCode::Right)); // White -> Light Gray

        assert_eq!(app.prefs.font_family, FontFamily::Serif);
        let tree = app.view();
        assert!(tree.blocks.is_empty());
        assert_eq!(tree.background, BackgroundColor::LightGray);
    }

    #[test]
    fn test_preference_keys_never_trigger_a_fetch() {
        let (mut app, worker_rx, _app_tx) = harness();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Left));
        assert!(worker_rx.try_recv().is_err());
        assert_eq!(app.fetch, FetchState::Idle);
    }

    #[test]
    fn test_edit_mode_typing_and_commit() {
        let (mut app, worker_rx, _app_tx) = harness();
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.editing.as_deref(), Some("NAME"));

        for _ in 0..4 {
            app.handle_key(key(KeyCode::Backspace));
        }
        for c in "alice".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.name, "alice");
        // Edit mode stays open until the resume actually arrives
        assert!(app.editing.is_some());
        assert_eq!(
            worker_rx.try_recv().unwrap(),
            WorkerMessage::Fetch {
                name: "alice".to_string(),
                generation: 1
            }
        );
    }

    #[test]
    fn test_escape_cancels_edit_without_fetch() {
        let (mut app, worker_rx, _app_tx) = harness();
        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Esc));

        assert!(app.editing.is_none());
        assert_eq!(app.name, "NAME");
        assert!(worker_rx.try_recv().is_err());
    }

    #[test]
    fn test_q_types_while_editing_and_quits_otherwise() {
        let (mut app, _worker_rx, _app_tx) = harness();
        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.editing.as_deref(), Some("NAMEq"));

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}

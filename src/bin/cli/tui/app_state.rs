use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use ratatui::prelude::Rect;

use crate::app::App;
use crate::render::terminal as renderer;
use ratib_lib::quran::{load_reading, ContentRequest, ReaderContent};
use ratib_lib::reflection::reflection_for;
use ratib_lib::schedule::{DailyAssignment, DayNavigator, Slot};

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Day,
    Reader,
    EditHizb,
}

/// Results delivered by background fetches
enum Loaded {
    Reader { tag: u64, content: ReaderContent },
    Reflection { tag: u64, text: String },
}

pub struct TuiState {
    pub app: App,
    pub mode: Mode,

    // Day state
    pub navigator: DayNavigator,
    pub assignment: Option<DailyAssignment>,
    pub day_error: Option<String>,

    // Reader state
    pub reader_title: String,
    pub reader_loading: bool,
    pub reader_error: Option<String>,
    pub rendered_lines: Vec<String>,
    pub content_scroll: usize,

    // Reflection state
    pub reflection: Option<String>,
    pub reflection_loading: bool,

    // Key state for multi-char sequences
    pub pending_key: Option<char>,

    // Reader area for mouse hit-testing (updated each draw)
    pub content_area: Option<Rect>,

    // Input mode state (for EditHizb)
    pub input_text: String,
    pub flash_message: Option<String>,

    pub quit: bool,

    // Background fetches carry the generation they were started in;
    // results from an older generation are dropped
    day_generation: u64,
    reader_generation: u64,
    sender: Sender<Loaded>,
    receiver: Receiver<Loaded>,
}

impl TuiState {
    pub fn new(app: App) -> Self {
        let (sender, receiver) = mpsc::channel();
        let mut state = Self {
            app,
            mode: Mode::Day,
            navigator: DayNavigator::today(),
            assignment: None,
            day_error: None,
            reader_title: String::new(),
            reader_loading: false,
            reader_error: None,
            rendered_lines: Vec::new(),
            content_scroll: 0,
            reflection: None,
            reflection_loading: false,
            pending_key: None,
            content_area: None,
            input_text: String::new(),
            flash_message: None,
            quit: false,
            day_generation: 0,
            reader_generation: 0,
            sender,
            receiver,
        };

        state.recompute();
        state
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.navigator.selected()
    }

    /// Recompute the selected day's readings from the current baseline
    pub fn recompute(&mut self) {
        match self.app.schedule().assignment_for(self.selected_date()) {
            Ok(assignment) => {
                self.assignment = Some(assignment);
                self.day_error = None;
            }
            Err(e) => {
                self.assignment = None;
                self.day_error = Some(e.to_string());
            }
        }
    }

    fn on_date_changed(&mut self) {
        self.day_generation += 1;
        self.reflection = None;
        self.reflection_loading = false;
        self.recompute();
    }

    pub fn previous_day(&mut self) {
        self.navigator.previous();
        self.on_date_changed();
    }

    pub fn next_day(&mut self) {
        self.navigator.next();
        self.on_date_changed();
    }

    pub fn go_today(&mut self) {
        self.navigator.jump_to(App::today());
        self.on_date_changed();
    }

    /// Open the reader for one slot and start loading its text
    pub fn open_reader(&mut self, slot: Slot) {
        let Some(ref assignment) = self.assignment else {
            self.flash_message = Some("No readings before the start date".to_string());
            return;
        };
        let reading = assignment.reading(slot);
        let title = format!("{} - {}", slot.title(), reading.label());
        let request = ContentRequest::from(reading);

        self.reader_title = title;
        self.rendered_lines.clear();
        self.reader_error = None;
        self.content_scroll = 0;
        self.reader_loading = true;
        self.mode = Mode::Reader;

        self.reader_generation += 1;
        let tag = self.reader_generation;
        let source = Arc::clone(&self.app.content);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let content = load_reading(source.as_ref(), &request);
            let _ = sender.send(Loaded::Reader { tag, content });
        });
    }

    pub fn close_reader(&mut self) {
        self.reader_generation += 1;
        self.reader_loading = false;
        self.mode = Mode::Day;
    }

    /// Ask for a reflection on the selected day
    pub fn request_reflection(&mut self) {
        let Some(assignment) = self.assignment.clone() else {
            return;
        };
        if self.reflection_loading {
            return;
        }

        self.reflection_loading = true;
        let tag = self.day_generation;
        let provider = Arc::clone(&self.app.reflection);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let text = reflection_for(provider.as_ref(), &assignment);
            let _ = sender.send(Loaded::Reflection { tag, text });
        });
    }

    /// Apply any finished background fetches
    pub fn poll_background(&mut self) {
        loop {
            match self.receiver.try_recv() {
                Ok(Loaded::Reader { tag, content }) => {
                    if tag != self.reader_generation {
                        continue;
                    }
                    self.reader_loading = false;
                    self.reader_error = content.error;
                    self.rendered_lines = renderer::render_ayahs_plain(&content.ayahs, 80);
                }
                Ok(Loaded::Reflection { tag, text }) => {
                    if tag != self.day_generation {
                        continue;
                    }
                    self.reflection_loading = false;
                    self.reflection = Some(text);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    pub fn start_edit_hizb(&mut self) {
        self.input_text = self.app.baseline.start_hizb.to_string();
        self.mode = Mode::EditHizb;
    }

    /// Save the typed start hizb
    pub fn apply_hizb_input(&mut self) {
        let parsed = self.input_text.trim().parse::<i64>();
        let result = match parsed {
            Ok(value) => self.app.set_start_hizb(value).map_err(|e| format!("{:#}", e)),
            Err(_) => Err(format!("Not a number: '{}'", self.input_text)),
        };

        match result {
            Ok(baseline) => {
                self.flash_message = Some(format!("Start hizb set to {}", baseline.start_hizb));
                self.mode = Mode::Day;
                self.input_text.clear();
                self.on_date_changed();
            }
            Err(message) => {
                self.flash_message = Some(message);
            }
        }
    }

    pub fn content_scroll_down(&mut self, amount: usize) {
        let max = self.rendered_lines.len().saturating_sub(1);
        self.content_scroll = (self.content_scroll + amount).min(max);
    }

    pub fn content_scroll_up(&mut self, amount: usize) {
        self.content_scroll = self.content_scroll.saturating_sub(amount);
    }
}

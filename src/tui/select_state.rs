//! State of the interactive selection screen.
//!
//! Everything here is terminal-free: keys go in, an [`Effect`] comes out and
//! the caller performs any I/O (clipboard, file writes, re-reading input).

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::is_interrupt;
use super::app::status_footer::StatusKind;
use super::feedback::CopyFeedback;
use crate::abi::{AbiEntry, ExclusionSet, FilterCriteria};
use crate::render::{render, summary, FormatOptions, OutputFormat};
use crate::session::AbiSession;

/// Lines moved by one `[` / `]` press.
const PREVIEW_SCROLL_STEP: u16 = 5;

/// UI mode for the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing a search term; the list narrows as you type
    Search,
    /// Help overlay; any key closes it
    Help,
}

/// Work the caller has to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Copy,
    Save,
    Reload,
}

pub struct SelectState {
    session: AbiSession,
    criteria: FilterCriteria,
    exclusions: ExclusionSet,
    mode: Mode,
    format: OutputFormat,
    options: FormatOptions,
    /// Parsed indices passing `criteria`.
    visible: Vec<usize>,
    /// Position within `visible`.
    cursor: usize,
    page_size: usize,
    preview_scroll: u16,
    search_input: String,
    status_message: Option<(String, StatusKind)>,
    feedback: CopyFeedback,
}

impl SelectState {
    pub fn new(
        session: AbiSession,
        format: OutputFormat,
        options: FormatOptions,
        exclusions: ExclusionSet,
    ) -> Self {
        let mut state = Self {
            session,
            criteria: FilterCriteria::default(),
            exclusions,
            mode: Mode::Normal,
            format,
            options,
            visible: Vec::new(),
            cursor: 0,
            page_size: 10,
            preview_scroll: 0,
            search_input: String::new(),
            status_message: None,
            feedback: CopyFeedback::default(),
        };
        state.refresh_visible();
        state
    }

    pub fn session(&self) -> &AbiSession {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn preview_scroll(&self) -> u16 {
        self.preview_scroll
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    pub fn set_page_size(&mut self, rows: usize) {
        self.page_size = rows.max(1);
    }

    /// Parsed index of the entry under the cursor.
    pub fn current_index(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    pub fn current_entry(&self) -> Option<&AbiEntry> {
        self.current_index()
            .and_then(|idx| self.session.entries().get(idx))
    }

    /// The selection rendered in the previewed format.
    pub fn rendered(&self) -> String {
        render(&self.session.selected_entries(), self.format, &self.options)
    }

    pub fn set_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.status_message = Some((message.into(), kind));
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.feedback.mark(now);
    }

    /// Drop the copy indicator once it has expired.
    pub fn tick(&mut self, now: Instant) {
        self.feedback.expire(now);
    }

    /// Re-parse freshly read input, replacing the session.
    pub fn apply_reload(&mut self, text: &str) {
        match self.session.load(text) {
            Ok(count) => self.set_status(format!("Loaded {} entries", count), StatusKind::Success),
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
        self.preview_scroll = 0;
        self.refresh_visible();
    }

    /// Recompute the visible list and keep the cursor in range.
    fn refresh_visible(&mut self) {
        self.visible = self.session.visible(&self.criteria);
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        if is_interrupt(&key) {
            return Effect::Quit;
        }
        self.status_message = None;
        match self.mode {
            Mode::Help => {
                self.mode = Mode::Normal;
                Effect::None
            }
            Mode::Search => {
                self.handle_search_key(key);
                Effect::None
            }
            Mode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Esc => {
                self.search_input.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => self.search_input.push(c),
            _ => return,
        }
        self.criteria.search = self.search_input.clone();
        self.refresh_visible();
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Effect {
        let last = self.visible.len().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.cursor = (self.cursor + 1).min(last),
            KeyCode::PageUp => self.cursor = self.cursor.saturating_sub(self.page_size),
            KeyCode::PageDown => self.cursor = (self.cursor + self.page_size).min(last),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = last,

            KeyCode::Char(' ') => self.toggle_current(),
            KeyCode::Char('a') => self.session.select_all(),
            KeyCode::Char('n') => self.session.deselect_all(),
            KeyCode::Char('t') => {
                let dropped = self.session.trim_selection(&self.exclusions);
                self.set_status(
                    format!("Trimmed {} entries from the selection", dropped),
                    StatusKind::Info,
                );
            }

            KeyCode::Char('/') => {
                self.search_input = self.criteria.search.clone();
                self.mode = Mode::Search;
            }
            KeyCode::Char('f') => {
                self.criteria.cycle_kind();
                self.refresh_visible();
            }
            KeyCode::Esc => {
                self.criteria.clear();
                self.search_input.clear();
                self.refresh_visible();
            }

            KeyCode::Tab => {
                self.format = self.format.toggle();
                self.preview_scroll = 0;
            }
            KeyCode::Char('i') => self.options.cycle_indentation(),
            KeyCode::Char('m') => self.options.minified = !self.options.minified,
            KeyCode::Char('w') => self.options.word_wrap = !self.options.word_wrap,
            KeyCode::Char('[') => {
                self.preview_scroll = self.preview_scroll.saturating_sub(PREVIEW_SCROLL_STEP)
            }
            KeyCode::Char(']') => {
                self.preview_scroll = self.preview_scroll.saturating_add(PREVIEW_SCROLL_STEP)
            }

            KeyCode::Char('c') => return Effect::Copy,
            KeyCode::Char('s') => return Effect::Save,
            KeyCode::Char('r') => return Effect::Reload,
            KeyCode::Char('R') => {
                self.session.reset();
                self.preview_scroll = 0;
                self.refresh_visible();
                self.set_status("Session cleared", StatusKind::Info);
            }
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Char('q') => return Effect::Quit,
            _ => {}
        }
        Effect::None
    }

    fn toggle_current(&mut self) {
        if let Some(key) = self
            .current_index()
            .and_then(|idx| self.session.key_at(idx))
            .cloned()
        {
            self.session.toggle(&key);
        }
    }

    /// Status line text and how to emphasise it.
    pub fn status(&self) -> (String, StatusKind) {
        if let Some((message, kind)) = &self.status_message {
            return (message.clone(), *kind);
        }
        match self.mode {
            Mode::Search => (format!("Search: {}_", self.search_input), StatusKind::Info),
            Mode::Help => (String::new(), StatusKind::Info),
            Mode::Normal => match self.session.error() {
                Some(err) => (err.to_string(), StatusKind::Error),
                None => (self.normal_status(), StatusKind::Info),
            },
        }
    }

    fn normal_status(&self) -> String {
        if self.session.is_empty() {
            return "No ABI loaded (r: reload file)".to_string();
        }
        let total = self.session.entries().len();
        let selected = self.session.selected_count();
        let mut parts = vec![];
        if let Some(kind) = self.criteria.kind {
            parts.push(format!("type: {}", kind));
        }
        if !self.criteria.search.is_empty() {
            parts.push(format!("search: \"{}\"", self.criteria.search));
        }
        let counts = summary(self.session.selected_entries());
        if parts.is_empty() {
            format!("{} entries, {} selected ({})", total, selected, counts)
        } else {
            format!(
                "{} of {} entries [{}], {} selected ({})",
                self.visible.len(),
                total,
                parts.join(", "),
                selected,
                counts
            )
        }
    }
}

/// Keybinding hints for the footer.
pub fn footer_keys(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Search => &[("Enter", "apply"), ("Esc", "cancel"), ("Backspace", "delete")],
        Mode::Help => &[("any key", "close help")],
        Mode::Normal => &[
            ("Space", "toggle"),
            ("a/n", "all/none"),
            ("t", "trim"),
            ("/", "search"),
            ("f", "type"),
            ("Tab", "format"),
            ("c", "copy"),
            ("s", "save"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

//! Interactive ABI selection screen.
//!
//! A checkbox list of entries on the left with details of the entry under
//! the cursor, and a live preview of the rendered selection on the right.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::app::status_footer::{render_footer, render_status_line, StatusKind};
use super::app::{App, TuiApp};
use super::preview::{highlight_lines, stats_lines};
use super::select_state::{footer_keys, Effect, Mode, SelectState};
use super::ui::{screen_layout, DETAILS_HEIGHT};
use crate::abi::AbiEntry;
use crate::clipboard::copy_text;
use crate::files::{export_path, write_export};
use crate::render::EntryDetails;
use crate::session::AbiSession;
use crate::theme::{current_theme, Theme};

/// Selection application: terminal plus [`SelectState`].
pub struct SelectApp {
    app: App,
    state: SelectState,
    /// File re-read by `r`.
    source: PathBuf,
    export_dir: PathBuf,
    list_state: ListState,
    should_quit: bool,
}

impl SelectApp {
    pub fn new(state: SelectState, source: PathBuf, export_dir: PathBuf) -> Result<Self> {
        let app = App::new(Duration::from_millis(250))?;
        Ok(Self {
            app,
            state,
            source,
            export_dir,
            list_state: ListState::default(),
            should_quit: false,
        })
    }

    /// Final session, for reporting after the screen closes.
    pub fn into_session(self) -> AbiSession {
        self.state.session().clone()
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Quit => self.should_quit = true,
            Effect::Copy => self.copy_preview(),
            Effect::Save => self.save_preview(),
            Effect::Reload => self.reload(),
        }
    }

    fn copy_preview(&mut self) {
        let text = self.state.rendered();
        match copy_text(&text) {
            Ok(result) => {
                self.state.mark_copied(Instant::now());
                let message = result.message(self.state.format().label());
                self.state.set_status(message, StatusKind::Success);
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.state.set_status(e.to_string(), StatusKind::Error);
            }
        }
    }

    fn save_preview(&mut self) {
        let path = export_path(&self.export_dir, None, self.state.format());
        match write_export(&path, &self.state.rendered()) {
            Ok(result) => self.state.set_status(result.message(), StatusKind::Success),
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.state.set_status(e.to_string(), StatusKind::Error);
            }
        }
    }

    fn reload(&mut self) {
        match std::fs::read_to_string(&self.source) {
            Ok(text) => self.state.apply_reload(&text),
            Err(e) => self.state.set_status(
                format!("Failed to read {}: {}", self.source.display(), e),
                StatusKind::Error,
            ),
        }
    }

    /// Render the help modal overlay.
    pub fn render_help_modal(frame: &mut Frame, area: Rect) {
        let theme = current_theme();

        let modal_width = 56.min(area.width.saturating_sub(4));
        let modal_height = 34.min(area.height.saturating_sub(2));
        let x = (area.width - modal_width) / 2;
        let y = (area.height - modal_height) / 2;
        let modal_area = Rect::new(x, y, modal_width, modal_height);

        frame.render_widget(Clear, modal_area);

        let help = Paragraph::new(build_help_text(&theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(help, modal_area);
    }
}

impl TuiApp for SelectApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let effect = self.state.handle_key(key);
        self.perform(effect);
        Ok(())
    }

    fn on_tick(&mut self) {
        self.state.tick(Instant::now());
    }

    fn draw(&mut self) -> Result<()> {
        let (_, height) = self.app.size()?;
        // status, footer, details box and the list borders
        let list_rows = height.saturating_sub(2 + DETAILS_HEIGHT + 2);
        self.state.set_page_size(list_rows as usize);

        let theme = current_theme();
        let state = &self.state;
        let list_state = &mut self.list_state;
        list_state.select(state.current_index().map(|_| state.cursor()));

        let (status_text, status_kind) = state.status();
        let footer = footer_keys(state.mode());
        let mode = state.mode();
        let selected = state.session().selected_entries();
        let rendered = state.rendered();
        let stats = stats_lines(&selected, &rendered);
        let copy_label = state.feedback().label(Instant::now());

        self.app.draw(|frame| {
            let area = frame.area();
            let layout = screen_layout(area);

            render_entry_list(frame, layout.list, state, list_state, &theme);
            render_details(frame, layout.details, state.current_entry(), &theme);
            render_preview(
                frame,
                layout.preview,
                state,
                &rendered,
                &stats,
                copy_label,
                &theme,
            );

            render_status_line(frame, layout.status, &status_text, status_kind);
            render_footer(frame, layout.footer, footer);

            if mode == Mode::Help {
                Self::render_help_modal(frame, area);
            }
        })?;

        Ok(())
    }
}

fn render_entry_list(
    frame: &mut Frame,
    area: Rect,
    state: &SelectState,
    list_state: &mut ListState,
    theme: &Theme,
) {
    let session = state.session();
    let items: Vec<ListItem> = state
        .visible()
        .iter()
        .filter_map(|&idx| {
            let key = session.key_at(idx)?;
            let checked = session.is_index_selected(idx);
            let marker = if checked { "[x] " } else { "[ ] " };
            let marker_style = if checked {
                theme.accent_style()
            } else {
                theme.text_secondary_style()
            };
            Some(ListItem::new(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(key.to_string(), theme.text_style()),
            ])))
        })
        .collect();

    let title = format!(
        " Entries {}/{} ",
        session.selected_count(),
        session.entries().len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(title);

    if items.is_empty() {
        let message = match session.error() {
            Some(err) => Line::from(Span::styled(err.summary(), theme.error_style())),
            None if session.is_empty() => {
                Line::from(Span::styled("No ABI loaded", theme.text_secondary_style()))
            }
            None => Line::from(Span::styled(
                "No entries match the filter",
                theme.text_secondary_style(),
            )),
        };
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.cursor_style());
    frame.render_stateful_widget(list, area, list_state);
}

fn render_details(frame: &mut Frame, area: Rect, entry: Option<&AbiEntry>, theme: &Theme) {
    let lines: Vec<Line> = match entry {
        Some(entry) => {
            let details = EntryDetails::from_entry(entry);
            let mut lines = vec![Line::from(Span::styled(
                details.header(),
                theme.accent_bold_style(),
            ))];
            lines.extend(
                details
                    .lines()
                    .into_iter()
                    .skip(1)
                    .map(|l| Line::from(Span::styled(l, theme.text_style()))),
            );
            lines
        }
        None => vec![],
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(" Details ");
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_preview(
    frame: &mut Frame,
    area: Rect,
    state: &SelectState,
    rendered: &str,
    stats: &[String],
    copy_label: &str,
    theme: &Theme,
) {
    let options = state.options();
    let inner_width = area.width.saturating_sub(2) as usize;
    let wrap_width = if options.word_wrap { inner_width } else { 0 };

    // minified output is shown without token colours
    let plain = Theme::monochrome();
    let token_theme = if options.minified { &plain } else { theme };
    let mut lines = highlight_lines(rendered, wrap_width, token_theme);
    lines.push(Line::from(""));
    lines.extend(
        stats
            .iter()
            .map(|s| Line::from(Span::styled(s.clone(), theme.text_secondary_style()))),
    );

    let max_scroll = (lines.len() as u16).saturating_sub(1);
    let scroll = state.preview_scroll().min(max_scroll);

    let indent = if options.minified {
        "minified".to_string()
    } else {
        format!("indent {}", options.indentation)
    };
    let title = Line::from(vec![
        Span::raw(format!(" {} ", state.format().label())),
        Span::styled(format!("({}) ", indent), theme.text_secondary_style()),
        Span::styled(
            format!("[{}] ", copy_label),
            theme.accent_style().add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(title);

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

/// Build the help text lines for the help modal.
fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let section = |title: &'static str| {
        Line::from(Span::styled(title, Style::default().fg(theme.text_secondary)))
    };
    let key = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), Style::default().fg(theme.accent)),
            Span::raw(desc),
        ])
    };

    vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Navigation"),
        key("\u{2191}/\u{2193} j/k", "Move"),
        key("PgUp/PgDn", "Page up/down"),
        key("Home/End", "First/last"),
        Line::from(""),
        section("Selection"),
        key("Space", "Toggle entry"),
        key("a / n", "Select all / none"),
        key("t", "Trim boilerplate from selection"),
        Line::from(""),
        section("Filtering"),
        key("/", "Search name or key"),
        key("f", "Cycle entry type"),
        key("Esc", "Clear filters"),
        Line::from(""),
        section("Preview"),
        key("Tab", "JSON / human readable"),
        key("i", "Indent 2 / 4"),
        key("m", "Minify"),
        key("w", "Word wrap"),
        key("[ / ]", "Scroll preview"),
        Line::from(""),
        section("Export"),
        key("c", "Copy preview to clipboard"),
        key("s", "Save to export directory"),
        key("r", "Reload input file"),
        key("R", "Clear session"),
        Line::from(""),
        key("?", "This help"),
        key("q", "Quit"),
        Line::from(""),
        section("Press any key to close"),
    ]
}

/// Open the selection screen on `source` and run it until quit.
pub fn run(state: SelectState, source: &Path, export_dir: PathBuf) -> Result<AbiSession> {
    let mut app = SelectApp::new(state, source.to_path_buf(), export_dir)?;
    app.run()?;
    Ok(app.into_session())
}

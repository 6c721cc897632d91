use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use textwrap;

use super::app::{App, Focus, InputMode};
use crate::internal::notification::SAVE_LABEL_IDLE;
use crate::internal::samples::SUGGESTIONS;
use crate::utils::theme::TuiTheme;

#[tracing::instrument(skip(app, f))]
pub fn draw(app: &mut App, f: &mut Frame) {
    // High level render timing. This is conditionally logged at the end of draw
    // when performance metrics are enabled and in debug builds.
    let start = std::time::Instant::now();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_top_bar(app, f, chunks[0]);
    render_search_bar(app, f, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[2]);

    render_result(app, f, main_chunks[0]);
    render_side_panel(app, f, main_chunks[1]);

    render_status_bar(app, f, chunks[3]);

    // Render notification overlay if present
    if app.notification.is_some() {
        render_notification(app, f);
    }

    // Conditional render timing: only emit when the config allows it and during debug builds
    if app.config.logging.enable_performance_metrics && cfg!(debug_assertions) {
        tracing::debug!(elapsed = ?start.elapsed(), "render.draw");
    }
}

fn render_result(app: &App, f: &mut Frame, area: Rect) {
    let text_width = (area.width.saturating_sub(4)).max(20) as usize;

    let mut lines: Vec<Line> = Vec::new();
    match &app.result {
        Some(card) => {
            let mut headword_spans = vec![Span::styled(
                card.headword.clone(),
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )];
            if !card.phonetic.is_empty() {
                headword_spans.push(Span::styled(
                    format!("  {}", card.phonetic),
                    Style::default().fg(app.theme.muted),
                ));
            }
            lines.push(Line::from(headword_spans));
            lines.push(Line::default());

            for wrapped in wrap_text_block(&card.definition, text_width) {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(app.theme.foreground),
                )));
            }
            lines.push(Line::default());

            for wrapped in wrap_text_block(&card.example, text_width) {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    Style::default()
                        .fg(app.theme.muted)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            lines.push(Line::default());

            lines.push(Line::from(Span::styled(
                "Synonyms:",
                Style::default().fg(app.theme.accent),
            )));
            let synonyms = match card.synonyms.is_empty() {
                true => "No synonyms found".to_string(),
                false => card.synonyms.join(", "),
            };
            for wrapped in wrap_text_block(&synonyms, text_width) {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(app.theme.foreground),
                )));
            }
            lines.push(Line::default());

            let save_label = app
                .save_notice
                .as_ref()
                .map(|notice| notice.label)
                .unwrap_or(SAVE_LABEL_IDLE);
            let save_style = match &app.save_notice {
                Some(_) => Style::default()
                    .fg(app.theme.selection_fg)
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(app.theme.foreground),
            };
            let mut controls = vec![Span::styled(format!("[ s: {} ]", save_label), save_style)];
            // Pronunciation is only offered when the service supplied audio
            if card.audio_url.is_some() {
                controls.push(Span::raw("  "));
                controls.push(Span::styled(
                    "[ p: Pronounce ]",
                    Style::default().fg(app.theme.foreground),
                ));
            }
            lines.push(Line::from(controls));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Press / and type a word to look it up.",
                Style::default().fg(app.theme.muted),
            )));
            lines.push(Line::from(Span::styled(
                "Enter fetches the highlighted suggestion.",
                Style::default().fg(app.theme.muted),
            )));
        }
    }

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(format!("📖 Word Dictionary v{}", app.app_version))
                .title_style(Style::default().fg(app.theme.foreground)),
        )
        .style(Style::default().bg(app.theme.background));
    f.render_widget(p, area);
}

fn render_side_panel(app: &mut App, f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    render_word_of_the_day(app, f, chunks[0]);

    let list_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(chunks[1]);

    let suggestion_items: Vec<ListItem> = SUGGESTIONS
        .iter()
        .map(|suggestion| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    suggestion.word,
                    Style::default().fg(app.theme.foreground),
                ),
                Span::styled(
                    format!(" ({})", suggestion.hint),
                    Style::default().fg(app.theme.muted),
                ),
            ]))
        })
        .collect();
    render_word_list(app, f, list_chunks[0], Focus::Suggestions, suggestion_items);

    let history_items = numbered_items(&app.history.words, &app.theme);
    render_word_list(app, f, list_chunks[1], Focus::History, history_items);

    let favorite_items = numbered_items(&app.favorites.words, &app.theme);
    render_word_list(app, f, list_chunks[2], Focus::Favorites, favorite_items);
}

fn render_word_of_the_day(app: &App, f: &mut Frame, area: Rect) {
    let fact = app.word_of_the_day;
    let text_width = (area.width.saturating_sub(4)).max(20) as usize;

    let mut lines = vec![Line::from(Span::styled(
        fact.word,
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    ))];
    for wrapped in wrap_text_block(fact.definition, text_width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(app.theme.foreground),
        )));
    }
    lines.push(Line::default());
    for wrapped in wrap_text_block(&fact.did_you_know(), text_width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title("Word of the Day")
                .title_style(Style::default().fg(app.theme.foreground)),
        )
        .style(Style::default().bg(app.theme.background));
    f.render_widget(p, area);
}

fn numbered_items(words: &[String], theme: &TuiTheme) -> Vec<ListItem<'static>> {
    words
        .iter()
        .enumerate()
        .map(|(idx, word)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<3}", idx + 1),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(word.clone(), Style::default().fg(theme.foreground)),
            ]))
        })
        .collect()
}

fn render_word_list(app: &mut App, f: &mut Frame, area: Rect, panel: Focus, items: Vec<ListItem>) {
    let focused = app.focus == panel;
    let title = match panel {
        Focus::Suggestions => panel.title().to_string(),
        Focus::History => format!("{} ({})", panel.title(), app.history.words.len()),
        Focus::Favorites => format!("{} ({})", panel.title(), app.favorites.words.len()),
    };

    let border_style = match focused {
        true => Style::default().fg(app.theme.accent),
        false => Style::default().fg(app.theme.border),
    };
    let title_style = match focused {
        true => Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
        false => Style::default().fg(app.theme.foreground),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title)
                .title_style(title_style),
        )
        .style(Style::default().bg(app.theme.background))
        .highlight_style(
            Style::default()
                .bg(app.theme.selection_bg)
                .fg(app.theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        );

    let state = match panel {
        Focus::Suggestions => &mut app.suggestions_state,
        Focus::History => &mut app.history_state,
        Focus::Favorites => &mut app.favorites_state,
    };
    f.render_stateful_widget(list, area, state);
}

fn render_top_bar(app: &App, f: &mut Frame, area: Rect) {
    // Show the active palette in the top-right corner
    let top_bar_text = format!("Theme: {}", app.theme_mode);

    let p = Paragraph::new(top_bar_text)
        .alignment(Alignment::Right)
        .block(Block::default().style(Style::default().bg(app.theme.background)))
        .style(Style::default().fg(app.theme.foreground));
    f.render_widget(p, area);
}

fn render_search_bar(app: &App, f: &mut Frame, area: Rect) {
    let (border_style, title_style) = match app.input_mode {
        InputMode::Search => (
            Style::default().fg(app.theme.selection_bg),
            Style::default()
                .fg(app.theme.selection_fg)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD),
        ),
        InputMode::Normal => (
            Style::default().fg(app.theme.border),
            Style::default().fg(app.theme.foreground),
        ),
    };

    // Display the search input with a cursor while typing
    let (input_line, input_style) = match (app.input_mode, app.search_input.is_empty()) {
        (InputMode::Search, _) => (
            format!("{}█", app.search_input),
            Style::default().fg(app.theme.foreground),
        ),
        (InputMode::Normal, true) => (
            "Press / to search for a word".to_string(),
            Style::default().fg(app.theme.muted),
        ),
        (InputMode::Normal, false) => (
            app.search_input.clone(),
            Style::default().fg(app.theme.foreground),
        ),
    };

    let search_box = Paragraph::new(Line::from(Span::styled(input_line, input_style)))
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Search ")
                .title_style(title_style),
        );
    f.render_widget(search_box, area);
}

fn render_status_bar(app: &App, f: &mut Frame, area: Rect) {
    let status = match (app.is_loading(), &app.input_mode) {
        (true, _) => {
            // Show animated spinner while a lookup is in flight
            format!("{} Looking up word...", app.get_spinner_char())
        }
        (false, &InputMode::Search) => "Type a word | Enter: Look up | Esc: Cancel".to_string(),
        (false, &InputMode::Normal) => format!(
            "/: Search | Tab: Panel | j/k: Nav | Enter: Look up | s: Save | x: Remove | t: {} | Esc: Dismiss | q: Quit",
            app.theme_mode.toggle_label()
        ),
    };

    let p = Paragraph::new(status)
        .block(Block::default().style(Style::default().bg(app.theme.selection_bg)))
        .style(Style::default().fg(app.theme.selection_fg));
    f.render_widget(p, area);
}

fn render_notification(app: &App, f: &mut Frame) {
    if let Some(notification) = &app.notification {
        let area = f.area();

        // Create centered popup
        let popup_width = (notification.message.len() as u16 + 4).min(area.width - 4);
        let popup_height = 3;

        let popup_x = (area.width.saturating_sub(popup_width)) / 2;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2;

        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        // Color code based on notification type
        use crate::internal::notification::NotificationType;
        let (bg_color, title) = match notification.notification_type {
            NotificationType::Info => (Color::Blue, "Info"),
            NotificationType::Warning => (Color::Yellow, "Warning"),
            NotificationType::Error => (Color::Red, "Error"),
        };

        let popup = Paragraph::new(notification.message.as_str())
            .style(
                Style::default()
                    .bg(bg_color)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border))
                    .title(title)
                    .title_style(Style::default().fg(app.theme.foreground)),
            )
            .alignment(Alignment::Center);

        f.render_widget(Clear, popup_area);
        f.render_widget(popup, popup_area);
    }
}

/// Wrap a block of prose into display lines at the given width.
pub fn wrap_text_block(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|line| line.to_string())
        .collect()
}

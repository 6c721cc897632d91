use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::widgets::ListState;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{DictionaryClient, LookupOutcome};
use crate::config::AppConfig;
use crate::internal::favorites::Favorites;
use crate::internal::history::History;
use crate::internal::models::WordCard;
use crate::internal::notification::{Notification, SaveNotice};
use crate::internal::samples::{self, SUGGESTIONS, WordFact};
use crate::utils::theme::{ThemeMode, TuiTheme};

pub const NOT_FOUND_MESSAGE: &str = "Word not found! Try another.";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching word. Try again later.";

/// Panels the list cursor can sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Suggestions,
    History,
    Favorites,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Suggestions => Focus::History,
            Focus::History => Focus::Favorites,
            Focus::Favorites => Focus::Suggestions,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Focus::Suggestions => "Suggestions",
            Focus::History => "History",
            Focus::Favorites => "Favorites",
        }
    }
}

/// Input modes for the UI.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Search,
}

/// Actions/messages sent through the app action channel.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    NavigateUp,
    NavigateDown,
    Enter,
    FocusNext,
    Lookup(String),
    WordLoaded(WordCard),
    WordNotFound(String),
    Error(String),
    SaveFavorite,
    RemoveSelected,
    PlayAudio,
    ToggleTheme,
    ClearNotification,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub app_version: String,
    pub input_mode: InputMode,
    pub focus: Focus,
    pub search_input: String,
    pub result: Option<WordCard>,
    pub pending_lookups: usize,
    pub word_of_the_day: &'static WordFact,
    pub history: History,
    pub favorites: Favorites,
    pub suggestions_state: ListState,
    pub history_state: ListState,
    pub favorites_state: ListState,
    pub notification: Option<Notification>,
    pub save_notice: Option<SaveNotice>,
    pub theme_mode: ThemeMode,
    pub theme: TuiTheme,
    pub spinner_state: usize,
    pub last_spinner_update: Option<tokio::time::Instant>,
    pub client: Arc<DictionaryClient>,
    pub config: AppConfig,
    pub action_tx: UnboundedSender<Action>,
    pub action_rx: UnboundedReceiver<Action>,
}

impl App {
    #[tracing::instrument]
    pub fn new() -> Self {
        let start = std::time::Instant::now();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let config = AppConfig::load();

        let theme_mode = ThemeMode::from_name(&config.theme_name);
        let theme = TuiTheme::for_mode(theme_mode);
        tracing::info!(
            "App config: theme_name='{}' -> {}",
            config.theme_name,
            theme_mode
        );

        let history = match History::load_or_create() {
            Ok(h) => h,
            Err(e) => {
                tracing::error!("Failed to load history: {}", e);
                History::new()
            }
        };

        let favorites = match Favorites::load_or_create() {
            Ok(f) => f,
            Err(e) => {
                tracing::error!("Failed to load favorites: {}", e);
                Favorites::new()
            }
        };

        let word_of_the_day = samples::random_word_fact();

        let mut suggestions_state = ListState::default();
        suggestions_state.select(Some(0));

        tracing::info!(elapsed = ?start.elapsed(), "App initialized");

        Self {
            running: true,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            input_mode: InputMode::Normal,
            focus: Focus::Suggestions,
            search_input: String::new(),
            result: None,
            pending_lookups: 0,
            word_of_the_day,
            history,
            favorites,
            suggestions_state,
            history_state: ListState::default(),
            favorites_state: ListState::default(),
            notification: None,
            save_notice: None,
            theme_mode,
            theme,
            spinner_state: 0,
            last_spinner_update: None,
            client: Arc::new(DictionaryClient::new()),
            config,
            action_tx,
            action_rx,
        }
    }

    /// Set an info notification
    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::info(message));
    }

    /// Set an error notification
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::error(message));
    }

    /// Clear the current notification
    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    pub fn is_loading(&self) -> bool {
        self.pending_lookups > 0
    }

    pub fn get_spinner_char(&self) -> &'static str {
        const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
        SPINNER_FRAMES[self.spinner_state % SPINNER_FRAMES.len()]
    }

    pub async fn run(&mut self, mut tui: crate::tui::Tui) -> Result<()> {
        let mut event_interval = tokio::time::interval(std::time::Duration::from_millis(16));

        loop {
            // Update spinner animation every 100ms
            let now = tokio::time::Instant::now();
            match self.last_spinner_update {
                Some(last_update) => {
                    if now.duration_since(last_update).as_millis() >= 100 {
                        self.spinner_state = self.spinner_state.wrapping_add(1);
                        self.last_spinner_update = Some(now);
                    }
                }
                None => {
                    self.last_spinner_update = Some(now);
                }
            }

            // Auto-dismiss expired notifications
            if let Some(notification) = &self.notification
                && notification.should_dismiss()
            {
                self.clear_notification();
            }

            // Revert the save control once its notice expires
            if let Some(notice) = &self.save_notice
                && notice.should_dismiss()
            {
                self.save_notice = None;
            }

            tui.draw(|f| self.ui(f))?;

            tokio::select! {
                _ = event_interval.tick() => {
                    // Check for terminal events
                    if event::poll(std::time::Duration::from_millis(0))?
                        && let Event::Key(key) = event::read()?
                            && key.kind == KeyEventKind::Press {
                                self.handle_key_event(key);
                            }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await;
                }
            }

            if !self.running {
                break;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Search => self.handle_search_input(key),
            InputMode::Normal => self.handle_normal_input(key),
        }
    }

    fn handle_search_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.search_input.push(c);
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Enter => {
                let word = self.search_input.trim().to_string();
                if !word.is_empty() {
                    let _ = self.action_tx.send(Action::Lookup(word));
                }
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    fn handle_normal_input(&mut self, key: KeyEvent) {
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                None
            }
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NavigateDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::NavigateUp),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Char('x') => Some(Action::RemoveSelected),
            KeyCode::Char('s') => Some(Action::SaveFavorite),
            KeyCode::Char('p') => Some(Action::PlayAudio),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Esc => Some(Action::ClearNotification),
            _ => None,
        };

        if let Some(action) = action {
            let _ = self.action_tx.send(action);
        }
    }

    pub async fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if let Err(e) = self.history.save() {
                    tracing::error!("Failed to save history: {}", e);
                }
                if let Err(e) = self.favorites.save() {
                    tracing::error!("Failed to save favorites: {}", e);
                }
                self.running = false;
            }
            Action::NavigateDown => self.select_next(),
            Action::NavigateUp => self.select_prev(),
            Action::FocusNext => {
                self.focus = self.focus.next();
                let len = self.focused_len();
                let state = self.focused_state_mut();
                if state.selected().is_none() && len > 0 {
                    state.select(Some(0));
                }
            }
            Action::Enter => {
                if let Some(word) = self.selected_word() {
                    // Mirror the word into the search box so the user can
                    // see what is being looked up.
                    self.search_input = word.clone();
                    let _ = self.action_tx.send(Action::Lookup(word));
                }
            }
            Action::Lookup(word) => {
                let word = word.trim().to_string();
                if word.is_empty() {
                    return;
                }

                self.pending_lookups += 1;
                let client = self.client.clone();
                let tx = self.action_tx.clone();

                tokio::spawn(async move {
                    match client.lookup(&word).await {
                        Ok(LookupOutcome::Found(card)) => {
                            let _ = tx.send(Action::WordLoaded(card));
                        }
                        Ok(LookupOutcome::NotFound) => {
                            let _ = tx.send(Action::WordNotFound(word));
                        }
                        Err(e) => {
                            tracing::error!("Lookup for '{}' failed: {:#}", word, e);
                            let _ = tx.send(Action::Error(FETCH_ERROR_MESSAGE.to_string()));
                        }
                    }
                });
            }
            Action::WordLoaded(card) => {
                // Whichever response lands last is the one on screen.
                self.pending_lookups = self.pending_lookups.saturating_sub(1);
                self.history.add(&card.headword);
                if let Err(e) = self.history.save() {
                    tracing::error!("Failed to save history: {}", e);
                }
                self.save_notice = None;
                self.result = Some(card);
            }
            Action::WordNotFound(word) => {
                self.pending_lookups = self.pending_lookups.saturating_sub(1);
                tracing::debug!("No definitions found for '{}'", word);
                self.notify_info(NOT_FOUND_MESSAGE);
            }
            Action::Error(message) => {
                self.pending_lookups = self.pending_lookups.saturating_sub(1);
                self.notify_error(message);
            }
            Action::SaveFavorite => {
                let Some(card) = &self.result else { return };
                let headword = card.headword.clone();
                match self.favorites.add(&headword) {
                    true => {
                        if let Err(e) = self.favorites.save() {
                            tracing::error!("Failed to save favorites: {}", e);
                        }
                        self.save_notice = Some(SaveNotice::saved());
                    }
                    false => {
                        self.save_notice = Some(SaveNotice::already_saved());
                    }
                }
            }
            Action::RemoveSelected => self.remove_selected(),
            Action::PlayAudio => {
                // The hint is only offered when a pronunciation exists;
                // without one the key does nothing.
                let audio_url = self
                    .result
                    .as_ref()
                    .and_then(|card| card.audio_url.clone());
                if let Some(url) = audio_url
                    && let Err(e) = open::that(&url)
                {
                    tracing::error!("Failed to open audio '{}': {}", url, e);
                    self.notify_error("Could not play pronunciation audio");
                }
            }
            Action::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggle();
                self.theme = TuiTheme::for_mode(self.theme_mode);
            }
            Action::ClearNotification => self.clear_notification(),
        }
    }

    fn remove_selected(&mut self) {
        match self.focus {
            Focus::Suggestions => {}
            Focus::History => {
                if let Some(index) = self.history_state.selected()
                    && self.history.remove_at(index).is_some()
                {
                    if let Err(e) = self.history.save() {
                        tracing::error!("Failed to save history: {}", e);
                    }
                    Self::clamp_selection(&mut self.history_state, self.history.words.len());
                }
            }
            Focus::Favorites => {
                if let Some(index) = self.favorites_state.selected()
                    && let Some(removed) = self.favorites.remove_at(index)
                {
                    if let Err(e) = self.favorites.save() {
                        tracing::error!("Failed to save favorites: {}", e);
                    }
                    // The save control must stop claiming the word on
                    // screen is saved.
                    if let Some(card) = &self.result
                        && card.headword == removed
                    {
                        self.save_notice = None;
                    }
                    Self::clamp_selection(&mut self.favorites_state, self.favorites.words.len());
                }
            }
        }
    }

    fn clamp_selection(state: &mut ListState, len: usize) {
        match len {
            0 => state.select(None),
            _ => {
                if let Some(i) = state.selected()
                    && i >= len
                {
                    state.select(Some(len - 1));
                }
            }
        }
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Suggestions => SUGGESTIONS.len(),
            Focus::History => self.history.words.len(),
            Focus::Favorites => self.favorites.words.len(),
        }
    }

    fn focused_state_mut(&mut self) -> &mut ListState {
        match self.focus {
            Focus::Suggestions => &mut self.suggestions_state,
            Focus::History => &mut self.history_state,
            Focus::Favorites => &mut self.favorites_state,
        }
    }

    fn selected_word(&self) -> Option<String> {
        match self.focus {
            Focus::Suggestions => self
                .suggestions_state
                .selected()
                .and_then(|i| SUGGESTIONS.get(i))
                .map(|s| s.word.to_string()),
            Focus::History => self
                .history_state
                .selected()
                .and_then(|i| self.history.words.get(i))
                .cloned(),
            Focus::Favorites => self
                .favorites_state
                .selected()
                .and_then(|i| self.favorites.words.get(i))
                .cloned(),
        }
    }

    fn select_next(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }

        let state = self.focused_state_mut();
        let i = match state.selected() {
            Some(i) => match i {
                n if n >= len - 1 => 0,
                _ => i + 1,
            },
            None => 0,
        };
        state.select(Some(i));
    }

    fn select_prev(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }

        let state = self.focused_state_mut();
        let i = match state.selected() {
            Some(i) => match i {
                0 => len - 1,
                _ => i - 1,
            },
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn ui(&mut self, f: &mut Frame) {
        super::view::draw(self, f);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("running", &self.running)
            .field("focus", &self.focus)
            .field("input_mode", &self.input_mode)
            .field("pending_lookups", &self.pending_lookups)
            .finish_non_exhaustive()
    }
}

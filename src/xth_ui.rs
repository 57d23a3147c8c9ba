use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Span, Spans, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use crate::xth_art::{ART_HEIGHT, ART_WIDTH, stage_art};
use crate::xth_color::Palette;
use crate::xth_config::{Config, config_path, save_config_to};
use crate::xth_game::{GameState, GameStatus, GuessOutcome, MAX_GUESSES, WordList};
use crate::xth_text::{ASSETS, fill, status_text};

const MIN_TWIDTH: u16 = 60;
const MIN_THEIGHT: u16 = 22;
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
// one column per letter plus a separator between neighbours
const ALPHABET_WIDTH: u16 = 51;
const BOARD_WIDTH: u16 = ALPHABET_WIDTH + 4;
// art, gap, word, status, gap, alphabet, gap, button, plus borders
const BOARD_HEIGHT: u16 = ART_HEIGHT + 9;
const OPTION_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Help,
    New,
    Options,
    About,
    Exit,
}

// Top-row menu (key, label, action); Esc: Exit lives on the status row
const MENU_ITEMS: [(&str, &str, MenuAction); 4] = [
    ("F1", ASSETS.menu_help, MenuAction::Help),
    ("F2", ASSETS.menu_new, MenuAction::New),
    ("F7", ASSETS.menu_options, MenuAction::Options),
    ("F9", ASSETS.menu_about, MenuAction::About),
];
const EXIT_ITEM: (&str, &str) = ("Esc", ASSETS.menu_exit);

fn menu_action_for(code: KeyCode) -> Option<MenuAction> {
    match code {
        KeyCode::F(1) => Some(MenuAction::Help),
        KeyCode::F(2) => Some(MenuAction::New),
        KeyCode::F(7) => Some(MenuAction::Options),
        KeyCode::F(9) => Some(MenuAction::About),
        KeyCode::Esc => Some(MenuAction::Exit),
        _ => None,
    }
}

// Group runtime UI variables into a single structure to simplify passing them around
#[derive(Debug, Default)]
struct UiState {
    hover_index: Option<usize>,
    exit_status_hovered: bool,
    new_button_hovered: bool,
    modal_close_hovered: bool,
    showing_help: bool,
    showing_about: bool,
    showing_options: bool,
    showing_result: bool,
    showing_confirm: bool,
    // pending option values, applied on OK
    options_ascii: bool,
    options_confirm: bool,
    options_focus: usize,
    confirm_yes: bool,
    last_guess: Option<(char, GuessOutcome)>,
    // hit-test areas recorded by the last draw
    menu_rect: Option<Rect>,
    exit_rect: Option<Rect>,
    new_button_rect: Option<Rect>,
    alphabet_rect: Option<Rect>,
    modal_rect: Option<Rect>,
    modal_close_rect: Option<Rect>,
    options_rects: [Option<Rect>; OPTION_COUNT],
    confirm_yes_rect: Option<Rect>,
    confirm_no_rect: Option<Rect>,
}

impl UiState {
    fn any_modal(&self) -> bool {
        self.showing_help
            || self.showing_about
            || self.showing_options
            || self.showing_result
            || self.showing_confirm
    }

    fn close_modals(&mut self) {
        self.showing_help = false;
        self.showing_about = false;
        self.showing_options = false;
        self.showing_result = false;
        self.showing_confirm = false;
        self.modal_close_hovered = false;
    }

    fn reset_after_new_game(&mut self) {
        self.close_modals();
        self.last_guess = None;
        self.new_button_hovered = false;
    }

    fn clear_rects(&mut self) {
        self.menu_rect = None;
        self.exit_rect = None;
        self.new_button_rect = None;
        self.alphabet_rect = None;
        self.clear_modal_rects();
    }

    fn clear_modal_rects(&mut self) {
        self.modal_rect = None;
        self.modal_close_rect = None;
        self.options_rects = [None; OPTION_COUNT];
        self.confirm_yes_rect = None;
        self.confirm_no_rect = None;
    }
}

/// Controller: owns the game, its randomness and the view state
pub struct App {
    game: GameState,
    rng: StdRng,
    ui: UiState,
    config_path: Option<PathBuf>,
}

impl App {
    /// `config_path` is where option changes are saved; None keeps them in memory
    pub fn new(cfg: &Config, words: WordList, config_path: Option<PathBuf>) -> Self {
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let game = GameState::new(words, &mut rng);
        App {
            game,
            rng,
            ui: UiState::default(),
            config_path,
        }
    }

    fn persist(&self, cfg: &Config) {
        if let Some(path) = &self.config_path {
            save_config_to(path, cfg);
        }
    }

    fn start_new_game(&mut self) {
        self.game.reset(&mut self.rng);
        self.ui.reset_after_new_game();
        info!("new game started");
    }

    /// New game, asking first if that would abandon a round in progress
    fn request_new_game(&mut self, cfg: &Config) {
        let in_progress = !self.game.is_game_over() && !self.game.guessed_letters().is_empty();
        if cfg.confirm_new && in_progress {
            self.ui.close_modals();
            self.ui.showing_confirm = true;
            self.ui.confirm_yes = false;
        } else {
            self.start_new_game();
        }
    }

    /// Forward a typed character; only lowercase letters reach the game
    fn guess(&mut self, letter: char) {
        if !letter.is_ascii_lowercase() || self.game.is_game_over() {
            return;
        }
        let outcome = self.game.process_guess(letter);
        debug!("guess {:?}: {:?}", letter, outcome);
        self.ui.last_guess = Some((letter, outcome));
        if outcome.accepted() && self.game.is_game_over() {
            match self.game.status() {
                GameStatus::Won => info!("round won with {} misses", self.game.incorrect_guesses()),
                _ => info!("round lost, word was {:?}", self.game.secret_word()),
            }
            self.ui.showing_result = true;
        }
    }

    fn open_options(&mut self, cfg: &Config) {
        self.ui.close_modals();
        self.ui.options_ascii = cfg.ascii_art;
        self.ui.options_confirm = cfg.confirm_new;
        self.ui.options_focus = 0;
        self.ui.showing_options = true;
    }

    fn toggle_option(&mut self, index: usize) {
        match index {
            0 => self.ui.options_ascii = !self.ui.options_ascii,
            _ => self.ui.options_confirm = !self.ui.options_confirm,
        }
    }

    fn apply_options(&mut self, cfg: &mut Config) {
        cfg.ascii_art = self.ui.options_ascii;
        cfg.confirm_new = self.ui.options_confirm;
        self.persist(cfg);
        self.ui.close_modals();
        debug!("options applied: {:?}", cfg);
    }

    /// Run a menu action; false means exit was requested
    fn activate(&mut self, cfg: &Config, action: MenuAction) -> bool {
        match action {
            MenuAction::Help => self.ui.showing_help = true,
            MenuAction::New => self.request_new_game(cfg),
            MenuAction::Options => self.open_options(cfg),
            MenuAction::About => self.ui.showing_about = true,
            MenuAction::Exit => return false,
        }
        true
    }

    /// Route one terminal event; returns false once the user asked to exit
    pub fn handle_event(&mut self, cfg: &mut Config, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(cfg, key),
            Event::Mouse(mouse) => self.handle_mouse(cfg, mouse),
            _ => true,
        }
    }

    fn handle_key(&mut self, cfg: &mut Config, key: KeyEvent) -> bool {
        let KeyEvent { code, modifiers, kind, .. } = key;
        // Windows terminals report releases too; act on presses only
        if kind != KeyEventKind::Press {
            return true;
        }
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        if self.ui.showing_confirm {
            match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    self.ui.confirm_yes = !self.ui.confirm_yes
                }
                KeyCode::Char('y') | KeyCode::Char('Y') => self.start_new_game(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.ui.showing_confirm = false,
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if self.ui.confirm_yes {
                        self.start_new_game()
                    } else {
                        self.ui.showing_confirm = false
                    }
                }
                _ => {}
            }
        } else if self.ui.showing_options {
            match code {
                KeyCode::Esc => self.ui.close_modals(),
                KeyCode::Up | KeyCode::BackTab => {
                    self.ui.options_focus = (self.ui.options_focus + OPTION_COUNT - 1) % OPTION_COUNT
                }
                KeyCode::Down | KeyCode::Tab => {
                    self.ui.options_focus = (self.ui.options_focus + 1) % OPTION_COUNT
                }
                KeyCode::Char(' ') => self.toggle_option(self.ui.options_focus),
                KeyCode::Enter => self.apply_options(cfg),
                _ => {}
            }
        } else if self.ui.showing_help || self.ui.showing_about {
            self.ui.close_modals();
        } else if self.ui.showing_result {
            // Esc keeps the finished board on screen; anything else deals a new word
            match code {
                KeyCode::Esc => self.ui.showing_result = false,
                _ => self.start_new_game(),
            }
        } else if let Some(action) = menu_action_for(code) {
            return self.activate(cfg, action);
        } else if let KeyCode::Char(c) = code {
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                self.guess(c);
            }
        }
        true
    }

    fn handle_mouse(&mut self, cfg: &mut Config, mouse: MouseEvent) -> bool {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.ui.hover_index = self.ui.menu_rect.and_then(|r| menu_item_at(r, col, row));
                self.ui.exit_status_hovered = hit(self.ui.exit_rect, col, row);
                self.ui.new_button_hovered = hit(self.ui.new_button_rect, col, row);
                self.ui.modal_close_hovered = hit(self.ui.modal_close_rect, col, row);
                true
            }
            MouseEventKind::Down(MouseButton::Left) => self.click(cfg, col, row),
            _ => true,
        }
    }

    fn click(&mut self, cfg: &mut Config, col: u16, row: u16) -> bool {
        if self.ui.showing_confirm {
            if hit(self.ui.confirm_yes_rect, col, row) {
                self.start_new_game();
            } else if hit(self.ui.confirm_no_rect, col, row) {
                self.ui.showing_confirm = false;
            }
        } else if self.ui.showing_options {
            let rects = self.ui.options_rects;
            if let Some(i) = (0..OPTION_COUNT).find(|&i| hit(rects[i], col, row)) {
                self.ui.options_focus = i;
                self.toggle_option(i);
            } else if hit(self.ui.modal_close_rect, col, row) {
                self.apply_options(cfg);
            }
        } else if self.ui.showing_help || self.ui.showing_about {
            if hit(self.ui.modal_close_rect, col, row) || !hit(self.ui.modal_rect, col, row) {
                self.ui.close_modals();
            }
        } else if self.ui.showing_result {
            if hit(self.ui.modal_rect, col, row) {
                self.start_new_game();
            }
        } else if let Some(i) = self.ui.menu_rect.and_then(|r| menu_item_at(r, col, row)) {
            return self.activate(cfg, MENU_ITEMS[i].2);
        } else if hit(self.ui.exit_rect, col, row) {
            return false;
        } else if hit(self.ui.new_button_rect, col, row) {
            self.request_new_game(cfg);
        } else if let Some(c) = self.ui.alphabet_rect.and_then(|r| letter_at(r, col, row)) {
            self.guess(c);
        }
        true
    }
}

fn hit(rect: Option<Rect>, col: u16, row: u16) -> bool {
    rect.map_or(false, |r| {
        col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
    })
}

/// Menu entry under (col, row) given the bordered menu block's area
fn menu_item_at(menu: Rect, col: u16, row: u16) -> Option<usize> {
    if row != menu.y + 1 {
        return None;
    }
    // border plus one space of padding
    let mut start = menu.x + 2;
    for (i, (key, label, _)) in MENU_ITEMS.iter().enumerate() {
        let w = (key.width() + 2 + label.width()) as u16;
        if col >= start && col < start + w {
            return Some(i);
        }
        start += w + 3;
    }
    None
}

/// Alphabet letter under (col, row) given the alphabet row's area
fn letter_at(alphabet: Rect, col: u16, row: u16) -> Option<char> {
    if !hit(Some(alphabet), col, row) {
        return None;
    }
    let offset = col - alphabet.x;
    if offset % 2 != 0 {
        return None;
    }
    ALPHABET.chars().nth((offset / 2) as usize)
}

fn draw<B: Backend>(f: &mut Frame<B>, app: &mut App, cfg: &Config, palette: &Palette) {
    let size = f.size();
    // If terminal too small, render a centered warning and skip normal UI
    if size.width < MIN_TWIDTH || size.height < MIN_THEIGHT {
        app.ui.clear_rects();
        let warn_lines = vec![
            Spans::from(Span::raw(ASSETS.tsmsg_line1)),
            Spans::from(Span::raw(fill(ASSETS.tsmsg_line2_fmt, &[&MIN_TWIDTH.to_string(), &MIN_THEIGHT.to_string()]))),
        ];
        let warn = Paragraph::new(Text::from(warn_lines))
            .block(Block::default().borders(Borders::ALL).title(ASSETS.tsmsg_title))
            .alignment(Alignment::Center);
        f.render_widget(Clear, size);
        let w = 40u16.min(size.width);
        let h = 4u16.min(size.height);
        f.render_widget(warn, center_rect(w, h, size));
        return;
    }

    // layout: top menu row, center board, bottom status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([Constraint::Length(3), Constraint::Min(BOARD_HEIGHT), Constraint::Length(3)].as_ref())
        .split(size);

    draw_menu(f, &mut app.ui, chunks[0], palette);
    draw_status_bar(f, app, chunks[2], palette);
    draw_board(f, app, cfg, chunks[1], palette);

    app.ui.clear_modal_rects();
    if app.ui.showing_help {
        let lines = [
            ASSETS.help_controls,
            ASSETS.help_guess,
            ASSETS.help_click,
            ASSETS.help_new,
            ASSETS.help_exit,
        ];
        let text: Vec<Spans> = lines.iter().map(|l| Spans::from(Span::raw(*l))).collect();
        draw_info_modal(f, &mut app.ui, ASSETS.menu_help, text, Alignment::Left, size, palette);
    } else if app.ui.showing_about {
        let version = fill(ASSETS.about_version_fmt, &[env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_AUTHORS")]);
        let text = vec![
            Spans::from(Span::styled(ASSETS.about_description, Style::default().add_modifier(Modifier::BOLD))),
            Spans::from(Span::raw("")),
            Spans::from(Span::raw(version)),
        ];
        draw_info_modal(f, &mut app.ui, ASSETS.menu_about, text, Alignment::Center, size, palette);
    } else if app.ui.showing_options {
        draw_options(f, &mut app.ui, size, palette);
    } else if app.ui.showing_confirm {
        draw_confirm(f, &mut app.ui, size, palette);
    } else if app.ui.showing_result {
        draw_result(f, app, size, palette);
    }
}

fn menu_styles(active: bool, palette: &Palette) -> (Style, Style) {
    if active {
        (
            Style::default().bg(palette.menu_key_bg_hover).fg(palette.menu_key_fg_hover).add_modifier(Modifier::BOLD),
            Style::default().bg(palette.menu_key_bg_hover).fg(palette.menu_key_fg_hover),
        )
    } else {
        (Style::default().fg(palette.menu_key_fg).add_modifier(Modifier::BOLD), Style::default())
    }
}

fn draw_menu<B: Backend>(f: &mut Frame<B>, ui: &mut UiState, area: Rect, palette: &Palette) {
    // per-item styled so hover/click mapping aligns with mouse offsets
    let mut spans_vec: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, label, _)) in MENU_ITEMS.iter().enumerate() {
        if i > 0 {
            spans_vec.push(Span::raw("   "));
        }
        let (key_style, rest_style) = menu_styles(ui.hover_index == Some(i) && !ui.any_modal(), palette);
        spans_vec.push(Span::styled(*key, key_style));
        spans_vec.push(Span::styled(format!(": {}", label), rest_style));
    }
    let menu = Paragraph::new(Spans::from(spans_vec))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    f.render_widget(menu, area);
    ui.menu_rect = Some(area);
}

fn draw_status_bar<B: Backend>(f: &mut Frame<B>, app: &mut App, area: Rect, palette: &Palette) {
    let game = &app.game;
    let mut left_text = fill(
        ASSETS.status_bar_fmt,
        &[
            &game.incorrect_guesses().to_string(),
            &MAX_GUESSES.to_string(),
            &game.secret_word().len().to_string(),
        ],
    );
    if let Some((c, outcome)) = app.ui.last_guess {
        let letter = c.to_string();
        let fmt = match outcome {
            GuessOutcome::Correct => Some(ASSETS.feedback_correct_fmt),
            GuessOutcome::Incorrect => Some(ASSETS.feedback_incorrect_fmt),
            GuessOutcome::Repeated => Some(ASSETS.feedback_repeated_fmt),
            GuessOutcome::Rejected => None,
        };
        if let Some(fmt) = fmt {
            left_text.push_str(&fill(fmt, &[&letter]));
            left_text.push(' ');
        }
    }

    let (right_key, right_rest) = EXIT_ITEM;
    let inner_w = area.width.saturating_sub(2) as usize;
    let left_w = left_text.as_str().width();
    // account for the ": " we add when rendering the right-hand key/rest
    let right_w = right_key.width() + 2 + right_rest.width();
    let mid_spaces = if inner_w > left_w + right_w + 1 { inner_w - left_w - right_w - 1 } else { 1 };
    let (key_style, rest_style) = menu_styles(app.ui.exit_status_hovered && !app.ui.any_modal(), palette);
    let status_spans = vec![
        Span::raw(left_text),
        Span::raw(" ".repeat(mid_spaces)),
        Span::styled(right_key, key_style),
        Span::styled(format!(": {}", right_rest), rest_style),
        Span::raw(" "),
    ];
    let status = Paragraph::new(Text::from(Spans::from(status_spans)))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    f.render_widget(status, area);
    app.ui.exit_rect = Some(Rect::new(
        area.x + 1 + (left_w + mid_spaces) as u16,
        area.y + 1,
        right_w as u16,
        1,
    ));
}

fn draw_board<B: Backend>(f: &mut Frame<B>, app: &mut App, cfg: &Config, area: Rect, palette: &Palette) {
    let game = &app.game;
    let board_area = center_rect(BOARD_WIDTH, BOARD_HEIGHT, area);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(ASSETS.board_title)
            .title_alignment(Alignment::Center),
        board_area,
    );
    let inner = Rect::new(board_area.x + 1, board_area.y + 1, board_area.width.saturating_sub(2), board_area.height.saturating_sub(2));
    let row = |offset: u16| Rect::new(inner.x, inner.y + offset, inner.width, 1);

    // gallows drawing selected by remaining guesses
    let art_color = match game.status() {
        GameStatus::Lost => palette.lost,
        _ if game.incorrect_guesses() > 0 => palette.figure,
        _ => palette.gallows,
    };
    let art_lines: Vec<Spans> = stage_art(game.stage(), cfg.ascii_art)
        .into_iter()
        .map(|l| Spans::from(Span::styled(l, Style::default().fg(art_color))))
        .collect();
    let art_rect = Rect::new(inner.x + inner.width.saturating_sub(ART_WIDTH) / 2, inner.y, ART_WIDTH, ART_HEIGHT);
    f.render_widget(Paragraph::new(Text::from(art_lines)), art_rect);

    let (word_color, status_color) = match game.status() {
        GameStatus::Won => (palette.won, palette.won),
        GameStatus::Lost => (palette.word, palette.lost),
        GameStatus::Playing => (palette.word, palette.word),
    };
    let spaced: Vec<String> = game.display_word().chars().map(String::from).collect();
    let word = Paragraph::new(Spans::from(Span::styled(
        spaced.join(" "),
        Style::default().fg(word_color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(word, row(ART_HEIGHT + 1));

    let status = Paragraph::new(Spans::from(Span::styled(status_text(game), Style::default().fg(status_color))))
        .alignment(Alignment::Center);
    f.render_widget(status, row(ART_HEIGHT + 2));

    // alphabet: guessed letters highlighted, the rest dimmed
    let mut letters: Vec<Span> = Vec::new();
    for (i, c) in ALPHABET.chars().enumerate() {
        if i > 0 {
            letters.push(Span::raw(" "));
        }
        let style = if game.is_guessed(c) {
            Style::default().fg(palette.letter_guessed).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.letter_unguessed)
        };
        letters.push(Span::styled(c.to_string(), style));
    }
    let alphabet_rect = Rect::new(inner.x + inner.width.saturating_sub(ALPHABET_WIDTH) / 2, inner.y + ART_HEIGHT + 4, ALPHABET_WIDTH, 1);
    f.render_widget(Paragraph::new(Spans::from(letters)), alphabet_rect);

    let btn_w = ASSETS.btn_new.width() as u16;
    let btn_rect = Rect::new(inner.x + inner.width.saturating_sub(btn_w) / 2, inner.y + ART_HEIGHT + 6, btn_w, 1);
    let hovered = app.ui.new_button_hovered && !app.ui.any_modal();
    draw_button(f, btn_rect, ASSETS.btn_new, hovered, palette);

    app.ui.alphabet_rect = Some(alphabet_rect);
    app.ui.new_button_rect = Some(btn_rect);
}

fn draw_button<B: Backend>(f: &mut Frame<B>, rect: Rect, label: &str, focused: bool, palette: &Palette) {
    let bg = if focused { palette.button_bg_focus } else { palette.button_bg };
    let style = Style::default().bg(bg).fg(palette.button_fg).add_modifier(Modifier::BOLD);
    let btn = Paragraph::new(Spans::from(Span::styled(label.to_string(), style)))
        .alignment(Alignment::Center)
        .block(Block::default());
    f.render_widget(btn, rect);
}

/// A bordered modal whose bottom row holds a button; returns the inner area and the button rect
fn modal_frame<B: Backend>(f: &mut Frame<B>, ui: &mut UiState, title: &str, rect: Rect, button: &str) -> (Rect, Rect) {
    ui.modal_rect = Some(rect);
    f.render_widget(Clear, rect);
    f.render_widget(Block::default().borders(Borders::ALL).title(title.to_string()), rect);
    let inner = Rect::new(rect.x + 1, rect.y + 1, rect.width.saturating_sub(2), rect.height.saturating_sub(2));
    let btn_w = button.width() as u16;
    let bx = inner.x + inner.width.saturating_sub(btn_w) / 2;
    let by = inner.y + inner.height.saturating_sub(1);
    (inner, Rect::new(bx, by, btn_w, 1))
}

fn draw_info_modal<B: Backend>(
    f: &mut Frame<B>,
    ui: &mut UiState,
    title: &str,
    text: Vec<Spans>,
    alignment: Alignment,
    size: Rect,
    palette: &Palette,
) {
    let height = text.len() as u16 + 4;
    let (inner, btn_rect) = modal_frame(f, ui, title, center_rect(44, height, size), ASSETS.btn_close);
    f.render_widget(Paragraph::new(Text::from(text)).alignment(alignment), inner);
    draw_button(f, btn_rect, ASSETS.btn_close, ui.modal_close_hovered, palette);
    ui.modal_close_rect = Some(btn_rect);
}

fn draw_options<B: Backend>(f: &mut Frame<B>, ui: &mut UiState, size: Rect, palette: &Palette) {
    let (inner, btn_rect) = modal_frame(f, ui, ASSETS.menu_options, center_rect(36, 8, size), ASSETS.btn_ok);
    let entries = [(ASSETS.opt_ascii_art, ui.options_ascii), (ASSETS.opt_confirm_new, ui.options_confirm)];
    for (i, (label, checked)) in entries.iter().enumerate() {
        let text = format!(" [{}] {}", if *checked { "x" } else { " " }, label);
        let style = if ui.options_focus == i {
            Style::default().bg(palette.menu_key_bg_hover).fg(palette.menu_key_fg_hover)
        } else {
            Style::default()
        };
        let line_rect = Rect::new(inner.x + 1, inner.y + 1 + i as u16, (text.width() as u16 + 1).min(inner.width), 1);
        f.render_widget(Paragraph::new(Spans::from(Span::styled(text, style))), line_rect);
        ui.options_rects[i] = Some(line_rect);
    }
    let hint_rect = Rect::new(inner.x, inner.y + 1 + OPTION_COUNT as u16 + 1, inner.width, 1);
    f.render_widget(Paragraph::new(ASSETS.opt_hint).alignment(Alignment::Center), hint_rect);
    draw_button(f, btn_rect, ASSETS.btn_ok, ui.modal_close_hovered, palette);
    ui.modal_close_rect = Some(btn_rect);
}

fn draw_confirm<B: Backend>(f: &mut Frame<B>, ui: &mut UiState, size: Rect, palette: &Palette) {
    let rect = center_rect(36, 7, size);
    ui.modal_rect = Some(rect);
    f.render_widget(Clear, rect);
    f.render_widget(Block::default().borders(Borders::ALL).title(ASSETS.menu_new), rect);
    let inner = Rect::new(rect.x + 1, rect.y + 1, rect.width.saturating_sub(2), rect.height.saturating_sub(2));
    let lines = vec![
        Spans::from(Span::raw(ASSETS.confirm_in_game)),
        Spans::from(Span::styled(ASSETS.confirm_new, Style::default().add_modifier(Modifier::BOLD))),
    ];
    f.render_widget(Paragraph::new(Text::from(lines)).alignment(Alignment::Center), inner);

    let yes_w = ASSETS.btn_yes.width() as u16;
    let no_w = ASSETS.btn_no.width() as u16;
    let gap = 4u16;
    let bx = inner.x + inner.width.saturating_sub(yes_w + gap + no_w) / 2;
    let by = inner.y + inner.height.saturating_sub(1);
    let yes_rect = Rect::new(bx, by, yes_w, 1);
    let no_rect = Rect::new(bx + yes_w + gap, by, no_w, 1);
    draw_button(f, yes_rect, ASSETS.btn_yes, ui.confirm_yes, palette);
    draw_button(f, no_rect, ASSETS.btn_no, !ui.confirm_yes, palette);
    ui.confirm_yes_rect = Some(yes_rect);
    ui.confirm_no_rect = Some(no_rect);
}

fn draw_result<B: Backend>(f: &mut Frame<B>, app: &mut App, size: Rect, palette: &Palette) {
    let game = &app.game;
    let (title, message, color) = match game.status() {
        GameStatus::Won => (ASSETS.win_title, ASSETS.win_message.to_string(), palette.won),
        _ => (ASSETS.loss_title, fill(ASSETS.loss_message_fmt, &[game.secret_word()]), palette.lost),
    };
    let rect = bottom_centered_block(40, 6, size);
    app.ui.modal_rect = Some(rect);
    f.render_widget(Clear, rect);
    f.render_widget(Block::default().borders(Borders::ALL).title(title), rect);
    let inner = Rect::new(rect.x + 1, rect.y + 1, rect.width.saturating_sub(2), rect.height.saturating_sub(2));
    let lines = vec![
        Spans::from(Span::styled(message, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Spans::from(Span::raw("")),
        Spans::from(Span::raw(ASSETS.result_hint)),
    ];
    f.render_widget(Paragraph::new(Text::from(lines)).alignment(Alignment::Center), inner);
}

pub fn run(cfg: &mut Config, words: WordList) -> Result<(), Box<dyn Error>> {
    let palette = Palette::detect();
    let mut app = App::new(cfg, words, config_path());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnableMouseCapture, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, cfg, &palette);

    // Save current options before exiting
    app.persist(cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, cfg: &mut Config, palette: &Palette) -> io::Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| draw(f, app, cfg, palette))?;

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);
        if event::poll(timeout)? && !app.handle_event(cfg, event::read()?) {
            info!("exit requested");
            return Ok(());
        }
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}

fn center_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn bottom_centered_block(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + r.height.saturating_sub(height);
    Rect::new(x, y, width, height)
}

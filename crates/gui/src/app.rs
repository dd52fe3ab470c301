//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::game::{GameResult, GameState};
use crate::settings::Settings;
use crate::styles::PANEL_WIDTH;

use corners_core::{Board, Color, Engine};
use iced::widget::{
    button, column, container, horizontal_rule, pick_list, row, scrollable, text, vertical_space,
};
use iced::{Element, Length, Subscription, Task, Theme};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

/// Who controls a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerType {
    #[default]
    Human,
    Minimax,
    Random,
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerType::Human => write!(f, "Human"),
            PlayerType::Minimax => write!(f, "Minimax Engine"),
            PlayerType::Random => write!(f, "Random Engine"),
        }
    }
}

/// Main application state
pub struct CornersApp {
    /// Game state
    game: GameState,
    /// Board flipped?
    board_flipped: bool,
    /// Who plays Red
    red_player: PlayerType,
    /// Who plays White
    white_player: PlayerType,
    /// Search depth for the minimax engine
    engine_depth: u8,
    /// Engine computing in the background
    engine_task_running: bool,
    /// Bumped whenever the position an engine is searching becomes stale,
    /// so a result from an abandoned search is ignored on arrival
    search_generation: u64,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Game controls
    NewGame,
    FlipBoard,
    RedPlayerChanged(PlayerType),
    WhitePlayerChanged(PlayerType),

    // Engine finished; None means the engine found no legal move
    EngineBoardReady(u64, Option<Board>),
}

impl CornersApp {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let mut app = Self {
            game: GameState::new(),
            board_flipped: settings.board_flipped,
            red_player: settings.red_player,
            white_player: settings.white_player,
            engine_depth: settings.engine_depth.clamp(1, 6),
            engine_task_running: false,
            search_generation: 0,
        };
        let task = app.maybe_trigger_engine_move();
        (app, task)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }

    fn save_settings(&self) {
        Settings {
            red_player: self.red_player,
            white_player: self.white_player,
            engine_depth: self.engine_depth,
            board_flipped: self.board_flipped,
        }
        .save();
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::SquareClicked(sq)) => {
                let current_player = self.player_for(self.game.turn);

                if current_player == PlayerType::Human
                    && self.game.result == GameResult::InProgress
                    && !self.game.engine_thinking
                {
                    self.game.select_square(sq);
                    // The human may have completed a move; hand over to an
                    // engine if one controls the other side.
                    return self.maybe_trigger_engine_move();
                }
                Task::none()
            }

            Message::NewGame => {
                self.game.reset();
                self.engine_task_running = false;
                self.search_generation += 1;
                self.maybe_trigger_engine_move()
            }

            Message::FlipBoard => {
                self.board_flipped = !self.board_flipped;
                self.save_settings();
                Task::none()
            }

            Message::RedPlayerChanged(player) => {
                self.red_player = player;
                self.save_settings();
                self.maybe_trigger_engine_move()
            }

            Message::WhitePlayerChanged(player) => {
                self.white_player = player;
                self.save_settings();
                self.maybe_trigger_engine_move()
            }

            Message::EngineBoardReady(generation, board) => {
                if generation != self.search_generation {
                    // A search started before the last reset; its board
                    // belongs to a position that no longer exists.
                    return Task::none();
                }
                self.game.engine_thinking = false;
                self.engine_task_running = false;

                if self.game.result == GameResult::InProgress {
                    match board {
                        Some(board) => {
                            self.game.apply_engine_board(board);
                            // The other side may also be an engine
                            return self.maybe_trigger_engine_move();
                        }
                        None => {
                            self.game.result = GameResult::Blocked(self.game.turn);
                        }
                    }
                }
                Task::none()
            }
        }
    }

    fn player_for(&self, color: Color) -> PlayerType {
        match color {
            Color::Red => self.red_player,
            Color::White => self.white_player,
        }
    }

    /// Check if the side to move is an engine and start its search
    fn maybe_trigger_engine_move(&mut self) -> Task<Message> {
        if self.game.result != GameResult::InProgress || self.engine_task_running {
            return Task::none();
        }

        let player = self.player_for(self.game.turn);
        if player == PlayerType::Human {
            return Task::none();
        }

        self.engine_task_running = true;
        self.game.engine_thinking = true;

        let board = self.game.board.clone();
        let to_move = self.game.turn;
        let depth = self.engine_depth;
        let generation = self.search_generation;

        Task::perform(
            async move {
                // Search runs to completion on a blocking thread; the
                // frame loop stays responsive meanwhile.
                tokio::task::spawn_blocking(move || {
                    let mut engine: Box<dyn Engine> = match player {
                        PlayerType::Minimax => Box::new(MinimaxEngine::new()),
                        PlayerType::Random => Box::new(RandomEngine::new()),
                        PlayerType::Human => unreachable!(),
                    };
                    engine.search(&board, to_move, depth).best_board
                })
                .await
                .ok()
                .flatten()
            },
            move |board| Message::EngineBoardReady(generation, board),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.game, self.board_flipped)
            .view()
            .map(Message::Board);

        let panel = self.control_panel();

        row![
            board,
            container(panel)
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let player_types = vec![PlayerType::Human, PlayerType::Minimax, PlayerType::Random];

        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        let red_picker = pick_list(
            player_types.clone(),
            Some(self.red_player),
            Message::RedPlayerChanged,
        )
        .width(Length::Fill);

        let white_picker = pick_list(
            player_types,
            Some(self.white_player),
            Message::WhitePlayerChanged,
        )
        .width(Length::Fill);

        let depth_text = text(format!("Engine Depth: {}", self.engine_depth)).size(14);

        let status = match self.game.result {
            GameResult::InProgress => {
                if self.game.engine_thinking {
                    "Engine thinking...".to_string()
                } else {
                    let side = match self.game.turn {
                        Color::Red => "Red",
                        Color::White => "White",
                    };
                    format!("{} to move", side)
                }
            }
            GameResult::RedWins => "Red wins: home quadrant conquered!".to_string(),
            GameResult::WhiteWins => "White wins: home quadrant conquered!".to_string(),
            GameResult::Blocked(color) => {
                let side = match color {
                    Color::Red => "Red",
                    Color::White => "White",
                };
                format!("{} has no legal moves, game halted", side)
            }
        };

        // Move history
        let moves_title = text("Moves").size(16);
        let mut moves_list = column![].spacing(2);

        for (i, chunk) in self.game.moves.chunks(2).enumerate() {
            let move_num = i + 1;
            let red_move = &chunk[0].notation;
            let white_move = chunk.get(1).map(|m| m.notation.as_str()).unwrap_or("");

            moves_list =
                moves_list.push(text(format!("{}. {} {}", move_num, red_move, white_move)).size(13));
        }

        let moves_scroll = scrollable(moves_list).height(Length::Fill);

        column![
            new_game_btn,
            flip_btn,
            vertical_space().height(20),
            text("Red Player").size(14),
            red_picker,
            vertical_space().height(10),
            text("White Player").size(14),
            white_picker,
            vertical_space().height(15),
            depth_text,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text(status).size(16),
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            moves_title,
            moves_scroll,
        ]
        .spacing(5)
        .into()
    }
}

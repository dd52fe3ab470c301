//! Board widget rendering

use crate::game::GameState;
use crate::styles::{self, SQUARE_SIZE};
use corners_core::Color as Side;
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(u8),
}

/// Renders the 8x8 Corners board
pub struct BoardView<'a> {
    game: &'a GameState,
    flipped: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a GameState, flipped: bool) -> Self {
        Self { game, flipped }
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for r in 0..8 {
            let display_row = if self.flipped { 7 - r } else { r };
            let mut cells = row![].spacing(0);

            for c in 0..8 {
                let display_col = if self.flipped { 7 - c } else { c };
                let sq = (display_row * 8 + display_col) as u8;
                cells = cells.push(self.render_square(sq, display_row, display_col));
            }

            board_column = board_column.push(cells);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.3, 0.3, 0.3),
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, sq: u8, row: usize, col: usize) -> Element<'a, BoardMessage> {
        let is_light = (row + col) % 2 == 0;
        let mut bg_color = if is_light {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        // Highlight the selected piece's square
        if self.game.selected.map(|p| p.square()) == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        }

        // Highlight the last move
        if let Some((from, to)) = self.game.last_move {
            if sq == from || sq == to {
                bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        let piece_color = self.game.board.piece_at(sq).map(|p| match p.color {
            Side::Red => styles::RED_PIECE,
            Side::White => styles::WHITE_PIECE,
        });

        // Valid destination of the selected piece?
        let is_valid_target = self.game.moves_for_selected.contains_key(&sq);

        let content: Element<'a, BoardMessage> = if let Some(color) = piece_color {
            text("●").size(SQUARE_SIZE * 0.6).color(color).center().into()
        } else if is_valid_target {
            // Show dot for valid destinations
            text("●")
                .size(SQUARE_SIZE * 0.25)
                .color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))
                .center()
                .into()
        } else {
            text("").into()
        };

        button(
            container(content)
                .width(SQUARE_SIZE)
                .height(SQUARE_SIZE)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(SQUARE_SIZE)
        .height(SQUARE_SIZE)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.1,
                button::Status::Pressed => 0.2,
                _ => 0.0,
            };
            button::Style {
                background: Some(iced::Background::Color(if hover_overlay > 0.0 {
                    blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: iced::Border::default(),
                text_color: Color::BLACK,
                ..Default::default()
            }
        })
        .on_press(BoardMessage::SquareClicked(sq))
        .into()
    }
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}

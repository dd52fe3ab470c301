//! Corners GUI Application
//!
//! A graphical interface for playing Corners against the minimax engine:
//! click a piece to see its moves, click a destination to play, and watch
//! the engine answer.

mod app;
mod board;
mod game;
mod settings;
mod styles;

use app::CornersApp;
use iced::application;

fn main() -> iced::Result {
    application("Corners", CornersApp::update, CornersApp::view)
        .subscription(CornersApp::subscription)
        .theme(CornersApp::theme)
        .window_size((900.0, 660.0))
        .run_with(CornersApp::new)
}

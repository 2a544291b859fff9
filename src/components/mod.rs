pub mod app;
pub mod board;
pub mod button;
pub mod cell;
pub mod game;
pub mod overlay;

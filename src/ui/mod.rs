pub mod app;
mod assets;
mod board;
pub mod config;
mod dialogs;
mod hud;
mod input;
mod scene;
mod state;

//! Tally Games - two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Surfaces**: the board and the controls, rendered with ratatui
//! - **App**: routes terminal events through the surfaces into the game
//! - **Config**: symbol option lists and logging settings from TOML
//!
//! Game rules live in [`tally_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod logging;
mod surfaces;
mod tui;

// Crate-level exports - Application
pub use app::App;
pub use tui::{run_app, run_tui};

// Crate-level exports - Command line and configuration
pub use cli::{Cli, Command};
pub use config::{ConfigError, TallyConfig};
pub use logging::{init_file_tracing, init_stderr_tracing};

// Crate-level exports - Surfaces
pub use surfaces::{
    BoardGrid, BoardSurface, ControlsSurface, PageLayout, Surface, SurfaceAction, SymbolSelectors,
    banner_text, render_winning_line, status_text,
};

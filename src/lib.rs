//! # Connect Four Engine
//!
//! A Connect Four board model with win detection across rows, columns and
//! diagonals, and computer opponents driven by alpha-beta search or uniform
//! random play.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, move validation, win detection, state machine
//! - [`ai`] — Agent trait, evaluation, alpha-beta search, random play
//! - [`arena`] — Headless computer-vs-computer games and result tallies
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;

//! Core types and game logic for a Reversi (Othello) variant played on a
//! configurable even-sized board against a greedy automated opponent.

pub mod ai;
pub mod board;
pub mod game;
pub mod rules;
pub mod types;

//! The Sovereign Investor Manual.
//!
//! A five-page beginner's guide to financial markets rendered with egui, with
//! a sidebar calculator showing how compound interest grows an investment.

pub mod config;
pub mod content;
pub mod ui;

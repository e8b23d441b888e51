//! Telegram bot recording group activity, with statistics and interest reports
//!
//! (c) Softlandia 2025

pub mod bot;
pub mod config;
pub mod core;
pub mod error;
pub mod infrastructure;

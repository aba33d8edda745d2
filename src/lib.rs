//! Skinmash - Library for combining regions of Minecraft skins
//!
//! This library provides functionality to:
//! - Look up named skin regions and their legacy-layout fallbacks
//! - Resolve skins from local PNG files or player names, memoized per run
//! - Interpret `<region> <skin>` command lines and composite them into a 64x64 canvas

pub mod canvas;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod output;
pub mod region;
pub mod session;
pub mod skin;
pub mod source;

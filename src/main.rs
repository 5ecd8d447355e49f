// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: parse arguments, set up logging and localization, run the app.

mod app;
mod config;
mod constant;
mod domain;
mod i18n;

use std::path::PathBuf;

use clap::Parser;

use crate::app::{CropApp, Flags};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "Mark a crop region on an image")]
pub struct Args {
    /// Image to open on startup.
    pub file: Option<PathBuf>,
}

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let settings = cosmic::app::Settings::default()
        .size_limits(cosmic::iced::Limits::NONE.min_width(480.0).min_height(320.0));

    cosmic::app::run::<CropApp>(settings, Flags::Args(args))
}

// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: argument parsing, logging, localization, and app launch.

mod app;
mod config;
mod constant;
mod document;
mod i18n;
mod select;
mod view;

use std::path::PathBuf;

use clap::Parser;

/// Crop images with an aspect-ratio-locked selection.
#[derive(Parser, Debug, Clone)]
#[command(name = "talea", version, about)]
pub struct Args {
    /// Image file to open on startup.
    pub file: Option<PathBuf>,
}

fn main() -> cosmic::iced::Result {
    env_logger::init();
    i18n::init();

    let args = Args::parse();

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(1000.0, 720.0));

    cosmic::app::run::<app::TaleaApp>(settings, app::Flags::Args(args))
}

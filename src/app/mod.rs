// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

pub mod message;
pub mod model;
pub mod update;

use cosmic::app::Core;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::keyboard::{self, key::Named, Key, Modifiers};
use cosmic::iced::Subscription;
use cosmic::{Action, Element, Task};

use crate::config::AppConfig;
use crate::view;
use crate::Args;

pub use message::AppMessage;
pub use model::AppModel;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct TaleaApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
    config_handler: Option<cosmic_config::Config>,
}

impl cosmic::Application for TaleaApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.codeberg.talea.Talea";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let (config, config_handler) =
            match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
                Ok(handler) => {
                    let config = AppConfig::get_entry(&handler).unwrap_or_default();
                    (config, Some(handler))
                }
                Err(_) => (AppConfig::default(), None),
            };

        let Flags::Args(args) = flags;

        let mut app = Self {
            core,
            model: AppModel::new(),
            config,
            config_handler,
        };

        if let Some(path) = args.file {
            update::open_path(&mut app, &path);
        }

        (app, Task::none())
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        // Config changes are persisted here; everything else is state-only.
        if let AppMessage::ToggleGrid = &message {
            self.config.show_grid = !self.config.show_grid;
            self.save_config();
            return Task::none();
        }

        update::update(self, &message);
        Task::none()
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.model, &self.config)
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

impl TaleaApp {
    /// Save current config to disk.
    fn save_config(&self) {
        if let Some(ref handler) = self.config_handler {
            let _ = self.config.write_entry(handler);
        }
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    use AppMessage::{
        ApplyCrop, CenterSelection, MaximizeSelection, NextImage, OpenFileDialog, PrevImage,
        ResetSelection, SaveAs, ToggleGrid, ZoomActualSize, ZoomFit, ZoomIn, ZoomOut,
    };

    // Ctrl shortcuts.
    if modifiers.control() && !modifiers.shift() && !modifiers.alt() && !modifiers.logo() {
        return match key.as_ref() {
            Key::Character(ch) if ch.eq_ignore_ascii_case("o") => Some(OpenFileDialog),
            Key::Character(ch) if ch.eq_ignore_ascii_case("s") => Some(SaveAs),
            _ => None,
        };
    }

    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        // Navigation with arrow keys (no modifiers).
        Key::Named(Named::ArrowRight) => Some(NextImage),
        Key::Named(Named::ArrowLeft) => Some(PrevImage),

        // Zoom.
        Key::Character("+" | "=") => Some(ZoomIn),
        Key::Character("-") => Some(ZoomOut),
        Key::Character("1") => Some(ZoomActualSize),
        Key::Character(ch) if ch.eq_ignore_ascii_case("f") => Some(ZoomFit),

        // Selection.
        Key::Character(ch) if ch.eq_ignore_ascii_case("c") => Some(CenterSelection),
        Key::Character(ch) if ch.eq_ignore_ascii_case("m") => Some(MaximizeSelection),
        Key::Character(ch) if ch.eq_ignore_ascii_case("g") => Some(ToggleGrid),
        Key::Named(Named::Enter) => Some(ApplyCrop),
        Key::Named(Named::Escape) => Some(ResetSelection),

        _ => None,
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

pub mod document;
pub mod message;
pub mod model;
pub mod update;
pub mod view;

pub use message::AppMessage;
pub use model::AppModel;

use cosmic::app::Core;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::iced::{Subscription, window};
use cosmic::{Action, ApplicationExt, Element, Task};

use crate::Args;
use crate::config::AppConfig;
use crate::fl;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct CropApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
}

impl cosmic::Application for CropApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.codeberg.cropview.Cropview";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let config = match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
            Ok(handler) => AppConfig::get_entry(&handler).unwrap_or_else(|(errs, config)| {
                for e in errs {
                    log::warn!("Invalid config entry: {e}");
                }
                config
            }),
            Err(e) => {
                log::warn!("Config unavailable, using defaults: {e}");
                AppConfig::default()
            }
        };

        let Flags::Args(args) = flags;
        let mut model = AppModel::new(&config);

        // The view has no bounds yet; the overlay reports them on its first event.
        if let Some(path) = args.file {
            update::update(&mut model, &config, AppMessage::OpenPath(path));
        }

        let mut app = Self {
            core,
            model,
            config,
        };
        let title_task = app.update_title();

        (app, title_task)
    }

    fn on_close_requested(&self, _id: window::Id) -> Option<Self::Message> {
        None
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        let reloads = matches!(message, AppMessage::OpenPath(_) | AppMessage::LoadPath);
        update::update(&mut self.model, &self.config, message);

        if reloads {
            self.update_title()
        } else {
            Task::none()
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.model, &self.config)
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

impl CropApp {
    /// Show the current file name in the window title.
    fn update_title(&mut self) -> Task<Action<AppMessage>> {
        let title = match self
            .model
            .current_path
            .as_ref()
            .and_then(|p| p.file_name())
        {
            Some(name) => format!("{} - {}", name.to_string_lossy(), fl!("app-title")),
            None => fl!("app-title"),
        };

        match self.core.main_window_id() {
            Some(id) => self.set_window_title(title, id),
            None => Task::none(),
        }
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    if modifiers.control() && !modifiers.shift() && !modifiers.alt() && !modifiers.logo() {
        return match key.as_ref() {
            Key::Character(ch) if ch.eq_ignore_ascii_case("s") => Some(AppMessage::SaveCropped),
            _ => None,
        };
    }

    match key.as_ref() {
        // Abort an ongoing drag, keeping the last values.
        Key::Named(Named::Escape) => Some(AppMessage::CropPointerLost),
        _ => None,
    }
}

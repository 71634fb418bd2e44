// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the page state, the background loader,
//! localization and the header entry, and turns messages into state changes
//! and decode tasks. When the catalog directory holds no pages it stays on
//! the empty-state view for the whole session. The About screen replaces the
//! reader until the user goes back.

mod message;
pub mod paths;
mod screen;
pub mod shortcuts;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::{FsImageStore, ImageStore, PageImage};
use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::loader::PageLoader;
use crate::page_state::PageState;
use crate::ui::header;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// What the page area currently shows.
#[derive(Debug, Clone)]
pub enum PageDisplay {
    /// A decode for the current page is running.
    Loading,
    Ready(PageImage),
    Failed(Error),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    directory: PathBuf,
    /// `None` when the catalog is empty.
    page_state: Option<PageState>,
    loader: PageLoader,
    header: header::State,
    display: PageDisplay,
    viewport_height: u32,
    /// Ctrl/Cmd is held; the wheel zooms instead of scrolling.
    command_held: bool,
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("directory", &self.directory)
            .field("page", &self.page_state.as_ref().map(PageState::index))
            .field("display", &self.display)
            .field("viewport_height", &self.viewport_height)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings from the configured size.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window_size();

    #[allow(clippy::cast_precision_loss)]
    let (size, min_size) = (
        iced::Size::new(width as f32, height as f32),
        iced::Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32),
    );

    window::Settings {
        size,
        min_size: Some(min_size),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    let settings = window_settings(&config);

    // iced 0.14 requires a `Fn` boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, config_warning) = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| (Flags::default(), Config::default(), None));
        App::new(flags, &config, config_warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Scans the catalog directory and starts loading the first page.
    fn new(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let directory = flags
            .directory
            .clone()
            .unwrap_or_else(|| config.catalog_directory());
        let store = FsImageStore::new(config.extensions(), config.catalog.name_prefix.clone());

        Self::with_store(i18n, config, directory, Arc::new(store))
    }

    /// Builds the application over any [`ImageStore`].
    pub fn with_store(
        i18n: I18n,
        config: &Config,
        directory: PathBuf,
        store: Arc<dyn ImageStore>,
    ) -> (Self, Task<Message>) {
        let pages = store.list_pages(&directory);
        let page_state = match PageState::new(pages, config.zoom_bounds()) {
            Ok(state) => {
                log::info!(
                    "Opened {} pages from {}",
                    state.page_count(),
                    directory.display()
                );
                Some(
                    state
                        .with_zoom_step(config.zoom_step())
                        .with_vertical_chrome(config.vertical_chrome()),
                )
            }
            Err(_) => {
                log::warn!("No page images found in {}", directory.display());
                None
            }
        };

        let (_, height) = config.window_size();
        let mut app = App {
            i18n,
            screen: Screen::Reader,
            directory,
            page_state,
            loader: PageLoader::new(store, config.prefetch()),
            header: header::State::default(),
            display: PageDisplay::Loading,
            viewport_height: height,
            command_held: false,
            theme: config.general.theme_mode.iced_theme(),
        };

        let task = app.show_current_page();
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header_message) => self.handle_header_message(header_message),
            Message::About(about_message) => self.handle_about_message(&about_message),
            Message::Navigate(command) => self.handle_command(command),
            Message::Shortcut(action) => self.handle_shortcut(action),
            Message::ModifiersChanged(modifiers) => {
                self.command_held = modifiers.command();
                Task::none()
            }
            Message::WheelScrolled(delta) => self.handle_wheel(delta),
            Message::WindowResized(size) => {
                self.handle_resize(size);
                Task::none()
            }
            Message::PageDecoded { ticket, result } => self.handle_page_decoded(&ticket, result),
            Message::PagePrefetched { path, result } => {
                self.loader.complete_prefetch(path, result);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            directory: &self.directory,
            page_state: self.page_state.as_ref(),
            header: &self.header,
            display: &self.display,
            viewport_height: self.viewport_height,
            command_held: self.command_held,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The session state, or `None` for an empty catalog.
    #[must_use]
    pub fn page_state(&self) -> Option<&PageState> {
        self.page_state.as_ref()
    }

    #[must_use]
    pub fn display(&self) -> &PageDisplay {
        &self.display
    }

    #[must_use]
    pub fn loader(&self) -> &PageLoader {
        &self.loader
    }

    #[must_use]
    pub fn header(&self) -> &header::State {
        &self.header
    }

    #[must_use]
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }
}

// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use chrono::Utc;
use cosmic::iced_futures::stream;
use cosmic::widget::Id;
use cosmic::{
    ApplicationExt, Element, Task, app,
    iced::{
        Alignment, Color, Event, Length, Point, Size, Subscription, event,
        futures::SinkExt,
        widget::{column, row},
        window,
    },
    iced_widget::Column,
    theme,
    widget::{autosize, container, context_menu, text},
};
use cosmic_floating_clock_config::FloatingClockConfig;
use tokio::time;

use crate::{
    drag_area::drag_area,
    fl, help,
    menu::ContextMenu,
    registry::{Registry, RowId},
    shell::WindowState,
};

static AUTOSIZE_MAIN_ID: LazyLock<Id> = LazyLock::new(|| Id::new("autosize-main"));

const REFRESH_INTERVAL: time::Duration = time::Duration::from_millis(1000);
const LABEL_WIDTH: f32 = 110.0;

pub struct FloatingClock {
    core: cosmic::app::Core,
    registry: Registry,
    shell: WindowState,
    menu: ContextMenu,
    help: Option<window::Id>,
    /// Cleared on teardown to drop the refresh subscription.
    ticking: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick,
    AddTimezone(&'static str),
    RemoveRow(RowId),
    SetTransparency(f32),
    ShowHelp,
    CloseHelp,
    Exit,
    DragStart(Point),
    DragMove(Point),
    DragEnd,
    WindowMoved(window::Id, Point),
    Position(Option<Point>),
    ScreenSize(Option<Size>),
    CloseRequested(window::Id),
}

impl FloatingClock {
    fn new(mut core: app::Core, config: &FloatingClockConfig) -> Self {
        core.window.show_headerbar = false;

        let mut registry = Registry::default();
        for timezone_id in config.initial_timezones() {
            registry.add(timezone_id);
        }
        registry.refresh(Utc::now());

        Self {
            core,
            registry,
            shell: WindowState::new(config.opacity()),
            menu: ContextMenu::new(),
            help: None,
            ticking: true,
        }
    }

    fn move_window(&self, position: Point) -> app::Task<Message> {
        match self.core.main_window_id() {
            Some(id) => window::move_to(id, position),
            None => Task::none(),
        }
    }

    fn query_position(&self) -> app::Task<Message> {
        match self.core.main_window_id() {
            Some(id) => window::get_position(id)
                .map(|position| cosmic::Action::App(Message::Position(position))),
            None => Task::none(),
        }
    }

    fn rows(&self) -> Element<'_, Message> {
        let rows = self.registry.rows().iter().map(|timezone| {
            let content = row![
                text(timezone.label.as_str())
                    .size(14)
                    .width(Length::Fixed(LABEL_WIDTH))
                    .align_x(Alignment::End),
                text(timezone.time.as_str()).size(18),
            ]
            .spacing(10)
            .align_y(Alignment::Center);

            Element::from(drag_area(content).on_double_click(Message::RemoveRow(timezone.id)))
        });

        Column::with_children(rows).spacing(5).padding(10).into()
    }
}

impl cosmic::Application for FloatingClock {
    type Message = Message;
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = FloatingClockConfig;
    const APP_ID: &'static str = "com.system76.CosmicFloatingClock";

    fn init(core: app::Core, config: Self::Flags) -> (Self, app::Task<Self::Message>) {
        let clock = Self::new(core, &config);

        let task = match clock.core.main_window_id() {
            Some(id) => Task::batch([
                window::change_level(id, window::Level::AlwaysOnTop),
                clock.query_position(),
                window::monitor_size(id).map(|size| cosmic::Action::App(Message::ScreenSize(size))),
            ]),
            None => Task::none(),
        };

        (clock, task)
    }

    fn core(&self) -> &cosmic::app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::app::Core {
        &mut self.core
    }

    fn style(&self) -> Option<cosmic::iced_runtime::Appearance> {
        Some(cosmic::iced_runtime::Appearance {
            background_color: Color::TRANSPARENT,
            text_color: Color::WHITE,
            icon_color: Color::WHITE,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let moved = event::listen_with(|event, _status, id| match event {
            Event::Window(window::Event::Moved(position)) => {
                Some(Message::WindowMoved(id, position))
            }
            _ => None,
        });

        if !self.ticking {
            return moved;
        }

        let ticks = Subscription::run_with_id(
            "time-sub",
            stream::channel(1, |mut output| async move {
                let mut timer = time::interval(REFRESH_INTERVAL);
                timer.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

                loop {
                    timer.tick().await;
                    if let Err(err) = output.send(Message::Tick).await {
                        tracing::debug!(?err, "Clock stopped listening for ticks");
                        break;
                    }
                }
            }),
        );

        Subscription::batch([moved, ticks])
    }

    fn update(&mut self, message: Self::Message) -> app::Task<Self::Message> {
        match message {
            Message::Tick => {
                self.registry.refresh(Utc::now());
                Task::none()
            }
            Message::AddTimezone(timezone_id) => {
                self.registry.add(timezone_id);
                self.registry.refresh(Utc::now());
                Task::none()
            }
            Message::RemoveRow(row) => {
                if !self.registry.remove(row) {
                    tracing::debug!(rows = self.registry.len(), "Keeping timezone row");
                }
                Task::none()
            }
            Message::SetTransparency(opacity) => {
                self.shell.set_transparency(opacity);
                Task::none()
            }
            Message::ShowHelp => {
                if let Some(id) = self.help {
                    return window::gain_focus(id);
                }

                let (id, open) = window::open(help::settings());
                self.help = Some(id);
                Task::batch([
                    open.discard(),
                    self.set_window_title(fl!("help-title"), id),
                ])
            }
            Message::CloseHelp => match self.help.take() {
                Some(id) => window::close(id),
                None => Task::none(),
            },
            Message::Exit => {
                self.ticking = false;
                cosmic::iced::exit()
            }
            Message::DragStart(pointer) => {
                if self.shell.start_move(pointer) {
                    return Task::none();
                }

                // Without a known position the compositor has to move the window.
                match self.core.main_window_id() {
                    Some(id) => window::drag(id),
                    None => Task::none(),
                }
            }
            Message::DragMove(pointer) => match self.shell.on_move(pointer) {
                Some(position) => self.move_window(position),
                None => Task::none(),
            },
            Message::DragEnd => {
                self.shell.stop_move();
                Task::none()
            }
            Message::WindowMoved(id, position) => {
                if Some(id) == self.core.main_window_id() {
                    self.shell.moved_to(position);
                }
                Task::none()
            }
            Message::Position(Some(position)) => {
                self.shell.moved_to(position);
                Task::none()
            }
            Message::Position(None) => {
                tracing::debug!("Window position unavailable; dragging through the compositor");
                Task::none()
            }
            Message::ScreenSize(Some(screen)) => {
                if self.shell.is_dragging() {
                    return Task::none();
                }

                let position = WindowState::configure(screen);
                tracing::debug!(?position, "Placing clock window");
                Task::batch([self.move_window(position), self.query_position()])
            }
            Message::ScreenSize(None) => {
                tracing::debug!("Monitor size unavailable; leaving placement to the compositor");
                self.query_position()
            }
            Message::CloseRequested(id) => {
                if Some(id) == self.help {
                    self.help = None;
                } else if Some(id) == self.core.main_window_id() {
                    self.ticking = false;
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let opacity = self.shell.opacity();

        let clock = container(self.rows()).class(theme::Container::custom(move |_theme| {
            cosmic::iced_widget::container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, opacity).into()),
                text_color: Some(Color {
                    a: opacity,
                    ..Color::WHITE
                }),
                ..Default::default()
            }
        }));

        let area = drag_area(clock)
            .on_press(Message::DragStart)
            .on_drag(Message::DragMove)
            .on_release(Message::DragEnd);

        autosize::autosize(
            context_menu(area, Some(self.menu.tree())),
            AUTOSIZE_MAIN_ID.clone(),
        )
        .into()
    }

    fn view_window(&self, id: window::Id) -> Element<'_, Message> {
        if Some(id) == self.help {
            help::view()
        } else {
            column![].into()
        }
    }

    fn on_close_requested(&self, id: window::Id) -> Option<Message> {
        Some(Message::CloseRequested(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock;
    use cosmic::Application;

    fn clock_with_main_window() -> (FloatingClock, window::Id) {
        let mut core = app::Core::default();
        let main = window::Id::unique();
        core.set_main_window_id(Some(main));
        (FloatingClock::new(core, &FloatingClockConfig::default()), main)
    }

    #[test]
    fn exit_stops_the_refresh_timer() {
        let (mut floating, _) = clock_with_main_window();
        assert!(floating.ticking);

        let _ = floating.update(Message::Exit);
        assert!(!floating.ticking);
    }

    #[test]
    fn closing_the_main_window_stops_the_refresh_timer() {
        let (mut floating, main) = clock_with_main_window();

        let _ = floating.update(Message::CloseRequested(main));
        assert!(!floating.ticking);
    }

    #[test]
    fn closing_help_keeps_the_clock_running() {
        let (mut floating, _) = clock_with_main_window();
        let help = window::Id::unique();
        floating.help = Some(help);

        let _ = floating.update(Message::CloseRequested(help));
        assert_eq!(floating.help, None);
        assert!(floating.ticking);
        assert_eq!(floating.registry.len(), 1);
    }

    #[test]
    fn added_row_shows_a_time_straight_away() {
        let (mut floating, _) = clock_with_main_window();

        let _ = floating.update(Message::AddTimezone("Asia/Tokyo"));
        let row = floating.registry.rows().last().unwrap();

        assert_eq!(row.label, "Tokyo");
        assert_ne!(row.time, clock::PLACEHOLDER);
        assert_ne!(row.time, clock::ERROR_TEXT);
        assert_eq!(row.time.len(), "00:00:00".len());
    }

    #[test]
    fn reported_moves_feed_the_drag() {
        let (mut floating, main) = clock_with_main_window();

        let _ = floating.update(Message::WindowMoved(main, Point::new(200.0, 100.0)));
        let _ = floating.update(Message::DragStart(Point::new(10.0, 10.0)));
        assert_eq!(
            floating.shell.on_move(Point::new(17.0, 10.0)),
            Some(Point::new(207.0, 100.0))
        );

        // Moves of other windows are ignored.
        let _ = floating.update(Message::WindowMoved(window::Id::unique(), Point::ORIGIN));
        assert_eq!(floating.shell.position(), Some(Point::new(200.0, 100.0)));
    }
}

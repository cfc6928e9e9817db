// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    Element,
    cosmic_theme::Spacing,
    iced::{Alignment, Length, Size, widget::column, window},
    theme,
    widget::{button, container, scrollable, text},
};

use crate::{fl, window::Message};

pub fn settings() -> window::Settings {
    window::Settings {
        size: Size::new(400.0, 450.0),
        resizable: false,
        ..Default::default()
    }
}

fn section<'a>(title: String, body: String) -> Element<'a, Message> {
    column![text::heading(title), text::body(body)]
        .spacing(theme::active().cosmic().spacing.space_xxs)
        .into()
}

/// Contents of the help window.
pub fn view<'a>() -> Element<'a, Message> {
    let Spacing {
        space_s, space_m, ..
    } = theme::active().cosmic().spacing;

    let content = column![
        text::title3(fl!("help-heading")),
        section(fl!("help-features"), fl!("help-features-body")),
        section(fl!("help-controls"), fl!("help-controls-body")),
        section(fl!("help-menu"), fl!("help-menu-body")),
        section(fl!("help-tips"), fl!("help-tips-body")),
        text::caption(fl!("help-copyright")),
    ]
    .spacing(space_s)
    .padding(space_m);

    column![
        scrollable(content).height(Length::Fill),
        container(button::standard(fl!("close")).on_press(Message::CloseHelp))
            .padding(space_s)
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

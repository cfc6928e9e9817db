// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use cosmic::widget::menu::{self, key_bind::KeyBind};

use crate::{fl, window::Message, zones::TIMEZONES};

/// Something the context menu can do. Each entry carries its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    AddTimezone(&'static str),
    /// Opacity in percent, from 10 to 100.
    Transparency(u8),
    Help,
    Exit,
}

impl MenuAction {
    pub fn opacity(percent: u8) -> f32 {
        f32::from(percent) / 100.0
    }
}

impl menu::Action for MenuAction {
    type Message = Message;

    fn message(&self) -> Message {
        match *self {
            Self::AddTimezone(timezone_id) => Message::AddTimezone(timezone_id),
            Self::Transparency(percent) => Message::SetTransparency(Self::opacity(percent)),
            Self::Help => Message::ShowHelp,
            Self::Exit => Message::Exit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
}

/// The right-click menu. Built once when the clock starts.
pub struct ContextMenu {
    pub timezones: Vec<MenuEntry>,
    pub transparency: Vec<MenuEntry>,
    key_binds: HashMap<KeyBind, MenuAction>,
}

impl ContextMenu {
    pub fn new() -> Self {
        let timezones = TIMEZONES
            .iter()
            .map(|entry| MenuEntry {
                label: entry.display_name.to_owned(),
                action: MenuAction::AddTimezone(entry.id),
            })
            .collect();

        let transparency = (1..=10u8)
            .map(|step| step * 10)
            .map(|percent| MenuEntry {
                label: format!("{percent}%"),
                action: MenuAction::Transparency(percent),
            })
            .collect();

        Self {
            timezones,
            transparency,
            key_binds: HashMap::new(),
        }
    }

    /// Widget tree handed to the context menu on each view.
    pub fn tree(&self) -> Vec<menu::Tree<Message>> {
        fn buttons(entries: &[MenuEntry]) -> Vec<menu::Item<MenuAction, String>> {
            entries
                .iter()
                .map(|entry| menu::Item::Button(entry.label.clone(), None, entry.action))
                .collect()
        }

        menu::items(
            &self.key_binds,
            vec![
                menu::Item::Folder(fl!("add-timezone"), buttons(&self.timezones)),
                menu::Item::Folder(fl!("transparency"), buttons(&self.transparency)),
                menu::Item::Button(fl!("help"), None, MenuAction::Help),
                menu::Item::Divider,
                menu::Item::Button(fl!("exit"), None, MenuAction::Exit),
            ],
        )
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic::widget::menu::Action;

    #[test]
    fn one_entry_per_timezone() {
        let menu = ContextMenu::new();
        let ids: Vec<MenuAction> = menu.timezones.iter().map(|e| e.action).collect();
        let expected: Vec<MenuAction> = TIMEZONES
            .iter()
            .map(|entry| MenuAction::AddTimezone(entry.id))
            .collect();

        assert_eq!(ids, expected);
        assert_eq!(menu.timezones[1].label, "New York");
    }

    #[test]
    fn transparency_offers_deciles() {
        let menu = ContextMenu::new();
        let percents: Vec<MenuAction> = menu.transparency.iter().map(|e| e.action).collect();
        let expected: Vec<MenuAction> = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
            .into_iter()
            .map(MenuAction::Transparency)
            .collect();

        assert_eq!(percents, expected);
    }

    #[test]
    fn actions_carry_their_own_values() {
        assert!(matches!(
            MenuAction::AddTimezone("Asia/Tokyo").message(),
            Message::AddTimezone("Asia/Tokyo")
        ));
        assert!(matches!(
            MenuAction::Transparency(50).message(),
            Message::SetTransparency(opacity) if opacity == 0.5
        ));
        assert!(matches!(MenuAction::Exit.message(), Message::Exit));
    }
}

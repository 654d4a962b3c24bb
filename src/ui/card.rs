use iced::widget::{button, column, container, image, mouse_area, row, text, Space};
use iced::{border, Alignment, Color, Element, Length};

use crate::state::data::Person;
use crate::ui;
use crate::Message;

const CARD_WIDTH: f32 = 230.0;
const AVATAR_HEIGHT: f32 = 160.0;

/// A clickable nominee card for the directory grid.
/// Activating the card opens the detail modal for this person.
pub fn person_card(index: usize, person: &Person) -> Element<'_, Message> {
    let header: Element<'_, Message> = match &person.image {
        Some(path) => image(std::path::PathBuf::from(path))
            .width(Length::Fill)
            .height(AVATAR_HEIGHT)
            .into(),
        None => avatar(person),
    };

    let badge = container(text(&person.country).size(12))
        .style(ui::badge)
        .padding([2.0, 8.0]);

    let cohort_tag: Element<'_, Message> = if person.honoree {
        text("Lightspeed #66").size(11).color(ui::MUTED).into()
    } else {
        Space::with_width(0).into()
    };

    let profile_link = button(text("Ver perfil").size(12))
        .style(ui::link_button)
        .padding(0)
        .on_press(Message::OpenProfile(person.profile_url()));

    let body = column![
        text(&person.name).size(17).color(ui::TEXT),
        text(&person.company).size(14).color(ui::ACCENT),
        Space::with_height(8),
        row![badge, cohort_tag, Space::with_width(Length::Fill), profile_link]
            .spacing(8)
            .align_y(Alignment::Center),
    ]
    .spacing(4)
    .padding(14);

    let card = container(column![header, body])
        .style(ui::surface)
        .width(CARD_WIDTH)
        .clip(true);

    mouse_area(card)
        .on_press(Message::ShowPerson(index))
        .into()
}

/// Initials placeholder shown when a nominee has no image, tinted with a
/// color derived deterministically from the name.
fn avatar(person: &Person) -> Element<'_, Message> {
    let tint = name_color(&person.name);
    container(text(person.initials()).size(42).color(Color::WHITE))
        .style(move |_theme| container::Style {
            background: Some(tint.into()),
            border: border::rounded(0.0),
            ..container::Style::default()
        })
        .width(Length::Fill)
        .height(AVATAR_HEIGHT)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Deterministic placeholder color: char code + ((hash << 5) - hash)
/// per character, truncated to 24 bits of RGB.
fn name_color(name: &str) -> Color {
    let mut hash: i32 = 0;
    for c in name.chars() {
        hash = (c as i32).wrapping_add((hash << 5).wrapping_sub(hash));
    }
    let rgb = (hash & 0x00ff_ffff) as u32;
    Color::from_rgb8(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_color_is_deterministic() {
        assert_eq!(name_color("Ana Ruiz"), name_color("Ana Ruiz"));
    }

    #[test]
    fn test_different_names_usually_differ() {
        assert_ne!(name_color("Ana Ruiz"), name_color("Beto"));
    }
}

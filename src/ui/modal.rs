use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::analytics::VoteSource;
use crate::state::data::Person;
use crate::ui;
use crate::Message;

/// Detail surface for the selected nominee.
///
/// The caller overlays this on the page and wires the backdrop click to
/// `Message::CloseDetail`; this widget only emits explicit actions.
pub fn person_detail(person: &Person) -> Element<'_, Message> {
    let close = button(text("✕").size(16))
        .style(ui::ghost_button)
        .padding([4.0, 10.0])
        .on_press(Message::CloseDetail);

    let heading = column![
        text(&person.name).size(30).color(ui::TEXT),
        text(&person.company).size(19).color(ui::ACCENT),
        row![
            text(&person.country).size(14).color(ui::MUTED),
            text("•").size(14).color(ui::MUTED),
            text(person.role_or_default()).size(14).color(ui::MUTED),
        ]
        .spacing(8),
    ]
    .spacing(4);

    let bio = column![
        text("BIO / IMPACTO").size(12).color(ui::MUTED),
        text(person.bio_or_default()).size(15).color(ui::TEXT),
    ]
    .spacing(6);

    let profile = button(text("Ver perfil").size(15))
        .style(ui::ghost_button)
        .padding([10.0, 22.0])
        .on_press(Message::OpenProfile(person.profile_url()));

    let vote = button(text("Ir a Votar  ↗").size(15))
        .style(ui::accent_button)
        .padding([10.0, 22.0])
        .on_press(Message::OpenVote(VoteSource::Modal));

    let actions = row![profile, vote].spacing(12);

    container(
        column![
            row![Space::with_width(Length::Fill), close],
            heading,
            Space::with_height(16),
            bio,
            Space::with_height(20),
            actions,
        ]
        .spacing(6)
        .align_x(Alignment::Start),
    )
    .style(ui::surface)
    .padding(28)
    .width(520)
    .into()
}

/// Static page sections and the directory controls
///
/// Everything here is stateless composition over values the app passes in.

use std::collections::BTreeSet;

use iced::widget::{button, checkbox, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::analytics::VoteSource;
use crate::countdown::CountdownSnapshot;
use crate::ui;
use crate::{Message, Section};

pub fn nav() -> Element<'static, Message> {
    let brand = row![
        text("LIGHTSPEED").size(20).color(ui::TEXT),
        text("AWARDS").size(20).color(ui::ACCENT),
    ]
    .spacing(6);

    let links = row![
        nav_link("Premios", Section::About),
        nav_link("Nominados", Section::Directory),
        nav_link("FAQ", Section::Faq),
        button(text("Votar Ahora").size(14))
            .style(ui::ghost_button)
            .padding([8.0, 18.0])
            .on_press(Message::OpenVote(VoteSource::Nav)),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(
        row![brand, Space::with_width(Length::Fill), links].align_y(Alignment::Center),
    )
    .padding([14.0, 32.0])
    .width(Length::Fill)
    .into()
}

fn nav_link(label: &'static str, section: Section) -> Element<'static, Message> {
    button(text(label).size(14))
        .style(ui::link_button)
        .padding([8.0, 6.0])
        .on_press(Message::JumpTo(section))
        .into()
}

pub fn hero(
    honoree_count: u32,
    snapshot: CountdownSnapshot,
    deadline_copy: String,
) -> Element<'static, Message> {
    let title = column![
        text(format!("LOS {honoree_count}")).size(76).color(ui::ACCENT),
        text("DE LA IA").size(52).color(ui::TEXT),
    ]
    .align_x(Alignment::Center);

    let tagline = text(
        "Lightspeed Awards 2025: Las personas que están definiendo el futuro \
         de la Inteligencia Artificial en Latinoamérica.",
    )
    .size(20)
    .color(ui::MUTED);

    let cta = button(text("IR A VOTACIÓN  →").size(18))
        .style(ui::accent_button)
        .padding([14.0, 34.0])
        .on_press(Message::OpenVote(VoteSource::Hero));

    column![
        title,
        Space::with_height(10),
        tagline,
        Space::with_height(24),
        countdown_row(snapshot),
        Space::with_height(32),
        cta,
        Space::with_height(10),
        text(deadline_copy).size(13).color(ui::MUTED),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Four zero-padded blocks: days, hours, minutes, seconds
fn countdown_row(snapshot: CountdownSnapshot) -> Element<'static, Message> {
    let block = |value: i64, label: &'static str| {
        column![
            text(format!("{value:02}")).size(36).color(ui::ACCENT),
            text(label).size(11).color(ui::MUTED),
        ]
        .spacing(2)
        .align_x(Alignment::Center)
    };

    row![
        block(snapshot.days, "DÍAS"),
        block(snapshot.hours, "HORAS"),
        block(snapshot.minutes, "MIN"),
        block(snapshot.seconds, "SEG"),
    ]
    .spacing(28)
    .into()
}

pub fn about() -> Element<'static, Message> {
    let pillar = |title: &'static str, body: &'static str| {
        container(
            column![
                text(title).size(15).color(ui::ACCENT),
                text(body).size(13).color(ui::MUTED),
            ]
            .spacing(6),
        )
        .style(ui::surface)
        .padding(16)
        .width(260)
    };

    column![
        section_title("¿Qué son los Premios Lightspeed?"),
        text(
            "Los Premios Lightspeed 2025 nacen para reconocer a las 66 personas que \
             están transformando el panorama de la inteligencia artificial en \
             Latinoamérica. Educadores, innovadores, emprendedores y visionarios que \
             están acelerando la adopción y el entendimiento de la IA en nuestra región.",
        )
        .size(16)
        .color(ui::TEXT),
        Space::with_height(18),
        row![
            pillar(
                "Visibilidad",
                "Destacando el talento que a menudo opera detrás de escena en \
                 grandes avances tecnológicos.",
            ),
            pillar(
                "Impacto Regional",
                "Celebrando soluciones y educación creadas por y para Latinoamérica.",
            ),
            pillar(
                "Comunidad",
                "Fomentando conexiones entre los líderes que están moldeando el futuro.",
            ),
        ]
        .spacing(16),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}

pub fn search_box(search: &str) -> Element<'_, Message> {
    text_input("Buscar nombre o empresa...", search)
        .on_input(Message::SearchChanged)
        .padding(12)
        .width(300)
        .into()
}

/// One row of facet toggle chips for a filter group
pub fn filter_chips<'a>(
    label: &'static str,
    values: &'a [String],
    selected: &BTreeSet<String>,
    on_toggle: fn(String) -> Message,
) -> Element<'a, Message> {
    let chips = values.iter().map(|value| {
        button(text(value.as_str()).size(13))
            .style(ui::chip(selected.contains(value)))
            .padding([6.0, 14.0])
            .on_press(on_toggle(value.clone()))
            .into()
    });

    let mut elements: Vec<Element<'a, Message>> =
        vec![text(label).size(13).color(ui::MUTED).into()];
    elements.extend(chips);

    Wrap::with_elements(elements)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}

pub fn clear_facets_link() -> Element<'static, Message> {
    button(text("✕ Limpiar filtros").size(13))
        .style(ui::link_button)
        .padding(0)
        .on_press(Message::ClearFacets)
        .into()
}

/// Shown when the current criteria match nobody
pub fn empty_results() -> Element<'static, Message> {
    column![
        text("No se encontraron resultados para tu búsqueda.")
            .size(18)
            .color(ui::MUTED),
        button(text("Limpiar búsqueda").size(14))
            .style(ui::link_button)
            .on_press(Message::ClearFilters),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .padding(40)
    .into()
}

pub fn faq() -> Element<'static, Message> {
    const ITEMS: [(&str, &str); 3] = [
        (
            "¿Cómo puedo votar?",
            "Haz clic en el botón \"Ir a Votar\" en cualquier parte de esta página o \
             dentro de la tarjeta de un nominado. Serás redirigido a una plataforma \
             segura de votación.",
        ),
        (
            "¿Hasta cuándo puedo votar?",
            "Las votaciones cierran el 20 de diciembre a las 23:59.",
        ),
        (
            "¿Cómo fueron seleccionados los nominados?",
            "Los nominados fueron seleccionados basándose en su impacto, visibilidad \
             y contribución al ecosistema de IA en la región durante el último año.",
        ),
    ];

    let entries: [Element<'static, Message>; 3] = ITEMS.map(|(question, answer)| {
        container(
            column![
                text(question).size(16).color(ui::TEXT),
                text(answer).size(14).color(ui::MUTED),
            ]
            .spacing(6),
        )
        .style(ui::surface)
        .padding(18)
        .width(640)
        .into()
    });

    column![
        section_title("Preguntas Frecuentes"),
        column(entries).spacing(14),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

pub fn newsletter<'a>(
    email: &'a str,
    privacy_accepted: bool,
    status: Option<&'a str>,
) -> Element<'a, Message> {
    let privacy = row![
        checkbox("Acepto la", privacy_accepted)
            .size(16)
            .text_size(13)
            .on_toggle(Message::NewsletterPrivacyToggled),
        button(text("política de privacidad").size(13))
            .style(ui::link_button)
            .padding(0)
            .on_press(Message::OpenPrivacy),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let mut content = column![
        section_title("Mantente Informado"),
        text(
            "Suscríbete para recibir los resultados finales y noticias sobre el \
             futuro de la IA en LATAM.",
        )
        .size(14)
        .color(ui::MUTED),
        text_input("tu@email.com", email)
            .on_input(Message::NewsletterEmailChanged)
            .on_submit(Message::NewsletterSubmitted)
            .padding(12)
            .width(320),
        privacy,
        button(text("Suscribirme").size(15))
            .style(ui::accent_button)
            .padding([12.0, 30.0])
            .on_press(Message::NewsletterSubmitted),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    if let Some(status) = status {
        content = content.push(text(status).size(13).color(ui::ACCENT));
    }

    content.into()
}

pub fn footer() -> Element<'static, Message> {
    container(
        row![
            text("© 2025 Lightspeed Awards. Todos los derechos reservados.")
                .size(12)
                .color(ui::MUTED),
            Space::with_width(Length::Fill),
            button(text("Privacidad").size(12))
                .style(ui::link_button)
                .padding(0)
                .on_press(Message::OpenPrivacy),
        ]
        .align_y(Alignment::Center),
    )
    .padding([24.0, 32.0])
    .width(Length::Fill)
    .into()
}

/// Persistent bottom-right vote call-to-action
pub fn sticky_cta() -> Element<'static, Message> {
    button(text("● VOTA AHORA  ↗").size(15))
        .style(ui::accent_button)
        .padding([14.0, 26.0])
        .on_press(Message::OpenVote(VoteSource::Sticky))
        .into()
}

pub fn section_title(title: &'static str) -> Element<'static, Message> {
    text(title).size(30).color(ui::TEXT).into()
}

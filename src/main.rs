use iced::widget::{center, column, container, mouse_area, opaque, row, scrollable, stack, text, Space};
use iced::{time, Alignment, Color, Element, Length, Subscription, Task, Theme};
use std::time::Duration;

mod analytics;
mod config;
mod countdown;
mod state;
mod ui;

use analytics::{Analytics, ConsoleSink, VoteSource};
use config::Campaign;
use countdown::Countdown;
use state::data::safe_link;
use state::directory::Directory;
use state::filter::{self, Facet, FilterCriteria};
use state::selection::Selection;

/// How fast the hero counter climbs towards the cohort size
const HERO_COUNT_INTERVAL: Duration = Duration::from_millis(30);

/// Main application state
struct LightspeedAwards {
    /// Externally configured campaign parameters
    campaign: Campaign,
    /// The static nominee dataset with cached facet lists
    directory: Directory,
    /// Current search text and facet selections
    filters: FilterCriteria,
    /// Indices of the nominees visible under the current filters,
    /// re-derived only when the criteria change
    visible: Vec<usize>,
    /// Detail modal state
    selection: Selection,
    /// Ticking countdown to the voting deadline
    countdown: Countdown,
    /// Hero counter animation, climbing to the cohort size
    hero_count: u32,
    /// Optional vote-intent event sink
    analytics: Analytics,
    newsletter_email: String,
    newsletter_privacy: bool,
    newsletter_status: Option<String>,
}

/// Page sections reachable from the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Directory,
    Faq,
}

impl Section {
    /// Approximate scroll offset of each section on the page
    fn scroll_offset(self) -> f32 {
        match self {
            Section::About => 620.0,
            Section::Directory => 1100.0,
            Section::Faq => 2000.0,
        }
    }
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Search text edited
    SearchChanged(String),
    /// A country chip was toggled
    ToggleCountry(String),
    /// A company chip was toggled
    ToggleCompany(String),
    /// Drop the facet selections, keep the search text
    ClearFacets,
    /// Reset search and facets to empty
    ClearFilters,
    /// A nominee card was activated
    ShowPerson(usize),
    /// The detail modal was dismissed
    CloseDetail,
    /// A vote call-to-action was activated
    OpenVote(VoteSource),
    /// Open a nominee's external profile
    OpenProfile(String),
    /// Open the privacy policy
    OpenPrivacy,
    /// Nav link to a page section
    JumpTo(Section),
    /// One-second countdown trigger fired
    CountdownTick,
    /// Hero counter animation frame
    HeroTick,
    NewsletterEmailChanged(String),
    NewsletterPrivacyToggled(bool),
    NewsletterSubmitted,
}

impl LightspeedAwards {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let campaign = Campaign::load();

        // If this fails the app cannot function: the whole page is built
        // around the nominee directory.
        let directory = Directory::load()
            .expect("Failed to load the embedded nominee dataset");

        println!(
            "🏆 Lightspeed Awards initialized with {} nominees",
            directory.len()
        );

        let filters = FilterCriteria::default();
        let visible = filter::apply(directory.people(), &filters);

        // First countdown snapshot is computed here, not on the first tick,
        // so the display is never stale on first render.
        let countdown = Countdown::new(campaign.deadline_utc());

        (
            LightspeedAwards {
                campaign,
                directory,
                filters,
                visible,
                selection: Selection::default(),
                countdown,
                hero_count: 0,
                analytics: Analytics::new(Box::new(ConsoleSink)),
                newsletter_email: String::new(),
                newsletter_privacy: false,
                newsletter_status: None,
            },
            Task::none(),
        )
    }

    /// Replace the criteria and re-derive the visible subset in the same
    /// step, so no intermediate inconsistent view is ever rendered.
    fn set_filters(&mut self, next: FilterCriteria) {
        if next != self.filters {
            self.filters = next;
            self.visible = filter::apply(self.directory.people(), &self.filters);
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(search) => {
                self.set_filters(self.filters.with_search(search));
            }
            Message::ToggleCountry(country) => {
                self.set_filters(self.filters.toggled(Facet::Country, &country));
            }
            Message::ToggleCompany(company) => {
                self.set_filters(self.filters.toggled(Facet::Company, &company));
            }
            Message::ClearFacets => {
                self.set_filters(self.filters.cleared_facets());
            }
            Message::ClearFilters => {
                self.set_filters(FilterCriteria::cleared());
            }
            Message::ShowPerson(index) => {
                if let Some(person) = self.directory.get(index) {
                    self.selection.activate(person.clone());
                }
            }
            Message::CloseDetail => {
                self.selection.dismiss();
            }
            Message::OpenVote(source) => {
                self.analytics.record_vote_intent(source);
                open_external(&self.campaign.voting_url);
            }
            Message::OpenProfile(url) => {
                open_external(&url);
            }
            Message::OpenPrivacy => {
                open_external(&self.campaign.privacy_url);
            }
            Message::JumpTo(section) => {
                return scrollable::scroll_to(
                    page_scroll_id(),
                    scrollable::AbsoluteOffset {
                        x: 0.0,
                        y: section.scroll_offset(),
                    },
                );
            }
            Message::CountdownTick => {
                self.countdown.tick();
            }
            Message::HeroTick => {
                self.hero_count = (self.hero_count + 2).min(self.campaign.cohort_size);
            }
            Message::NewsletterEmailChanged(email) => {
                self.newsletter_email = email;
                self.newsletter_status = None;
            }
            Message::NewsletterPrivacyToggled(accepted) => {
                self.newsletter_privacy = accepted;
            }
            Message::NewsletterSubmitted => {
                self.newsletter_status = Some(self.newsletter_feedback());
            }
        }

        Task::none()
    }

    fn newsletter_feedback(&mut self) -> String {
        if !self.newsletter_email.contains('@') {
            "Ingresa un correo válido.".to_string()
        } else if !self.newsletter_privacy {
            "Debes aceptar la política de privacidad.".to_string()
        } else {
            self.newsletter_email.clear();
            "¡Gracias! Te avisaremos con los resultados.".to_string()
        }
    }

    /// Recurring triggers: the one-second countdown tick while the deadline
    /// has not passed, and the fast hero counter until it reaches its
    /// target. Dropping a subscription here is what cancels its timer.
    fn subscription(&self) -> Subscription<Message> {
        let countdown = if self.countdown.is_running() {
            time::every(Duration::from_secs(1)).map(|_| Message::CountdownTick)
        } else {
            Subscription::none()
        };

        let hero = if self.hero_count < self.campaign.cohort_size {
            time::every(HERO_COUNT_INTERVAL).map(|_| Message::HeroTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([countdown, hero])
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let cards: Vec<Element<'_, Message>> = self
            .visible
            .iter()
            .filter_map(|&index| self.directory.get(index).map(|p| (index, p)))
            .map(|(index, person)| ui::card::person_card(index, person))
            .collect();

        let grid: Element<'_, Message> = if cards.is_empty() {
            ui::sections::empty_results()
        } else {
            iced_aw::Wrap::with_elements(cards)
                .spacing(18.0)
                .line_spacing(18.0)
                .into()
        };

        let mut filter_bar = column![
            ui::sections::filter_chips(
                "País",
                self.directory.countries(),
                &self.filters.countries,
                Message::ToggleCountry,
            ),
            ui::sections::filter_chips(
                "Empresa",
                self.directory.companies(),
                &self.filters.companies,
                Message::ToggleCompany,
            ),
        ]
        .spacing(10);

        if self.filters.has_facets() {
            filter_bar = filter_bar.push(ui::sections::clear_facets_link());
        }

        let directory_section = column![
            row![
                column![
                    ui::sections::section_title("Los Nominados"),
                    text("Explora la lista y vota por tus favoritos.")
                        .size(14)
                        .color(ui::MUTED),
                ]
                .spacing(4),
                Space::with_width(Length::Fill),
                ui::sections::search_box(&self.filters.search),
            ]
            .align_y(Alignment::End),
            filter_bar,
            grid,
        ]
        .spacing(24);

        let content = column![
            ui::sections::hero(
                self.hero_count,
                self.countdown.snapshot(),
                self.deadline_copy(),
            ),
            ui::sections::about(),
            directory_section,
            ui::sections::faq(),
            ui::sections::newsletter(
                &self.newsletter_email,
                self.newsletter_privacy,
                self.newsletter_status.as_deref(),
            ),
            ui::sections::footer(),
        ]
        .spacing(90)
        .padding([40.0, 48.0])
        .align_x(Alignment::Center);

        let page = column![
            ui::sections::nav(),
            scrollable(container(content).center_x(Length::Fill))
                .id(page_scroll_id())
                .height(Length::Fill)
                .width(Length::Fill),
        ];

        let cta_layer = container(ui::sections::sticky_cta())
            .align_x(iced::alignment::Horizontal::Right)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill);

        let base = stack![page, cta_layer];

        match self.selection.current() {
            Some(person) => stack![
                base,
                backdrop(ui::modal::person_detail(person)),
            ]
            .into(),
            None => base.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::custom(
            "Lightspeed".to_string(),
            iced::theme::Palette {
                background: ui::BACKGROUND,
                text: ui::TEXT,
                primary: ui::ACCENT,
                success: Color::from_rgb(0.0, 0.8, 0.4),
                danger: Color::from_rgb(0.9, 0.2, 0.3),
            },
        )
    }

    /// Deadline copy shown under the hero CTA, derived from the configured
    /// instant so text and countdown can never disagree.
    fn deadline_copy(&self) -> String {
        use chrono::Datelike;

        const MONTHS: [&str; 12] = [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio",
            "agosto", "septiembre", "octubre", "noviembre", "diciembre",
        ];
        let deadline = self.campaign.deadline;
        let month = MONTHS[deadline.month0() as usize];
        format!("Votaciones abiertas hasta el {} de {}.", deadline.day(), month)
    }
}

/// Dim the page and close the detail view when the backdrop is clicked
fn backdrop(detail: Element<'_, Message>) -> Element<'_, Message> {
    opaque(
        mouse_area(
            center(opaque(detail)).style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.8).into()),
                ..container::Style::default()
            }),
        )
        .on_press(Message::CloseDetail),
    )
}

/// Launch an external URL in the system browser.
/// Missing-protocol links get an https:// prefix; failures are tolerated.
fn open_external(url: &str) {
    let url = safe_link(url);
    if url.is_empty() {
        return;
    }
    if let Err(err) = open::that_detached(&url) {
        println!("⚠️  Could not open {url}: {err}");
    }
}

fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

fn main() -> iced::Result {
    iced::application(
        "Lightspeed Awards",
        LightspeedAwards::update,
        LightspeedAwards::view,
    )
    .subscription(LightspeedAwards::subscription)
    .theme(LightspeedAwards::theme)
    .window_size((1280.0, 860.0))
    .centered()
    .run_with(LightspeedAwards::new)
}

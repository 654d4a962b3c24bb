use super::data::Person;

/// Detail-view selection: at most one person is opened at a time.
///
/// Activating a card while another person is already open replaces the
/// selection directly, without passing through `Closed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Closed,
    Open(Person),
}

impl Selection {
    /// Open the detail view on this person
    pub fn activate(&mut self, person: Person) {
        *self = Selection::Open(person);
    }

    /// Close the detail view (explicit close or backdrop click)
    pub fn dismiss(&mut self) {
        *self = Selection::Closed;
    }

    /// The currently detailed person, if any
    pub fn current(&self) -> Option<&Person> {
        match self {
            Selection::Open(person) => Some(person),
            Selection::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person {
            id: name.to_lowercase(),
            name: name.into(),
            country: "MX".into(),
            company: "Acme".into(),
            role: None,
            profile: String::new(),
            short_bio: None,
            image: None,
            honoree: true,
        }
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(Selection::default(), Selection::Closed);
    }

    #[test]
    fn test_activate_opens() {
        let mut selection = Selection::default();
        selection.activate(person("Ana"));
        assert_eq!(selection.current().map(|p| p.name.as_str()), Some("Ana"));
    }

    #[test]
    fn test_activate_replaces_without_closing() {
        let mut selection = Selection::default();
        selection.activate(person("Ana"));
        selection.activate(person("Beto"));
        assert_eq!(selection.current().map(|p| p.name.as_str()), Some("Beto"));
    }

    #[test]
    fn test_dismiss_closes() {
        let mut selection = Selection::default();
        selection.activate(person("Ana"));
        selection.dismiss();
        assert_eq!(selection, Selection::Closed);
        assert!(selection.current().is_none());
    }
}

/// Vote-intent analytics
///
/// The external analytics collaborator may or may not be present, so it is
/// modeled as an injected optional capability: when no sink is installed,
/// recording is a silent no-op rather than an error.

/// Event name pushed on every vote-intent activation
pub const GO_TO_VOTE: &str = "go_to_vote";

/// Destination for structured analytics events
pub trait EventSink {
    fn record(&self, event: &str, label: &str);
}

/// Where a vote call-to-action was activated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteSource {
    Nav,
    Hero,
    Sticky,
    Modal,
}

impl VoteSource {
    pub fn label(self) -> &'static str {
        match self {
            VoteSource::Nav => "nav_button",
            VoteSource::Hero => "hero_cta",
            VoteSource::Sticky => "sticky_cta",
            VoteSource::Modal => "modal_cta",
        }
    }
}

/// Holds the (possibly absent) sink and exposes the one event this app emits
pub struct Analytics {
    sink: Option<Box<dyn EventSink>>,
}

impl Analytics {
    pub fn new(sink: Box<dyn EventSink>) -> Self {
        Analytics { sink: Some(sink) }
    }

    /// Analytics disabled: every record call is skipped
    pub fn disabled() -> Self {
        Analytics { sink: None }
    }

    /// Push a `go_to_vote` event tagged with its source; skipped when no
    /// sink is installed.
    pub fn record_vote_intent(&self, source: VoteSource) {
        if let Some(sink) = &self.sink {
            sink.record(GO_TO_VOTE, source.label());
        }
    }
}

/// Sink that prints events to stdout, used by the binary
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn record(&self, event: &str, label: &str) {
        println!("📊 analytics: {} ({})", event, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingSink {
        events: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl EventSink for RecordingSink {
        fn record(&self, event: &str, label: &str) {
            self.events
                .borrow_mut()
                .push((event.to_string(), label.to_string()));
        }
    }

    #[test]
    fn test_records_through_installed_sink() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let analytics = Analytics::new(Box::new(RecordingSink {
            events: events.clone(),
        }));

        analytics.record_vote_intent(VoteSource::Hero);
        analytics.record_vote_intent(VoteSource::Modal);

        assert_eq!(
            *events.borrow(),
            vec![
                ("go_to_vote".to_string(), "hero_cta".to_string()),
                ("go_to_vote".to_string(), "modal_cta".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_sink_is_tolerated() {
        let analytics = Analytics::disabled();
        // Must not panic or error
        analytics.record_vote_intent(VoteSource::Sticky);
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(VoteSource::Nav.label(), "nav_button");
        assert_eq!(VoteSource::Sticky.label(), "sticky_cta");
    }
}

/// Campaign configuration
///
/// The voting URL, privacy URL, deadline instant, and cohort size are
/// sourced from an embedded config file rather than hard-coded in the page
/// copy, so the displayed deadline and the countdown can never disagree.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::Deserialize;

const CAMPAIGN_JSON: &str = include_str!("../assets/campaign.json");

/// Externally configured campaign parameters
#[derive(Debug, Clone, Deserialize)]
pub struct Campaign {
    /// External voting destination, opened in the system browser
    pub voting_url: String,
    /// Privacy policy URL, referenced but never processed
    pub privacy_url: String,
    /// The single configured voting deadline. The offset it was authored
    /// in is kept so display copy shows the campaign's local date.
    pub deadline: DateTime<FixedOffset>,
    /// Number of honorees, shown by the hero count-up
    pub cohort_size: u32,
}

impl Default for Campaign {
    fn default() -> Self {
        let campaign_tz = FixedOffset::west_opt(6 * 3600).unwrap();
        Campaign {
            voting_url: "https://votacion.lightspeed-awards.com".into(),
            privacy_url: "https://lightspeed-awards.com/privacidad".into(),
            // Matches the shipped campaign file
            deadline: campaign_tz
                .with_ymd_and_hms(2025, 12, 20, 23, 59, 59)
                .unwrap(),
            cohort_size: 66,
        }
    }
}

impl Campaign {
    /// Parse the embedded campaign file, falling back to the compiled
    /// defaults on malformed input. Configuration problems are never fatal.
    pub fn load() -> Self {
        match serde_json::from_str(CAMPAIGN_JSON) {
            Ok(campaign) => campaign,
            Err(err) => {
                println!("⚠️  Malformed campaign config, using defaults: {err}");
                Campaign::default()
            }
        }
    }

    /// The deadline as a UTC instant, for countdown arithmetic
    pub fn deadline_utc(&self) -> DateTime<Utc> {
        self.deadline.with_timezone(&Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_campaign_parses() {
        let campaign = Campaign::load();
        assert!(campaign.voting_url.starts_with("https://"));
        assert_eq!(campaign.cohort_size, 66);
    }

    #[test]
    fn test_deadline_matches_config_offset() {
        // 2025-12-20T23:59:59-06:00 in the campaign file
        let campaign = Campaign::load();
        assert_eq!(campaign.deadline, Campaign::default().deadline);
        assert_eq!(
            campaign.deadline_utc(),
            Utc.with_ymd_and_hms(2025, 12, 21, 5, 59, 59).unwrap()
        );
    }

    #[test]
    fn test_malformed_config_degrades_to_defaults() {
        let parsed: Result<Campaign, _> = serde_json::from_str("{ not json");
        assert!(parsed.is_err());
        let fallback = Campaign::default();
        assert_eq!(fallback.cohort_size, 66);
    }
}

/// Search and facet filtering for the nominee directory
///
/// Filtering is a pure derivation: the same criteria against the same
/// dataset always yield the same ordered result, and the dataset is never
/// mutated. The app recomputes the visible index list only when the
/// criteria change and caches it between renders.

use std::collections::BTreeSet;

use super::data::Person;

/// Which multi-select facet a toggle targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Country,
    Company,
}

/// Current search text and facet selections
///
/// Empty search matches everything; an empty facet set places no
/// restriction on that facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub countries: BTreeSet<String>,
    pub companies: BTreeSet<String>,
}

impl FilterCriteria {
    /// True when a person satisfies all three conditions: search substring
    /// (case-insensitive, against name or company) plus membership in each
    /// non-empty facet set.
    pub fn matches(&self, person: &Person) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || person.name.to_lowercase().contains(&needle)
            || person.company.to_lowercase().contains(&needle);
        let matches_country =
            self.countries.is_empty() || self.countries.contains(&person.country);
        let matches_company =
            self.companies.is_empty() || self.companies.contains(&person.company);

        matches_search && matches_country && matches_company
    }

    /// Value-replacing facet toggle: returns new criteria with `value`
    /// removed from the facet set if present, inserted otherwise.
    pub fn toggled(&self, facet: Facet, value: &str) -> FilterCriteria {
        let mut next = self.clone();
        let set = match facet {
            Facet::Country => &mut next.countries,
            Facet::Company => &mut next.companies,
        };
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        next
    }

    /// New criteria with a different search text
    pub fn with_search(&self, search: String) -> FilterCriteria {
        FilterCriteria {
            search,
            ..self.clone()
        }
    }

    /// Full reset: empty search, no facet selections
    pub fn cleared() -> FilterCriteria {
        FilterCriteria::default()
    }

    /// Drop the facet selections but keep the search text
    pub fn cleared_facets(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            ..FilterCriteria::default()
        }
    }

    /// True when any facet is selected (drives the "clear filters" action)
    pub fn has_facets(&self) -> bool {
        !self.countries.is_empty() || !self.companies.is_empty()
    }
}

/// Derive the visible subset as indices into `people`, preserving the
/// original relative order.
pub fn apply(people: &[Person], criteria: &FilterCriteria) -> Vec<usize> {
    people
        .iter()
        .enumerate()
        .filter(|(_, person)| criteria.matches(person))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, company: &str, country: &str) -> Person {
        Person {
            id: name.to_lowercase(),
            name: name.into(),
            country: country.into(),
            company: company.into(),
            role: None,
            profile: String::new(),
            short_bio: None,
            image: None,
            honoree: true,
        }
    }

    fn store() -> Vec<Person> {
        vec![
            person("Ana Ruiz", "Acme", "MX"),
            person("Beto", "Zeta", "AR"),
        ]
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let people = store();
        assert_eq!(apply(&people, &FilterCriteria::default()), [0, 1]);
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let people = store();
        let criteria = FilterCriteria::default().with_search("ana".into());
        assert_eq!(apply(&people, &criteria), [0]);
    }

    #[test]
    fn test_search_matches_company() {
        let people = store();
        let criteria = FilterCriteria::default().with_search("zeta".into());
        assert_eq!(apply(&people, &criteria), [1]);
    }

    #[test]
    fn test_country_facet_restricts() {
        let people = store();
        let criteria = FilterCriteria::default().toggled(Facet::Country, "AR");
        assert_eq!(apply(&people, &criteria), [1]);
    }

    #[test]
    fn test_multiple_countries_keep_original_order() {
        let people = store();
        let criteria = FilterCriteria::default()
            .toggled(Facet::Country, "MX")
            .toggled(Facet::Country, "AR");
        assert_eq!(apply(&people, &criteria), [0, 1]);
    }

    #[test]
    fn test_all_conditions_are_anded() {
        let people = store();
        let criteria = FilterCriteria::default()
            .with_search("ana".into())
            .toggled(Facet::Country, "AR");
        assert!(apply(&people, &criteria).is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let people = store();
        let criteria = FilterCriteria::default().with_search("a".into());
        let first = apply(&people, &criteria);
        let second = apply(&people, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_round_trip() {
        let empty = FilterCriteria::default();
        let toggled_once = empty.toggled(Facet::Company, "Acme");
        assert!(toggled_once.companies.contains("Acme"));

        let toggled_twice = toggled_once.toggled(Facet::Company, "Acme");
        assert_eq!(toggled_twice, empty);
    }

    #[test]
    fn test_clear_resets_everything() {
        let criteria = FilterCriteria::default()
            .with_search("ana".into())
            .toggled(Facet::Country, "MX");
        assert_eq!(FilterCriteria::cleared(), FilterCriteria::default());
        assert!(criteria.has_facets());

        let facets_only = criteria.cleared_facets();
        assert_eq!(facets_only.search, "ana");
        assert!(!facets_only.has_facets());
    }
}

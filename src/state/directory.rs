use thiserror::Error;

use super::data::Person;

/// The nominee dataset embedded at compile time.
/// Authored externally; the app only reads it.
const PEOPLE_JSON: &str = include_str!("../../assets/people.json");

/// Errors raised while loading the nominee dataset
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to parse nominee dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The Directory holds the full, immutable nominee collection plus the
/// facet value lists derived from it.
///
/// The facet lists (distinct countries and companies, sorted) are computed
/// once here at load time and cached; the dataset never changes afterwards,
/// so they are never recomputed.
pub struct Directory {
    people: Vec<Person>,
    countries: Vec<String>,
    companies: Vec<String>,
}

impl Directory {
    /// Parse the embedded dataset and derive the facet lists.
    pub fn load() -> Result<Self, DirectoryError> {
        let people: Vec<Person> = serde_json::from_str(PEOPLE_JSON)?;
        Ok(Self::from_people(people))
    }

    /// Build a directory from an already-materialized collection.
    pub fn from_people(people: Vec<Person>) -> Self {
        let countries = distinct_sorted(people.iter().map(|p| p.country.as_str()));
        let companies = distinct_sorted(people.iter().map(|p| p.company.as_str()));
        Directory {
            people,
            countries,
            companies,
        }
    }

    /// All nominees in their original order
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Distinct countries present in the dataset, sorted lexicographically
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Distinct companies present in the dataset, sorted lexicographically
    pub fn companies(&self) -> &[String] {
        &self.companies
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values.map(String::from).collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, country: &str, company: &str) -> Person {
        Person {
            id: name.to_lowercase().replace(' ', "-"),
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

    #[test]
    fn test_embedded_dataset_parses() {
        let directory = Directory::load().expect("embedded dataset must parse");
        assert!(!directory.people().is_empty());
        assert!(!directory.countries().is_empty());
    }

    #[test]
    fn test_facets_are_distinct_and_sorted() {
        let directory = Directory::from_people(vec![
            sample("Ana Ruiz", "MX", "Acme"),
            sample("Beto", "AR", "Zeta"),
            sample("Carla", "AR", "Acme"),
        ]);
        assert_eq!(directory.countries(), ["AR", "MX"]);
        assert_eq!(directory.companies(), ["Acme", "Zeta"]);
    }

    #[test]
    fn test_original_order_preserved() {
        let directory = Directory::from_people(vec![
            sample("Zoe", "MX", "Acme"),
            sample("Ana", "AR", "Zeta"),
        ]);
        let names: Vec<_> = directory.people().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Zoe", "Ana"]);
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Typed spans detected in a document, each list ordered by first
/// occurrence and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedEntities {
    pub dates: Vec<String>,
    pub case_ids: Vec<String>,
    pub people: Vec<String>,
    pub organizations: Vec<String>,
    pub locations: Vec<String>,
}

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec";

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap(),
        Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
        Regex::new(&format!(r"\b(?:{MONTHS})\.?\s+\d{{1,2}},?\s+\d{{4}}\b")).unwrap(),
        Regex::new(&format!(r"\b\d{{1,2}}\s+(?:{MONTHS})\.?,?\s+\d{{4}}\b")).unwrap(),
    ]
});

static CASE_ID_LABELED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:case|file|lab|report|exhibit)\s+(?:no\.?|number|num\.?|id|#)[:.]?\s*#?\s*([A-Za-z]{0,4}[-/]?\d[\dA-Za-z/-]*)",
    )
    .unwrap()
});

static CASE_ID_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{2,4}-[A-Z]{1,5}-\d{2,6}|[A-Z]{1,5}-\d{2,4}-\d{2,6})\b").unwrap());

static PERSON_TITLED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:Dr|Mr|Mrs|Ms|Prof|Det|Detective|Officer|Examiner|Analyst|Technician|Sgt|Lt|Capt)\.?\s+((?:[A-Z][a-z]+|[A-Z]\.)(?:\s+(?:[A-Z][a-z]+|[A-Z]\.))*)",
    )
    .unwrap()
});

static PERSON_REPORTING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b([A-Z][a-z]+(?:\s+[A-Z]\.)?\s+[A-Z][a-z]+)\s+(?:stated|reported|testified|examined|analyzed|analysed|concluded|collected|observed|performed|reviewed|signed|submitted)\b",
    )
    .unwrap()
});

static ORG_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b((?:[A-Z][A-Za-z&']+\s+){0,3}(?:Department|Laboratory|Laboratories|Bureau|Agency|Institute|University|College|Office|Division|Unit|Hospital)(?:\s+of(?:\s+[A-Z][A-Za-z]+)+)?)",
    )
    .unwrap()
});

static ORG_ACRONYM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Z]{3,5})\b").unwrap());

/// Institutional words that disqualify a capitalized pair as a person.
static ORG_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Department",
        "Laboratory",
        "Laboratories",
        "Bureau",
        "Agency",
        "Institute",
        "University",
        "College",
        "Office",
        "Division",
        "Unit",
        "Hospital",
    ]
    .into_iter()
    .collect()
});

/// Scientific and document acronyms that look like agency names but are not.
static ACRONYM_EXCLUDE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["DNA", "RNA", "PCR", "STR", "GSR", "PDF", "USA", "III"]
        .into_iter()
        .collect()
});

static LOCATION_CITY_STATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+(?:\s[A-Z][a-z]+)?,\s[A-Z]{2})\b").unwrap());

static LOCATION_PREPOSITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:in|at|near)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\b").unwrap()
});

/// Capitalized words the prepositional location pattern must ignore.
static LOCATION_EXCLUDE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
        "Saturday", "Sunday", "The", "This", "These",
    ]
    .into_iter()
    .collect()
});

/// Run every pattern of a category and return the captures ordered by
/// match position, de-duplicated.
fn collect(patterns: &[&Regex], text: &str, filter: impl Fn(&str) -> bool) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();
    for re in patterns {
        for caps in re.captures_iter(text) {
            let m = caps.get(1).unwrap_or_else(|| caps.get(0).unwrap());
            let value = m.as_str().trim().to_string();
            if filter(&value) {
                found.push((m.start(), value));
            }
        }
    }
    found.sort_by_key(|(pos, _)| *pos);
    let mut seen = HashSet::new();
    found
        .into_iter()
        .filter(|(_, v)| seen.insert(v.clone()))
        .map(|(_, v)| v)
        .collect()
}

/// Rule-based entity extraction over raw document text.
pub fn extract_entities(text: &str) -> ExtractedEntities {
    let dates = collect(
        &DATE_PATTERNS.iter().collect::<Vec<_>>(),
        text,
        |_| true,
    );
    let case_ids = collect(&[&*CASE_ID_LABELED, &*CASE_ID_BARE], text, |v| v.len() >= 3);
    let people = collect(&[&*PERSON_TITLED, &*PERSON_REPORTING], text, |v| {
        !v.split_whitespace().any(|w| ORG_WORDS.contains(w))
    });
    let mut seen = HashSet::new();
    let organizations: Vec<String> = collect(&[&*ORG_KEYWORD, &*ORG_ACRONYM], text, |v| {
        !ACRONYM_EXCLUDE.contains(v)
    })
    .into_iter()
    .map(|v| v.strip_prefix("The ").map(str::to_string).unwrap_or(v))
    .filter(|v| seen.insert(v.clone()))
    .collect();
    let locations = collect(&[&*LOCATION_CITY_STATE, &*LOCATION_PREPOSITION], text, |v| {
        let first = v.split_whitespace().next().unwrap_or("");
        !LOCATION_EXCLUDE.contains(first)
    });
    // "in Springfield, IL" fires both patterns; keep only the city-state form.
    let locations: Vec<String> = locations
        .iter()
        .filter(|v| {
            !locations
                .iter()
                .any(|other| other.starts_with(&format!("{v}, ")))
        })
        .cloned()
        .collect();

    ExtractedEntities {
        dates,
        case_ids,
        people,
        organizations,
        locations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_numeric_and_spelled_dates() {
        let e = extract_entities("Collected 3/14/2023, logged 2023-03-15, reviewed March 16, 2023.");
        assert_eq!(e.dates, ["3/14/2023", "2023-03-15", "March 16, 2023"]);
    }

    #[test]
    fn extracts_labeled_case_numbers() {
        let e = extract_entities("Reference Case No. 2023-04-117 throughout this report.");
        assert_eq!(e.case_ids, ["2023-04-117"]);

        let e = extract_entities("Samples under Lab # B-1182 were retained.");
        assert_eq!(e.case_ids, ["B-1182"]);
    }

    #[test]
    fn extracts_bare_case_identifiers() {
        let e = extract_entities("Compared against profile FR-2021-00312 from the archive.");
        assert_eq!(e.case_ids, ["FR-2021-00312"]);
    }

    #[test]
    fn case_label_without_identifier_matches_nothing() {
        let e = extract_entities("In this case the analysis was repeated.");
        assert!(e.case_ids.is_empty());
    }

    #[test]
    fn extracts_titled_people() {
        let e = extract_entities("Dr. Maria Reyes examined the swab. Det. Cole collected it.");
        assert_eq!(e.people, ["Maria Reyes", "Cole"]);
    }

    #[test]
    fn extracts_people_by_reporting_verb() {
        let e = extract_entities("Alan Park testified that the seal was intact.");
        assert_eq!(e.people, ["Alan Park"]);
    }

    #[test]
    fn extracts_organizations() {
        let e = extract_entities("The State Crime Laboratory and the FBI reviewed the results.");
        assert_eq!(e.organizations, ["State Crime Laboratory", "FBI"]);
    }

    #[test]
    fn dna_is_not_an_organization() {
        let e = extract_entities("DNA was recovered and STR typing followed.");
        assert!(e.organizations.is_empty());
    }

    #[test]
    fn extracts_city_state_locations() {
        let e = extract_entities("The scene at 44 Oak Street, Springfield, IL was secured.");
        assert_eq!(e.locations, ["Springfield, IL"]);
    }

    #[test]
    fn city_state_subsumes_bare_city_match() {
        let e = extract_entities("The scene in Springfield, IL was processed on arrival.");
        assert_eq!(e.locations, ["Springfield, IL"]);
    }

    #[test]
    fn prepositional_location_excludes_months() {
        let e = extract_entities("Testing resumed in March at Lakeside.");
        assert_eq!(e.locations, ["Lakeside"]);
    }

    #[test]
    fn deduplicates_preserving_order() {
        let e = extract_entities("Logged 3/14/2023. Sealed 3/14/2023. Reopened 4/01/2023.");
        assert_eq!(e.dates, ["3/14/2023", "4/01/2023"]);
    }
}

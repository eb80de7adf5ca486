//! Regenerable sections: `<section begin=KEY/>` ... `<section end=KEY/>`.
//!
//! Wrapping is a pure function of key, body and options, so regenerating
//! from unchanged data reproduces the page byte for byte. Splicing replaces
//! only the interior of an existing marker pair and leaves the hand-written
//! text around it alone.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::WikiError;
use crate::Result;

/// Marker and header settings shared by every section of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOptions {
    /// Prepended to every key in the markers
    pub prefix: String,
    /// Game version for the `{{Version|...}}` header
    pub version: Option<String>,
}

impl Default for SectionOptions {
    fn default() -> Self {
        SectionOptions {
            prefix: "autogenerated_".to_string(),
            version: None,
        }
    }
}

impl SectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Full marker name for a section key.
    pub fn marker_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub fn begin_marker(&self, key: &str) -> String {
        format!("<section begin={}/>", self.marker_name(key))
    }

    pub fn end_marker(&self, key: &str) -> String {
        format!("<section end={}/>", self.marker_name(key))
    }

    /// Text between the markers.
    pub fn interior(&self, section: &Section) -> String {
        match (&self.version, section.version_header, section.inline) {
            (_, _, true) => section.body.clone(),
            (Some(version), true, false) => {
                format!("\n{{{{Version|{}}}}}\n{}\n", version, section.body)
            }
            _ => format!("\n{}\n", section.body),
        }
    }

    /// The section with its markers.
    pub fn wrap(&self, section: &Section) -> String {
        format!(
            "{}{}{}",
            self.begin_marker(&section.key),
            self.interior(section),
            self.end_marker(&section.key)
        )
    }
}

/// Turn a group key into a marker-safe identifier.
///
/// Anything outside `[A-Za-z0-9_-]` becomes `_`, so `town+city` gives
/// `town_city`.
pub fn section_key(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// One named block of generated markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub key: String,
    pub body: String,
    /// Put a `{{Version|...}}` line above the body
    pub version_header: bool,
    /// Markers hug the body with no surrounding newlines
    pub inline: bool,
}

impl Section {
    pub fn new(key: impl AsRef<str>, body: impl Into<String>) -> Self {
        Section {
            key: section_key(key.as_ref()),
            body: body.into(),
            version_header: false,
            inline: false,
        }
    }

    pub fn versioned(mut self) -> Self {
        self.version_header = true;
        self
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }
}

/// Sections of one generation pass, keyed uniquely, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionSet {
    sections: IndexMap<String, Section>,
}

impl SectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section; a key already present is an error.
    pub fn insert(&mut self, section: Section) -> Result<()> {
        if self.sections.contains_key(&section.key) {
            return Err(WikiError::DuplicateSection(section.key));
        }
        self.sections.insert(section.key.clone(), section);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Section> {
        self.sections.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Move every section of `other` into this set.
    pub fn extend(&mut self, other: SectionSet) -> Result<()> {
        for section in other.sections.into_values() {
            self.insert(section)?;
        }
        Ok(())
    }

    /// All sections wrapped in markers, separated by newlines.
    pub fn render(&self, options: &SectionOptions) -> String {
        self.iter()
            .map(|section| options.wrap(section))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Key → unwrapped body.
    pub fn bodies(&self) -> IndexMap<String, String> {
        self.sections
            .iter()
            .map(|(key, section)| (key.clone(), section.body.clone()))
            .collect()
    }
}

fn marker_span(document: &str, key: &str, options: &SectionOptions) -> Result<(usize, usize)> {
    let begin = options.begin_marker(key);
    let end = options.end_marker(key);
    match (document.find(&begin), document.find(&end)) {
        (None, None) => Err(WikiError::SectionMarkerNotFound(key.to_string())),
        (Some(start), Some(stop)) if stop >= start + begin.len() => {
            Ok((start + begin.len(), stop))
        }
        _ => Err(WikiError::UnbalancedSectionMarkers(key.to_string())),
    }
}

/// The interior of a section in an existing page.
pub fn extract_section<'a>(
    document: &'a str,
    key: &str,
    options: &SectionOptions,
) -> Result<&'a str> {
    let (start, stop) = marker_span(document, key, options)?;
    Ok(&document[start..stop])
}

/// Replace the interior of the section's markers in `document`.
///
/// Text outside the marker pair is returned untouched. Missing or unbalanced
/// markers are errors and leave the caller's document as it was.
pub fn splice_section(document: &str, section: &Section, options: &SectionOptions) -> Result<String> {
    let (start, stop) = marker_span(document, &section.key, options)?;
    let mut spliced = String::with_capacity(document.len() + section.body.len());
    spliced.push_str(&document[..start]);
    spliced.push_str(&options.interior(section));
    spliced.push_str(&document[stop..]);
    Ok(spliced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_section() -> Section {
        Section::new("buildings_town_city_religious", "{| ... |}").versioned()
    }

    #[test]
    fn test_wrap_with_version_header() {
        let options = SectionOptions::new().version("1.0.10");
        assert_eq!(
            options.wrap(&sample_section()),
            "<section begin=autogenerated_buildings_town_city_religious/>\n\
             {{Version|1.0.10}}\n\
             {| ... |}\n\
             <section end=autogenerated_buildings_town_city_religious/>"
        );
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let options = SectionOptions::new().version("1.0");
        let section = sample_section();
        assert_eq!(options.wrap(&section), options.wrap(&section));
    }

    #[test]
    fn test_version_header_needs_a_version() {
        let wrapped = SectionOptions::new().wrap(&sample_section());
        assert!(!wrapped.contains("Version"));
    }

    #[test]
    fn test_inline_section() {
        let section = Section::new("concept_army", "Armies fight.").inline();
        assert_eq!(
            SectionOptions::new().wrap(&section),
            "<section begin=autogenerated_concept_army/>Armies fight.<section end=autogenerated_concept_army/>"
        );
    }

    #[test]
    fn test_section_key_normalization() {
        assert_eq!(section_key("buildings_town+city_religious"), "buildings_town_city_religious");
        assert_eq!(section_key("laws io_hre law"), "laws_io_hre_law");
        assert_eq!(section_key("goods-list_2"), "goods-list_2");
    }

    #[test]
    fn test_duplicate_section_key() {
        let mut set = SectionSet::new();
        set.insert(Section::new("a+b", "one")).unwrap();
        let err = set.insert(Section::new("a_b", "two")).unwrap_err();
        assert!(matches!(err, WikiError::DuplicateSection(key) if key == "a_b"));
    }

    #[test]
    fn test_splice_replaces_only_interior() {
        let options = SectionOptions::new();
        let page = "Intro text\n<section begin=autogenerated_x/>\nold\n<section end=autogenerated_x/>\nOutro";
        let spliced = splice_section(page, &Section::new("x", "new"), &options).unwrap();
        assert_eq!(
            spliced,
            "Intro text\n<section begin=autogenerated_x/>\nnew\n<section end=autogenerated_x/>\nOutro"
        );
        assert_eq!(extract_section(&spliced, "x", &options).unwrap(), "\nnew\n");
        // splicing again with the same body changes nothing
        let again = splice_section(&spliced, &Section::new("x", "new"), &options).unwrap();
        assert_eq!(again, spliced);
    }

    #[test]
    fn test_splice_missing_and_unbalanced_markers() {
        let options = SectionOptions::new();
        let section = Section::new("x", "new");
        assert!(matches!(
            splice_section("no markers", &section, &options),
            Err(WikiError::SectionMarkerNotFound(_))
        ));
        assert!(matches!(
            splice_section("<section begin=autogenerated_x/> dangling", &section, &options),
            Err(WikiError::UnbalancedSectionMarkers(_))
        ));
        assert!(matches!(
            splice_section(
                "<section end=autogenerated_x/><section begin=autogenerated_x/>",
                &section,
                &options
            ),
            Err(WikiError::UnbalancedSectionMarkers(_))
        ));
    }

    #[test]
    fn test_render_set_in_insertion_order() {
        let mut set = SectionSet::new();
        set.insert(Section::new("b", "two")).unwrap();
        set.insert(Section::new("a", "one")).unwrap();
        let rendered = set.render(&SectionOptions::new());
        assert!(rendered.find("autogenerated_b").unwrap() < rendered.find("autogenerated_a").unwrap());
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}

//! Markup helpers shared by all generators.

/// Shortest readable form of a number: `1.0` → `1`, `0.25` → `0.25`.
///
/// Rounds to four decimals so that float noise from unit conversions never
/// reaches the page.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// A bullet list of the non-blank items at the given depth, or `""`.
pub fn wiki_list<I, S>(items: I, depth: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stars = "*".repeat(depth.max(1));
    items
        .into_iter()
        .filter(|item| !item.as_ref().trim().is_empty())
        .map(|item| format!("{} {}", stars, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Push every line of an existing list `extra` levels deeper.
///
/// Lines that are not list items become items at depth `extra`.
pub fn nest_wiki_list(text: &str, extra: usize) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let depth = line.chars().take_while(|c| *c == '*').count();
            let rest = line[depth..].trim_start();
            format!("{} {}", "*".repeat(depth.max(1) + extra), rest)
        })
        .collect()
}

/// Join headed blocks, skipping blank ones: `'''Header:'''\ncontent`.
///
/// An empty header emits the content without a heading line.
pub fn merge_sections<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    parts
        .into_iter()
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(header, content)| {
            if header.is_empty() {
                content
            } else {
                format!("'''{}:'''\n{}", header, content)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn section_heading(text: &str, level: usize) -> String {
    let marks = "=".repeat(level);
    format!("{} {} {}", marks, text, marks)
}

pub fn bold(text: &str) -> String {
    format!("'''{}'''", text)
}

pub fn flag(name: &str) -> String {
    format!("{{{{flag|{}}}}}", name)
}

/// `{{icon|key}}` for things without a rich entity.
pub fn icon_template(key: &str) -> String {
    format!("{{{{icon|{}}}}}", key)
}

/// Yes/No icon for a set boolean; unset renders empty.
pub fn yes_no_icon(label: &str, value: Option<bool>) -> String {
    match value {
        None => String::new(),
        Some(true) => format!("[[File:Yes.png|20px|{}]]", label),
        Some(false) => format!("[[File:No.png|20px|Not {}]]", label),
    }
}

/// Title case for raw keys: `trade_company` → `Trade Company`.
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, leave the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The `{{iconbox|...}}` template with named parameters in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Iconbox {
    title: String,
    description: String,
    params: Vec<(String, String)>,
}

impl Iconbox {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Iconbox {
            title: title.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn render(&self) -> String {
        let mut out = format!("{{{{iconbox|{}|{}", self.title, self.description);
        for (name, value) in &self.params {
            out.push_str(&format!("|{}={}", name, value));
        }
        out.push_str("}}");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1500.0), "1500");
    }

    #[test]
    fn test_wiki_list_skips_blank_items() {
        assert_eq!(wiki_list(["a", "", "  ", "b"], 1), "* a\n* b");
        assert_eq!(wiki_list(Vec::<String>::new(), 1), "");
        assert_eq!(wiki_list(["x"], 2), "** x");
    }

    #[test]
    fn test_nest_wiki_list_keeps_depth() {
        let nested = nest_wiki_list("* a\n** b\nplain", 1);
        assert_eq!(nested, vec!["** a", "*** b", "** plain"]);
    }

    #[test]
    fn test_merge_sections() {
        let merged = merge_sections([
            ("Location", "* in city".to_string()),
            ("Country", String::new()),
            ("To keep", "* not at war".to_string()),
        ]);
        assert_eq!(merged, "'''Location:'''\n* in city\n'''To keep:'''\n* not at war");
        assert_eq!(merge_sections([("A", " ".to_string())]), "");
    }

    #[test]
    fn test_yes_no_icon_tri_state() {
        assert_eq!(yes_no_icon("Unique", None), "");
        assert_eq!(yes_no_icon("Unique", Some(true)), "[[File:Yes.png|20px|Unique]]");
        assert_eq!(
            yes_no_icon("Unique", Some(false)),
            "[[File:No.png|20px|Not Unique]]"
        );
    }

    #[test]
    fn test_iconbox_param_order() {
        let iconbox = Iconbox::new("Temple", "A place of worship")
            .param("w", "300px")
            .param("desc_class", "hidem")
            .param("image", "Temple.png");
        assert_eq!(
            iconbox.render(),
            "{{iconbox|Temple|A place of worship|w=300px|desc_class=hidem|image=Temple.png}}"
        );
    }

    #[test]
    fn test_humanize_and_capitalize() {
        assert_eq!(humanize_key("trade_company"), "Trade Company");
        assert_eq!(capitalize("vassal"), "Vassal");
        assert_eq!(capitalize(""), "");
        assert_eq!(section_heading("Town", 3), "=== Town ===");
        assert_eq!(flag("FRA"), "{{flag|FRA}}");
    }
}

//! Compound selector matching for the in-memory document.
//!
//! Supports a single compound selector: an optional tag (or `*`) followed by
//! any number of `#id`, `.class`, `[attr]` and `[attr=value]` parts.
//! Combinators and selector lists are not recognised and match nothing.

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Selector {
    pub(crate) fn parse(selector: &str) -> Option<Self> {
        let mut rest = selector.trim();
        if rest.is_empty() {
            return None;
        }
        let mut parsed = Self::default();
        let tag_len = ident_len(rest);
        if tag_len > 0 {
            parsed.tag = Some(rest[..tag_len].to_ascii_lowercase());
            rest = &rest[tag_len..];
        } else if let Some(stripped) = rest.strip_prefix('*') {
            rest = stripped;
        }

        while let Some(first) = rest.chars().next() {
            match first {
                '#' | '.' => {
                    let body = &rest[1..];
                    let len = ident_len(body);
                    if len == 0 {
                        return None;
                    }
                    let name = body[..len].to_string();
                    if first == '#' {
                        parsed.id = Some(name);
                    } else {
                        parsed.classes.push(name);
                    }
                    rest = &body[len..];
                }
                '[' => {
                    let close = rest.find(']')?;
                    let inner = &rest[1..close];
                    let (name, value) = match inner.split_once('=') {
                        Some((name, value)) => (name.trim(), Some(unquote(value.trim()))),
                        None => (inner.trim(), None),
                    };
                    if name.is_empty() {
                        return None;
                    }
                    parsed
                        .attributes
                        .push((name.to_string(), value.map(str::to_string)));
                    rest = &rest[close + 1..];
                }
                _ => return None,
            }
        }
        Some(parsed)
    }

    pub(crate) fn matches(&self, tag: &str, attributes: &BTreeMap<String, String>) -> bool {
        if self.tag.as_deref().is_some_and(|wanted| wanted != tag) {
            return false;
        }
        if let Some(id) = &self.id {
            if attributes.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let class_attr = attributes.get("class").map_or("", String::as_str);
            let present: Vec<&str> = class_attr.split_whitespace().collect();
            if !self
                .classes
                .iter()
                .all(|class| present.contains(&class.as_str()))
            {
                return false;
            }
        }
        self.attributes
            .iter()
            .all(|(name, expected)| match (attributes.get(name), expected) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            })
    }
}

fn ident_len(input: &str) -> usize {
    input
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        .map_or(input.len(), |(idx, _)| idx)
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn matches_tag_id_and_class() {
        let node = attrs(&[("id", "userDropdown"), ("class", "dropdown open")]);
        assert!(Selector::parse("#userDropdown").is_some_and(|s| s.matches("div", &node)));
        assert!(Selector::parse("div.dropdown").is_some_and(|s| s.matches("div", &node)));
        assert!(Selector::parse(".dropdown.open").is_some_and(|s| s.matches("div", &node)));
        assert!(!Selector::parse("span.dropdown").is_some_and(|s| s.matches("div", &node)));
        assert!(!Selector::parse(".closed").is_some_and(|s| s.matches("div", &node)));
    }

    #[test]
    fn matches_attribute_presence_and_value() {
        let node = attrs(&[("data-toggle-password", "#id_password")]);
        assert!(Selector::parse("[data-toggle-password]").is_some_and(|s| s.matches("button", &node)));
        assert!(
            Selector::parse(r##"button[data-toggle-password="#id_password"]"##)
                .is_some_and(|s| s.matches("button", &node))
        );
        assert!(
            !Selector::parse("[data-toggle-password='#other']")
                .is_some_and(|s| s.matches("button", &node))
        );
    }

    #[test]
    fn combinators_are_not_supported() {
        assert!(Selector::parse("nav a").is_none());
        assert!(Selector::parse("ul > li").is_none());
        assert!(Selector::parse("").is_none());
        assert!(Selector::parse("#").is_none());
    }
}

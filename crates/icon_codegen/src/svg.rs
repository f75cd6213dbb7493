//! SVG normalization for generated icon components.
//!
//! The generator does not need a full XML stack: icon sources are small, attribute-only vector
//! documents. This module strips prolog noise, checks that the remaining markup is a single
//! well-formed `<svg>` tree, rewrites configured attribute values, and returns the root's
//! `viewBox` plus the serialized inner markup. Root presentation attributes such as `fill="none"`
//! or `stroke-width` are carried on a wrapping `<g>` so they still apply to the children.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::CodegenConfig;
use crate::error::{CodegenError, CodegenResult};

/// Normalized icon markup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedSvg {
    /// Root `viewBox`, whitespace-normalized.
    pub view_box: String,
    /// Serialized children of the root `<svg>` element.
    pub body: String,
    /// Whether the markup declares a `<defs>` element.
    pub has_defs: bool,
}

#[derive(Debug)]
enum Token {
    Open {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    Close {
        name: String,
    },
    Text(String),
}

fn noise_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<\?.*?\?>|<!--.*?-->|(?i:<!DOCTYPE[^>]*>)").expect("valid noise pattern")
    })
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"<(/?)([A-Za-z_][\w:.\-]*)((?:\s+[A-Za-z_:][\w:.\-]*\s*=\s*(?:"[^"]*"|'[^']*'))*)\s*(/?)>"#,
        )
        .expect("valid tag pattern")
    })
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([A-Za-z_:][\w:.\-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("valid attribute pattern")
    })
}

/// Parse and normalize an SVG document.
pub fn parse_svg(source: &str, config: &CodegenConfig) -> CodegenResult<ParsedSvg> {
    let markup = noise_regex().replace_all(source, "");
    let mut tokens = tokenize(&markup)?.into_iter();

    let (root_attributes, mut root_closed) = match tokens.next() {
        Some(Token::Open {
            name,
            attributes,
            self_closing,
        }) if name == "svg" => (attributes, self_closing),
        Some(Token::Open { name, .. }) => {
            return Err(CodegenError::parse(format!(
                "root element is <{name}>, expected <svg>"
            )))
        }
        Some(Token::Close { name }) => {
            return Err(CodegenError::parse(format!("unexpected </{name}> before root")))
        }
        Some(Token::Text(_)) => return Err(CodegenError::parse("text before the root <svg>")),
        None => return Err(CodegenError::parse("document is empty")),
    };

    let mut body = String::new();
    let mut open: Vec<String> = Vec::new();
    let mut has_defs = false;

    for token in tokens {
        if root_closed {
            return Err(CodegenError::parse("content after the root </svg>"));
        }
        match token {
            Token::Open {
                name,
                attributes,
                self_closing,
            } => {
                has_defs |= name == "defs";
                write_open_tag(&mut body, &name, &attributes, self_closing, config);
                if !self_closing {
                    open.push(name);
                }
            }
            Token::Close { name } => match open.pop() {
                Some(expected) if expected == name => {
                    let _ = write!(body, "</{name}>");
                }
                Some(expected) => {
                    return Err(CodegenError::parse(format!(
                        "mismatched </{name}>, expected </{expected}>"
                    )))
                }
                None if name == "svg" => root_closed = true,
                None => return Err(CodegenError::parse(format!("unexpected </{name}>"))),
            },
            Token::Text(text) => body.push_str(&text),
        }
    }

    if !root_closed {
        let unclosed = open.last().map_or("svg", String::as_str);
        return Err(CodegenError::parse(format!("unclosed <{unclosed}>")));
    }

    let view_box = resolve_view_box(&root_attributes, &config.default_view_box);
    let presentation: Vec<(String, String)> = root_attributes
        .into_iter()
        .filter(|(name, _)| !is_root_only_attribute(name))
        .collect();
    if !presentation.is_empty() && !body.is_empty() {
        let mut wrapped = String::with_capacity(body.len() + 64);
        write_open_tag(&mut wrapped, "g", &presentation, false, config);
        wrapped.push_str(&body);
        wrapped.push_str("</g>");
        body = wrapped;
    }

    Ok(ParsedSvg {
        view_box,
        body,
        has_defs,
    })
}

/// Root attributes the rendered `<svg>` element supplies itself.
fn is_root_only_attribute(name: &str) -> bool {
    matches!(name, "width" | "height" | "viewBox" | "xmlns") || name.starts_with("xmlns:")
}

fn tokenize(markup: &str) -> CodegenResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for caps in tag_regex().captures_iter(markup) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_text(&mut tokens, &markup[cursor..whole.start()], cursor)?;
        cursor = whole.end();

        let name = caps[2].to_string();
        let attributes = parse_attributes(&name, &caps[3])?;
        let self_closing = &caps[4] == "/";

        if &caps[1] == "/" {
            if self_closing || !attributes.is_empty() {
                return Err(CodegenError::parse(format!("malformed closing tag </{name}>")));
            }
            tokens.push(Token::Close { name });
        } else {
            tokens.push(Token::Open {
                name,
                attributes,
                self_closing,
            });
        }
    }

    push_text(&mut tokens, &markup[cursor..], cursor)?;
    Ok(tokens)
}

fn push_text(tokens: &mut Vec<Token>, text: &str, offset: usize) -> CodegenResult<()> {
    if let Some(position) = text.find('<') {
        return Err(CodegenError::parse(format!(
            "malformed markup at byte {}",
            offset + position
        )));
    }
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        tokens.push(Token::Text(trimmed.to_string()));
    }
    Ok(())
}

fn parse_attributes(element: &str, raw: &str) -> CodegenResult<Vec<(String, String)>> {
    let mut seen = BTreeSet::new();
    let mut attributes = Vec::new();
    for caps in attribute_regex().captures_iter(raw) {
        let name = caps[1].to_string();
        if !seen.insert(name.clone()) {
            return Err(CodegenError::parse(format!(
                "duplicate attribute `{name}` on <{element}>"
            )));
        }
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |value| value.as_str())
            .to_string();
        attributes.push((name, value));
    }
    Ok(attributes)
}

fn write_open_tag(
    out: &mut String,
    name: &str,
    attributes: &[(String, String)],
    self_closing: bool,
    config: &CodegenConfig,
) {
    let _ = write!(out, "<{name}");
    for (attribute, value) in attributes {
        let value = replace_value(value, config);
        let _ = write!(out, " {attribute}=\"{}\"", value.replace('"', "&quot;"));
    }
    out.push_str(if self_closing { "/>" } else { ">" });
}

fn replace_value<'a>(value: &'a str, config: &'a CodegenConfig) -> &'a str {
    config
        .replace_colors
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(value))
        .map_or(value, |(_, to)| to.as_str())
}

fn resolve_view_box(root: &[(String, String)], fallback: &str) -> String {
    let attribute = |name: &str| {
        root.iter()
            .find(|(attribute, _)| attribute == name)
            .map(|(_, value)| value.as_str())
    };

    if let Some(view_box) = attribute("viewBox") {
        let parts: Vec<&str> = view_box
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() == 4 {
            return parts.join(" ");
        }
    }

    let dimension = |name: &str| {
        attribute(name)
            .map(|raw| raw.trim().trim_end_matches("px"))
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|value| *value > 0.0)
    };
    match (dimension("width"), dimension("height")) {
        (Some(width), Some(height)) => format!("0 0 {width} {height}"),
        _ => fallback.to_string(),
    }
}

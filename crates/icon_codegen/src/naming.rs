//! Derivation of Rust item names from icon file names.

use crate::error::{CodegenError, CodegenResult};

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Crate names a generated module would shadow in the barrel's `pub use` glob.
const EXTERN_CRATES: &[&str] = &["alloc", "core", "leptos", "std"];

/// Items every generated module imports from the icon crate root.
const RESERVED_COMPONENTS: &[&str] = &["SvgIcon"];

/// Names generated for a single icon.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconNames {
    /// Source file name up to the first `.`; also the runtime icon token.
    pub file_name: String,
    /// Leptos component name, e.g. `MoreVertIcon`.
    pub component: String,
    /// Module (and output file) name, e.g. `more_vert`.
    pub module: String,
    /// Icon data constant, e.g. `MORE_VERT`.
    pub constant: String,
}

impl IconNames {
    /// Derive all names from a directory entry name such as `more-vert.svg`.
    pub fn from_entry_name(entry_name: &str) -> CodegenResult<Self> {
        let file_name = entry_name.split('.').next().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(CodegenError::parse(format!(
                "`{entry_name}` has no name before its extension"
            )));
        }
        let component = component_name(&file_name);
        if !is_pascal_identifier(&component) {
            return Err(CodegenError::parse(format!(
                "`{file_name}` does not produce a valid component name (got `{component}`)"
            )));
        }
        if RESERVED_COMPONENTS.contains(&component.as_str()) {
            return Err(CodegenError::parse(format!(
                "`{file_name}` produces `{component}`, which is reserved by the icon crate"
            )));
        }

        let mut module = snake_case(&file_name);
        if RUST_KEYWORDS.contains(&module.as_str()) || EXTERN_CRATES.contains(&module.as_str()) {
            module.push_str("_icon");
        }
        let constant = module.to_ascii_uppercase();

        Ok(Self {
            file_name,
            component,
            module,
            constant,
        })
    }
}

/// PascalCase the file name and append `Icon`.
///
/// The first character and every character following a run of non-alphanumerics is upper-cased
/// and the separator run dropped. Other characters keep their case, so `moreVert` and `more-vert`
/// both become `MoreVertIcon`. A trailing separator run has no following character and is kept.
pub fn component_name(file_name: &str) -> String {
    let mut out = String::with_capacity(file_name.len() + 4);
    let mut separators = String::new();
    let mut at_start = true;

    for ch in file_name.chars() {
        if ch.is_ascii_alphanumeric() {
            if at_start || !separators.is_empty() {
                out.push(ch.to_ascii_uppercase());
                separators.clear();
            } else {
                out.push(ch);
            }
            at_start = false;
        } else {
            separators.push(ch);
        }
    }

    out.push_str(&separators);
    out.push_str("Icon");
    out
}

fn snake_case(file_name: &str) -> String {
    let mut out = String::with_capacity(file_name.len() + 4);
    let mut prev: Option<char> = None;

    for ch in file_name.chars() {
        if !ch.is_ascii_alphanumeric() {
            prev = None;
            continue;
        }
        let boundary = match prev {
            None => !out.is_empty(),
            Some(prev) => {
                ch.is_ascii_uppercase() && (prev.is_ascii_lowercase() || prev.is_ascii_digit())
            }
        };
        if boundary {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
        prev = Some(ch);
    }

    out
}

fn is_pascal_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|first| first.is_ascii_uppercase())
        && chars.all(|ch| ch.is_ascii_alphanumeric())
}

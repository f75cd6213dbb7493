//! Rust source rendering for generated icon modules and their barrel.

use std::fmt::Write as _;

use crate::generate::GeneratedIcon;

/// File name of the barrel module written next to the icon modules.
pub const BARREL_FILE: &str = "mod.rs";

/// Render the module for a single icon.
pub fn render_icon_module(icon: &GeneratedIcon) -> String {
    let names = &icon.names;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// @generated by icon-codegen from `{}`. Do not edit by hand.",
        icon.source
    );
    out.push('\n');
    out.push_str("use leptos::*;\n\n");
    out.push_str("use crate::{IconData, IconSize, SvgIcon};\n\n");
    let _ = writeln!(out, "/// `{}` icon data.", names.file_name);
    let _ = writeln!(out, "pub const {}: IconData = IconData::new(", names.constant);
    let _ = writeln!(out, "    {:?},", names.file_name);
    let _ = writeln!(out, "    {:?},", icon.svg.view_box);
    let _ = writeln!(out, "    {},", raw_string_literal(&icon.svg.body));
    out.push_str(");\n\n");
    out.push_str("#[component]\n");
    let _ = writeln!(out, "/// Renders the `{}` icon.", names.file_name);
    let _ = writeln!(
        out,
        "pub fn {}(#[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {{",
        names.component
    );
    let _ = writeln!(out, "    view! {{ <SvgIcon icon={} size=size /> }}", names.constant);
    out.push_str("}\n");
    out
}

/// Render the barrel module re-exporting every icon, ordered by source file name.
pub fn render_barrel(icons: &[GeneratedIcon]) -> String {
    let mut sorted: Vec<&GeneratedIcon> = icons.iter().collect();
    sorted.sort_by(|a, b| {
        let a = &a.names.file_name;
        let b = &b.names.file_name;
        a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
    });

    let mut out = String::new();
    out.push_str("// @generated by icon-codegen. Do not edit by hand.\n\n");
    out.push_str("use crate::IconData;\n\n");
    for icon in &sorted {
        let _ = writeln!(out, "mod {};", icon.names.module);
    }
    out.push('\n');
    for icon in &sorted {
        let _ = writeln!(out, "pub use {}::*;", icon.names.module);
    }
    out.push('\n');
    out.push_str("/// Every generated icon, sorted by source file name.\n");
    out.push_str("pub const ALL_ICONS: &[IconData] = &[\n");
    for icon in &sorted {
        let _ = writeln!(out, "    {}::{},", icon.names.module, icon.names.constant);
    }
    out.push_str("];\n");
    out
}

fn raw_string_literal(value: &str) -> String {
    let mut hashes = 1;
    while value.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }
    let fence = "#".repeat(hashes);
    format!("r{fence}\"{value}\"{fence}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::IconNames;
    use crate::svg::ParsedSvg;
    use pretty_assertions::assert_eq;

    fn icon(entry_name: &str, body: &str) -> GeneratedIcon {
        GeneratedIcon {
            names: IconNames::from_entry_name(entry_name).expect("valid name"),
            source: entry_name.to_string(),
            svg: ParsedSvg {
                view_box: "0 0 24 24".to_string(),
                body: body.to_string(),
                has_defs: false,
            },
        }
    }

    #[test]
    fn icon_module_declares_data_and_component() {
        let rendered = render_icon_module(&icon(
            "more-vert.svg",
            r#"<path fill="currentColor" d="M12 8z"/>"#,
        ));

        assert_eq!(
            rendered,
            r###"// @generated by icon-codegen from `more-vert.svg`. Do not edit by hand.

use leptos::*;

use crate::{IconData, IconSize, SvgIcon};

/// `more-vert` icon data.
pub const MORE_VERT: IconData = IconData::new(
    "more-vert",
    "0 0 24 24",
    r#"<path fill="currentColor" d="M12 8z"/>"#,
);

#[component]
/// Renders the `more-vert` icon.
pub fn MoreVertIcon(#[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! { <SvgIcon icon=MORE_VERT size=size /> }
}
"###
        );
    }

    #[test]
    fn raw_string_fence_grows_past_embedded_hashes() {
        assert_eq!(raw_string_literal("<a/>"), "r#\"<a/>\"#");
        assert_eq!(
            raw_string_literal(r##"<a fill="#fff"/>"##),
            "r##\"<a fill=\"#fff\"/>\"##"
        );
    }

    #[test]
    fn barrel_is_sorted_case_insensitively() {
        let icons = vec![
            icon("warning.svg", "<path/>"),
            icon("Check.svg", "<path/>"),
            icon("arrow-back.svg", "<path/>"),
        ];

        assert_eq!(
            render_barrel(&icons),
            "// @generated by icon-codegen. Do not edit by hand.

use crate::IconData;

mod arrow_back;
mod check;
mod warning;

pub use arrow_back::*;
pub use check::*;
pub use warning::*;

/// Every generated icon, sorted by source file name.
pub const ALL_ICONS: &[IconData] = &[
    arrow_back::ARROW_BACK,
    check::CHECK,
    warning::WARNING,
];
"
        );
    }
}

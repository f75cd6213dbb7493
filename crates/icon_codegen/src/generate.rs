//! Directory-level icon generation pipeline.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::config::CodegenConfig;
use crate::emit::{render_barrel, render_icon_module, BARREL_FILE};
use crate::error::{CodegenError, CodegenResult};
use crate::fs::{wipe_dir, write_file};
use crate::naming::IconNames;
use crate::svg::{parse_svg, ParsedSvg};

/// An icon ready to be written as a module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedIcon {
    /// Names derived from the source file.
    pub names: IconNames,
    /// Source directory entry name, e.g. `check.svg`.
    pub source: String,
    /// Normalized markup.
    pub svg: ParsedSvg,
}

/// Outcome of one generation pass.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerateReport {
    /// Modules written, in barrel order.
    pub written: Vec<String>,
    /// Source files that were skipped, in directory order.
    pub skipped: Vec<String>,
}

/// Generate one module per SVG in `input` plus a barrel in `output`.
///
/// Files that fail to parse are logged and skipped. When nothing parses the output directory is
/// left untouched; otherwise its previous contents are wiped before writing.
pub fn process_dir(
    input: &Path,
    output: &Path,
    config: &CodegenConfig,
) -> CodegenResult<GenerateReport> {
    info!("Generating icons");

    let mut report = GenerateReport::default();
    let mut icons: Vec<GeneratedIcon> = Vec::new();

    for entry_name in svg_entries(input)? {
        let icon = match parse_icon(input, &entry_name, config) {
            Ok(icon) => icon,
            Err(err) => {
                warn!("Failed to parse file {entry_name}: {err}");
                report.skipped.push(entry_name);
                continue;
            }
        };

        let replaced = icons
            .iter()
            .position(|existing| existing.names.component == icon.names.component);

        // The icon being replaced gives up its module, so only other components can collide.
        let collision = icons.iter().enumerate().find(|(index, existing)| {
            Some(*index) != replaced && existing.names.module == icon.names.module
        });
        if let Some((_, existing)) = collision {
            warn!(
                "{entry_name} maps to module `{}` already used by {}, skipping",
                icon.names.module, existing.source
            );
            report.skipped.push(entry_name);
            continue;
        }

        match replaced {
            Some(index) => icons[index] = icon,
            None => icons.push(icon),
        }
    }

    if icons.is_empty() {
        info!("No icons generated");
        return Ok(report);
    }

    wipe_dir(output, config.wipe_policy())?;

    for icon in &icons {
        let path = output.join(format!("{}.rs", icon.names.module));
        write_file(&path, &render_icon_module(icon))?;
    }
    write_file(&output.join(BARREL_FILE), &render_barrel(&icons))?;

    icons.sort_by(|a, b| {
        let a = &a.names.file_name;
        let b = &b.names.file_name;
        a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
    });
    report.written = icons.into_iter().map(|icon| icon.names.module).collect();
    info!("Generated {} icon components", report.written.len());
    Ok(report)
}

fn svg_entries(input: &Path) -> CodegenResult<Vec<String>> {
    let read_error = |err: std::io::Error| {
        CodegenError::io(format!("failed to list input directory: {err}"))
            .with_operation("read-input")
            .with_path(input)
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(input).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if !entry.file_type().map_err(read_error)?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("svg") {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!("skipping non UTF-8 file name {name:?}"),
        }
    }
    names.sort();
    Ok(names)
}

fn parse_icon(
    input: &Path,
    entry_name: &str,
    config: &CodegenConfig,
) -> CodegenResult<GeneratedIcon> {
    let names = IconNames::from_entry_name(entry_name)?;
    let path = input.join(entry_name);
    let source = fs::read_to_string(&path).map_err(|err| {
        CodegenError::io(format!("failed to read svg: {err}")).with_path(&path)
    })?;
    let svg = parse_svg(&source, config)?;

    if svg.has_defs {
        warn!(
            "{entry_name} contains a <defs> element. These definitions will be global and might \
             affect other icons at runtime."
        );
    }

    Ok(GeneratedIcon {
        names,
        source: entry_name.to_string(),
        svg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    const ICON: &str = r##"<svg viewBox="0 0 24 24"><path fill="#676767" d="M0 0h24v24z"/></svg>"##;

    fn config() -> CodegenConfig {
        CodegenConfig {
            wipe_delay_ms: 0,
            ..CodegenConfig::default()
        }
    }

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).expect("write fixture");
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("read output")
            .map(|entry| entry.expect("entry").file_name().into_string().expect("utf8"))
            .collect();
        names.sort();
        names
    }

    fn dirs() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let root = tempfile::tempdir().expect("temp dir");
        let input = root.path().join("svg");
        let output = root.path().join("generated");
        fs::create_dir_all(&input).expect("create input");
        (root, input, output)
    }

    #[test]
    fn writes_one_module_per_icon_and_a_barrel() {
        let (_root, input, output) = dirs();
        write(&input, "more-vert.svg", ICON);
        write(&input, "check.svg", ICON);
        write(&input, "notes.txt", "not an icon");
        fs::create_dir_all(input.join("nested.svg")).expect("dir with svg suffix");

        let report = process_dir(&input, &output, &config()).expect("generate");

        assert_eq!(report.written, vec!["check", "more_vert"]);
        assert!(report.skipped.is_empty());
        assert_eq!(listing(&output), vec!["check.rs", "mod.rs", "more_vert.rs"]);

        let module = fs::read_to_string(output.join("check.rs")).expect("read module");
        assert!(module.contains("pub fn CheckIcon("));
        assert!(module.contains(r#"fill="currentColor""#));

        let barrel = fs::read_to_string(output.join("mod.rs")).expect("read barrel");
        assert!(barrel.contains("mod check;\nmod more_vert;\n"));
    }

    #[test]
    fn malformed_icons_are_skipped_and_the_rest_generated() {
        let (_root, input, output) = dirs();
        write(&input, "broken.svg", "<svg><path></svg>");
        write(&input, "close.svg", ICON);

        let report = process_dir(&input, &output, &config()).expect("generate");

        assert_eq!(report.written, vec!["close"]);
        assert_eq!(report.skipped, vec!["broken.svg"]);
        assert_eq!(listing(&output), vec!["close.rs", "mod.rs"]);
    }

    #[test]
    fn no_parsable_icons_leaves_output_untouched() {
        let (_root, input, output) = dirs();
        fs::create_dir_all(&output).expect("create output");
        write(&output, "keep.rs", "// previous run");
        write(&input, "broken.svg", "<svg>");

        let report = process_dir(&input, &output, &config()).expect("generate");

        assert!(report.written.is_empty());
        assert_eq!(listing(&output), vec!["keep.rs"]);
    }

    #[test]
    fn stale_output_is_wiped_before_writing() {
        let (_root, input, output) = dirs();
        fs::create_dir_all(output.join("old")).expect("create stale dir");
        write(&output, "removed_icon.rs", "// stale");
        write(&input, "check.svg", ICON);

        process_dir(&input, &output, &config()).expect("generate");

        assert_eq!(listing(&output), vec!["check.rs", "mod.rs"]);
    }

    #[test]
    fn later_file_with_same_component_name_wins() {
        let (_root, input, output) = dirs();
        write(&input, "arrow-up.svg", ICON);
        write(
            &input,
            "arrow_up.svg",
            r#"<svg viewBox="0 0 16 16"><rect width="16" height="16"/></svg>"#,
        );

        let report = process_dir(&input, &output, &config()).expect("generate");

        assert_eq!(report.written, vec!["arrow_up"]);
        let module = fs::read_to_string(output.join("arrow_up.rs")).expect("read module");
        assert!(module.contains(r#""0 0 16 16""#));
        assert!(module.contains(r#""arrow_up""#));
    }

    #[test]
    fn module_collisions_between_components_skip_the_later_file() {
        let (_root, input, output) = dirs();
        write(&input, "ABC.svg", ICON);
        write(&input, "abc.svg", ICON);

        let report = process_dir(&input, &output, &config()).expect("generate");

        assert_eq!(report.written, vec!["abc"]);
        assert_eq!(report.skipped, vec!["abc.svg"]);
        let module = fs::read_to_string(output.join("abc.rs")).expect("read module");
        assert!(module.contains("pub fn ABCIcon("));
    }

    #[test]
    fn replacement_cannot_take_a_module_owned_by_another_component() {
        let (_root, input, output) = dirs();
        // `a-b` -> AB/a_b, `ab` -> Ab/ab, `~AB` -> AB/ab: replaces `a-b` but collides with `ab`.
        write(&input, "a-b.svg", ICON);
        write(&input, "ab.svg", ICON);
        write(&input, "~AB.svg", ICON);

        let report = process_dir(&input, &output, &config()).expect("generate");

        assert_eq!(report.written, vec!["a_b", "ab"]);
        assert_eq!(report.skipped, vec!["~AB.svg"]);
        assert_eq!(listing(&output), vec!["a_b.rs", "ab.rs", "mod.rs"]);

        let barrel = fs::read_to_string(output.join("mod.rs")).expect("read barrel");
        assert_eq!(barrel.matches("mod ab;").count(), 1);
        let module = fs::read_to_string(output.join("a_b.rs")).expect("read module");
        assert!(module.contains("from `a-b.svg`"));
    }

    #[test]
    fn names_reserved_by_the_icon_crate_are_skipped() {
        let (_root, input, output) = dirs();
        write(&input, "svg.svg", ICON);
        write(&input, "std.svg", ICON);

        let report = process_dir(&input, &output, &config()).expect("generate");

        assert_eq!(report.skipped, vec!["svg.svg"]);
        assert_eq!(report.written, vec!["std_icon"]);
        let barrel = fs::read_to_string(output.join("mod.rs")).expect("read barrel");
        assert!(barrel.contains("pub use std_icon::*;"));
    }

    #[test]
    fn committed_icon_modules_match_generator_output() {
        let icons = Path::new(env!("CARGO_MANIFEST_DIR")).join("../practical_icons");
        let root = tempfile::tempdir().expect("temp dir");
        let output = root.path().join("generated");

        process_dir(&icons.join("svg"), &output, &config()).expect("generate");

        let committed = icons.join("src/generated");
        assert_eq!(listing(&output), listing(&committed));
        for name in listing(&output) {
            let fresh = fs::read_to_string(output.join(&name)).expect("read fresh");
            let stored = fs::read_to_string(committed.join(&name)).expect("read committed");
            assert_eq!(fresh, stored, "{name} is stale; rerun icon-codegen");
        }
    }

    #[test]
    fn missing_input_directory_is_an_io_error() {
        let (_root, input, output) = dirs();
        let err = process_dir(&input.join("absent"), &output, &config()).expect_err("missing");
        assert_eq!(err.operation.as_deref(), Some("read-input"));
    }
}

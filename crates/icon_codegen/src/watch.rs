//! Watch mode: regenerate whenever the input directory changes.

use std::path::Path;
use std::sync::mpsc;

use log::{error, info, warn};
use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};

use crate::config::CodegenConfig;
use crate::error::{CodegenError, CodegenResult};
use crate::generate::process_dir;

/// Block forever, regenerating `output` after each debounced batch of changes in `input`.
///
/// Generation failures are logged and the watcher keeps running. Only watcher setup failures or
/// a disconnected event channel end the loop.
pub fn watch(input: &Path, output: &Path, config: &CodegenConfig) -> CodegenResult<()> {
    info!("Start generating icon components in watch mode");

    let (tx, rx) = mpsc::channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(config.debounce(), move |result: DebounceEventResult| {
        let _ = tx.send(result);
    })
    .map_err(|err| CodegenError::watch(format!("failed to create watcher: {err}")))?;

    debouncer
        .watcher()
        .watch(input, RecursiveMode::NonRecursive)
        .map_err(|err| {
            CodegenError::watch(format!("failed to watch input directory: {err}"))
                .with_path(input)
        })?;

    for result in rx {
        match result {
            Ok(events) if events.is_empty() => continue,
            Ok(_) => {
                if let Err(err) = process_dir(input, output, config) {
                    error!("Icon generation failed: {err}");
                }
            }
            Err(err) => warn!("watcher error on {}: {err}", input.display()),
        }
    }

    Err(CodegenError::watch("watcher channel closed").with_path(input))
}

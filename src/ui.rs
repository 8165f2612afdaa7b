use dialoguer::Confirm;
use encoding_rs::Encoding;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::Result;
use crate::types::RowDiagnostic;

pub(crate) fn report_diagnostics(diagnostics: &[RowDiagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", format!("skipped {}", diagnostic).yellow());
    }
}

pub(crate) fn report_summary(emitted: usize, diagnostics: &[RowDiagnostic]) {
    if !diagnostics.is_empty() {
        eprintln!(
            "{}",
            format!(
                "wrote {} track(s), skipped {} row(s)",
                emitted,
                diagnostics.len()
            )
            .dimmed()
        );
    }
}

pub(crate) fn report_encoding(encoding: &'static Encoding, autodetected: bool) {
    if autodetected && encoding.name() != "UTF-8" {
        eprintln!(
            "{}",
            format!("track list encoding: {} (autodetected)", encoding.name()).dimmed()
        );
    }
}

pub(crate) fn confirm_overwrite(path: &Path, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(format!("{} exists, overwrite?", path.display()))
        .default(false)
        .interact()
        .map_err(|err| format!("failed to read confirmation: {}", err))
}

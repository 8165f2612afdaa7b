use std::io::Write;
use std::path::Path;

use crate::Result;
use crate::render::render_blocks;
use crate::types::Track;

/// The global header lines written once before the per-track blocks.
pub(crate) struct SheetHeader {
    pub(crate) rem: Vec<String>,
    pub(crate) performer: String,
    pub(crate) title: Option<String>,
    pub(crate) audio_file_name: String,
    pub(crate) audio_file_type: String,
}

/// Derives the `FILE "<name>" <TYPE>` fields from the audio file path. The
/// type is the upper-cased extension; the file itself is never inspected.
pub(crate) fn audio_file_directive(path: &Path) -> Result<(String, String)> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("invalid audio file name: {}", path.display()))?
        .to_string();
    let file_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_uppercase())
        .unwrap_or_default();
    Ok((name, file_type))
}

pub(crate) fn write_sheet(
    writer: &mut impl Write,
    header: &SheetHeader,
    tracks: &[Track],
) -> Result<()> {
    for rem in &header.rem {
        write_line(writer, &format!("REM {}", rem))?;
    }
    write_line(writer, &format!("PERFORMER {}", header.performer))?;
    if let Some(title) = &header.title {
        write_line(writer, &format!("TITLE {}", title))?;
    }
    write_line(
        writer,
        &format!("FILE \"{}\" {}", header.audio_file_name, header.audio_file_type),
    )?;
    for block in render_blocks(tracks) {
        write_line(writer, &block)?;
    }
    Ok(())
}

fn write_line(writer: &mut impl Write, line: &str) -> Result<()> {
    writeln!(writer, "{}", line).map_err(|err| format!("failed to write cue sheet: {}", err))
}

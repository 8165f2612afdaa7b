use clap::Parser;
use std::fs;
use std::io::{self, BufWriter, Write};

use crate::Result;
use crate::cli::Args;
use crate::input::{decode_rows, read_source, resolve_encoding};
use crate::output::{SheetHeader, audio_file_directive, write_sheet};
use crate::sequence::sequence_tracks;
use crate::ui::{confirm_overwrite, report_diagnostics, report_encoding, report_summary};

pub fn run() -> Result<()> {
    let args = Args::parse();
    let encoding = match args.encoding.as_deref() {
        Some(label) => Some(resolve_encoding(label)?),
        None => None,
    };

    if !args.audio_file.exists() {
        return Err(format!(
            "audio file not found: {}",
            args.audio_file.display()
        ));
    }
    let (audio_file_name, audio_file_type) = audio_file_directive(&args.audio_file)?;

    let bytes = read_source(args.track_list.as_deref())?;
    let (rows, encoding_used, autodetected) = decode_rows(&bytes, encoding);
    report_encoding(encoding_used, autodetected);

    let options = args.sequence_options();
    let (tracks, diagnostics) = sequence_tracks(rows, &options);
    report_diagnostics(&diagnostics);

    let header = SheetHeader {
        rem: args.rem.clone(),
        performer: args.performer.clone(),
        title: args.title.clone(),
        audio_file_name,
        audio_file_type,
    };

    match args.output_file.as_deref() {
        Some(path) => {
            if path.exists() && !confirm_overwrite(path, args.yes)? {
                return Err("cancelled".to_string());
            }
            let file = fs::File::create(path)
                .map_err(|err| format!("failed to create {}: {}", path.display(), err))?;
            let mut writer = BufWriter::new(file);
            write_sheet(&mut writer, &header, &tracks)?;
            writer
                .flush()
                .map_err(|err| format!("failed to write {}: {}", path.display(), err))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_sheet(&mut writer, &header, &tracks)?;
        }
    }

    report_summary(tracks.len(), &diagnostics);
    Ok(())
}

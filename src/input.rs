use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::Result;

pub(crate) fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| format!("unsupported track list encoding: {}", label))
}

pub(crate) fn read_source(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path)
            .map_err(|err| format!("failed to read track list {}: {}", path.display(), err)),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|err| format!("failed to read track list from stdin: {}", err))?;
            Ok(buffer)
        }
    }
}

/// Decodes the raw track list and splits it into tab-separated rows.
///
/// Returns the rows together with the encoding actually used and whether it
/// was autodetected rather than requested.
pub(crate) fn decode_rows(
    bytes: &[u8],
    encoding: Option<&'static Encoding>,
) -> (Vec<Vec<String>>, &'static Encoding, bool) {
    let (encoding, autodetected) = match encoding {
        Some(enc) => (enc, false),
        None => (detect_encoding(bytes), true),
    };
    let (decoded, _, _) = encoding.decode(bytes);
    let rows = decoded
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect();
    (rows, encoding, autodetected)
}

fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1251
    }
}

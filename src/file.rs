//! JSON file helpers, used to keep scraped payloads for offline runs.

use std::fs::File;
use std::io;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Writes `value` to `path` as pretty-printed JSON, replacing any existing file.
pub fn write_json<S: Serialize + ?Sized>(value: &S, path: impl AsRef<Path>) -> Result<(), io::Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::understat::UnderstatShot;
    use std::env;
    use std::fs;

    #[test]
    fn write_then_read_shots() {
        let path = env::temp_dir().join(format!("shotzone-{}-shots.json", std::process::id()));
        let shots: Vec<UnderstatShot> = serde_json::from_str(
            r#"[{"id":"1","minute":"5","result":"Goal","X":"0.9","Y":"0.5","xG":"0.4","player":"A","situation":"Penalty","season":"2020"}]"#,
        )
        .unwrap();
        write_json(&shots, &path).unwrap();
        let read: Vec<UnderstatShot> = read_json(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(shots, read);
        assert_eq!(None, read[0].match_id);
    }

    #[test]
    fn read_missing_file() {
        let err = read_json::<Vec<UnderstatShot>>("/nonexistent/shotzone/shots.json").unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());
    }
}

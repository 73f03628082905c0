use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use tilescope_engine::{Frame, ZoneCatalog};

/// Destination of command output: stdout, or a file created on open.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Writes `value` as pretty JSON to `output_path`, or stdout when it is `None`
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        let mut output = Output::from_output_path(output_path)?;
        let target = output.target();
        serde_json::to_writer_pretty(&mut output, value)
            .and_then(|()| writeln!(output).map_err(serde_json::Error::io))
            .and_then(|()| output.flush().map_err(serde_json::Error::io))
            .with_context(|| format!("Failed to write JSON to {target}"))
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Output::Stdout(io::stdout().lock()));
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Human-readable name of the destination, for messages.
    pub fn target(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a zone catalog, or fall back to the built-in layout
///
/// The catalog file is a JSON array of zones; structural problems (duplicate names,
/// missing rows) are reported as parse errors.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<ZoneCatalog> {
    match path {
        Some(path) => {
            let catalog: ZoneCatalog = read_json_file("zone catalog", path)?;
            tracing::info!(path = %path.display(), zones = catalog.len(), "loaded zone catalog");
            Ok(catalog)
        }
        None => Ok(ZoneCatalog::standard()),
    }
}

/// Read a single detector frame from a JSON file
pub fn read_frame_file<P>(path: P) -> anyhow::Result<Frame>
where
    P: AsRef<Path>,
{
    read_json_file("frame", path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tilescope_engine::{Point, RowIndex, Zone, ZoneKind};

    use super::*;

    #[test]
    fn test_load_catalog_defaults_to_standard() {
        assert_eq!(load_catalog(None).unwrap(), ZoneCatalog::standard());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let quad = [
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.0),
            Point::new(0.5, 0.5),
            Point::new(0.0, 0.5),
        ];
        let mut zones = vec![Zone::new("tray", ZoneKind::Center, quad)];
        for row in RowIndex::ALL {
            zones.push(Zone::new(format!("r{row}"), ZoneKind::Row(row), quad));
            zones.push(Zone::new(format!("s{row}"), ZoneKind::Square(row), quad));
        }
        fs::write(&path, serde_json::to_string(&zones).unwrap()).unwrap();

        let catalog = load_catalog(Some(path.as_path())).unwrap();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.zones()[0].name(), "tray");
    }

    #[test]
    fn test_invalid_catalog_mentions_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[]").unwrap();

        let err = load_catalog(Some(path.as_path())).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to parse zone catalog JSON file"), "{message}");
        assert!(message.contains("no row zone for row 1"), "{message}");
    }

    #[test]
    fn test_missing_frame_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_frame_file(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open frame file"));
    }

    #[test]
    fn test_save_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        Output::save_json(&vec![1, 2, 3], Some(path.clone())).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Vec<i32>>(&text).unwrap(), [1, 2, 3]);
        assert!(text.ends_with('\n'));
    }
}

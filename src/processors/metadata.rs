// datemark/src/processors/metadata.rs
use exif::{Exif, In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// Tags tried in order; the original capture timestamp wins over the
// generic file-modified timestamp.
const DATE_TAGS: [Tag; 2] = [Tag::DateTimeOriginal, Tag::DateTime];

#[derive(Clone, Default)]
pub struct CaptureDateReader;

impl CaptureDateReader {
    pub fn new() -> Self {
        Self
    }

    // Extraction never propagates a failure: a file we cannot read EXIF
    // from simply has no capture date.
    pub fn read_capture_date(&self, path: &Path) -> Option<String> {
        let exif = match self.read_exif(path) {
            Ok(Some(exif)) => exif,
            Ok(None) => {
                log::debug!("No EXIF data found in {}", path.display());
                return None;
            }
            Err(e) => {
                log::warn!("Failed to read EXIF from {}: {}", path.display(), e);
                return None;
            }
        };

        DATE_TAGS
            .iter()
            .find_map(|&tag| self.date_from_field(&exif, tag))
    }

    fn read_exif(&self, path: &Path) -> std::io::Result<Option<Exif>> {
        let file = File::open(path)?;
        let mut bufreader = BufReader::new(&file);

        match Reader::new().read_from_container(&mut bufreader) {
            Ok(exif) => Ok(Some(exif)),
            Err(exif::Error::NotFound(_)) => Ok(None),
            Err(e) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                e.to_string(),
            )),
        }
    }

    // Keep only the date portion of "YYYY:MM:DD HH:MM:SS".
    fn date_from_field(&self, exif: &Exif, tag: Tag) -> Option<String> {
        let field = exif.get_field(tag, In::PRIMARY)?;

        let bytes = match field.value {
            Value::Ascii(ref lines) => lines.first()?,
            _ => return None,
        };

        match exif::DateTime::from_ascii(bytes) {
            Ok(dt) => Some(format!("{:04}:{:02}:{:02}", dt.year, dt.month, dt.day)),
            Err(e) => {
                log::debug!("Unparseable {} value: {}", tag, e);
                None
            }
        }
    }
}

use super::HeadlineSource;
use crate::reccore::error::Error;
use encoding_rs::WINDOWS_1252;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::fs;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Reads a text file, falling back to a legacy single-byte decoding when the
/// content is not valid UTF-8.
pub fn load_text(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) => {
            if e.kind() == ErrorKind::InvalidData {
                return read_to_string_non_utf8_encoding(path);
            }
            Err(e)
        }
    }
}

fn read_to_string_non_utf8_encoding(path: &Path) -> io::Result<String> {
    let source_file = File::open(path)?;
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(WINDOWS_1252))
        .build(source_file);
    let mut dest = String::new();
    decoder.read_to_string(&mut dest)?;
    Ok(dest)
}

/// Local headline corpus, one headline per non-blank line.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: &Path) -> Self {
        FileSource {
            path: path.to_path_buf(),
        }
    }
}

impl HeadlineSource for FileSource {
    fn top_headlines(&self) -> Result<Vec<String>, Error> {
        let content = load_text(&self.path)?;
        let headlines: Vec<String> = content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();
        Ok(headlines)
    }
}

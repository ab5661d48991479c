use std::path::{Path, PathBuf};

use lemma::error::LoadError;
use tokio::{fs::File, io::AsyncReadExt};

#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf).await {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path_buf;
                Ok(())
            }
            Err(error) => Err(LoadError::File(error.kind())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the rest of the open file into `buffer`.
    pub async fn read_into(&mut self, buffer: &mut String) -> Result<(), LoadError> {
        match &mut self.inner {
            Some(reader) => reader
                .read_to_string(buffer)
                .await
                .map(|_| ())
                .map_err(|error| LoadError::File(error.kind())),

            None => Err(LoadError::Reader(std::io::ErrorKind::InvalidInput)),
        }
    }

    /// Opens `path` and reads it whole.
    pub async fn read_to_string<P: AsRef<Path>>(&mut self, path: P) -> Result<String, LoadError> {
        let mut buffer = String::new();

        self.open(path).await?;
        self.read_into(&mut buffer).await?;

        Ok(buffer)
    }
}

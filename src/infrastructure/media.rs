use crate::application::{ApplicationError, ApplicationResult, ports::media::MediaStorage};
use crate::infrastructure::util::random_lowercase;
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};
use tokio::{
    fs,
    io::{AsyncWrite, AsyncWriteExt},
};

const MAX_NAME_ATTEMPTS: usize = 100;

/// Media storage rooted at a local directory. Names are `/`-separated paths
/// relative to the root.
#[derive(Clone, Debug)]
pub struct FilesystemMediaStorage {
    root: PathBuf,
}

impl FilesystemMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> ApplicationResult<PathBuf> {
        let relative = Path::new(name);
        if name.is_empty()
            || !relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)))
        {
            return Err(ApplicationError::validation(format!(
                "invalid media name: {name}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

/// Basename of an uploaded filename reduced to `[A-Za-z0-9._-]`.
fn valid_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename).trim();
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_owned()
    } else {
        cleaned.to_owned()
    }
}

/// `stem_xxxxxxx.ext`, used when `filename` is already taken.
fn alternative_name(filename: &str) -> String {
    let suffix = random_lowercase(7);
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{suffix}.{ext}"),
        _ => format!("{filename}_{suffix}"),
    }
}

fn join_name(directory: &str, filename: &str) -> String {
    let directory = directory.trim_matches('/');
    if directory.is_empty() {
        filename.to_owned()
    } else {
        format!("{directory}/{filename}")
    }
}

fn write_failure(name: &str, err: &std::io::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("{name}: {err}"))
}

/// Write `bytes` to a freshly claimed file, removing it again if the write
/// does not complete.
async fn fill_or_discard<W>(mut writer: W, path: &Path, bytes: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match writer.write_all(bytes).await {
        Ok(()) => writer.flush().await,
        Err(err) => Err(err),
    };
    if written.is_err() {
        drop(writer);
        let _ = fs::remove_file(path).await;
    }
    written
}

#[async_trait]
impl MediaStorage for FilesystemMediaStorage {
    async fn save(
        &self,
        directory: &str,
        filename: &str,
        bytes: &[u8],
    ) -> ApplicationResult<String> {
        let requested = valid_filename(filename);
        let dir_path = if directory.trim_matches('/').is_empty() {
            self.root.clone()
        } else {
            self.resolve(directory.trim_matches('/'))?
        };
        fs::create_dir_all(&dir_path)
            .await
            .map_err(|err| write_failure(directory, &err))?;

        let mut candidate = requested.clone();
        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = join_name(directory, &candidate);
            let path = self.resolve(&name)?;
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => {
                    fill_or_discard(file, &path, bytes)
                        .await
                        .map_err(|err| write_failure(&name, &err))?;
                    tracing::debug!(%name, size = bytes.len(), "stored upload");
                    return Ok(name);
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    candidate = alternative_name(&requested);
                }
                Err(err) => return Err(write_failure(&name, &err)),
            }
        }

        Err(ApplicationError::storage_write(format!(
            "no free name for {requested} in {directory}"
        )))
    }

    async fn read(&self, name: &str) -> ApplicationResult<Vec<u8>> {
        let path = self.resolve(name)?;
        fs::read(&path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                ApplicationError::not_found(format!("media file not found: {name}"))
            } else {
                ApplicationError::infrastructure(format!("{name}: {err}"))
            }
        })
    }

    async fn overwrite(&self, name: &str, bytes: &[u8]) -> ApplicationResult<()> {
        let path = self.resolve(name)?;
        let staging = path.with_extension(format!("tmp-{}", random_lowercase(6)));
        fs::write(&staging, bytes)
            .await
            .map_err(|err| write_failure(name, &err))?;
        if let Err(err) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(write_failure(name, &err));
        }
        Ok(())
    }

    async fn delete(&self, name: &str) -> ApplicationResult<()> {
        let path = self.resolve(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(format!("{name}: {err}"))),
        }
    }
}

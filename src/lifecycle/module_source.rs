use crate::error::*;

use futures::prelude::*;
use futures::future::{BoxFuture};

use std::path::{Path, PathBuf};
use std::sync::*;

///
/// Supplies the bytes of a WASM module (or the WAT text for one)
///
pub trait ModuleSource : Send {
    ///
    /// Retrieves the module. A failure here means the script fails to instantiate.
    ///
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<u8>, ScriptError>>;
}

///
/// A module that is already in memory
///
#[derive(Clone)]
pub struct BytesModuleSource {
    bytes: Arc<Vec<u8>>,
}

///
/// A module that is read from a file when the script is instantiated
///
#[derive(Clone, Debug)]
pub struct FileModuleSource {
    path: PathBuf,
}

impl BytesModuleSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> BytesModuleSource {
        BytesModuleSource {
            bytes: Arc::new(bytes.into())
        }
    }
}

impl FileModuleSource {
    pub fn new(path: impl AsRef<Path>) -> FileModuleSource {
        FileModuleSource {
            path: path.as_ref().to_path_buf()
        }
    }
}

impl ModuleSource for BytesModuleSource {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<u8>, ScriptError>> {
        let bytes = Arc::clone(&self.bytes);

        async move { Ok((*bytes).clone()) }.boxed()
    }
}

impl ModuleSource for FileModuleSource {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<u8>, ScriptError>> {
        let path = self.path.clone();

        async move {
            std::fs::read(&path)
                .map_err(|err| ScriptError::FetchFailed(format!("{}: {}", path.display(), err)))
        }.boxed()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use futures::executor;

    #[test]
    fn bytes_source_returns_bytes() {
        let source = BytesModuleSource::new(vec![0u8, 97, 115, 109]);

        executor::block_on(async {
            assert!(source.fetch().await == Ok(vec![0u8, 97, 115, 109]));
            assert!(source.fetch().await == Ok(vec![0u8, 97, 115, 109]));
        });
    }

    #[test]
    fn missing_file_fails_to_fetch() {
        let source = FileModuleSource::new("/this/path/does/not/exist.wasm");

        executor::block_on(async {
            assert!(matches!(source.fetch().await, Err(ScriptError::FetchFailed(_))));
        });
    }
}

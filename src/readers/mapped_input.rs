use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::Result;

/// Read-only memory mapping of a measurements file.
///
/// The mapping is released when this value is dropped. Empty files are not
/// mapped and expose an empty buffer.
pub struct MappedInput {
    path: PathBuf,
    mmap: Option<Mmap>,
}

impl MappedInput {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        if len == 0 {
            info!("Input {} is empty", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                mmap: None,
            });
        }

        // SAFETY: the file is only read, and is not expected to be modified
        // by other processes while mapped.
        let mmap = unsafe { Mmap::map(&file)? };

        #[cfg(unix)]
        if let Err(e) = mmap.advise(memmap2::Advice::Sequential) {
            debug!("madvise(SEQUENTIAL) failed: {}", e);
        }

        info!("Mapped {} ({} bytes)", path.display(), len);

        Ok(Self {
            path: path.to_path_buf(),
            mmap: Some(mmap),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

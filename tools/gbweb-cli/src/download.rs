//! Download command - export save RAM as `<session>.sav`

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use gbweb_core::HostEvent;

use crate::host::{self, HostOptions};

/// Arguments for the download command
#[derive(Args)]
pub struct DownloadArgs {
    /// Directory to write the save file into (defaults to current directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Execute the download command
///
/// Goes through the Save button path: flush, then offer the artifact.
pub async fn execute(options: &HostOptions, args: DownloadArgs) -> Result<()> {
    let mut fe = host::open(options).await?;
    host::send(&mut fe, HostEvent::SaveClicked).await?;

    let Some(artifact) = fe.ui_mut().offered.pop() else {
        println!("No save RAM to download");
        return Ok(());
    };

    let out_dir = match args.out {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };
    let path = artifact
        .write_to_dir(&out_dir)
        .await
        .with_context(|| format!("Failed to write {}", artifact.file_name))?;

    println!("Wrote {} ({} bytes)", path.display(), artifact.bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::{self, UploadArgs};
    use gbweb_core::Slot;

    #[tokio::test]
    async fn test_download_names_file_after_rom() {
        let dir = tempfile::tempdir().unwrap();
        let options = HostOptions {
            data_dir: Some(dir.path().join("store")),
            config: None,
        };
        let rom = dir.path().join("Pokemon Red.gb");
        let sav = dir.path().join("whatever.sav");
        std::fs::write(&rom, vec![0u8; 0x150]).unwrap();
        std::fs::write(&sav, vec![0xAB; 32]).unwrap();
        upload::execute(&options, UploadArgs { file: rom }, Slot::Rom)
            .await
            .unwrap();
        upload::execute(&options, UploadArgs { file: sav }, Slot::Save)
            .await
            .unwrap();

        let out = dir.path().join("exports");
        execute(&options, DownloadArgs { out: Some(out.clone()) })
            .await
            .unwrap();

        assert_eq!(
            std::fs::read(out.join("Pokemon Red.sav")).unwrap(),
            vec![0xAB; 32]
        );
    }

    #[tokio::test]
    async fn test_download_without_save_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let options = HostOptions {
            data_dir: Some(dir.path().join("store")),
            config: None,
        };
        let out = dir.path().join("exports");

        execute(&options, DownloadArgs { out: Some(out.clone()) })
            .await
            .unwrap();
        assert!(!out.exists());
    }
}

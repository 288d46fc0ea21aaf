//! Rom/save/load commands - bind a file or start the cartridge, then flush

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use gbweb_core::{HostEvent, LocalFile, Slot};

use crate::host::{self, HostOptions};

/// Arguments for the rom and save commands
#[derive(Args)]
pub struct UploadArgs {
    /// File to bind
    pub file: PathBuf,
}

/// Execute the rom or save command
pub async fn execute(options: &HostOptions, args: UploadArgs, slot: Slot) -> Result<()> {
    let mut fe = host::open(options).await?;
    let file = LocalFile::new(args.file);

    let event = match slot {
        Slot::Rom => HostEvent::RomSelected(Some(file)),
        Slot::Save => HostEvent::SaveSelected(Some(file)),
    };
    host::send(&mut fe, event).await?;
    host::send(&mut fe, HostEvent::BeforeUnload).await?;

    println!("{}: {}", slot.path(), fe.ui().labels.get(slot));
    Ok(())
}

/// Execute the load command
///
/// With no ROM bound this is a no-op, like the page's Load button.
pub async fn load(options: &HostOptions) -> Result<()> {
    let mut fe = host::open(options).await?;
    host::send(&mut fe, HostEvent::LoadClicked).await?;

    if !fe.vfs().exists(Slot::Rom.path()) {
        println!("No ROM bound; run `gbweb rom <FILE>` first");
        return Ok(());
    }
    host::send(&mut fe, HostEvent::BeforeUnload).await?;

    let title = fe
        .module()
        .and_then(|m| m.title())
        .unwrap_or("untitled cartridge");
    println!("Started {} ({})", fe.ui().labels.get(Slot::Rom), title);
    Ok(())
}

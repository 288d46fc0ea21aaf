//! Status command - show what a page load would restore

use anyhow::Result;

use gbweb_core::Slot;

use crate::host::{self, HostOptions};

/// Execute the status command
pub async fn execute(options: &HostOptions) -> Result<()> {
    let fe = host::open(options).await?;

    println!("Store:   {}", fe.store().root().display());
    println!("Session: {}", fe.session().last_filename.as_deref().unwrap_or("(none)"));
    println!("ROM:     {}", fe.ui().labels.get(Slot::Rom));
    println!("Save:    {}", fe.ui().labels.get(Slot::Save));

    let vfs = fe.vfs();
    if vfs.is_empty() {
        println!("No persisted entries");
        return Ok(());
    }

    println!("Entries under {}:", vfs.mount_point());
    for name in vfs.names() {
        let len = vfs.read(name).map(<[u8]>::len).unwrap_or_default();
        println!("  {name:<16} {len:>10} bytes");
    }
    Ok(())
}

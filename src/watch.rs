use std::path::Path;
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

use notify::RecommendedWatcher;

/// Editors tend to write a file in several steps; wait this long for the burst to settle.
const SETTLE: Duration = Duration::from_millis(150);

/// Starts watching `path`; the receiver gets `()` for every change.
///
/// Events stop when the returned watcher is dropped, so the caller keeps it
/// alive for as long as it reads the receiver.
pub fn watch_config(path: &Path) -> notify::Result<(RecommendedWatcher, Receiver<()>)> {
    use notify::{EventKind, RecursiveMode, Watcher};
    let (tx, rx) = channel::<()>();
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res {
            match event.kind {
                EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) | EventKind::Any => {
                    let _ = tx.send(());
                }
                _ => {}
            }
        }
    })?;
    watcher.watch(path, RecursiveMode::NonRecursive)?;
    log::info!("watching {}", path.display());
    Ok((watcher, rx))
}

/// Calls `rebuild` once per burst of change events until the sender goes away.
pub fn rebuild_on_change<F: FnMut()>(rx: &Receiver<()>, mut rebuild: F) {
    while rx.recv().is_ok() {
        std::thread::sleep(SETTLE);
        for _ in rx.try_iter() {}
        rebuild();
    }
}

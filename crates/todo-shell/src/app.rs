use crate::{AppCommand, AppResult, HttpAvatarSource, HttpUpdateFeed, ShellEvent};

use todo_shell_core::{IconBatch, IconCache};

use std::sync::Arc;

use tao::event_loop::EventLoopProxy;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Network side of the shell.
///
/// Runs on the async runtime thread. Results travel back to the main thread
/// as [`ShellEvent`]s because the shell state and every native handle live
/// there.
pub struct App {
    pub(crate) icons: Arc<IconCache<HttpAvatarSource>>,
    pub(crate) updates: Arc<HttpUpdateFeed>,
    pub(crate) proxy: EventLoopProxy<ShellEvent>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
}

impl App {
    /// Run the command loop until shutdown or until the main thread hangs up.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Network runtime starting");

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::ResolveMenuIcons(batch) => self.resolve_menu_icons(batch),
                        AppCommand::CheckForUpdates => self.check_for_updates(),
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                else => {
                    info!("Command channel closed, shutting down");
                    break;
                }
            }
        }

        info!("Network runtime shut down");
        Ok(())
    }

    /// Resolve avatars in the background; batches may complete out of order.
    fn resolve_menu_icons(&self, batch: IconBatch) {
        let icons = Arc::clone(&self.icons);
        let proxy = self.proxy.clone();

        tokio::spawn(async move {
            let resolved = icons.resolve_batch(batch).await;
            debug!(sections = resolved.len(), "Menu icons resolved");

            if proxy.send_event(ShellEvent::IconsResolved(resolved)).is_err() {
                error!("Event loop closed before menu icons were delivered");
            }
        });
    }

    fn check_for_updates(&self) {
        let updates = Arc::clone(&self.updates);
        let proxy = self.proxy.clone();

        tokio::spawn(async move {
            updates
                .check(move |event| {
                    if proxy.send_event(ShellEvent::Update(event)).is_err() {
                        error!("Event loop closed before update progress was delivered");
                    }
                })
                .await;
        });
    }
}

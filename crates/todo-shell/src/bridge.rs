//! Renderer side of the IPC channel.
//!
//! The page talks to the shell through `window.__shell`:
//!
//! - `send(channel, payload)` posts a fire-and-forget message.
//! - `invoke(channel, payload)` posts a message with a reply id and returns
//!   a promise settled by [`reply_script`].
//! - `on(channel, listener)` subscribes to shell notifications delivered by
//!   [`dispatch_script`].

use crate::{AppError, AppResult};

use todo_shell_core::{IpcReply, RendererNotification};

use std::panic::Location;

use error_location::ErrorLocation;

/// Injected into every page before its own scripts run.
pub(crate) const BRIDGE_SCRIPT: &str = r#"
(function () {
  if (window.__shell) {
    return;
  }
  const pending = new Map();
  const listeners = new Map();
  let nextId = 1;
  const post = (message) => window.ipc.postMessage(JSON.stringify(message));

  window.__shell = {
    send(channel, payload) {
      post({ channel, payload });
    },
    invoke(channel, payload) {
      const id = nextId++;
      return new Promise((resolve) => {
        pending.set(id, resolve);
        post({ id, channel, payload });
      });
    },
    on(channel, listener) {
      if (!listeners.has(channel)) {
        listeners.set(channel, []);
      }
      listeners.get(channel).push(listener);
    },
    resolve(id, value) {
      const settle = pending.get(id);
      if (settle) {
        pending.delete(id);
        settle(value);
      }
    },
    dispatch(message) {
      (listeners.get(message.channel) || []).forEach((listener) => listener(message.payload));
    },
  };
})();
"#;

/// Script settling the renderer promise waiting on `reply.id`.
pub(crate) fn reply_script(reply: &IpcReply) -> String {
    format!("window.__shell.resolve({}, {});", reply.id, reply.value)
}

/// Script delivering `notification` to the renderer's listeners.
#[track_caller]
pub(crate) fn dispatch_script(notification: &RendererNotification) -> AppResult<String> {
    let message = serde_json::to_string(notification).map_err(|e| AppError::WindowError {
        reason: format!("Failed to encode renderer notification: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(format!("window.__shell.dispatch({});", message))
}

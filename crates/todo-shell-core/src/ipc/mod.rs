mod file_exchange;
mod ipc_gateway;
mod ipc_reply;
mod ipc_request;
mod renderer_notification;

pub use {
    file_exchange::{decode_data_url, write_cached_image, write_download, write_paste_image},
    ipc_reply::{IpcReply, PasteResult},
    ipc_request::{ImageDataset, IpcEnvelope, IpcRequest, OpenImagePayload},
    renderer_notification::RendererNotification,
};

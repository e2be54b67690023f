// src/store/mod.rs

//! Store session plumbing
//!
//! The pieces that connect the stateless services (fetcher, cache, catalog
//! loader, operation runner) to whoever renders them: an event channel, a
//! state struct applied on the consumer side, a status sink, and media
//! resolution for cards.

pub mod events;
mod media;
mod state;
pub mod status;

pub use events::{channel, EventReceiver, EventSender, StoreEvent};
pub use media::{fetch_app_media, MediaKind};
pub use state::StoreState;
pub use status::{ChannelStatus, LogStatus, SilentStatus, StatusSink};

pub mod constants;
pub mod door;
pub mod error;
pub mod gesture;
pub mod hotspot;
pub mod preload;
pub mod scene;

pub use door::{DoorEvent, DoorState, DoorTrigger};
pub use error::SceneError;
pub use gesture::InputCapabilities;
pub use hotspot::{Anchor, HotspotId, Layout, Rect};
pub use scene::{AudioCommand, Cursor, SceneConfig, SceneEffect, SceneKind, SceneState};

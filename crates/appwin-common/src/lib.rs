pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{AppWinError, BridgeError, ConfigError, ProtocolError};
pub use events::{EventBus, WindowEvent};
pub use id::{new_correlation_id, ContextId};
pub use types::{Bounds, WindowId};

pub type Result<T> = std::result::Result<T, AppWinError>;

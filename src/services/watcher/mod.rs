pub mod engine;
pub mod status;
pub mod tracker;
pub mod types;
pub mod validate;

pub use engine::WatcherEngine;
pub use status::{parse_status, ReviewStatus};
pub use tracker::TransitionTracker;
pub use types::{DeliveryError, Messenger, StatusSource, WatchError};
pub use validate::check_response;

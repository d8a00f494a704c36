pub mod error;
pub mod model;
pub mod observer;

pub use error::EventsError;
pub use model::{Event, EventPatch, EventStatus, EventUpdate, NewEvent};
pub use observer::{ChangePublisher, EventChange, EventObserver};

pub mod observer;
pub mod service;

pub use observer::NewsFeedObserver;
pub use service::NewsFeedService;

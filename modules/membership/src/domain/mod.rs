pub mod repo;
pub mod service;

pub use repo::MembersRepository;
pub use service::{MembershipService, Session};

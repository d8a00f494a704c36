pub mod client;
pub mod error;
pub mod model;

pub use client::{Actor, MembershipApi};
pub use error::MembershipError;
pub use model::{Member, MemberState, NewMember, Role, RoleAssignment};

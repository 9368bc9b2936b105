mod group;
mod user;

pub use group::*;
pub use user::*;

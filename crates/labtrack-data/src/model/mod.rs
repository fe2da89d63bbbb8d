mod broadcast;
mod lab;
mod resource;
mod user;

pub use broadcast::{Audience, Broadcast};
pub use lab::Lab;
pub use resource::SharedResource;
pub use user::UserAccount;

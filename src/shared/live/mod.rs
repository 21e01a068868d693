pub mod change_feed;
pub mod subscription;

pub use change_feed::{ChangeFeed, Collection};
pub use subscription::LiveSubscription;

mod friend_name;
mod new_subscriber;
mod subscriber_email;
mod subscriber_name;

pub use friend_name::FriendName;
pub use new_subscriber::NewSubscriber;
pub use subscriber_email::SubscriberEmail;
pub use subscriber_name::SubscriberName;

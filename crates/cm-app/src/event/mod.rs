mod bus;

pub use bus::{NotificationBus, SubscriptionHandle};

use super::{SubscriberEmail, SubscriberName};

#[derive(Debug)]
pub struct NewSubscriber {
    pub first_name: SubscriberName,
    pub last_name: SubscriberName,
    pub email: SubscriberEmail,
}

impl NewSubscriber {
    /// Formatted entry for the in-memory roster. The validated signup
    /// path lowercases the address here; the legacy endpoint stores it
    /// verbatim, an inconsistency inherited from the original site.
    pub fn roster_entry(&self) -> String {
        format!(
            "{} {} | {}",
            self.first_name.as_ref(),
            self.last_name.as_ref(),
            self.email.as_ref().to_lowercase()
        )
    }
}

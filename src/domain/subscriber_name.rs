use unicode_segmentation::UnicodeSegmentation;

/// One name part of a subscriber; the signup form collects a first and
/// a last name and both go through the same checks.
#[derive(Debug)]
pub struct SubscriberName(String);

impl SubscriberName {
    pub fn parse(s: String) -> Result<SubscriberName, String> {
        if s.trim().is_empty() {
            return Err("Subscriber name cannot be empty".to_string());
        }

        if s.graphemes(true).count() > 256 {
            return Err("Subscriber name is too long".to_string());
        }

        let forbidden_chars = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        if s.chars().any(|g| forbidden_chars.contains(&g)) {
            return Err("Subscriber name contains forbidden characters".to_string());
        }

        Ok(SubscriberName(s))
    }
}

impl AsRef<str> for SubscriberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

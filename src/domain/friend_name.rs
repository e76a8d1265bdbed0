use unicode_segmentation::UnicodeSegmentation;

/// The original schema capped the column at 200 characters.
#[derive(Debug)]
pub struct FriendName(String);

impl FriendName {
    pub fn parse(s: String) -> Result<FriendName, String> {
        if s.trim().is_empty() {
            return Err("Friend name cannot be empty".to_string());
        }

        if s.graphemes(true).count() > 200 {
            return Err("Friend name is too long".to_string());
        }

        Ok(FriendName(s))
    }
}

impl AsRef<str> for FriendName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

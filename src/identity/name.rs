use crate::NAME_MAX_LENGTH;

/// Why a candidate player name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    Empty,
    TooLong,
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Please select a player name."),
            Self::TooLong => write!(
                f,
                "Player name must contain less than {} characters.",
                NAME_MAX_LENGTH
            ),
        }
    }
}

impl std::error::Error for NameError {}

/// Display name the local player joins under.
/// Non-empty and at most [`NAME_MAX_LENGTH`] characters; fixed for the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn validate(s: &str) -> Result<(), NameError> {
        match s.chars().count() {
            0 => Err(NameError::Empty),
            n if n > NAME_MAX_LENGTH => Err(NameError::TooLong),
            _ => Ok(()),
        }
    }
}

impl TryFrom<String> for PlayerName {
    type Error = NameError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s).map(|_| Self(s))
    }
}

impl TryFrom<&str> for PlayerName {
    type Error = NameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.to_string())
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn empty_name_rejected() {
        assert_eq!(PlayerName::try_from(""), Err(NameError::Empty));
    }
    #[test]
    fn fifty_characters_accepted() {
        let name = "x".repeat(NAME_MAX_LENGTH);
        assert!(PlayerName::try_from(name.as_str()).is_ok());
    }
    #[test]
    fn fifty_one_characters_rejected() {
        let name = "x".repeat(NAME_MAX_LENGTH + 1);
        assert_eq!(PlayerName::try_from(name), Err(NameError::TooLong));
    }
    #[test]
    fn length_counts_characters_not_bytes() {
        let name = "é".repeat(NAME_MAX_LENGTH);
        assert!(PlayerName::try_from(name).is_ok());
    }
    #[test]
    fn error_messages() {
        assert_eq!(NameError::Empty.to_string(), "Please select a player name.");
        assert_eq!(
            NameError::TooLong.to_string(),
            "Player name must contain less than 50 characters."
        );
    }
}

use strum::{Display, EnumIter, EnumString};

/// Enumerated category tag of a pin.
///
/// Tags that are not (yet) known to the application are carried through
/// unchanged in the `Other` variant, so a record read from storage can
/// always be written back without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PinCategory {
    Cafe,
    Restaurant,
    Shop,
    Service,
    Health,
    Education,
    Worship,
    Office,
    #[strum(default)]
    Other(String),
}

impl From<String> for PinCategory {
    fn from(tag: String) -> Self {
        tag.parse().unwrap_or(Self::Other(tag))
    }
}

impl From<PinCategory> for String {
    fn from(from: PinCategory) -> Self {
        from.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip() {
        let category: PinCategory = "cafe".to_string().into();
        assert_eq!(PinCategory::Cafe, category);
        assert_eq!("cafe", category.to_string());
    }

    #[test]
    fn unknown_tags_pass_through() {
        let category: PinCategory = "laundromat".to_string().into();
        assert_eq!(PinCategory::Other("laundromat".into()), category);
        assert_eq!("laundromat", category.to_string());
    }
}

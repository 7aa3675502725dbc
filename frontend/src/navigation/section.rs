use std::fmt;
use std::str::FromStr;

use crate::error::NavError;

/// The vertically stacked regions of the landing page, in document order of
/// the tracker's iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    History,
    Product,
    Features,
    Contact,
}

impl SectionId {
    /// Iteration order of the tracker. The first entry is the fallback.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::History,
        SectionId::Product,
        SectionId::Features,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::History => "history",
            SectionId::Product => "product",
            SectionId::Features => "features",
            SectionId::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::History => "History",
            SectionId::Product => "Product",
            SectionId::Features => "Features",
            SectionId::Contact => "Contact",
        }
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::ALL[0]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_id() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert_eq!(
            "nonexistent".parse::<SectionId>(),
            Err(NavError::UnknownSection("nonexistent".to_string()))
        );
        // ids are case sensitive, like DOM ids
        assert!("Hero".parse::<SectionId>().is_err());
    }

    #[test]
    fn default_is_hero() {
        assert_eq!(SectionId::default(), SectionId::Hero);
        assert_eq!(SectionId::Hero.nav_label(), "Home");
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Aesthetic category a pin belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aesthetic {
    #[default]
    Cottagecore,
    EarthyGoddess,
    BlackGirl,
    Colombian,
}

impl Aesthetic {
    /// Every category, in filter-bar order
    pub const ALL: [Aesthetic; 4] = [
        Aesthetic::Cottagecore,
        Aesthetic::EarthyGoddess,
        Aesthetic::BlackGirl,
        Aesthetic::Colombian,
    ];

    /// The persisted key (`earthy-goddess`)
    pub fn key(self) -> &'static str {
        match self {
            Aesthetic::Cottagecore => "cottagecore",
            Aesthetic::EarthyGoddess => "earthy-goddess",
            Aesthetic::BlackGirl => "black-girl",
            Aesthetic::Colombian => "colombian",
        }
    }

    /// Human-readable label (`Earthy Goddess`)
    pub fn label(self) -> &'static str {
        match self {
            Aesthetic::Cottagecore => "Cottagecore",
            Aesthetic::EarthyGoddess => "Earthy Goddess",
            Aesthetic::BlackGirl => "Black Girl",
            Aesthetic::Colombian => "Colombian",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Aesthetic::ALL.into_iter().find(|a| a.key() == s)
    }
}

impl fmt::Display for Aesthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown aesthetic '{0}' (expected one of: cottagecore, earthy-goddess, black-girl, colombian)")]
pub struct UnknownAesthetic(pub String);

impl FromStr for Aesthetic {
    type Err = UnknownAesthetic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Aesthetic::from_key(&s.trim().to_lowercase()).ok_or_else(|| UnknownAesthetic(s.to_string()))
    }
}

/// Category filter applied by the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Aesthetic),
}

impl Filter {
    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(a) => a.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(a) => a.label(),
        }
    }

    /// `all` followed by every aesthetic
    pub fn options() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(Aesthetic::ALL.into_iter().map(Filter::Only))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Filter {
    type Err = UnknownAesthetic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        s.parse().map(Filter::Only)
    }
}

impl From<Aesthetic> for Filter {
    fn from(a: Aesthetic) -> Self {
        Filter::Only(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for a in Aesthetic::ALL {
            assert_eq!(a.key().parse::<Aesthetic>().unwrap(), a);
        }
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        let json = serde_json::to_string(&Aesthetic::EarthyGoddess).unwrap();
        assert_eq!(json, "\"earthy-goddess\"");
        let a: Aesthetic = serde_json::from_str("\"black-girl\"").unwrap();
        assert_eq!(a, Aesthetic::BlackGirl);
    }

    #[test]
    fn unknown_aesthetic_is_rejected() {
        assert!("vaporwave".parse::<Aesthetic>().is_err());
        assert!(serde_json::from_str::<Aesthetic>("\"vaporwave\"").is_err());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Colombian ".parse::<Aesthetic>().unwrap(), Aesthetic::Colombian);
    }

    #[test]
    fn default_is_first_category() {
        assert_eq!(Aesthetic::default(), Aesthetic::ALL[0]);
        assert_eq!(Aesthetic::default(), Aesthetic::Cottagecore);
    }

    #[test]
    fn filter_parses_all_and_keys() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("ALL".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(
            "cottagecore".parse::<Filter>().unwrap(),
            Filter::Only(Aesthetic::Cottagecore)
        );
        assert!("nope".parse::<Filter>().is_err());
    }

    #[test]
    fn filter_options_start_with_all() {
        let keys: Vec<&str> = Filter::options().map(Filter::key).collect();
        assert_eq!(
            keys,
            vec!["all", "cottagecore", "earthy-goddess", "black-girl", "colombian"]
        );
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Platform routing values for Riot API (Summoner-v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    BR1,
    LA1,
    LA2,
    NA1,
    JP1,
    KR,
    EUN1,
    EUW1,
    ME1,
    RU,
    TR1,
    OC1,
    PH2,
    SG2,
    TH2,
    TW2,
    VN2,
}

impl Platform {
    pub const ALL: [Platform; 17] = [
        Self::BR1,
        Self::EUN1,
        Self::EUW1,
        Self::JP1,
        Self::KR,
        Self::LA1,
        Self::LA2,
        Self::ME1,
        Self::NA1,
        Self::OC1,
        Self::PH2,
        Self::RU,
        Self::SG2,
        Self::TH2,
        Self::TR1,
        Self::TW2,
        Self::VN2,
    ];

    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "br1",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::NA1 => "na1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::ME1 => "me1",
            Self::RU => "ru",
            Self::TR1 => "tr1",
            Self::OC1 => "oc1",
            Self::PH2 => "ph2",
            Self::SG2 => "sg2",
            Self::TH2 => "th2",
            Self::TW2 => "tw2",
            Self::VN2 => "vn2",
        }
    }

    pub fn to_region(self) -> Region {
        match self {
            Self::BR1 | Self::LA1 | Self::LA2 | Self::NA1 => Region::Americas,
            Self::JP1 | Self::KR => Region::Asia,
            Self::EUN1 | Self::EUW1 | Self::ME1 | Self::RU | Self::TR1 => Region::Europe,
            Self::OC1 | Self::PH2 | Self::SG2 | Self::TH2 | Self::TW2 | Self::VN2 => Region::Sea,
        }
    }

    /// Regional routing for Account-v1, which is not served by `sea`.
    pub fn account_region(self) -> Region {
        match self.to_region() {
            Region::Sea => Region::Asia,
            region => region,
        }
    }

    /// Comma separated list of accepted platform codes, for error messages.
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BR" | "BR1" => Ok(Self::BR1),
            "LAN" | "LA1" => Ok(Self::LA1),
            "LAS" | "LA2" => Ok(Self::LA2),
            "NA" | "NA1" => Ok(Self::NA1),
            "JP" | "JP1" => Ok(Self::JP1),
            "KR" => Ok(Self::KR),
            "EUNE" | "EUN" | "EUN1" => Ok(Self::EUN1),
            "EUW" | "EUW1" => Ok(Self::EUW1),
            "ME" | "ME1" => Ok(Self::ME1),
            "RU" => Ok(Self::RU),
            "TR" | "TR1" => Ok(Self::TR1),
            "OCE" | "OC" | "OC1" => Ok(Self::OC1),
            "PH" | "PH2" => Ok(Self::PH2),
            "SG" | "SG2" => Ok(Self::SG2),
            "TH" | "TH2" => Ok(Self::TH2),
            "TW" | "TW2" => Ok(Self::TW2),
            "VN" | "VN2" => Ok(Self::VN2),
            _ => Err(AppError::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Regional routing values for Riot API (Account-v1, Match-v5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Region {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively_and_trimmed() {
        assert_eq!("na1".parse::<Platform>().unwrap(), Platform::NA1);
        assert_eq!(" EUW1 ".parse::<Platform>().unwrap(), Platform::EUW1);
        assert_eq!("kr".parse::<Platform>().unwrap(), Platform::KR);
        assert_eq!("eune".parse::<Platform>().unwrap(), Platform::EUN1);
    }

    #[test]
    fn unknown_code_is_invalid_region() {
        let err = "XX9".parse::<Platform>().unwrap_err();
        assert!(matches!(err, AppError::InvalidRegion(ref s) if s == "XX9"));
    }

    #[test]
    fn every_platform_round_trips_through_display() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn platforms_route_to_their_region() {
        assert_eq!(Platform::NA1.to_region(), Region::Americas);
        assert_eq!(Platform::KR.to_region(), Region::Asia);
        assert_eq!(Platform::TR1.to_region(), Region::Europe);
        assert_eq!(Platform::VN2.to_region(), Region::Sea);
        assert_eq!(
            Platform::EUW1.to_region().base_url(),
            "https://europe.api.riotgames.com"
        );
        assert_eq!(Platform::OC1.base_url(), "https://oc1.api.riotgames.com");
    }

    #[test]
    fn account_lookups_never_route_to_sea() {
        assert_eq!(
            Platform::OC1.account_region().base_url(),
            "https://asia.api.riotgames.com"
        );
        for platform in Platform::ALL {
            assert_ne!(platform.account_region(), Region::Sea, "{platform}");
        }
        assert_eq!(Platform::NA1.account_region(), Region::Americas);
        assert_eq!(Platform::EUW1.account_region(), Region::Europe);
        assert_eq!(Platform::KR.account_region(), Region::Asia);
        // Match-v5 keeps the sea cluster.
        assert_eq!(Platform::OC1.to_region(), Region::Sea);
    }

    #[test]
    fn valid_codes_lists_every_platform() {
        let codes = Platform::valid_codes();
        assert!(codes.starts_with("BR1, EUN1"));
        assert_eq!(codes.split(", ").count(), Platform::ALL.len());
    }
}

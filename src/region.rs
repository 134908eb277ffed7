use clap::ValueEnum;
use http::Uri;

/// Commercial regions the orchestration service is deployed in.
///
/// Each region runs an independent tenant API behind its own base URL;
/// mapping happens entirely client-side.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// United States (the default deployment)
    Us,
    /// Europe
    Eu,
    /// Asia-Pacific and Japan
    Apj,
    /// Australia
    Au,
    /// India
    In,
}

impl Region {
    pub fn base_uri(&self) -> Uri {
        match self {
            Region::Us => Uri::from_static("https://www.defenseorchestrator.com"),
            Region::Eu => Uri::from_static("https://www.defenseorchestrator.eu"),
            Region::Apj => Uri::from_static("https://apj.cdo.cisco.com"),
            Region::Au => Uri::from_static("https://au.cdo.cisco.com"),
            Region::In => Uri::from_static("https://in.cdo.cisco.com"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions_resolve() {
        let region = Region::from_str("eu", true).unwrap();
        assert_eq!(
            region.base_uri().host(),
            Some("www.defenseorchestrator.eu")
        );
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        assert!(Region::from_str("mars", true).is_err());
    }

    #[test]
    fn test_every_region_has_an_https_base() {
        for region in [Region::Us, Region::Eu, Region::Apj, Region::Au, Region::In] {
            let uri = region.base_uri();
            assert_eq!(uri.scheme_str(), Some("https"));
            assert!(uri.host().is_some());
        }
    }
}

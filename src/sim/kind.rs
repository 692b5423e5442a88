//! Ball kinds (the flyweight key)

use serde::{Deserialize, Serialize};

use crate::consts::BALL_RADIUS;

/// Visual/physical class of a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallKind {
    Beach,
    Basket,
    #[default]
    Soccer,
}

impl BallKind {
    /// All kinds in selector order
    pub const ALL: [BallKind; 3] = [BallKind::Beach, BallKind::Basket, BallKind::Soccer];

    pub fn as_str(&self) -> &'static str {
        match self {
            BallKind::Beach => "beach",
            BallKind::Basket => "basket",
            BallKind::Soccer => "soccer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beach" | "beachball" | "beach ball" => Some(BallKind::Beach),
            "basket" | "basketball" | "basket ball" => Some(BallKind::Basket),
            "soccer" | "soccerball" | "soccer ball" => Some(BallKind::Soccer),
            _ => None,
        }
    }

    /// Selector label
    pub fn label(&self) -> &'static str {
        match self {
            BallKind::Beach => "Beach Ball",
            BallKind::Basket => "Basket Ball",
            BallKind::Soccer => "Soccer Ball",
        }
    }

    /// Sprite file, relative to the asset directory
    pub fn asset_path(&self) -> &'static str {
        match self {
            BallKind::Beach => "ball_beach.png",
            BallKind::Basket => "ball_basket.png",
            BallKind::Soccer => "ball_soccer.png",
        }
    }

    /// Intrinsic radius shared by every ball of this kind
    pub fn radius(&self) -> f32 {
        match self {
            BallKind::Beach | BallKind::Basket | BallKind::Soccer => BALL_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(BallKind::from_str("Beach"), Some(BallKind::Beach));
        assert_eq!(BallKind::from_str("basketball"), Some(BallKind::Basket));
        assert_eq!(BallKind::from_str("Soccer Ball"), Some(BallKind::Soccer));
        assert_eq!(BallKind::from_str("tennis"), None);
    }

    #[test]
    fn test_as_str_round_trips() {
        for kind in BallKind::ALL {
            assert_eq!(BallKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_mapping_is_distinct_and_positive() {
        for kind in BallKind::ALL {
            assert!(kind.radius() > 0.0);
        }
        assert_ne!(BallKind::Beach.asset_path(), BallKind::Soccer.asset_path());
        assert_ne!(BallKind::Basket.asset_path(), BallKind::Soccer.asset_path());
    }

    #[test]
    fn test_default_is_last_listed() {
        assert_eq!(BallKind::default(), *BallKind::ALL.last().unwrap());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&BallKind::Basket).unwrap();
        assert_eq!(json, "\"basket\"");
        let kind: BallKind = serde_json::from_str("\"beach\"").unwrap();
        assert_eq!(kind, BallKind::Beach);
    }
}

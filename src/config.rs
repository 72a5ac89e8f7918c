use crate::ship::ShipCatalogue;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Everything fixed at match construction: grid dimensions, the fleet and
/// whether peeking players may see the opponent's hidden grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    pub width: usize,
    pub height: usize,
    #[cfg_attr(feature = "std", serde(default))]
    pub catalogue: ShipCatalogue,
    /// Debug capability: lets players that ask for it read the opponent's
    /// ship placements.
    #[cfg_attr(feature = "std", serde(default))]
    pub allow_peeking: bool,
}

impl MatchConfig {
    /// Standard fleet on a `width` x `height` grid, peeking disabled.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            catalogue: ShipCatalogue::standard(),
            allow_peeking: false,
        }
    }

    pub fn with_catalogue(mut self, catalogue: ShipCatalogue) -> Self {
        self.catalogue = catalogue;
        self
    }

    pub fn with_peeking(mut self, allow: bool) -> Self {
        self.allow_peeking = allow;
        self
    }

    /// Parse a configuration from JSON. Missing `catalogue` and
    /// `allow_peeking` fields take their defaults.
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

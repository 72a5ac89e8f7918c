//! Ship kinds and the fleet catalogue shared by both grids of a match.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use thiserror::Error;

/// Kind of ship. Which kinds take part in a match, and how long they are, is
/// decided by the [`ShipCatalogue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ShipKind {
    PatrolBoat,
    Destroyer,
    Submarine,
    Cruiser,
    Battleship,
    Carrier,
}

impl ShipKind {
    pub const ALL: [ShipKind; 6] = [
        ShipKind::PatrolBoat,
        ShipKind::Destroyer,
        ShipKind::Submarine,
        ShipKind::Cruiser,
        ShipKind::Battleship,
        ShipKind::Carrier,
    ];

    /// Ship's name.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::PatrolBoat => "Patrol Boat",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Battleship => "Battleship",
            ShipKind::Carrier => "Carrier",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no ship kind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown ship kind")]
pub struct UnknownShipKind;

impl FromStr for ShipKind {
    type Err = UnknownShipKind;

    /// Accepts names case-insensitively, ignoring spaces, dashes and underscores
    /// (`"patrol boat"`, `"Patrol_Boat"`, `"patrolboat"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s
            .chars()
            .filter(|c| !matches!(*c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase());
        ShipKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                let name = kind
                    .name()
                    .chars()
                    .filter(|c| *c != ' ')
                    .map(|c| c.to_ascii_lowercase());
                name.eq(wanted.clone())
            })
            .ok_or(UnknownShipKind)
    }
}

/// Length and per-grid maximum count of one ship kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipClass {
    pub kind: ShipKind,
    pub length: usize,
    pub max_count: usize,
}

impl ShipClass {
    pub const fn new(kind: ShipKind, length: usize, max_count: usize) -> Self {
        Self {
            kind,
            length,
            max_count,
        }
    }
}

/// Errors raised while building a catalogue.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("a fleet needs at least one ship kind")]
    Empty,
    #[error("{0} is listed more than once")]
    DuplicateKind(ShipKind),
    #[error("{0} must be at least one cell long")]
    ZeroLength(ShipKind),
    #[error("{0} must be allowed at least once")]
    ZeroCount(ShipKind),
}

/// Fixed mapping from ship kind to length and maximum count per grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<ShipClass>", into = "Vec<ShipClass>")
)]
pub struct ShipCatalogue {
    classes: Vec<ShipClass>,
}

impl ShipCatalogue {
    /// Build a catalogue, validating every entry. Entries are kept ordered by kind.
    pub fn new(classes: impl IntoIterator<Item = ShipClass>) -> Result<Self, CatalogueError> {
        let mut classes: Vec<ShipClass> = classes.into_iter().collect();
        if classes.is_empty() {
            return Err(CatalogueError::Empty);
        }
        classes.sort_by_key(|class| class.kind);
        for pair in classes.windows(2) {
            if pair[0].kind == pair[1].kind {
                return Err(CatalogueError::DuplicateKind(pair[0].kind));
            }
        }
        for class in &classes {
            if class.length == 0 {
                return Err(CatalogueError::ZeroLength(class.kind));
            }
            if class.max_count == 0 {
                return Err(CatalogueError::ZeroCount(class.kind));
            }
        }
        Ok(Self { classes })
    }

    /// Destroyer(2) x1, Cruiser(3) x2, Battleship(4) x1, Carrier(5) x1.
    pub fn standard() -> Self {
        Self {
            classes: alloc::vec![
                ShipClass::new(ShipKind::Destroyer, 2, 1),
                ShipClass::new(ShipKind::Cruiser, 3, 2),
                ShipClass::new(ShipKind::Battleship, 4, 1),
                ShipClass::new(ShipKind::Carrier, 5, 1),
            ],
        }
    }

    pub fn classes(&self) -> &[ShipClass] {
        &self.classes
    }

    pub fn get(&self, kind: ShipKind) -> Option<&ShipClass> {
        self.classes.iter().find(|class| class.kind == kind)
    }

    pub(crate) fn index_of(&self, kind: ShipKind) -> Option<usize> {
        self.classes.iter().position(|class| class.kind == kind)
    }

    /// Number of ships in a complete fleet.
    pub fn fleet_size(&self) -> usize {
        self.classes.iter().map(|class| class.max_count).sum()
    }

    /// Number of cells a complete fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.classes
            .iter()
            .map(|class| class.length * class.max_count)
            .sum()
    }

    /// Every ship of a complete fleet, longest first.
    pub fn placement_queue(&self) -> Vec<ShipKind> {
        let mut queue = Vec::with_capacity(self.fleet_size());
        for class in &self.classes {
            for _ in 0..class.max_count {
                queue.push(class.kind);
            }
        }
        queue.sort_by(|a, b| self.length_of(*b).cmp(&self.length_of(*a)));
        queue
    }

    /// Lengths of every ship of a complete fleet.
    pub fn fleet_lengths(&self) -> Vec<usize> {
        self.placement_queue()
            .into_iter()
            .map(|kind| self.length_of(kind))
            .collect()
    }

    fn length_of(&self, kind: ShipKind) -> usize {
        self.get(kind).map_or(0, |class| class.length)
    }
}

impl Default for ShipCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<ShipClass>> for ShipCatalogue {
    type Error = CatalogueError;

    fn try_from(classes: Vec<ShipClass>) -> Result<Self, Self::Error> {
        Self::new(classes)
    }
}

impl From<ShipCatalogue> for Vec<ShipClass> {
    fn from(catalogue: ShipCatalogue) -> Self {
        catalogue.classes
    }
}

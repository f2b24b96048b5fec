//! Domain entities exposed by the bookings service layer.

use std::fmt::{Display, Formatter};

use serde::Serialize;

pub mod client;
pub mod destination;
pub mod flight;
pub mod hotel;
pub mod trip;
pub mod types;

/// Kinds of stored entities, used to name the subject of a lookup failure.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Client,
    Flight,
    Destination,
    Hotel,
    Trip,
}

impl EntityKind {
    /// Collection segment used in API paths, e.g. `clients`.
    pub const fn collection(self) -> &'static str {
        match self {
            EntityKind::Client => "clients",
            EntityKind::Flight => "flights",
            EntityKind::Destination => "destinations",
            EntityKind::Hotel => "hotels",
            EntityKind::Trip => "trips",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Client => "client",
            EntityKind::Flight => "flight",
            EntityKind::Destination => "destination",
            EntityKind::Hotel => "hotel",
            EntityKind::Trip => "trip",
        };
        f.write_str(name)
    }
}

/// Reference to a single stored row: its kind and raw identifier.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: i32,
}

impl EntityRef {
    pub const fn new(kind: EntityKind, id: i32) -> Self {
        Self { kind, id }
    }
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

/// Shared capability of stored entities: a kind and a positive identifier.
pub trait Identifiable {
    const KIND: EntityKind;

    fn id(&self) -> i32;

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(Self::KIND, self.id())
    }
}

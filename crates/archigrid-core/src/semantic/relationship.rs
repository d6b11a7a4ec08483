//! Directed relationships between diagram objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// The ArchiMate relationship kinds.
///
/// Kinds are written in lowercase in serialized form (`serving`,
/// `realization`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Composition,
    Aggregation,
    Assignment,
    Realization,
    Serving,
    Access,
    Influence,
    Triggering,
    Flow,
    Specialization,
    #[default]
    Association,
}

impl RelationshipKind {
    /// Returns the routing priority connection routers should give this kind.
    ///
    /// Higher values are routed first. Serving and realization form the
    /// vertical spine of a layered view, structural kinds follow, then the
    /// kinds that cross aspects.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archigrid_core::semantic::RelationshipKind;
    /// assert_eq!(RelationshipKind::Serving.routing_priority(), 10);
    /// assert_eq!(RelationshipKind::Association.routing_priority(), 1);
    /// ```
    pub fn routing_priority(self) -> u8 {
        match self {
            Self::Serving | Self::Realization => 10,
            Self::Composition | Self::Aggregation => 8,
            Self::Assignment | Self::Access | Self::Flow => 5,
            Self::Influence | Self::Triggering | Self::Specialization | Self::Association => 1,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Composition => "composition",
            Self::Aggregation => "aggregation",
            Self::Assignment => "assignment",
            Self::Realization => "realization",
            Self::Serving => "serving",
            Self::Access => "access",
            Self::Influence => "influence",
            Self::Triggering => "triggering",
            Self::Flow => "flow",
            Self::Specialization => "specialization",
            Self::Association => "association",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A directed relationship from `source` to `target`.
///
/// Layout treats every kind the same way: the target is placed above the
/// source when both share a grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    source: Id,
    target: Id,
    #[serde(default)]
    kind: RelationshipKind,
}

impl Relationship {
    pub fn new(source: impl Into<Id>, target: impl Into<Id>, kind: RelationshipKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// Returns true if both ends name the same object.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

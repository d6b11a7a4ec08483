//! ArchiMate element types and their facet tags.
//!
//! A single ArchiMate concept can belong to several categories at once: a
//! `BusinessService` is a business-layer concept, a behavior and a service.
//! Each [`ElementType`] therefore exposes a [`Facets`] set that layout code
//! queries with ordered precedence rules.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single category an element type can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    // Layers
    Strategy,
    Business,
    Application,
    Technology,
    Physical,
    Motivation,
    ImplementationMigration,
    // Aspects
    ActiveStructure,
    PassiveStructure,
    Behavior,
    Composite,
    // Exposure
    Service,
    Interface,
    Contractual,
}

impl Facet {
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A compact set of [`Facet`] tags.
///
/// # Examples
///
/// ```
/// # use archigrid_core::semantic::{Facet, Facets};
/// let facets = Facets::EMPTY.with(Facet::Business).with(Facet::Service);
///
/// assert!(facets.contains(Facet::Service));
/// assert!(!facets.contains(Facet::Interface));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Facets(u16);

impl Facets {
    pub const EMPTY: Facets = Facets(0);

    /// Returns a copy of this set with `facet` added.
    pub const fn with(self, facet: Facet) -> Self {
        Self(self.0 | facet.bit())
    }

    /// Returns true if `facet` is in the set.
    pub const fn contains(self, facet: Facet) -> bool {
        self.0 & facet.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Shorthand for building facet sets in the catalog below.
const fn facets<const N: usize>(tags: [Facet; N]) -> Facets {
    let mut set = Facets::EMPTY;
    let mut i = 0;
    while i < N {
        set = set.with(tags[i]);
        i += 1;
    }
    set
}

/// Error returned when a string does not name a known element type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element type `{0}`")]
pub struct UnknownElementType(pub String);

/// The ArchiMate 3.1 element catalog.
///
/// Variants serialize to, and parse from, their ArchiMate names
/// (`BusinessActor`, `ApplicationComponent`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    // Business
    BusinessActor,
    BusinessRole,
    BusinessCollaboration,
    BusinessInterface,
    BusinessProcess,
    BusinessFunction,
    BusinessInteraction,
    BusinessEvent,
    BusinessService,
    BusinessObject,
    Contract,
    Representation,
    Product,
    // Application
    ApplicationComponent,
    ApplicationCollaboration,
    ApplicationInterface,
    ApplicationFunction,
    ApplicationInteraction,
    ApplicationProcess,
    ApplicationEvent,
    ApplicationService,
    DataObject,
    // Technology
    Node,
    Device,
    SystemSoftware,
    TechnologyCollaboration,
    TechnologyInterface,
    Path,
    CommunicationNetwork,
    TechnologyFunction,
    TechnologyProcess,
    TechnologyInteraction,
    TechnologyEvent,
    TechnologyService,
    Artifact,
    // Physical
    Equipment,
    Facility,
    DistributionNetwork,
    Material,
    // Motivation
    Stakeholder,
    Driver,
    Assessment,
    Goal,
    Outcome,
    Principle,
    Requirement,
    Constraint,
    Meaning,
    Value,
    // Strategy
    Resource,
    Capability,
    ValueStream,
    CourseOfAction,
    // Implementation & Migration
    WorkPackage,
    Deliverable,
    ImplementationEvent,
    Plateau,
    Gap,
    // Other
    Location,
    Grouping,
    Junction,
}

impl ElementType {
    /// Every element type, in catalog order.
    pub const ALL: [ElementType; 61] = [
        Self::BusinessActor,
        Self::BusinessRole,
        Self::BusinessCollaboration,
        Self::BusinessInterface,
        Self::BusinessProcess,
        Self::BusinessFunction,
        Self::BusinessInteraction,
        Self::BusinessEvent,
        Self::BusinessService,
        Self::BusinessObject,
        Self::Contract,
        Self::Representation,
        Self::Product,
        Self::ApplicationComponent,
        Self::ApplicationCollaboration,
        Self::ApplicationInterface,
        Self::ApplicationFunction,
        Self::ApplicationInteraction,
        Self::ApplicationProcess,
        Self::ApplicationEvent,
        Self::ApplicationService,
        Self::DataObject,
        Self::Node,
        Self::Device,
        Self::SystemSoftware,
        Self::TechnologyCollaboration,
        Self::TechnologyInterface,
        Self::Path,
        Self::CommunicationNetwork,
        Self::TechnologyFunction,
        Self::TechnologyProcess,
        Self::TechnologyInteraction,
        Self::TechnologyEvent,
        Self::TechnologyService,
        Self::Artifact,
        Self::Equipment,
        Self::Facility,
        Self::DistributionNetwork,
        Self::Material,
        Self::Stakeholder,
        Self::Driver,
        Self::Assessment,
        Self::Goal,
        Self::Outcome,
        Self::Principle,
        Self::Requirement,
        Self::Constraint,
        Self::Meaning,
        Self::Value,
        Self::Resource,
        Self::Capability,
        Self::ValueStream,
        Self::CourseOfAction,
        Self::WorkPackage,
        Self::Deliverable,
        Self::ImplementationEvent,
        Self::Plateau,
        Self::Gap,
        Self::Location,
        Self::Grouping,
        Self::Junction,
    ];

    /// Returns the ArchiMate name of this type.
    pub fn name(self) -> &'static str {
        match self {
            Self::BusinessActor => "BusinessActor",
            Self::BusinessRole => "BusinessRole",
            Self::BusinessCollaboration => "BusinessCollaboration",
            Self::BusinessInterface => "BusinessInterface",
            Self::BusinessProcess => "BusinessProcess",
            Self::BusinessFunction => "BusinessFunction",
            Self::BusinessInteraction => "BusinessInteraction",
            Self::BusinessEvent => "BusinessEvent",
            Self::BusinessService => "BusinessService",
            Self::BusinessObject => "BusinessObject",
            Self::Contract => "Contract",
            Self::Representation => "Representation",
            Self::Product => "Product",
            Self::ApplicationComponent => "ApplicationComponent",
            Self::ApplicationCollaboration => "ApplicationCollaboration",
            Self::ApplicationInterface => "ApplicationInterface",
            Self::ApplicationFunction => "ApplicationFunction",
            Self::ApplicationInteraction => "ApplicationInteraction",
            Self::ApplicationProcess => "ApplicationProcess",
            Self::ApplicationEvent => "ApplicationEvent",
            Self::ApplicationService => "ApplicationService",
            Self::DataObject => "DataObject",
            Self::Node => "Node",
            Self::Device => "Device",
            Self::SystemSoftware => "SystemSoftware",
            Self::TechnologyCollaboration => "TechnologyCollaboration",
            Self::TechnologyInterface => "TechnologyInterface",
            Self::Path => "Path",
            Self::CommunicationNetwork => "CommunicationNetwork",
            Self::TechnologyFunction => "TechnologyFunction",
            Self::TechnologyProcess => "TechnologyProcess",
            Self::TechnologyInteraction => "TechnologyInteraction",
            Self::TechnologyEvent => "TechnologyEvent",
            Self::TechnologyService => "TechnologyService",
            Self::Artifact => "Artifact",
            Self::Equipment => "Equipment",
            Self::Facility => "Facility",
            Self::DistributionNetwork => "DistributionNetwork",
            Self::Material => "Material",
            Self::Stakeholder => "Stakeholder",
            Self::Driver => "Driver",
            Self::Assessment => "Assessment",
            Self::Goal => "Goal",
            Self::Outcome => "Outcome",
            Self::Principle => "Principle",
            Self::Requirement => "Requirement",
            Self::Constraint => "Constraint",
            Self::Meaning => "Meaning",
            Self::Value => "Value",
            Self::Resource => "Resource",
            Self::Capability => "Capability",
            Self::ValueStream => "ValueStream",
            Self::CourseOfAction => "CourseOfAction",
            Self::WorkPackage => "WorkPackage",
            Self::Deliverable => "Deliverable",
            Self::ImplementationEvent => "ImplementationEvent",
            Self::Plateau => "Plateau",
            Self::Gap => "Gap",
            Self::Location => "Location",
            Self::Grouping => "Grouping",
            Self::Junction => "Junction",
        }
    }

    /// Returns the facet tags of this type.
    ///
    /// Motivation concepts other than `Stakeholder` carry no aspect facet, and
    /// `Junction` carries no facet at all.
    pub fn facets(self) -> Facets {
        use Facet::*;

        match self {
            Self::BusinessActor | Self::BusinessRole | Self::BusinessCollaboration => {
                facets([Business, ActiveStructure])
            }
            Self::BusinessInterface => facets([Business, ActiveStructure, Interface]),
            Self::BusinessProcess
            | Self::BusinessFunction
            | Self::BusinessInteraction
            | Self::BusinessEvent => facets([Business, Behavior]),
            Self::BusinessService => facets([Business, Behavior, Service]),
            Self::BusinessObject => facets([Business, PassiveStructure]),
            Self::Contract | Self::Representation => {
                facets([Business, PassiveStructure, Contractual])
            }
            Self::Product => facets([Business, Composite]),

            Self::ApplicationComponent | Self::ApplicationCollaboration => {
                facets([Application, ActiveStructure])
            }
            Self::ApplicationInterface => facets([Application, ActiveStructure, Interface]),
            Self::ApplicationFunction
            | Self::ApplicationInteraction
            | Self::ApplicationProcess
            | Self::ApplicationEvent => facets([Application, Behavior]),
            Self::ApplicationService => facets([Application, Behavior, Service]),
            Self::DataObject => facets([Application, PassiveStructure]),

            Self::Node
            | Self::Device
            | Self::SystemSoftware
            | Self::TechnologyCollaboration
            | Self::Path
            | Self::CommunicationNetwork => facets([Technology, ActiveStructure]),
            Self::TechnologyInterface => facets([Technology, ActiveStructure, Interface]),
            Self::TechnologyFunction
            | Self::TechnologyProcess
            | Self::TechnologyInteraction
            | Self::TechnologyEvent => facets([Technology, Behavior]),
            Self::TechnologyService => facets([Technology, Behavior, Service]),
            Self::Artifact => facets([Technology, PassiveStructure]),

            Self::Equipment | Self::Facility | Self::DistributionNetwork => {
                facets([Physical, ActiveStructure])
            }
            Self::Material => facets([Physical, PassiveStructure]),

            Self::Stakeholder => facets([Motivation, ActiveStructure]),
            Self::Driver
            | Self::Assessment
            | Self::Goal
            | Self::Outcome
            | Self::Principle
            | Self::Requirement
            | Self::Constraint
            | Self::Meaning
            | Self::Value => facets([Motivation]),

            Self::Resource => facets([Strategy]),
            Self::Capability | Self::ValueStream | Self::CourseOfAction => {
                facets([Strategy, Behavior])
            }

            Self::WorkPackage | Self::ImplementationEvent => {
                facets([ImplementationMigration, Behavior])
            }
            Self::Deliverable | Self::Gap => facets([ImplementationMigration, PassiveStructure]),
            Self::Plateau => facets([ImplementationMigration, Composite]),

            Self::Location | Self::Grouping => facets([Composite]),
            Self::Junction => Facets::EMPTY,
        }
    }

    /// Shorthand for `self.facets().contains(facet)`.
    pub fn has(self, facet: Facet) -> bool {
        self.facets().contains(facet)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| UnknownElementType(s.to_string()))
    }
}

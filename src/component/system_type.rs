//! Known component families and the system-type identifiers that name them

/// Installable component family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentFamily {
    /// Point-of-sale client
    PointOfSale,
    /// Workstation device manager
    WorkstationDeviceManager,
    /// Flow service
    FlowService,
    /// Local point-of-sale agent
    LocalPosAgent,
    /// Store hub service
    StoreHub,
}

impl ComponentFamily {
    pub const ALL: [ComponentFamily; 5] = [
        ComponentFamily::PointOfSale,
        ComponentFamily::WorkstationDeviceManager,
        ComponentFamily::FlowService,
        ComponentFamily::LocalPosAgent,
        ComponentFamily::StoreHub,
    ];

    /// Returns the config key holding this family's version override
    pub fn override_key(&self) -> &'static str {
        match self {
            ComponentFamily::PointOfSale => "pos_version",
            ComponentFamily::WorkstationDeviceManager => "wdm_version",
            ComponentFamily::FlowService => "flow_service_version",
            ComponentFamily::LocalPosAgent => "lpa_service_version",
            ComponentFamily::StoreHub => "storehub_service_version",
        }
    }

    /// Returns every system-type spelling accepted for this family.
    ///
    /// Only `CSE-wdm` is a confirmed identifier; the other spellings are
    /// provisional until checked against deployed system types.
    pub fn system_types(&self) -> &'static [&'static str] {
        match self {
            ComponentFamily::PointOfSale => &["CSE-pos", "CSE-POS", "pos"],
            ComponentFamily::WorkstationDeviceManager => &["CSE-wdm", "CSE-WDM", "wdm"],
            ComponentFamily::FlowService => {
                &["CSE-flow-service", "CSE-flowservice", "flow-service"]
            }
            ComponentFamily::LocalPosAgent => &["CSE-lpa-service", "CSE-lpa", "lpa-service"],
            ComponentFamily::StoreHub => {
                &["CSE-storehub-service", "CSE-storehub", "storehub-service"]
            }
        }
    }

    /// Look up the family for a system type.
    ///
    /// Matching is exact and case-sensitive against [`Self::system_types`].
    pub fn from_system_type(system_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.system_types().contains(&system_type))
    }
}

impl std::str::FromStr for ComponentFamily {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_system_type(s).ok_or(())
    }
}

//! Built-in catalog of common aircraft profiles.
//!
//! Figures are representative cruise-planning numbers, not POH data.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

use super::profile::AircraftProfile;

static BUILTIN: Lazy<AircraftCatalog> = Lazy::new(|| {
    let profiles = [
        AircraftProfile::new("C172", 640.0, 122.0, 8.5, 0.10),
        AircraftProfile::new("DA40", 720.0, 150.0, 9.8, 0.10),
        AircraftProfile::new("SR22", 1169.0, 183.0, 17.9, 0.10),
        AircraftProfile::new("PC12", 1803.0, 280.0, 66.0, 0.08),
        AircraftProfile::new("TBM9", 1730.0, 330.0, 60.0, 0.08),
        AircraftProfile::new("B350", 1806.0, 312.0, 100.0, 0.08),
    ];

    let mut map = HashMap::new();
    for profile in profiles {
        map.insert(profile.name.clone(), profile);
    }
    AircraftCatalog { profiles: map }
});

/// Collection of named aircraft profiles.
#[derive(Debug, Clone, Default)]
pub struct AircraftCatalog {
    profiles: HashMap<String, AircraftProfile>,
}

impl AircraftCatalog {
    /// The built-in catalog.
    pub fn builtin() -> &'static AircraftCatalog {
        &BUILTIN
    }

    /// Build a catalog from caller-supplied profiles.
    ///
    /// Each profile is validated and names must be unique.
    pub fn from_profiles<I>(profiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = AircraftProfile>,
    {
        let mut map = HashMap::new();
        for profile in profiles {
            profile.validate()?;
            let name = profile.name.clone();
            if map.insert(name.clone(), profile).is_some() {
                return Err(Error::DuplicateAircraft { name });
            }
        }
        Ok(Self { profiles: map })
    }

    /// Lookup a profile by exact name.
    pub fn get(&self, name: &str) -> Option<&AircraftProfile> {
        self.profiles.get(name)
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

//! Aircraft performance envelope and the limits derived from it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Time and fuel cost of flying a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegCost {
    pub time_hr: f64,
    pub fuel_gal: f64,
}

/// Static performance envelope for one aircraft type.
///
/// Immutable per planning run; a different profile yields a different
/// feasible subgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub name: String,
    /// Maximum still-air range on full tanks, nautical miles.
    pub range_nm: f64,
    /// Cruise true airspeed, knots.
    pub cruise_speed_kt: f64,
    /// Fuel burn at cruise, gallons per hour.
    pub burn_rate_gph: f64,
    /// Fraction of full fuel that must remain at landing.
    pub reserve_fraction: f64,
}

impl AircraftProfile {
    pub fn new(
        name: impl Into<String>,
        range_nm: f64,
        cruise_speed_kt: f64,
        burn_rate_gph: f64,
        reserve_fraction: f64,
    ) -> Self {
        Self {
            name: name.into(),
            range_nm,
            cruise_speed_kt,
            burn_rate_gph,
            reserve_fraction,
        }
    }

    /// Validate the profile for planning.
    ///
    /// Range, speed, and burn rate must be finite and positive; the reserve
    /// fraction must lie in `[0, 1)`. A zero burn rate is rejected rather
    /// than treated as infinite range.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidProfile {
                message: "aircraft name must not be empty".to_string(),
            });
        }

        let fields = [
            (self.range_nm, "range_nm"),
            (self.cruise_speed_kt, "cruise_speed_kt"),
            (self.burn_rate_gph, "burn_rate_gph"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidProfile {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        if !self.reserve_fraction.is_finite() || !(0.0..1.0).contains(&self.reserve_fraction) {
            return Err(Error::InvalidProfile {
                message: "reserve_fraction must lie in [0, 1)".to_string(),
            });
        }

        Ok(())
    }

    /// Full tank size implied by range, speed, and burn rate.
    pub fn fuel_capacity_gal(&self) -> f64 {
        self.burn_rate_gph * self.range_nm / self.cruise_speed_kt
    }

    /// Fuel available above the mandatory reserve.
    pub fn usable_fuel_gal(&self) -> f64 {
        self.fuel_capacity_gal() * (1.0 - self.reserve_fraction)
    }

    /// Longest leg flyable on full tanks net of reserve.
    pub fn max_leg_distance_nm(&self) -> f64 {
        self.range_nm * (1.0 - self.reserve_fraction)
    }

    /// Time and fuel to fly `distance_nm` at cruise.
    pub fn cost_of(&self, distance_nm: f64) -> LegCost {
        let time_hr = distance_nm / self.cruise_speed_kt;
        LegCost {
            time_hr,
            fuel_gal: time_hr * self.burn_rate_gph,
        }
    }
}

//! Aircraft performance data.
//!
//! - [`profile`] - performance envelope and derived limits
//! - [`catalog`] - built-in named profiles
//!
//! # Example
//!
//! ```
//! use skyroute_lib::aircraft::AircraftCatalog;
//!
//! let profile = AircraftCatalog::builtin().get("C172").unwrap();
//! assert!(profile.max_leg_distance_nm() > 0.0);
//! ```

pub mod catalog;
pub mod profile;

pub use catalog::AircraftCatalog;
pub use profile::{AircraftProfile, LegCost};

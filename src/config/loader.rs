//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a parking
//! lot's tariff configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PricingConfig;

use super::types::{HolidaysFile, LotMetadata, TariffSnapshot, TariffsFile};

/// Loads and provides access to one lot's tariff configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// freezes them into a [`TariffSnapshot`] for the engine.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/lot_centro/
/// ├── lot.yaml       # Lot identity
/// ├── pricing.yaml   # Grace, daily max, lost-ticket fee, currency
/// ├── tariffs.yaml   # Tariff rules
/// └── holidays.yaml  # Holiday calendar
/// ```
///
/// # Example
///
/// ```no_run
/// use tariff_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/lot_centro").unwrap();
/// println!("Serving lot: {}", loader.snapshot().lot().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    snapshot: TariffSnapshot,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if any required file is missing or contains
    /// invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let lot = Self::load_yaml::<LotMetadata>(&path.join("lot.yaml"))?;
        let pricing = Self::load_yaml::<PricingConfig>(&path.join("pricing.yaml"))?;
        let tariffs = Self::load_yaml::<TariffsFile>(&path.join("tariffs.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysFile>(&path.join("holidays.yaml"))?;

        Ok(Self {
            snapshot: TariffSnapshot::new(lot, pricing, tariffs, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded snapshot.
    pub fn snapshot(&self) -> &TariffSnapshot {
        &self.snapshot
    }

    /// Fails with [`EngineError::ParkingLotNotFound`] unless this loader
    /// serves the given company/lot pair.
    pub fn ensure_serves(&self, company_id: &str, parking_lot_id: &str) -> EngineResult<()> {
        if self.snapshot.serves(company_id, parking_lot_id) {
            Ok(())
        } else {
            Err(EngineError::ParkingLotNotFound {
                parking_lot_id: parking_lot_id.to_string(),
            })
        }
    }
}

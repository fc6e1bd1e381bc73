// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Config
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
use crate::error::{EdlError, EdlResult};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;

/// Material parameter set for one interface.
/// Maps 1:1 to the YAML parameter files (`phi0`, `NSites`, `Ef0`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    /// Optional label; library entries take their key as name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Charge-neutrality potential [V]
    pub phi0: f64,
    /// Defect site density [cm^-3]
    #[serde(rename = "NSites")]
    pub n_sites: f64,
    /// Formation energy at charge neutrality [eV]
    #[serde(rename = "Ef0")]
    pub ef0: f64,
    /// Relative dielectric constant
    pub epsilon: f64,
    /// Saturation parameter
    pub alpha: f64,
    /// Temperature [K]
    #[serde(rename = "T")]
    pub temperature: f64,
    /// Target potential for the x* search [V]
    pub phi_target: f64,
}

/// YAML keys accepted by [`MaterialParams::set`].
pub const PARAM_KEYS: [&str; 7] = ["phi0", "NSites", "Ef0", "epsilon", "alpha", "T", "phi_target"];

impl MaterialParams {
    pub fn from_yaml_str(contents: &str) -> EdlResult<Self> {
        let params: Self = serde_yaml::from_str(contents)?;
        Ok(params)
    }

    /// Load a single parameter set from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> EdlResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// Reject values for which the closed-form solution is undefined.
    pub fn validate(&self) -> EdlResult<()> {
        let all = [
            ("phi0", self.phi0),
            ("NSites", self.n_sites),
            ("Ef0", self.ef0),
            ("epsilon", self.epsilon),
            ("alpha", self.alpha),
            ("T", self.temperature),
            ("phi_target", self.phi_target),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(EdlError::invalid(name, value, "must be finite"));
            }
        }
        for (name, value) in [
            ("NSites", self.n_sites),
            ("epsilon", self.epsilon),
            ("alpha", self.alpha),
            ("T", self.temperature),
        ] {
            if value <= 0.0 {
                return Err(EdlError::invalid(name, value, "must be > 0"));
            }
        }
        if self.phi0 == 0.0 {
            return Err(EdlError::invalid(
                "phi0",
                self.phi0,
                "must be non-zero (capacitance is sigma / phi0)",
            ));
        }
        Ok(())
    }

    /// Override one field by its YAML key. Field names are accepted too.
    pub fn set(&mut self, key: &str, value: f64) -> EdlResult<()> {
        match key {
            "phi0" => self.phi0 = value,
            "NSites" | "n_sites" => self.n_sites = value,
            "Ef0" | "ef0" => self.ef0 = value,
            "epsilon" => self.epsilon = value,
            "alpha" => self.alpha = value,
            "T" | "temperature" => self.temperature = value,
            "phi_target" => self.phi_target = value,
            other => {
                return Err(EdlError::ConfigError(format!(
                    "unknown parameter '{other}', expected one of {}",
                    PARAM_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> EdlResult<f64> {
        match key {
            "phi0" => Ok(self.phi0),
            "NSites" | "n_sites" => Ok(self.n_sites),
            "Ef0" | "ef0" => Ok(self.ef0),
            "epsilon" => Ok(self.epsilon),
            "alpha" => Ok(self.alpha),
            "T" | "temperature" => Ok(self.temperature),
            "phi_target" => Ok(self.phi_target),
            other => Err(EdlError::ConfigError(format!(
                "unknown parameter '{other}', expected one of {}",
                PARAM_KEYS.join(", ")
            ))),
        }
    }
}

/// Parse a `KEY=VALUE` override such as `T=400` or `phi0=-0.5`.
pub fn parse_override(spec: &str) -> EdlResult<(String, f64)> {
    let (key, value) = spec
        .split_once('=')
        .ok_or_else(|| EdlError::ConfigError(format!("override '{spec}' is not KEY=VALUE")))?;
    let key = key.trim();
    if !PARAM_KEYS.contains(&key)
        && !matches!(key, "n_sites" | "ef0" | "temperature")
    {
        return Err(EdlError::ConfigError(format!(
            "unknown parameter '{key}', expected one of {}",
            PARAM_KEYS.join(", ")
        )));
    }
    let value: f64 = value.trim().parse().map_err(|_| {
        EdlError::ConfigError(format!("override '{spec}' has a non-numeric value"))
    })?;
    Ok((key.to_string(), value))
}

/// System names end up in output file names, so they must be a single
/// plain path component.
fn check_system_name(name: &str) -> EdlResult<()> {
    if name.is_empty() || name == "." || name.contains("..") || name.contains(['/', '\\']) {
        return Err(EdlError::ConfigError(format!(
            "system name '{name}' must not be empty or contain path separators or '..'"
        )));
    }
    Ok(())
}

/// Named parameter sets from one YAML document, in file order.
///
/// A document is either a bare parameter set or
/// `systems: { <name>: <params>, ... }`.
#[derive(Debug, Clone, Default)]
pub struct ParameterLibrary {
    systems: Vec<MaterialParams>,
}

impl ParameterLibrary {
    /// Bare parameter sets are named after the file stem.
    pub fn from_file(path: impl AsRef<Path>) -> EdlResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());
        Self::from_yaml_str(&contents, &stem)
    }

    pub fn from_yaml_str(contents: &str, default_name: &str) -> EdlResult<Self> {
        let doc: Value = serde_yaml::from_str(contents)?;
        let systems = match doc.get("systems") {
            Some(Value::Mapping(map)) => {
                let mut systems = Vec::with_capacity(map.len());
                for (key, value) in map {
                    let name = key.as_str().ok_or_else(|| {
                        EdlError::ConfigError(format!("system name {key:?} is not a string"))
                    })?;
                    check_system_name(name)?;
                    let mut params: MaterialParams = serde_yaml::from_value(value.clone())
                        .map_err(|e| EdlError::ConfigError(format!("system '{name}': {e}")))?;
                    params.name = Some(name.to_string());
                    systems.push(params);
                }
                systems
            }
            Some(_) => {
                return Err(EdlError::ConfigError(
                    "'systems' must map system names to parameter sets".to_string(),
                ))
            }
            None => {
                let mut params: MaterialParams = serde_yaml::from_value(doc)?;
                match &params.name {
                    Some(name) => check_system_name(name)?,
                    None => params.name = Some(default_name.to_string()),
                }
                vec![params]
            }
        };
        if systems.is_empty() {
            return Err(EdlError::ConfigError(
                "parameter file defines no systems".to_string(),
            ));
        }
        Ok(ParameterLibrary { systems })
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.systems.iter().map(|p| p.label()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&MaterialParams> {
        self.systems.iter().find(|p| p.label() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialParams> {
        self.systems.iter()
    }

    /// All systems, or only `name` when given.
    pub fn select(&self, name: Option<&str>) -> EdlResult<Vec<&MaterialParams>> {
        match name {
            None => Ok(self.systems.iter().collect()),
            Some(name) => self.get(name).map(|p| vec![p]).ok_or_else(|| {
                EdlError::ConfigError(format!(
                    "system '{name}' not found, available: {}",
                    self.names().join(", ")
                ))
            }),
        }
    }
}

//! # Materials
//!
//! Built-in material properties used to pre-fill the yield-stress and
//! modulus fields of the beam calculators. Lookup only - the engines never
//! depend on a material being selected, and editing or persisting the table
//! is a concern of the embedding application.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Properties of one material: yield stress in MPa and elastic modulus
/// in GPa, the units the input fields default to.
///
/// ## JSON Example
///
/// ```json
/// { "name": "SAE 1045 Trefilado", "fy_mpa": 360.0, "e_gpa": 200.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialData {
    pub name: String,
    pub fy_mpa: f64,
    pub e_gpa: f64,
}

impl MaterialData {
    pub fn new(name: impl Into<String>, fy_mpa: f64, e_gpa: f64) -> Self {
        MaterialData {
            name: name.into(),
            fy_mpa,
            e_gpa,
        }
    }
}

/// The built-in material table.
pub static DEFAULT_MATERIALS: Lazy<Vec<MaterialData>> = Lazy::new(|| {
    vec![
        MaterialData::new("SAE 1045 Trefilado", 360.0, 200.0),
        MaterialData::new("SAE 1020 Laminado", 350.0, 200.0),
        MaterialData::new("SAE 1045", 530.0, 200.0),
        MaterialData::new("Inox 304", 215.0, 193.0),
        MaterialData::new("Alumínio 6061", 275.0, 69.0),
        MaterialData::new("Plástico ABS", 40.0, 2.1),
    ]
});

/// Look a material up by its exact name.
pub fn find_by_name(name: &str) -> Option<&'static MaterialData> {
    DEFAULT_MATERIALS.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name() {
        let material = find_by_name("SAE 1045 Trefilado").unwrap();
        assert_eq!(material.fy_mpa, 360.0);
        assert_eq!(material.e_gpa, 200.0);

        assert!(find_by_name("Unobtainium").is_none());
    }

    #[test]
    fn test_default_table() {
        assert_eq!(DEFAULT_MATERIALS.len(), 6);
        assert!(DEFAULT_MATERIALS.iter().all(|m| m.fy_mpa > 0.0 && m.e_gpa > 0.0));
    }

    #[test]
    fn test_serialization() {
        let material = find_by_name("Inox 304").unwrap();
        let json = serde_json::to_string(material).unwrap();
        let roundtrip: MaterialData = serde_json::from_str(&json).unwrap();
        assert_eq!(*material, roundtrip);
    }
}

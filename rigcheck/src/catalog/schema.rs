//! Component record schema and loose JSON decoding.
//!
//! Catalog data historically lived in schemaless document stores, so numeric
//! fields show up as integers, integral floats, or digit strings depending on
//! who wrote the record. `Component::from_value` accepts all three; anything
//! else on a present field is catalog corruption and decoding fails with
//! [`CatalogError::MalformedField`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The eight fixed component slots a build can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
    Motherboard,
    #[serde(rename = "RAM")]
    Ram,
    Storage,
    #[serde(rename = "PSU")]
    Psu,
    Case,
    Cooler,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Cpu,
        Category::Gpu,
        Category::Motherboard,
        Category::Ram,
        Category::Storage,
        Category::Psu,
        Category::Case,
        Category::Cooler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Motherboard => "Motherboard",
            Category::Ram => "RAM",
            Category::Storage => "Storage",
            Category::Psu => "PSU",
            Category::Case => "Case",
            Category::Cooler => "Cooler",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    /// Case-insensitive, so CLI users can write `cpu` or `CPU`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Errors raised while decoding catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A present field could not be coerced to its expected type. This is the
    /// one fatal data-quality condition: it aborts decoding rather than
    /// silently skipping the rule that reads the field.
    #[error("component '{component}': field '{field}' is not a valid {expected}")]
    MalformedField {
        component: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("component '{component}': missing required field '{field}'")]
    MissingField {
        component: String,
        field: &'static str,
    },

    #[error("component '{component}': unknown category '{category}'")]
    UnknownCategory { component: String, category: String },

    #[error("catalog record is not a JSON object")]
    NotAnObject,

    #[error("catalog JSON is not an array of records")]
    NotAnArray,

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One catalog item. Fields outside the category's relevant subset stay
/// `None`; the evaluator treats a missing field as "rule does not apply",
/// never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_speed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu_wattage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_length_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_gpu_max_length_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_cooler_max_height_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooler_tdp_rating: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooler_height_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
}

impl Component {
    /// Minimal constructor for building records in code (tests, examples).
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            brand: None,
            price: 0.0,
            socket: None,
            ram_type: None,
            ram_speed: None,
            tdp: None,
            psu_wattage: None,
            gpu_length_mm: None,
            case_gpu_max_length_mm: None,
            case_cooler_max_height_mm: None,
            cooler_tdp_rating: None,
            cooler_height_mm: None,
            form_factor: None,
        }
    }

    /// Decode a catalog record from loosely-typed JSON.
    ///
    /// Numeric fields accept integers, integral floats, and digit strings.
    /// A present field that cannot be coerced is a
    /// [`CatalogError::MalformedField`].
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        let obj = value.as_object().ok_or(CatalogError::NotAnObject)?;

        let display_id = obj
            .get("id")
            .and_then(Value::as_str)
            .or_else(|| obj.get("name").and_then(Value::as_str))
            .unwrap_or("<unnamed>")
            .to_string();

        let id = require_str(obj, "id", &display_id)?;
        let name = require_str(obj, "name", &display_id)?;
        let category_raw = require_str(obj, "category", &display_id)?;
        let category =
            Category::from_str(&category_raw).map_err(|_| CatalogError::UnknownCategory {
                component: display_id.clone(),
                category: category_raw,
            })?;

        let price = match obj.get("price") {
            None | Some(Value::Null) => 0.0,
            Some(v) => coerce_price(v, &display_id)?,
        };

        let mut component = Component::new(id, name, category);
        component.price = price;
        component.brand = optional_str(obj, "brand");
        component.socket = optional_str(obj, "socket");
        component.ram_type = optional_str(obj, "ram_type");
        component.form_factor = optional_str(obj, "form_factor");
        component.ram_speed = optional_u32(obj, "ram_speed", &display_id)?;
        component.tdp = optional_u32(obj, "tdp", &display_id)?;
        component.psu_wattage = optional_u32(obj, "psu_wattage", &display_id)?;
        component.gpu_length_mm = optional_u32(obj, "gpu_length_mm", &display_id)?;
        component.case_gpu_max_length_mm = optional_u32(obj, "case_gpu_max_length_mm", &display_id)?;
        component.case_cooler_max_height_mm =
            optional_u32(obj, "case_cooler_max_height_mm", &display_id)?;
        component.cooler_tdp_rating = optional_u32(obj, "cooler_tdp_rating", &display_id)?;
        component.cooler_height_mm = optional_u32(obj, "cooler_height_mm", &display_id)?;

        Ok(component)
    }
}

fn require_str(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
    component: &str,
) -> Result<String, CatalogError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(CatalogError::MissingField {
            component: component.to_string(),
            field,
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CatalogError::MalformedField {
            component: component.to_string(),
            field,
            expected: "string",
        }),
    }
}

fn optional_str(obj: &serde_json::Map<String, Value>, field: &str) -> Option<String> {
    obj.get(field).and_then(Value::as_str).map(str::to_string)
}

fn optional_u32(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
    component: &str,
) -> Result<Option<u32>, CatalogError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => coerce_u32(v)
            .map(Some)
            .ok_or_else(|| CatalogError::MalformedField {
                component: component.to_string(),
                field,
                expected: "non-negative integer",
            }),
    }
}

fn coerce_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).ok()
            } else {
                // Integral floats only; 65.5 W is not a TDP anyone publishes.
                let f = n.as_f64()?;
                if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
                    Some(f as u32)
                } else {
                    None
                }
            }
        }
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn coerce_price(value: &Value, component: &str) -> Result<f64, CatalogError> {
    let malformed = || CatalogError::MalformedField {
        component: component.to_string(),
        field: "price",
        expected: "non-negative number",
    };
    let price = match value {
        Value::Number(n) => n.as_f64().ok_or_else(malformed)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| malformed())?,
        _ => return Err(malformed()),
    };
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(malformed())
    }
}

/// A build under evaluation: at most one component per category.
///
/// Backed by a `BTreeMap` so iteration (and therefore anything derived from
/// it) is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildSelection {
    slots: BTreeMap<Category, Component>,
}

impl BuildSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component into its own category's slot, returning the
    /// component it displaced, if any.
    pub fn insert(&mut self, component: Component) -> Option<Component> {
        self.slots.insert(component.category, component)
    }

    /// Builder-style insert for tests and examples.
    pub fn with(mut self, component: Component) -> Self {
        self.insert(component);
        self
    }

    pub fn get(&self, category: Category) -> Option<&Component> {
        self.slots.get(&category)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.slots.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &Component)> {
        self.slots.iter().map(|(c, comp)| (*c, comp))
    }
}

//! String-keyed property reflection for entity structs.
//!
//! Every entity derives [`PropertyAccess`] (via the `PropertyField` macro in
//! the `macros` crate), exposing its stored columns under their column names.
//! Values cross the reflection boundary as [`FieldValue`], with conversions
//! defined once by [`PropertyValue`] rather than per entity.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Uniform value representation for reflected property access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Absent value (maps to `Option::None` on typed fields)
    Null,
    /// Text value
    Str(String),
    /// Integer value
    Int(i64),
    /// Decimal value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Date value
    Date(NaiveDate),
    /// Date and time value
    DateTime(NaiveDateTime),
    /// Raw binary value
    Bytes(Vec<u8>),
    /// List of text values
    StrList(Vec<String>),
}

/// Errors raised by reflected property access
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// The property name is not declared on the entity
    #[error("unknown property {entity}.{property}")]
    Unknown {
        /// Entity type name
        entity: &'static str,
        /// The unrecognised property name
        property: String,
    },

    /// The supplied value cannot be converted to the field's type
    #[error("value not convertible for {entity}.{property}")]
    TypeMismatch {
        /// Entity type name
        entity: &'static str,
        /// The property being written
        property: &'static str,
    },
}

/// Reflected, string-keyed access to an entity's stored columns.
///
/// Implementations are generated by the `PropertyField` derive; the property
/// names are the stored column names, not the Rust field identifiers.
pub trait PropertyAccess {
    /// The entity type name
    fn entity() -> &'static str
    where
        Self: Sized;

    /// Canonical property names, in declaration order
    fn property_names() -> &'static [&'static str]
    where
        Self: Sized;

    /// Read a property by canonical name
    fn property(&self, name: &str) -> Option<FieldValue>;

    /// Write a property by canonical name
    fn set_property(&mut self, name: &str, value: FieldValue) -> Result<(), PropertyError>;

    /// Column documentation for a property, where declared
    fn property_description(name: &str) -> Option<&'static str>
    where
        Self: Sized,
    {
        let _ = name;
        None
    }
}

/// Conversion between a concrete field type and [`FieldValue`].
///
/// `from_value` returns `None` when the value is not representable in the
/// field's type; the caller turns that into a `PropertyError::TypeMismatch`.
pub trait PropertyValue: Sized {
    /// Convert the field value into the uniform representation
    fn into_value(self) -> FieldValue;

    /// Recover the field value from the uniform representation
    fn from_value(value: FieldValue) -> Option<Self>;
}

impl PropertyValue for String {
    fn into_value(self) -> FieldValue {
        FieldValue::Str(self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl PropertyValue for bool {
    fn into_value(self) -> FieldValue {
        FieldValue::Bool(self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl PropertyValue for i32 {
    fn into_value(self) -> FieldValue {
        FieldValue::Int(i64::from(self))
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(i) => Self::try_from(i).ok(),
            _ => None,
        }
    }
}

impl PropertyValue for i64 {
    fn into_value(self) -> FieldValue {
        FieldValue::Int(self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl PropertyValue for f64 {
    fn into_value(self) -> FieldValue {
        FieldValue::Float(self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(f) => Some(f),
            // Widening an integer literal into a decimal column is benign
            FieldValue::Int(i) => Some(i as Self),
            _ => None,
        }
    }
}

impl PropertyValue for NaiveDate {
    fn into_value(self) -> FieldValue {
        FieldValue::Date(self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Date(d) => Some(d),
            _ => None,
        }
    }
}

impl PropertyValue for NaiveDateTime {
    fn into_value(self) -> FieldValue {
        FieldValue::DateTime(self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

impl PropertyValue for Vec<u8> {
    fn into_value(self) -> FieldValue {
        FieldValue::Bytes(self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl PropertyValue for Vec<String> {
    fn into_value(self) -> FieldValue {
        FieldValue::StrList(self)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::StrList(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: PropertyValue> PropertyValue for Option<T> {
    fn into_value(self) -> FieldValue {
        match self {
            Some(v) => v.into_value(),
            None => FieldValue::Null,
        }
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macros::PropertyField;

    #[derive(Debug, Clone, PropertyField)]
    struct Probe {
        #[property(name = "pid")]
        pid: String,

        #[property(name = "birthtime", description = "Date of birth.")]
        birth_time: Option<NaiveDateTime>,

        #[property(name = "idx")]
        idx: Option<i32>,

        #[property(skip)]
        _scratch: Option<String>,
    }

    fn probe() -> Probe {
        Probe {
            pid: "PID1".to_string(),
            birth_time: None,
            idx: Some(3),
            _scratch: None,
        }
    }

    #[test]
    fn property_names_use_column_names() {
        assert_eq!(Probe::property_names(), &["pid", "birthtime", "idx"]);
        assert_eq!(Probe::entity(), "Probe");
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut p = probe();
        assert_eq!(p.property("pid"), Some(FieldValue::Str("PID1".to_string())));
        assert_eq!(p.property("birthtime"), Some(FieldValue::Null));

        let dob = NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        p.set_property("birthtime", FieldValue::DateTime(dob)).unwrap();
        assert_eq!(p.birth_time, Some(dob));

        p.set_property("idx", FieldValue::Null).unwrap();
        assert_eq!(p.idx, None);
    }

    #[test]
    fn unknown_property_is_an_error() {
        let mut p = probe();
        assert_eq!(p.property("nope"), None);
        assert_eq!(
            p.set_property("nope", FieldValue::Bool(true)),
            Err(PropertyError::Unknown {
                entity: "Probe",
                property: "nope".to_string(),
            })
        );
    }

    #[test]
    fn type_mismatch_is_an_error() {
        let mut p = probe();
        assert_eq!(
            p.set_property("pid", FieldValue::Int(1)),
            Err(PropertyError::TypeMismatch {
                entity: "Probe",
                property: "pid",
            })
        );
    }

    #[test]
    fn descriptions_are_exposed() {
        assert_eq!(Probe::property_description("birthtime"), Some("Date of birth."));
        assert_eq!(Probe::property_description("pid"), None);
    }
}

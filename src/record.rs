//! Record-model fields and the numeric-attribute unit contract.
//!
//! DESIGN
//! ======
//! Collected values arrive as attributes holding ordered field slots with
//! open-ended JSON values. Numeric kinds share one unit contract:
//! [`NumericAttribute::unit_field`] names the slot carrying the unit id and
//! everything else is derived from it, so no variant duplicates the
//! derivation and unitless kinds inherit the default.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};

use crate::schema::{DefinitionId, UnitId};
use crate::survey::{Survey, Unit};

/// One value slot of an attribute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// The stored value; open-ended JSON to cover every attribute kind.
    pub value: Option<serde_json::Value>,
}

/// One collected attribute instance: a definition reference plus its ordered
/// field slots. What each slot means depends on the attribute kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// The attribute definition this value belongs to.
    pub definition_id: DefinitionId,
    /// Ordered field slots.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Unit contract shared by numeric attribute kinds.
///
/// [`unit_field`](Self::unit_field) is the single extension point: a variant
/// names the field slot carrying the unit id, or inherits the default for
/// unitless kinds. [`unit_id`](Self::unit_id) and [`unit`](Self::unit) are
/// derived and are not meant to be reimplemented.
pub trait NumericAttribute {
    /// The field slot holding the unit id; `None` when the kind is unitless.
    fn unit_field(&self) -> Option<&Field> {
        None
    }

    /// The selected unit's id, read from the unit field's value.
    fn unit_id(&self) -> Option<UnitId> {
        self.unit_field()
            .and_then(|field| field.value.as_ref())
            .and_then(serde_json::Value::as_i64)
    }

    /// The selected unit, resolved in the owning survey.
    fn unit<'a>(&self, survey: &'a Survey) -> Option<&'a Unit> {
        self.unit_id().and_then(|id| survey.unit_by_id(id))
    }
}

/// A plain attribute carries no unit; numeric variants opt in by overriding
/// the unit slot.
impl NumericAttribute for Attribute {}

/// A single-value numeric attribute. Field slots: value, unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberAttribute {
    /// The underlying attribute instance.
    pub attribute: Attribute,
}

impl NumberAttribute {
    const VALUE_FIELD: usize = 0;
    const UNIT_FIELD: usize = 1;

    /// The field slot holding the numeric value.
    #[must_use]
    pub fn value_field(&self) -> Option<&Field> {
        self.attribute.fields.get(Self::VALUE_FIELD)
    }

    /// The collected number, if one is present.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.value_field()
            .and_then(|field| field.value.as_ref())
            .and_then(serde_json::Value::as_f64)
    }
}

impl NumericAttribute for NumberAttribute {
    fn unit_field(&self) -> Option<&Field> {
        self.attribute.fields.get(Self::UNIT_FIELD)
    }
}

/// A numeric range attribute. Field slots: from, to, unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeAttribute {
    /// The underlying attribute instance.
    pub attribute: Attribute,
}

impl RangeAttribute {
    const FROM_FIELD: usize = 0;
    const TO_FIELD: usize = 1;
    const UNIT_FIELD: usize = 2;

    /// The field slot holding the range start.
    #[must_use]
    pub fn from_field(&self) -> Option<&Field> {
        self.attribute.fields.get(Self::FROM_FIELD)
    }

    /// The field slot holding the range end.
    #[must_use]
    pub fn to_field(&self) -> Option<&Field> {
        self.attribute.fields.get(Self::TO_FIELD)
    }

    /// The collected range start, if present.
    #[must_use]
    pub fn from(&self) -> Option<f64> {
        self.from_field()
            .and_then(|field| field.value.as_ref())
            .and_then(serde_json::Value::as_f64)
    }

    /// The collected range end, if present.
    #[must_use]
    pub fn to(&self) -> Option<f64> {
        self.to_field()
            .and_then(|field| field.value.as_ref())
            .and_then(serde_json::Value::as_f64)
    }
}

impl NumericAttribute for RangeAttribute {
    fn unit_field(&self) -> Option<&Field> {
        self.attribute.fields.get(Self::UNIT_FIELD)
    }
}

//! Adapters for emitting masked values through `slog`.
//!
//! This module provides `slog::Value` implementations that serialize a masked
//! copy of a [`Value`](crate::Value) as structured JSON via `slog`'s
//! nested-value support. The unmasked value is never handed to the serializer.
//!
//! It does not configure `slog` or decide which keys are sensitive.

use serde_json::Value as JsonValue;
use slog::{Key as SlogKey, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    transform::{TargetKeys, mask_values},
    value::{Map, Value},
};

/// A masked value, ready to be logged.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedValue(JsonValue);

impl MaskedValue {
    /// Masks `value` under `targets` and stores the result as JSON.
    pub fn new(value: &Value, targets: &TargetKeys) -> Self {
        Self(mask_values(value, targets).to_json())
    }

    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

impl SlogValue for MaskedValue {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: SlogKey,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.0.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Extension trait for logging masked values with `slog`.
///
/// ## Example
/// ```ignore
/// use dictwalk::{TargetKeys, slog::SlogMaskedExt};
///
/// info!(logger, "application received"; "payload" => payload.slog_masked(&TargetKeys::pii()));
/// ```
pub trait SlogMaskedExt {
    /// Masks `self` under `targets` and returns a `slog::Value`.
    fn slog_masked(&self, targets: &TargetKeys) -> MaskedValue;

    /// Masks `self` under [`TargetKeys::pii`].
    fn slog_masked_pii(&self) -> MaskedValue {
        self.slog_masked(&TargetKeys::pii())
    }
}

impl SlogMaskedExt for Value {
    fn slog_masked(&self, targets: &TargetKeys) -> MaskedValue {
        MaskedValue::new(self, targets)
    }
}

impl SlogMaskedExt for Map {
    fn slog_masked(&self, targets: &TargetKeys) -> MaskedValue {
        MaskedValue::new(&Value::Map(self.clone()), targets)
    }
}

//! Sale record aggregation.
//!
//! A sale record is a string-keyed JSON mapping carrying at least an
//! `amount` field. The aggregator reduces an in-memory slice of records to
//! a single numeric total, widening from integer to floating point the
//! moment a floating-point amount enters the sum.

pub mod error;

pub use error::{SalesError, SalesResult};

use serde_json::Value;
use std::fmt;

/// One sale: a string-keyed mapping. Only the `amount` key is ever read.
pub type SaleRecord = serde_json::Map<String, Value>;

/// The one field every record must carry.
pub const AMOUNT_KEY: &str = "amount";

/// Running total of sale amounts.
///
/// Starts as `Integer(0)` and stays integer until a floating-point amount
/// is added; after that every further addition is floating point.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum SalesTotal {
    Integer(i64),
    Float(f64),
}

impl SalesTotal {
    /// Integer zero, the total of an empty collection.
    pub const ZERO: Self = Self::Integer(0);

    /// The total as a plain f64, lossy for very large integers.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(n) => n as f64,
            Self::Float(x) => x,
        }
    }

    fn add(self, amount: Amount) -> Self {
        match (self, amount) {
            (Self::Integer(a), Amount::Int(b)) => match a.checked_add(b) {
                Some(sum) => Self::Integer(sum),
                // i64 cannot hold the sum; widen instead of failing
                None => Self::Float(a as f64 + b as f64),
            },
            (Self::Integer(a), Amount::Float(b)) => Self::Float(a as f64 + b),
            (Self::Float(a), Amount::Int(b)) => Self::Float(a + b as f64),
            (Self::Float(a), Amount::Float(b)) => Self::Float(a + b),
        }
    }
}

impl fmt::Display for SalesTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<i64> for SalesTotal {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for SalesTotal {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// A single record's `amount`, already checked to be numeric.
#[derive(Clone, Copy)]
enum Amount {
    Int(i64),
    Float(f64),
}

/// Sum the `amount` field across `sales_data`.
///
/// The empty slice sums to exactly integer zero. Records are read in
/// order but the result is order-independent up to floating-point
/// rounding. The input is never mutated and no field other than `amount`
/// is inspected.
///
/// # Errors
///
/// Returns [`SalesError::MissingAmount`] when a record has no `amount`
/// key and [`SalesError::InvalidAmount`] when the value is not a JSON
/// number. Both carry the zero-based index of the offending record and
/// propagate to the caller unhandled.
pub fn calculate_sales_total(sales_data: &[SaleRecord]) -> SalesResult<SalesTotal> {
    let mut total = SalesTotal::ZERO;
    for (index, sale) in sales_data.iter().enumerate() {
        total = total.add(extract_amount(sale, index)?);
    }
    Ok(total)
}

fn extract_amount(sale: &SaleRecord, index: usize) -> SalesResult<Amount> {
    let value = sale
        .get(AMOUNT_KEY)
        .ok_or(SalesError::MissingAmount { index })?;

    let number = match value {
        Value::Number(n) => n,
        other => {
            return Err(SalesError::InvalidAmount {
                index,
                found: json_type_name(other),
            });
        }
    };

    if let Some(n) = number.as_i64() {
        Ok(Amount::Int(n))
    } else {
        // floats, plus u64 values beyond i64::MAX
        number
            .as_f64()
            .map(Amount::Float)
            .ok_or(SalesError::InvalidAmount {
                index,
                found: "number",
            })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

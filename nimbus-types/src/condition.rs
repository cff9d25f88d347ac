//! Query condition trees.
//!
//! A query against a schema is a list of [`Condition`] nodes, implicitly
//! joined with "and" at the top level. Composite nodes (`And`, `Or`) hold
//! their sub-conditions in order; leaf nodes name a field and one or more
//! candidate values. The platform compiles the tree into its own query plan;
//! this crate only carries it.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A comparison operator for range conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        };
        f.write_str(symbol)
    }
}

/// One node in a query condition tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// All sub-conditions must hold. Order is preserved.
    And(Vec<Condition>),
    /// At least one sub-condition must hold. Order is preserved.
    Or(Vec<Condition>),
    /// The field's value must equal one of the candidates.
    In { field: String, values: Vec<Value> },
    /// The field's value must equal the candidate.
    Equals { field: String, value: Value },
    /// The field's value must compare against the candidate.
    Compare {
        field: String,
        op: CompareOp,
        value: Value,
    },
    /// The geo field must lie within `radians` of the given point.
    Within {
        field: String,
        lat: f64,
        lon: f64,
        radians: f64,
    },
    /// The geo field must lie inside the box spanned by the lower-left and
    /// upper-right corners.
    WithinBox {
        field: String,
        lat_ll: f64,
        lon_ll: f64,
        lat_ur: f64,
        lon_ur: f64,
    },
}

impl Condition {
    /// Joins the given clauses with "and".
    pub fn and(clauses: Vec<Condition>) -> Self {
        Self::And(clauses)
    }

    /// Joins the given clauses with "or".
    pub fn or(clauses: Vec<Condition>) -> Self {
        Self::Or(clauses)
    }

    /// Matches records whose `field` equals one of `values`.
    pub fn is_in(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::In {
            field: field.into(),
            values,
        }
    }

    /// Matches records whose `field` equals `value`.
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Matches records whose `field` compares against `value` under `op`.
    pub fn compare(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self::Compare {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Matches records whose geo `field` lies within `radians` of the point.
    pub fn within(field: impl Into<String>, lat: f64, lon: f64, radians: f64) -> Self {
        Self::Within {
            field: field.into(),
            lat,
            lon,
            radians,
        }
    }

    /// Matches records whose geo `field` lies inside the bounding box.
    pub fn within_box(
        field: impl Into<String>,
        lat_ll: f64,
        lon_ll: f64,
        lat_ur: f64,
        lon_ur: f64,
    ) -> Self {
        Self::WithinBox {
            field: field.into(),
            lat_ll,
            lon_ll,
            lat_ur,
            lon_ur,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(clauses) => write_joined(f, clauses, " and "),
            Self::Or(clauses) => write_joined(f, clauses, " or "),
            Self::In { field, values } => {
                // An empty candidate list still renders explicitly.
                write!(f, "{field} in [")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Self::Equals { field, value } => write!(f, "{field} = {value}"),
            Self::Compare { field, op, value } => write!(f, "{field} {op} {value}"),
            Self::Within {
                field,
                lat,
                lon,
                radians,
            } => write!(f, "{field} within {lat}, {lon} within {radians} radians"),
            Self::WithinBox {
                field,
                lat_ll,
                lon_ll,
                lat_ur,
                lon_ur,
            } => write!(
                f,
                "{field} within box between {lat_ll}, {lon_ll} and {lat_ur}, {lon_ur}"
            ),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, clauses: &[Condition], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{clause}")?;
    }
    f.write_str(")")
}

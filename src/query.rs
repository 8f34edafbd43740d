//! Server-side filter predicates.
//!
//! A [`Query`] is sent as a single `q` parameter of the form
//! `<field><operator><value>`. Several queries are sent as repeated `q`
//! parameters and the Cloud Controller ANDs them together.

use std::fmt;

/// The field a query filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    OrganizationGuid,
    SpaceGuid,
    Timestamp,
    Actee,
    Actor,
    Type,
}

impl FilterField {
    /// The wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::OrganizationGuid => "organization_guid",
            Self::SpaceGuid => "space_guid",
            Self::Timestamp => "timestamp",
            Self::Actee => "actee",
            Self::Actor => "actor",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison applied between the field and the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `:`
    Equal,
    /// `>`
    Greater,
    /// `<`
    Less,
}

impl Operator {
    /// The wire form of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => ":",
            Self::Greater => ">",
            Self::Less => "<",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single filter predicate.
///
/// The value is not validated; percent-encoding happens when the request is
/// built.
///
/// # Example
///
/// ```
/// use ccv2::{FilterField, Query};
///
/// let q = Query::equal(FilterField::Name, "NASA");
/// assert_eq!(q.to_string(), "name:NASA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub field: FilterField,
    pub operator: Operator,
    pub value: String,
}

impl Query {
    /// Build a query from its parts.
    pub fn new(field: FilterField, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            field,
            operator,
            value: value.into(),
        }
    }

    /// `field:value`
    pub fn equal(field: FilterField, value: impl Into<String>) -> Self {
        Self::new(field, Operator::Equal, value)
    }

    /// `field>value`
    pub fn greater(field: FilterField, value: impl Into<String>) -> Self {
        Self::new(field, Operator::Greater, value)
    }

    /// `field<value`
    pub fn less(field: FilterField, value: impl Into<String>) -> Self {
        Self::new(field, Operator::Less, value)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.operator, self.value)
    }
}

//! Entry domain entity and related types.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::Account;
use crate::constants::{
    KIND_EXPENSE, KIND_INCOME, MAX_MONTH, MIN_MONTH, MSG_INVALID_DESCRIPTION, MSG_INVALID_MONTH,
    MSG_INVALID_VALUE, MSG_INVALID_YEAR, MSG_MISSING_KIND, MSG_MISSING_OWNER, STATUS_CANCELLED,
    STATUS_PENDING, STATUS_SETTLED, VALUE_INTEGER_DIGITS, VALUE_SCALE, YEAR_DIGITS,
};
use crate::error::{DomainError, DomainResult};

/// Direction of the money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => KIND_INCOME,
            EntryKind::Expense => KIND_EXPENSE,
        }
    }
}

impl FromStr for EntryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KIND_INCOME => Ok(EntryKind::Income),
            KIND_EXPENSE => Ok(EntryKind::Expense),
            other => Err(DomainError::business_rule(format!("unknown entry kind: {}", other))),
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entry lifecycle status.
///
/// Any status may replace any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryStatus {
    #[default]
    Pending,
    Settled,
    Cancelled,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => STATUS_PENDING,
            EntryStatus::Settled => STATUS_SETTLED,
            EntryStatus::Cancelled => STATUS_CANCELLED,
        }
    }
}

impl FromStr for EntryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(EntryStatus::Pending),
            STATUS_SETTLED => Ok(EntryStatus::Settled),
            STATUS_CANCELLED => Ok(EntryStatus::Cancelled),
            other => Err(DomainError::business_rule(format!("unknown entry status: {}", other))),
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dated financial record owned by exactly one account.
///
/// Every field is optional so that incomplete input can reach
/// [`Entry::validate`] and be rejected with the matching rule message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub id: Option<Uuid>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub owner: Option<Account>,
    pub value: Option<Decimal>,
    pub kind: Option<EntryKind>,
    pub status: Option<EntryStatus>,
    pub registered_on: Option<NaiveDate>,
}

/// Positive, at most cents, and within the stored precision. Trailing zeros
/// do not count towards the scale.
fn is_storable_amount(value: Decimal) -> bool {
    let limit = Decimal::from(10_i64.pow(VALUE_INTEGER_DIGITS));

    value > Decimal::ZERO && value.normalize().scale() <= VALUE_SCALE && value < limit
}

impl Entry {
    /// Check field rules in precedence order, stopping at the first failure.
    pub fn validate(&self) -> DomainResult<()> {
        if !self
            .description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
        {
            return Err(DomainError::business_rule(MSG_INVALID_DESCRIPTION));
        }

        if !self
            .month
            .is_some_and(|m| (MIN_MONTH..=MAX_MONTH).contains(&m))
        {
            return Err(DomainError::business_rule(MSG_INVALID_MONTH));
        }

        if !self
            .year
            .is_some_and(|y| y.unsigned_abs().to_string().len() == YEAR_DIGITS)
        {
            return Err(DomainError::business_rule(MSG_INVALID_YEAR));
        }

        if self.owner_id().is_none() {
            return Err(DomainError::business_rule(MSG_MISSING_OWNER));
        }

        if !self.value.is_some_and(is_storable_amount) {
            return Err(DomainError::business_rule(MSG_INVALID_VALUE));
        }

        if self.kind.is_none() {
            return Err(DomainError::business_rule(MSG_MISSING_KIND));
        }

        Ok(())
    }

    /// Id of the owning account, if there is an owner and it was persisted
    pub fn owner_id(&self) -> Option<Uuid> {
        self.owner.as_ref().and_then(|owner| owner.id)
    }

    /// Status, falling back to the initial status when unset
    pub fn status_or_default(&self) -> EntryStatus {
        self.status.unwrap_or_default()
    }
}

/// Exact-match search criteria. Every `Some` field must match; fields
/// left as `None` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryFilter {
    pub id: Option<Uuid>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub owner_id: Option<Uuid>,
    pub value: Option<Decimal>,
    pub kind: Option<EntryKind>,
    pub status: Option<EntryStatus>,
    pub registered_on: Option<NaiveDate>,
}

impl EntryFilter {
    /// Check if no criterion is set (matches every entry)
    pub fn is_empty(&self) -> bool {
        *self == EntryFilter::default()
    }
}

/// Build search criteria from the set fields of a template entry
impl From<&Entry> for EntryFilter {
    fn from(template: &Entry) -> Self {
        Self {
            id: template.id,
            description: template.description.clone(),
            month: template.month,
            year: template.year,
            owner_id: template.owner_id(),
            value: template.value,
            kind: template.kind,
            status: template.status,
            registered_on: template.registered_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rule(entry: &Entry, message: &str) {
        let err = entry.validate().unwrap_err();
        assert_eq!(err, DomainError::BusinessRule(message.to_string()));
        assert_eq!(err.to_string(), message);
    }

    fn owner() -> Account {
        Account {
            id: Some(Uuid::new_v4()),
            ..Account::new("usuario", "usuario@email.com", "senha")
        }
    }

    #[test]
    fn rules_are_reported_in_precedence_order() {
        let mut entry = Entry::default();
        assert_rule(&entry, MSG_INVALID_DESCRIPTION);
        entry.description = Some(String::new());
        assert_rule(&entry, MSG_INVALID_DESCRIPTION);
        entry.description = Some("   ".to_string());
        assert_rule(&entry, MSG_INVALID_DESCRIPTION);

        entry.description = Some("Salario".to_string());
        assert_rule(&entry, MSG_INVALID_MONTH);
        entry.month = Some(0);
        assert_rule(&entry, MSG_INVALID_MONTH);
        entry.month = Some(13);
        assert_rule(&entry, MSG_INVALID_MONTH);

        entry.month = Some(1);
        assert_rule(&entry, MSG_INVALID_YEAR);
        entry.year = Some(123);
        assert_rule(&entry, MSG_INVALID_YEAR);
        entry.year = Some(20219);
        assert_rule(&entry, MSG_INVALID_YEAR);

        entry.year = Some(2024);
        assert_rule(&entry, MSG_MISSING_OWNER);
        entry.owner = Some(Account::new("usuario", "usuario@email.com", "senha"));
        assert_rule(&entry, MSG_MISSING_OWNER);

        entry.owner = Some(owner());
        assert_rule(&entry, MSG_INVALID_VALUE);
        entry.value = Some(Decimal::ZERO);
        assert_rule(&entry, MSG_INVALID_VALUE);
        entry.value = Some(Decimal::new(-1, 0));
        assert_rule(&entry, MSG_INVALID_VALUE);

        entry.value = Some(Decimal::ONE);
        assert_rule(&entry, MSG_MISSING_KIND);

        entry.kind = Some(EntryKind::Income);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn empty_description_fails_first_even_with_bad_month() {
        let entry = Entry {
            description: Some(String::new()),
            month: Some(13),
            ..Entry::default()
        };
        assert_rule(&entry, MSG_INVALID_DESCRIPTION);
    }

    #[test]
    fn month_thirteen_is_rejected() {
        let entry = Entry {
            description: Some("Salary".to_string()),
            month: Some(13),
            ..Entry::default()
        };
        assert_rule(&entry, MSG_INVALID_MONTH);
    }

    #[test]
    fn zero_value_is_rejected_after_owner() {
        let entry = Entry {
            description: Some("Salary".to_string()),
            month: Some(12),
            year: Some(2024),
            owner: Some(owner()),
            value: Some(Decimal::ZERO),
            kind: Some(EntryKind::Income),
            ..Entry::default()
        };
        assert_rule(&entry, MSG_INVALID_VALUE);
    }

    #[test]
    fn value_must_fit_in_cents() {
        let mut entry = Entry {
            description: Some("Salary".to_string()),
            month: Some(12),
            year: Some(2024),
            owner: Some(owner()),
            kind: Some(EntryKind::Income),
            ..Entry::default()
        };

        for rejected in ["0.001", "10.125", "100000000000000"] {
            entry.value = Some(rejected.parse().unwrap());
            assert_rule(&entry, MSG_INVALID_VALUE);
        }

        for accepted in ["0.01", "10.50", "1.500", "99999999999999.99"] {
            entry.value = Some(accepted.parse().unwrap());
            assert!(entry.validate().is_ok(), "{} should be accepted", accepted);
        }
    }

    #[test]
    fn year_is_measured_by_magnitude() {
        let mut entry = Entry {
            description: Some("Salary".to_string()),
            month: Some(12),
            owner: Some(owner()),
            value: Some(Decimal::ONE),
            kind: Some(EntryKind::Income),
            ..Entry::default()
        };

        entry.year = Some(-2024);
        assert!(entry.validate().is_ok());

        entry.year = Some(0);
        assert_rule(&entry, MSG_INVALID_YEAR);
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(Entry::default().status_or_default(), EntryStatus::Pending);
        assert_eq!(EntryStatus::default(), EntryStatus::Pending);
    }

    #[test]
    fn enum_wire_names_round_trip() {
        assert_eq!("INCOME".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!(EntryKind::Expense.to_string(), "EXPENSE");
        assert_eq!("SETTLED".parse::<EntryStatus>().unwrap(), EntryStatus::Settled);
        assert!("EFETIVADO".parse::<EntryStatus>().is_err());
        assert_eq!(
            serde_json::to_string(&EntryStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
    }

    #[test]
    fn filter_takes_only_set_fields() {
        let account = owner();
        let template = Entry {
            year: Some(2024),
            owner: Some(account.clone()),
            ..Entry::default()
        };

        let filter = EntryFilter::from(&template);

        assert_eq!(filter.year, Some(2024));
        assert_eq!(filter.owner_id, account.id);
        assert!(filter.description.is_none());
        assert!(filter.status.is_none());
        assert!(!filter.is_empty());
        assert!(EntryFilter::from(&Entry::default()).is_empty());
    }
}

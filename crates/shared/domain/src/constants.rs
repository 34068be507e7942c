//! Domain-level constants.
//!
//! These constants define business rule messages and the wire names of
//! the entry enumerations.

// =============================================================================
// Entry kinds
// =============================================================================

/// Money coming in
pub const KIND_INCOME: &str = "INCOME";

/// Money going out
pub const KIND_EXPENSE: &str = "EXPENSE";

// =============================================================================
// Entry statuses
// =============================================================================

/// Status assigned to new entries
pub const STATUS_PENDING: &str = "PENDING";

pub const STATUS_SETTLED: &str = "SETTLED";

pub const STATUS_CANCELLED: &str = "CANCELLED";

// =============================================================================
// Entry validation
// =============================================================================

pub const MIN_MONTH: i32 = 1;

pub const MAX_MONTH: i32 = 12;

/// Number of digits a year must have
pub const YEAR_DIGITS: usize = 4;

/// Fractional digits an entry value may carry (the `entries.value` scale)
pub const VALUE_SCALE: u32 = 2;

/// Integer digits an entry value may carry (precision 16 minus the scale)
pub const VALUE_INTEGER_DIGITS: u32 = 14;

pub const MSG_INVALID_DESCRIPTION: &str = "Informe uma descrição válida";

pub const MSG_INVALID_MONTH: &str = "Informe um Mês Válido";

pub const MSG_INVALID_YEAR: &str = "Informe um Ano válido";

pub const MSG_MISSING_OWNER: &str = "Informe um usuário";

pub const MSG_INVALID_VALUE: &str = "Informe um valor válido";

pub const MSG_MISSING_KIND: &str = "Informe um tipo de lançamento";

// =============================================================================
// Accounts
// =============================================================================

pub const MSG_EMAIL_TAKEN: &str = "an account with this email is already registered";

pub const MSG_ACCOUNT_NOT_FOUND: &str = "no account found for the given email";

pub const MSG_INVALID_CREDENTIAL: &str = "invalid credential";

/// An entry stays with the account it was created for
pub const MSG_OWNER_IMMUTABLE: &str = "the owner of an entry cannot be changed";

/// Raised by the HTTP layer when an entry references an unknown owner
pub const MSG_OWNER_NOT_FOUND: &str = "no account found for the given id";

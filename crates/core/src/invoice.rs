//! Invoice form schema and mutation outcomes.
//!
//! Front half of the validated-mutation pipeline: parse raw form fields,
//! validate them, and coerce them into typed values ready for persistence.
//! The back half (the SQL statements themselves) lives in `acme-db`, and the
//! composition of the two in `acme-api::actions`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Paths & messages
// ---------------------------------------------------------------------------

/// Logical path of the invoices list view. Redirect target after a
/// successful create/update, and the page whose cache is invalidated after
/// every successful mutation.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Field message when no customer was selected.
pub const MSG_CUSTOMER_REQUIRED: &str = "Please select a customer";
/// Field message when the amount is missing, unparsable, or not `> 0`.
pub const MSG_AMOUNT_GT_ZERO: &str = "Please enter an amount greater than $0.";
/// Field message when the status is missing or outside the enumeration.
pub const MSG_STATUS_REQUIRED: &str = "Please select an invoice status";

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// The three invoice mutations, used to phrase summary messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    Create,
    Update,
    Delete,
}

impl MutationOp {
    pub fn verb(self) -> &'static str {
        match self {
            MutationOp::Create => "create",
            MutationOp::Update => "update",
            MutationOp::Delete => "delete",
        }
    }

    /// Summary message attached to a validation failure.
    pub fn missing_fields_message(self) -> String {
        format!("Missing Fields. Failed to {} invoice.", self.verb())
    }

    /// Generic user-facing message for a persistence failure. Never carries
    /// database internals; the cause is logged separately.
    pub fn database_error_message(self) -> String {
        format!("Database Error: Failed to {} invoice.", self.verb())
    }
}

// ---------------------------------------------------------------------------
// Status enumeration
// ---------------------------------------------------------------------------

/// Invoice payment status. Any value outside this enumeration is a
/// validation failure, not a database error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
        }
    }

    /// Parse a raw form value. Returns `None` for anything outside the
    /// two-value enumeration.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "paid" => Some(InvoiceStatus::Paid),
            "pending" => Some(InvoiceStatus::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Raw form input
// ---------------------------------------------------------------------------

/// Raw string fields harvested from a submitted form.
///
/// Absent keys deserialize to `None`, mirroring a form-data lookup that
/// found nothing. Discarded after validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation result types
// ---------------------------------------------------------------------------

/// Per-field validation messages, keyed with the caller-facing camelCase
/// names. Empty fields are omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(rename = "customerId", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none() && self.amount.is_none() && self.status.is_none()
    }
}

/// State returned to the caller to drive a form re-render on failure.
/// Success paths never produce one of these; they produce a
/// [`MutationOutcome::Redirect`] or [`MutationOutcome::Done`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionState {
    /// Validation failure: per-field messages plus the operation's summary.
    pub fn validation(op: MutationOp, errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            message: Some(op.missing_fields_message()),
        }
    }

    /// Persistence failure: the generic message only.
    pub fn database_error(op: MutationOp) -> Self {
        Self {
            errors: None,
            message: Some(op.database_error_message()),
        }
    }
}

/// Outcome of one mutation attempt.
///
/// Navigation is a value, not a control transfer: the HTTP layer decides how
/// to realize each variant (redirect, no-content, or an error body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Committed; send the user to the given path.
    Redirect(&'static str),
    /// Committed; stay on the current view (row-level actions).
    Done,
    /// Validation or persistence failure, with the state to re-render.
    Errors(ActionState),
}

// ---------------------------------------------------------------------------
// Validation & coercion
// ---------------------------------------------------------------------------

/// A form that passed validation, with fields coerced to their typed form.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInvoice {
    pub customer_id: String,
    /// Dollar amount as entered, strictly greater than zero.
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl ValidatedInvoice {
    /// Amount in minor currency units. Rounds half away from zero, so an
    /// input of `19.999` persists as `2000` cents. [`validate`] guarantees
    /// the result is representable, so the cast never saturates.
    pub fn amount_in_cents(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }
}

/// Validate raw form input against the invoice schema.
///
/// The persisted shape also has `id` and `date` fields, but neither is
/// validated here: the id arrives out-of-band from the route and the date is
/// server-computed on create and untouched on update.
///
/// All failing fields are reported together, one ordered message list per
/// field.
pub fn validate(form: &InvoiceForm) -> Result<ValidatedInvoice, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = match form.customer_id.as_deref() {
        Some(c) if !c.is_empty() => Some(c.to_string()),
        _ => {
            errors.customer_id = Some(vec![MSG_CUSTOMER_REQUIRED.to_string()]);
            None
        }
    };

    // A missing or unparsable amount coerces to 0 and fails the > 0 check,
    // so it reports the same message as an explicit non-positive amount.
    // The cent value must also be representable as an i64: infinities and
    // amounts at or beyond i64::MAX cents are rejected here instead of
    // saturating at the cast in `amount_in_cents`. NaN fails the > 0 check.
    let coerced = form
        .amount
        .as_deref()
        .and_then(|a| a.parse::<f64>().ok())
        .unwrap_or(0.0);
    let cents = (coerced * 100.0).round();
    let amount = if coerced > 0.0 && cents < i64::MAX as f64 {
        Some(coerced)
    } else {
        errors.amount = Some(vec![MSG_AMOUNT_GT_ZERO.to_string()]);
        None
    };

    let status = match form.status.as_deref().and_then(InvoiceStatus::parse) {
        Some(s) => Some(s),
        None => {
            errors.status = Some(vec![MSG_STATUS_REQUIRED.to_string()]);
            None
        }
    };

    match (customer_id, amount, status) {
        (Some(customer_id), Some(amount), Some(status)) => Ok(ValidatedInvoice {
            customer_id,
            amount,
            status,
        }),
        _ => Err(errors),
    }
}

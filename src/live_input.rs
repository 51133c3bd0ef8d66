// ⌨️ Live Input Formatting - reformat numeric fields as the user types
//
// One shared routine keyed by field identity: every keystroke on a numeric
// input runs its current text through here and the field is rewritten in the
// BR convention ("1234567" -> "1.234.567"). Unparseable text degenerates to
// an empty rendering, never an error.

use crate::br_number::{format_br_auto, parse_br_number};

// ============================================================================
// FIELD IDENTITIES & KIND POLICY
// ============================================================================

/// The one field that only ever holds a whole number of reais.
pub const MIN_VOLUME_INPUT: &str = "min-volume-input";

/// The investment-amount field (centavos allowed).
pub const TOTAL_INVESTMENT_INPUT: &str = "total-investimento-input";

/// Numeric-display policy for an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Zero decimal places permitted
    Integer,
    /// Up to two decimal places permitted
    Decimal,
}

impl FieldKind {
    /// Resolve a field identity to its kind. The mapping is fixed and total:
    /// the minimum-volume field is the only integer field, everything else
    /// (known or not) takes decimals.
    pub fn for_field(field_id: &str) -> FieldKind {
        if field_id == MIN_VOLUME_INPUT {
            FieldKind::Integer
        } else {
            FieldKind::Decimal
        }
    }

    pub fn max_decimals(&self) -> u32 {
        match self {
            FieldKind::Integer => 0,
            FieldKind::Decimal => 2,
        }
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of one formatting pass.
///
/// `NoUpdate` is a no-op directive, not an error: the caller leaves the
/// displayed text untouched. It fires in exactly two situations - the field
/// is gone from view, or the rendered text equals what is already displayed
/// (rewriting an identical value would re-trigger the handler and disturb
/// the cursor for nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    Update(String),
    NoUpdate,
}

impl FormatOutcome {
    pub fn is_update(&self) -> bool {
        matches!(self, FormatOutcome::Update(_))
    }

    /// The replacement text, if any.
    pub fn into_update(self) -> Option<String> {
        match self {
            FormatOutcome::Update(text) => Some(text),
            FormatOutcome::NoUpdate => None,
        }
    }
}

// ============================================================================
// FIELD REGISTRY (injected capability)
// ============================================================================

/// Who currently owns live input fields. The formatter asks before touching
/// a field so a handler firing for a field that has since left the view is a
/// clean no-op. Implemented by the dashboard over its visible widgets; tests
/// use stubs.
pub trait FieldRegistry {
    fn field_exists(&self, field_id: &str) -> bool;
}

// ============================================================================
// THE FORMATTER
// ============================================================================

/// Reformat the live text of one input field.
///
/// Synchronous and pure given its two inputs plus the existence check. The
/// caller writes `Update` text back into the field and does nothing on
/// `NoUpdate`.
///
/// Ex: ("min-volume-input", "1234567") -> Update("1.234.567")
pub fn format_input_live(
    fields: &dyn FieldRegistry,
    field_id: &str,
    raw_input: &str,
) -> FormatOutcome {
    if !fields.field_exists(field_id) {
        return FormatOutcome::NoUpdate;
    }

    let kind = FieldKind::for_field(field_id);
    let parsed = parse_br_number(raw_input);

    let mut formatted = match parsed {
        Some(value) => format_br_auto(value, kind.max_decimals()),
        None => String::new(),
    };

    // Preserve an in-progress decimal entry: "1000" + "," must come back as
    // "1.000," rather than dropping the comma the user just typed.
    if kind == FieldKind::Decimal && raw_input.ends_with(',') {
        if let Some(value) = parsed {
            if value.fract() == 0.0 {
                formatted.push(',');
            }
        }
    }

    if formatted == raw_input {
        FormatOutcome::NoUpdate
    } else {
        FormatOutcome::Update(formatted)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub registry: every field exists.
    struct AllFields;

    impl FieldRegistry for AllFields {
        fn field_exists(&self, _field_id: &str) -> bool {
            true
        }
    }

    /// Stub registry: no field exists.
    struct NoFields;

    impl FieldRegistry for NoFields {
        fn field_exists(&self, _field_id: &str) -> bool {
            false
        }
    }

    fn fmt(field_id: &str, raw: &str) -> FormatOutcome {
        format_input_live(&AllFields, field_id, raw)
    }

    #[test]
    fn test_integer_field_groups_thousands() {
        assert_eq!(
            fmt(MIN_VOLUME_INPUT, "1234567"),
            FormatOutcome::Update("1.234.567".to_string())
        );
    }

    #[test]
    fn test_decimal_field_keeps_fraction() {
        assert_eq!(
            fmt(TOTAL_INVESTMENT_INPUT, "1234567,5"),
            FormatOutcome::Update("1.234.567,5".to_string())
        );
    }

    #[test]
    fn test_empty_input_renders_zero() {
        assert_eq!(
            fmt(MIN_VOLUME_INPUT, ""),
            FormatOutcome::Update("0".to_string())
        );
        assert_eq!(
            fmt(TOTAL_INVESTMENT_INPUT, ""),
            FormatOutcome::Update("0".to_string())
        );
    }

    #[test]
    fn test_trailing_comma_is_preserved_on_decimal_field() {
        assert_eq!(
            fmt(TOTAL_INVESTMENT_INPUT, "1000,"),
            FormatOutcome::Update("1.000,".to_string())
        );
    }

    #[test]
    fn test_trailing_comma_is_dropped_on_integer_field() {
        assert_eq!(
            fmt(MIN_VOLUME_INPUT, "1000,"),
            FormatOutcome::Update("1.000".to_string())
        );
    }

    #[test]
    fn test_already_formatted_text_is_no_update() {
        assert_eq!(fmt(MIN_VOLUME_INPUT, "1.234.567"), FormatOutcome::NoUpdate);
        assert_eq!(fmt(TOTAL_INVESTMENT_INPUT, "1.000,5"), FormatOutcome::NoUpdate);
        assert_eq!(fmt(TOTAL_INVESTMENT_INPUT, "1.000,"), FormatOutcome::NoUpdate);
        assert_eq!(fmt(TOTAL_INVESTMENT_INPUT, "0"), FormatOutcome::NoUpdate);
    }

    #[test]
    fn test_formatting_is_a_fixed_point() {
        let inputs = ["1234567", "1234567,5", "1000,", "20.000.000", "0,25"];
        for raw in inputs {
            let once = match fmt(TOTAL_INVESTMENT_INPUT, raw) {
                FormatOutcome::Update(text) => text,
                FormatOutcome::NoUpdate => raw.to_string(),
            };
            // A second pass over already-rendered text must change nothing
            assert_eq!(
                fmt(TOTAL_INVESTMENT_INPUT, &once),
                FormatOutcome::NoUpdate,
                "'{raw}' did not reach a fixed point (got '{once}')"
            );
        }
    }

    #[test]
    fn test_garbage_renders_empty() {
        assert_eq!(
            fmt(TOTAL_INVESTMENT_INPUT, "abc"),
            FormatOutcome::Update(String::new())
        );
    }

    #[test]
    fn test_unknown_field_identity_takes_decimals() {
        assert_eq!(FieldKind::for_field("unknown-id"), FieldKind::Decimal);
        assert_eq!(
            fmt("unknown-id", "1000"),
            FormatOutcome::Update("1.000".to_string())
        );
        assert_eq!(
            fmt("unknown-id", "1000,5"),
            FormatOutcome::Update("1.000,5".to_string())
        );
    }

    #[test]
    fn test_missing_field_is_no_update() {
        assert_eq!(
            format_input_live(&NoFields, MIN_VOLUME_INPUT, "1234567"),
            FormatOutcome::NoUpdate
        );
        assert_eq!(
            format_input_live(&NoFields, TOTAL_INVESTMENT_INPUT, ""),
            FormatOutcome::NoUpdate
        );
    }

    #[test]
    fn test_lone_comma_renders_empty() {
        // "," cleans to "." which holds no digits at all
        assert_eq!(
            fmt(TOTAL_INVESTMENT_INPUT, ","),
            FormatOutcome::Update(String::new())
        );
    }

    #[test]
    fn test_decimal_rounding_to_two_places() {
        assert_eq!(
            fmt(TOTAL_INVESTMENT_INPUT, "10,567"),
            FormatOutcome::Update("10,57".to_string())
        );
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(FormatOutcome::Update("1".to_string()).is_update());
        assert!(!FormatOutcome::NoUpdate.is_update());
        assert_eq!(
            FormatOutcome::Update("1".to_string()).into_update(),
            Some("1".to_string())
        );
        assert_eq!(FormatOutcome::NoUpdate.into_update(), None);
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;

use crate::model::{BOUND_MAX, BOUND_MIN, Field, Range};

/// Field-scoped validation failures. All are recoverable user-input
/// states surfaced inline next to the offending field; none propagates
/// beyond the validation pass that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingValue,
    NotANumber,
    OutOfRange,
    OrderingViolation,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue => f.write_str("value is required"),
            Self::NotANumber => f.write_str("not a number"),
            Self::OutOfRange => f.write_str("value out of range"),
            Self::OrderingViolation => f.write_str("minimum exceeds maximum"),
        }
    }
}

impl std::error::Error for FieldError {}

impl FieldError {
    /// Full user-facing copy for a specific field.
    pub fn message(self, field: Field) -> String {
        match self {
            Self::MissingValue => format!("please enter a value for {}", field.label()),
            Self::NotANumber => format!(
                "{} must be a number between {BOUND_MIN} and {BOUND_MAX} inclusive",
                field.label()
            ),
            Self::OutOfRange => format!(
                "{} must be between {BOUND_MIN} and {BOUND_MAX} inclusive",
                field.label()
            ),
            Self::OrderingViolation => {
                if field.is_lower_bound() {
                    format!(
                        "{} cannot be greater than {}",
                        field.label(),
                        field.partner().label()
                    )
                } else {
                    format!(
                        "{} cannot be less than {}",
                        field.label(),
                        field.partner().label()
                    )
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FieldInput {
    raw: String,
    error: Option<FieldError>,
}

/// The four raw bound inputs plus their current validation state.
///
/// Rules run per field in a fixed order (required, numeric, range,
/// ordering) and the first failure wins. A numeric-but-decimal entry is
/// rewritten in place to its toward-zero truncation, so "7.9" validates
/// as 7 and "-7.9" as -7.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeForm {
    fields: [FieldInput; 4],
}

impl RangeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled form, used when seeding a session with a start tab.
    pub fn with_range(range: Range) -> Self {
        let mut form = Self::default();
        for field in Field::ALL {
            form.set_raw(field, range.value_of(field).to_string());
        }
        form
    }

    pub fn raw(&self, field: Field) -> &str {
        &self.fields[field.index()].raw
    }

    /// Replace a field's text. Clears that field's error until the next
    /// validation pass.
    pub fn set_raw(&mut self, field: Field, value: impl Into<String>) {
        let slot = &mut self.fields[field.index()];
        slot.raw = value.into();
        slot.error = None;
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.fields[field.index()].error
    }

    /// First failing field in declaration order, if any.
    pub fn first_error(&self) -> Option<(Field, FieldError)> {
        Field::ALL
            .into_iter()
            .find_map(|field| self.error(field).map(|error| (field, error)))
    }

    /// Run the full rule set, normalizing decimal entries in place.
    /// Returns the validated range when every field passes; otherwise
    /// each failing field holds exactly one error.
    pub fn validate(&mut self) -> Option<Range> {
        let mut values = [0_i64; 4];
        for field in Field::ALL {
            let slot = &mut self.fields[field.index()];
            slot.error = None;

            let trimmed = slot.raw.trim();
            if trimmed.is_empty() {
                slot.error = Some(FieldError::MissingValue);
                continue;
            }
            let Ok(parsed) = trimmed.parse::<f64>() else {
                slot.error = Some(FieldError::NotANumber);
                continue;
            };
            if !parsed.is_finite() {
                slot.error = Some(FieldError::NotANumber);
                continue;
            }

            let truncated = parsed.trunc() as i64;
            if parsed.fract() != 0.0 {
                slot.raw = truncated.to_string();
            }
            if !(BOUND_MIN..=BOUND_MAX).contains(&truncated) {
                slot.error = Some(FieldError::OutOfRange);
                continue;
            }
            values[field.index()] = truncated;
        }

        if self.fields.iter().any(|field| field.error.is_some()) {
            return None;
        }

        // ordering violations land on both bounds of the offending axis
        let mut ordered = true;
        if values[Field::MinCol.index()] > values[Field::MaxCol.index()] {
            self.fields[Field::MinCol.index()].error = Some(FieldError::OrderingViolation);
            self.fields[Field::MaxCol.index()].error = Some(FieldError::OrderingViolation);
            ordered = false;
        }
        if values[Field::MinRow.index()] > values[Field::MaxRow.index()] {
            self.fields[Field::MinRow.index()].error = Some(FieldError::OrderingViolation);
            self.fields[Field::MaxRow.index()].error = Some(FieldError::OrderingViolation);
            ordered = false;
        }
        if !ordered {
            return None;
        }

        Range::new(
            values[Field::MinCol.index()],
            values[Field::MaxCol.index()],
            values[Field::MinRow.index()],
            values[Field::MaxRow.index()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldError, RangeForm};
    use crate::model::{Field, Range};

    fn filled(min_col: &str, max_col: &str, min_row: &str, max_row: &str) -> RangeForm {
        let mut form = RangeForm::new();
        form.set_raw(Field::MinCol, min_col);
        form.set_raw(Field::MaxCol, max_col);
        form.set_raw(Field::MinRow, min_row);
        form.set_raw(Field::MaxRow, max_row);
        form
    }

    #[test]
    fn valid_inputs_produce_a_range_and_clear_errors() {
        let mut form = filled("3", "5", "4", "5");
        let range = form.validate().expect("valid form");
        assert_eq!(range, Range::new(3, 5, 4, 5).expect("valid range"));
        for field in Field::ALL {
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn empty_field_reports_missing_value() {
        let mut form = filled("", "5", "4", "5");
        assert_eq!(form.validate(), None);
        assert_eq!(form.error(Field::MinCol), Some(FieldError::MissingValue));
        assert_eq!(form.error(Field::MaxCol), None);
    }

    #[test]
    fn non_numeric_field_reports_not_a_number() {
        for junk in ["abc", "--4", "3;", "nan", "inf"] {
            let mut form = filled(junk, "5", "4", "5");
            assert_eq!(form.validate(), None, "input {junk:?}");
            assert_eq!(
                form.error(Field::MinCol),
                Some(FieldError::NotANumber),
                "input {junk:?}"
            );
        }
    }

    #[test]
    fn decimal_input_is_truncated_toward_zero_in_place() {
        let mut form = filled("7.9", "12", "1", "2");
        let range = form.validate().expect("valid after normalization");
        assert_eq!(form.raw(Field::MinCol), "7");
        assert_eq!(range.min_col, 7);

        let mut form = filled("-7.9", "12", "1", "2");
        let range = form.validate().expect("valid after normalization");
        assert_eq!(form.raw(Field::MinCol), "-7");
        assert_eq!(range.min_col, -7);
    }

    #[test]
    fn integer_valued_decimal_text_is_left_alone() {
        let mut form = filled("7.0", "12", "1", "2");
        assert!(form.validate().is_some());
        assert_eq!(form.raw(Field::MinCol), "7.0");
    }

    #[test]
    fn out_of_range_after_truncation_is_rejected() {
        let mut form = filled("50.9", "50", "1", "2");
        // 50.9 truncates to 50, inside the bounds
        assert!(form.validate().is_some());

        let mut form = filled("51", "51", "1", "2");
        assert_eq!(form.validate(), None);
        assert_eq!(form.error(Field::MinCol), Some(FieldError::OutOfRange));
        assert_eq!(form.error(Field::MaxCol), Some(FieldError::OutOfRange));

        let mut form = filled("-50.7", "0", "1", "2");
        assert!(form.validate().is_some());
        assert_eq!(form.raw(Field::MinCol), "-50");
    }

    #[test]
    fn column_ordering_violation_lands_on_both_column_fields() {
        let mut form = filled("10", "5", "1", "2");
        assert_eq!(form.validate(), None);
        assert_eq!(
            form.error(Field::MinCol),
            Some(FieldError::OrderingViolation)
        );
        assert_eq!(
            form.error(Field::MaxCol),
            Some(FieldError::OrderingViolation)
        );
        assert_eq!(form.error(Field::MinRow), None);
        assert_eq!(form.error(Field::MaxRow), None);
    }

    #[test]
    fn row_ordering_violation_lands_on_both_row_fields() {
        let mut form = filled("1", "2", "9", "-9");
        assert_eq!(form.validate(), None);
        assert_eq!(form.error(Field::MinCol), None);
        assert_eq!(
            form.error(Field::MinRow),
            Some(FieldError::OrderingViolation)
        );
        assert_eq!(
            form.error(Field::MaxRow),
            Some(FieldError::OrderingViolation)
        );
    }

    #[test]
    fn per_field_rules_apply_in_fixed_order() {
        // range violation outranks the cross-field check
        let mut form = filled("99", "5", "1", "2");
        assert_eq!(form.validate(), None);
        assert_eq!(form.error(Field::MinCol), Some(FieldError::OutOfRange));
        assert_eq!(form.error(Field::MaxCol), None);
    }

    #[test]
    fn editing_a_field_clears_its_stale_error() {
        let mut form = filled("", "5", "4", "5");
        assert_eq!(form.validate(), None);
        form.set_raw(Field::MinCol, "3");
        assert_eq!(form.error(Field::MinCol), None);
        assert!(form.validate().is_some());
    }

    #[test]
    fn first_error_walks_fields_in_declaration_order() {
        let mut form = filled("1", "2", "", "bogus");
        assert_eq!(form.validate(), None);
        assert_eq!(
            form.first_error(),
            Some((Field::MinRow, FieldError::MissingValue))
        );
    }

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(
            FieldError::MissingValue.message(Field::MinCol),
            "please enter a value for minimum column"
        );
        assert_eq!(
            FieldError::OrderingViolation.message(Field::MinCol),
            "minimum column cannot be greater than maximum column"
        );
        assert_eq!(
            FieldError::OrderingViolation.message(Field::MaxRow),
            "maximum row cannot be less than minimum row"
        );
        assert_eq!(
            FieldError::OutOfRange.message(Field::MaxRow),
            "maximum row must be between -50 and 50 inclusive"
        );
    }

    #[test]
    fn prefilled_form_round_trips_its_range() {
        let range = Range::new(-3, 4, -2, 5).expect("valid range");
        let mut form = RangeForm::with_range(range);
        assert_eq!(form.raw(Field::MinCol), "-3");
        assert_eq!(form.validate(), Some(range));
    }
}

//! Staff (payroll) entity model and DTOs.
//!
//! Only `bonus_percentage` is stored. Bonus amount and final salary are
//! derived through [`payroll_core::payroll`] whenever a row is presented.

use payroll_core::payroll::{derive_from_amount, derive_from_percentage, final_salary};
use payroll_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Upper bound on any salary or bonus amount accepted from clients.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Smallest non-zero basic salary. Keeps the derived bonus percentage finite.
pub const MIN_NONZERO_BASIC_SALARY: f64 = 0.01;

/// A staff row from the `staff` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Staff {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub department: Option<String>,
    pub basic_salary: f64,
    pub bonus_percentage: f64,
}

impl Staff {
    /// Bonus amount reconstructed from the stored percentage.
    pub fn bonus_amount(&self) -> f64 {
        derive_from_percentage(self.basic_salary, self.bonus_percentage)
    }
}

/// Staff representation returned by the API, with derived payroll figures.
#[derive(Debug, Clone, Serialize)]
pub struct StaffResponse {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub department: Option<String>,
    pub basic_salary: f64,
    pub bonus_percentage: f64,
    pub bonus_amount: f64,
    pub final_salary: f64,
}

impl StaffResponse {
    /// Present a row using an explicitly known bonus amount.
    ///
    /// Used right after a write, where the caller-supplied amount is echoed
    /// back instead of the value reconstructed from the stored percentage.
    pub fn with_bonus_amount(staff: &Staff, bonus_amount: f64) -> Self {
        Self {
            id: staff.id,
            name: staff.name.clone(),
            age: staff.age,
            department: staff.department.clone(),
            basic_salary: staff.basic_salary,
            bonus_percentage: staff.bonus_percentage,
            bonus_amount,
            final_salary: final_salary(staff.basic_salary, bonus_amount),
        }
    }
}

impl From<&Staff> for StaffResponse {
    fn from(staff: &Staff) -> Self {
        Self::with_bonus_amount(staff, staff.bonus_amount())
    }
}

/// DTO for creating a new staff record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaff {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub age: i32,
    #[validate(length(max = 100))]
    pub department: Option<String>,
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0),
        custom(function = "basic_salary_is_zero_or_at_least_a_cent")
    )]
    pub basic_salary: f64,
    /// Bonus amount used to derive the stored percentage. Defaults to 0.
    #[validate(range(min = 0.0, max = 1_000_000_000_000.0))]
    pub bonus_amount: Option<f64>,
}

fn basic_salary_is_zero_or_at_least_a_cent(value: f64) -> Result<(), ValidationError> {
    if value == 0.0 || value >= MIN_NONZERO_BASIC_SALARY {
        Ok(())
    } else {
        Err(ValidationError::new("min_nonzero")
            .with_message("must be 0 or at least 0.01".into()))
    }
}

/// Deserialize a field that distinguishes "absent" from an explicit `null`.
///
/// Paired with `#[serde(default)]`: absent stays `None`, `null` becomes
/// `Some(None)` and a value becomes `Some(Some(v))`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl CreateStaff {
    /// The supplied bonus amount, or 0 when omitted.
    pub fn effective_bonus_amount(&self) -> f64 {
        self.bonus_amount.unwrap_or(0.0)
    }

    /// Percentage to persist for this input.
    pub fn bonus_percentage(&self) -> f64 {
        derive_from_amount(self.basic_salary, self.effective_bonus_amount()).bonus_percentage
    }
}

/// DTO for updating an existing staff record. All fields are optional;
/// absent fields keep their stored values.
///
/// `department` is nullable, so an explicit `null` clears it while an absent
/// key leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStaff {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "present_or_null")]
    #[validate(length(max = 100))]
    pub department: Option<Option<String>>,
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0),
        custom(function = "basic_salary_is_zero_or_at_least_a_cent")
    )]
    pub basic_salary: Option<f64>,
    #[validate(range(min = 0.0, max = 1_000_000_000_000.0))]
    pub bonus_amount: Option<f64>,
}

/// Outcome of merging an [`UpdateStaff`] into a stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedStaff {
    /// The row to persist, with the bonus percentage recomputed.
    pub staff: Staff,
    /// The bonus amount the percentage was derived from.
    pub bonus_amount: f64,
}

impl UpdateStaff {
    /// Apply the present fields to `current`.
    ///
    /// When no bonus amount is supplied, the amount derived from `current`
    /// *before* the merge is kept, and the percentage is recomputed against
    /// the (possibly new) basic salary.
    pub fn merge_into(&self, current: &Staff) -> MergedStaff {
        let bonus_amount = self.bonus_amount.unwrap_or_else(|| current.bonus_amount());
        let basic_salary = self.basic_salary.unwrap_or(current.basic_salary);
        let derived = derive_from_amount(basic_salary, bonus_amount);

        let staff = Staff {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            age: self.age.unwrap_or(current.age),
            department: match &self.department {
                Some(department) => department.clone(),
                None => current.department.clone(),
            },
            basic_salary,
            bonus_percentage: derived.bonus_percentage,
        };

        MergedStaff {
            staff,
            bonus_amount,
        }
    }
}

//! Salary and bonus derivation.
//!
//! Only the bonus *percentage* is persisted on a staff row. The bonus amount
//! and the final salary are always derived from it on read, and the
//! percentage is re-derived from a bonus amount on every write.

/// Result of deriving payroll figures from a basic salary and a bonus amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusDerivation {
    /// `bonus_amount / basic_salary * 100`, or `0` when the basic salary is `0`.
    pub bonus_percentage: f64,
    /// `basic_salary + bonus_amount`.
    pub final_salary: f64,
}

/// Derive the bonus percentage and final salary from a bonus amount.
///
/// A zero basic salary collapses the percentage to `0` while the final
/// salary still includes the full bonus amount. Callers persisting the
/// percentage will therefore read back a bonus amount of `0` for such rows.
pub fn derive_from_amount(basic_salary: f64, bonus_amount: f64) -> BonusDerivation {
    let bonus_percentage = if basic_salary != 0.0 {
        bonus_amount / basic_salary * 100.0
    } else {
        0.0
    };

    BonusDerivation {
        bonus_percentage,
        final_salary: basic_salary + bonus_amount,
    }
}

/// Reconstruct the bonus amount from a stored percentage.
pub fn derive_from_percentage(basic_salary: f64, bonus_percentage: f64) -> f64 {
    basic_salary * bonus_percentage / 100.0
}

/// Final salary for a basic salary and a bonus amount.
pub fn final_salary(basic_salary: f64, bonus_amount: f64) -> f64 {
    basic_salary + bonus_amount
}

//! Employee ID Allocation
//!
//! Pure formatting over a sequence number. Uniqueness is NOT guaranteed
//! here; it comes from the atomic counter that hands out the sequence
//! (see `EmployeeRepository::next_employee_seq`) and the unique index on
//! `employeeId`.

const PREFIX: &str = "EMP";
const PAD_WIDTH: usize = 4;

/// Format the human-readable employee identifier for a 1-based sequence
/// number: `42` becomes `EMP0042`. Sequences past 9999 simply widen the
/// numeric part.
pub fn allocate(seq: u64) -> String {
    format!("{PREFIX}{seq:0width$}", width = PAD_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_four_digits() {
        assert_eq!(allocate(1), "EMP0001");
        assert_eq!(allocate(42), "EMP0042");
        assert_eq!(allocate(9999), "EMP9999");
    }

    #[test]
    fn widens_past_four_digits() {
        assert_eq!(allocate(10000), "EMP10000");
        assert_eq!(allocate(123456), "EMP123456");
    }
}

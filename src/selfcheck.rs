use crate::math::Vector3;

use tracing::{error, info};

#[derive(Copy, Clone, Debug)]
pub struct Check {
    pub label: &'static str,
    pub actual: Vector3,
    pub expected: Vector3,
}

impl Check {
    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }
}

/// Walks the worked vector example: constructors, copies, in place add and
/// chained sums, recording the value after every step.
pub fn vector_self_check() -> Vec<Check> {
    let mut checks = Vec::new();
    let mut record = |label, actual, expected: [f32; 3]| {
        checks.push(Check {
            label,
            actual,
            expected: Vector3::from(expected),
        })
    };

    let mut a = Vector3::default();
    record("a = default", a, [0.0, 0.0, 0.0]);
    let b = Vector3::new(1.0, 2.0, 3.0);
    record("b = (1, 2, 3)", b, [1.0, 2.0, 3.0]);
    let c = Vector3::from([4.0, 5.0, 6.0]);
    let mut d = c;
    record("d = c = (4, 5, 6)", d, [4.0, 5.0, 6.0]);
    a.assign(d);
    record("a = d", a, [4.0, 5.0, 6.0]);
    d += b;
    record("d += b", d, [5.0, 7.0, 9.0]);
    d = b + b;
    record("d = b + b", d, [2.0, 4.0, 6.0]);
    d.assign(c + b).add_assign(a);
    record("d = c + b + a", d, [9.0, 12.0, 15.0]);
    d = c + b + a;
    record("d = c + b + a (operators)", d, [9.0, 12.0, 15.0]);

    checks
}

/// Logs every check, returns true when all of them hold.
pub fn log_self_check(checks: &[Check]) -> bool {
    let mut all_passed = true;
    for check in checks {
        if check.passed() {
            info!("{:<28} -> {}", check.label, check.actual);
        } else {
            all_passed = false;
            error!(
                "{:<28} -> {}, expected {}",
                check.label, check.actual, check.expected
            );
        }
    }
    all_passed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        let checks = vector_self_check();
        assert_eq!(checks.len(), 8);
        for check in &checks {
            assert!(check.passed(), "{:?}", check);
        }
        assert!(log_self_check(&checks));
    }

    #[test]
    fn test_mismatch_is_reported() {
        let bad = Check {
            label: "broken",
            actual: Vector3::new(1.0, 2.0, 3.0),
            expected: Vector3::new(1.0, 2.0, 4.0),
        };
        assert!(!bad.passed());
        assert!(!log_self_check(&[bad]));
    }

    #[test]
    fn test_final_composite() {
        let checks = vector_self_check();
        let last = checks.last().unwrap();
        assert_eq!(last.actual, Vector3::new(9.0, 12.0, 15.0));
    }
}

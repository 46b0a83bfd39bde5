//! Daily presence statistics.

use serde::Serialize;
use utoipa::ToSchema;

/// Headcount and today's presence ratio.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardStats {
    #[schema(example = 4)]
    pub total_employees: u64,
    #[schema(example = 2)]
    pub total_present_today: u64,
    /// Present today as a percentage of all employees (0 with no employees)
    #[schema(example = 50.0)]
    pub percentage: f64,
}

impl DashboardStats {
    pub fn new(total_employees: u64, total_present_today: u64) -> Self {
        let percentage = if total_employees == 0 {
            0.0
        } else {
            total_present_today as f64 / total_employees as f64 * 100.0
        };

        Self {
            total_employees,
            total_present_today,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_employees_is_zero_percent() {
        let stats = DashboardStats::new(0, 0);
        assert_eq!(stats.percentage, 0.0);
    }

    #[test]
    fn test_half_present() {
        let stats = DashboardStats::new(4, 2);
        assert_eq!(stats.percentage, 50.0);
    }

    #[test]
    fn test_everyone_present() {
        assert_eq!(DashboardStats::new(3, 3).percentage, 100.0);
    }
}

//! Dashboard aggregator - Headcount and today's presence ratio.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::STATUS_PRESENT;
use crate::domain::{Clock, DashboardStats};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait DashboardService: Send + Sync {
    async fn today_summary(&self) -> AppResult<DashboardStats>;
}

/// Concrete implementation of DashboardService using Unit of Work.
pub struct DashboardAggregator<U: UnitOfWork> {
    uow: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<U: UnitOfWork> DashboardAggregator<U> {
    pub fn new(uow: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { uow, clock }
    }
}

#[async_trait]
impl<U: UnitOfWork> DashboardService for DashboardAggregator<U> {
    async fn today_summary(&self) -> AppResult<DashboardStats> {
        let today = self.clock.now().date_naive();
        let employees = self.uow.employees();
        let attendance = self.uow.attendance();

        let (total_employees, total_present_today) = tokio::try_join!(
            employees.count(),
            attendance.count_by_date_and_status(today, STATUS_PRESENT),
        )?;

        Ok(DashboardStats::new(total_employees, total_present_today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ManualClock;
    use crate::infra::{MockAttendanceRepository, MockEmployeeRepository};
    use crate::services::test_support::TestUnitOfWork;
    use chrono::{Local, NaiveDate, TimeZone};

    #[tokio::test]
    async fn test_counts_present_for_clock_day() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_count().returning(|| Ok(4));
        let mut attendance = MockAttendanceRepository::new();
        attendance
            .expect_count_by_date_and_status()
            .withf(|date, status| {
                *date == NaiveDate::from_ymd_opt(2026, 10, 5).unwrap() && status == "Present"
            })
            .returning(|_, _| Ok(2));

        let clock = Arc::new(ManualClock::new(
            Local.with_ymd_and_hms(2026, 10, 5, 12, 0, 0).unwrap(),
        ));
        let uow = TestUnitOfWork::default()
            .with_employees(employees)
            .with_attendance(attendance);
        let stats = DashboardAggregator::new(Arc::new(uow), clock)
            .today_summary()
            .await
            .unwrap();

        assert_eq!(stats, DashboardStats::new(4, 2));
        assert_eq!(stats.percentage, 50.0);
    }
}

//! Attendance service - Daily submission, late-arrival notices and recap.
//!
//! Per account and calendar day a record moves from unsubmitted to submitted
//! exactly once. The day and time of day come from the injected [`Clock`].

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use std::sync::Arc;

use crate::domain::{
    is_late_arrival, AttendanceRecord, Clock, NewAttendance, NewNotification, RecapScope,
    UserRole,
};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait AttendanceService: Send + Sync {
    /// Record today's attendance for the account.
    ///
    /// Fails with `AlreadySubmittedToday` if a record for today exists. A
    /// "Present" check-in after the cutoff also raises a late-arrival
    /// notification; failing to store it does not fail the submission.
    async fn submit(&self, account_id: i32, status: String, remark: String)
        -> AppResult<AttendanceRecord>;

    /// Records visible to the requester, newest first.
    async fn recap(&self, account_id: i32, role: UserRole) -> AppResult<Vec<AttendanceRecord>>;
}

/// Concrete implementation of AttendanceService using Unit of Work.
pub struct AttendanceManager<U: UnitOfWork> {
    uow: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<U: UnitOfWork> AttendanceManager<U> {
    pub fn new(uow: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { uow, clock }
    }

    async fn notify_late_arrival(&self, record: &AttendanceRecord) {
        let notice = NewNotification::late_arrival(
            record.account_id,
            record.time_of_day,
            record.created_at,
        );

        if let Err(e) = self.uow.notifications().create(notice).await {
            tracing::warn!(
                account_id = record.account_id,
                "Failed to store late-arrival notification: {}",
                e
            );
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AttendanceService for AttendanceManager<U> {
    async fn submit(
        &self,
        account_id: i32,
        status: String,
        remark: String,
    ) -> AppResult<AttendanceRecord> {
        let now = self.clock.now().trunc_subsecs(0);

        let employee = self
            .uow
            .employees()
            .find_by_account(account_id)
            .await?
            .ok_or_not_found("Employee profile")?;

        let record = self
            .uow
            .attendance()
            .create(NewAttendance {
                account_id,
                full_name: employee.full_name,
                date: now.date_naive(),
                time_of_day: now.time(),
                status,
                remark,
                created_at: now.with_timezone(&Utc),
            })
            .await?;

        tracing::info!(
            account_id,
            date = %record.date,
            status = %record.status,
            "Attendance submitted"
        );

        if is_late_arrival(&record.status, record.time_of_day) {
            self.notify_late_arrival(&record).await;
        }

        Ok(record)
    }

    async fn recap(&self, account_id: i32, role: UserRole) -> AppResult<Vec<AttendanceRecord>> {
        let today = self.clock.now().date_naive();
        let scope = RecapScope::for_requester(account_id, role, today);

        tracing::debug!(account_id, ?scope, "Attendance recap");
        self.uow.attendance().list(scope).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Employee, ManualClock, Notification};
    use crate::errors::AppError;
    use crate::infra::{
        MockAttendanceRepository, MockEmployeeRepository, MockNotificationRepository,
    };
    use crate::services::test_support::TestUnitOfWork;
    use chrono::{Local, NaiveDate, NaiveTime, TimeZone};

    fn clock_at(h: u32, m: u32, s: u32) -> Arc<dyn Clock> {
        Arc::new(ManualClock::new(
            Local.with_ymd_and_hms(2026, 10, 5, h, m, s).unwrap(),
        ))
    }

    fn employees() -> MockEmployeeRepository {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_account().returning(|account_id| {
            Ok(Some(Employee {
                id: 1,
                account_id,
                employee_number: "STF001".to_string(),
                full_name: "Jane Doe".to_string(),
                job_title: "Technician".to_string(),
                division: "IT".to_string(),
                created_at: Utc::now(),
            }))
        });
        repo
    }

    fn echo_attendance() -> MockAttendanceRepository {
        let mut repo = MockAttendanceRepository::new();
        repo.expect_create().returning(|new| {
            Ok(AttendanceRecord {
                id: 1,
                account_id: new.account_id,
                full_name: new.full_name,
                date: new.date,
                time_of_day: new.time_of_day,
                status: new.status,
                remark: new.remark,
                created_at: new.created_at,
            })
        });
        repo
    }

    #[tokio::test]
    async fn test_notification_failure_does_not_fail_submission() {
        let mut notifications = MockNotificationRepository::new();
        notifications
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("notifications table unavailable")));

        let uow = TestUnitOfWork::default()
            .with_employees(employees())
            .with_attendance(echo_attendance())
            .with_notifications(notifications);
        let service = AttendanceManager::new(Arc::new(uow), clock_at(8, 30, 0));

        let record = service
            .submit(2, "Present".to_string(), String::new())
            .await
            .unwrap();

        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.time_of_day, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[tokio::test]
    async fn test_late_notice_cites_recorded_time() {
        let mut notifications = MockNotificationRepository::new();
        notifications
            .expect_create()
            .times(1)
            .withf(|n| n.account_id == 2 && n.message.contains("08:00:01"))
            .returning(|n| {
                Ok(Notification {
                    id: 1,
                    account_id: n.account_id,
                    title: n.title,
                    message: n.message,
                    is_read: false,
                    created_at: n.created_at,
                })
            });

        let uow = TestUnitOfWork::default()
            .with_employees(employees())
            .with_attendance(echo_attendance())
            .with_notifications(notifications);
        let service = AttendanceManager::new(Arc::new(uow), clock_at(8, 0, 1));

        service
            .submit(2, "Present".to_string(), String::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_on_time_submission_sends_no_notice() {
        let mut notifications = MockNotificationRepository::new();
        notifications.expect_create().never();

        let uow = TestUnitOfWork::default()
            .with_employees(employees())
            .with_attendance(echo_attendance())
            .with_notifications(notifications);
        let service = AttendanceManager::new(Arc::new(uow), clock_at(7, 59, 59));

        service
            .submit(2, "Present".to_string(), String::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_submission_sends_no_notice() {
        let mut attendance = MockAttendanceRepository::new();
        attendance
            .expect_create()
            .returning(|_| Err(AppError::AlreadySubmittedToday));
        let mut notifications = MockNotificationRepository::new();
        notifications.expect_create().never();

        let uow = TestUnitOfWork::default()
            .with_employees(employees())
            .with_attendance(attendance)
            .with_notifications(notifications);
        let service = AttendanceManager::new(Arc::new(uow), clock_at(9, 0, 0));

        let result = service.submit(2, "Present".to_string(), String::new()).await;
        assert!(matches!(result, Err(AppError::AlreadySubmittedToday)));
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_find_by_account().returning(|_| Ok(None));
        let mut attendance = MockAttendanceRepository::new();
        attendance.expect_create().never();

        let uow = TestUnitOfWork::default()
            .with_employees(employees)
            .with_attendance(attendance);
        let service = AttendanceManager::new(Arc::new(uow), clock_at(7, 0, 0));

        let result = service.submit(9, "Present".to_string(), String::new()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_recap_scope_follows_role() {
        let mut attendance = MockAttendanceRepository::new();
        attendance
            .expect_list()
            .withf(|scope| {
                *scope
                    == RecapScope::AllAccounts {
                        start: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
                        end: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
                    }
            })
            .times(1)
            .returning(|_| Ok(vec![]));
        attendance
            .expect_list()
            .withf(|scope| *scope == RecapScope::Account(2))
            .times(1)
            .returning(|_| Ok(vec![]));

        let uow = TestUnitOfWork::default().with_attendance(attendance);
        let service = AttendanceManager::new(Arc::new(uow), clock_at(10, 0, 0));

        service.recap(1, UserRole::Admin).await.unwrap();
        service.recap(2, UserRole::User).await.unwrap();
    }
}

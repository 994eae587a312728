//! Employee directory, leave and attendance integration tests
//!
//! Run: cargo test -p hrms-server --test hr_records

use chrono::{Duration, NaiveDate, Utc};
use hrms_server::AppError;
use hrms_server::db::init_schema;
use hrms_server::db::models::{
    AttendanceCreate, AttendanceStatus, EmployeeCreate, EmployeeStatus, EmployeeUpdate,
    LeaveCreate, LeaveStatus, LeaveType, LeaveUpdate,
};
use hrms_server::db::repository::{
    AttendanceRepository, EmployeeRepository, LeaveRepository, RepoError,
};
use hrms_server::lifecycle::LifecycleManager;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

async fn test_db() -> Surreal<Db> {
    let db: Surreal<Db> = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    init_schema(&db).await.unwrap();
    db
}

fn onboarding_payload(name: &str, email: &str) -> EmployeeCreate {
    EmployeeCreate {
        name: name.to_string(),
        email: email.to_string(),
        employee_id: None,
        phone: "555".to_string(),
        position: "Engineer".to_string(),
        department: Some("Platform".to_string()),
        resume: None,
        joining_date: None,
        status: None,
    }
}

fn leave_payload(employee: &str) -> LeaveCreate {
    let start = Utc::now();
    LeaveCreate {
        employee: employee.to_string(),
        leave_type: LeaveType::Annual,
        start_date: start,
        end_date: start + Duration::days(3),
        total_days: 3.0,
        reason: "Family trip".to_string(),
    }
}

// ── Employees ───────────────────────────────────────────────────────

#[tokio::test]
async fn onboarding_allocates_ids_and_respects_manual_ones() {
    let db = test_db().await;
    let manager = LifecycleManager::new(db);

    let first = manager
        .onboard(onboarding_payload("One", "one@x.com"))
        .await
        .unwrap();
    assert_eq!(first.employee_id, "EMP0001");
    assert_eq!(first.status, EmployeeStatus::Active);

    let mut manual = onboarding_payload("Two", "two@x.com");
    manual.employee_id = Some("CONTRACT-7".to_string());
    let second = manager.onboard(manual).await.unwrap();
    assert_eq!(second.employee_id, "CONTRACT-7");

    // The sequence is unaffected by manual ids once seeded
    let third = manager
        .onboard(onboarding_payload("Three", "three@x.com"))
        .await
        .unwrap();
    assert_eq!(third.employee_id, "EMP0002");
}

#[tokio::test]
async fn duplicate_identities_are_rejected() {
    let db = test_db().await;
    let manager = LifecycleManager::new(db);

    manager
        .onboard(onboarding_payload("One", "one@x.com"))
        .await
        .unwrap();

    let err = manager
        .onboard(onboarding_payload("Other One", "one@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let mut clash = onboarding_payload("Two", "two@x.com");
    clash.employee_id = Some("EMP0001".to_string());
    let err = manager.onboard(clash).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn employee_update_merges_supplied_fields() {
    let db = test_db().await;
    let employees = EmployeeRepository::new(db.clone());
    let manager = LifecycleManager::new(db);

    let employee = manager
        .onboard(onboarding_payload("One", "one@x.com"))
        .await
        .unwrap();
    let id = employee.id.unwrap().to_string();

    let updated = employees
        .update(
            &id,
            EmployeeUpdate {
                position: Some("Staff Engineer".to_string()),
                status: Some(EmployeeStatus::OnLeave),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.position, "Staff Engineer");
    assert_eq!(updated.status, EmployeeStatus::OnLeave);
    // untouched fields survive
    assert_eq!(updated.name, "One");
    assert_eq!(updated.email, "one@x.com");
    assert_eq!(updated.department.as_deref(), Some("Platform"));
}

#[tokio::test]
async fn employee_status_update_and_delete() {
    let db = test_db().await;
    let employees = EmployeeRepository::new(db.clone());
    let manager = LifecycleManager::new(db);

    let employee = manager
        .onboard(onboarding_payload("One", "one@x.com"))
        .await
        .unwrap();
    let id = employee.id.unwrap().to_string();

    let updated = employees
        .update_status(&id, EmployeeStatus::Terminated)
        .await
        .unwrap();
    assert_eq!(updated.status, EmployeeStatus::Terminated);

    assert!(employees.delete(&id).await.unwrap());
    assert!(employees.find_by_id(&id).await.unwrap().is_none());

    let err = employees.delete(&id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

// ── Leaves ──────────────────────────────────────────────────────────

#[tokio::test]
async fn leave_requires_an_active_employee() {
    let db = test_db().await;
    let leaves = LeaveRepository::new(db.clone());
    let manager = LifecycleManager::new(db);

    // Missing employee
    let err = leaves
        .create(leave_payload("employee:doesnotexist"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    // Inactive employee
    let mut inactive = onboarding_payload("One", "one@x.com");
    inactive.status = Some(EmployeeStatus::Inactive);
    let employee = manager.onboard(inactive).await.unwrap();
    let err = leaves
        .create(leave_payload(&employee.id.unwrap().to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn leave_lifecycle_pending_to_approved() {
    let db = test_db().await;
    let leaves = LeaveRepository::new(db.clone());
    let manager = LifecycleManager::new(db);

    let employee = manager
        .onboard(onboarding_payload("One", "one@x.com"))
        .await
        .unwrap();
    let employee_id = employee.id.unwrap().to_string();

    let leave = leaves.create(leave_payload(&employee_id)).await.unwrap();
    assert_eq!(leave.status, LeaveStatus::Pending);
    assert_eq!(leave.employee.to_string(), employee_id);

    let id = leave.id.unwrap().to_string();
    let approved = leaves
        .update(
            &id,
            LeaveUpdate {
                status: Some(LeaveStatus::Approved),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);
    assert_eq!(approved.reason, "Family trip");
}

#[tokio::test]
async fn leave_rejects_inverted_date_range() {
    let db = test_db().await;
    let leaves = LeaveRepository::new(db.clone());
    let manager = LifecycleManager::new(db);

    let employee = manager
        .onboard(onboarding_payload("One", "one@x.com"))
        .await
        .unwrap();

    let mut payload = leave_payload(&employee.id.unwrap().to_string());
    payload.end_date = payload.start_date - Duration::days(1);
    let err = leaves.create(payload).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

// ── Attendance ──────────────────────────────────────────────────────

#[tokio::test]
async fn one_attendance_record_per_employee_per_day() {
    let db = test_db().await;
    let attendance = AttendanceRepository::new(db.clone());
    let manager = LifecycleManager::new(db);

    let employee = manager
        .onboard(onboarding_payload("One", "one@x.com"))
        .await
        .unwrap();
    let employee_id = employee.id.unwrap().to_string();
    let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

    let payload = AttendanceCreate {
        employee: employee_id.clone(),
        date,
        status: AttendanceStatus::Present,
        check_in: None,
        check_out: None,
        work_hours: Some(8.0),
        notes: None,
    };

    let record = attendance.create(payload.clone()).await.unwrap();
    assert_eq!(record.status, AttendanceStatus::Present);
    assert_eq!(record.work_hours, 8.0);

    // Same employee, same day: rejected
    let err = attendance.create(payload.clone()).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    // Next day is fine
    let mut next_day = payload;
    next_day.date = date.succ_opt().unwrap();
    assert!(attendance.create(next_day).await.is_ok());
}

// ── On-disk storage ─────────────────────────────────────────────────

#[tokio::test]
async fn db_service_opens_on_disk_storage() {
    let tmp = tempfile::tempdir().unwrap();
    let service = hrms_server::DbService::new(&tmp.path().join("database"))
        .await
        .unwrap();

    let manager = LifecycleManager::new(service.db.clone());
    let employee = manager
        .onboard(onboarding_payload("One", "one@x.com"))
        .await
        .unwrap();
    assert_eq!(employee.employee_id, "EMP0001");

    let employees = EmployeeRepository::new(service.db.clone());
    assert_eq!(employees.count().await.unwrap(), 1);
}

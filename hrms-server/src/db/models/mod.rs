//! Database Models

// Serde helpers
pub mod serde_helpers;

// Hiring pipeline
pub mod candidate;

// Staff records
pub mod attendance;
pub mod employee;
pub mod leave;

// Re-exports
pub use candidate::{Candidate, CandidateCreate, CandidateId, CandidateStatus, CandidateUpdate};
pub use employee::{
    Employee, EmployeeCreate, EmployeeId, EmployeeStatus, EmployeeStatusUpdate, EmployeeUpdate,
};
pub use leave::{Leave, LeaveCreate, LeaveId, LeaveStatus, LeaveType, LeaveUpdate};
pub use attendance::{
    Attendance, AttendanceCreate, AttendanceId, AttendanceStatus, AttendanceUpdate, CheckEvent,
    GeoPoint,
};

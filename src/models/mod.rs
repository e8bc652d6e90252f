//! Data models module
//!
//! Typed records returned by the backend and the form payloads sent to it.
//! Field names and order match the backend exactly.

pub mod de;
pub mod emergency;
pub mod event;
pub mod leave;
pub mod principal;
pub mod response;
pub mod status;
pub mod student;

// Re-export commonly used models
pub use emergency::{EmergencyRequest, UpdateEmergencyForm};
pub use event::{EventRequest, EventEdit, EventUpdate, UpdateEventForm, DeleteEventForm};
pub use leave::{LeaveRequest, ViewRequestsForm, UpdateLeaveStatusForm};
pub use principal::{RegisterPrincipalForm, LoginForm, Credentials, PrincipalCredentials};
pub use response::ApiMessage;
pub use status::{LeaveStatus, RequestStatus, UnknownStatus};
pub use student::{Student, RegisterStudentForm, UpdateStudentForm};

//! Test data helpers
//!
//! Backend replies shaped like the real dashboard backend's records.

use serde_json::{json, Value};

pub fn students_fixture() -> Value {
    json!([
        {"name": "Asha Rao", "roll": "21CS45", "branch": "CSE", "year": 3, "registered_at": "2024-07-01 10:15:00"},
        {"name": "Ravi Kumar", "roll": "21ME02", "registered_at": "2024-07-02 09:00:00"}
    ])
}

pub fn students_after_delete_fixture() -> Value {
    json!([
        {"name": "Ravi Kumar", "roll": "21ME02", "registered_at": "2024-07-02 09:00:00"}
    ])
}

pub fn leave_requests_fixture() -> Value {
    json!([
        {
            "id": 7, "name": "Asha Rao", "roll": "21CS45", "reason": "Family function",
            "start_date": "2024-08-01", "return_date": "2024-08-03", "total_days": 3,
            "status": "Pending", "response": null
        },
        {
            "id": 8, "name": "Ravi Kumar", "roll": "21ME02", "reason": "Fever",
            "start_date": "2024-08-05", "return_date": "2024-08-06", "total_days": 2,
            "status": "Paused", "response": "Send a medical certificate"
        }
    ])
}

pub fn leave_requests_answered_fixture() -> Value {
    json!([
        {
            "id": 7, "name": "Asha Rao", "roll": "21CS45", "reason": "Family function",
            "start_date": "2024-08-01", "return_date": "2024-08-03", "total_days": 3,
            "status": "Approved", "response": "OK"
        },
        {
            "id": 8, "name": "Ravi Kumar", "roll": "21ME02", "reason": "Fever",
            "start_date": "2024-08-05", "return_date": "2024-08-06", "total_days": 2,
            "status": "Paused", "response": "Send a medical certificate"
        }
    ])
}

pub fn event_requests_fixture() -> Value {
    json!([
        {
            "id": 3, "title": "Sports Day", "date": "2024-12-05", "location": "Ground",
            "description": "Annual athletics meet", "status": "Pending", "response": null
        }
    ])
}

/// Ids as integer, numeric string and missing, plus one record whose
/// status cannot be decoded
pub fn event_requests_mixed_ids_fixture() -> Value {
    json!([
        {
            "id": 3, "title": "Sports Day", "date": "2024-12-05", "location": "Ground",
            "description": "Annual athletics meet", "status": "Pending", "response": null
        },
        {
            "id": "4", "title": "Quiz", "date": "2024-12-10", "location": "Hall",
            "description": "Inter-house quiz", "status": "Pending"
        },
        {"title": "No id"},
        {"id": 5, "title": "Broken", "status": {"code": 2}}
    ])
}

pub fn emergencies_fixture() -> Value {
    json!([
        {
            "id": 11, "name": "Ravi Kumar", "roll": "21ME02", "emergency_type": "Medical",
            "description": "High fever", "status": "Pending", "response": "Nurse informed"
        }
    ])
}

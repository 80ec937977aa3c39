// Pre-authored result tables shown in place of real query execution.

use crate::core::{ResultRows, SimulatedResultSet, Value};

const CREATED: &str = "2024-01-15T10:00:00Z";

fn user(id: i64, name: &str, email: &str, phone: &str, carrier: bool, shipper: bool) -> Vec<(&'static str, Value)> {
    vec![
        ("id", Value::Integer(id)),
        ("name", Value::text(name)),
        ("email", Value::text(email)),
        ("phone", Value::text(phone)),
        ("is_carrier", Value::Boolean(carrier)),
        ("is_shipper", Value::Boolean(shipper)),
        ("created_at", Value::timestamp(CREATED)),
        ("updated_at", Value::timestamp(CREATED)),
    ]
}

fn contact(id: i64, name: &str, email: &str, phone: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("id", Value::Integer(id)),
        ("name", Value::text(name)),
        ("email", Value::text(email)),
        ("phone", Value::text(phone)),
    ]
}

/// `SELECT * FROM users` on the users-table lesson.
pub fn all_users() -> SimulatedResultSet {
    ResultRows::from_records(vec![
        user(1, "Alice Johnson", "alice@example.com", "+1-555-0101", true, false),
        user(2, "Bob Smith", "bob@example.com", "+1-555-0102", false, true),
        user(3, "Charlie Brown", "charlie@example.com", "+1-555-0103", true, true),
    ])
    .into()
}

/// Users filtered on `is_carrier`.
pub fn carriers() -> SimulatedResultSet {
    ResultRows::from_records(vec![
        contact(1, "Alice Johnson", "alice@example.com", "+1-555-0101"),
        contact(3, "Charlie Brown", "charlie@example.com", "+1-555-0103"),
    ])
    .into()
}

/// Active trips leaving New York, joined with the carrier's name.
pub fn active_trips() -> SimulatedResultSet {
    ResultRows::from_records(vec![vec![
        ("id", Value::Integer(1)),
        ("carrier_name", Value::text("Alice Johnson")),
        ("origin_city", Value::text("New York")),
        ("destination_city", Value::text("Los Angeles")),
        ("trip_status", Value::text("planning")),
        ("departure_date", Value::date("2024-03-15")),
    ]])
    .into()
}

pub const fn success() -> SimulatedResultSet {
    SimulatedResultSet::Success
}

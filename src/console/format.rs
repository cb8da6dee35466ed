//! One-line renderings of rows for the console.

use crate::db::{AccountStatus, AwarenessContent, BankAccountView, Scheme, Student};

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

pub fn student_line(s: &Student) -> String {
    format!(
        "ID: {} Name: {} Email: {} Phone: {} State: {} College: {}",
        s.student_id,
        s.name,
        or_dash(s.email.as_deref()),
        or_dash(s.phone.as_deref()),
        s.state,
        or_dash(s.college.as_deref()),
    )
}

pub fn pending_line(s: &Student) -> String {
    format!("SID: {} Name: {} State: {}", s.student_id, s.name, s.state)
}

pub fn account_line(a: &BankAccountView) -> String {
    let updated = a
        .last_updated
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "AccID: {} AccNo: {} Bank: {} StudentID: {} StudentName: {} AadhaarLinked: {} DBT: {} Updated: {}",
        a.account_id,
        a.account_number,
        a.bank_name,
        a.student_id,
        a.name,
        a.aadhaar_linked,
        a.dbt_enabled,
        updated,
    )
}

pub fn status_line(s: &AccountStatus) -> String {
    format!(
        "AccID: {} AadhaarLinked: {} DBT: {} Updated: {}",
        s.account_id,
        s.aadhaar_linked,
        s.dbt_enabled,
        s.last_updated.format("%Y-%m-%d %H:%M:%S"),
    )
}

pub fn scheme_line(s: &Scheme) -> String {
    format!(
        "ID: {} Name: {} Department: {}",
        s.scheme_id,
        s.scheme_name,
        or_dash(s.department.as_deref()),
    )
}

pub fn awareness_line(c: &AwarenessContent) -> String {
    format!(
        "ID: {} Title: {} Content: {}",
        c.content_id,
        c.title,
        or_dash(c.content.as_deref()),
    )
}

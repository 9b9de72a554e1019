//! Test fixtures and module declarations for storage tests.

use chrono::{Duration, Utc};
use inquiry_desk_core::{Inquiry, InquiryPriority, InquiryStatus, InquiryType};

use crate::MemoryStore;

pub fn create_test_inquiry(
    id: &str,
    status: InquiryStatus,
    priority: InquiryPriority,
    minutes_ago: i64,
) -> Inquiry {
    let created_at = Utc::now() - Duration::minutes(minutes_ago);
    Inquiry {
        id: id.to_owned(),
        name: format!("Contact {id}"),
        email: format!("{id}@example.com"),
        phone: None,
        company: Some("Example Corp".to_owned()),
        inquiry_type: InquiryType::General,
        subject: format!("Subject for {id}"),
        message: format!("Message body for {id}"),
        status,
        priority,
        created_at,
        updated_at: created_at,
    }
}

/// 15 pending inquiries: 2 urgent, 5 high, 8 medium. Newest first within
/// each priority band (ids follow insertion order).
pub fn pending_priority_fixture() -> MemoryStore {
    let mut records = Vec::new();
    let mut minutes = 0;
    for (count, priority) in [
        (2, InquiryPriority::Urgent),
        (5, InquiryPriority::High),
        (8, InquiryPriority::Medium),
    ] {
        for n in 0..count {
            minutes += 1;
            records.push(create_test_inquiry(
                &format!("{}-{n}", priority.as_str()),
                InquiryStatus::Pending,
                priority,
                minutes,
            ));
        }
    }
    MemoryStore::seeded(records)
}

//! Reference rows loaded by `Seeder`.

use domain::{
    LogisticsItem, LogisticsRequest, PsychometricQuestion, PsychometricTest, QuestionType,
    RequestStatus,
};

fn item(sku: &str, name: &str, category: &str, quantity: i32, unit: &str, location: &str) -> LogisticsItem {
    LogisticsItem {
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit: unit.to_string(),
        location: location.to_string(),
    }
}

pub fn logistics_items() -> Vec<LogisticsItem> {
    vec![
        item("IT-LAP-014", "14\" laptop", "IT equipment", 25, "unit", "Head office store"),
        item("IT-MON-027", "27\" monitor", "IT equipment", 40, "unit", "Head office store"),
        item("IT-HDS-001", "USB headset", "IT equipment", 60, "unit", "Head office store"),
        item("OF-CHR-ERG", "Ergonomic chair", "Furniture", 15, "unit", "Warehouse B"),
        item("OF-STN-KIT", "Stationery starter kit", "Office supplies", 120, "kit", "Reception"),
        item("SF-BDG-RFID", "RFID access badge", "Security", 200, "unit", "Security desk"),
    ]
}

pub fn logistics_requests() -> Vec<LogisticsRequest> {
    vec![
        LogisticsRequest {
            reference: "LR-2024-0001".to_string(),
            item_sku: "IT-LAP-014".to_string(),
            requested_by: "branch.manager@example.com".to_string(),
            quantity: 2,
            status: RequestStatus::Approved,
            reason: Some("Two analysts starting next month".to_string()),
        },
        LogisticsRequest {
            reference: "LR-2024-0002".to_string(),
            item_sku: "OF-CHR-ERG".to_string(),
            requested_by: "team.lead@example.com".to_string(),
            quantity: 1,
            status: RequestStatus::Pending,
            reason: None,
        },
        LogisticsRequest {
            reference: "LR-2024-0003".to_string(),
            item_sku: "SF-BDG-RFID".to_string(),
            requested_by: "hr.admin@example.com".to_string(),
            quantity: 5,
            status: RequestStatus::Fulfilled,
            reason: Some("Badges for the March intake".to_string()),
        },
    ]
}

pub fn psychometric_tests() -> Vec<PsychometricTest> {
    vec![
        PsychometricTest {
            slug: "work-style".to_string(),
            title: "Work style profile".to_string(),
            description: "How you prefer to plan, collaborate and make decisions.".to_string(),
            category: "personality".to_string(),
            duration_minutes: 15,
        },
        PsychometricTest {
            slug: "numerical-reasoning".to_string(),
            title: "Numerical reasoning".to_string(),
            description: "Interpreting tables and charts under time pressure.".to_string(),
            category: "aptitude".to_string(),
            duration_minutes: 20,
        },
    ]
}

fn likert() -> Vec<String> {
    [
        "Strongly disagree",
        "Disagree",
        "Neutral",
        "Agree",
        "Strongly agree",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn question(
    test_slug: &str,
    position: i32,
    prompt: &str,
    question_type: QuestionType,
    options: Vec<String>,
) -> PsychometricQuestion {
    PsychometricQuestion {
        test_slug: test_slug.to_string(),
        position,
        prompt: prompt.to_string(),
        question_type,
        options,
    }
}

pub fn psychometric_questions() -> Vec<PsychometricQuestion> {
    vec![
        question(
            "work-style",
            1,
            "I plan my week before it starts.",
            QuestionType::Likert,
            likert(),
        ),
        question(
            "work-style",
            2,
            "I prefer working through problems with others.",
            QuestionType::Likert,
            likert(),
        ),
        question(
            "work-style",
            3,
            "Describe a decision you made with incomplete information.",
            QuestionType::FreeText,
            Vec::new(),
        ),
        question(
            "numerical-reasoning",
            1,
            "Revenue rose from 80k to 100k. What is the percentage increase?",
            QuestionType::SingleChoice,
            vec!["20%".into(), "25%".into(), "80%".into(), "125%".into()],
        ),
        question(
            "numerical-reasoning",
            2,
            "A team of 4 closes 36 tickets a day. How many does a team of 6 close?",
            QuestionType::SingleChoice,
            vec!["48".into(), "54".into(), "60".into(), "72".into()],
        ),
    ]
}

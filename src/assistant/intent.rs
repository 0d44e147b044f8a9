use crate::models::AiAction;

// Bilingual keyword groups, checked in fixed priority order.
const ANALYZE_KEYWORDS: &[&str] = &[
    "phân tích",
    "analyze",
    "thống kê",
    "statistic",
    "bao nhiêu",
    "how many",
    "tổng hợp",
    "summary",
    "report",
];

const SCHEDULE_KEYWORDS: &[&str] = &[
    "lịch trình",
    "schedule",
    "sắp xếp",
    "arrange",
    "thời gian",
    "time",
];

const CREATE_KEYWORDS: &[&str] = &[
    "tạo",
    "create",
    "thêm",
    "add",
    "mới",
    "new",
    "task",
    "công việc",
];

/// Classify a free-text prompt by case-insensitive keyword containment.
/// Analysis terms beat scheduling terms beat creation terms, so a prompt
/// matching several groups resolves to the first.
pub fn classify_intent(prompt: &str) -> AiAction {
    let lower = prompt.to_lowercase();

    if contains_any(&lower, ANALYZE_KEYWORDS) {
        return AiAction::AnalyzeTasks;
    }
    if contains_any(&lower, SCHEDULE_KEYWORDS) {
        return AiAction::SuggestSchedule;
    }
    if contains_any(&lower, CREATE_KEYWORDS) {
        return AiAction::CreateTask;
    }

    AiAction::Unknown
}

fn contains_any(prompt: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| prompt.contains(keyword))
}

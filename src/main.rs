use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;

use studyflow::assistant::{Assistant, BridgeConfig};
use studyflow::models::{AiSuggestion, Task};
use studyflow::settings::SettingsStore;
use studyflow::store::TaskStore;

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studyflow")
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let dir = data_dir();
    let settings = SettingsStore::new(dir.join("settings.json"))?;
    let store = TaskStore::open(dir.join("tasks.json"));

    let assistant_settings = settings.assistant();
    let assistant = Assistant::new(BridgeConfig {
        base_url: assistant_settings.bridge_url.clone(),
    });

    println!("studyflow — trợ lý học tập. Gõ câu hỏi, hoặc /help để xem lệnh.");

    let stdin = io::stdin();
    let mut last_suggestions: Vec<AiSuggestion> = Vec::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('/') {
            if !run_command(command, &store, &last_suggestions) {
                break;
            }
            continue;
        }

        let response = assistant
            .respond(line, &store.snapshot(), &assistant_settings.mood)
            .await;
        println!("{}", response.message);

        if let Some(suggestions) = response.suggestions {
            print_suggestions(&suggestions);
            last_suggestions = suggestions;
        }
    }

    Ok(())
}

fn print_suggestions(suggestions: &[AiSuggestion]) {
    for (index, suggestion) in suggestions.iter().enumerate() {
        let minutes = suggestion
            .estimated_minutes
            .map(|m| format!(" (~{m} phút)"))
            .unwrap_or_default();
        println!("  [{}] {}{}", index + 1, suggestion.title, minutes);
    }
    if !suggestions.is_empty() {
        println!("  /add <số> để thêm vào danh sách task");
    }
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("Chưa có task nào.");
        return;
    }
    for task in tasks {
        let marker = if task.completed { "x" } else { " " };
        let due = task
            .due_date
            .as_deref()
            .map(|d| format!(" (hạn: {d})"))
            .unwrap_or_default();
        let short_id = &task.id[..task.id.len().min(8)];
        println!("[{marker}] {short_id}  {}{due}", task.title);
    }
}

/// Handle a `/` command. Returns false when the shell should exit.
fn run_command(command: &str, store: &TaskStore, suggestions: &[AiSuggestion]) -> bool {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();

    match name {
        "quit" | "exit" => return false,
        "help" => {
            println!(
                "/tasks — xem danh sách task\n\
                 /add <số> — thêm gợi ý vào danh sách\n\
                 /done <id> — đánh dấu hoàn thành\n\
                 /delete <id> — xoá task\n\
                 /quit — thoát"
            );
        }
        "tasks" => print_tasks(&store.snapshot()),
        "add" => match argument.and_then(|raw| raw.parse::<usize>().ok()) {
            Some(number) if (1..=suggestions.len()).contains(&number) => {
                promote(store, &suggestions[number - 1]);
            }
            _ => println!("Dùng: /add <số gợi ý>"),
        },
        "done" => match argument.and_then(|prefix| resolve_id(store, prefix)) {
            Some(id) => store.toggle_complete(&id),
            None => println!("Không tìm thấy task."),
        },
        "delete" => match argument.and_then(|prefix| resolve_id(store, prefix)) {
            Some(id) => store.delete(&id),
            None => println!("Không tìm thấy task."),
        },
        _ => println!("Lệnh không hợp lệ. Gõ /help."),
    }

    true
}

fn resolve_id(store: &TaskStore, prefix: &str) -> Option<String> {
    store
        .snapshot()
        .iter()
        .find(|task| task.id.starts_with(prefix))
        .map(|task| task.id.clone())
}

fn promote(store: &TaskStore, suggestion: &AiSuggestion) {
    let priority = suggestion
        .priority
        .map(|p| p.to_task_priority())
        .unwrap_or_default();
    let task = store.add(
        suggestion.title.clone(),
        suggestion.suggested_slot.clone(),
        suggestion.description.clone(),
        priority,
        None,
    );
    println!("Đã thêm: {}", task.title);
}

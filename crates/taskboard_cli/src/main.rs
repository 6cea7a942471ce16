//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage (`taskboard`).
//! - Exercise the SQLite-backed workspace end to end (`demo`, `list`,
//!   `status`).

use log::info;
use std::error::Error;
use std::process::ExitCode;
use taskboard_core::db::open_db;
use taskboard_core::{
    init_logging_from_config, open_sqlite_workspace, sort_for_display, AuthError, CoreConfig,
    DashboardStats, NewProject, NewTask, SqliteWorkspace, TaskPatch, TaskPriority, TaskStatus,
    WorkspaceError,
};
use uuid::Uuid;

const USAGE: &str = "usage: taskboard [demo | list | status <task-id> <todo|in-progress|completed>]";
const DEMO_NAME: &str = "Demo User";
const DEMO_EMAIL: &str = "demo@taskboard.local";
const DEMO_PASSWORD: &str = "demo-password";
const DUE_SOON_DAYS: u64 = 7;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = match args.as_slice() {
        [] => {
            println!("taskboard_core ping={}", taskboard_core::ping());
            println!("taskboard_core version={}", taskboard_core::core_version());
            Ok(())
        }
        ["demo"] => with_workspace(run_demo),
        ["list"] => with_workspace(|workspace| {
            print_board(workspace);
            Ok(())
        }),
        ["status", task_id, status] => {
            with_workspace(|workspace| set_status(workspace, task_id, status))
        }
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn with_workspace(
    run: impl FnOnce(&mut SqliteWorkspace<'_>) -> Result<(), Box<dyn Error>>,
) -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    std::fs::create_dir_all(config.data_dir())?;
    let config = CoreConfig {
        data_dir: std::fs::canonicalize(config.data_dir())?,
        ..config
    };
    init_logging_from_config(&config)?;

    let conn = open_db(config.db_path())?;
    let mut workspace = open_sqlite_workspace(&conn)?;
    run(&mut workspace)
}

fn run_demo(workspace: &mut SqliteWorkspace<'_>) -> Result<(), Box<dyn Error>> {
    let user = match workspace.login(DEMO_EMAIL, DEMO_PASSWORD) {
        Ok(user) => user,
        Err(WorkspaceError::Auth(AuthError::InvalidCredentials)) => {
            workspace.register(DEMO_NAME, DEMO_EMAIL, DEMO_PASSWORD)?
        }
        Err(err) => return Err(err.into()),
    };
    println!("signed in as {} ({})", user.name, user.email);

    let store = workspace.store_mut();
    let existing = store.projects().first().cloned();
    let project = match existing {
        Some(project) => project,
        None => store.add_project(NewProject {
            name: "Demo project".to_string(),
            description: "Created by `taskboard demo`".to_string(),
            color: String::new(),
        })?,
    };
    let mut task = NewTask::new(project.id, format!("Demo task #{}", store.tasks().len() + 1));
    task.priority = TaskPriority::High;
    task.due_date = Some(today());
    store.add_task(task)?;
    info!(
        "event=demo_run module=cli status=ok project_id={} tasks={}",
        project.id,
        store.tasks().len()
    );

    print_board(workspace);
    Ok(())
}

fn set_status(
    workspace: &mut SqliteWorkspace<'_>,
    task_id: &str,
    status: &str,
) -> Result<(), Box<dyn Error>> {
    let task_id = Uuid::parse_str(task_id)?;
    let status: TaskStatus = status.parse()?;

    if workspace
        .store_mut()
        .update_task(task_id, &TaskPatch::status(status))?
    {
        println!("task {task_id} -> {}", status.as_str());
    } else {
        println!("no task with id {task_id}");
    }
    Ok(())
}

fn print_board(workspace: &SqliteWorkspace<'_>) {
    let store = workspace.store();
    let stats = DashboardStats::compute(store.projects(), store.tasks(), today(), DUE_SOON_DAYS);
    println!(
        "theme={} projects={} tasks={} todo={} in_progress={} completed={} overdue={} due_soon={} completion={}%",
        store.theme().as_str(),
        stats.project_count,
        stats.task_count,
        stats.todo,
        stats.in_progress,
        stats.completed,
        stats.overdue,
        stats.due_soon,
        stats.completion_percent
    );

    for progress in &stats.projects {
        println!(
            "{} {}/{} ({}%)",
            progress.name, progress.completed, progress.total, progress.percent
        );
        let mut tasks = store.tasks_for_project(progress.project_id);
        sort_for_display(&mut tasks);
        for task in tasks {
            let due = task
                .due_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {} [{}] [{}] due={} {}",
                task.id,
                task.status.as_str(),
                task.priority.as_str(),
                due,
                task.title
            );
        }
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

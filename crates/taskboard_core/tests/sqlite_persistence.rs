use chrono::NaiveDate;
use taskboard_core::db::open_db;
use taskboard_core::{
    open_sqlite_workspace, KeyValueStore, NewProject, NewTask, SqliteKeyValueStore, TaskPriority,
    TaskStatus, SNAPSHOT_KEY,
};

#[test]
fn sqlite_store_upserts_and_removes_values() {
    let conn = taskboard_core::db::open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    assert!(store.get_item("k").unwrap().is_none());
    store.set_item("k", "one").unwrap();
    store.set_item("k", "two").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    store.remove_item("k").unwrap();
    assert!(store.get_item("k").unwrap().is_none());
}

#[test]
fn workspace_state_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskboard.sqlite3");

    let expected = {
        let conn = open_db(&path).unwrap();
        let mut ws = open_sqlite_workspace(&conn).unwrap();
        ws.register("Ada", "ada@example.com", "secret1").unwrap();

        let store = ws.store_mut();
        let project = store.add_project(NewProject::new("Roadmap")).unwrap();
        let mut task = NewTask::new(project.id, "Plan Q3");
        task.priority = TaskPriority::High;
        task.status = TaskStatus::InProgress;
        task.due_date = NaiveDate::from_ymd_opt(2024, 7, 1);
        store.add_task(task).unwrap();
        store.toggle_theme().unwrap();
        store.snapshot().clone()
    };

    let conn = open_db(&path).unwrap();
    let mut ws = open_sqlite_workspace(&conn).unwrap();
    assert_eq!(ws.store().snapshot(), &expected);

    ws.logout().unwrap();
    let user = ws.login("ada@example.com", "secret1").unwrap();
    assert_eq!(Some(&user), expected.user.as_ref());
}

#[test]
fn snapshot_document_uses_camel_case_fields() {
    let conn = taskboard_core::db::open_db_in_memory().unwrap();
    let mut ws = open_sqlite_workspace(&conn).unwrap();
    let store = ws.store_mut();
    let project = store.add_project(NewProject::new("Shape")).unwrap();
    let mut task = NewTask::new(project.id, "Check JSON");
    task.status = TaskStatus::InProgress;
    task.due_date = NaiveDate::from_ymd_opt(2024, 2, 29);
    store.add_task(task).unwrap();

    let raw = SqliteKeyValueStore::new(&conn)
        .get_item(SNAPSHOT_KEY)
        .unwrap()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(json["user"].is_null());
    assert_eq!(json["theme"], "light");
    assert_eq!(json["projects"][0]["name"], "Shape");
    assert!(json["projects"][0]["createdAt"].is_string());
    let task = &json["tasks"][0];
    assert_eq!(task["projectId"], project.id.to_string());
    assert_eq!(task["status"], "in-progress");
    assert_eq!(task["priority"], "medium");
    assert_eq!(task["dueDate"], "2024-02-29");
}

use chrono::NaiveDate;
use taskboard_core::{
    AppStore, KvSnapshotRepository, MemoryKeyValueStore, NewProject, NewTask, ProjectPatch,
    SnapshotRepository, StoreError, TaskPatch, TaskPriority, TaskStatus, Theme, ValidationError,
    SNAPSHOT_KEY,
};
use uuid::Uuid;

fn memory_store(kv: &MemoryKeyValueStore) -> AppStore<KvSnapshotRepository<&MemoryKeyValueStore>> {
    AppStore::open(KvSnapshotRepository::new(kv)).unwrap()
}

#[test]
fn fresh_store_starts_empty_with_default_theme() {
    let kv = MemoryKeyValueStore::new();
    let store = memory_store(&kv);

    assert!(store.user().is_none());
    assert!(store.projects().is_empty());
    assert!(store.tasks().is_empty());
    assert_eq!(store.theme(), Theme::Light);
    assert!(kv.is_empty(), "opening must not write a snapshot");
}

#[test]
fn add_project_generates_id_and_timestamp() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);

    let first = store
        .add_project(NewProject {
            name: " Website ".to_string(),
            description: "Relaunch".to_string(),
            color: "#10B981".to_string(),
        })
        .unwrap();
    let second = store.add_project(NewProject::new("Mobile")).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "Website");
    assert_eq!(first.color, "#10b981");
    assert!(first.created_at <= second.created_at);
    assert_eq!(store.projects(), &[first, second]);
}

#[test]
fn delete_project_cascades_to_its_tasks_only() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);

    let doomed = store.add_project(NewProject::new("Doomed")).unwrap();
    let kept = store.add_project(NewProject::new("Kept")).unwrap();
    let doomed_task = store.add_task(NewTask::new(doomed.id, "goes away")).unwrap();
    let kept_task = store.add_task(NewTask::new(kept.id, "stays")).unwrap();

    assert!(store.delete_project(doomed.id).unwrap());

    assert!(store.project(doomed.id).is_none());
    assert!(store.task(doomed_task.id).is_none());
    assert_eq!(store.tasks(), &[kept_task]);
    assert_eq!(store.projects().len(), 1);
}

#[test]
fn update_task_status_changes_only_status() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);
    let project = store.add_project(NewProject::new("Ops")).unwrap();

    let mut input = NewTask::new(project.id, "Rotate keys");
    input.description = "quarterly".to_string();
    input.priority = TaskPriority::High;
    input.due_date = NaiveDate::from_ymd_opt(2024, 9, 30);
    let original = store.add_task(input).unwrap();

    let patch = TaskPatch::status(TaskStatus::Completed);
    assert!(store.update_task(original.id, &patch).unwrap());

    let updated = store.task(original.id).unwrap();
    assert_eq!(updated.status, TaskStatus::Completed);
    let mut expected = original.clone();
    expected.status = TaskStatus::Completed;
    assert_eq!(updated, &expected);
}

#[test]
fn status_and_priority_move_freely() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);
    let task = store.add_task(NewTask::new(Uuid::new_v4(), "Loose")).unwrap();

    for status in [
        TaskStatus::Completed,
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Todo,
    ] {
        store.update_task(task.id, &TaskPatch::status(status)).unwrap();
        assert_eq!(store.task(task.id).unwrap().status, status);
    }

    let patch = TaskPatch {
        priority: Some(TaskPriority::Low),
        ..TaskPatch::default()
    };
    store.update_task(task.id, &patch).unwrap();
    assert_eq!(store.task(task.id).unwrap().priority, TaskPriority::Low);
}

#[test]
fn update_project_merges_listed_fields() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);
    let project = store
        .add_project(NewProject {
            name: "Old".to_string(),
            description: "keep me".to_string(),
            color: "#000000".to_string(),
        })
        .unwrap();

    let patch = ProjectPatch {
        name: Some("New".to_string()),
        ..ProjectPatch::default()
    };
    assert!(store.update_project(project.id, &patch).unwrap());

    let updated = store.project(project.id).unwrap();
    assert_eq!(updated.name, "New");
    assert_eq!(updated.description, "keep me");
    assert_eq!(updated.color, "#000000");
    assert_eq!(updated.created_at, project.created_at);
}

#[test]
fn unknown_ids_are_silent_no_ops() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);
    let project = store.add_project(NewProject::new("Only")).unwrap();
    let task = store.add_task(NewTask::new(project.id, "Only task")).unwrap();
    let tasks_before = store.tasks().to_vec();
    let missing = Uuid::new_v4();

    assert!(!store.delete_task(missing).unwrap());
    assert!(!store.delete_project(missing).unwrap());
    assert!(!store
        .update_task(missing, &TaskPatch::status(TaskStatus::Completed))
        .unwrap());
    assert!(!store
        .update_project(missing, &ProjectPatch::default())
        .unwrap());

    assert_eq!(store.tasks(), tasks_before.as_slice());
    assert_eq!(store.task(task.id).unwrap().status, TaskStatus::Todo);
}

#[test]
fn invalid_patch_is_rejected_and_state_kept() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);
    let task = store.add_task(NewTask::new(Uuid::new_v4(), "Title")).unwrap();

    let patch = TaskPatch {
        title: Some("   ".to_string()),
        status: Some(TaskStatus::Completed),
        ..TaskPatch::default()
    };
    let err = store.update_task(task.id, &patch).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::EmptyField(_))
    ));
    assert_eq!(store.task(task.id).unwrap(), &task);
}

#[test]
fn delete_task_removes_single_task() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);
    let project = store.add_project(NewProject::new("P")).unwrap();
    let first = store.add_task(NewTask::new(project.id, "one")).unwrap();
    let second = store.add_task(NewTask::new(project.id, "two")).unwrap();

    assert!(store.delete_task(first.id).unwrap());
    assert_eq!(store.tasks(), &[second]);
    assert_eq!(store.projects().len(), 1);
}

#[test]
fn theme_toggle_and_set_persist() {
    let kv = MemoryKeyValueStore::new();
    {
        let mut store = memory_store(&kv);
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
        assert!(store.theme().is_dark());
        store.set_theme(Theme::Light).unwrap();
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
    }

    let reopened = memory_store(&kv);
    assert_eq!(reopened.theme(), Theme::Dark);
}

#[test]
fn every_mutation_rewrites_the_snapshot() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);
    let repo = KvSnapshotRepository::new(&kv);

    let project = store.add_project(NewProject::new("Tracked")).unwrap();
    assert_eq!(repo.load_snapshot().unwrap().as_ref(), Some(store.snapshot()));

    store.add_task(NewTask::new(project.id, "t")).unwrap();
    assert_eq!(repo.load_snapshot().unwrap().unwrap().tasks.len(), 1);

    store.delete_project(project.id).unwrap();
    let persisted = repo.load_snapshot().unwrap().unwrap();
    assert!(persisted.projects.is_empty());
    assert!(persisted.tasks.is_empty());
}

#[test]
fn snapshot_round_trip_reproduces_state() {
    let kv = MemoryKeyValueStore::new();
    let expected = {
        let mut store = memory_store(&kv);
        let project = store.add_project(NewProject::new("Persisted")).unwrap();
        let mut task = NewTask::new(project.id, "survives reload");
        task.due_date = NaiveDate::from_ymd_opt(2025, 1, 31);
        store.add_task(task).unwrap();
        store.toggle_theme().unwrap();
        store.snapshot().clone()
    };

    let reopened = memory_store(&kv);
    assert_eq!(reopened.snapshot(), &expected);
}

#[test]
fn no_op_delete_still_writes_a_snapshot() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);

    assert!(!store.delete_task(Uuid::new_v4()).unwrap());

    assert_eq!(kv.keys(), vec![SNAPSHOT_KEY.to_string()]);
    let persisted = KvSnapshotRepository::new(&kv)
        .load_snapshot()
        .unwrap()
        .unwrap();
    assert_eq!(&persisted, store.snapshot());
}

#[test]
fn no_op_update_rewrites_unchanged_snapshot() {
    let kv = MemoryKeyValueStore::new();
    let mut store = memory_store(&kv);
    let project = store.add_project(NewProject::new("Stable")).unwrap();
    let before = KvSnapshotRepository::new(&kv)
        .load_snapshot()
        .unwrap()
        .unwrap();

    let patch = ProjectPatch {
        name: Some("Ignored".to_string()),
        ..ProjectPatch::default()
    };
    assert!(!store.update_project(Uuid::new_v4(), &patch).unwrap());

    let after = KvSnapshotRepository::new(&kv)
        .load_snapshot()
        .unwrap()
        .unwrap();
    assert_eq!(after, before);
    assert_eq!(after.projects[0].id, project.id);
}

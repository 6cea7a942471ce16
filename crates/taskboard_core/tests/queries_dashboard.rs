use chrono::NaiveDate;
use taskboard_core::{
    filter_tasks, search_projects, sort_for_display, AppStore, DashboardStats,
    KvSnapshotRepository, MemoryKeyValueStore, NewProject, NewTask, TaskPatch, TaskQuery,
    TaskStatus,
};

#[test]
fn dashboard_tracks_store_mutations() {
    let kv = MemoryKeyValueStore::new();
    let mut store = AppStore::open(KvSnapshotRepository::new(&kv)).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();

    let project = store.add_project(NewProject::new("Release")).unwrap();
    let mut late = NewTask::new(project.id, "Changelog");
    late.due_date = NaiveDate::from_ymd_opt(2024, 4, 10);
    let late = store.add_task(late).unwrap();
    store.add_task(NewTask::new(project.id, "Tag build")).unwrap();

    let stats = DashboardStats::compute(store.projects(), store.tasks(), today, 7);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.completion_percent, 0);

    store
        .update_task(late.id, &TaskPatch::status(TaskStatus::Completed))
        .unwrap();
    let stats = DashboardStats::compute(store.projects(), store.tasks(), today, 7);
    assert_eq!(stats.overdue, 0);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.completion_percent, 50);
    assert_eq!(stats.projects[0].completed, 1);

    store.delete_project(project.id).unwrap();
    let stats = DashboardStats::compute(store.projects(), store.tasks(), today, 7);
    assert_eq!(stats.project_count, 0);
    assert_eq!(stats.task_count, 0);
}

#[test]
fn list_views_filter_search_and_order() {
    let kv = MemoryKeyValueStore::new();
    let mut store = AppStore::open(KvSnapshotRepository::new(&kv)).unwrap();
    let web = store
        .add_project(NewProject {
            name: "Website".to_string(),
            description: "Marketing pages".to_string(),
            color: String::new(),
        })
        .unwrap();
    let api = store.add_project(NewProject::new("API")).unwrap();

    let mut hero = NewTask::new(web.id, "Hero banner");
    hero.due_date = NaiveDate::from_ymd_opt(2024, 5, 3);
    store.add_task(hero).unwrap();
    let mut footer = NewTask::new(web.id, "Footer links");
    footer.due_date = NaiveDate::from_ymd_opt(2024, 5, 1);
    store.add_task(footer).unwrap();
    store.add_task(NewTask::new(api.id, "Rate limit banner")).unwrap();

    let query = TaskQuery {
        search: Some("banner".to_string()),
        ..TaskQuery::default()
    };
    assert_eq!(filter_tasks(store.tasks(), &query).len(), 2);

    let query = TaskQuery {
        project_id: Some(web.id),
        ..TaskQuery::default()
    };
    let mut web_tasks = filter_tasks(store.tasks(), &query);
    sort_for_display(&mut web_tasks);
    let titles: Vec<_> = web_tasks.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, vec!["Footer links", "Hero banner"]);

    let found = search_projects(store.projects(), "marketing");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, web.id);
    assert_eq!(search_projects(store.projects(), "  ").len(), 2);
}

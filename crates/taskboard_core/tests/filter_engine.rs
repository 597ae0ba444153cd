use chrono::{NaiveDate, Utc};
use taskboard_core::{
    filter_tasks, AssigneeFilter, DueDateRange, FilterOptions, Priority, PriorityFilter, Task,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task(id: &str, order: u32) -> Task {
    let now = Utc::now();
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        description: String::new(),
        priority: Priority::Medium,
        due_date: date(2024, 1, 15),
        creator_id: "1".to_string(),
        creator_name: "Kusuma".to_string(),
        assigned_user_id: None,
        assigned_user_name: None,
        column_id: "c1".to_string(),
        board_id: "b1".to_string(),
        order,
        created_at: now,
        updated_at: now,
    }
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id.clone()).collect()
}

fn sample() -> Vec<Task> {
    let mut homepage = task("homepage", 2);
    homepage.title = "Design Homepage Layout".to_string();
    homepage.priority = Priority::High;
    homepage.assigned_user_id = Some("2".to_string());
    homepage.due_date = date(2024, 1, 14);

    let mut auth = task("auth", 0);
    auth.title = "Implement login".to_string();
    auth.description = "Set up AUTHENTICATION flow".to_string();
    auth.assigned_user_id = Some("3".to_string());
    auth.due_date = date(2024, 1, 20);

    let mut schema = task("schema", 1);
    schema.title = "Database schema".to_string();
    schema.priority = Priority::High;
    schema.due_date = date(2024, 2, 1);

    vec![homepage, auth, schema]
}

#[test]
fn default_options_keep_everything_sorted_by_order() {
    let tasks = sample();
    let today = date(2024, 1, 15);

    let result = filter_tasks(&tasks, &FilterOptions::default(), today);

    assert_eq!(ids(&result), vec!["auth", "schema", "homepage"]);
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let tasks = sample();
    let today = date(2024, 1, 15);

    let options = FilterOptions {
        search: "authentication".to_string(),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_tasks(&tasks, &options, today)), vec!["auth"]);

    let options = FilterOptions {
        search: "DESIGN".to_string(),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_tasks(&tasks, &options, today)), vec!["homepage"]);
}

#[test]
fn criteria_are_anded() {
    let tasks = sample();
    let today = date(2024, 1, 15);

    let options = FilterOptions {
        priority: PriorityFilter::Only(Priority::High),
        ..FilterOptions::default()
    };
    assert_eq!(
        ids(&filter_tasks(&tasks, &options, today)),
        vec!["schema", "homepage"]
    );

    let options = FilterOptions {
        priority: PriorityFilter::Only(Priority::High),
        assigned_user: AssigneeFilter::User("2".to_string()),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_tasks(&tasks, &options, today)), vec!["homepage"]);

    let options = FilterOptions {
        priority: PriorityFilter::Only(Priority::High),
        due_date_range: DueDateRange::Overdue,
        search: "schema".to_string(),
        ..FilterOptions::default()
    };
    assert!(filter_tasks(&tasks, &options, today).is_empty());
}

#[test]
fn assignee_filter_excludes_unassigned_tasks_but_all_keeps_them() {
    let tasks = sample();
    let today = date(2024, 1, 15);

    let options = FilterOptions {
        assigned_user: AssigneeFilter::User("3".to_string()),
        ..FilterOptions::default()
    };
    assert_eq!(ids(&filter_tasks(&tasks, &options, today)), vec!["auth"]);

    let all = filter_tasks(&tasks, &FilterOptions::default(), today);
    assert!(all.iter().any(|task| task.assigned_user_id.is_none()));
}

#[test]
fn due_date_ranges_bucket_against_today() {
    let tasks = sample();
    let today = date(2024, 1, 15);
    let by_range = |range: DueDateRange| {
        let options = FilterOptions {
            due_date_range: range,
            ..FilterOptions::default()
        };
        ids(&filter_tasks(&tasks, &options, today))
    };

    assert_eq!(by_range(DueDateRange::Overdue), vec!["homepage"]);
    assert!(by_range(DueDateRange::Today).is_empty());
    assert_eq!(by_range(DueDateRange::ThisWeek), vec!["auth"]);
    assert_eq!(by_range(DueDateRange::ThisMonth), vec!["auth"]);
}

#[test]
fn filtering_is_idempotent() {
    let tasks = sample();
    let today = date(2024, 1, 15);
    let options = FilterOptions {
        search: "e".to_string(),
        priority: PriorityFilter::Only(Priority::High),
        ..FilterOptions::default()
    };

    let once = filter_tasks(&tasks, &options, today);
    let twice = filter_tasks(once.iter().copied(), &options, today);

    assert_eq!(once, twice);
    assert_eq!(tasks.len(), 3);
}

#[test]
fn filter_options_use_flat_wire_values() {
    let options = FilterOptions {
        search: "x".to_string(),
        priority: PriorityFilter::Only(Priority::High),
        assigned_user: AssigneeFilter::All,
        due_date_range: DueDateRange::ThisWeek,
    };

    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "search": "x",
            "priority": "high",
            "assignedUser": "all",
            "dueDateRange": "thisWeek"
        })
    );

    let parsed: FilterOptions = serde_json::from_value(serde_json::json!({
        "search": "",
        "priority": "all",
        "assignedUser": "2",
        "dueDateRange": "overdue"
    }))
    .unwrap();
    assert_eq!(parsed.priority, PriorityFilter::All);
    assert_eq!(parsed.assigned_user, AssigneeFilter::User("2".to_string()));
    assert_eq!(parsed.due_date_range, DueDateRange::Overdue);

    let invalid = serde_json::from_value::<FilterOptions>(serde_json::json!({
        "search": "",
        "priority": "urgent",
        "assignedUser": "all",
        "dueDateRange": "all"
    }));
    assert!(invalid.is_err());
}

//! One-time sample dataset.
//!
//! # Invariants
//! - Seeding runs only when the boards collection is empty or absent.
//! - All five keys are written on a seeding run; none otherwise.

use super::collection_repo::{CollectionKey, CollectionRepository, RepoResult};
use crate::model::board::Board;
use crate::model::column::Column;
use crate::model::task::{Priority, Task};
use crate::model::user::User;
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use log::info;

/// Seeds the sample dataset if no boards exist yet, using the current clock.
///
/// Returns `true` when data was written.
pub fn seed_sample_data<R: CollectionRepository>(repo: &R) -> RepoResult<bool> {
    seed_sample_data_at(repo, Utc::now(), Local::now().date_naive())
}

/// Seeds the sample dataset relative to explicit `now`/`today` values.
pub fn seed_sample_data_at<R: CollectionRepository>(
    repo: &R,
    now: DateTime<Utc>,
    today: NaiveDate,
) -> RepoResult<bool> {
    let existing: Vec<Board> = repo.load(CollectionKey::Boards)?;
    if !existing.is_empty() {
        return Ok(false);
    }

    let users = sample_users();
    let current_user = users[0].clone();
    repo.save(CollectionKey::Users, &users)?;
    repo.save_current_user(&current_user)?;

    let yesterday = now - Duration::days(1);
    let boards = vec![
        sample_board(
            "1",
            "Website Redesign Project",
            "Complete redesign of company website",
            &current_user,
            now,
        ),
        sample_board(
            "2",
            "Mobile App Development",
            "New mobile application for customers",
            &current_user,
            yesterday,
        ),
    ];

    let columns = [
        ("1", "To Do", "1", 0),
        ("2", "In Progress", "1", 1),
        ("3", "Review", "1", 2),
        ("4", "Done", "1", 3),
        ("5", "Backlog", "2", 0),
        ("6", "Development", "2", 1),
        ("7", "Testing", "2", 2),
        ("8", "Deployed", "2", 3),
    ]
    .into_iter()
    .map(|(id, title, board_id, order)| Column {
        id: id.to_string(),
        title: title.to_string(),
        board_id: board_id.to_string(),
        order,
        color: None,
        created_at: now,
    })
    .collect::<Vec<_>>();

    let tasks = vec![
        Task {
            id: "1".to_string(),
            title: "Design Homepage Layout".to_string(),
            description: "Create wireframes and mockups for the new homepage design".to_string(),
            priority: Priority::High,
            due_date: today + Duration::days(1),
            creator_id: current_user.id.clone(),
            creator_name: current_user.name.clone(),
            assigned_user_id: Some("2".to_string()),
            assigned_user_name: Some("Jahnavi".to_string()),
            column_id: "1".to_string(),
            board_id: "1".to_string(),
            order: 0,
            created_at: now,
            updated_at: now,
        },
        Task {
            id: "2".to_string(),
            title: "Implement User Authentication".to_string(),
            description: "Set up login and registration functionality".to_string(),
            priority: Priority::Medium,
            due_date: today + Duration::days(7),
            creator_id: current_user.id.clone(),
            creator_name: current_user.name.clone(),
            assigned_user_id: Some("3".to_string()),
            assigned_user_name: Some("Faiz".to_string()),
            column_id: "2".to_string(),
            board_id: "1".to_string(),
            order: 0,
            created_at: now,
            updated_at: now,
        },
        // Denormalized name intentionally differs from user 4.
        Task {
            id: "3".to_string(),
            title: "Database Schema Design".to_string(),
            description: "Design and implement the database structure".to_string(),
            priority: Priority::High,
            due_date: today,
            creator_id: current_user.id.clone(),
            creator_name: current_user.name.clone(),
            assigned_user_id: Some("4".to_string()),
            assigned_user_name: Some("Shiva".to_string()),
            column_id: "5".to_string(),
            board_id: "2".to_string(),
            order: 0,
            created_at: now,
            updated_at: now,
        },
    ];

    repo.save(CollectionKey::Boards, &boards)?;
    repo.save(CollectionKey::Columns, &columns)?;
    repo.save(CollectionKey::Tasks, &tasks)?;

    info!(
        "event=seed module=repo status=ok users={} boards={} columns={} tasks={}",
        users.len(),
        boards.len(),
        columns.len(),
        tasks.len()
    );
    Ok(true)
}

fn sample_users() -> Vec<User> {
    vec![
        User::new("1", "Kusuma", "kusuma@example.com"),
        User::new("2", "Jahnavi", "jahnavi@example.com"),
        User::new("3", "Faiz", "faiz@example.com"),
        User::new("4", "Sandhya", "sandhya@example.com"),
    ]
}

fn sample_board(
    id: &str,
    title: &str,
    description: &str,
    owner: &User,
    at: DateTime<Utc>,
) -> Board {
    Board {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        owner_id: owner.id.clone(),
        owner_name: owner.name.clone(),
        created_at: at,
        updated_at: at,
    }
}

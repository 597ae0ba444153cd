//! Entity store for users, boards, columns and tasks.
//!
//! # Responsibility
//! - Own the four in-memory collections; nothing else mutates them.
//! - Enforce cascade deletes and denormalized-field rules.
//! - Write every touched collection through the repository before returning.
//! - Expose read-only derived views (columns by board, filtered tasks by column).
//!
//! # Invariants
//! - New columns and tasks are appended at `order = sibling count`.
//! - Deletes never renumber remaining siblings; gaps are kept.
//! - `owner_name`, `creator_name` and `Task::board_id` are copied once and never
//!   re-derived; `assigned_user_name` is re-resolved only when an update carries
//!   `assigned_user_id`.
//! - Update/delete of an unknown id is a silent no-op that still persists the
//!   touched collections.
//! - On a failed write the in-memory state keeps the mutation; the error is
//!   returned so the caller can retry.

use crate::model::board::{Board, BoardPatch, CreateBoard, DEFAULT_COLUMN_TITLES};
use crate::model::column::{Column, ColumnPatch, CreateColumn};
use crate::model::filter::FilterOptions;
use crate::model::task::{CreateTask, Task, TaskPatch};
use crate::model::user::User;
use crate::repo::collection_repo::{CollectionKey, CollectionRepository, RepoError};
use crate::repo::seed::seed_sample_data;
use crate::service::filter::filter_tasks;
use crate::service::ordering::{self, append_order};
use chrono::{Local, NaiveDate, Utc};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from entity store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Board or task creation attempted without an active user.
    NoCurrentUser,
    /// Durable write failed after the in-memory state already changed.
    PersistenceWrite {
        key: CollectionKey,
        source: RepoError,
    },
    /// Hydration or seeding from the durable store failed.
    Load(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCurrentUser => write!(f, "no current user"),
            Self::PersistenceWrite { key, source } => {
                write!(f, "failed to persist `{key}`: {source}")
            }
            Self::Load(err) => write!(f, "failed to load collections: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoCurrentUser => None,
            Self::PersistenceWrite { source, .. } => Some(source),
            Self::Load(err) => Some(err),
        }
    }
}

/// In-memory task-board state backed by a collection repository.
///
/// Constructed once at startup, hydrated from the repository, and dropped to
/// tear down. Every method runs to completion synchronously.
pub struct BoardStore<R: CollectionRepository> {
    repo: R,
    users: Vec<User>,
    current_user: Option<User>,
    boards: Vec<Board>,
    columns: Vec<Column>,
    tasks: Vec<Task>,
    filters: FilterOptions,
}

impl<R: CollectionRepository> BoardStore<R> {
    /// Seeds the sample dataset when the store has no boards, then hydrates.
    pub fn open(repo: R) -> StoreResult<Self> {
        seed_sample_data(&repo).map_err(StoreError::Load)?;
        Self::load(repo)
    }

    /// Hydrates all collections from `repo` without seeding.
    pub fn load(repo: R) -> StoreResult<Self> {
        let users = repo.load(CollectionKey::Users).map_err(StoreError::Load)?;
        let current_user = repo.load_current_user().map_err(StoreError::Load)?;
        let boards: Vec<Board> = repo.load(CollectionKey::Boards).map_err(StoreError::Load)?;
        let columns: Vec<Column> = repo.load(CollectionKey::Columns).map_err(StoreError::Load)?;
        let tasks: Vec<Task> = repo.load(CollectionKey::Tasks).map_err(StoreError::Load)?;

        info!(
            "event=store_load module=store status=ok boards={} columns={} tasks={} has_current_user={}",
            boards.len(),
            columns.len(),
            tasks.len(),
            current_user.is_some()
        );

        Ok(Self {
            repo,
            users,
            current_user,
            boards,
            columns,
            tasks,
            filters: FilterOptions::default(),
        })
    }

    /// Creates a board owned by the current user plus its default columns.
    pub fn create_board(&mut self, input: CreateBoard) -> StoreResult<Board> {
        let owner = self.current_user.as_ref().ok_or(StoreError::NoCurrentUser)?;
        let now = Utc::now();
        let board = Board::new(input.title, input.description, owner, now);

        self.boards.push(board.clone());
        self.persist(&[CollectionKey::Boards])?;

        for (order, title) in DEFAULT_COLUMN_TITLES.iter().enumerate() {
            self.columns
                .push(Column::new(*title, board.id.clone(), append_order(order), now));
        }
        self.persist(&[CollectionKey::Columns])?;

        info!(
            "event=board_create module=store status=ok board_id={} columns={}",
            board.id,
            DEFAULT_COLUMN_TITLES.len()
        );
        Ok(board)
    }

    /// Merges `patch` into the board and refreshes `updated_at`.
    pub fn update_board(&mut self, board_id: &str, patch: BoardPatch) -> StoreResult<()> {
        match self.boards.iter_mut().find(|board| board.id == board_id) {
            Some(board) => {
                board.apply(patch, Utc::now());
                info!("event=board_update module=store status=ok board_id={board_id}");
            }
            None => log_noop("board_update", board_id),
        }
        self.persist(&[CollectionKey::Boards])
    }

    /// Removes the board and every column and task carrying its id.
    pub fn delete_board(&mut self, board_id: &str) -> StoreResult<()> {
        let boards_before = self.boards.len();
        let columns_before = self.columns.len();
        let tasks_before = self.tasks.len();

        self.boards.retain(|board| board.id != board_id);
        self.columns.retain(|column| column.board_id != board_id);
        self.tasks.retain(|task| task.board_id != board_id);

        if self.boards.len() == boards_before {
            log_noop("board_delete", board_id);
        } else {
            info!(
                "event=board_delete module=store status=ok board_id={} columns_removed={} tasks_removed={}",
                board_id,
                columns_before - self.columns.len(),
                tasks_before - self.tasks.len()
            );
        }

        self.persist(&[
            CollectionKey::Boards,
            CollectionKey::Columns,
            CollectionKey::Tasks,
        ])
    }

    /// Appends a column to the end of its board.
    ///
    /// The board id is not checked against the boards collection.
    pub fn create_column(&mut self, input: CreateColumn) -> StoreResult<Column> {
        let order = append_order(
            self.columns
                .iter()
                .filter(|column| column.board_id == input.board_id)
                .count(),
        );
        let column = Column::new(input.title, input.board_id, order, Utc::now());

        self.columns.push(column.clone());
        self.persist(&[CollectionKey::Columns])?;

        info!(
            "event=column_create module=store status=ok column_id={} board_id={} order={}",
            column.id, column.board_id, column.order
        );
        Ok(column)
    }

    pub fn update_column(&mut self, column_id: &str, patch: ColumnPatch) -> StoreResult<()> {
        match self.columns.iter_mut().find(|column| column.id == column_id) {
            Some(column) => {
                column.apply(patch);
                info!("event=column_update module=store status=ok column_id={column_id}");
            }
            None => log_noop("column_update", column_id),
        }
        self.persist(&[CollectionKey::Columns])
    }

    /// Removes the column and every task in it. Sibling columns keep their order.
    pub fn delete_column(&mut self, column_id: &str) -> StoreResult<()> {
        let columns_before = self.columns.len();
        let tasks_before = self.tasks.len();

        self.columns.retain(|column| column.id != column_id);
        self.tasks.retain(|task| task.column_id != column_id);

        if self.columns.len() == columns_before {
            log_noop("column_delete", column_id);
        } else {
            info!(
                "event=column_delete module=store status=ok column_id={} tasks_removed={}",
                column_id,
                tasks_before - self.tasks.len()
            );
        }

        self.persist(&[CollectionKey::Columns, CollectionKey::Tasks])
    }

    /// Repositions a column within its board, keeping board positions dense.
    pub fn move_column(&mut self, column_id: &str, new_order: u32) -> StoreResult<()> {
        match ordering::move_column(&mut self.columns, column_id, new_order) {
            Some(applied) => info!(
                "event=column_move module=store status=ok column_id={column_id} order={applied}"
            ),
            None => log_noop("column_move", column_id),
        }
        self.persist(&[CollectionKey::Columns])
    }

    /// Appends a task created by the current user to the end of its column.
    ///
    /// `board_id` is copied from the target column, or left empty when the
    /// column is unknown.
    pub fn create_task(&mut self, input: CreateTask) -> StoreResult<Task> {
        let creator = self.current_user.as_ref().ok_or(StoreError::NoCurrentUser)?;
        let now = Utc::now();

        let order = append_order(
            self.tasks
                .iter()
                .filter(|task| task.column_id == input.column_id)
                .count(),
        );
        let assigned_user_name = input
            .assigned_user_id
            .as_deref()
            .and_then(|user_id| self.user_by_id(user_id))
            .map(|user| user.name.clone());
        let board_id = self
            .column_by_id(&input.column_id)
            .map(|column| column.board_id.clone())
            .unwrap_or_default();

        let task = Task {
            id: crate::model::generate_id(),
            title: input.title,
            description: input.description,
            priority: input.priority,
            due_date: input.due_date,
            creator_id: creator.id.clone(),
            creator_name: creator.name.clone(),
            assigned_user_id: input.assigned_user_id,
            assigned_user_name,
            column_id: input.column_id,
            board_id,
            order,
            created_at: now,
            updated_at: now,
        };

        self.tasks.push(task.clone());
        self.persist(&[CollectionKey::Tasks])?;

        info!(
            "event=task_create module=store status=ok task_id={} column_id={} order={}",
            task.id, task.column_id, task.order
        );
        Ok(task)
    }

    /// Merges `patch` into the task and refreshes `updated_at`.
    pub fn update_task(&mut self, task_id: &str, patch: TaskPatch) -> StoreResult<()> {
        let users = &self.users;
        match self.tasks.iter_mut().find(|task| task.id == task_id) {
            Some(task) => {
                task.apply_fields(&patch, Utc::now());
                if let Some(assigned_user_id) = patch.assigned_user_id {
                    task.reassign(assigned_user_id, users);
                }
                info!("event=task_update module=store status=ok task_id={task_id}");
            }
            None => log_noop("task_update", task_id),
        }
        self.persist(&[CollectionKey::Tasks])
    }

    pub fn delete_task(&mut self, task_id: &str) -> StoreResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != task_id);
        if self.tasks.len() == before {
            log_noop("task_delete", task_id);
        } else {
            info!("event=task_delete module=store status=ok task_id={task_id}");
        }
        self.persist(&[CollectionKey::Tasks])
    }

    /// Moves a task to `target_column_id` at `new_order`.
    ///
    /// Only the target column is renumbered; `new_order` is trusted as given.
    pub fn move_task(
        &mut self,
        task_id: &str,
        target_column_id: &str,
        new_order: u32,
    ) -> StoreResult<()> {
        if ordering::move_task(&mut self.tasks, task_id, target_column_id, new_order) {
            info!(
                "event=task_move module=store status=ok task_id={} column_id={} order={}",
                task_id, target_column_id, new_order
            );
        } else {
            log_noop("task_move", task_id);
        }
        self.persist(&[CollectionKey::Tasks])
    }

    /// Moves a dropped task to the end of the destination column's current view.
    ///
    /// Returns the position used.
    pub fn drop_task(&mut self, task_id: &str, target_column_id: &str) -> StoreResult<u32> {
        self.drop_task_on(task_id, target_column_id, local_today())
    }

    /// Same as [`Self::drop_task`] with an explicit calendar day for the view.
    pub fn drop_task_on(
        &mut self,
        task_id: &str,
        target_column_id: &str,
        today: NaiveDate,
    ) -> StoreResult<u32> {
        let new_order = append_order(self.tasks_by_column_on(target_column_id, today).len());
        self.move_task(task_id, target_column_id, new_order)?;
        Ok(new_order)
    }

    /// Replaces the filter criteria applied by column views.
    pub fn set_filters(&mut self, options: FilterOptions) {
        debug!(
            "event=filters_set module=store status=ok unfiltered={}",
            options.is_unfiltered()
        );
        self.filters = options;
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn user_by_id(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }

    pub fn board_by_id(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == board_id)
    }

    pub fn column_by_id(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    pub fn task_by_id(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Columns of a board sorted by `order`.
    pub fn columns_by_board_id(&self, board_id: &str) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self
            .columns
            .iter()
            .filter(|column| column.board_id == board_id)
            .collect();
        columns.sort_by_key(|column| column.order);
        columns
    }

    /// Tasks of a column after the current filters, sorted by `order`.
    pub fn tasks_by_column_id(&self, column_id: &str) -> Vec<&Task> {
        self.tasks_by_column_on(column_id, local_today())
    }

    /// Same as [`Self::tasks_by_column_id`] with an explicit calendar day.
    pub fn tasks_by_column_on(&self, column_id: &str, today: NaiveDate) -> Vec<&Task> {
        filter_tasks(
            self.tasks.iter().filter(|task| task.column_id == column_id),
            &self.filters,
            today,
        )
    }

    /// Every task carrying `board_id`, unfiltered, in collection order.
    pub fn all_tasks_by_board_id(&self, board_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.board_id == board_id)
            .collect()
    }

    /// Writes each collection in `keys`, stopping at the first failure.
    fn persist(&self, keys: &[CollectionKey]) -> StoreResult<()> {
        for &key in keys {
            let result = match key {
                CollectionKey::Boards => self.repo.save(key, &self.boards),
                CollectionKey::Columns => self.repo.save(key, &self.columns),
                CollectionKey::Tasks => self.repo.save(key, &self.tasks),
                CollectionKey::Users => self.repo.save(key, &self.users),
                CollectionKey::CurrentUser => match &self.current_user {
                    Some(user) => self.repo.save_current_user(user),
                    None => Ok(()),
                },
            };

            if let Err(source) = result {
                error!(
                    "event=store_persist module=store status=error key={} error={}",
                    key, source
                );
                return Err(StoreError::PersistenceWrite { key, source });
            }
        }
        Ok(())
    }
}

fn log_noop(event: &str, id: &str) {
    debug!("event={event} module=store status=noop reason=not_found id={id}");
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

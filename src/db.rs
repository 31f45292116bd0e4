// src/db.rs
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: i64,
    pub user_id: i64,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub total_duration: Option<i64>, // minutes
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExerciseRecord {
    pub id: i64,
    pub workout_session_id: i64,
    pub exercise_name: String,
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSetRecord {
    pub id: i64,
    pub workout_exercise_id: i64,
    pub set_number: i64,
    pub reps: i64,
    pub weight: f64,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserGoal {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub target_date: Option<NaiveDate>,
    pub completed: bool,
}

/// Partial update for a persisted set; `None` fields are left untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct SetUpdate {
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub completed: Option<bool>,
}

/// Partial update for a goal; `None` fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub unit: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkoutStats {
    pub total_workouts: i64,
    pub total_sets: i64,
    pub total_minutes: i64,
}

// Custom Error type for DB operations
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database connection failed")]
    Connection(#[from] rusqlite::Error),
    #[error("Failed to get application data directory")]
    DataDir,
    #[error("I/O error accessing database file")]
    Io(#[from] std::io::Error),
    #[error("Email already registered: {0}")]
    EmailTaken(String),
    #[error("Username already taken: {0}")]
    UsernameTaken(String),
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Workout session not found: ID {0}")]
    SessionNotFound(i64),
    #[error("Workout exercise record not found: ID {0}")]
    ExerciseRecordNotFound(i64),
    #[error("Workout set not found: ID {0}")]
    SetNotFound(i64),
    #[error("Goal not found: ID {0}")]
    GoalNotFound(i64),
    #[error("No fields provided to update")]
    NoFieldsToUpdate,
    #[error("Database query failed: {0}")]
    QueryFailed(rusqlite::Error),
    #[error("Database update failed: {0}")]
    UpdateFailed(rusqlite::Error),
    #[error("Database insert failed: {0}")]
    InsertFailed(rusqlite::Error),
    #[error("Database delete failed: {0}")]
    DeleteFailed(rusqlite::Error),
}

const DB_FILE_NAME: &str = "tompa.sqlite";

/// Gets the path to the SQLite database file within the app's data directory.
/// Creates the directory if it doesn't exist.
pub fn get_db_path() -> Result<PathBuf, DbError> {
    let data_dir = dirs::data_dir().ok_or(DbError::DataDir)?;
    let app_dir = data_dir.join("tompa-training"); // Same dir name as config for consistency
    if !app_dir.exists() {
        std::fs::create_dir_all(&app_dir)?;
    }
    Ok(app_dir.join(DB_FILE_NAME))
}

/// Opens a connection to the SQLite database.
pub fn open_db<P: AsRef<Path>>(path: P) -> Result<Connection, DbError> {
    Connection::open(path).map_err(DbError::Connection)
}

/// Initializes the database tables if they don't exist.
///
/// Deletes cascade from user to sessions and goals, and from session through
/// exercises to sets, matching the hosted schema the app was written against.
pub fn init_db(conn: &Connection) -> Result<(), DbError> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(DbError::Connection)?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE COLLATE NOCASE,
            username TEXT NOT NULL UNIQUE COLLATE NOCASE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL,          -- ISO 8601 string (RFC3339)
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS workout_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            started_at TEXT NOT NULL,
            ended_at TEXT,
            total_duration INTEGER             -- minutes
        );
        CREATE TABLE IF NOT EXISTS workout_exercises (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            workout_session_id INTEGER NOT NULL REFERENCES workout_sessions(id) ON DELETE CASCADE,
            exercise_name TEXT NOT NULL,
            equipment TEXT,                    -- comma-separated labels
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS workout_sets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            workout_exercise_id INTEGER NOT NULL REFERENCES workout_exercises(id) ON DELETE CASCADE,
            set_number INTEGER NOT NULL,
            reps INTEGER NOT NULL,
            weight REAL NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS user_goals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            target_value REAL NOT NULL,
            current_value REAL NOT NULL DEFAULT 0,
            unit TEXT NOT NULL,
            target_date TEXT,                  -- YYYY-MM-DD
            completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );",
    )
    .map_err(DbError::Connection)?;

    Ok(())
}

fn parse_timestamp(column: usize, value: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
        })
}

// --- Users ---

fn map_row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        username: row.get(2)?,
        created_at: parse_timestamp(3, &created_at)?,
        updated_at: parse_timestamp(4, &updated_at)?,
    })
}

/// Creates a user row and returns its ID.
///
/// Email and username are unique case-insensitively; which one collided is
/// determined by a lookup, since SQLite reports both as the same constraint code.
pub fn create_user(
    conn: &Connection,
    email: &str,
    username: &str,
    password_hash: &str,
) -> Result<i64, DbError> {
    let now = Utc::now().to_rfc3339();
    match conn.execute(
        "INSERT INTO users (email, username, password_hash, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?4)",
        params![email, username, password_hash, now],
    ) {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) => {
            if let rusqlite::Error::SqliteFailure(ref err, _) = e {
                if err.code == rusqlite::ErrorCode::ConstraintViolation {
                    if get_user_by_email(conn, email)?.is_some() {
                        return Err(DbError::EmailTaken(email.to_string()));
                    }
                    return Err(DbError::UsernameTaken(username.to_string()));
                }
            }
            Err(DbError::InsertFailed(e))
        }
    }
}

pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>, DbError> {
    conn.query_row(
        "SELECT id, email, username, created_at, updated_at FROM users WHERE email = ?1 COLLATE NOCASE",
        params![email],
        map_row_to_user,
    )
    .optional()
    .map_err(DbError::QueryFailed)
}

pub fn get_user_by_id(conn: &Connection, id: i64) -> Result<Option<User>, DbError> {
    conn.query_row(
        "SELECT id, email, username, created_at, updated_at FROM users WHERE id = ?1",
        params![id],
        map_row_to_user,
    )
    .optional()
    .map_err(DbError::QueryFailed)
}

pub fn get_password_hash(conn: &Connection, email: &str) -> Result<Option<String>, DbError> {
    conn.query_row(
        "SELECT password_hash FROM users WHERE email = ?1 COLLATE NOCASE",
        params![email],
        |row| row.get(0),
    )
    .optional()
    .map_err(DbError::QueryFailed)
}

/// Updates username and/or email for a user.
pub fn update_user_profile(
    conn: &Connection,
    user_id: i64,
    new_email: Option<&str>,
    new_username: Option<&str>,
) -> Result<u64, DbError> {
    let mut updates = Vec::new();
    let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(email) = new_email {
        updates.push("email = ?");
        params_vec.push(Box::new(email.to_string()));
    }
    if let Some(username) = new_username {
        updates.push("username = ?");
        params_vec.push(Box::new(username.to_string()));
    }
    if updates.is_empty() {
        return Err(DbError::NoFieldsToUpdate);
    }
    updates.push("updated_at = ?");
    params_vec.push(Box::new(Utc::now().to_rfc3339()));

    let sql = format!("UPDATE users SET {} WHERE id = ?", updates.join(", "));
    params_vec.push(Box::new(user_id));
    let params_slice: Vec<&dyn ToSql> = params_vec.iter().map(|b| b.as_ref()).collect();

    let rows_affected = match conn.execute(&sql, params_slice.as_slice()) {
        Ok(rows) => rows,
        Err(e) => {
            if let rusqlite::Error::SqliteFailure(ref err, _) = e {
                if err.code == rusqlite::ErrorCode::ConstraintViolation {
                    if let Some(email) = new_email {
                        if get_user_by_email(conn, email)?.is_some() {
                            return Err(DbError::EmailTaken(email.to_string()));
                        }
                    }
                    return Err(DbError::UsernameTaken(
                        new_username.unwrap_or_default().to_string(),
                    ));
                }
            }
            return Err(DbError::UpdateFailed(e));
        }
    };

    if rows_affected == 0 {
        Err(DbError::UserNotFound(user_id.to_string()))
    } else {
        Ok(rows_affected as u64)
    }
}

/// Deletes a user. Sessions, exercises, sets and goals go with it via cascade.
pub fn delete_user(conn: &Connection, user_id: i64) -> Result<u64, DbError> {
    let rows_affected = conn
        .execute("DELETE FROM users WHERE id = ?1", params![user_id])
        .map_err(DbError::DeleteFailed)?;
    if rows_affected == 0 {
        Err(DbError::UserNotFound(user_id.to_string()))
    } else {
        Ok(rows_affected as u64)
    }
}

// --- Workout sessions ---

fn map_row_to_session(row: &Row) -> Result<WorkoutSession, rusqlite::Error> {
    let started_at: String = row.get(2)?;
    let ended_at: Option<String> = row.get(3)?;
    Ok(WorkoutSession {
        id: row.get(0)?,
        user_id: row.get(1)?,
        started_at: parse_timestamp(2, &started_at)?,
        ended_at: ended_at.as_deref().map(|s| parse_timestamp(3, s)).transpose()?,
        total_duration: row.get(4)?,
    })
}

pub fn create_workout_session(conn: &Connection, user_id: i64) -> Result<i64, DbError> {
    conn.execute(
        "INSERT INTO workout_sessions (user_id, started_at) VALUES (?1, ?2)",
        params![user_id, Utc::now().to_rfc3339()],
    )
    .map_err(DbError::InsertFailed)?;
    Ok(conn.last_insert_rowid())
}

pub fn end_workout_session(
    conn: &Connection,
    session_id: i64,
    duration_minutes: i64,
) -> Result<(), DbError> {
    let rows_affected = conn
        .execute(
            "UPDATE workout_sessions SET ended_at = ?1, total_duration = ?2 WHERE id = ?3",
            params![Utc::now().to_rfc3339(), duration_minutes, session_id],
        )
        .map_err(DbError::UpdateFailed)?;
    if rows_affected == 0 {
        Err(DbError::SessionNotFound(session_id))
    } else {
        Ok(())
    }
}

/// Sessions for a user, most recent first.
pub fn list_workout_sessions(
    conn: &Connection,
    user_id: i64,
    limit: Option<u32>,
) -> Result<Vec<WorkoutSession>, DbError> {
    let mut sql = "SELECT id, user_id, started_at, ended_at, total_duration
         FROM workout_sessions WHERE user_id = ?1 ORDER BY started_at DESC, id DESC"
        .to_string();
    let mut params_vec: Vec<Box<dyn ToSql>> = vec![Box::new(user_id)];
    if let Some(limit) = limit {
        sql.push_str(" LIMIT ?2");
        params_vec.push(Box::new(limit));
    }
    let params_slice: Vec<&dyn ToSql> = params_vec.iter().map(|b| b.as_ref()).collect();

    let mut stmt = conn.prepare(&sql).map_err(DbError::QueryFailed)?;
    let iter = stmt
        .query_map(params_slice.as_slice(), map_row_to_session)
        .map_err(DbError::QueryFailed)?;
    let mut sessions = Vec::new();
    for session in iter {
        sessions.push(session?);
    }
    Ok(sessions)
}

// --- Workout exercises ---

fn map_row_to_exercise_record(row: &Row) -> Result<WorkoutExerciseRecord, rusqlite::Error> {
    let equipment: Option<String> = row.get(3)?;
    Ok(WorkoutExerciseRecord {
        id: row.get(0)?,
        workout_session_id: row.get(1)?,
        exercise_name: row.get(2)?,
        equipment: equipment
            .map(|s| s.split(',').map(str::to_string).collect())
            .unwrap_or_default(),
    })
}

pub fn add_exercise_to_workout(
    conn: &Connection,
    session_id: i64,
    exercise_name: &str,
    equipment: &[String],
) -> Result<i64, DbError> {
    let equipment_str = if equipment.is_empty() {
        None
    } else {
        Some(equipment.join(","))
    };
    match conn.execute(
        "INSERT INTO workout_exercises (workout_session_id, exercise_name, equipment, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![session_id, exercise_name, equipment_str, Utc::now().to_rfc3339()],
    ) {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) => {
            if let rusqlite::Error::SqliteFailure(ref err, _) = e {
                // FK failure means the session row is gone
                if err.code == rusqlite::ErrorCode::ConstraintViolation {
                    return Err(DbError::SessionNotFound(session_id));
                }
            }
            Err(DbError::InsertFailed(e))
        }
    }
}

/// Exercise records for a session, in the order they were added.
pub fn get_workout_exercises(
    conn: &Connection,
    session_id: i64,
) -> Result<Vec<WorkoutExerciseRecord>, DbError> {
    let mut stmt = conn
        .prepare(
            "SELECT id, workout_session_id, exercise_name, equipment
             FROM workout_exercises WHERE workout_session_id = ?1 ORDER BY id ASC",
        )
        .map_err(DbError::QueryFailed)?;
    let iter = stmt
        .query_map(params![session_id], map_row_to_exercise_record)
        .map_err(DbError::QueryFailed)?;
    let mut records = Vec::new();
    for record in iter {
        records.push(record?);
    }
    Ok(records)
}

// --- Workout sets ---

fn map_row_to_set_record(row: &Row) -> Result<WorkoutSetRecord, rusqlite::Error> {
    Ok(WorkoutSetRecord {
        id: row.get(0)?,
        workout_exercise_id: row.get(1)?,
        set_number: row.get(2)?,
        reps: row.get(3)?,
        weight: row.get(4)?,
        completed: row.get(5)?,
    })
}

pub fn add_set_to_exercise(
    conn: &Connection,
    exercise_record_id: i64,
    set_number: i64,
    reps: i64,
    weight: f64,
) -> Result<i64, DbError> {
    match conn.execute(
        "INSERT INTO workout_sets (workout_exercise_id, set_number, reps, weight, completed, created_at)
         VALUES (?1, ?2, ?3, ?4, 0, ?5)",
        params![exercise_record_id, set_number, reps, weight, Utc::now().to_rfc3339()],
    ) {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) => {
            if let rusqlite::Error::SqliteFailure(ref err, _) = e {
                if err.code == rusqlite::ErrorCode::ConstraintViolation {
                    return Err(DbError::ExerciseRecordNotFound(exercise_record_id));
                }
            }
            Err(DbError::InsertFailed(e))
        }
    }
}

/// Applies a partial update to a persisted set.
pub fn update_set(conn: &Connection, set_id: i64, update: SetUpdate) -> Result<(), DbError> {
    let mut updates = Vec::new();
    let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(reps) = update.reps {
        updates.push("reps = ?");
        params_vec.push(Box::new(reps));
    }
    if let Some(weight) = update.weight {
        updates.push("weight = ?");
        params_vec.push(Box::new(weight));
    }
    if let Some(completed) = update.completed {
        updates.push("completed = ?");
        params_vec.push(Box::new(completed));
    }
    if updates.is_empty() {
        return Err(DbError::NoFieldsToUpdate);
    }

    let sql = format!("UPDATE workout_sets SET {} WHERE id = ?", updates.join(", "));
    params_vec.push(Box::new(set_id));
    let params_slice: Vec<&dyn ToSql> = params_vec.iter().map(|b| b.as_ref()).collect();

    let rows_affected = conn
        .execute(&sql, params_slice.as_slice())
        .map_err(DbError::UpdateFailed)?;
    if rows_affected == 0 {
        Err(DbError::SetNotFound(set_id))
    } else {
        Ok(())
    }
}

/// Sets for an exercise record, ordered by set number.
pub fn get_exercise_sets(
    conn: &Connection,
    exercise_record_id: i64,
) -> Result<Vec<WorkoutSetRecord>, DbError> {
    let mut stmt = conn
        .prepare(
            "SELECT id, workout_exercise_id, set_number, reps, weight, completed
             FROM workout_sets WHERE workout_exercise_id = ?1 ORDER BY set_number ASC",
        )
        .map_err(DbError::QueryFailed)?;
    let iter = stmt
        .query_map(params![exercise_record_id], map_row_to_set_record)
        .map_err(DbError::QueryFailed)?;
    let mut sets = Vec::new();
    for set in iter {
        sets.push(set?);
    }
    Ok(sets)
}

// --- Goals ---

fn map_row_to_goal(row: &Row) -> Result<UserGoal, rusqlite::Error> {
    let target_date: Option<String> = row.get(6)?;
    let target_date = target_date
        .map(|s| {
            NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
            })
        })
        .transpose()?;
    Ok(UserGoal {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        target_value: row.get(3)?,
        current_value: row.get(4)?,
        unit: row.get(5)?,
        target_date,
        completed: row.get(7)?,
    })
}

pub fn create_user_goal(
    conn: &Connection,
    user_id: i64,
    title: &str,
    target_value: f64,
    unit: &str,
    target_date: Option<NaiveDate>,
) -> Result<i64, DbError> {
    conn.execute(
        "INSERT INTO user_goals (user_id, title, target_value, current_value, unit, target_date, completed, created_at)
         VALUES (?1, ?2, ?3, 0, ?4, ?5, 0, ?6)",
        params![
            user_id,
            title,
            target_value,
            unit,
            target_date.map(|d| d.format("%Y-%m-%d").to_string()),
            Utc::now().to_rfc3339()
        ],
    )
    .map_err(DbError::InsertFailed)?;
    Ok(conn.last_insert_rowid())
}

pub fn update_user_goal(conn: &Connection, goal_id: i64, update: GoalUpdate) -> Result<(), DbError> {
    let mut updates = Vec::new();
    let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(title) = update.title {
        updates.push("title = ?");
        params_vec.push(Box::new(title));
    }
    if let Some(target) = update.target_value {
        updates.push("target_value = ?");
        params_vec.push(Box::new(target));
    }
    if let Some(current) = update.current_value {
        updates.push("current_value = ?");
        params_vec.push(Box::new(current));
    }
    if let Some(unit) = update.unit {
        updates.push("unit = ?");
        params_vec.push(Box::new(unit));
    }
    if let Some(date) = update.target_date {
        updates.push("target_date = ?");
        params_vec.push(Box::new(date.format("%Y-%m-%d").to_string()));
    }
    if let Some(completed) = update.completed {
        updates.push("completed = ?");
        params_vec.push(Box::new(completed));
    }
    if updates.is_empty() {
        return Err(DbError::NoFieldsToUpdate);
    }

    let sql = format!("UPDATE user_goals SET {} WHERE id = ?", updates.join(", "));
    params_vec.push(Box::new(goal_id));
    let params_slice: Vec<&dyn ToSql> = params_vec.iter().map(|b| b.as_ref()).collect();

    let rows_affected = conn
        .execute(&sql, params_slice.as_slice())
        .map_err(DbError::UpdateFailed)?;
    if rows_affected == 0 {
        Err(DbError::GoalNotFound(goal_id))
    } else {
        Ok(())
    }
}

/// Goals for a user, most recent first.
pub fn list_user_goals(conn: &Connection, user_id: i64) -> Result<Vec<UserGoal>, DbError> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, title, target_value, current_value, unit, target_date, completed
             FROM user_goals WHERE user_id = ?1 ORDER BY id DESC",
        )
        .map_err(DbError::QueryFailed)?;
    let iter = stmt
        .query_map(params![user_id], map_row_to_goal)
        .map_err(DbError::QueryFailed)?;
    let mut goals = Vec::new();
    for goal in iter {
        goals.push(goal?);
    }
    Ok(goals)
}

pub fn delete_user_goal(conn: &Connection, goal_id: i64) -> Result<u64, DbError> {
    let rows_affected = conn
        .execute("DELETE FROM user_goals WHERE id = ?1", params![goal_id])
        .map_err(DbError::DeleteFailed)?;
    if rows_affected == 0 {
        Err(DbError::GoalNotFound(goal_id))
    } else {
        Ok(rows_affected as u64)
    }
}

// --- Statistics ---

/// Aggregate workout counts for a user: sessions, sets and logged minutes.
pub fn get_user_workout_stats(conn: &Connection, user_id: i64) -> Result<WorkoutStats, DbError> {
    let (total_workouts, total_minutes): (i64, i64) = conn
        .query_row(
            "SELECT COUNT(*), COALESCE(SUM(total_duration), 0)
             FROM workout_sessions WHERE user_id = ?1",
            params![user_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .map_err(DbError::QueryFailed)?;

    let total_sets: i64 = conn
        .query_row(
            "SELECT COUNT(*)
             FROM workout_sets s
             JOIN workout_exercises e ON s.workout_exercise_id = e.id
             JOIN workout_sessions ws ON e.workout_session_id = ws.id
             WHERE ws.user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .map_err(DbError::QueryFailed)?;

    Ok(WorkoutStats {
        total_workouts,
        total_sets,
        total_minutes,
    })
}

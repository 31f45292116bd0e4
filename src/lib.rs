use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

// --- Declare modules ---
pub mod catalog;
mod config;
pub mod db;
pub mod picker;
pub mod workout;

// --- Expose public types ---
pub use config::{
    get_config_path as get_config_path_util,
    load_config as load_config_util,
    parse_color,
    save_config as save_config_util,
    Config,
    ConfigError,
    Language,
    StandardColor,
    ThemeConfig,
    Units,
};

pub use catalog::{Exercise, ExerciseType, MuscleGroup};
pub use db::{
    get_db_path as get_db_path_util,
    DbError,
    GoalUpdate,
    SetUpdate,
    User,
    UserGoal,
    WorkoutExerciseRecord,
    WorkoutSession,
    WorkoutSetRecord,
    WorkoutStats,
};
pub use picker::{ExercisePicker, PickerError, SelectionMode};
pub use workout::{
    ActiveWorkout, SetField, WorkoutError, WorkoutExercise, WorkoutSet, WorkoutSummary,
};

/// The logged-in user, if any. Owned by the service; only the register, login
/// and logout operations write it, everything else reads.
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub const fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }
}

/// One exercise of a persisted session together with its sets, as returned by
/// the history queries.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionExerciseDetail {
    pub record: WorkoutExerciseRecord,
    pub sets: Vec<WorkoutSetRecord>,
}

pub struct AppService {
    pub config: Config,
    pub conn: Connection,
    pub session: Session,
    pub db_path: PathBuf,
    pub config_path: PathBuf,
}

impl AppService {
    /// Initializes the application service.
    /// # Errors
    /// Returns `anyhow::Error` if config/db path determination, loading, or initialization fails.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let mut config = config::load_config(&config_path)
            .context(format!("Failed to load config from {config_path:?}"))?;

        let db_path = db::get_db_path().context("Failed to determine database path")?;
        let conn = db::open_db(&db_path)
            .with_context(|| format!("Failed to open database at {db_path:?}"))?;

        db::init_db(&conn).context("Failed to initialize database schema")?;

        // Restore the persisted login. A stale id (account deleted elsewhere)
        // is dropped from the config rather than treated as an error.
        let mut session = Session::default();
        if let Some(user_id) = config.current_user_id {
            match db::get_user_by_id(&conn, user_id)? {
                Some(user) => session.current_user = Some(user),
                None => {
                    config.current_user_id = None;
                    config::save_config(&config_path, &config)?;
                }
            }
        }

        Ok(Self {
            config,
            conn,
            session,
            db_path,
            config_path,
        })
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn get_db_path(&self) -> &Path {
        &self.db_path
    }

    /// Saves the current configuration state.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn save_config(&self) -> Result<(), ConfigError> {
        config::save_config(&self.config_path, &self.config)
    }

    /// Sets the measurement units.
    /// # Errors
    /// Returns `ConfigError` variants if saving fails.
    pub fn set_units(&mut self, units: Units) -> Result<(), ConfigError> {
        self.config.units = units;
        self.save_config()
    }

    /// Sets the display language.
    /// # Errors
    /// Returns `ConfigError` variants if saving fails.
    pub fn set_language(&mut self, language: Language) -> Result<(), ConfigError> {
        self.config.language = language;
        self.save_config()
    }

    // --- Auth / session ---

    /// Registers a new account and logs it in.
    /// # Errors
    /// Returns `anyhow::Error` if a field is blank or the email/username is taken.
    pub fn register_user(&mut self, email: &str, password: &str, username: &str) -> Result<User> {
        let email = email.trim();
        let username = username.trim();
        if email.is_empty() || username.is_empty() || password.is_empty() {
            bail!("Email, username and password are all required.");
        }

        let hash = hash_password(email, password);
        let user_id = db::create_user(&self.conn, email, username, &hash)?;
        let user = db::get_user_by_id(&self.conn, user_id)?
            .ok_or_else(|| DbError::UserNotFound(user_id.to_string()))?;

        self.set_current_user(user.clone())?;
        Ok(user)
    }

    /// Logs a user in by email and password.
    /// # Errors
    /// Returns `anyhow::Error` on unknown email or wrong password (same message
    /// for both, so the CLI does not leak which half was wrong).
    pub fn login_user(&mut self, email: &str, password: &str) -> Result<User> {
        let email = email.trim();
        let stored = db::get_password_hash(&self.conn, email)?;
        match stored {
            Some(hash) if hash == hash_password(email, password) => {
                let user = db::get_user_by_email(&self.conn, email)?
                    .ok_or_else(|| DbError::UserNotFound(email.to_string()))?;
                self.set_current_user(user.clone())?;
                Ok(user)
            }
            _ => bail!("Invalid email or password."),
        }
    }

    /// Logs the current user out. A no-op error if nobody is logged in.
    pub fn logout_user(&mut self) -> Result<()> {
        if !self.session.is_logged_in() {
            bail!("No user is logged in.");
        }
        self.session.current_user = None;
        self.config.current_user_id = None;
        self.save_config()?;
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// The logged-in user, or an error telling the caller to log in first.
    pub fn require_user(&self) -> Result<&User> {
        self.session
            .current_user()
            .ok_or_else(|| anyhow::anyhow!("Not logged in. Use 'login' or 'register' first."))
    }

    /// Updates email and/or username of the logged-in user.
    /// # Errors
    /// Returns `anyhow::Error` if not logged in, nothing to change, or a value is taken.
    pub fn update_profile(
        &mut self,
        new_email: Option<&str>,
        new_username: Option<&str>,
    ) -> Result<User> {
        let user_id = self.require_user()?.id;
        db::update_user_profile(&self.conn, user_id, new_email, new_username)
            .context("Failed to update profile")?;
        let user = db::get_user_by_id(&self.conn, user_id)?
            .ok_or_else(|| DbError::UserNotFound(user_id.to_string()))?;
        self.session.current_user = Some(user.clone());
        Ok(user)
    }

    /// Deletes the logged-in account and everything hanging off it.
    pub fn delete_account(&mut self) -> Result<()> {
        let user_id = self.require_user()?.id;
        db::delete_user(&self.conn, user_id).context("Failed to delete account")?;
        self.session.current_user = None;
        self.config.current_user_id = None;
        self.save_config()?;
        Ok(())
    }

    fn set_current_user(&mut self, user: User) -> Result<()> {
        self.config.current_user_id = Some(user.id);
        self.session.current_user = Some(user);
        self.save_config()?;
        Ok(())
    }

    // --- Workout sessions ---

    /// Opens a new workout session for the logged-in user and returns its ID.
    pub fn start_workout_session(&self) -> Result<i64> {
        let user_id = self.require_user()?.id;
        db::create_workout_session(&self.conn, user_id)
            .context("Failed to create workout session")
            .map_err(Into::into)
    }

    /// Persists a finished active workout: every exercise entry and set is
    /// written to the session, the session is closed with the given duration,
    /// and the summary is returned for the confirmation message.
    ///
    /// Already-written records are not rolled back if a later write fails; the
    /// local model and the store are not kept transactionally consistent.
    pub fn finish_workout(
        &self,
        session_id: i64,
        active: &ActiveWorkout,
        duration_minutes: i64,
    ) -> Result<WorkoutSummary> {
        for entry in &active.exercises {
            let equipment: Vec<String> = entry
                .exercise
                .equipment
                .iter()
                .map(|e| (*e).to_string())
                .collect();
            let record_id = db::add_exercise_to_workout(
                &self.conn,
                session_id,
                entry.exercise.name,
                &equipment,
            )
            .with_context(|| format!("Failed to save exercise '{}'", entry.exercise.name))?;

            for set in &entry.sets {
                let set_id = db::add_set_to_exercise(
                    &self.conn,
                    record_id,
                    set.set_number,
                    set.reps,
                    set.weight,
                )
                .with_context(|| {
                    format!("Failed to save set {} of '{}'", set.set_number, entry.exercise.name)
                })?;
                if set.completed {
                    db::update_set(
                        &self.conn,
                        set_id,
                        SetUpdate {
                            completed: Some(true),
                            ..Default::default()
                        },
                    )?;
                }
            }
        }

        db::end_workout_session(&self.conn, session_id, duration_minutes)
            .context("Failed to end workout session")?;
        Ok(active.summary())
    }

    /// Past sessions of the logged-in user, most recent first.
    pub fn list_sessions(&self, limit: Option<u32>) -> Result<Vec<WorkoutSession>> {
        let user_id = self.require_user()?.id;
        db::list_workout_sessions(&self.conn, user_id, limit)
            .context("Failed to list workout sessions")
            .map_err(Into::into)
    }

    /// Exercises and sets of one persisted session, in insertion order.
    pub fn session_detail(&self, session_id: i64) -> Result<Vec<SessionExerciseDetail>> {
        let records = db::get_workout_exercises(&self.conn, session_id)
            .context("Failed to load session exercises")?;
        let mut details = Vec::with_capacity(records.len());
        for record in records {
            let sets = db::get_exercise_sets(&self.conn, record.id)
                .with_context(|| format!("Failed to load sets for '{}'", record.exercise_name))?;
            details.push(SessionExerciseDetail { record, sets });
        }
        Ok(details)
    }

    // --- Goals ---

    /// Creates a goal for the logged-in user.
    /// # Errors
    /// Returns `anyhow::Error` if not logged in or the title is blank.
    pub fn add_goal(
        &self,
        title: &str,
        target_value: f64,
        unit: &str,
        target_date: Option<chrono::NaiveDate>,
    ) -> Result<i64> {
        let user_id = self.require_user()?.id;
        let title = title.trim();
        if title.is_empty() {
            bail!("Goal title cannot be empty.");
        }
        db::create_user_goal(&self.conn, user_id, title, target_value, unit, target_date)
            .context("Failed to create goal")
            .map_err(Into::into)
    }

    pub fn list_goals(&self) -> Result<Vec<UserGoal>> {
        let user_id = self.require_user()?.id;
        db::list_user_goals(&self.conn, user_id)
            .context("Failed to list goals")
            .map_err(Into::into)
    }

    pub fn update_goal(&self, goal_id: i64, update: GoalUpdate) -> Result<()> {
        self.require_user()?;
        db::update_user_goal(&self.conn, goal_id, update)
            .with_context(|| format!("Failed to update goal ID {goal_id}"))
            .map_err(Into::into)
    }

    pub fn delete_goal(&self, goal_id: i64) -> Result<u64> {
        self.require_user()?;
        db::delete_user_goal(&self.conn, goal_id)
            .with_context(|| format!("Failed to delete goal ID {goal_id}"))
            .map_err(Into::into)
    }

    // --- Statistics ---

    /// Lifetime workout counts for the logged-in user.
    pub fn workout_stats(&self) -> Result<WorkoutStats> {
        let user_id = self.require_user()?.id;
        db::get_user_workout_stats(&self.conn, user_id)
            .context("Failed to compute workout stats")
            .map_err(Into::into)
    }
}

/// Salted digest for stored credentials. The email doubles as the salt, so
/// equal passwords hash differently per account.
fn hash_password(email: &str, password: &str) -> String {
    let digest = Sha256::digest(format!("{}:{}", email.to_lowercase(), password));
    format!("{digest:x}")
}

use anyhow::Result;
use chrono::NaiveDate;
use tompa_training_lib::{
    catalog, ActiveWorkout, AppService, Config, DbError, GoalUpdate, Session, SetField,
};

// Helper function to create a test service with in-memory database
fn create_test_service() -> Result<AppService> {
    // Create an in-memory database for testing
    let conn = rusqlite::Connection::open_in_memory()?;
    tompa_training_lib::db::init_db(&conn)?;

    Ok(AppService {
        config: Config::default(),
        conn,
        session: Session::default(),
        db_path: ":memory:".into(),
        config_path: std::env::temp_dir().join("tompa_test_config.toml"),
    })
}

// Register an account and leave it logged in.
fn register_test_user(service: &mut AppService) -> Result<i64> {
    let user = service.register_user("anna@example.com", "hunter2", "anna")?;
    Ok(user.id)
}

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.units, tompa_training_lib::Units::Metric);
    assert_eq!(config.language, tompa_training_lib::Language::English);
    assert_eq!(config.current_user_id, None);
    assert_eq!(config.theme.header_color, "Green");
    assert_eq!(config.units.weight_label(), "kg");
}

#[test]
fn test_register_logs_user_in() -> Result<()> {
    let mut service = create_test_service()?;

    assert!(service.current_user().is_none());
    let user = service.register_user("anna@example.com", "hunter2", "anna")?;
    assert_eq!(user.email, "anna@example.com");
    assert_eq!(user.username, "anna");
    assert_eq!(service.current_user().map(|u| u.id), Some(user.id));
    assert_eq!(service.config.current_user_id, Some(user.id));

    Ok(())
}

#[test]
fn test_register_rejects_blank_fields() -> Result<()> {
    let mut service = create_test_service()?;

    assert!(service.register_user("  ", "pw", "anna").is_err());
    assert!(service.register_user("a@b.se", "", "anna").is_err());
    assert!(service.register_user("a@b.se", "pw", "   ").is_err());
    assert!(service.current_user().is_none());

    Ok(())
}

#[test]
fn test_register_duplicate_email_and_username() -> Result<()> {
    let mut service = create_test_service()?;
    register_test_user(&mut service)?;

    let err = service
        .register_user("anna@example.com", "other", "bertil")
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DbError>(),
        Some(DbError::EmailTaken(_))
    ));

    let err = service
        .register_user("bertil@example.com", "other", "anna")
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DbError>(),
        Some(DbError::UsernameTaken(_))
    ));

    Ok(())
}

#[test]
fn test_login_logout() -> Result<()> {
    let mut service = create_test_service()?;
    let user_id = register_test_user(&mut service)?;

    service.logout_user()?;
    assert!(service.current_user().is_none());
    assert_eq!(service.config.current_user_id, None);
    assert!(service.logout_user().is_err()); // nobody left to log out

    let user = service.login_user("anna@example.com", "hunter2")?;
    assert_eq!(user.id, user_id);
    assert!(service.session.is_logged_in());

    Ok(())
}

#[test]
fn test_login_wrong_credentials_use_same_message() -> Result<()> {
    let mut service = create_test_service()?;
    register_test_user(&mut service)?;
    service.logout_user()?;

    let wrong_password = service
        .login_user("anna@example.com", "nope")
        .unwrap_err()
        .to_string();
    let unknown_email = service
        .login_user("nobody@example.com", "hunter2")
        .unwrap_err()
        .to_string();
    assert_eq!(wrong_password, unknown_email);
    assert!(service.current_user().is_none());

    Ok(())
}

#[test]
fn test_operations_require_login() -> Result<()> {
    let service = create_test_service()?;

    assert!(service.require_user().is_err());
    assert!(service.start_workout_session().is_err());
    assert!(service.list_sessions(None).is_err());
    assert!(service.list_goals().is_err());
    assert!(service.workout_stats().is_err());

    Ok(())
}

#[test]
fn test_update_profile() -> Result<()> {
    let mut service = create_test_service()?;
    register_test_user(&mut service)?;

    let user = service.update_profile(None, Some("anna_k"))?;
    assert_eq!(user.username, "anna_k");
    assert_eq!(user.email, "anna@example.com");
    assert_eq!(service.current_user().map(|u| u.username.as_str()), Some("anna_k"));

    // Old credentials still work after a username change
    service.logout_user()?;
    service.login_user("anna@example.com", "hunter2")?;

    Ok(())
}

#[test]
fn test_update_profile_taken_email() -> Result<()> {
    let mut service = create_test_service()?;
    service.register_user("bertil@example.com", "pw", "bertil")?;
    service.logout_user()?;
    register_test_user(&mut service)?;

    assert!(service.update_profile(Some("bertil@example.com"), None).is_err());

    Ok(())
}

fn sample_workout() -> Result<ActiveWorkout> {
    let bench = catalog::by_id("bench-press").expect("catalog exercise");
    let squat = catalog::by_id("squats").expect("catalog exercise");

    let mut workout = ActiveWorkout::new();
    workout.add_exercise(Some(bench))?;
    workout.add_exercise(Some(squat))?;
    workout.add_set(0)?; // bench: 2 sets
    workout.update_set_field(0, 0, SetField::Reps, "8")?;
    workout.update_set_field(0, 0, SetField::Weight, "60")?;
    workout.update_set_field(0, 1, SetField::Reps, "6")?;
    workout.update_set_field(0, 1, SetField::Weight, "62.5")?;
    workout.update_set_field(1, 0, SetField::Reps, "5")?;
    workout.update_set_field(1, 0, SetField::Weight, "100")?;
    workout.toggle_set_completion(0, 0)?;
    workout.toggle_set_completion(1, 0)?;
    Ok(workout)
}

#[test]
fn test_finish_workout_round_trip() -> Result<()> {
    let mut service = create_test_service()?;
    register_test_user(&mut service)?;
    let workout = sample_workout()?;

    let session_id = service.start_workout_session()?;
    let summary = service.finish_workout(session_id, &workout, 45)?;
    assert_eq!(summary.total_sets, 3);
    assert_eq!(summary.completed_sets, 2);

    let sessions = service.list_sessions(None)?;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, session_id);
    assert!(sessions[0].ended_at.is_some());
    assert_eq!(sessions[0].total_duration, Some(45));

    let details = service.session_detail(session_id)?;
    assert_eq!(details.len(), 2);
    assert_eq!(details[0].record.exercise_name, "Barbell Bench Press");
    assert_eq!(details[0].record.equipment, vec!["Barbell", "Bench"]);
    assert_eq!(details[0].sets.len(), 2);
    assert_eq!(details[0].sets[0].set_number, 1);
    assert_eq!(details[0].sets[0].reps, 8);
    assert!((details[0].sets[0].weight - 60.0).abs() < f64::EPSILON);
    assert!(details[0].sets[0].completed);
    assert_eq!(details[0].sets[1].set_number, 2);
    assert!(!details[0].sets[1].completed);
    assert_eq!(details[1].record.exercise_name, "Barbell Squats");
    assert_eq!(details[1].sets.len(), 1);
    assert!(details[1].sets[0].completed);

    Ok(())
}

#[test]
fn test_list_sessions_newest_first_with_limit() -> Result<()> {
    let mut service = create_test_service()?;
    register_test_user(&mut service)?;

    let first = service.start_workout_session()?;
    let second = service.start_workout_session()?;
    let third = service.start_workout_session()?;

    let all = service.list_sessions(None)?;
    assert_eq!(all.len(), 3);
    // Started in the same second, so the id breaks the tie
    assert_eq!(all[0].id, third);
    assert_eq!(all[2].id, first);

    let limited = service.list_sessions(Some(2))?;
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].id, third);
    assert_eq!(limited[1].id, second);

    Ok(())
}

#[test]
fn test_goal_crud() -> Result<()> {
    let mut service = create_test_service()?;
    register_test_user(&mut service)?;

    let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
    let goal_id = service.add_goal("Squat 140", 140.0, "kg", Some(date))?;

    let goals = service.list_goals()?;
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].id, goal_id);
    assert_eq!(goals[0].title, "Squat 140");
    assert!((goals[0].current_value - 0.0).abs() < f64::EPSILON);
    assert_eq!(goals[0].target_date, Some(date));
    assert!(!goals[0].completed);

    service.update_goal(
        goal_id,
        GoalUpdate {
            current_value: Some(125.0),
            ..Default::default()
        },
    )?;
    service.update_goal(
        goal_id,
        GoalUpdate {
            completed: Some(true),
            ..Default::default()
        },
    )?;

    let goals = service.list_goals()?;
    assert!((goals[0].current_value - 125.0).abs() < f64::EPSILON);
    assert_eq!(goals[0].title, "Squat 140"); // untouched by partial updates
    assert!(goals[0].completed);

    let deleted = service.delete_goal(goal_id)?;
    assert_eq!(deleted, 1);
    assert!(service.list_goals()?.is_empty());

    Ok(())
}

#[test]
fn test_goal_update_errors() -> Result<()> {
    let mut service = create_test_service()?;
    register_test_user(&mut service)?;
    let goal_id = service.add_goal("Run 10k", 10.0, "km", None)?;

    // Empty update is rejected before touching the row
    let err = service.update_goal(goal_id, GoalUpdate::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DbError>(),
        Some(DbError::NoFieldsToUpdate)
    ));

    let err = service
        .update_goal(
            9999,
            GoalUpdate {
                completed: Some(true),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DbError>(),
        Some(DbError::GoalNotFound(9999))
    ));

    assert!(service.add_goal("   ", 1.0, "kg", None).is_err());

    Ok(())
}

#[test]
fn test_workout_stats() -> Result<()> {
    let mut service = create_test_service()?;
    register_test_user(&mut service)?;

    let stats = service.workout_stats()?;
    assert_eq!(stats.total_workouts, 0);
    assert_eq!(stats.total_sets, 0);
    assert_eq!(stats.total_minutes, 0);

    let workout = sample_workout()?;
    let first = service.start_workout_session()?;
    service.finish_workout(first, &workout, 45)?;
    let second = service.start_workout_session()?;
    service.finish_workout(second, &workout, 30)?;

    let stats = service.workout_stats()?;
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.total_sets, 6);
    assert_eq!(stats.total_minutes, 75);

    Ok(())
}

#[test]
fn test_delete_account_cascades() -> Result<()> {
    let mut service = create_test_service()?;
    let user_id = register_test_user(&mut service)?;

    let workout = sample_workout()?;
    let session_id = service.start_workout_session()?;
    service.finish_workout(session_id, &workout, 20)?;
    service.add_goal("Bench 80", 80.0, "kg", None)?;

    service.delete_account()?;
    assert!(service.current_user().is_none());
    assert_eq!(service.config.current_user_id, None);

    // Everything hanging off the user is gone (ON DELETE CASCADE)
    let sessions = tompa_training_lib::db::list_workout_sessions(&service.conn, user_id, None)?;
    assert!(sessions.is_empty());
    let goals = tompa_training_lib::db::list_user_goals(&service.conn, user_id)?;
    assert!(goals.is_empty());
    let exercises = tompa_training_lib::db::get_workout_exercises(&service.conn, session_id)?;
    assert!(exercises.is_empty());

    Ok(())
}

#[test]
fn test_finish_workout_unknown_session() -> Result<()> {
    let mut service = create_test_service()?;
    register_test_user(&mut service)?;
    let workout = sample_workout()?;

    assert!(service.finish_workout(4242, &workout, 10).is_err());

    Ok(())
}

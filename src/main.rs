//src/main.rs
mod cli; // Keep cli module for parsing args

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use std::io;
use std::io::{stdin, stdout, Write};
use std::str::FromStr;
use std::time::Instant;

use tompa_training_lib::{
    catalog, ActiveWorkout, AppService, Exercise, ExercisePicker, ExerciseType, GoalUpdate,
    Language, MuscleGroup, SelectionMode, SetField, Units, UserGoal, WorkoutSession, WorkoutStats,
};

fn main() -> Result<()> {
    // --- Check for completion generation request FIRST ---
    let cli_args = cli::parse_args(); // Parse arguments once
    let export_csv = cli_args.export_csv;

    if let cli::Commands::GenerateCompletion { shell } = cli_args.command {
        let mut cmd = cli::build_cli_command(); // Get the command structure
        let bin_name = cmd.get_name().to_string(); // Get the binary name

        eprintln!("Generating completion script for {shell}..."); // Print to stderr
        clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout()); // Print script to stdout
        return Ok(()); // Exit after generating script
    }

    // Initialize the application service (loads config, connects to DB)
    let mut service =
        AppService::initialize().context("Failed to initialize application service")?;

    let header_color = tompa_training_lib::parse_color(&service.config.theme.header_color)
        .map(Color::from)
        .unwrap_or(Color::Green); // Fallback

    // --- Execute Commands using AppService ---
    match cli_args.command {
        cli::Commands::GenerateCompletion { .. } => {
            // This case is handled above, but keep it exhaustive
            unreachable!("Completion generation should have exited already");
        }
        // --- Auth Commands ---
        cli::Commands::Register { email, username, password } => {
            match service.register_user(&email, &password, &username) {
                Ok(user) => println!("Welcome, {}! Account created and logged in.", user.username),
                Err(e) => bail!("Error registering: {}", e),
            }
        }
        cli::Commands::Login { email, password } => {
            match service.login_user(&email, &password) {
                Ok(user) => println!("Logged in as '{}'.", user.username),
                Err(e) => bail!("Error logging in: {}", e),
            }
        }
        cli::Commands::Logout => match service.logout_user() {
            Ok(()) => println!("Logged out."),
            Err(e) => bail!("Error logging out: {}", e),
        },
        cli::Commands::Profile => {
            let user = service.require_user()?;
            println!("Username: {}", user.username);
            println!("Email:    {}", user.email);
            println!("Member since: {}", user.created_at.format("%Y-%m-%d"));
        }
        cli::Commands::EditProfile { email, username } => {
            if email.is_none() && username.is_none() {
                bail!("Nothing to change. Pass --email and/or --username.");
            }
            match service.update_profile(email.as_deref(), username.as_deref()) {
                Ok(user) => println!("Profile updated: '{}' <{}>.", user.username, user.email),
                Err(e) => bail!("Error updating profile: {}", e),
            }
        }
        cli::Commands::DeleteAccount { yes } => {
            let username = service.require_user()?.username.clone();
            if !yes && !confirm(&format!("Really delete account '{username}' and all its data?"))? {
                println!("Aborted.");
                return Ok(());
            }
            match service.delete_account() {
                Ok(()) => println!("Account '{username}' deleted."),
                Err(e) => bail!("Error deleting account: {}", e),
            }
        }

        // --- Catalog Commands ---
        cli::Commands::ListExercises { type_, muscle } => {
            let exercises: Vec<&Exercise> = match (type_, muscle) {
                (_, Some(muscle_str)) => {
                    let group = MuscleGroup::from_str(muscle_str.trim().to_lowercase().as_str())
                        .map_err(|_| anyhow::anyhow!("Unknown muscle group: '{muscle_str}'"))?;
                    let mut found = catalog::by_muscle_group(group);
                    if let Some(t) = type_ {
                        let t = cli_type_to_catalog_type(t);
                        found.retain(|ex| ex.type_ == t);
                    }
                    found
                }
                (Some(t), None) => catalog::by_type(cli_type_to_catalog_type(t)),
                (None, None) => catalog::all().iter().collect(),
            };
            if export_csv {
                print_catalog_csv(&exercises, service.config.language)?;
            } else {
                print_catalog_table(&exercises, header_color, service.config.language);
            }
        }
        cli::Commands::SearchExercises { term } => {
            let exercises = catalog::search(term.trim());
            if exercises.is_empty() {
                println!("No exercises match '{}'.", term.trim());
            } else if export_csv {
                print_catalog_csv(&exercises, service.config.language)?;
            } else {
                print_catalog_table(&exercises, header_color, service.config.language);
            }
        }

        // --- Active Workout ---
        cli::Commands::Start => {
            service.require_user()?;
            run_active_workout(&service, header_color)?;
        }

        // --- History ---
        cli::Commands::History { limit, session } => {
            if let Some(session_id) = session {
                let details = service.session_detail(session_id)?;
                if details.is_empty() {
                    println!("No exercises recorded for session {session_id}.");
                } else {
                    print_session_detail(&details, header_color, service.config.units);
                }
            } else {
                let sessions = service.list_sessions(Some(limit))?;
                if sessions.is_empty() {
                    println!("No workout sessions recorded yet.");
                } else if export_csv {
                    print_history_csv(&sessions)?;
                } else {
                    print_history_table(&sessions, header_color);
                }
            }
        }

        // --- Goals ---
        cli::Commands::AddGoal { title, target, unit, date } => {
            match service.add_goal(&title, target, &unit, date) {
                Ok(id) => println!("Goal '{}' created (ID: {id}).", title.trim()),
                Err(e) => bail!("Error creating goal: {}", e),
            }
        }
        cli::Commands::ListGoals => {
            let goals = service.list_goals()?;
            if goals.is_empty() {
                println!("No goals yet. Add one with 'add-goal'.");
            } else if export_csv {
                print_goal_csv(&goals)?;
            } else {
                print_goal_table(&goals, header_color);
            }
        }
        cli::Commands::UpdateGoal { id, title, target, current, unit, date, completed } => {
            let update = GoalUpdate {
                title,
                target_value: target,
                current_value: current,
                unit,
                target_date: date,
                completed,
            };
            match service.update_goal(id, update) {
                Ok(()) => println!("Goal ID {id} updated."),
                Err(e) => bail!("Error updating goal ID {}: {}", id, e),
            }
        }
        cli::Commands::DeleteGoal { id } => match service.delete_goal(id) {
            Ok(_) => println!("Goal ID {id} deleted."),
            Err(e) => bail!("Error deleting goal ID {}: {}", id, e),
        },

        // --- Statistics ---
        cli::Commands::Stats => {
            let stats = service.workout_stats()?;
            print_stats(&stats);
        }

        // --- Config/Path Commands ---
        cli::Commands::SetUnits { units } => {
            let units = match units {
                cli::UnitsCli::Metric => Units::Metric,
                cli::UnitsCli::Imperial => Units::Imperial,
            };
            match service.set_units(units) {
                Ok(()) => {
                    println!("Successfully set default units to: {units:?}");
                    println!("Config file updated: {:?}", service.get_config_path());
                }
                Err(e) => bail!("Error setting units: {}", e),
            }
        }
        cli::Commands::SetLanguage { language } => {
            let language = match language {
                cli::LanguageCli::English => Language::English,
                cli::LanguageCli::Swedish => Language::Swedish,
            };
            match service.set_language(language) {
                Ok(()) => {
                    println!("Successfully set display language to: {language:?}");
                    println!("Config file updated: {:?}", service.get_config_path());
                }
                Err(e) => bail!("Error setting language: {}", e),
            }
        }
        cli::Commands::DbPath => {
            println!("Database file is located at: {:?}", service.get_db_path());
        }
        cli::Commands::ConfigPath => {
            println!("Config file is located at: {:?}", service.get_config_path());
        }
    }

    Ok(())
}

// --- CLI Specific Helper Functions ---

fn cli_type_to_catalog_type(cli_type: cli::ExerciseTypeCli) -> ExerciseType {
    match cli_type {
        cli::ExerciseTypeCli::Compound => ExerciseType::Compound,
        cli::ExerciseTypeCli::Isolation => ExerciseType::Isolation,
        cli::ExerciseTypeCli::Cardio => ExerciseType::Cardio,
        cli::ExerciseTypeCli::Stretching => ExerciseType::Stretching,
    }
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} (y/N): ");
    stdout().flush()?;
    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// The interactive session: a picker over the catalog feeding an in-memory
/// active workout, which is written to the store on 'finish'.
fn run_active_workout(service: &AppService, header_color: Color) -> Result<()> {
    let language = service.config.language;
    let units = service.config.units;
    let mut picker = ExercisePicker::new(SelectionMode::Multi);
    let mut workout = ActiveWorkout::new();
    let started = Instant::now();

    println!("Active workout started. Type 'help' for commands, 'finish' to save.");
    loop {
        print!("workout> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            println!("\nWorkout discarded.");
            return Ok(());
        }
        let line = line.trim();
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let result: Result<()> = match cmd {
            "" => Ok(()),
            "help" => {
                print_workout_help();
                Ok(())
            }
            "search" => {
                picker.set_search(rest);
                print_picker_list(&picker, header_color, language);
                Ok(())
            }
            "type" => match rest {
                "none" => {
                    picker.set_type_filter(None);
                    print_picker_list(&picker, header_color, language);
                    Ok(())
                }
                _ => match ExerciseType::from_str(rest.to_lowercase().as_str()) {
                    Ok(t) => {
                        picker.set_type_filter(Some(t));
                        print_picker_list(&picker, header_color, language);
                        Ok(())
                    }
                    Err(_) => {
                        println!("Unknown type '{rest}'. One of: compound, isolation, cardio, stretching, none.");
                        Ok(())
                    }
                },
            },
            "clear" => {
                picker.clear_filters();
                print_picker_list(&picker, header_color, language);
                Ok(())
            }
            "list" => {
                print_picker_list(&picker, header_color, language);
                Ok(())
            }
            "pick" => match catalog::by_id(rest) {
                Some(exercise) => match picker.toggle(exercise) {
                    Ok(()) => {
                        let ids: Vec<&str> = picker.selection().iter().map(|ex| ex.id).collect();
                        println!("Selection: {}", if ids.is_empty() { "-".to_string() } else { ids.join(", ") });
                        Ok(())
                    }
                    Err(e) => {
                        println!("{e}");
                        Ok(())
                    }
                },
                None => {
                    println!("No exercise with id '{rest}'. Use 'list' to see ids.");
                    Ok(())
                }
            },
            "add" => {
                if picker.selection().is_empty() {
                    // Same guard the app surfaces when confirming with nothing picked
                    println!("Pick an exercise first ('pick <id>').");
                    Ok(())
                } else {
                    for exercise in picker.take_selection() {
                        workout.add_exercise(Some(exercise))?;
                        println!("Added '{}' with 1 set.", exercise.name);
                    }
                    Ok(())
                }
            }
            "show" => {
                print_active_workout(&workout, header_color, units);
                Ok(())
            }
            "set" => with_index(rest, workout.exercises.len(), |ex| {
                workout.add_set(ex).map_err(Into::into)
            }),
            "reps" | "weight" => {
                let field = if cmd == "reps" { SetField::Reps } else { SetField::Weight };
                match parse_set_ref(rest) {
                    Some((ex, set, value)) => {
                        match workout.update_set_field(ex, set, field, value) {
                            Ok(()) => Ok(()),
                            Err(e) => {
                                println!("{e}");
                                Ok(())
                            }
                        }
                    }
                    None => {
                        println!("Usage: {cmd} <exercise#> <set#> <value>");
                        Ok(())
                    }
                }
            }
            "done" => match parse_two_indices(rest) {
                Some((ex, set)) => match workout.toggle_set_completion(ex, set) {
                    Ok(()) => Ok(()),
                    Err(e) => {
                        println!("{e}");
                        Ok(())
                    }
                },
                None => {
                    println!("Usage: done <exercise#> <set#>");
                    Ok(())
                }
            },
            "drop" => with_index(rest, workout.exercises.len(), |ex| {
                let name = workout.exercises[ex].exercise.name;
                workout.remove_exercise(ex)?;
                println!("Removed '{name}'.");
                Ok(())
            }),
            "finish" => {
                let summary = workout.summary();
                if workout.is_empty() {
                    println!("Nothing to save; add an exercise first (or 'quit' to leave).");
                    Ok(())
                } else if confirm(&format!(
                    "You completed {} of {} sets. Finish the workout?",
                    summary.completed_sets, summary.total_sets
                ))? {
                    let duration_minutes = (started.elapsed().as_secs() / 60) as i64;
                    let session_id = service.start_workout_session()?;
                    let saved = service.finish_workout(session_id, &workout, duration_minutes)?;
                    println!(
                        "Workout saved (session ID {session_id}): {} sets, {} completed, {duration_minutes} min.",
                        saved.total_sets, saved.completed_sets
                    );
                    return Ok(());
                } else {
                    Ok(())
                }
            }
            "quit" => {
                println!("Workout discarded.");
                return Ok(());
            }
            _ => {
                println!("Unknown command '{cmd}'. Type 'help'.");
                Ok(())
            }
        };
        result?;
    }
}

fn print_workout_help() {
    println!("Picker:");
    println!("  search <text>        filter catalog by name ('search' alone clears the text)");
    println!("  type <t|none>        filter by type (compound/isolation/cardio/stretching)");
    println!("  clear                reset search and type filter");
    println!("  list                 show the filtered catalog");
    println!("  pick <id>            toggle an exercise in the selection");
    println!("Workout:");
    println!("  add                  add the selected exercises (1 set each)");
    println!("  show                 show the current workout");
    println!("  set <ex#>            add a set to an exercise");
    println!("  reps <ex#> <set#> <n>    set reps (whole number)");
    println!("  weight <ex#> <set#> <n>  set weight");
    println!("  done <ex#> <set#>    toggle set completion");
    println!("  drop <ex#>           remove an exercise and its sets");
    println!("  finish               save the workout / quit: discard it");
}

/// Parses a 1-based index argument and runs `f` with the 0-based index.
fn with_index(arg: &str, len: usize, f: impl FnOnce(usize) -> Result<()>) -> Result<()> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => f(n - 1),
        _ => {
            println!("Expected an exercise number between 1 and {len}.");
            Ok(())
        }
    }
}

fn parse_two_indices(rest: &str) -> Option<(usize, usize)> {
    let mut parts = rest.split_whitespace();
    let ex = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
    let set = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
    Some((ex, set))
}

fn parse_set_ref(rest: &str) -> Option<(usize, usize, &str)> {
    let mut parts = rest.splitn(3, ' ');
    let ex = parts.next()?.trim().parse::<usize>().ok()?.checked_sub(1)?;
    let set = parts.next()?.trim().parse::<usize>().ok()?.checked_sub(1)?;
    let value = parts.next()?.trim();
    Some((ex, set, value))
}

// --- Table Printing Functions (Remain in CLI) ---

fn muscles_label(muscles: &[MuscleGroup], language: Language) -> String {
    muscles
        .iter()
        .map(|m| m.display_name(language))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints catalog exercises in a formatted table.
fn print_catalog_table(exercises: &[&Exercise], header_color: Color, language: Language) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(header_color),
            Cell::new("Name").fg(header_color),
            Cell::new("Type").fg(header_color),
            Cell::new("Primary").fg(header_color),
            Cell::new("Secondary").fg(header_color),
            Cell::new("Equipment").fg(header_color),
        ]);

    for exercise in exercises {
        let secondary = muscles_label(exercise.secondary_muscles, language);
        table.add_row(vec![
            Cell::new(exercise.id),
            Cell::new(exercise.name),
            Cell::new(exercise.type_.to_string()),
            Cell::new(muscles_label(exercise.primary_muscles, language)),
            Cell::new(if secondary.is_empty() { "-".to_string() } else { secondary }),
            Cell::new(exercise.equipment.join(", ")),
        ]);
    }
    println!("{table}");
}

fn print_catalog_csv(exercises: &[&Exercise], language: Language) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["ID", "Name", "Type", "Primary", "Secondary", "Equipment"])?;
    for exercise in exercises {
        writer.write_record(&[
            exercise.id.to_string(),
            exercise.name.to_string(),
            exercise.type_.to_string(),
            muscles_label(exercise.primary_muscles, language),
            muscles_label(exercise.secondary_muscles, language),
            exercise.equipment.join(", "),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_picker_list(picker: &ExercisePicker, header_color: Color, language: Language) {
    let filtered = picker.filtered();
    if filtered.is_empty() {
        println!("No exercises match the current filters.");
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("").fg(header_color),
            Cell::new("ID").fg(header_color),
            Cell::new("Name").fg(header_color),
            Cell::new("Type").fg(header_color),
            Cell::new("Primary").fg(header_color),
        ]);
    for exercise in filtered {
        table.add_row(vec![
            Cell::new(if picker.is_selected(exercise) { "*" } else { "" }),
            Cell::new(exercise.id),
            Cell::new(exercise.name),
            Cell::new(exercise.type_.to_string()),
            Cell::new(muscles_label(exercise.primary_muscles, language)),
        ]);
    }
    println!("{table}");
}

fn print_active_workout(workout: &ActiveWorkout, header_color: Color, units: Units) {
    if workout.is_empty() {
        println!("No exercises added yet.");
        return;
    }
    let summary = workout.summary();
    println!(
        "{} exercise(s), {} set(s), {} completed",
        workout.exercises.len(),
        summary.total_sets,
        summary.completed_sets
    );
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Ex#").fg(header_color),
            Cell::new("Exercise").fg(header_color),
            Cell::new("Set").fg(header_color),
            Cell::new("Reps").fg(header_color),
            Cell::new(format!("Weight ({})", units.weight_label())).fg(header_color),
            Cell::new("Done").fg(header_color),
        ]);
    for (ex_idx, entry) in workout.exercises.iter().enumerate() {
        for set in &entry.sets {
            table.add_row(vec![
                Cell::new((ex_idx + 1).to_string()),
                Cell::new(entry.exercise.name),
                Cell::new(set.set_number.to_string()),
                Cell::new(set.reps.to_string()),
                Cell::new(format!("{:.1}", set.weight)),
                Cell::new(if set.completed { "✓" } else { "" }),
            ]);
        }
    }
    println!("{table}");
}

fn print_history_table(sessions: &[WorkoutSession], header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(header_color),
            Cell::new("Started (UTC)").fg(header_color),
            Cell::new("Ended (UTC)").fg(header_color),
            Cell::new("Duration (min)").fg(header_color),
        ]);
    for session in sessions {
        table.add_row(vec![
            Cell::new(session.id.to_string()),
            Cell::new(session.started_at.format("%Y-%m-%d %H:%M").to_string()),
            Cell::new(
                session
                    .ended_at
                    .map_or("-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string()),
            ),
            Cell::new(session.total_duration.map_or("-".to_string(), |d| d.to_string())),
        ]);
    }
    println!("{table}");
}

fn print_history_csv(sessions: &[WorkoutSession]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["ID", "Started_UTC", "Ended_UTC", "Duration_min"])?;
    for session in sessions {
        writer.write_record(&[
            session.id.to_string(),
            session.started_at.to_rfc3339(),
            session.ended_at.map_or(String::new(), |t| t.to_rfc3339()),
            session.total_duration.map_or(String::new(), |d| d.to_string()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_session_detail(
    details: &[tompa_training_lib::SessionExerciseDetail],
    header_color: Color,
    units: Units,
) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Exercise").fg(header_color),
            Cell::new("Set").fg(header_color),
            Cell::new("Reps").fg(header_color),
            Cell::new(format!("Weight ({})", units.weight_label())).fg(header_color),
            Cell::new("Done").fg(header_color),
        ]);
    for detail in details {
        for set in &detail.sets {
            table.add_row(vec![
                Cell::new(&detail.record.exercise_name),
                Cell::new(set.set_number.to_string()),
                Cell::new(set.reps.to_string()),
                Cell::new(format!("{:.1}", set.weight)),
                Cell::new(if set.completed { "✓" } else { "" }),
            ]);
        }
    }
    println!("{table}");
}

fn print_goal_table(goals: &[UserGoal], header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(header_color),
            Cell::new("Title").fg(header_color),
            Cell::new("Progress").fg(header_color),
            Cell::new("Target Date").fg(header_color),
            Cell::new("Done").fg(header_color),
        ]);
    for goal in goals {
        table.add_row(vec![
            Cell::new(goal.id.to_string()),
            Cell::new(&goal.title),
            Cell::new(format!(
                "{:.1} / {:.1} {}",
                goal.current_value, goal.target_value, goal.unit
            )),
            Cell::new(
                goal.target_date
                    .map_or("-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
            ),
            Cell::new(if goal.completed { "✓" } else { "" }),
        ]);
    }
    println!("{table}");
}

fn print_goal_csv(goals: &[UserGoal]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["ID", "Title", "Current", "Target", "Unit", "Target_Date", "Completed"])?;
    for goal in goals {
        writer.write_record(&[
            goal.id.to_string(),
            goal.title.clone(),
            format!("{:.2}", goal.current_value),
            format!("{:.2}", goal.target_value),
            goal.unit.clone(),
            goal.target_date
                .map_or(String::new(), |d| d.format("%Y-%m-%d").to_string()),
            goal.completed.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_stats(stats: &WorkoutStats) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Total Workouts").add_attribute(Attribute::Bold),
        Cell::new(stats.total_workouts.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Total Sets").add_attribute(Attribute::Bold),
        Cell::new(stats.total_sets.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Total Minutes").add_attribute(Attribute::Bold),
        Cell::new(stats.total_minutes.to_string()),
    ]);
    println!("{table}");
}

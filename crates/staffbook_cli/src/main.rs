//! Staffbook command-line entry point.
//!
//! # Responsibility
//! - Map subcommands onto shell navigation, form submission and deletion.
//! - Print screens as text or JSON.
//!
//! # Invariants
//! - Failures print the typed error to stderr and exit with status 1.
//! - File logging starts only when a log directory is configured.
//! - Records persist to a database file unless `--in-memory` is given.

mod render;

use clap::{Args, Parser, Subcommand};
use log::info;
use staffbook_core::config::{DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
use staffbook_core::{
    init_logging, open_location, AppConfig, Confirm, DeleteOutcome, DepartmentFilter, EmployeeFilter,
    EmployeeForm, EmployeeId, EmployeeStore, FormError, FormField, KeyValueStore, LoggingError,
    RouteId, Screen, Shell, ShellError, StatusFilter, StorageError, StorageLocation, StoreError,
    DEFAULT_STORAGE_KEY,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

type CliStore = EmployeeStore<Box<dyn KeyValueStore>>;

#[derive(Debug, Parser)]
#[command(name = "staffbook", version, about = "Employee records manager")]
struct Cli {
    /// SQLite database file; defaults to `staffbook.sqlite3` in the temp dir.
    #[arg(long, global = true, env = DB_PATH_ENV, value_name = "FILE")]
    db: Option<PathBuf>,

    /// Keep records in memory only; overrides `--db`, nothing is saved between runs.
    #[arg(long, global = true)]
    in_memory: bool,

    /// Storage key holding the employee collection.
    #[arg(long, global = true, default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = LOG_LEVEL_ENV)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, global = true, env = LOG_DIR_ENV, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Print views as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn config(&self) -> AppConfig {
        let defaults = AppConfig::default();
        AppConfig {
            storage: match (&self.db, self.in_memory) {
                (_, true) => StorageLocation::InMemory,
                (Some(path), false) => StorageLocation::File(path.clone()),
                (None, false) => StorageLocation::default_file(),
            },
            storage_key: self.key.clone(),
            log_level: self.log_level.clone().unwrap_or(defaults.log_level),
            log_dir: self.log_dir.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the screen for a route path such as `/dashboard`.
    Show { path: String },
    /// List employees with optional search and filters.
    List(ListArgs),
    /// Add an employee.
    Add(EmployeeFields),
    /// Edit an employee; omitted fields keep their current values.
    Edit {
        id: EmployeeId,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Delete an employee after confirmation.
    Delete {
        id: EmployeeId,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Case-insensitive match on name, email or position.
    #[arg(long, default_value = "")]
    search: String,
    /// `all`, `active` or `inactive`.
    #[arg(long, default_value = "all")]
    status: StatusFilter,
    /// `all` or a department name.
    #[arg(long, default_value = "all")]
    department: DepartmentFilter,
}

#[derive(Debug, Clone, Default, Args)]
struct EmployeeFields {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    position: Option<String>,
    /// `YYYY-MM-DD`.
    #[arg(long)]
    hire_date: Option<String>,
    #[arg(long)]
    salary: Option<String>,
    #[arg(long)]
    address: Option<String>,
}

impl EmployeeFields {
    fn apply(self, form: &mut EmployeeForm) {
        let fields = [
            (FormField::FirstName, self.first_name),
            (FormField::LastName, self.last_name),
            (FormField::Email, self.email),
            (FormField::Phone, self.phone),
            (FormField::Department, self.department),
            (FormField::Position, self.position),
            (FormField::HireDate, self.hire_date),
            (FormField::Salary, self.salary),
            (FormField::Address, self.address),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                form.set(field, value);
            }
        }
    }
}

#[derive(Debug)]
enum CliError {
    Logging(LoggingError),
    Storage(StorageError),
    Store(StoreError),
    Form(FormError),
    Shell(ShellError),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "logging setup failed: {err}"),
            Self::Storage(err) => write!(f, "cannot open storage: {err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Form(err) => write!(f, "{err}"),
            Self::Shell(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "cannot encode output: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Form(err) => Some(err),
            Self::Shell(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<StorageError> for CliError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<FormError> for CliError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<ShellError> for CliError {
    fn from(value: ShellError) -> Self {
        Self::Shell(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Asks on stderr and reads a `y`/`yes` answer from stdin.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        if std::io::stderr().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config();
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let storage = open_location(&config.storage)?;
    let store = EmployeeStore::load(storage, config.storage_key.clone())?;
    info!(
        "event=cli_start module=cli status=ok command={} count={}",
        command_label(&cli.command),
        store.len()
    );

    let json = cli.json;
    match cli.command {
        Command::Show { path } => {
            let screen = Shell::new(store).navigate(&path);
            print_screen(&screen, json)
        }
        Command::List(args) => {
            let mut shell = Shell::new(store);
            shell.navigate("/employees");
            let filter = EmployeeFilter::new(args.search, args.status, args.department);
            print_screen(&shell.set_list_filter(filter), json)
        }
        Command::Add(fields) => submit(store, None, fields, json),
        Command::Edit { id, fields } => submit(store, Some(id), fields, json),
        Command::Delete { id, yes } => delete(store, id, yes, json),
    }
}

fn submit(
    mut store: CliStore,
    id: Option<EmployeeId>,
    fields: EmployeeFields,
    json: bool,
) -> Result<(), CliError> {
    let mut form = EmployeeForm::open(&store, id.map(RouteId::from));
    if let (Some(id), false) = (id, form.prefilled()) {
        eprintln!("warning: employee {id} not found; nothing will be updated");
    }
    fields.apply(&mut form);

    let submission = form.submit(&mut store)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&submission)?);
        return Ok(());
    }
    match (id, submission.employee_id) {
        (None, Some(created)) => println!("Added employee {created}."),
        (Some(_), Some(updated)) if form.prefilled() => println!("Updated employee {updated}."),
        _ => {}
    }
    print_screen(&Shell::new(store).go(submission.navigate_to), false)
}

fn delete(store: CliStore, id: EmployeeId, yes: bool, json: bool) -> Result<(), CliError> {
    let mut shell = Shell::new(store);
    let (outcome, _) = if yes {
        shell.delete_employee(id, &mut |_: &str| true)?
    } else {
        shell.delete_employee(id, &mut StdinConfirm)?
    };

    if json {
        println!("{}", serde_json::json!({ "id": id, "outcome": outcome }));
        return Ok(());
    }
    match outcome {
        DeleteOutcome::Deleted => println!("Deleted employee {id}."),
        DeleteOutcome::Declined => println!("Delete cancelled."),
        DeleteOutcome::NotFound => println!("Employee not found"),
    }
    Ok(())
}

fn print_screen(screen: &Screen, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(screen)?);
    } else {
        print!("{}", render::screen_text(screen));
    }
    Ok(())
}

fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Show { .. } => "show",
        Command::List(_) => "list",
        Command::Add(_) => "add",
        Command::Edit { .. } => "edit",
        Command::Delete { .. } => "delete",
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Cli, Command};
    use clap::Parser;
    use staffbook_core::{
        Department, DepartmentFilter, EmployeeStore, SqliteKeyValueStore, StatusFilter,
        StorageLocation,
    };
    use std::path::PathBuf;

    #[test]
    fn list_filters_parse_select_values() {
        let cli = Cli::parse_from([
            "staffbook",
            "list",
            "--status",
            "inactive",
            "--department",
            "HR",
        ]);
        let Command::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(
            args.status,
            StatusFilter::Only(staffbook_core::EmployeeStatus::Inactive)
        );
        assert_eq!(args.department, DepartmentFilter::Only(Department::Hr));
        assert!(args.search.is_empty());
    }

    #[test]
    fn unknown_department_is_rejected() {
        assert!(Cli::try_parse_from(["staffbook", "list", "--department", "Legal"]).is_err());
    }

    #[test]
    fn global_flags_build_config() {
        let cli = Cli::parse_from([
            "staffbook",
            "show",
            "/",
            "--db",
            "/tmp/staffbook-test.sqlite3",
            "--key",
            "people",
            "--log-level",
            "warn",
        ]);
        let config = cli.config();
        assert_eq!(
            config.storage,
            StorageLocation::File(PathBuf::from("/tmp/staffbook-test.sqlite3"))
        );
        assert_eq!(config.storage_key, "people");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn edit_collects_only_supplied_fields() {
        let cli = Cli::parse_from(["staffbook", "edit", "3", "--position", "Lead"]);
        let Command::Edit { id, fields } = cli.command else {
            panic!("expected edit command");
        };
        assert_eq!(id, 3);
        assert_eq!(fields.position.as_deref(), Some("Lead"));
        assert!(fields.first_name.is_none());
    }

    #[test]
    fn storage_defaults_to_a_database_file() {
        let cli = Cli::parse_from(["staffbook", "list"]);
        assert!(matches!(cli.config().storage, StorageLocation::File(_)));

        let cli = Cli::parse_from(["staffbook", "list", "--in-memory"]);
        assert_eq!(cli.config().storage, StorageLocation::InMemory);
    }

    #[test]
    fn added_employee_is_visible_to_the_next_run() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("staffbook.sqlite3");
        let db_arg = db.to_str().unwrap();

        run(Cli::parse_from([
            "staffbook",
            "--db",
            db_arg,
            "add",
            "--first-name",
            "Ann",
            "--last-name",
            "Lee",
            "--email",
            "a@x.com",
            "--phone",
            "555",
            "--department",
            "Sales",
            "--position",
            "Rep",
            "--hire-date",
            "2024-01-01",
            "--salary",
            "50000",
        ]))
        .unwrap();
        run(Cli::parse_from(["staffbook", "--db", db_arg, "delete", "4", "--yes"])).unwrap();

        let store = EmployeeStore::load(SqliteKeyValueStore::open(&db).unwrap(), "employees").unwrap();
        assert_eq!(store.len(), 5);
        assert!(store.employees().iter().any(|employee| employee.full_name() == "Ann Lee"));
        assert!(store.get_by_id(4).is_none());
    }
}

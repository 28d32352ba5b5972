//! HabitKit Android CLI
//!
//! Build configuration tools for the HabitKit Android app.

mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use habitkit_android::error::exit_codes;
use habitkit_android::project::ProjectConfig;
use habitkit_android::signing::{
    self, SigningDecision, KEY_PROPERTIES_FILE,
};
use output::{mask, Status};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "habitkit-android")]
#[command(about = "Build configuration tools for the HabitKit Android app")]
#[command(version)]
struct Cli {
    /// Project root directory
    #[arg(long, default_value = ".", global = true)]
    project_dir: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect release signing configuration
    Signing {
        #[command(subcommand)]
        action: SigningAction,
    },

    /// Show the assembled project configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Diagnose the project's build configuration
    Doctor,
}

#[derive(Subcommand)]
enum SigningAction {
    /// Resolve the release signing decision from key.properties
    Resolve {
        /// Path to the properties file (defaults to <project-dir>/key.properties)
        #[arg(long)]
        properties: Option<PathBuf>,
        /// Output as JSON (includes unmasked credentials)
        #[arg(long)]
        json: bool,
    },
    /// Verify that signing material is complete and present on disk
    Verify {
        /// Path to the properties file (defaults to <project-dir>/key.properties)
        #[arg(long)]
        properties: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the release/debug configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let exit_code = match cli.command {
        Commands::Signing { action } => match action {
            SigningAction::Resolve { properties, json } => {
                run_resolve(&properties_path(&cli.project_dir, properties), json)
            }
            SigningAction::Verify { properties } => {
                run_verify(&cli.project_dir, &properties_path(&cli.project_dir, properties))
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => run_config_show(&cli.project_dir, json),
        },
        Commands::Doctor => run_doctor(&cli.project_dir),
    };

    std::process::exit(exit_code);
}

fn properties_path(project_dir: &Path, properties: Option<PathBuf>) -> PathBuf {
    properties.unwrap_or_else(|| project_dir.join(KEY_PROPERTIES_FILE))
}

fn run_resolve(properties: &Path, json: bool) -> i32 {
    let decision = match signing::resolve_release_signing(properties) {
        Ok(decision) => decision,
        Err(e) => {
            Status::error(&format!("Resolution failed: {}", e));
            return exit_codes::CONFIG_ERROR;
        }
    };

    if json {
        match serde_json::to_string_pretty(&decision) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                Status::error(&format!("JSON output failed: {}", e));
                return exit_codes::FAILURE;
            }
        }
        return exit_codes::SUCCESS;
    }

    match &decision {
        SigningDecision::Signed(creds) => {
            Status::success("Release builds will be signed");
            Status::field("keyAlias", &creds.key_alias);
            Status::field("storeFile", &creds.store_file);
            Status::field("keyPassword", mask(&creds.key_password));
            Status::field("storePassword", mask(&creds.store_password));
        }
        SigningDecision::Unsigned(reason) => {
            Status::warning(&format!(
                "Release builds will be unsigned: {}",
                reason.describe()
            ));
        }
    }

    exit_codes::SUCCESS
}

fn run_verify(project_dir: &Path, properties: &Path) -> i32 {
    let decision = match signing::resolve_release_signing(properties) {
        Ok(decision) => decision,
        Err(e) => {
            Status::error(&format!("Resolution failed: {}", e));
            return exit_codes::CONFIG_ERROR;
        }
    };

    let creds = match &decision {
        SigningDecision::Signed(creds) => creds,
        SigningDecision::Unsigned(reason) => {
            Status::error(&format!("No signing configuration: {}", reason.describe()));
            return exit_codes::FAILURE;
        }
    };

    let check = signing::check_keystore(project_dir, creds);

    let report = |name: &str, set: bool| {
        if set {
            Status::success(&format!("{}: set", name));
        } else {
            Status::error(&format!("{}: missing", name));
        }
    };
    report("keyAlias", check.key_alias_set);
    report("keyPassword", check.key_password_set);
    report("storePassword", check.store_password_set);

    if check.store_file_exists {
        Status::success(&format!("keystore: {}", check.store_file));
    } else {
        Status::error(&format!("keystore not found: {}", check.store_file));
    }

    if check.is_ready() {
        Status::success("Signing material verified");
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    }
}

fn run_config_show(project_dir: &Path, json: bool) -> i32 {
    let config = match ProjectConfig::resolve(project_dir) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&format!("Configuration failed: {}", e));
            return exit_codes::CONFIG_ERROR;
        }
    };

    if json {
        match config.to_json() {
            Ok(out) => {
                println!("{}", out);
                return exit_codes::SUCCESS;
            }
            Err(e) => {
                Status::error(&format!("JSON output failed: {}", e));
                return exit_codes::FAILURE;
            }
        }
    }

    Status::info("Default config");
    Status::field("applicationId", &config.default_config.application_id);
    Status::field("minSdk", &config.default_config.min_sdk.to_string());
    Status::field("targetSdk", &config.default_config.target_sdk.to_string());
    Status::field("compileSdk", &config.default_config.compile_sdk.to_string());
    Status::field("versionName", &config.default_config.version_name);
    Status::field("ndkVersion", &config.ndk_version);

    Status::info("Compile options");
    Status::field(
        "javaCompatibility",
        &config.compile_options.source_compatibility.to_string(),
    );
    Status::field(
        "desugaring",
        if config.compile_options.core_library_desugaring {
            config.desugaring_dependency.as_str()
        } else {
            "disabled"
        },
    );

    Status::info("Build types");
    Status::field(
        "release",
        if config.release.signing.is_some() {
            "signed"
        } else {
            "unsigned"
        },
    );
    Status::field("debug", "unsigned");

    exit_codes::SUCCESS
}

fn run_doctor(project_dir: &Path) -> i32 {
    println!("Build Configuration Check");
    println!();

    let properties = project_dir.join(KEY_PROPERTIES_FILE);
    if properties.exists() {
        Status::success("key.properties: present");
    } else {
        Status::warning("key.properties: not found (release builds stay unsigned)");
    }

    match signing::resolve_release_signing(&properties) {
        Ok(SigningDecision::Signed(creds)) => {
            Status::success(&format!("signing: resolved for alias '{}'", creds.key_alias));

            let check = signing::check_keystore(project_dir, &creds);
            if check.store_file_exists {
                Status::success(&format!("keystore: {}", check.store_file));
            } else {
                Status::warning(&format!("keystore missing on disk: {}", check.store_file));
            }
        }
        Ok(SigningDecision::Unsigned(reason)) => {
            Status::warning(&format!("signing: {}", reason.describe()));
        }
        Err(e) => {
            Status::error(&format!("signing: {}", e));
            return exit_codes::CONFIG_ERROR;
        }
    }

    exit_codes::SUCCESS
}

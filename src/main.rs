// src/main.rs
//! credvault command-line interface

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rpassword::read_password;
use tracing_subscriber::EnvFilter;

use credvault::config::Config;
use credvault::consts::DEFAULT_MASTER_PASSWORD;
use credvault::{
    export_selected_to_csv, export_to_csv, import_from_csv, CredentialRecord, MasterPassword,
    RecordUpdate, SessionPolicy, VaultManager, VaultStore,
};

#[derive(Parser)]
#[command(name = "credvault", version, about = "Encrypted credential vault")]
struct Cli {
    /// Vault file (defaults to the configured path)
    #[arg(short = 'f', long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new empty vault
    Init {
        /// Replace an existing vault file
        #[arg(long)]
        force: bool,
    },
    /// Add a record (prompts for anything required that is missing)
    Add {
        name: String,
        #[arg(long)]
        account: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        remark: String,
    },
    /// Show one record, password included
    Show { name: String },
    /// Update fields of a record
    Update {
        name: String,
        #[arg(long)]
        account: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        remark: Option<String>,
    },
    /// Delete a record
    Rm {
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List record names, sorted
    List,
    /// Export records to a plaintext CSV file
    Export {
        path: PathBuf,
        /// Export only these records
        #[arg(long = "only", value_name = "NAME")]
        only: Vec<String>,
    },
    /// Import records from a CSV file
    Import { path: PathBuf },
    /// Change the master password
    ChangeMaster,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let conf = credvault::load_config();

    let vault_file = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&conf.paths.vault_file));
    let store = VaultStore::new(&vault_file).with_kdf_iterations(conf.security.kdf_iterations);

    if let Command::Init { force } = &cli.command {
        return cmd_init(&store, *force);
    }

    let mut manager = VaultManager::with_policy(
        store,
        SessionPolicy::from_secs(conf.security.session_timeout_secs),
    );
    unlock(&mut manager, conf)?;

    match cli.command {
        Command::Init { .. } => {} // handled before unlock

        Command::Add {
            name,
            account,
            password,
            email,
            phone,
            remark,
        } => {
            let account = match account {
                Some(account) => account,
                None => prompt_line("Account: ")?,
            };
            let password = match password {
                Some(password) => password,
                None => prompt_password("Password: ")?,
            };
            manager.add_record(
                &name,
                CredentialRecord {
                    account,
                    password,
                    email,
                    phone,
                    remark,
                },
            )?;
            println!("Added '{name}'");
        }

        Command::Show { name } => {
            let record = manager.record(&name)?;
            println!("product:  {name}");
            println!("account:  {}", record.account);
            println!("password: {}", record.password);
            if !record.email.is_empty() {
                println!("email:    {}", record.email);
            }
            if !record.phone.is_empty() {
                println!("phone:    {}", record.phone);
            }
            if !record.remark.is_empty() {
                println!("remark:   {}", record.remark);
            }
        }

        Command::Update {
            name,
            account,
            password,
            email,
            phone,
            remark,
        } => {
            let update = RecordUpdate {
                account,
                password,
                email,
                phone,
                remark,
            };
            let unchanged = update.is_empty();
            manager.update_record(&name, update)?;
            if unchanged {
                println!("No changes for '{name}'");
            } else {
                println!("Updated '{name}'");
            }
        }

        Command::Rm { name, yes } => {
            if !yes && !confirm(&format!("Delete '{name}'? [y/N] "))? {
                println!("Aborted");
                return Ok(());
            }
            manager.delete_record(&name)?;
            println!("Deleted '{name}'");
        }

        Command::List => {
            let names = manager.record_names()?;
            if names.is_empty() {
                println!("Vault is empty");
            } else {
                for (idx, name) in names.iter().enumerate() {
                    println!("{:>3}. {name}", idx + 1);
                }
                println!("{} record(s)", names.len());
            }
        }

        Command::Export { path, only } => {
            if !conf.features.allow_insecure_export {
                bail!("plaintext export is disabled (features.allow_insecure_export)");
            }
            let count = if only.is_empty() {
                export_to_csv(&mut manager, &path)?
            } else {
                export_selected_to_csv(&mut manager, &path, &only)?
            };
            println!("Exported {count} record(s) to {}", path.display());
            eprintln!("The export holds plaintext passwords. Delete it once it has served its purpose.");
        }

        Command::Import { path } => {
            let report = import_from_csv(&mut manager, &path)?;
            println!(
                "Imported {} record(s), skipped {}",
                report.imported, report.skipped
            );
            if !report.errors.is_empty() {
                println!("{} row(s) failed:", report.errors.len());
                for err in report.errors.iter().take(5) {
                    println!("  row {}: {}", err.row, err.reason);
                }
                if report.errors.len() > 5 {
                    println!("  ... and {} more", report.errors.len() - 5);
                }
            }
        }

        Command::ChangeMaster => {
            let new = read_new_master()?;
            manager.change_master_password(new)?;
            println!("Master password changed");
        }
    }

    Ok(())
}

fn cmd_init(store: &VaultStore, force: bool) -> Result<()> {
    if store.exists() {
        if !force {
            bail!(
                "vault already exists at {} (pass --force to replace it)",
                store.path().display()
            );
        }
        std::fs::remove_file(store.path())?;
    }
    let master = read_new_master()?;
    store.initialize(&master)?;
    println!("Vault created at {}", store.path().display());
    Ok(())
}

/// Bootstrap a missing vault when configured to, then authenticate
fn unlock(manager: &mut VaultManager, conf: &Config) -> Result<()> {
    if !manager.store().exists() && conf.features.bootstrap_default_master {
        let master = MasterPassword::new(DEFAULT_MASTER_PASSWORD.to_string());
        manager.store().initialize(&master)?;
        eprintln!(
            "Vault created at {} with the default master password.",
            manager.store().path().display()
        );
        eprintln!("Change it now with `credvault change-master`.");
    }
    let master = read_master("Master password: ")?;
    manager
        .authenticate(master)
        .with_context(|| format!("cannot unlock {}", manager.store().path().display()))?;
    Ok(())
}

/// `CREDVAULT_MASTER` wins over the interactive prompt
fn read_master(label: &str) -> Result<MasterPassword> {
    if let Ok(value) = std::env::var("CREDVAULT_MASTER") {
        return Ok(MasterPassword::new(value));
    }
    Ok(MasterPassword::new(prompt_password(label)?))
}

fn read_new_master() -> Result<MasterPassword> {
    let value = if let Ok(value) = std::env::var("CREDVAULT_NEW_MASTER") {
        value
    } else if let Ok(value) = std::env::var("CREDVAULT_MASTER") {
        value
    } else {
        let first = prompt_password("New master password: ")?;
        let second = prompt_password("Confirm new master password: ")?;
        if first != second {
            bail!("passwords do not match");
        }
        first
    };
    if value.is_empty() {
        bail!("master password must not be empty");
    }
    Ok(MasterPassword::new(value))
}

fn prompt_password(label: &str) -> Result<String> {
    eprint!("{label}");
    std::io::stderr().flush()?;
    Ok(read_password()?)
}

fn prompt_line(label: &str) -> Result<String> {
    eprint!("{label}");
    std::io::stderr().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn confirm(label: &str) -> Result<bool> {
    let answer = prompt_line(label)?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

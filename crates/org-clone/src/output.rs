use clone_core::{CloneTarget, SyncEvent, SyncReport};
use colored::Colorize;

/// Render a progress event as a status line
pub fn format_event(event: &SyncEvent) -> String {
    match event {
        SyncEvent::Skipped {
            folder,
            target: CloneTarget::Main,
        } => format!("Folder {} already exists, skipping clone.", folder.bold()),
        SyncEvent::Skipped {
            folder,
            target: CloneTarget::Wiki,
        } => format!("Folder {} already exists, skipping wiki clone.", folder.bold()),
        SyncEvent::Cloning {
            name,
            target: CloneTarget::Main,
        } => format!("Cloning {}...", name.cyan().bold()),
        SyncEvent::Cloning {
            name,
            target: CloneTarget::Wiki,
        } => format!("Cloning wiki for {}...", name.cyan().bold()),
        SyncEvent::DryRun { command } => {
            format!("{} {}", "[dry-run]".dimmed(), command.join(" ").dimmed())
        }
        SyncEvent::Failed {
            name,
            target,
            error,
        } => {
            let what = match target {
                CloneTarget::Main => "clone",
                CloneTarget::Wiki => "wiki clone",
            };
            format!("{}: {} of {} failed: {}", "Warning".yellow().bold(), what, name, error)
        }
    }
}

/// Failures go to stderr, everything else to stdout
pub fn print_event(event: &SyncEvent) {
    let line = format_event(event);
    match event {
        SyncEvent::Failed { .. } => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

pub fn print_found(count: usize) {
    println!("Found {} repositories.", count);
}

pub fn print_summary(report: &SyncReport) {
    if report.failed > 0 {
        eprintln!(
            "{}: {} clone(s) failed",
            "Warning".yellow().bold(),
            report.failed
        );
    }
    println!("Done.");
}

pub fn output_error(err: &anyhow::Error) {
    eprintln!("{}: {:#}", "Error".red().bold(), err);
}

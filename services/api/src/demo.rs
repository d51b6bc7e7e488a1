use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use classmix::config::AppConfig;
use classmix::error::AppError;
use classmix::roster::{GroupingRecord, GroupingRequest, GroupingService, SessionId};

use crate::infra::InMemoryGroupingStore;

#[derive(Args, Debug)]
pub(crate) struct GroupsArgs {
    /// File containing the name list (newline/comma/semicolon separated)
    #[arg(long, conflicts_with = "names")]
    names_file: Option<PathBuf>,
    /// Inline name list
    #[arg(long)]
    names: Option<String>,
    /// Names that must land in different groups
    #[arg(long, default_value = "")]
    separate: String,
    /// Desired number of students per group
    #[arg(long, default_value_t = 4)]
    group_size: usize,
    /// Seed for reproducible groups and colors
    #[arg(long)]
    seed: Option<u64>,
    /// Write the grouping as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Include each group's display color in the listing
    #[arg(long)]
    colors: bool,
}

pub(crate) fn run_groups(args: GroupsArgs) -> Result<(), AppError> {
    let GroupsArgs {
        names_file,
        names,
        separate,
        group_size,
        seed,
        csv,
        colors,
    } = args;

    let names_text = match (names_file, names) {
        (Some(path), _) => std::fs::read_to_string(path)?,
        (None, Some(inline)) => inline,
        (None, None) => {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "provide a roster via --names-file or --names",
            )))
        }
    };

    let config = AppConfig::load()?;
    let service = GroupingService::new(Arc::new(InMemoryGroupingStore::default()), config.roster);
    let session = SessionId("cli".to_string());

    let request = GroupingRequest {
        names_text,
        separation_text: separate,
        group_size,
        seed,
    };
    let record = service.generate(&session, &request)?;

    render_grouping(&record, colors);

    if let Some(path) = csv {
        let bytes = service.export_csv(&session)?;
        std::fs::write(&path, bytes)?;
        println!("\nWrote CSV export to {}", path.display());
    }

    Ok(())
}

fn render_grouping(record: &GroupingRecord, show_colors: bool) {
    let seed_note = match record.seed {
        Some(seed) => format!(" (seed {seed})"),
        None => String::new(),
    };
    println!("Random groups");
    println!(
        "{} groups for {} students{}",
        record.partition.group_count(),
        record.partition.member_count(),
        seed_note
    );

    for view in record.group_views() {
        let color_note = if show_colors {
            format!(" [{}]", view.color)
        } else {
            String::new()
        };
        println!("\nGroup {} ({} members){}", view.index, view.size, color_note);
        println!("  {}", view.members.join(", "));
    }
}

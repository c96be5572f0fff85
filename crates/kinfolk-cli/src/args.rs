//! Command-line argument definitions for the Kinfolk CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Every command reads a family snapshot JSON file; global
//! flags select the configuration file and logging verbosity.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

use kinfolk::{layout::LayoutDirection, model::Gender};

/// Command-line arguments for the Kinfolk family tree tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute node positions and edges, written as JSON
    Layout(LayoutArgs),

    /// Show what one person calls another
    Kinship {
        /// Path to the snapshot JSON file
        input: String,
        /// Person doing the addressing
        base: String,
        /// Person being addressed
        target: String,
    },

    /// Show the shortest chain of relationships between two people
    Path {
        /// Path to the snapshot JSON file
        input: String,
        from: String,
        to: String,
    },

    /// Narrate a route through two or more people, one hop per line
    Route {
        /// Path to the snapshot JSON file
        input: String,
        /// People to visit in order
        #[arg(num_args = 2.., required = true)]
        waypoints: Vec<String>,
    },

    /// List a person's ancestors and descendants
    Lineage {
        /// Path to the snapshot JSON file
        input: String,
        id: String,
    },

    /// Print head counts as JSON
    Stats {
        /// Path to the snapshot JSON file
        input: String,
    },

    /// Add a person linked to someone already recorded
    Add(AddArgs),

    /// Delete a person and every relationship touching them
    Delete {
        /// Path to the snapshot JSON file
        input: String,
        id: String,
    },

    /// Change fields of a recorded person
    Update(UpdateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct LayoutArgs {
    /// Path to the snapshot JSON file
    pub input: String,

    /// Output JSON path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Deepest generation to show, overriding the configuration
    #[arg(long, conflicts_with = "all")]
    pub max_level: Option<u32>,

    /// Show every generation
    #[arg(long)]
    pub all: bool,

    /// Layout direction (top-to-bottom, left-to-right, tb, lr)
    #[arg(long)]
    pub direction: Option<LayoutDirection>,
}

#[derive(ClapArgs, Debug)]
#[command(group(
    clap::ArgGroup::new("link")
        .required(true)
        .args(["child_of", "parent_of", "spouse_of"])
))]
#[command(group(clap::ArgGroup::new("dates").multiple(true).args(["dob", "dod"])))]
pub struct AddArgs {
    /// Path to the snapshot JSON file
    pub input: String,

    /// Id of the new person
    pub id: String,

    /// Full name of the new person
    pub name: String,

    #[arg(long, value_enum, default_value_t = GenderArg::Other)]
    pub gender: GenderArg,

    /// Birth rank among siblings
    #[arg(long)]
    pub order: Option<u32>,

    /// Date of birth (YYYY, YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub dob: Option<String>,

    /// Date of death, same formats as --dob
    #[arg(long)]
    pub dod: Option<String>,

    /// The given dates are lunar calendar dates
    #[arg(long, requires = "dates")]
    pub lunar: bool,

    /// The new person is a child of this parent
    #[arg(long)]
    pub child_of: Option<String>,

    /// The new person is a parent of this child
    #[arg(long)]
    pub parent_of: Option<String>,

    /// The new person is married to this spouse
    #[arg(long)]
    pub spouse_of: Option<String>,
}

#[derive(ClapArgs, Debug)]
#[command(group(clap::ArgGroup::new("dates").multiple(true).args(["dob", "dod"])))]
pub struct UpdateArgs {
    /// Path to the snapshot JSON file
    pub input: String,

    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    #[arg(long)]
    pub order: Option<u32>,

    #[arg(long)]
    pub branch: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    /// Date of birth (YYYY, YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub dob: Option<String>,

    /// Date of death, same formats as --dob
    #[arg(long)]
    pub dod: Option<String>,

    /// The given dates are lunar calendar dates
    #[arg(long, requires = "dates")]
    pub lunar: bool,

    /// Mark the person as deceased
    #[arg(long, conflicts_with = "alive")]
    pub deceased: bool,

    /// Mark the person as alive
    #[arg(long)]
    pub alive: bool,
}

/// Gender as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_layout() {
        let args = Args::parse_from([
            "kinfolk",
            "layout",
            "family.json",
            "--direction",
            "lr",
            "--max-level",
            "3",
        ]);
        match args.command {
            Command::Layout(layout) => {
                assert_eq!(layout.direction, Some(LayoutDirection::LeftToRight));
                assert_eq!(layout.max_level, Some(3));
                assert!(layout.output.is_none());
            }
            other => panic!("Expected layout, got {other:?}"),
        }
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_add_requires_exactly_one_link() {
        let missing = Args::try_parse_from(["kinfolk", "add", "f.json", "x", "X"]);
        assert!(missing.is_err());

        let both = Args::try_parse_from([
            "kinfolk", "add", "f.json", "x", "X", "--child-of", "a", "--spouse-of", "b",
        ]);
        assert!(both.is_err());

        let ok = Args::try_parse_from([
            "kinfolk", "add", "f.json", "x", "X", "--gender", "female", "--spouse-of", "b",
        ]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_lunar_needs_a_date() {
        let alone = Args::try_parse_from(["kinfolk", "update", "f.json", "x", "--lunar"]);
        assert!(alone.is_err());

        let args = Args::parse_from([
            "kinfolk", "update", "f.json", "x", "--dob", "1985", "--dod", "2020", "--lunar",
        ]);
        match args.command {
            Command::Update(update) => {
                assert_eq!(update.dob.as_deref(), Some("1985"));
                assert_eq!(update.dod.as_deref(), Some("2020"));
                assert!(update.lunar);
            }
            other => panic!("Expected update, got {other:?}"),
        }

        let add = Args::try_parse_from([
            "kinfolk", "add", "f.json", "x", "X", "--child-of", "a", "--dob", "2001-02-03",
        ]);
        assert!(add.is_ok());
    }

    #[test]
    fn test_route_needs_two_waypoints() {
        assert!(Args::try_parse_from(["kinfolk", "route", "f.json", "a"]).is_err());
        assert!(Args::try_parse_from(["kinfolk", "route", "f.json", "a", "b", "c"]).is_ok());
    }
}

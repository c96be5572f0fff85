//! CLI logic for the Kinfolk family tree tool.
//!
//! Every command reads a family snapshot JSON file. Queries print plain text
//! or JSON; `add`, `delete` and `update` write the snapshot back through a
//! [`JsonFileStore`].

pub mod error_adapter;

mod args;
mod config;

pub use args::{AddArgs, Args, Command, GenderArg, LayoutArgs, UpdateArgs};

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use kinfolk::{
    FamilyTree, KinfolkError,
    config::AppConfig,
    date::BirthDate,
    identifier::Id,
    model::{DateInfo, Person},
    read_snapshot,
    store::{FamilyStore, JsonFileStore, NewLink, PersonPatch},
    structure::{FamilyGraph, lineage},
};

/// Run the Kinfolk CLI application, printing results to stdout.
///
/// # Errors
///
/// Returns `KinfolkError` for:
/// - File I/O errors
/// - Malformed snapshots or configuration
/// - Parent-child cycles in the snapshot
/// - Ids that name nobody in the snapshot
pub fn run(args: &Args) -> Result<(), KinfolkError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}

/// Run the Kinfolk CLI application, printing results to `out`.
///
/// `layout --output` writes the file instead of `out`.
pub fn run_with_output(args: &Args, out: &mut dyn Write) -> Result<(), KinfolkError> {
    match &args.command {
        Command::Layout(layout) => run_layout(args, layout, out),
        Command::Kinship {
            input,
            base,
            target,
        } => {
            let snapshot = read_snapshot(input)?;
            let graph = FamilyGraph::new(&snapshot);
            let base = known(&graph, base)?;
            let target = known(&graph, target)?;

            let tree = FamilyTree::default();
            let term = tree.resolver(&graph).term(base, target);
            info!(base:% = base, target:% = target, term:% = term; "Kinship resolved");
            writeln!(out, "{term} ({})", term.gloss())?;
            Ok(())
        }
        Command::Path { input, from, to } => {
            let snapshot = read_snapshot(input)?;
            let graph = FamilyGraph::new(&snapshot);
            let from = known(&graph, from)?;
            let to = known(&graph, to)?;

            let path = FamilyTree::default().resolver(&graph).path(from, to);
            if path.is_empty() {
                warn!(from:% = from, to:% = to; "No path between people");
                writeln!(out, "No path from `{from}` to `{to}`")?;
            } else {
                writeln!(out, "{}", join_ids(&path))?;
            }
            Ok(())
        }
        Command::Route { input, waypoints } => {
            let snapshot = read_snapshot(input)?;
            let graph = FamilyGraph::new(&snapshot);
            let waypoints = waypoints
                .iter()
                .map(|raw| known(&graph, raw))
                .collect::<Result<Vec<_>, _>>()?;

            let resolver = FamilyTree::default().resolver(&graph);
            let route = resolver.waypoint_route(&waypoints);
            for step in resolver.describe(&route.nodes) {
                writeln!(out, "{step}")?;
            }
            for (from, to) in &route.gaps {
                warn!(from:% = from, to:% = to; "Route segment unreachable");
                writeln!(out, "No path from `{from}` to `{to}`")?;
            }
            Ok(())
        }
        Command::Lineage { input, id } => {
            let snapshot = read_snapshot(input)?;
            let graph = FamilyGraph::new(&snapshot);
            let id = known(&graph, id)?;

            let line = lineage(&graph, id);
            info!(person:% = id, size = line.len(); "Lineage collected");
            for member in &line {
                writeln!(out, "{member}")?;
            }
            Ok(())
        }
        Command::Stats { input } => {
            let snapshot = read_snapshot(input)?;
            let stats = FamilyTree::default().stats(&snapshot);
            writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            Ok(())
        }
        Command::Add(add) => run_add(add, out),
        Command::Delete { input, id } => {
            let mut store = JsonFileStore::new(input);
            let removed = store.delete_person(Id::new(id))?;
            info!(person:% = removed.id, path = input; "Person deleted");
            writeln!(out, "Deleted `{}` ({})", removed.id, removed.full_name)?;
            Ok(())
        }
        Command::Update(update) => run_update(update, out),
    }
}

fn run_layout(args: &Args, layout: &LayoutArgs, out: &mut dyn Write) -> Result<(), KinfolkError> {
    info!(input_path = layout.input, output_path:? = layout.output; "Laying out family");

    let loaded = config::load_config(args.config.as_ref())?;
    let mut layout_config = loaded.layout().clone();
    if let Some(direction) = layout.direction {
        layout_config = layout_config.with_direction(direction);
    }
    let max_level = if layout.all {
        None
    } else {
        layout.max_level.or(layout_config.max_visible_level())
    };
    let app_config = AppConfig::new(layout_config, loaded.style().clone());

    let snapshot = read_snapshot(&layout.input)?;
    let tree = FamilyTree::new(app_config);
    let tree_layout = tree.layout(&snapshot, max_level)?;
    for warning in &tree_layout.warnings {
        warn!(warning:% = warning; "Layout warning");
    }

    let json = serde_json::to_string_pretty(&tree_layout)?;
    match &layout.output {
        Some(path) => {
            fs::write(path, json)?;
            info!(output_file = path, nodes = tree_layout.nodes.len(); "Layout exported successfully");
        }
        None => writeln!(out, "{json}")?,
    }
    Ok(())
}

fn run_add(add: &AddArgs, out: &mut dyn Write) -> Result<(), KinfolkError> {
    let link = new_link(add).ok_or_else(|| {
        KinfolkError::Config("one of --child-of, --parent-of or --spouse-of is required".to_string())
    })?;

    let mut person = Person::new(add.id.as_str(), add.name.as_str(), add.gender.into());
    if let Some(order) = add.order {
        person = person.with_order(order);
    }
    if let Some(dob) = date_info(add.dob.as_deref(), add.lunar) {
        person = person.with_dob(dob);
    }
    person.dod = date_info(add.dod.as_deref(), add.lunar);

    let mut store = JsonFileStore::new(&add.input);
    let relationship = store.add_person(person, link)?;
    info!(person = add.id, relationship:% = relationship.id, path = add.input; "Person added");
    writeln!(
        out,
        "Added `{}` with relationship `{}`",
        add.id, relationship.id
    )?;
    Ok(())
}

fn new_link(add: &AddArgs) -> Option<NewLink> {
    if let Some(parent) = &add.child_of {
        return Some(NewLink::ChildOf(Id::new(parent)));
    }
    if let Some(child) = &add.parent_of {
        return Some(NewLink::ParentOf(Id::new(child)));
    }
    add.spouse_of
        .as_deref()
        .map(|spouse| NewLink::SpouseOf(Id::new(spouse)))
}

fn run_update(update: &UpdateArgs, out: &mut dyn Write) -> Result<(), KinfolkError> {
    let is_alive = match (update.alive, update.deceased) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let patch = PersonPatch {
        full_name: update.name.clone(),
        gender: update.gender.map(Into::into),
        is_alive,
        dob: date_info(update.dob.as_deref(), update.lunar),
        dod: date_info(update.dod.as_deref(), update.lunar),
        branch: update.branch.clone(),
        order: update.order,
        bio: update.bio.clone(),
        ..PersonPatch::default()
    };
    if patch.is_empty() {
        warn!(person = update.id; "No fields to update");
    }

    let mut store = JsonFileStore::new(&update.input);
    let person = store.update_person(Id::new(&update.id), patch)?;
    info!(person:% = person.id, path = update.input; "Person updated");
    writeln!(out, "Updated `{}` ({})", person.id, person.full_name)?;
    Ok(())
}

/// Wraps a command-line date in the chosen calendar.
///
/// Unrecognised dates are kept as written; they only stop seniority from
/// being derived from them.
fn date_info(raw: Option<&str>, lunar: bool) -> Option<DateInfo> {
    let raw = raw?;
    if BirthDate::parse(raw).is_none() {
        warn!(date = raw; "Date not recognised, stored as written");
    }
    Some(if lunar {
        DateInfo::lunar(raw)
    } else {
        DateInfo::solar(raw)
    })
}

/// Resolves a command-line id against the snapshot.
fn known(graph: &FamilyGraph<'_>, raw: &str) -> Result<Id, KinfolkError> {
    let id = Id::new(raw);
    if graph.contains(id) {
        Ok(id)
    } else {
        Err(KinfolkError::UnknownPerson(id))
    }
}

fn join_ids(ids: &[Id]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}


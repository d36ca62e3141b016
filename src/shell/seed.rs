// Startup seed for the in-memory backends.
//
// Purpose
// - Give a local run capacity profiles, project members, tasks and allocations to work with.
//
// Notes
// - Allocations go through the command handler, so they land in the event store and the read model.

use crate::modules::workload::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::workload::core::capacity::CapacityProfile;
use crate::modules::workload::core::ports::TaskSnapshot;
use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::manage_allocation::command::{
    AllocateWorkload, WorkloadCommand,
};
use crate::shared::core::calendar_day::CalendarDay;
use crate::shell::state::AppState;
use chrono::Utc;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

pub const SEED_ACTOR: &str = "seed";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed allocation {index} rejected: {source}")]
    Allocation {
        index: usize,
        source: ApplicationError,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAllocation {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub date: CalendarDay,
    pub allocated_hours: f64,
    #[serde(default)]
    pub actual_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub profiles: BTreeMap<String, CapacityProfile>,
    pub projects: BTreeMap<String, Vec<String>>,
    pub tasks: Vec<TaskSnapshot>,
    pub allocations: Vec<SeedAllocation>,
}

pub fn parse_seed(json: &str) -> Result<Seed, SeedError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_seed(path: &Path) -> Result<Seed, SeedError> {
    let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&json)
}

pub async fn apply_seed(
    seed: Seed,
    directory: &InMemoryDirectory,
    state: &AppState,
) -> Result<(), SeedError> {
    let Seed {
        profiles,
        projects,
        tasks,
        allocations,
    } = seed;
    let (profile_count, task_count, allocation_count) =
        (profiles.len(), tasks.len(), allocations.len());

    for (user_id, profile) in profiles {
        directory.put_profile(user_id, profile).await;
    }
    for (project_id, members) in projects {
        for user_id in members {
            directory.add_member(project_id.clone(), user_id).await;
        }
    }
    for task in tasks {
        directory.put_task(task).await;
    }
    for (index, allocation) in allocations.into_iter().enumerate() {
        let command = WorkloadCommand::Allocate(AllocateWorkload {
            entry_id: allocation
                .id
                .unwrap_or_else(|| Uuid::now_v7().to_string()),
            user_id: allocation.user_id,
            project_id: allocation.project_id,
            task_id: allocation.task_id,
            date: allocation.date,
            allocated_hours: allocation.allocated_hours,
            actual_hours: allocation.actual_hours,
            allocated_at: Utc::now().timestamp_millis(),
            allocated_by: SEED_ACTOR.into(),
        });
        state
            .command_handler
            .handle(command)
            .await
            .map_err(|source| SeedError::Allocation { index, source })?;
    }

    tracing::info!(
        profiles = profile_count,
        tasks = task_count,
        allocations = allocation_count,
        "seed applied"
    );
    Ok(())
}

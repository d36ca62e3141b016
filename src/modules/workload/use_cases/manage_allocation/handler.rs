// Command handler for the allocation lifecycle.
//
// Flow
// - Load the entry's stream, fold it into state, decide.
// - Append accepted events with the loaded version as the expected version.
// - Project the new events inline, so readers see the write as soon as this returns.
// - Commands on one stream run one at a time from load to projection, so the read model
//   receives each stream's events in version order.
// - Return the entry as it stands after the command.

use crate::modules::workload::adapters::outbound::projections::{
    WatermarkRepository, WorkloadProjectionRepository,
};
use crate::modules::workload::core::entry::WorkloadEntry;
use crate::modules::workload::core::events::{WorkloadEvent, stream_id_for};
use crate::modules::workload::core::evolve::evolve;
use crate::modules::workload::core::state::WorkloadState;
use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::list_workload_entries::handler::Projector;
use crate::modules::workload::use_cases::manage_allocation::command::WorkloadCommand;
use crate::modules::workload::use_cases::manage_allocation::decide::decide;
use crate::modules::workload::use_cases::manage_allocation::decision::{DecideError, Decision};
use crate::shared::infrastructure::event_store::EventStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

pub struct WorkloadCommandHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<WorkloadEvent> + Send + Sync + 'static,
    TRepository: WorkloadProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    projector: Arc<Projector<TRepository, TWatermarkRepository>>,
    stream_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<TEventStore, TRepository, TWatermarkRepository>
    WorkloadCommandHandler<TEventStore, TRepository, TWatermarkRepository>
where
    TEventStore: EventStore<WorkloadEvent> + Send + Sync + 'static,
    TRepository: WorkloadProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        projector: Arc<Projector<TRepository, TWatermarkRepository>>,
    ) -> Self {
        Self {
            event_store,
            projector,
            stream_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn lock_stream(&self, stream_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .stream_locks
            .lock()
            .await
            .entry(stream_id.to_string())
            .or_default()
            .clone();
        lock.lock_owned().await
    }

    pub async fn handle(&self, command: WorkloadCommand) -> Result<WorkloadEntry, ApplicationError> {
        let stream_id = stream_id_for(command.entry_id());
        let _stream_guard = self.lock_stream(&stream_id).await;
        let stream = self
            .event_store
            .load(&stream_id)
            .await
            .map_err(ApplicationError::VersionConflict)?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(WorkloadState::None, evolve);

        let events = match decide(&state, command) {
            Decision::Accepted { events } => events,
            Decision::Rejected { reason } => {
                tracing::debug!(%stream_id, %reason, "workload command rejected");
                return Err(rejection(reason));
            }
        };

        self.event_store
            .append(&stream_id, stream.version, &events)
            .await
            .map_err(ApplicationError::VersionConflict)?;

        for (offset, event) in events.iter().enumerate() {
            self.projector
                .apply_one(&stream_id, stream.version + offset as i64 + 1, event)
                .await
                .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        }
        tracing::debug!(%stream_id, appended = events.len(), "workload command accepted");

        events
            .into_iter()
            .fold(state, evolve)
            .entry()
            .cloned()
            .ok_or_else(|| ApplicationError::Unexpected(format!("{stream_id} has no entry")))
    }
}

fn rejection(reason: DecideError) -> ApplicationError {
    match reason {
        DecideError::NotFound => ApplicationError::NotFound(reason.to_string()),
        DecideError::InvalidHours(_)
        | DecideError::InvalidActualHours(_)
        | DecideError::NothingToEdit => ApplicationError::InvalidCommand(reason.to_string()),
        DecideError::AlreadyExists | DecideError::AlreadyRemoved => {
            ApplicationError::Domain(reason.to_string())
        }
    }
}

#[cfg(test)]
mod workload_command_handler_tests {
    use super::*;
    use crate::modules::workload::adapters::outbound::projections_in_memory::InMemoryProjections;
    use crate::modules::workload::use_cases::list_workload_entries::projection::{
        WorkloadPatch, WorkloadRow,
    };
    use crate::modules::workload::use_cases::list_workload_entries::queries_port::WorkloadQueries;
    use crate::modules::workload::use_cases::manage_allocation::command::{
        EditAllocation, RecordActualHours, RemoveAllocation,
    };
    use crate::shared::infrastructure::event_store::EventStoreError;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::tests::fixtures::commands::allocate_workload::AllocateWorkloadBuilder;
    use rstest::{fixture, rstest};
    use tokio::join;

    type Handler = WorkloadCommandHandler<
        InMemoryEventStore<WorkloadEvent>,
        InMemoryProjections,
        InMemoryProjections,
    >;

    type BeforeEachReturn = (InMemoryEventStore<WorkloadEvent>, InMemoryProjections);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        (InMemoryEventStore::new(), InMemoryProjections::new())
    }

    fn handler(
        event_store: Arc<InMemoryEventStore<WorkloadEvent>>,
        projections: Arc<InMemoryProjections>,
    ) -> Handler {
        let projector = Arc::new(Projector::new(
            "workload_entries",
            projections.clone(),
            projections,
        ));
        WorkloadCommandHandler::new(event_store, projector)
    }

    fn allocate() -> WorkloadCommand {
        WorkloadCommand::Allocate(AllocateWorkloadBuilder::new().build())
    }

    fn record(hours: f64) -> WorkloadCommand {
        WorkloadCommand::RecordActualHours(RecordActualHours {
            entry_id: "we-fixed-0001".into(),
            actual_hours: hours,
            recorded_at: 1_700_000_100_000,
            recorded_by: "user-fixed-0001".into(),
        })
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_project_and_return_the_entry(before_each: BeforeEachReturn) {
        let (event_store, projections) = before_each;
        let es = Arc::new(event_store);
        let pr = Arc::new(projections);
        let handler = handler(es.clone(), pr.clone());

        let entry = handler.handle(allocate()).await.expect("handle failed");

        assert_eq!(entry.id, "we-fixed-0001");
        assert_eq!(entry.allocated_hours, 6.0);
        let stream = es.load("WorkloadEntry-we-fixed-0001").await.unwrap();
        assert_eq!(stream.events.len(), 1);
        assert_eq!(pr.find_entry("we-fixed-0001").await.unwrap(), Some(entry));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_mutated_entry_after_each_command(
        before_each: BeforeEachReturn,
    ) {
        let (event_store, projections) = before_each;
        let pr = Arc::new(projections);
        let handler = handler(Arc::new(event_store), pr.clone());
        handler.handle(allocate()).await.unwrap();

        let edited = handler
            .handle(WorkloadCommand::Edit(EditAllocation {
                entry_id: "we-fixed-0001".into(),
                date: None,
                allocated_hours: Some(4.0),
                edited_at: 1_700_000_050_000,
                edited_by: "user-fixed-0001".into(),
            }))
            .await
            .unwrap();
        assert_eq!(edited.allocated_hours, 4.0);

        let recorded = handler.handle(record(4.5)).await.unwrap();
        assert_eq!(recorded.actual_hours, Some(4.5));
        assert_eq!(recorded.allocated_hours, 4.0);
        assert_eq!(pr.find_entry("we-fixed-0001").await.unwrap(), Some(recorded));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_drop_a_removed_entry_from_the_read_model(before_each: BeforeEachReturn) {
        let (event_store, projections) = before_each;
        let pr = Arc::new(projections);
        let handler = handler(Arc::new(event_store), pr.clone());
        handler.handle(allocate()).await.unwrap();

        let removed = handler
            .handle(WorkloadCommand::Remove(RemoveAllocation {
                entry_id: "we-fixed-0001".into(),
                removed_at: 1_700_000_100_000,
                removed_by: "user-fixed-0001".into(),
            }))
            .await
            .unwrap();

        assert_eq!(removed.id, "we-fixed-0001");
        assert_eq!(pr.find_entry("we-fixed-0001").await.unwrap(), None);
        assert!(matches!(
            handler.handle(record(1.0)).await,
            Err(ApplicationError::Domain(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_entry_exists(before_each: BeforeEachReturn) {
        let (event_store, projections) = before_each;
        let handler = handler(Arc::new(event_store), Arc::new(projections));
        handler.handle(allocate()).await.expect("first handle failed");
        let result = handler.handle(allocate()).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            ApplicationError::Domain(DecideError::AlreadyExists.to_string()).to_string()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_missing_entry_as_not_found(before_each: BeforeEachReturn) {
        let (event_store, projections) = before_each;
        let handler = handler(Arc::new(event_store), Arc::new(projections));
        assert!(matches!(
            handler.handle(record(1.0)).await,
            Err(ApplicationError::NotFound(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_invalid_hours_as_an_invalid_command(before_each: BeforeEachReturn) {
        let (event_store, projections) = before_each;
        let handler = handler(Arc::new(event_store), Arc::new(projections));
        let command =
            WorkloadCommand::Allocate(AllocateWorkloadBuilder::new().allocated_hours(25.0).build());
        assert!(matches!(
            handler.handle(command).await,
            Err(ApplicationError::InvalidCommand(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_event_store_is_offline(before_each: BeforeEachReturn) {
        let (mut event_store, projections) = before_each;
        event_store.toggle_offline();
        let handler = handler(Arc::new(event_store), Arc::new(projections));
        let result = handler.handle(allocate()).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            ApplicationError::VersionConflict(EventStoreError::Backend(
                "Event store offline".into()
            ))
            .to_string()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_projection_is_offline(before_each: BeforeEachReturn) {
        let (event_store, mut projections) = before_each;
        projections.toggle_offline();
        let handler = handler(Arc::new(event_store), Arc::new(projections));
        assert!(matches!(
            handler.handle(allocate()).await,
            Err(ApplicationError::Unexpected(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_event_store_has_a_mismatching_version(
        before_each: BeforeEachReturn,
    ) {
        let (event_store, projections) = before_each;
        event_store.set_delay_append_ms(10);
        let es = Arc::new(event_store);
        let pr = Arc::new(projections);
        let handler1 = handler(es.clone(), pr.clone());
        let handler2 = handler(es, pr);
        let (result1, result2) = join!(handler1.handle(allocate()), handler2.handle(allocate()));
        assert!(
            result1.is_ok() ^ result2.is_ok(),
            "exactly one should fail with conflict"
        );
        let err = result1.err().or(result2.err()).unwrap();
        match err {
            ApplicationError::VersionConflict(EventStoreError::VersionMismatch {
                expected,
                actual,
            }) => {
                assert_eq!(expected, 0);
                assert_eq!(actual, 1);
            }
            e => panic!("unexpected error: {e:?}"),
        }
    }

    struct SlowUpsertRepository {
        inner: Arc<InMemoryProjections>,
        delay_ms: u64,
    }

    #[async_trait::async_trait]
    impl WorkloadProjectionRepository for SlowUpsertRepository {
        async fn upsert(&self, row: WorkloadRow) -> anyhow::Result<()> {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
            self.inner.upsert(row).await
        }

        async fn patch(
            &self,
            entry_id: &str,
            patch: WorkloadPatch,
            last_event_id: &str,
        ) -> anyhow::Result<()> {
            self.inner.patch(entry_id, patch, last_event_id).await
        }

        async fn remove(&self, entry_id: &str) -> anyhow::Result<()> {
            self.inner.remove(entry_id).await
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_project_an_edit_after_a_slow_allocation_lands(
        before_each: BeforeEachReturn,
    ) {
        let (event_store, projections) = before_each;
        let es = Arc::new(event_store);
        let pr = Arc::new(projections);
        let slow = Arc::new(SlowUpsertRepository {
            inner: pr.clone(),
            delay_ms: 50,
        });
        let handler = WorkloadCommandHandler::new(
            es.clone(),
            Arc::new(Projector::new("workload_entries", slow, pr.clone())),
        );
        let edit = WorkloadCommand::Edit(EditAllocation {
            entry_id: "we-fixed-0001".into(),
            date: None,
            allocated_hours: Some(8.0),
            edited_at: 1_700_000_050_000,
            edited_by: "user-fixed-0001".into(),
        });

        let (allocated, edited) = join!(
            handler.handle(WorkloadCommand::Allocate(
                AllocateWorkloadBuilder::new().allocated_hours(4.0).build()
            )),
            async {
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                handler.handle(edit).await
            }
        );

        assert_eq!(allocated.unwrap().allocated_hours, 4.0);
        assert_eq!(edited.unwrap().allocated_hours, 8.0);
        assert_eq!(es.load("WorkloadEntry-we-fixed-0001").await.unwrap().version, 2);
        let row = pr.find_entry("we-fixed-0001").await.unwrap().unwrap();
        assert_eq!(row.allocated_hours, 8.0);
    }
}

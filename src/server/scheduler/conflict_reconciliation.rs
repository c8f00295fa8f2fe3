use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::price_conflict::PriceConflictService};

/// Starts the price conflict reconciliation scheduler.
///
/// Runs the reconciliation sweep on `cron` (six-field syntax, seconds first). The sweep
/// repairs URL claims and groups duplicate listings that slipped past submission-time
/// reconciliation.
///
/// # Arguments
/// - `db`: Database connection
/// - `cron`: Schedule of the sweep
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, keep it alive for the job to fire
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(db: DatabaseConnection, cron: &str) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = run_sweep(&db).await {
                tracing::error!("Error running price conflict reconciliation: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Price conflict reconciliation scheduled with '{}'", cron);

    Ok(scheduler)
}

async fn run_sweep(db: &DatabaseConnection) -> Result<(), AppError> {
    PriceConflictService::new(db).sweep().await?;

    Ok(())
}

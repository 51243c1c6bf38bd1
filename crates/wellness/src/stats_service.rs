//! Platform statistics service.
//!
//! Counts users, doctors, reminders and emergency contacts. The four counts
//! are independent aggregate queries and are issued concurrently; either all
//! of them succeed or the whole collection fails.

use tracing::debug;

use crate::{
    config::StatsConfig,
    database::EntityCounter,
    errors::AppError,
    models::{Entity, Stats},
};

async fn count<C>(counter: &C, entity: Entity) -> Result<i64, AppError>
where
    C: EntityCounter + ?Sized,
{
    let count = counter
        .count_rows(entity)
        .await
        .map_err(|source| AppError::StatsQuery { entity, source })?;

    // A null aggregate counts as zero
    Ok(count.unwrap_or(0))
}

/// Collect live statistics from the counter.
///
/// The `doctors` field is counted from the table selected by
/// `config.doctor_source`.
pub async fn collect_stats<C>(counter: &C, config: &StatsConfig) -> Result<Stats, AppError>
where
    C: EntityCounter + ?Sized,
{
    let (users, doctors, reminders, emergency_contacts) = tokio::try_join!(
        count(counter, Entity::User),
        count(counter, config.doctor_source.entity()),
        count(counter, Entity::Reminder),
        count(counter, Entity::EmergencyContact),
    )?;

    debug!(users, doctors, reminders, emergency_contacts, "Collected stats");

    Ok(Stats {
        users,
        doctors,
        reminders,
        emergency_contacts,
    })
}

use crate::core::form;
use crate::core::models::option::{DateCreate, DateInsert, Destination, DestinationCreate, DestinationInsert, RidingDate};
use crate::core::ports::repository::{DateCommon, DestinationCommon, Store, TripCommon};
use crate::error::Error;
use log::info;
use uuid::Uuid;

pub async fn add_destination<S>(db: &mut S, trip_id: Uuid, destination: DestinationCreate) -> Result<Destination, Error>
where
    S: Store,
{
    let name = form::required("destination name", &destination.name)?;
    TripCommon::get(db, trip_id).await?;
    let created = DestinationCommon::insert(
        db,
        DestinationInsert {
            trip_id,
            name,
            description: form::optional_text(destination.description),
        },
    )
    .await?;
    info!("destination {} added to trip {}", created.id, trip_id);
    Ok(created)
}

pub async fn add_date<S>(db: &mut S, trip_id: Uuid, date: DateCreate) -> Result<RidingDate, Error>
where
    S: Store,
{
    let value = form::parse_date(&form::required("date", &date.date)?)?;
    TripCommon::get(db, trip_id).await?;
    let created = DateCommon::insert(
        db,
        DateInsert {
            trip_id,
            date: value,
            description: form::optional_text(date.description),
        },
    )
    .await?;
    info!("date {} added to trip {}", created.id, trip_id);
    Ok(created)
}

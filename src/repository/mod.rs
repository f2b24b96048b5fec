use diesel::QueryResult;
use diesel::sqlite::SqliteConnection;

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::client::{Client, NewClient};
use crate::domain::destination::{Destination, NewDestination};
use crate::domain::flight::{Flight, NewFlight};
use crate::domain::hotel::{Hotel, NewHotel};
use crate::domain::trip::{NewTrip, Trip, TripDetails};
use crate::domain::types::{ClientId, DestinationId, FlightId, HotelId, TripId, TypeConstraintError};
use crate::pagination::{PageRequest, Paged};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod destination;
pub mod errors;
pub mod flight;
pub mod hotel;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod trip;

/// Diesel-backed repository shared by every handler.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Loads one page of rows with two round trips: the ordered window itself
/// and an unfiltered count of the table.
///
/// The count is not taken in the same snapshot as the window, so under
/// concurrent writes `total_pages` may briefly disagree with the rows
/// returned.
pub(crate) fn load_page<M, T>(
    conn: &mut SqliteConnection,
    page: PageRequest,
    window: impl FnOnce(&mut SqliteConnection, i64, i64) -> QueryResult<Vec<M>>,
    count: impl FnOnce(&mut SqliteConnection) -> QueryResult<i64>,
) -> RepositoryResult<Paged<T>>
where
    T: TryFrom<M, Error = TypeConstraintError>,
{
    let items = window(&mut *conn, page.limit(), page.offset())?
        .into_iter()
        .map(T::try_from)
        .collect::<Result<Vec<T>, _>>()?;

    let total = count(&mut *conn)?;

    Ok(Paged::new(items, page, total.max(0) as usize))
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    fn list_clients(&self, page: PageRequest) -> RepositoryResult<Paged<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
}

pub trait FlightReader {
    fn get_flight_by_id(&self, id: FlightId) -> RepositoryResult<Option<Flight>>;
    fn list_flights(&self, page: PageRequest) -> RepositoryResult<Paged<Flight>>;
}

pub trait FlightWriter {
    fn create_flight(&self, new_flight: &NewFlight) -> RepositoryResult<Flight>;
}

pub trait DestinationReader {
    fn get_destination_by_id(&self, id: DestinationId) -> RepositoryResult<Option<Destination>>;
    fn list_destinations(&self, page: PageRequest) -> RepositoryResult<Paged<Destination>>;
}

pub trait DestinationWriter {
    fn create_destination(&self, new_destination: &NewDestination)
    -> RepositoryResult<Destination>;
}

pub trait HotelReader {
    fn get_hotel_by_id(&self, id: HotelId) -> RepositoryResult<Option<Hotel>>;
    fn list_hotels(&self, page: PageRequest) -> RepositoryResult<Paged<Hotel>>;
}

pub trait HotelWriter {
    fn create_hotel(&self, new_hotel: &NewHotel) -> RepositoryResult<Hotel>;
}

pub trait TripReader {
    /// Loads a trip with every entity it references.
    ///
    /// Returns `Ok(None)` when the trip itself does not exist and
    /// [`errors::RepositoryError::DanglingReference`] when the trip exists but
    /// one of its references does not.
    fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<TripDetails>>;
    fn list_trips(&self, page: PageRequest) -> RepositoryResult<Paged<Trip>>;
}

pub trait TripWriter {
    fn create_trip(&self, new_trip: &NewTrip) -> RepositoryResult<Trip>;
    /// Deletes a trip, returning the number of removed rows.
    fn delete_trip(&self, id: TripId) -> RepositoryResult<usize>;
}

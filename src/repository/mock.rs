//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::destination::{Destination, NewDestination};
use crate::domain::flight::{Flight, NewFlight};
use crate::domain::hotel::{Hotel, NewHotel};
use crate::domain::trip::{NewTrip, Trip, TripDetails};
use crate::domain::types::{ClientId, DestinationId, FlightId, HotelId, TripId};
use crate::pagination::{PageRequest, Paged};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientReader, ClientWriter, DestinationReader, DestinationWriter, FlightReader, FlightWriter,
    HotelReader, HotelWriter, TripReader, TripWriter,
};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self, page: PageRequest) -> RepositoryResult<Paged<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    }

    impl FlightReader for Repository {
        fn get_flight_by_id(&self, id: FlightId) -> RepositoryResult<Option<Flight>>;
        fn list_flights(&self, page: PageRequest) -> RepositoryResult<Paged<Flight>>;
    }

    impl FlightWriter for Repository {
        fn create_flight(&self, new_flight: &NewFlight) -> RepositoryResult<Flight>;
    }

    impl DestinationReader for Repository {
        fn get_destination_by_id(&self, id: DestinationId) -> RepositoryResult<Option<Destination>>;
        fn list_destinations(&self, page: PageRequest) -> RepositoryResult<Paged<Destination>>;
    }

    impl DestinationWriter for Repository {
        fn create_destination(&self, new_destination: &NewDestination) -> RepositoryResult<Destination>;
    }

    impl HotelReader for Repository {
        fn get_hotel_by_id(&self, id: HotelId) -> RepositoryResult<Option<Hotel>>;
        fn list_hotels(&self, page: PageRequest) -> RepositoryResult<Paged<Hotel>>;
    }

    impl HotelWriter for Repository {
        fn create_hotel(&self, new_hotel: &NewHotel) -> RepositoryResult<Hotel>;
    }

    impl TripReader for Repository {
        fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<TripDetails>>;
        fn list_trips(&self, page: PageRequest) -> RepositoryResult<Paged<Trip>>;
    }

    impl TripWriter for Repository {
        fn create_trip(&self, new_trip: &NewTrip) -> RepositoryResult<Trip>;
        fn delete_trip(&self, id: TripId) -> RepositoryResult<usize>;
    }
}

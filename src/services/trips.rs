//! Trip queries and the booking flow.

use crate::domain::trip::{NewTrip, Trip, TripDetails};
use crate::domain::types::TripId;
use crate::domain::{EntityKind, EntityRef, Identifiable};
use crate::forms::trip::TripForm;
use crate::pagination::{PageRequest, Paged};
use crate::repository::{ClientReader, FlightReader, HotelReader, TripReader, TripWriter};
use crate::services::{ServiceError, ServiceResult, typed_id};

/// Loads a trip with its client, flights, hotel and destination.
///
/// A missing trip is `NotFound`. A trip whose references no longer resolve
/// surfaces as `InvariantViolation`.
pub fn get_trip<R>(repo: &R, id: i32) -> ServiceResult<TripDetails>
where
    R: TripReader + ?Sized,
{
    let trip_id: TripId = typed_id(EntityKind::Trip, id)?;
    repo.get_trip_by_id(trip_id)?
        .ok_or(ServiceError::NotFound(EntityRef::new(EntityKind::Trip, id)))
}

pub fn list_trips<R>(repo: &R, page: PageRequest) -> ServiceResult<Paged<Trip>>
where
    R: TripReader + ?Sized,
{
    Ok(repo.list_trips(page)?)
}

/// Books a trip after checking that everything it references exists.
///
/// References are checked in order (client, outbound flight, inbound flight,
/// hotel) and the first missing one is reported.
pub fn create_trip<R>(repo: &R, form: TripForm) -> ServiceResult<Trip>
where
    R: ClientReader + FlightReader + HotelReader + TripWriter + ?Sized,
{
    let new_trip = NewTrip::try_from(form)?;
    let [client_ref, outbound_ref, inbound_ref, hotel_ref] = new_trip.references();

    if repo.get_client_by_id(new_trip.client_id)?.is_none() {
        return Err(ServiceError::NotFound(client_ref));
    }
    if repo.get_flight_by_id(new_trip.outbound_flight_id)?.is_none() {
        return Err(ServiceError::NotFound(outbound_ref));
    }
    if repo.get_flight_by_id(new_trip.inbound_flight_id)?.is_none() {
        return Err(ServiceError::NotFound(inbound_ref));
    }
    if repo.get_hotel_by_id(new_trip.hotel_id)?.is_none() {
        return Err(ServiceError::NotFound(hotel_ref));
    }

    let trip = repo.create_trip(&new_trip)?;
    log::info!("Booked {} for {}", trip.entity_ref(), client_ref);
    Ok(trip)
}

pub fn delete_trip<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: TripWriter + ?Sized,
{
    let missing = EntityRef::new(EntityKind::Trip, id);
    let trip_id: TripId = typed_id(EntityKind::Trip, id)?;
    match repo.delete_trip(trip_id)? {
        0 => Err(ServiceError::NotFound(missing)),
        _ => {
            log::info!("Deleted {missing}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::client::Client;
    use crate::domain::destination::Destination;
    use crate::domain::flight::Flight;
    use crate::domain::hotel::{Hotel, HotelDetails};
    use crate::domain::types::{
        Airport, ClientEmail, ClientId, ClientName, DestinationId, DestinationName, FlightId,
        FlightNumber, HotelId, HotelName, Price, StarRating,
    };
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn date(value: &str) -> NaiveDate {
        value.parse().unwrap()
    }

    fn at(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").unwrap()
    }

    fn client(id: i32) -> Client {
        Client {
            id: ClientId::new(id).unwrap(),
            name: ClientName::new("Ada Lovelace").unwrap(),
            email: ClientEmail::new("ada@example.com").unwrap(),
        }
    }

    fn flight(id: i32, number: &str) -> Flight {
        Flight {
            id: FlightId::new(id).unwrap(),
            flight_number: FlightNumber::new(number).unwrap(),
            departure_airport: Airport::new("LIS").unwrap(),
            arrival_airport: Airport::new("FRA").unwrap(),
            departure_time: at("2024-07-01 08:00"),
            arrival_time: at("2024-07-01 12:00"),
        }
    }

    fn hotel(id: i32) -> Hotel {
        Hotel {
            id: HotelId::new(id).unwrap(),
            name: HotelName::new("Grand Palace").unwrap(),
            stars: StarRating::new(4).unwrap(),
            price: Price::new(120.0).unwrap(),
            destination_id: DestinationId::new(2).unwrap(),
        }
    }

    fn trip_seven() -> TripDetails {
        let trip = Trip {
            id: TripId::new(7).unwrap(),
            start_date: date("2024-07-01"),
            end_date: date("2024-07-10"),
            client_id: ClientId::new(3).unwrap(),
            outbound_flight_id: FlightId::new(10).unwrap(),
            inbound_flight_id: FlightId::new(11).unwrap(),
            hotel_id: HotelId::new(5).unwrap(),
        };
        let destination = Destination {
            id: DestinationId::new(2).unwrap(),
            name: DestinationName::new("Frankfurt").unwrap(),
        };
        TripDetails::assemble(
            trip,
            client(3),
            flight(10, "TP570"),
            flight(11, "TP571"),
            HotelDetails::new(hotel(5), destination),
        )
    }

    fn booking() -> TripForm {
        TripForm {
            start_date: date("2024-07-01"),
            end_date: date("2024-07-10"),
            client_id: 3,
            outbound_flight_id: 10,
            inbound_flight_id: 11,
            hotel_id: 5,
        }
    }

    #[test]
    fn trip_seven_is_fully_assembled() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_id()
            .withf(|id| id.get() == 7)
            .returning(|_| Ok(Some(trip_seven())));

        let details = get_trip(&repo, 7).unwrap();

        assert_eq!(details.client.id.get(), 3);
        assert_eq!(details.outbound_flight.id.get(), 10);
        assert_eq!(details.inbound_flight.id.get(), 11);
        assert_eq!(details.hotel.id.get(), 5);
        assert_eq!(details.hotel.destination.id.get(), 2);
    }

    #[test]
    fn missing_trip_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_id().returning(|_| Ok(None));

        assert!(matches!(
            get_trip(&repo, 8),
            Err(ServiceError::NotFound(EntityRef {
                kind: EntityKind::Trip,
                id: 8
            }))
        ));
    }

    #[test]
    fn dangling_hotel_is_invariant_violation() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_id().returning(|_| {
            Err(RepositoryError::DanglingReference(vec![EntityRef::new(
                EntityKind::Hotel,
                5,
            )]))
        });

        let Err(ServiceError::InvariantViolation(message)) = get_trip(&repo, 7) else {
            panic!("expected an invariant violation");
        };
        assert!(message.contains("hotel 5"));
    }

    #[test]
    fn booking_reports_first_missing_reference() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .returning(|id| Ok(Some(client(id.get()))));
        repo.expect_get_flight_by_id().returning(|id| {
            if id.get() == 10 {
                Ok(Some(flight(10, "TP570")))
            } else {
                Ok(None)
            }
        });
        repo.expect_get_hotel_by_id().times(0);
        repo.expect_create_trip().times(0);

        assert!(matches!(
            create_trip(&repo, booking()),
            Err(ServiceError::NotFound(EntityRef {
                kind: EntityKind::Flight,
                id: 11
            }))
        ));
    }

    #[test]
    fn booking_inserts_when_references_exist() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .returning(|id| Ok(Some(client(id.get()))));
        repo.expect_get_flight_by_id()
            .returning(|id| Ok(Some(flight(id.get(), "TP570"))));
        repo.expect_get_hotel_by_id()
            .returning(|id| Ok(Some(hotel(id.get()))));
        repo.expect_create_trip().times(1).returning(|new_trip| {
            Ok(Trip {
                id: TripId::new(12).unwrap(),
                start_date: new_trip.start_date,
                end_date: new_trip.end_date,
                client_id: new_trip.client_id,
                outbound_flight_id: new_trip.outbound_flight_id,
                inbound_flight_id: new_trip.inbound_flight_id,
                hotel_id: new_trip.hotel_id,
            })
        });

        let trip = create_trip(&repo, booking()).unwrap();

        assert_eq!(trip.id.get(), 12);
        assert_eq!(trip.hotel_id.get(), 5);
    }

    #[test]
    fn booking_with_reversed_dates_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_create_trip().times(0);
        let mut form = booking();
        form.end_date = date("2024-06-30");

        assert!(matches!(
            create_trip(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn deleting_absent_trip_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_trip().returning(|_| Ok(0));

        assert!(matches!(
            delete_trip(&repo, 7),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn deleting_existing_trip_succeeds() {
        let mut repo = MockRepository::new();
        repo.expect_delete_trip().returning(|_| Ok(1));

        assert!(delete_trip(&repo, 7).is_ok());
    }
}

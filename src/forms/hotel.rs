use serde::Deserialize;
use validator::Validate;

use crate::domain::hotel::NewHotel;
use crate::domain::types::{DestinationId, HotelName, Price, StarRating};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Payload for registering a hotel at an existing destination.
pub struct HotelForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 1, max = 5))]
    pub stars: i32,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub destination_id: i32,
}

impl TryFrom<HotelForm> for NewHotel {
    type Error = FormError;

    fn try_from(form: HotelForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewHotel::new(
            HotelName::new(form.name)?,
            StarRating::new(form.stars)?,
            Price::new(form.price)?,
            DestinationId::new(form.destination_id)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_stars_fail_validation() {
        let form = HotelForm {
            name: "Grand".to_string(),
            stars: 6,
            price: 10.0,
            destination_id: 1,
        };
        assert!(matches!(
            NewHotel::try_from(form),
            Err(FormError::Validation(_))
        ));
    }
}

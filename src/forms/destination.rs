use serde::Deserialize;
use validator::Validate;

use crate::domain::destination::NewDestination;
use crate::domain::types::DestinationName;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Payload for registering a destination.
pub struct DestinationForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

impl TryFrom<DestinationForm> for NewDestination {
    type Error = FormError;

    fn try_from(form: DestinationForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewDestination::new(DestinationName::new(form.name)?))
    }
}

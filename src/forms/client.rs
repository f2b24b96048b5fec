use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::{ClientEmail, ClientName};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Payload for registering a client.
pub struct ClientForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

impl TryFrom<ClientForm> for NewClient {
    type Error = FormError;

    fn try_from(form: ClientForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewClient::new(
            ClientName::new(form.name)?,
            ClientEmail::new(form.email)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TypeConstraintError;

    #[test]
    fn valid_form_is_normalized() {
        let form = ClientForm {
            name: " Ada Lovelace ".to_string(),
            email: "Ada@Example.com".to_string(),
        };
        let client = NewClient::try_from(form).unwrap();
        assert_eq!(client.name.as_str(), "Ada Lovelace");
        assert_eq!(client.email.as_str(), "ada@example.com");
    }

    #[test]
    fn invalid_email_fails_validation() {
        let form = ClientForm {
            name: "Ada".to_string(),
            email: "nope".to_string(),
        };
        assert!(matches!(
            NewClient::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn whitespace_name_fails_constraint() {
        let form = ClientForm {
            name: "   ".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert!(matches!(
            NewClient::try_from(form),
            Err(FormError::Constraint(TypeConstraintError::EmptyString))
        ));
    }
}

use validator::ValidationErrors;

/// Flattens field errors into a single `field: message` line per field,
/// ordered by field name.
pub fn into_message(errors: &ValidationErrors) -> String {
    let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .map(|(field, field_errors)| {
            let reasons = field_errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => error.code.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", field, reasons)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(email(message = "Invalid email address"))]
        email: String,
        #[validate(length(min = 8))]
        password: String,
    }

    #[test]
    fn lists_every_invalid_field() {
        let errors = Payload {
            email: String::from("nope"),
            password: String::from("short"),
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            into_message(&errors),
            "email: Invalid email address; password: length"
        );
    }
}

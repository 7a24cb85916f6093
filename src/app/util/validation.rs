use validator::{ValidationErrors, ValidationErrorsKind};

/// Flattens nested validator errors into one sentence per failed rule,
/// ordered by field path.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages("", errors, &mut messages);
    messages.sort();

    messages
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<String>>()
        .join(" ")
}

fn collect_messages(prefix: &str, errors: &ValidationErrors, messages: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = match prefix.is_empty() {
            true => field.to_string(),
            false => format!("{}.{}", prefix, field),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = match &error.message {
                        Some(message) => message.to_string(),
                        None => format!("{} is invalid.", path),
                    };
                    messages.push((path.to_string(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(&path, nested, messages),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(&format!("{}[{}]", path, index), nested, messages);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Inner {
        #[validate(range(max = 10))]
        count: u32,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(length(min = 1, message = "name is required."))]
        name: String,
        #[validate(range(min = 1, max = 100, message = "limit must equal or less than 100."))]
        limit: u8,
        #[validate]
        inner: Inner,
    }

    #[test]
    fn separates_messages_from_every_field() {
        let errors = Outer {
            name: String::new(),
            limit: 200,
            inner: Inner { count: 11 },
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            validation_message(&errors),
            "inner.count is invalid. limit must equal or less than 100. name is required."
        );
    }

    #[test]
    fn single_error_is_its_message() {
        let errors = Outer {
            name: "ok".to_string(),
            limit: 0,
            inner: Inner { count: 1 },
        }
        .validate()
        .unwrap_err();

        assert_eq!(validation_message(&errors), "limit must equal or less than 100.");
    }
}

use serde::{Deserialize, Serialize};

use super::not_blank;

/// A comic genre offered by the "new comic" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, garde::Validate)]
pub struct Genre {
    /// Database id; older backends omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub id: Option<i32>,
    /// Display name, e.g. `Action`.
    #[garde(custom(not_blank))]
    pub name: String,
}

impl Genre {
    /// Genre with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use garde::Validate;
    use serde_json::json;

    use super::*;
    use crate::{Decoded, Error};

    #[test]
    fn decodes_with_and_without_id() {
        let genres: Vec<Genre> =
            serde_json::from_value(json!([{"id": 1, "name": "Action"}, {"name": "Drama"}]))
                .expect("decode");

        let_assert!([action, drama] = genres.as_slice());
        check!(action.id == Some(1));
        check!(*drama == Genre::named("Drama"));
    }

    #[test]
    fn blank_name_is_invalid() {
        let_assert!(Err(report) = Genre::named(" ").validate());
        check!(report.to_string().contains("must not be blank"));
    }

    #[test]
    fn blank_name_reports_its_index() {
        let body = br#"[{"name": "Action"}, {"id": null, "name": ""}]"#;

        let_assert!(
            Err(Error::MalformedPayload { path, .. }) = Decoded::<Vec<Genre>>::from_slice(body)
        );
        check!(path == "[1].name");
    }

    #[test]
    fn null_id_is_kept_verbatim() {
        let body = br#"[{"id": null, "name": "Horror", "created_at": "2024-03-01T10:00:00Z"}]"#;

        let genres = Decoded::<Vec<Genre>>::from_slice(body).expect("decode");
        let_assert!(Some(horror) = genres.first());
        check!(horror.id.is_none());
        check!(
            serde_json::to_value(&genres).expect("encode")
                == json!([{"id": null, "name": "Horror", "created_at": "2024-03-01T10:00:00Z"}])
        );
    }
}

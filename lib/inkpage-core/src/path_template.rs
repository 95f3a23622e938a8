//! Backend path templates such as `/api/v1/comics/chapters/by_slug/{username}/...`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{Error, Result, RouteParams};

// Everything but unreserved characters and sub-delims.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// A fixed backend path with `{name}` placeholders.
///
/// The unexpanded template is also attached to requests so logging can
/// group by resource rather than by concrete URL.
///
/// # Example
///
/// ```
/// use inkpage_core::{PathTemplate, RouteParams};
///
/// let template = PathTemplate::new("/users/{username}/comics");
/// let params = RouteParams::new().with("username", "alice");
/// assert_eq!(template.expand(&params).unwrap(), "/users/alice/comics");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Names of the placeholders, in order of appearance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if a brace is unbalanced.
    pub fn placeholders(&self) -> Result<Vec<&'static str>> {
        let mut names = Vec::new();
        self.walk(|part| {
            if let Part::Placeholder(name) = part {
                names.push(name);
            }
            Ok(())
        })?;
        Ok(names)
    }

    /// Substitute route parameters into the template.
    ///
    /// Each value is percent-encoded as a single path segment. Parameters
    /// the template does not mention are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if a placeholder has no parameter,
    /// a value is empty, `.` or `..`, or the template is malformed.
    pub fn expand(&self, params: &RouteParams) -> Result<String> {
        let mut path = String::with_capacity(self.0.len());
        self.walk(|part| {
            match part {
                Part::Literal(text) => path.push_str(text),
                Part::Placeholder(name) => {
                    let value = params.get(name).ok_or_else(|| {
                        Error::invalid_request(format!("missing route parameter `{name}`"))
                    })?;
                    if matches!(value, "" | "." | "..") {
                        return Err(Error::invalid_request(format!(
                            "route parameter `{name}` is not a valid path segment: {value:?}"
                        )));
                    }
                    path.extend(utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET));
                }
            }
            Ok(())
        })?;
        Ok(path)
    }

    fn walk(&self, mut visit: impl FnMut(Part<'static>) -> Result<()>) -> Result<()> {
        let mut rest = self.0;
        while let Some(start) = rest.find(['{', '}']) {
            let (literal, tail) = rest.split_at(start);
            if !literal.is_empty() {
                visit(Part::Literal(literal))?;
            }
            let body = tail
                .strip_prefix('{')
                .ok_or_else(|| self.malformed("unexpected `}`"))?;
            let (name, after) = body
                .split_once('}')
                .ok_or_else(|| self.malformed("unclosed `{`"))?;
            if name.is_empty() || name.contains('{') {
                return Err(self.malformed("invalid placeholder name"));
            }
            visit(Part::Placeholder(name))?;
            rest = after;
        }
        if !rest.is_empty() {
            visit(Part::Literal(rest))?;
        }
        Ok(())
    }

    fn malformed(&self, reason: &str) -> Error {
        Error::invalid_request(format!("malformed path template `{}`: {reason}", self.0))
    }
}

enum Part<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    const CHAPTER: PathTemplate = PathTemplate::new(
        "/api/v1/comics/chapters/by_slug/{username}/{comic_slug}/{chapter_number}/",
    );

    #[test]
    fn path_template_as_str() {
        let template = PathTemplate::new("/api/posts");
        check!(template.as_str() == "/api/posts");
        check!(template.to_string() == "/api/posts");
        let s: &str = template.as_ref();
        check!(s == "/api/posts");
    }

    #[test]
    fn expands_placeholders_in_order() {
        let params = RouteParams::from([
            ("username", "alice"),
            ("comic_slug", "my-comic"),
            ("chapter_number", "3"),
        ]);

        let path = CHAPTER.expand(&params).expect("expand");
        check!(path == "/api/v1/comics/chapters/by_slug/alice/my-comic/3/");
    }

    #[test]
    fn template_without_placeholders_ignores_params() {
        let template = PathTemplate::new("/api/v1/comics/genres");
        let params = RouteParams::new().with("username", "alice");

        check!(template.expand(&params).expect("expand") == "/api/v1/comics/genres");
        check!(template.expand(&RouteParams::new()).expect("expand") == "/api/v1/comics/genres");
    }

    #[test]
    fn encodes_values_as_single_segments() {
        let params = RouteParams::from([
            ("username", "a/b"),
            ("comic_slug", "what? now"),
            ("chapter_number", "50%"),
        ]);

        let path = CHAPTER.expand(&params).expect("expand");
        check!(path == "/api/v1/comics/chapters/by_slug/a%2Fb/what%3F%20now/50%25/");
    }

    #[test]
    fn missing_parameter_is_rejected() {
        let params = RouteParams::from([("username", "alice"), ("comic_slug", "my-comic")]);

        let_assert!(Err(Error::InvalidRequest(message)) = CHAPTER.expand(&params));
        check!(message.contains("chapter_number"));
    }

    #[test]
    fn dot_segments_are_rejected() {
        for value in ["", ".", ".."] {
            let params = RouteParams::from([
                ("username", value),
                ("comic_slug", "my-comic"),
                ("chapter_number", "1"),
            ]);
            let_assert!(Err(Error::InvalidRequest(_)) = CHAPTER.expand(&params));
        }
    }

    #[test]
    fn malformed_templates_are_rejected() {
        for raw in ["/users/{id", "/users/id}", "/users/{}", "/users/{{id}}"] {
            let template = PathTemplate::new(raw);
            let_assert!(Err(Error::InvalidRequest(_)) = template.expand(&RouteParams::new()));
        }
    }

    #[test]
    fn lists_placeholders() {
        let names = CHAPTER.placeholders().expect("placeholders");
        check!(names == ["username", "comic_slug", "chapter_number"]);
    }
}

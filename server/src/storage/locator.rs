use super::metadata::ObjectKey;

/// Address of a remote storage location, e.g. `gs://bucket/builds/v2`.
///
/// The prefix never carries a leading or trailing slash; it is empty when the
/// locator names the bucket root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocator {
    pub scheme: String,
    pub bucket: String,
    pub prefix: String,
}

impl StorageLocator {
    /// Parse `<scheme>://<bucket>[/<prefix>]`.
    ///
    /// Returns `None` for anything that is not a remote locator, so callers
    /// can fall back to local mode or report the configuration error.
    pub fn parse(raw: &str) -> Option<Self> {
        let (scheme, rest) = raw.split_once("://")?;

        let mut chars = scheme.chars();
        let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return None;
        }

        let (bucket, prefix) = rest.split_once('/').unwrap_or((rest, ""));
        if bucket.is_empty() || bucket.chars().any(char::is_whitespace) {
            return None;
        }

        Some(Self {
            scheme: scheme.to_ascii_lowercase(),
            bucket: bucket.to_string(),
            prefix: prefix.trim_matches('/').to_string(),
        })
    }

    /// Map an incoming request path onto the object key inside the bucket.
    ///
    /// `/` is served as `index.html`; the prefix is joined with exactly one `/`.
    pub fn object_key(&self, request_path: &str) -> ObjectKey {
        let relative = match request_path.trim_start_matches('/') {
            "" => "index.html",
            path => path,
        };

        if self.prefix.is_empty() {
            ObjectKey::new(relative)
        } else {
            ObjectKey::new(format!("{}/{}", self.prefix, relative))
        }
    }
}

impl std::fmt::Display for StorageLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}://{}", self.scheme, self.bucket)
        } else {
            write!(f, "{}://{}/{}", self.scheme, self.bucket, self.prefix)
        }
    }
}

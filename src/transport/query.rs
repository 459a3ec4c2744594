use std::collections::BTreeMap;
use url::{form_urlencoded, ParseError, Url};

/// Query parameters by name. Entries with empty values are never emitted.
pub type QueryParams = BTreeMap<String, String>;

// Root-relative paths need a base to be validated against.
const PLACEHOLDER_ORIGIN: &str = "http://placeholder.invalid";

/// Append `params` to `base` as an encoded query string.
///
/// Returns `base` untouched when no parameter has a value. Otherwise the text before
/// any `?` is kept exactly as given (no normalization of dot segments or slashes) and
/// only the query is rebuilt. Existing query pairs on `base` are kept; a parameter with
/// the same name replaces them. Keys come out sorted, so callers must not rely on
/// insertion order.
///
/// If `base` cannot be parsed it is returned as-is with a warning rather than failing
/// the call.
pub fn build_url(base: &str, params: &QueryParams) -> String {
    if params.values().all(|v| v.is_empty()) {
        return base.to_string();
    }

    if let Err(e) = validate(base) {
        tracing::warn!(base, error = %e, "unparsable base path, query parameters dropped");
        return base.to_string();
    }

    let (before_fragment, fragment) = match base.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (base, None),
    };
    let (path, existing) = before_fragment
        .split_once('?')
        .unwrap_or((before_fragment, ""));

    let mut merged: BTreeMap<String, String> = form_urlencoded::parse(existing.as_bytes())
        .into_owned()
        .collect();
    for (key, value) in params {
        if !value.is_empty() {
            merged.insert(key.clone(), value.clone());
        }
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&merged)
        .finish();

    let mut url = format!("{}?{}", path, query);
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

fn validate(base: &str) -> Result<(), ParseError> {
    match Url::parse(base) {
        Ok(_) => Ok(()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(PLACEHOLDER_ORIGIN)?.join(base).map(|_| ())
        }
        Err(e) => Err(e),
    }
}

/// Collect `(name, value)` pairs into a [`QueryParams`], skipping absent values.
pub(crate) fn params<'a, I>(pairs: I) -> QueryParams
where
    I: IntoIterator<Item = (&'a str, Option<String>)>,
{
    pairs
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_params_return_base() {
        assert_eq!(build_url("/v1/history", &QueryParams::new()), "/v1/history");
    }

    #[test]
    fn only_empty_values_return_base() {
        let p = query(&[("page_size", ""), ("voice_id", "")]);
        assert_eq!(build_url("/v1/history", &p), "/v1/history");
    }

    #[test]
    fn appends_sorted_encoded_query() {
        let p = query(&[("voice_id", "test-voice"), ("page_size", "10")]);
        assert_eq!(
            build_url("/v1/history", &p),
            "/v1/history?page_size=10&voice_id=test-voice"
        );
    }

    #[test]
    fn empty_values_are_skipped() {
        let p = query(&[("output_format", "mp3_44100_128"), ("optimize_streaming_latency", "")]);
        assert_eq!(
            build_url("/v1/text-to-speech/abc", &p),
            "/v1/text-to-speech/abc?output_format=mp3_44100_128"
        );
    }

    #[test]
    fn values_are_escaped() {
        let p = query(&[("voice_id", "a b&c")]);
        assert_eq!(build_url("/v1/history", &p), "/v1/history?voice_id=a+b%26c");
    }

    #[test]
    fn existing_query_is_merged() {
        let p = query(&[("page_size", "5"), ("voice_id", "v2")]);
        assert_eq!(
            build_url("/v1/history?voice_id=v1&z=1", &p),
            "/v1/history?page_size=5&voice_id=v2&z=1"
        );
    }

    #[test]
    fn absolute_urls_are_supported() {
        let p = query(&[("page_size", "3")]);
        assert_eq!(
            build_url("https://api.elevenlabs.io/v1/history", &p),
            "https://api.elevenlabs.io/v1/history?page_size=3"
        );
    }

    #[test]
    fn path_text_is_kept_verbatim() {
        let p = query(&[("page_size", "10")]);
        assert_eq!(build_url("v1/history", &p), "v1/history?page_size=10");
        assert_eq!(
            build_url("/v1/a/../history", &p),
            "/v1/a/../history?page_size=10"
        );
        assert_eq!(
            build_url("//evil.example/v1/history", &p),
            "//evil.example/v1/history?page_size=10"
        );
        assert_eq!(
            build_url("/v1/text-to-speech/..", &p),
            "/v1/text-to-speech/..?page_size=10"
        );
    }

    #[test]
    fn fragment_stays_last() {
        let p = query(&[("page_size", "10")]);
        assert_eq!(build_url("/v1/history#top", &p), "/v1/history?page_size=10#top");
    }

    #[test]
    fn unparsable_base_is_returned_unchanged() {
        let p = query(&[("page_size", "10")]);
        assert_eq!(build_url("http://[::1", &p), "http://[::1");
    }

    #[test]
    fn complete_path_round_trips() {
        let p = query(&[("page_size", "10")]);
        let built = build_url("/v1/history", &p);
        assert_eq!(build_url(&built, &QueryParams::new()), built);
    }

    #[test]
    fn params_helper_skips_none() {
        let p = params([("page_size", Some("10".to_string())), ("voice_id", None)]);
        assert_eq!(p.len(), 1);
        assert_eq!(p["page_size"], "10");
    }
}

use crate::Error;
use crate::transport::request::Target;
use url::Url;

pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw).map_err(|err| Error::InvalidConfig {
        message: "invalid base_url".into(),
        source: Some(Box::new(err)),
    })?;

    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::invalid_config(
            "base_url must not include query or fragment",
        ));
    }

    let path = url.path();
    if path != "/" && !path.ends_with('/') {
        url.set_path(&format!("{path}/"));
    }
    Ok(url)
}

pub(crate) fn endpoint_url<'a, I>(base_url: &Url, segments: I) -> Result<Url, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = base_url.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| Error::invalid_config("base_url must be a hierarchical URL"))?;
        path.pop_if_empty();
        for seg in segments {
            path.push(seg);
        }
    }
    Ok(url)
}

pub(crate) fn target_url(base_url: &Url, target: &Target) -> Result<Url, Error> {
    match target {
        Target::Segments(segments) => endpoint_url(base_url, segments.iter().map(String::as_str)),
        Target::Relative(path) => base_url.join(path).map_err(|err| Error::InvalidConfig {
            message: format!("invalid request path: {path}").into_boxed_str(),
            source: Some(Box::new(err)),
        }),
        Target::Absolute(url) => Ok(url.clone()),
    }
}

/// Split a caller-supplied path into a target and its query pairs.
///
/// `path` is either a fully-qualified `http(s)://` URL or a path relative to the
/// base URL such as `subscribers?limit=0`. Percent-escapes in the path are sent
/// as written.
pub(crate) fn parse_path(path: &str) -> Result<(Target, Vec<(String, String)>), Error> {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") {
        let mut url = Url::parse(path).map_err(|err| Error::InvalidConfig {
            message: format!("invalid request URL: {path}").into_boxed_str(),
            source: Some(Box::new(err)),
        })?;
        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        url.set_query(None);
        url.set_fragment(None);
        return Ok((Target::Absolute(url), query));
    }

    let path = path.split('#').next().unwrap_or_default();
    let (path, query) = path.split_once('?').unwrap_or((path, ""));
    // A leading slash would replace the base path on join.
    let relative = path.trim_start_matches('/').to_owned();
    let query = url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    Ok((Target::Relative(relative), query))
}

/// Resource family of a request URL (`subscribers`, `campaigns`, ...), used as a
/// span and metric label. URLs outside the base URL map to `other`.
pub(crate) fn resource_of(base_url: &Url, url: &Url) -> &'static str {
    const RESOURCES: [&str; 10] = [
        "automations",
        "batch",
        "campaigns",
        "fields",
        "forms",
        "groups",
        "segments",
        "subscribers",
        "timezones",
        "webhooks",
    ];

    if url.origin() != base_url.origin() {
        return "other";
    }
    let Some(rest) = url.path().strip_prefix(base_url.path()) else {
        return "other";
    };
    let first = rest.split('/').next().unwrap_or_default();
    RESOURCES
        .iter()
        .find(|name| **name == first)
        .copied()
        .unwrap_or("other")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_keeps_api_prefix_and_encodes_segments() {
        let base = normalize_base_url("https://connect.mailerlite.com/api").unwrap();
        let url = endpoint_url(&base, ["subscribers", "user+tag@example.com"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://connect.mailerlite.com/api/subscribers/user+tag@example.com"
        );

        let url = endpoint_url(&base, ["forms", "a/b c"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://connect.mailerlite.com/api/forms/a%2Fb%20c"
        );
    }

    #[test]
    fn base_url_with_query_is_rejected() {
        assert!(normalize_base_url("https://connect.mailerlite.com/api?x=1").is_err());
    }

    #[test]
    fn relative_path_with_query_is_split() {
        let (target, query) = parse_path("/subscribers?filter%5Bstatus%5D=active&limit=0").unwrap();
        assert_eq!(target, Target::Relative("subscribers".to_owned()));
        assert_eq!(
            query,
            vec![
                ("filter[status]".to_owned(), "active".to_owned()),
                ("limit".to_owned(), "0".to_owned()),
            ]
        );
    }

    #[test]
    fn encoded_relative_path_is_not_encoded_again() {
        let base = normalize_base_url("https://connect.mailerlite.com/api").unwrap();
        let (target, _) = parse_path("subscribers/user%40example.com").unwrap();
        assert_eq!(
            target_url(&base, &target).unwrap().as_str(),
            "https://connect.mailerlite.com/api/subscribers/user%40example.com"
        );

        let (target, _) = parse_path("/groups/12/subscribers").unwrap();
        assert_eq!(
            target_url(&base, &target).unwrap().as_str(),
            "https://connect.mailerlite.com/api/groups/12/subscribers"
        );
    }

    #[test]
    fn resource_is_the_first_segment_under_the_base() {
        let base = normalize_base_url("https://connect.mailerlite.com/api").unwrap();
        let url = endpoint_url(&base, ["campaigns", "7", "schedule"]).unwrap();
        assert_eq!(resource_of(&base, &url), "campaigns");

        let url = endpoint_url(&base, ["subscribers"]).unwrap();
        assert_eq!(resource_of(&base, &url), "subscribers");

        let unknown = endpoint_url(&base, ["unknown"]).unwrap();
        assert_eq!(resource_of(&base, &unknown), "other");

        let elsewhere = Url::parse("https://example.com/api/subscribers").unwrap();
        assert_eq!(resource_of(&base, &elsewhere), "other");
    }

    #[test]
    fn absolute_path_is_kept() {
        let (target, query) =
            parse_path("https://connect.mailerlite.com/api/timezones?page=2").unwrap();
        match target {
            Target::Absolute(url) => {
                assert_eq!(url.as_str(), "https://connect.mailerlite.com/api/timezones")
            }
            other => panic!("unexpected target: {other:?}"),
        }
        assert_eq!(query, vec![("page".to_owned(), "2".to_owned())]);
    }
}

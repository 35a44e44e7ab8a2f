use axum::http::{HeaderMap, HeaderValue, header};
use uuid::Uuid;

pub(crate) const SESSION_COOKIE: &str = "shop_session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Session {
    pub(crate) id: String,
    pub(crate) is_new: bool,
}

/// Session id carried in the request's `Cookie` header, if any.
pub(crate) fn existing(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}

/// The caller's session, minting a new id when none was sent.
pub(crate) fn resolve(headers: &HeaderMap) -> Session {
    match existing(headers) {
        Some(id) => Session { id, is_new: false },
        None => Session {
            id: Uuid::new_v4().to_string(),
            is_new: true,
        },
    }
}

pub(crate) fn set_cookie(session: &Session) -> Option<HeaderValue> {
    if !session.is_new {
        return None;
    }
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        session.id
    ))
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_session_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; shop_session=abc123; lang=sw"),
        );

        let session = resolve(&headers);
        assert_eq!(session, Session { id: "abc123".to_owned(), is_new: false });
        assert!(set_cookie(&session).is_none());
    }

    #[test]
    fn mints_session_when_absent() {
        let session = resolve(&HeaderMap::new());
        assert!(session.is_new);
        assert!(Uuid::parse_str(&session.id).is_ok());

        let cookie = set_cookie(&session).expect("new session sets a cookie");
        assert!(cookie.to_str().unwrap().starts_with("shop_session="));
    }

    #[test]
    fn empty_cookie_value_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("shop_session="));
        assert!(existing(&headers).is_none());
    }
}

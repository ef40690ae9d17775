use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::{Duration, OffsetDateTime};

pub const SESSION_COOKIE: &str = "usuario";

/// How long a login lasts.
pub const SESSION_TTL: Duration = Duration::hours(48);

/// Decides who the current user is and how a login or logout changes the
/// client's cookies. The task store only ever sees the resulting username.
pub trait SessionIdentity: Send + Sync {
    fn current_user(&self, jar: &CookieJar) -> Option<String>;

    fn sign_in(&self, jar: CookieJar, user: &str) -> CookieJar;

    fn sign_out(&self, jar: CookieJar) -> CookieJar;
}

/// Trusts whatever username the `usuario` cookie carries. There is no
/// verification of any kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainCookieIdentity;

impl SessionIdentity for PlainCookieIdentity {
    fn current_user(&self, jar: &CookieJar) -> Option<String> {
        jar.get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|user| !user.is_empty())
    }

    fn sign_in(&self, jar: CookieJar, user: &str) -> CookieJar {
        let cookie = Cookie::build((SESSION_COOKIE, user.to_string()))
            .path("/")
            .expires(OffsetDateTime::now_utc() + SESSION_TTL);
        jar.add(cookie)
    }

    fn sign_out(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderMap, HeaderValue};

    use super::*;

    fn jar_with(cookie: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn reads_username_from_cookie() {
        let jar = jar_with("otra=1; usuario=ana");
        assert_eq!(PlainCookieIdentity.current_user(&jar).as_deref(), Some("ana"));
    }

    #[test]
    fn missing_or_empty_cookie_is_anonymous() {
        assert_eq!(PlainCookieIdentity.current_user(&CookieJar::new()), None);
        assert_eq!(PlainCookieIdentity.current_user(&jar_with("usuario=")), None);
    }

    #[test]
    fn sign_in_sets_cookie_for_two_days() {
        let jar = PlainCookieIdentity.sign_in(CookieJar::new(), "ana");
        let cookie = jar.get(SESSION_COOKIE).unwrap();

        assert_eq!(cookie.value(), "ana");
        assert_eq!(cookie.path(), Some("/"));
        let expires = cookie.expires_datetime().unwrap();
        let remaining = expires - OffsetDateTime::now_utc();
        assert!(remaining > Duration::hours(47) && remaining <= SESSION_TTL);
    }

    #[test]
    fn sign_out_forgets_user() {
        let jar = PlainCookieIdentity.sign_out(jar_with("usuario=ana"));
        assert_eq!(PlainCookieIdentity.current_user(&jar), None);
    }
}

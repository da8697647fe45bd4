use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use std::convert::Infallible;
use std::net::SocketAddr;

/// Who sent the request, as far as the server can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    pub ip: String,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl ClientContext {
    pub fn from_parts(headers: &HeaderMap, peer: Option<SocketAddr>) -> Self {
        Self {
            ip: client_ip(headers, peer),
            user_agent: header_str(headers, header::USER_AGENT.as_str()),
            referer: header_str(headers, header::REFERER.as_str()),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ClientContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(Self::from_parts(&parts.headers, peer))
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Edge proxy header first, then the first forwarded hop, then the socket peer.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    header_str(headers, "cf-connecting-ip")
        .or_else(|| {
            header_str(headers, "x-forwarded-for").and_then(|chain| {
                chain
                    .split(',')
                    .map(str::trim)
                    .find(|hop| !hop.is_empty())
                    .map(str::to_string)
            })
        })
        .or_else(|| header_str(headers, "x-real-ip"))
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_edge_header_wins() {
        let h = headers(&[
            ("cf-connecting-ip", "203.0.113.9"),
            ("x-forwarded-for", "198.51.100.1, 10.0.0.1"),
        ]);
        assert_eq!(client_ip(&h, None), "203.0.113.9");
    }

    #[test]
    fn test_first_forwarded_hop() {
        let h = headers(&[("x-forwarded-for", " 198.51.100.1 , 10.0.0.1")]);
        assert_eq!(client_ip(&h, None), "198.51.100.1");
    }

    #[test]
    fn test_falls_back_to_peer_then_unknown() {
        let peer: SocketAddr = "127.0.0.1:5555".parse().unwrap();
        assert_eq!(client_ip(&HeaderMap::new(), Some(peer)), "127.0.0.1");
        assert_eq!(client_ip(&HeaderMap::new(), None), "unknown");
    }

    #[test]
    fn test_collects_agent_and_referer() {
        let h = headers(&[
            ("user-agent", "Mozilla/5.0"),
            ("referer", "https://agency.example/"),
        ]);
        let ctx = ClientContext::from_parts(&h, None);
        assert_eq!(ctx.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(ctx.referer.as_deref(), Some("https://agency.example/"));
    }
}

use webviewcookies::base::capabilities::Capabilities;
use webviewcookies::cookies::codec::{decode, encode, parse_cookie};
use webviewcookies::cookies::monster::CookieMonster;
use webviewcookies::cookies::serializedcookie::Cookie;
use webviewcookies::cookies::store::CookieStore;

#[test]
fn test_decode_scenario() {
    let cookies = decode(
        Some("a=1; b=2"),
        Some("http://example.com/"),
        Capabilities::legacy(),
    );

    assert_eq!(
        cookies,
        vec![
            Cookie::new("a", "1").with_domain("example.com"),
            Cookie::new("b", "2").with_domain("example.com"),
        ]
    );
}

#[test]
fn test_encode_then_decode() {
    let cookie = Cookie::new("token", "xyz").with_domain("shop.example.org");
    let encoded = encode(&cookie);

    let decoded = decode(
        Some(&encoded),
        Some("https://shop.example.org/cart"),
        Capabilities::legacy(),
    );
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].name, "token");
    assert_eq!(decoded[0].value, "xyz");
    assert_eq!(decoded[0].domain.as_deref(), Some("shop.example.org"));
    assert_eq!(decoded[0].path, "/");
}

#[test]
fn test_decoded_count_bounded_by_segments() {
    let headers = [
        "a=1",
        "a=1;;;",
        "; ; ;",
        "a=1; b; c=; =d; e=5",
        "Path=/; Domain=x; Secure; HttpOnly",
        "x=\"quoted\"; y=with space",
    ];

    for header in headers {
        let decoded = decode(Some(header), Some("https://example.com"), Capabilities::all());
        assert!(decoded.len() <= header.split(';').count(), "header {:?}", header);
    }
}

#[test]
fn test_domain_defaults_to_request_host() {
    let decoded = decode(
        Some("a=1"),
        Some("https://deep.sub.example.net:8443/p?q=1"),
        Capabilities::all(),
    );
    assert_eq!(decoded[0].domain.as_deref(), Some("deep.sub.example.net"));
}

#[test]
fn test_max_age_zero_has_no_expiry() {
    for line in [
        "a=1; Max-Age=0",
        "a=1; Max-Age=-10",
        "a=1; Max-Age=0; Expires=Fri, 01 Jan 2100 00:00:00 GMT",
    ] {
        let parsed = parse_cookie(line).unwrap();
        assert_eq!(parsed.expires_at(time::OffsetDateTime::now_utc()), None, "{}", line);
    }
}

#[test]
fn test_store_header_feeds_decoder() {
    let store = CookieMonster::new();
    store.set_cookie("https://example.com", "session=abc; Path=/; Secure; HttpOnly");
    store.set_cookie("https://example.com", "theme=dark; Path=/docs");

    let url = "https://example.com/docs/intro";
    let header = store.cookie_header(url);
    assert_eq!(header.as_deref(), Some("theme=dark; session=abc"));

    let decoded = decode(header.as_deref(), Some(url), Capabilities::all());
    let names: Vec<_> = decoded.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["theme", "session"]);
    // Attributes do not travel through the header; defaults apply.
    assert!(decoded.iter().all(|c| c.path == "/" && !c.secure));
}

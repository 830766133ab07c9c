use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webviewcookies::base::capabilities::Capabilities;
use webviewcookies::cookies::codec::{decode, encode};
use webviewcookies::cookies::monster::CookieMonster;
use webviewcookies::cookies::serializedcookie::Cookie;
use webviewcookies::cookies::store::CookieStore;

fn benchmark_decode(c: &mut Criterion) {
    let header = (0..50)
        .map(|i| format!("cookie{}=value{}", i, i))
        .collect::<Vec<_>>()
        .join("; ");

    c.bench_function("cookie_decode_50", |b| {
        b.iter(|| {
            black_box(decode(
                black_box(Some(header.as_str())),
                black_box(Some("https://example.com/foo")),
                Capabilities::all(),
            ));
        })
    });
}

fn benchmark_encode(c: &mut Criterion) {
    let cookie = Cookie {
        secure: true,
        http_only: Some(true),
        expires: Some(1_900_000_000),
        ..Cookie::new("session", "abc123").with_domain("example.com")
    };

    c.bench_function("cookie_encode", |b| {
        b.iter(|| black_box(encode(black_box(&cookie))))
    });
}

fn benchmark_store_header(c: &mut Criterion) {
    let store = CookieMonster::new();
    for i in 0..40 {
        store.set_cookie("https://example.com", &format!("cookie{}=val; Path=/foo", i));
    }

    c.bench_function("cookie_header_for_url", |b| {
        b.iter(|| {
            black_box(store.cookie_header(black_box("https://example.com/foo/bar")));
        })
    });
}

criterion_group!(benches, benchmark_decode, benchmark_encode, benchmark_store_header);
criterion_main!(benches);

use aliyun_log_signer::constants::*;
use aliyun_log_signer::{sign, Credential, RequestSigner};
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use http::HeaderMap;
use http::HeaderValue;

criterion_group!(benches, bench);
criterion_main!(benches);

fn headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("date", HeaderValue::from_static("Tue, 01 Jan 2019 00:00:00 GMT"));
    headers.insert(X_LOG_API_VERSION, HeaderValue::from_static(API_VERSION));
    headers.insert(X_LOG_BODY_RAW_SIZE, HeaderValue::from_static("1024"));
    headers.insert(X_LOG_SIGNATURE_METHOD, HeaderValue::from_static(SIGNATURE_METHOD));
    headers.insert(X_LOG_COMPRESS_TYPE, HeaderValue::from_static("deflate"));
    headers
}

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign");

    group.bench_function("sign", |b| {
        let headers = headers();
        let params = vec![
            ("type".to_string(), "log".to_string()),
            ("from".to_string(), "1546300800".to_string()),
            ("to".to_string(), "1546304400".to_string()),
            ("query".to_string(), "status: 500".to_string()),
        ];

        b.iter(|| sign("GET", "/logstores/app", "access_key_secret", &params, &headers))
    });

    group.bench_function("request_signer", |b| {
        let signer = RequestSigner::new(Credential::new("access_key_id", "access_key_secret"));

        b.iter(|| {
            let mut req = http::Request::post("http://demo.cn-hangzhou.log.aliyuncs.com/logstores/app")
                .body(())
                .expect("request must be valid")
                .into_parts()
                .0;
            req.headers = headers();

            signer.sign(&mut req).expect("must success")
        })
    });

    group.finish();
}

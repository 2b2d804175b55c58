use gdp_chart::ChartError;
use gdp_chart::core::{DatasetValidation, RawObservation};
use gdp_chart::feed::{DataSource, StaticSource, parse_feed};

const FEED: &str = r#"{
    "errors": {},
    "source_name": "Federal Reserve Economic Data",
    "data": [
        ["1947-01-01", 243.1],
        ["1947-04-01", 246.3],
        ["1947-07-01", 250.1]
    ]
}"#;

#[test]
fn parses_pairs_in_order_and_ignores_other_fields() {
    let raw = parse_feed(FEED).expect("valid feed");
    assert_eq!(
        raw,
        vec![
            RawObservation::new("1947-01-01", 243.1),
            RawObservation::new("1947-04-01", 246.3),
            RawObservation::new("1947-07-01", 250.1),
        ]
    );
}

#[test]
fn integer_values_are_accepted() {
    let raw = parse_feed(r#"{"data": [["2015-01-01", 50]]}"#).expect("valid feed");
    assert_eq!(raw[0].value, 50.0);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_feed(r#"{"data": [["1947-01-01", 243.1]"#).expect_err("truncated");
    assert!(matches!(err, ChartError::Parse(_)));
}

#[test]
fn wrong_shape_is_a_parse_error() {
    assert!(matches!(
        parse_feed(r#"{"rows": []}"#),
        Err(ChartError::Parse(_))
    ));
    assert!(matches!(
        parse_feed(r#"{"data": [["1947-01-01", "243.1"]]}"#),
        Err(ChartError::Parse(_))
    ));
}

#[test]
fn static_source_loads_typed_dataset() {
    let dataset = StaticSource::new(FEED)
        .load(DatasetValidation::Strict)
        .expect("load");
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.extrema().expect("extrema").max_value, 250.1);
}

#[test]
fn static_source_surfaces_bad_dates() {
    let source = StaticSource::new(r#"{"data": [["1947-13-01", 1.0]]}"#);
    assert!(matches!(
        source.load(DatasetValidation::Permissive),
        Err(ChartError::Parse(_))
    ));
}

#[cfg(feature = "fetch")]
mod http {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    use gdp_chart::ChartError;
    use gdp_chart::core::DatasetValidation;
    use gdp_chart::feed::{DataSource, HttpSource, fetch_dataset};

    use super::FEED;

    fn local_source(url: &str) -> HttpSource {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .expect("client");
        HttpSource::new(url).with_client(client)
    }

    /// Serves exactly one canned response and returns the feed URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            while reader.read_line(&mut line).expect("read request") > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("write response");
            stream.flush().expect("flush");
        });
        format!("http://{addr}/GDP-data.json")
    }

    #[test]
    fn successful_response_yields_dataset() {
        let url = serve_once("200 OK", FEED);
        let source = local_source(&url);
        assert_eq!(source.url(), url);

        let dataset = source.load(DatasetValidation::Strict).expect("load");
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.points()[1].value, 246.3);
    }

    #[test]
    fn server_error_status_is_a_network_error() {
        let url = serve_once("500 Internal Server Error", "{}");
        let err = local_source(&url)
            .load(DatasetValidation::Permissive)
            .expect_err("500 must fail");
        assert!(matches!(err, ChartError::Network(_)), "{err:?}");
    }

    #[test]
    fn refused_connection_is_a_network_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("local addr")
        };
        let url = format!("http://{addr}/GDP-data.json");
        let err = local_source(&url)
            .load(DatasetValidation::Permissive)
            .expect_err("closed port must fail");
        assert!(matches!(err, ChartError::Network(_)), "{err:?}");
    }

    #[test]
    fn fetch_dataset_reports_unreachable_feed_as_network_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("local addr")
        };
        let err = fetch_dataset(&format!("http://{addr}/GDP-data.json"))
            .expect_err("unreachable feed must fail");
        assert!(matches!(err, ChartError::Network(_)), "{err:?}");
    }
}

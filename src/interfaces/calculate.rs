use crate::http::response::Response;
use crate::interfaces::{Outcome, Params, parse_query};
use crate::site::Site;

use url::form_urlencoded;

/// `x=41` answers `42`. Only the value of the first pair is read.
pub fn calculate_next(params: Params, _site: &Site) -> Outcome {
    let next = form_urlencoded::parse(params.query().as_bytes())
        .next()
        .and_then(|(_, value)| value.trim().parse::<i64>().ok())
        .and_then(|n| n.checked_add(1));

    Outcome::Response(match next {
        Some(n) => Response::text(n.to_string()),
        None => Response::bad_request(),
    })
}

/// Area of the triangle with the given `height` and `width`.
pub fn calculate_area(params: Params, _site: &Site) -> Outcome {
    let area = parse_query(params.query()).and_then(|pairs| {
        let height = pairs.get("height")?.trim().parse::<f64>().ok()?;
        let width = pairs.get("width")?.trim().parse::<f64>().ok()?;
        Some(height * width / 2.0)
    });

    Outcome::Response(match area {
        Some(area) => Response::text(format_float(area)),
        None => Response::bad_request(),
    })
}

/// Shortest round-trip digits, a decimal digit kept on whole numbers
/// (`6.0`, `7.5`), and exponent notation outside `1e-4 <= |v| < 1e16`
/// (`1e+16`, `1e-05`).
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        if value.fract() == 0.0 {
            format!("{value:.1}")
        } else {
            value.to_string()
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::StatusCode;

    fn site() -> Site {
        Site::new("webroot", "index.html", "upload")
    }

    fn call(handler: fn(Params, &Site) -> Outcome, query: &str) -> Response {
        match handler(Params::Query(query.to_string()), &site()) {
            Outcome::Response(resp) => resp,
            Outcome::Unsupported => panic!("unexpected unsupported outcome"),
        }
    }

    #[test]
    fn next_increments() {
        let resp = call(calculate_next, "x=41");
        assert_eq!(resp.status, StatusCode::Ok);
        assert_eq!(resp.body, b"42");

        assert_eq!(call(calculate_next, "x=-1").body, b"0");
    }

    #[test]
    fn next_rejects_garbage_and_overflow() {
        let overflow = format!("x={}", i64::MAX);
        for query in ["x=abc", "", "x=", overflow.as_str()] {
            let resp = call(calculate_next, query);
            assert_eq!(resp.status, StatusCode::BadRequest, "query {query:?}");
            assert!(resp.body.is_empty());
        }
    }

    #[test]
    fn area_is_half_the_product() {
        assert_eq!(call(calculate_area, "height=4&width=3").body, b"6.0");
        assert_eq!(call(calculate_area, "width=5&height=3").body, b"7.5");
    }

    #[test]
    fn area_switches_to_exponent_notation_at_the_extremes() {
        assert_eq!(call(calculate_area, "height=1e16&width=2").body, b"1e+16");
        assert_eq!(call(calculate_area, "height=1e-5&width=2").body, b"1e-05");
        assert_eq!(call(calculate_area, "height=3e16&width=1").body, b"1.5e+16");
        assert_eq!(call(calculate_area, "height=1e15&width=2").body, b"1000000000000000.0");
        assert_eq!(call(calculate_area, "height=0.0002&width=1").body, b"0.0001");
        assert_eq!(call(calculate_area, "height=0&width=5").body, b"0.0");
    }

    #[test]
    fn area_requires_both_numbers() {
        for query in ["height=4", "height=4&width=x", "height=4&width", "h=1&w=2"] {
            assert_eq!(call(calculate_area, query).status, StatusCode::BadRequest);
        }
    }

    #[test]
    fn post_calls_use_the_query() {
        let params = Params::WithBody {
            query: "x=1".to_string(),
            body: b"ignored".to_vec(),
        };
        let Outcome::Response(resp) = calculate_next(params, &site()) else {
            panic!("unexpected unsupported outcome");
        };
        assert_eq!(resp.body, b"2");
    }
}

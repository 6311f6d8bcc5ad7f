//! Response rendering
//!
//! Turns a settled probe into the text block shown in the results panel:
//! two-space indented JSON with a fixed key order, plus the outcome used to
//! color it.

use crate::probe::ProbeResult;
use crate::types::{Outcome, ProbeOutput};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use serde_json::Value;
use std::io;

/// Body rendered for any reachable endpoint, 2xx or not
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResponseReport<'a> {
    status: u16,
    status_text: &'a str,
    url: &'a str,
    response: &'a Value,
}

/// Body rendered when no usable response came back
#[derive(Debug, Serialize)]
struct NetworkErrorReport<'a> {
    error: &'static str,
    message: &'a str,
    url: &'a str,
}

/// Render a settled probe for the results panel
pub fn render_result(result: &ProbeResult, url: &str) -> ProbeOutput {
    match result {
        ProbeResult::Reachable {
            status,
            status_text,
            data,
        } => ProbeOutput::Rendered {
            text: to_pretty_json(&ResponseReport {
                status: *status,
                status_text,
                url,
                response: data,
            }),
            outcome: Outcome::from_status(*status),
        },
        ProbeResult::Failed { message } => ProbeOutput::Rendered {
            text: to_pretty_json(&NetworkErrorReport {
                error: "Network Error",
                message,
                url,
            }),
            outcome: Outcome::Danger,
        },
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, JsFormatter::default());

    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(e) => format!("{{\n  \"error\": \"Render Error\",\n  \"message\": \"{e}\"\n}}"),
    }
}

/// Two-space pretty printer whose floats read like JavaScript numbers
#[derive(Default)]
struct JsFormatter {
    pretty: PrettyFormatter<'static>,
}

impl Formatter for JsFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(js_number(value).as_bytes())
    }
}

/// Format a finite float the way JavaScript's `Number.prototype.toString` does:
/// `4.0` is `4`, `1e21` is `1e+21`, `0.000001` stays positional.
fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Shortest round-trip digits, e.g. "-1.5e-7"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;
    let sign = if value < 0.0 { "-" } else { "" };

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if n > 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", (n - 1).abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", (n - 1).abs())
        }
    };

    format!("{sign}{body}")
}

//! The serial request loop
//!
//! Two modes, mirroring the original tool: one request covering the whole
//! input (`--all`), or one request per input line. Both are strictly serial,
//! and output is flushed after each unit of work so completed results are
//! never held back by a later failure.

use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context;
use madamira_diac_core::{extract, RequestConfig};

use crate::client::MadamiraClient;
use crate::error::{CliError, CliResult};

/// Diacritize the entire input with a single request.
pub fn diacritize_batch(
    client: &MadamiraClient,
    config: &RequestConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> CliResult<()> {
    let lines = input.lines().map(decode_line).collect::<CliResult<Vec<_>>>()?;
    log::info!("diacritizing {} line(s) in one request", lines.len());

    let request = config.build_request(&lines);
    stream_response(client, &request, out)
}

/// Diacritize the input one line per request, strictly serially.
pub fn diacritize_lines(
    client: &MadamiraClient,
    config: &RequestConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> CliResult<()> {
    for line in input.lines() {
        let line = decode_line(line)?;
        log::debug!("diacritizing line: {line}");

        let request = config.build_request([line.as_str()]);
        stream_response(client, &request, out)?;
    }
    Ok(())
}

/// Issue one request and write each extracted sentence as a line.
///
/// The response body is parsed as it streams in; sentences appear on the
/// output as soon as their segment closes.
fn stream_response(client: &MadamiraClient, request: &str, out: &mut impl Write) -> CliResult<()> {
    let response = client.diacritize(request)?;

    for sentence in extract(BufReader::new(response)) {
        let sentence = sentence.context("failed to parse MADAMIRA response")?;
        writeln!(out, "{sentence}").context("failed to write output")?;
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn decode_line(line: io::Result<String>) -> CliResult<String> {
    line.map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => {
            CliError::Encoding("input is not valid UTF-8".to_string()).into()
        }
        _ => anyhow::Error::from(e).context("failed to read input"),
    })
}

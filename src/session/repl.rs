use crate::convert::Converter;
use crate::session::config::{is_exit_command, SessionConfig};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub requests: usize,
    pub conversions: usize,
    pub failures: usize,
    /// True when the exit command was read, false on end-of-input
    pub exited: bool,
}

/// Run the prompt/read/respond loop until the exit command or end-of-input.
/// Every response is followed by a blank line.
pub fn run_session<R: BufRead, W: Write>(
    converter: &Converter,
    config: &SessionConfig,
    mut input: R,
    output: &mut W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            break;
        }

        let request = line.trim_end_matches(['\n', '\r']);
        if is_exit_command(request) {
            summary.exited = true;
            break;
        }

        summary.requests += 1;
        match converter.convert(request) {
            Ok(conversion) => {
                summary.conversions += 1;
                writeln!(output, "{}\n", conversion)?;
            }
            Err(e) => {
                debug!(input = request, error = %e, "request rejected");
                summary.failures += 1;
                writeln!(output, "{}\n", e)?;
            }
        }
    }

    info!(
        requests = summary.requests,
        conversions = summary.conversions,
        failures = summary.failures,
        "session finished"
    );
    Ok(summary)
}

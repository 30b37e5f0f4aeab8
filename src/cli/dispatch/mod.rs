//! Map validated CLI arguments to an action.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::gate;
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let gate_opts = gate::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        password: gate_opts.password,
        cookie_secure: gate_opts.cookie_secure,
        login_page: gate_opts.login_page,
    }))
}

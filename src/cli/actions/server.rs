use crate::passgate::{self, page::LoginPage, state::GateState};
use anyhow::Result;
use secrecy::SecretString;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub password: SecretString,
    pub cookie_secure: bool,
    pub login_page: Option<PathBuf>,
}

/// Build the gate state from the arguments.
///
/// # Errors
/// Returns an error if a custom login page cannot be read.
pub fn gate_state(args: &Args) -> Result<GateState> {
    let page = match &args.login_page {
        Some(path) => LoginPage::from_file(path)?,
        None => LoginPage::default(),
    };

    Ok(GateState::new(&args.password)
        .with_login_page(page)
        .with_cookie_secure(args.cookie_secure))
}

/// Execute the server action.
/// # Errors
/// Returns an error if the login page cannot be loaded or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let state = gate_state(&args)?;

    debug!("Server args: {:?}", args);

    passgate::new(args.port, state).await
}

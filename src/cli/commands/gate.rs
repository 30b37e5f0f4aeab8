use clap::{Arg, ArgAction, ArgMatches, Command};
use secrecy::SecretString;
use std::path::PathBuf;

pub const ARG_PASSWORD: &str = "password";
pub const ARG_COOKIE_SECURE: &str = "cookie-secure";
pub const ARG_LOGIN_PAGE: &str = "login-page";

#[derive(Debug, Clone)]
pub struct Options {
    pub password: SecretString,
    pub cookie_secure: bool,
    pub login_page: Option<PathBuf>,
}

impl Options {
    /// Parse gate arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the password is missing or blank.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let password = matches
            .get_one::<String>(ARG_PASSWORD)
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{ARG_PASSWORD}"))?;

        Ok(Self {
            password: SecretString::from(password),
            cookie_secure: matches.get_flag(ARG_COOKIE_SECURE),
            login_page: matches.get_one::<PathBuf>(ARG_LOGIN_PAGE).cloned(),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_PASSWORD)
                .long(ARG_PASSWORD)
                .help("Shared password that unlocks a session")
                .env("PASSGATE_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_COOKIE_SECURE)
                .long(ARG_COOKIE_SECURE)
                .help("Mark the session cookie Secure (serve behind HTTPS)")
                .env("PASSGATE_COOKIE_SECURE")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_LOGIN_PAGE)
                .long(ARG_LOGIN_PAGE)
                .help("HTML file served to sessions that are not logged in")
                .env("PASSGATE_LOGIN_PAGE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

//! Shared state for the gate and the login flow.

use secrecy::SecretString;

use super::{
    credential::CredentialVerifier,
    page::LoginPage,
    session::{SessionStore, TokenGenerator},
};

#[derive(Debug)]
pub struct GateState {
    store: SessionStore,
    tokens: TokenGenerator,
    verifier: CredentialVerifier,
    page: LoginPage,
    cookie_secure: bool,
}

impl GateState {
    #[must_use]
    pub fn new(password: &SecretString) -> Self {
        Self {
            store: SessionStore::new(),
            tokens: TokenGenerator::new(),
            verifier: CredentialVerifier::new(password),
            page: LoginPage::default(),
            cookie_secure: false,
        }
    }

    #[must_use]
    pub fn with_login_page(mut self, page: LoginPage) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenGenerator {
        &self.tokens
    }

    #[must_use]
    pub fn verifier(&self) -> &CredentialVerifier {
        &self.verifier
    }

    #[must_use]
    pub fn login_page(&self) -> &LoginPage {
        &self.page
    }

    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }
}

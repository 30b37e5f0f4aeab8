pub mod health;
pub use self::health::health;

pub mod index;
pub use self::index::index;

pub mod login;
pub use self::login::login;

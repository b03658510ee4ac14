//! Authentication use cases
//!
//! Thin orchestration over `AuthService` and `AccessGate`: parse raw inputs
//! into value objects, call the domain, project the result outward.

mod account_view;
mod authorize_request;
mod get_current_account;
mod login;
mod promote_account;
mod register_account;

pub use account_view::AccountView;
pub use authorize_request::AuthorizeRequestUseCase;
pub use get_current_account::GetCurrentAccountUseCase;
pub use login::{LoginCommand, LoginResponse, LoginUseCase, TOKEN_TYPE};
pub use promote_account::PromoteAccountUseCase;
pub use register_account::{RegisterAccountCommand, RegisterAccountUseCase};

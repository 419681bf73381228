pub mod client;
pub mod response;

use crate::entity::login::LoginPayload;
use crate::entity::signup::SignupPayload;
use crate::errors::FrontendResult;

use async_trait::async_trait;

/// Remote API the forms submit to.
///
/// `Ok` carries the server's optional `message`; any non-2xx status or
/// transport failure is an error.
#[async_trait]
pub trait TenantApi {
    async fn signup(&self, payload: &SignupPayload) -> FrontendResult<Option<String>>;
    async fn login(&self, payload: &LoginPayload) -> FrontendResult<Option<String>>;
}

use crate::core::context::RequestContext;
use crate::core::mapping::map_record;
use crate::domain::model::{LookupRequest, LookupResult};
use crate::domain::ports::{ConfigProvider, WhoisProvider};
use crate::utils::error::{LookupError, Result, MISSING_API_KEY_MESSAGE};

pub struct LookupGateway<P: WhoisProvider, C: ConfigProvider> {
    provider: P,
    config: C,
}

impl<P: WhoisProvider, C: ConfigProvider> LookupGateway<P, C> {
    pub fn new(provider: P, config: C) -> Self {
        Self { provider, config }
    }

    /// Context carrying the configured provider deadline.
    pub fn default_context(&self) -> RequestContext {
        match self.config.request_timeout() {
            Some(timeout) => RequestContext::new().with_timeout(timeout),
            None => RequestContext::new(),
        }
    }

    pub async fn lookup(&self, domain_name: &str, view: &str) -> Result<LookupResult> {
        let request = LookupRequest::new(domain_name, view)?;
        self.execute(&request, &self.default_context()).await
    }

    /// Runs an already-validated request under the caller's context.
    pub async fn execute(
        &self,
        request: &LookupRequest,
        ctx: &RequestContext,
    ) -> Result<LookupResult> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| LookupError::config(MISSING_API_KEY_MESSAGE))?;

        tracing::debug!(
            "Looking up {} ({} view)",
            request.domain_name,
            request.view
        );
        let response = ctx
            .run(self.provider.fetch(api_key, &request.domain_name, ctx))
            .await?;

        let Some(record) = response.whois_record else {
            if let Some(provider_error) = response.error_message {
                tracing::warn!(
                    "Provider reported an error for {}: {} ({})",
                    request.domain_name,
                    provider_error.msg.as_deref().unwrap_or("no message"),
                    provider_error.error_code.as_deref().unwrap_or("no code"),
                );
            }
            return Err(LookupError::NotFoundError);
        };

        Ok(map_record(
            &record,
            &request.domain_name,
            request.view,
            self.config.date_style(),
        ))
    }
}

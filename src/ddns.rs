use crate::{
    api::UpdateClient,
    config::{mask, Update},
    logging::Logger,
};
use anyhow::{anyhow, bail, Result};

/// Substring DuckDNS puts in the body when an update is rejected.
pub const FAILURE_MARKER: &str = "KO";

pub struct DuckDns<'a, C> {
    client: C,
    logger: &'a Logger,
}

impl<'a, C: UpdateClient> DuckDns<'a, C> {
    pub fn new(client: C, logger: &'a Logger) -> Self {
        Self { client, logger }
    }

    async fn update_record(&self, name: &str, token: &str) -> Result<()> {
        self.logger.debug(format_args!(
            "Update string: {}",
            self.client.update_url(name, &mask(token))
        ));

        let body = self.client.update(name, token).await?;

        if body.contains(FAILURE_MARKER) {
            bail!("Error updating {} with DuckDNS", name);
        }

        Ok(())
    }

    /// Updates every name in order. A failing name does not stop the others;
    /// all failures come back as one error, one message per line.
    pub async fn update_all_records(&self, update: &Update) -> Result<()> {
        self.logger
            .debug(format_args!("Dumping update params: names={:?}", update.names));

        if !update.is_valid() {
            bail!("Arguments not set for update!");
        }

        let mut errors = Vec::new();

        for name in &update.names {
            match self.update_record(name, &update.token).await {
                Ok(()) => {
                    self.logger
                        .debug(format_args!("updated DuckDNS for name {}", name));
                }
                Err(e) => {
                    self.logger.error(format_args!("{:#}", e));
                    errors.push(format!("{:#}", e));
                }
            }
        }

        if !errors.is_empty() {
            return Err(anyhow!(errors.join("\n")));
        }

        Ok(())
    }
}

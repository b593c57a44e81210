use govcheck_types::argentina::{
    ArgentinaDniRequest, ArgentinaDniResponse, ArgentinaRenaperPremiumRequest,
    ArgentinaRenaperPremiumResponse, ArgentinaRenaperRequest, ArgentinaRenaperResponse,
};

use crate::client::Client;
use crate::error::ClientResult;

impl Client {
    /// Verifies a DNI (Documento Nacional de Identidad) from its card number
    /// and issue date.
    ///
    /// MetaMap checks with the National Direction of Migration that the DNI
    /// exists and that the date of issue matches the last card issued.
    ///
    /// # Errors
    ///
    /// Transport failures only; a rejected document comes back as
    /// `Ok(response)` with `response.error` set.
    pub async fn argentina_dni(
        &self,
        request: &ArgentinaDniRequest,
    ) -> ClientResult<ArgentinaDniResponse> {
        self.send(request).await
    }

    /// Verifies a DNI number and its holder against RENAPER (Registro
    /// Nacional de las Personas).
    ///
    /// Does not validate the card itself, use [`Client::argentina_dni`] for
    /// that.
    ///
    /// # Errors
    ///
    /// Transport failures only; a rejected document comes back as
    /// `Ok(response)` with `response.error` set.
    pub async fn argentina_renaper(
        &self,
        request: &ArgentinaRenaperRequest,
    ) -> ClientResult<ArgentinaRenaperResponse> {
        self.send(request).await
    }

    /// RENAPER check that also matches the issue date and copy of the card,
    /// returning the full document record.
    ///
    /// Includes the DNI card validation.
    ///
    /// # Errors
    ///
    /// Transport failures only; a rejected document comes back as
    /// `Ok(response)` with `response.error` set.
    pub async fn argentina_renaper_premium(
        &self,
        request: &ArgentinaRenaperPremiumRequest,
    ) -> ClientResult<ArgentinaRenaperPremiumResponse> {
        self.send(request).await
    }
}
